//! Defines the endpoint for recording a new expense.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, FormRejection};
use axum_htmx::HxRedirect;
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    expense::{
        core::create_expense,
        form::{ExpenseForm, validate_submission},
    },
};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for recording a new expense, redirects to the expenses view on success.
///
/// A form that cannot be read, such as one with an empty amount, is answered
/// with an alert like any other invalid input.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    form: Result<Form<ExpenseForm>, FormRejection>,
) -> Response {
    let builder = match validate_submission(form) {
        Ok(builder) => builder,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    if let Err(error) = create_expense(builder, &connection) {
        tracing::error!("could not create expense: {error}");

        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        endpoints,
        expense::{
            Expense, create_endpoint::CreateExpenseState, create_expense_endpoint,
            form::ExpenseForm, get_all_expenses,
        },
        test_utils::{assert_hx_redirect, assert_valid_html, parse_html_fragment},
    };

    fn get_test_state() -> CreateExpenseState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        CreateExpenseState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn can_create_expense() {
        let state = get_test_state();
        let form = ExpenseForm {
            amount: 12.3,
            category: "Food".to_owned(),
            description: "Lunch".to_owned(),
            date: date!(2024 - 01 - 05),
        };

        let response = create_expense_endpoint(State(state.clone()), Ok(Form(form))).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::EXPENSES_VIEW);

        let connection = state.db_connection.lock().unwrap();
        let expenses = get_all_expenses(&connection).unwrap();
        assert_eq!(
            expenses,
            vec![Expense {
                id: 1,
                amount: 12.3,
                category: "Food".to_owned(),
                description: "Lunch".to_owned(),
                date: date!(2024 - 01 - 05),
            }]
        );
    }

    #[tokio::test]
    async fn negative_amount_is_rejected() {
        let state = get_test_state();
        let form = ExpenseForm {
            amount: -5.0,
            category: "Other".to_owned(),
            description: String::new(),
            date: date!(2024 - 01 - 05),
        };

        let response = create_expense_endpoint(State(state.clone()), Ok(Form(form))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_all_expenses(&connection), Ok(vec![]));
    }
}
