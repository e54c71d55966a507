//! Dashboard HTTP handler and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    dashboard::{
        aggregation::ExpenseSummary,
        cards::metric_cards_view,
        charts::{
            DashboardChart, ECHARTS_SCRIPT_URL, category_pie_chart, charts_script, charts_view,
            monthly_line_chart,
        },
        tables::category_breakdown_table,
    },
    endpoints,
    expense::get_all_expenses,
    html::{HeadElement, base, link},
    navigation::NavBar,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for reading expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Display a page with metrics and charts computed from every expense.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let expenses = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_all_expenses(&connection)
            .inspect_err(|error| tracing::error!("Could not get expenses for dashboard: {error}"))?
    };

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    match ExpenseSummary::new(&expenses) {
        Some(summary) => Ok(dashboard_view(nav_bar, &summary).into_response()),
        None => Ok(dashboard_no_data_view(nav_bar).into_response()),
    }
}

/// Creates the dashboard charts from the aggregated expenses.
///
/// The chart options are serialized to JSON for ECharts consumption.
fn build_dashboard_charts(summary: &ExpenseSummary) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "category-chart",
            options: category_pie_chart(&summary.by_category).to_string(),
        },
        DashboardChart {
            id: "monthly-chart",
            options: monthly_line_chart(&summary.by_month).to_string(),
        },
    ]
}

/// Renders the dashboard page when no expenses have been recorded.
fn dashboard_no_data_view(nav_bar: NavBar<'_>) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_expense_link = link(endpoints::NEW_EXPENSE_VIEW, "Add an expense");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "No data available for analytics"
            }

            p
            {
                (new_expense_link) " to see totals and trends here."
            }
        }
    );

    base("Dashboard", &[], &content)
}

/// Renders the main dashboard page with metric cards, charts and the category table.
fn dashboard_view(nav_bar: NavBar<'_>, summary: &ExpenseSummary) -> Markup {
    let nav_bar = nav_bar.into_html();
    let charts = build_dashboard_charts(summary);

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (metric_cards_view(summary))
            (charts_view(&charts))
            (category_breakdown_table(&summary.by_category))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
        charts_script(&charts),
    ];

    base("Dashboard", &scripts, &content)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        db::initialize,
        expense::{Expense, create_expense},
        test_utils::{assert_content_type, assert_valid_html, parse_html_document},
    };

    use super::{DashboardState, get_dashboard_page};

    fn get_test_state() -> DashboardState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        DashboardState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn text_of(html: &Html, selector: &str) -> Option<String> {
        html.select(&Selector::parse(selector).unwrap())
            .next()
            .map(|element| element.text().collect::<String>().trim().to_owned())
    }

    #[tokio::test]
    async fn shows_empty_state_without_expenses() {
        let response = get_dashboard_page(State(get_test_state()))
            .await
            .expect("could not render dashboard");

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(
            text_of(&html, "h2").as_deref(),
            Some("No data available for analytics")
        );
        assert!(text_of(&html, "#charts").is_none());
    }

    #[tokio::test]
    async fn shows_metrics_and_charts() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            for (amount, category, date) in [
                (100.0, "Food", date!(2024 - 01 - 05)),
                (50.0, "Food", date!(2024 - 02 - 10)),
                (75.0, "Transport", date!(2024 - 02 - 12)),
            ] {
                create_expense(Expense::build(amount, category, "", date), &connection).unwrap();
            }
        }

        let response = get_dashboard_page(State(state))
            .await
            .expect("could not render dashboard");

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        assert_eq!(
            text_of(&html, "div[data-metric=\"Total Spent\"] p").as_deref(),
            Some("$225.00")
        );
        assert_eq!(
            text_of(&html, "div[data-metric=\"Average Expense\"] p").as_deref(),
            Some("$75.00")
        );
        assert_eq!(
            text_of(&html, "div[data-metric=\"Top Category\"] p").as_deref(),
            Some("Food")
        );

        for id in ["#category-chart", "#monthly-chart", "#category-breakdown"] {
            assert!(
                html.select(&Selector::parse(id).unwrap()).next().is_some(),
                "missing {id}"
            );
        }

        let scripts = html
            .select(&Selector::parse("script").unwrap())
            .map(|script| script.text().collect::<String>())
            .collect::<String>();
        assert!(scripts.contains("2024-01"), "want month labels in chart script");
        assert!(scripts.contains("2024-02"), "want month labels in chart script");
    }
}
