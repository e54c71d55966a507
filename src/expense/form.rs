//! The form data and shared form fields for creating and editing expenses.

use axum_extra::extract::{Form, FormRejection};
use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    expense::{Category, Expense, ExpenseBuilder},
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The form data for creating or updating an expense.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseForm {
    /// How much was spent, must be zero or more.
    pub amount: f64,
    /// The label of one of the fixed spending categories.
    pub category: String,
    /// Text detailing the expense.
    #[serde(default)]
    pub description: String,
    /// The day the money was spent.
    pub date: Date,
}

impl ExpenseForm {
    /// Check the user input and convert it into the fields storage expects.
    ///
    /// # Errors
    /// Returns an [Error::InvalidAmount] if the amount is NaN or infinite,
    /// an [Error::NegativeAmount] if it is below zero, or an
    /// [Error::InvalidCategory] if the category is not one of [Category::ALL].
    pub fn validate(self) -> Result<ExpenseBuilder, Error> {
        if !self.amount.is_finite() {
            return Err(Error::InvalidAmount);
        }

        if self.amount < 0.0 {
            return Err(Error::NegativeAmount(self.amount));
        }

        let category: Category = self.category.parse()?;

        Ok(Expense::build(
            self.amount,
            category.as_str(),
            self.description.trim(),
            self.date,
        ))
    }
}

/// Validate a submitted expense form, including one that failed to deserialize.
///
/// A body that does not fit [ExpenseForm], such as an empty amount or a
/// malformed date, becomes an [Error::InvalidForm] so it can be shown as an alert.
pub fn validate_submission(
    submission: Result<Form<ExpenseForm>, FormRejection>,
) -> Result<ExpenseBuilder, Error> {
    match submission {
        Ok(Form(form)) => form.validate(),
        Err(rejection) => {
            tracing::debug!("could not read expense form: {rejection}");
            Err(Error::InvalidForm(rejection.body_text()))
        }
    }
}

/// Values to prefill the expense form with.
pub struct ExpenseFormDefaults<'a> {
    pub amount: Option<f64>,
    pub category: Option<&'a str>,
    pub description: Option<&'a str>,
    pub date: Date,
}

impl<'a> ExpenseFormDefaults<'a> {
    /// An empty form dated `today`.
    pub fn new(today: Date) -> Self {
        Self {
            amount: None,
            category: None,
            description: None,
            date: today,
        }
    }

    /// A form filled in with the current values of `expense`.
    pub fn from_expense(expense: &'a Expense) -> Self {
        Self {
            amount: Some(expense.amount),
            category: Some(expense.category.as_str()),
            description: Some(expense.description.as_str()),
            date: expense.date,
        }
    }
}

pub fn expense_form_fields(defaults: &ExpenseFormDefaults<'_>) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{amount:.2}"));

    html! {
        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    required
                    autofocus
                    value=[amount_str.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            select
                name="category"
                id="category"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for category in Category::ALL {
                    @if Some(category.as_str()) == defaults.category {
                        option value=(category) selected { (category) }
                    } @else {
                        option value=(category) { (category) }
                    }
                }
            }
        }

        div
        {
            label
                for="description"
                class=(FORM_LABEL_STYLE)
            {
                "Description"
            }

            input
                name="description"
                id="description"
                type="text"
                placeholder="Description"
                value=[defaults.description]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                required
                value=(defaults.date)
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
