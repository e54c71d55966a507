//! Defines the expense model and the database queries for expenses.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::ExpenseId};

// ============================================================================
// MODELS
// ============================================================================

/// A record of money spent.
///
/// To create a new `Expense`, use [Expense::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID assigned by the database. Never reused, even after deletion.
    pub id: ExpenseId,
    /// How much was spent. Currency agnostic.
    pub amount: f64,
    /// The category label, e.g. "Food".
    pub category: String,
    /// Free text describing the expense, may be empty.
    pub description: String,
    /// The day the money was spent.
    pub date: Date,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(amount: f64, category: &str, description: &str, date: Date) -> ExpenseBuilder {
        ExpenseBuilder {
            amount,
            category: category.to_owned(),
            description: description.to_owned(),
            date,
        }
    }
}

/// The fields of an [Expense] that the caller supplies.
///
/// Used both for inserting a new expense and for overwriting an existing one.
/// Storage does not validate these fields, negative amounts and unknown
/// categories are accepted as-is.
#[derive(Debug, PartialEq, Clone)]
pub struct ExpenseBuilder {
    /// How much was spent.
    pub amount: f64,
    /// The category label.
    pub category: String,
    /// Free text describing the expense.
    pub description: String,
    /// The day the money was spent.
    pub date: Date,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Insert a new expense and return it with its assigned ID.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn create_expense(builder: ExpenseBuilder, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "INSERT INTO expenses (amount, category, description, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, amount, category, description, date",
        )?
        .query_row(
            (
                builder.amount,
                builder.category,
                builder.description,
                builder.date,
            ),
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve an expense from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a stored expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare("SELECT id, amount, category, description, date FROM expenses WHERE id = :id")?
        .query_row(&[(":id", &id)], map_expense_row)?;

    Ok(expense)
}

/// Retrieve every stored expense in the order they were created.
///
/// Returns an empty vector if there are no expenses.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare("SELECT id, amount, category, description, date FROM expenses ORDER BY id ASC")?
        .query_map([], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// Overwrite every field except the ID of the expense `id`.
///
/// Returns `false` without changing anything if no expense has that ID.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn update_expense(
    id: ExpenseId,
    builder: ExpenseBuilder,
    connection: &Connection,
) -> Result<bool, Error> {
    let rows_affected = connection.execute(
        "UPDATE expenses SET amount = ?1, category = ?2, description = ?3, date = ?4 WHERE id = ?5",
        (
            builder.amount,
            builder.category,
            builder.description,
            builder.date,
            id,
        ),
    )?;

    Ok(rows_affected > 0)
}

/// Delete the expense `id`.
///
/// Returns `false` if no expense has that ID, so deleting twice is harmless.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<bool, Error> {
    let rows_affected = connection.execute("DELETE FROM expenses WHERE id = ?1", [id])?;

    Ok(rows_affected > 0)
}

/// Get the total number of expenses in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_expenses(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM expenses;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the `expenses` table in the database.
///
/// The columns are nullable so that databases written by earlier versions of
/// the tracker open unchanged.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL,
                category TEXT,
                description TEXT,
                date TEXT
                )",
        (),
    )?;

    // Used by the dashboard's monthly grouping.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Expense.
///
/// A missing category or description reads as an empty string.
fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let category: Option<String> = row.get(2)?;
    let description: Option<String> = row.get(3)?;
    let date = row.get(4)?;

    Ok(Expense {
        id,
        amount,
        category: category.unwrap_or_default(),
        description: description.unwrap_or_default(),
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================
