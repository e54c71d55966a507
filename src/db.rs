//! Opening and initializing the application's SQLite database.

use std::{fs, path::Path};

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, expense::create_expense_table};

/// Create the tables for the domain models if they do not already exist.
///
/// Safe to call more than once, existing rows are left untouched.
///
/// # Errors
/// Returns an [Error::SqlError] if the schema could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Open the SQLite database at `path`, creating its parent directory first if
/// it does not exist yet.
///
/// The returned connection has not been initialized, pass it to
/// [initialize] (or [crate::AppState::new]) before use.
///
/// # Errors
/// Returns an [Error::StorageLocation] if the parent directory could not be
/// created, or an [Error::SqlError] if SQLite could not open the file.
pub fn open_database(path: &Path) -> Result<Connection, Error> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|error| {
            tracing::error!("could not create directory {}: {error}", parent.display());
            Error::StorageLocation {
                path: parent.display().to_string(),
                reason: error.to_string(),
            }
        })?;
    }

    Ok(Connection::open(path)?)
}

#[cfg(test)]
mod tests {
    use std::{fs, process};

    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::{initialize, open_database},
        expense::{Expense, create_expense, get_all_expenses},
    };

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("first initialize failed");
        create_expense(
            Expense::build(12.5, "Food", "Lunch", date!(2024 - 03 - 01)),
            &connection,
        )
        .unwrap();

        initialize(&connection).expect("second initialize failed");

        let expenses = get_all_expenses(&connection).unwrap();
        assert_eq!(expenses.len(), 1, "initialize should not drop existing rows");
    }

    #[test]
    fn open_database_creates_missing_directory() {
        let dir = std::env::temp_dir().join(format!("expense_tracker_test_{}", process::id()));
        let path = dir.join("nested").join("expenses.db");
        let _ = fs::remove_dir_all(&dir);

        let connection = open_database(&path).expect("could not open database");
        initialize(&connection).expect("could not initialize database");

        assert!(path.exists(), "want database file at {}", path.display());
        drop(connection);
        let _ = fs::remove_dir_all(&dir);
    }
}
