//! Expense records: storage, forms and the pages for managing them.

mod category;
mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod expenses_page;
mod form;

pub use category::Category;
pub use self::core::{
    Expense, ExpenseBuilder, count_expenses, create_expense, create_expense_table,
    delete_expense, get_all_expenses, get_expense, update_expense,
};
pub use create_endpoint::create_expense_endpoint;
pub use create_page::get_new_expense_page;
pub use delete_endpoint::delete_expense_endpoint;
pub use edit_endpoint::update_expense_endpoint;
pub use edit_page::get_edit_expense_page;
pub use expenses_page::get_expenses_page;
