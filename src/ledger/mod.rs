//! Expense ledger, categories, and the date keys used to group expenses.

pub mod category;
pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod period;

pub use category::{is_valid_category, Category};
pub use expense::{parse_amount, parse_budget, ExpenseRecord};
pub use ledger::Ledger;
pub use period::{parse_date, MonthKey, WeekRange};
