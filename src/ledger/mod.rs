//! Budget domain model: entries, goals, the owning ledger and its reports.

pub mod category;
pub mod entry;
pub mod format;
pub mod goal;
pub mod income;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod report;

pub use category::{ExpenseCategory, FIXED_CATEGORY_COUNT, FIXED_CATEGORY_NAMES};
pub use entry::{BudgetEntry, Classification};
pub use format::LineFormat;
pub use goal::FinancialGoal;
pub use income::{parse_amount, parse_income};
pub use ledger::BudgetLedger;
pub use report::{
    AnalysisReport, AnalysisRow, BudgetReport, EntryLine, ExportFormat, GoalLine, PercentageRow,
};
