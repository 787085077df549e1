use crate::budgets::budgets_model::Budget;
use crate::errors::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Trait for budget repository operations
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Returns every known budget. No ordering or uniqueness guarantee;
    /// duplicated months are returned as-is.
    fn get_all(&self) -> Result<Vec<Budget>>;
}

/// Trait for accounting service operations
pub trait AccountingServiceTrait: Send + Sync {
    fn total_amount(&self, start: NaiveDate, end: NaiveDate) -> Result<Decimal>;
}
