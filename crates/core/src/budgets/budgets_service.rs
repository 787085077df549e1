use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;

use super::budgets_model::Budget;
use super::budgets_traits::{AccountingServiceTrait, BudgetRepositoryTrait};

/// Sums monthly budgets over arbitrary inclusive date ranges,
/// apportioning each month's amount evenly across its days.
pub struct AccountingService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl AccountingService {
    pub fn new(budget_repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        AccountingService { budget_repository }
    }

    /// Amount of `budget` falling inside the inclusive range `[start, end]`.
    ///
    /// The multiplication happens before the division so that a range
    /// covering the whole month reconstructs the amount exactly under
    /// decimal arithmetic.
    fn contribution(budget: &Budget, start: NaiveDate, end: NaiveDate) -> Result<Decimal> {
        let first_day = budget.first_day()?;
        let last_day = budget.last_day()?;

        // An inverted input range clamps to an empty overlap as well.
        let overlap_start = start.max(first_day);
        let overlap_end = end.min(last_day);
        if overlap_start > overlap_end {
            return Ok(Decimal::ZERO);
        }

        let days_in_overlap = (overlap_end - overlap_start).num_days() + 1;
        let days_in_month = (last_day - first_day).num_days() + 1;
        Ok(budget.amount * Decimal::from(days_in_overlap) / Decimal::from(days_in_month))
    }
}

impl AccountingServiceTrait for AccountingService {
    fn total_amount(&self, start: NaiveDate, end: NaiveDate) -> Result<Decimal> {
        let budgets = self.budget_repository.get_all()?;
        debug!(
            "Calculating total amount over {} budgets between {} and {}",
            budgets.len(),
            start,
            end
        );

        let mut total = Decimal::ZERO;
        for budget in &budgets {
            total += Self::contribution(budget, start, end)?;
        }
        Ok(total)
    }
}
