//! In-memory budget repository.

use std::sync::RwLock;

use crate::errors::{Error, Result};

use super::budgets_model::Budget;
use super::budgets_traits::BudgetRepositoryTrait;

/// `BudgetRepositoryTrait` implementation backed by an in-process list.
///
/// Preserves insertion order and duplicated months.
#[derive(Default)]
pub struct InMemoryBudgetRepository {
    budgets: RwLock<Vec<Budget>>,
}

impl InMemoryBudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budgets(budgets: Vec<Budget>) -> Self {
        Self {
            budgets: RwLock::new(budgets),
        }
    }

    pub fn set_budgets(&self, budgets: Vec<Budget>) -> Result<()> {
        let mut guard = self
            .budgets
            .write()
            .map_err(|_| Error::Unexpected("budget store lock poisoned".to_string()))?;
        *guard = budgets;
        Ok(())
    }
}

impl BudgetRepositoryTrait for InMemoryBudgetRepository {
    fn get_all(&self) -> Result<Vec<Budget>> {
        let guard = self
            .budgets
            .read()
            .map_err(|_| Error::Unexpected("budget store lock poisoned".to_string()))?;
        Ok(guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_get_all_preserves_order_and_duplicates() {
        let repository = InMemoryBudgetRepository::with_budgets(vec![
            Budget::new("201005", dec!(31)),
            Budget::new("201004", dec!(300)),
            Budget::new("201004", dec!(30)),
        ]);

        let budgets = repository.get_all().unwrap();

        assert_eq!(budgets.len(), 3);
        assert_eq!(budgets[0].year_month, "201005");
        assert_eq!(budgets[1].year_month, "201004");
        assert_eq!(budgets[2].year_month, "201004");
    }

    #[test]
    fn test_set_budgets_replaces_contents() {
        let repository = InMemoryBudgetRepository::new();
        assert!(repository.get_all().unwrap().is_empty());

        repository
            .set_budgets(vec![Budget::new("201004", dec!(300))])
            .unwrap();

        assert_eq!(repository.get_all().unwrap().len(), 1);
    }
}
