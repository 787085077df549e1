//! Budgets module - domain models, services, and traits.

mod budgets_model;
mod budgets_repository;
mod budgets_service;
mod budgets_traits;

pub use budgets_model::Budget;
pub use budgets_repository::InMemoryBudgetRepository;
pub use budgets_service::AccountingService;
pub use budgets_traits::{AccountingServiceTrait, BudgetRepositoryTrait};
