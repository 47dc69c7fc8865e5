//! Data source seams for the dashboard fetch stage.
//!
//! The engine never talks to a database directly. Anything able to produce
//! budget and expense snapshots can stand behind these traits: the JSON store
//! used by the CLI, a remote document database, or [`InMemorySource`] in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use spendwise_domain::{Budget, Expense};

use crate::{seed::SeedData, CoreError};

#[async_trait]
pub trait BudgetSource: Send + Sync {
    async fn fetch_budgets(&self) -> Result<Vec<Budget>, CoreError>;

    /// Writes sample budgets when the source holds none. Sources without
    /// seed data keep the default no-op.
    async fn seed_budgets_if_empty(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

#[async_trait]
pub trait ExpenseSource: Send + Sync {
    async fn fetch_expenses(&self) -> Result<Vec<Expense>, CoreError>;

    async fn seed_expenses_if_empty(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Budget and expense source backed by process memory.
#[derive(Debug, Default)]
pub struct InMemorySource {
    budgets: RwLock<Vec<Budget>>,
    expenses: RwLock<Vec<Expense>>,
    seed: SeedData,
}

impl InMemorySource {
    pub fn new(budgets: Vec<Budget>, expenses: Vec<Expense>) -> Self {
        Self {
            budgets: RwLock::new(budgets),
            expenses: RwLock::new(expenses),
            seed: SeedData::default(),
        }
    }

    pub fn with_seed(mut self, seed: SeedData) -> Self {
        self.seed = seed;
        self
    }
}

#[async_trait]
impl BudgetSource for InMemorySource {
    async fn fetch_budgets(&self) -> Result<Vec<Budget>, CoreError> {
        Ok(self.budgets.read().await.clone())
    }

    async fn seed_budgets_if_empty(&self) -> Result<(), CoreError> {
        let mut budgets = self.budgets.write().await;
        if budgets.is_empty() {
            budgets.extend(self.seed.budgets.iter().cloned());
        }
        Ok(())
    }
}

#[async_trait]
impl ExpenseSource for InMemorySource {
    async fn fetch_expenses(&self) -> Result<Vec<Expense>, CoreError> {
        Ok(self.expenses.read().await.clone())
    }

    async fn seed_expenses_if_empty(&self) -> Result<(), CoreError> {
        let mut expenses = self.expenses.write().await;
        if expenses.is_empty() {
            expenses.extend(self.seed.expenses.iter().cloned());
        }
        Ok(())
    }
}
