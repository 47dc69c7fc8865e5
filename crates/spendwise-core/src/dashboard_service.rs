//! Fetch-then-compute pipeline behind the dashboard.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::NaiveDate;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use spendwise_domain::{Budget, Dashboard, Expense};

use crate::{
    source::{BudgetSource, ExpenseSource},
    summary_service::SummaryService,
    CoreError,
};

/// Budgets and expenses fetched for one refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub budgets: Vec<Budget>,
    pub expenses: Vec<Expense>,
}

/// Latest dashboard state published to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Idle,
    Computing,
    Ready(Dashboard),
    Failed(String),
}

/// Orchestrates the async fetch stage and the pure compute stage.
pub struct DashboardService {
    budgets: Arc<dyn BudgetSource>,
    expenses: Arc<dyn ExpenseSource>,
    state: watch::Sender<DashboardState>,
    generation: AtomicU64,
}

impl DashboardService {
    pub fn new(budgets: Arc<dyn BudgetSource>, expenses: Arc<dyn ExpenseSource>) -> Self {
        let (state, _) = watch::channel(DashboardState::Idle);
        Self {
            budgets,
            expenses,
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Uses a single source for both budgets and expenses.
    pub fn from_source<S>(source: Arc<S>) -> Self
    where
        S: BudgetSource + ExpenseSource + 'static,
    {
        Self::new(source.clone(), source)
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Seeds empty sources, then fetches budgets followed by expenses.
    ///
    /// Seeding failures are logged and ignored; fetch failures abort the load.
    pub async fn load(&self) -> Result<Snapshot, CoreError> {
        if let Err(err) = self.budgets.seed_budgets_if_empty().await {
            warn!(error = %err, "seeding budgets failed, continuing with stored data");
        }
        if let Err(err) = self.expenses.seed_expenses_if_empty().await {
            warn!(error = %err, "seeding expenses failed, continuing with stored data");
        }

        let budgets = self
            .budgets
            .fetch_budgets()
            .await
            .map_err(|err| CoreError::loading("budgets", err))?;
        let expenses = self
            .expenses
            .fetch_expenses()
            .await
            .map_err(|err| CoreError::loading("expenses", err))?;
        debug!(
            budgets = budgets.len(),
            expenses = expenses.len(),
            "dashboard snapshot loaded"
        );
        Ok(Snapshot { budgets, expenses })
    }

    pub async fn refresh(&self, current_date: NaiveDate) -> Result<Dashboard, CoreError> {
        let snapshot = self.load().await?;
        Ok(SummaryService::dashboard(
            current_date,
            &snapshot.budgets,
            &snapshot.expenses,
        ))
    }

    /// Refresh for a textual current date; see [`SummaryService::dashboard_for_text`].
    pub async fn refresh_text(&self, current_date: &str) -> Result<Dashboard, CoreError> {
        let snapshot = self.load().await?;
        Ok(SummaryService::dashboard_for_text(
            current_date,
            &snapshot.budgets,
            &snapshot.expenses,
        ))
    }

    /// Runs [`DashboardService::refresh`] on the tokio runtime and publishes the
    /// outcome to subscribers. Only the most recently requested refresh may
    /// publish; a result that finishes after a newer request is dropped.
    pub fn spawn_refresh(self: &Arc<Self>, current_date: NaiveDate) -> JoinHandle<()> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(DashboardState::Computing);
        let service = Arc::clone(self);
        tokio::spawn(async move {
            let next = match service.refresh(current_date).await {
                Ok(dashboard) => {
                    info!(
                        %current_date,
                        total_spent = dashboard.summary.total_spent,
                        total_budget = dashboard.summary.total_budget,
                        "dashboard refreshed"
                    );
                    DashboardState::Ready(dashboard)
                }
                Err(err) => {
                    warn!(%current_date, error = %err, "dashboard refresh failed");
                    DashboardState::Failed(err.to_string())
                }
            };
            let published = service.state.send_if_modified(|state| {
                if service.generation.load(Ordering::SeqCst) != ticket {
                    return false;
                }
                *state = next;
                true
            });
            if !published {
                debug!(%current_date, "discarding superseded dashboard refresh");
            }
        })
    }
}
