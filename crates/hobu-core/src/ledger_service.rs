//! Universe provisioning and the single mutation entry point.

use tracing::debug;

use hobu_domain::{IncomeSources, Ledger, LedgerChange, MonthKey, MonthPeriod};

use crate::{
    calendar,
    distribution_service::{DistributionService, PlacedExpense, SkippedInstallment},
    BudgetService, CoreError, ExpenseService,
};

#[derive(Debug, Clone)]
/// Result of applying a [`LedgerChange`]: the new snapshot, plus the
/// distribution report when the change created expense records.
pub struct Applied {
    pub ledger: Ledger,
    pub placed: Vec<PlacedExpense>,
    pub skipped: Vec<SkippedInstallment>,
}

impl Applied {
    fn snapshot(ledger: Ledger) -> Self {
        Self {
            ledger,
            placed: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Provides constructor and mutation helpers for [`Ledger`] snapshots.
pub struct LedgerService;

impl LedgerService {
    /// Provisions the fixed period universe: `months` consecutive
    /// buckets starting at `start`, each seeded with a copy of `income`
    /// and the derived 50/30/20 budget. The core never grows the
    /// universe afterwards.
    pub fn provision(
        name: impl Into<String>,
        start: MonthKey,
        months: u32,
        income: &IncomeSources,
    ) -> Result<Ledger, CoreError> {
        if months == 0 {
            return Err(CoreError::Validation(
                "a ledger needs at least one period".into(),
            ));
        }
        let mut periods = Vec::with_capacity(months as usize);
        for offset in 0..months {
            let resolved = calendar::resolve(start.first_day(), 1, offset as i32);
            periods.push(MonthPeriod::new(resolved.key).with_income(income.clone()));
        }
        Ok(Ledger::new(name, periods)?)
    }

    /// Applies one change to a snapshot and returns the new snapshot.
    /// The input is never modified; the caller owns durable storage and
    /// re-broadcasting the result.
    pub fn apply(ledger: &Ledger, change: LedgerChange) -> Result<Applied, CoreError> {
        match change {
            LedgerChange::AddExpense(request) => {
                debug!("distributing expense `{}`", request.description);
                let distribution = DistributionService::distribute(ledger, &request)?;
                Ok(Applied {
                    ledger: distribution.ledger,
                    placed: distribution.placed,
                    skipped: distribution.skipped,
                })
            }
            LedgerChange::RemoveExpense { period, expense_id } => {
                ExpenseService::remove(ledger, period, expense_id).map(Applied::snapshot)
            }
            LedgerChange::EditExpense {
                period,
                expense_id,
                patch,
            } => ExpenseService::edit(ledger, period, expense_id, &patch).map(Applied::snapshot),
            LedgerChange::SetIncome {
                period,
                source,
                amount,
            } => BudgetService::set_income(ledger, period, &source, amount).map(Applied::snapshot),
            LedgerChange::ReplicateIncome { from } => {
                BudgetService::replicate_income(ledger, from).map(Applied::snapshot)
            }
            LedgerChange::SetBudgetTarget {
                period,
                category,
                amount,
            } => BudgetService::set_budget_target(ledger, period, category, amount)
                .map(Applied::snapshot),
        }
    }
}
