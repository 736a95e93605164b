//! Income edits and the derived 50/30/20 budget recalculation.

use hobu_domain::{Budget, ExpenseCategory, Ledger, MonthKey};

use crate::CoreError;

/// Stateless income/budget utilities operating over [`Ledger`] snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Updates one income contribution and re-derives the period's
    /// budget from the new total income.
    ///
    /// The re-derivation unconditionally overwrites any manually edited
    /// budget targets for that period. Expense changes and direct
    /// budget edits never trigger it; only income changes do.
    pub fn set_income(
        ledger: &Ledger,
        key: MonthKey,
        source: &str,
        amount: f64,
    ) -> Result<Ledger, CoreError> {
        let mut next = ledger.clone();
        let period = next
            .period_mut(key)
            .ok_or(CoreError::PeriodNotProvisioned(key))?;
        period.income.set(source, amount);
        period.budget = Budget::split(period.income.total());
        next.touch();
        Ok(next)
    }

    /// Copies the income breakdown of `from` into every strictly later
    /// period, re-deriving each touched period's budget. The source
    /// period itself is left untouched.
    pub fn replicate_income(ledger: &Ledger, from: MonthKey) -> Result<Ledger, CoreError> {
        let income = ledger
            .period(from)
            .ok_or(CoreError::PeriodNotProvisioned(from))?
            .income
            .clone();
        let budget = Budget::split(income.total());
        let from_ordinal = from.ordinal();

        let mut next = ledger.clone();
        for period in next.periods_mut() {
            if period.key.ordinal() > from_ordinal {
                period.income = income.clone();
                period.budget = budget;
            }
        }
        next.touch();
        Ok(next)
    }

    /// Directly overrides one budget target for one period. The edit
    /// survives until the next income change re-derives the budget.
    pub fn set_budget_target(
        ledger: &Ledger,
        key: MonthKey,
        category: ExpenseCategory,
        amount: f64,
    ) -> Result<Ledger, CoreError> {
        let mut next = ledger.clone();
        let period = next
            .period_mut(key)
            .ok_or(CoreError::PeriodNotProvisioned(key))?;
        period.budget.set_target(category, amount);
        next.touch();
        Ok(next)
    }
}
