//! Read-only month summaries for the reporting collaborators.

use hobu_domain::{CategorySpend, ExpenseCategory, Ledger, MonthKey, MonthSummary};

/// Builds the per-month totals consumed by the dashboard and the
/// AI-summary collaborator.
pub struct SummaryService;

impl SummaryService {
    /// Summarizes one month, or `None` when the period is not part of
    /// the universe.
    pub fn summarize(ledger: &Ledger, key: MonthKey) -> Option<MonthSummary> {
        let period = ledger.period(key)?;
        let total_income = period.total_income();
        let total_expenses = period.total_expenses();
        let per_category = ExpenseCategory::ALL
            .iter()
            .map(|&category| {
                let budgeted = period.budget.target(category);
                let spent = period.spent_in(category);
                CategorySpend {
                    category,
                    budgeted,
                    spent,
                    remaining: budgeted - spent,
                }
            })
            .collect();
        Some(MonthSummary {
            key,
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            per_category,
        })
    }

    /// Summaries for the whole universe, in chronological order.
    pub fn summarize_all(ledger: &Ledger) -> Vec<MonthSummary> {
        ledger
            .periods()
            .iter()
            .filter_map(|period| Self::summarize(ledger, period.key))
            .collect()
    }
}
