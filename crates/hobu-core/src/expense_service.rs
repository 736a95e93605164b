//! Direct edits of existing expense records, scoped to one period.

use hobu_domain::{normalize_amount, ExpensePatch, Identifiable, Ledger, MonthKey};
use uuid::Uuid;

use crate::CoreError;

/// Stateless helpers for removing and editing single expenses.
pub struct ExpenseService;

impl ExpenseService {
    /// Removes one expense by id from the given period's list.
    pub fn remove(
        ledger: &Ledger,
        key: MonthKey,
        expense_id: Uuid,
    ) -> Result<Ledger, CoreError> {
        let mut next = ledger.clone();
        let period = next
            .period_mut(key)
            .ok_or(CoreError::PeriodNotProvisioned(key))?;
        let index = period
            .expenses
            .iter()
            .position(|expense| expense.id() == expense_id)
            .ok_or(CoreError::ExpenseNotFound(expense_id))?;
        period.expenses.remove(index);
        next.touch();
        Ok(next)
    }

    /// Edits one expense in place. A date change keeps the expense in
    /// its current period; records are never relocated between buckets.
    pub fn edit(
        ledger: &Ledger,
        key: MonthKey,
        expense_id: Uuid,
        patch: &ExpensePatch,
    ) -> Result<Ledger, CoreError> {
        let mut next = ledger.clone();
        let period = next
            .period_mut(key)
            .ok_or(CoreError::PeriodNotProvisioned(key))?;
        let expense = period
            .expense_mut(expense_id)
            .ok_or(CoreError::ExpenseNotFound(expense_id))?;

        if let Some(description) = &patch.description {
            expense.description = description.clone();
        }
        if let Some(amount) = patch.amount {
            expense.amount = normalize_amount(amount);
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(date) = patch.date {
            expense.date = date;
        }
        if let Some(payment_method) = patch.payment_method {
            expense.payment_method = payment_method;
        }
        if let Some(responsible) = &patch.responsible {
            expense.responsible = responsible.clone();
        }

        next.touch();
        Ok(next)
    }
}
