//! Expands a single expense request into dated ledger records.
//!
//! An incoming request has one of three temporal shapes: a one-off
//! expense, an amortized installment series, or an open-ended recurring
//! charge. The distributor classifies the request and emits the
//! resulting records into the matching month buckets, returning a
//! complete new snapshot of the universe.

use chrono::{Datelike, NaiveDate};
use tracing::warn;
use uuid::Uuid;

use hobu_domain::{Expense, ExpenseRequest, InstallmentTag, Ledger, MonthKey};

use crate::{calendar, CoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Temporal shape of an incoming expense request.
pub enum DistributionMode {
    Installments(u32),
    Recurring,
    Single,
}

impl DistributionMode {
    /// Classifies a request. An installment series wins over the
    /// recurring flag; a series of one is an ordinary one-off expense.
    pub fn classify(request: &ExpenseRequest) -> Self {
        match request.total_installments {
            Some(total) if total > 1 => DistributionMode::Installments(total),
            _ if request.recurring => DistributionMode::Recurring,
            _ => DistributionMode::Single,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One record placed by the distributor.
pub struct PlacedExpense {
    pub period: MonthKey,
    pub expense_id: Uuid,
    pub amount: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An installment whose target month is missing from the universe.
pub struct SkippedInstallment {
    pub index: u32,
    pub total: u32,
    pub period: MonthKey,
}

#[derive(Debug, Clone)]
/// Outcome of a distribution: the complete new snapshot plus a report
/// of what was placed and which installments were skipped.
pub struct Distribution {
    pub ledger: Ledger,
    pub placed: Vec<PlacedExpense>,
    pub skipped: Vec<SkippedInstallment>,
}

/// Stateless distribution engine operating over [`Ledger`] snapshots.
pub struct DistributionService;

impl DistributionService {
    /// Expands `request` into the matching periods of `ledger` and
    /// returns a new snapshot. The input snapshot is never modified.
    ///
    /// Every call mints fresh expense ids, so re-running the same
    /// request against the returned snapshot duplicates its records;
    /// callers submit each user action exactly once.
    pub fn distribute(
        ledger: &Ledger,
        request: &ExpenseRequest,
    ) -> Result<Distribution, CoreError> {
        match DistributionMode::classify(request) {
            DistributionMode::Installments(total) => {
                Ok(Self::distribute_installments(ledger, request, total))
            }
            DistributionMode::Recurring => Ok(Self::distribute_recurring(ledger, request)),
            DistributionMode::Single => Self::distribute_single(ledger, request),
        }
    }

    /// Splits the amount into `total` equal monthly slices, one month
    /// apart, starting at the request date. The division keeps no
    /// remainder: the last slice is not adjusted for rounding drift.
    /// Slices whose target month is not provisioned are skipped and
    /// reported in the outcome.
    fn distribute_installments(
        ledger: &Ledger,
        request: &ExpenseRequest,
        total: u32,
    ) -> Distribution {
        let monthly = request.amount / total as f64;
        let day = request.date.day();
        let mut next = ledger.clone();
        let mut placed = Vec::new();
        let mut skipped = Vec::new();

        for i in 0..total {
            let index = i + 1;
            let resolved = calendar::resolve(request.date, day, i as i32);
            match next.period_mut(resolved.key) {
                Some(period) => {
                    let expense = build_expense(request, monthly, resolved.date)
                        .with_installment(InstallmentTag { index, total });
                    placed.push(PlacedExpense {
                        period: resolved.key,
                        expense_id: expense.id,
                        amount: expense.amount,
                        date: expense.date,
                    });
                    period.expenses.push(expense);
                }
                None => {
                    warn!(
                        "installment {}/{} of `{}` targets unprovisioned {}",
                        index, total, request.description, resolved.key
                    );
                    skipped.push(SkippedInstallment {
                        index,
                        total,
                        period: resolved.key,
                    });
                }
            }
        }

        next.touch();
        Distribution {
            ledger: next,
            placed,
            skipped,
        }
    }

    /// Appends the undivided amount to every period at or after the
    /// request date's month, each with a fresh id and the request's
    /// day-of-month clamped into that month.
    fn distribute_recurring(ledger: &Ledger, request: &ExpenseRequest) -> Distribution {
        let start_ordinal = MonthKey::from_date(request.date).ordinal();
        let day = request.date.day();
        let mut next = ledger.clone();
        let mut placed = Vec::new();

        for period in next.periods_mut() {
            if period.key.ordinal() < start_ordinal {
                continue;
            }
            let resolved = calendar::resolve(period.key.first_day(), day, 0);
            let expense = build_expense(request, request.amount, resolved.date);
            placed.push(PlacedExpense {
                period: period.key,
                expense_id: expense.id,
                amount: expense.amount,
                date: expense.date,
            });
            period.expenses.push(expense);
        }

        next.touch();
        Distribution {
            ledger: next,
            placed,
            skipped: Vec::new(),
        }
    }

    /// Appends one expense into the period owning the request date. The
    /// target comes strictly from the date; an unknown period fails the
    /// whole operation with no mutation.
    fn distribute_single(
        ledger: &Ledger,
        request: &ExpenseRequest,
    ) -> Result<Distribution, CoreError> {
        let key = MonthKey::from_date(request.date);
        let mut next = ledger.clone();
        let period = next
            .period_mut(key)
            .ok_or(CoreError::PeriodNotProvisioned(key))?;
        let expense = build_expense(request, request.amount, request.date);
        let placed = vec![PlacedExpense {
            period: key,
            expense_id: expense.id,
            amount: expense.amount,
            date: expense.date,
        }];
        period.expenses.push(expense);
        next.touch();
        Ok(Distribution {
            ledger: next,
            placed,
            skipped: Vec::new(),
        })
    }
}

fn build_expense(request: &ExpenseRequest, amount: f64, date: NaiveDate) -> Expense {
    let mut expense = Expense::new(
        request.description.clone(),
        amount,
        request.category,
        date,
        request.payment_method,
    )
    .with_recurring(request.recurring);
    expense.responsible = request.responsible.clone();
    expense
}
