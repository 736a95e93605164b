//! Input envelopes consumed from the surrounding application layers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{normalize_amount, MonthKey};
use crate::expense::{ExpenseCategory, PaymentMethod};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A user-submitted expense before distribution into the ledger.
pub struct ExpenseRequest {
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<String>,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_installments: Option<u32>,
}

impl ExpenseRequest {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            description: description.into(),
            amount: normalize_amount(amount),
            category,
            date,
            payment_method,
            responsible: None,
            recurring: false,
            total_installments: None,
        }
    }

    pub fn with_responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = Some(responsible.into());
        self
    }

    pub fn recurring(mut self) -> Self {
        self.recurring = true;
        self
    }

    pub fn in_installments(mut self, total: u32) -> Self {
        self.total_installments = Some(total);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Field-level edit of an existing expense. `None` leaves a field
/// untouched; `responsible` uses a nested option so it can be cleared.
pub struct ExpensePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<Option<String>>,
}

impl ExpensePatch {
    pub fn has_effect(&self) -> bool {
        self.description.is_some()
            || self.amount.is_some()
            || self.category.is_some()
            || self.date.is_some()
            || self.payment_method.is_some()
            || self.responsible.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// The single mutation envelope the ledger mutator understands. One
/// change in, one complete new snapshot out.
pub enum LedgerChange {
    AddExpense(ExpenseRequest),
    RemoveExpense {
        period: MonthKey,
        expense_id: Uuid,
    },
    EditExpense {
        period: MonthKey,
        expense_id: Uuid,
        patch: ExpensePatch,
    },
    SetIncome {
        period: MonthKey,
        source: String,
        amount: f64,
    },
    ReplicateIncome {
        from: MonthKey,
    },
    SetBudgetTarget {
        period: MonthKey,
        category: ExpenseCategory,
        amount: f64,
    },
}
