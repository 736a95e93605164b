//! Domain models for dated expense records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{normalize_amount, Amounted, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One concrete, dated ledger line.
///
/// An expense belongs to exactly one period, fixed when it is created;
/// editing its date later never relocates it between periods.
pub struct Expense {
    pub id: Uuid,
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
    pub installment: Option<InstallmentTag>,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount: normalize_amount(amount),
            category,
            date,
            payment_method,
            responsible: None,
            recurring: false,
            installment: None,
        }
    }

    pub fn with_responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = Some(responsible.into());
        self
    }

    pub fn with_installment(mut self, tag: InstallmentTag) -> Self {
        self.installment = Some(tag);
        self
    }

    pub fn with_recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Enumerates the fixed budgeting categories of the 50/30/20 rule.
pub enum ExpenseCategory {
    Essential,
    Desire,
    Investment,
}

impl ExpenseCategory {
    /// All categories, in budget-rule order.
    pub const ALL: [ExpenseCategory; 3] = [
        ExpenseCategory::Essential,
        ExpenseCategory::Desire,
        ExpenseCategory::Investment,
    ];
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseCategory::Essential => "Essential",
            ExpenseCategory::Desire => "Desire",
            ExpenseCategory::Investment => "Investment",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// How an expense was paid.
pub enum PaymentMethod {
    Credit,
    Debit,
    Pix,
    Cash,
    Transfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Credit => "Credit",
            PaymentMethod::Debit => "Debit",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Transfer => "Transfer",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Position of an installment slice within its series, one-based.
pub struct InstallmentTag {
    pub index: u32,
    pub total: u32,
}

impl fmt::Display for InstallmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.index, self.total)
    }
}
