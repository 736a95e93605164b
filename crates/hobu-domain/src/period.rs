//! A single calendar month of the household ledger.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::budget::Budget;
use crate::common::{Amounted, Identifiable, MonthKey};
use crate::expense::{Expense, ExpenseCategory};
use crate::income::IncomeSources;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One month bucket: income breakdown, budget targets, and the ordered
/// sequence of expenses that belong to this month.
pub struct MonthPeriod {
    pub key: MonthKey,
    #[serde(default)]
    pub income: IncomeSources,
    #[serde(default)]
    pub budget: Budget,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl MonthPeriod {
    pub fn new(key: MonthKey) -> Self {
        Self {
            key,
            income: IncomeSources::new(),
            budget: Budget::default(),
            expenses: Vec::new(),
        }
    }

    pub fn with_income(mut self, income: IncomeSources) -> Self {
        self.budget = Budget::split(income.total());
        self.income = income;
        self
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id() == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id() == id)
    }

    pub fn total_income(&self) -> f64 {
        self.income.total()
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(Amounted::amount).sum()
    }

    /// Sums expenses recorded under `category` for this month.
    pub fn spent_in(&self, category: ExpenseCategory) -> f64 {
        self.expenses
            .iter()
            .filter(|expense| expense.category == category)
            .map(Amounted::amount)
            .sum()
    }
}
