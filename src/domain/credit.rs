//! Credit lines and debts

use std::fmt;

use crate::error::Result;
use crate::store::{check_values, Field, FieldValue, Record, ValueKind};

use super::{count_value, Figures};

/// Money owed, with flat monthly interest
#[derive(Debug, Clone, PartialEq)]
pub struct Credit {
    pub name: String,
    pub amount: f64,
    /// Monthly interest in percent
    pub interest: f64,
    pub months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditField {
    Amount,
    Interest,
    Months,
}

impl Field for CreditField {
    const ALL: &'static [Self] = &[CreditField::Amount, CreditField::Interest, CreditField::Months];

    fn name(self) -> &'static str {
        match self {
            CreditField::Amount => "amount",
            CreditField::Interest => "interest",
            CreditField::Months => "months",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CreditField::Amount => "Amount",
            CreditField::Interest => "Interest (%)",
            CreditField::Months => "Months",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            CreditField::Amount | CreditField::Interest => ValueKind::Float,
            CreditField::Months => ValueKind::Int,
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl Credit {
    pub fn new(name: impl Into<String>, amount: f64, interest: f64, months: u32) -> Self {
        Self {
            name: name.into(),
            amount,
            interest,
            months,
        }
    }

    /// Amount plus flat interest over every month
    pub fn total_payable(&self) -> f64 {
        self.amount + self.amount * self.interest * self.months as f64 / 100.0
    }

    pub fn monthly_payment(&self) -> f64 {
        if self.months > 0 {
            self.total_payable() / self.months as f64
        } else {
            self.total_payable()
        }
    }
}

impl Record for Credit {
    type Field = CreditField;

    const STEM: &'static str = "credits";
    const KIND: &'static str = "credit";

    fn key(&self) -> &str {
        &self.name
    }

    fn value(&self, field: CreditField) -> FieldValue {
        match field {
            CreditField::Amount => FieldValue::float(self.amount),
            CreditField::Interest => FieldValue::float(self.interest),
            CreditField::Months => FieldValue::int(self.months as i64),
        }
    }

    fn from_values(key: String, values: &[FieldValue]) -> Result<Self> {
        check_values::<CreditField>(values)?;
        Ok(Self {
            name: key,
            amount: values[0].as_f64(),
            interest: values[1].as_f64(),
            months: count_value(&values[2], "months")?,
        })
    }
}

impl Figures for Credit {
    fn figures(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Total payable", self.total_payable()),
            ("Monthly payment", self.monthly_payment()),
        ]
    }
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Amt={} | Interest={}% | Months={} | Monthly={:.2}",
            self.name,
            self.amount,
            self.interest,
            self.months,
            self.monthly_payment()
        )
    }
}
