//! Fixed deposits

use std::fmt;

use crate::error::Result;
use crate::store::{check_values, Field, FieldValue, Record, ValueKind};

use super::{count_value, Figures};

/// A fixed deposit earning simple interest
#[derive(Debug, Clone, PartialEq)]
pub struct Deposit {
    pub name: String,
    pub amount: f64,
    /// Annual rate in percent
    pub rate: f64,
    pub months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositField {
    Amount,
    Rate,
    Months,
}

impl Field for DepositField {
    const ALL: &'static [Self] = &[DepositField::Amount, DepositField::Rate, DepositField::Months];

    fn name(self) -> &'static str {
        match self {
            DepositField::Amount => "amount",
            DepositField::Rate => "rate",
            DepositField::Months => "months",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DepositField::Amount => "Amount",
            DepositField::Rate => "Rate (%)",
            DepositField::Months => "Tenure (months)",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            DepositField::Amount | DepositField::Rate => ValueKind::Float,
            DepositField::Months => ValueKind::Int,
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl Deposit {
    pub fn new(name: impl Into<String>, amount: f64, rate: f64, months: u32) -> Self {
        Self {
            name: name.into(),
            amount,
            rate,
            months,
        }
    }

    /// Interest earned over the tenure
    pub fn simple_interest(&self) -> f64 {
        let years = self.months as f64 / 12.0;
        self.amount * self.rate * years / 100.0
    }

    /// Amount paid out at the end of the tenure
    pub fn maturity(&self) -> f64 {
        self.amount + self.simple_interest()
    }
}

impl Record for Deposit {
    type Field = DepositField;

    const STEM: &'static str = "deposits";
    const KIND: &'static str = "deposit";

    fn key(&self) -> &str {
        &self.name
    }

    fn value(&self, field: DepositField) -> FieldValue {
        match field {
            DepositField::Amount => FieldValue::float(self.amount),
            DepositField::Rate => FieldValue::float(self.rate),
            DepositField::Months => FieldValue::int(self.months as i64),
        }
    }

    fn from_values(key: String, values: &[FieldValue]) -> Result<Self> {
        check_values::<DepositField>(values)?;
        Ok(Self {
            name: key,
            amount: values[0].as_f64(),
            rate: values[1].as_f64(),
            months: count_value(&values[2], "months")?,
        })
    }
}

impl Figures for Deposit {
    fn figures(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Simple interest", self.simple_interest()),
            ("Maturity value", self.maturity()),
        ]
    }
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Amt={} | Rate={} | Tenure={} months",
            self.name, self.amount, self.rate, self.months
        )
    }
}
