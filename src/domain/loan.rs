//! Loans

use std::fmt;

use crate::error::Result;
use crate::store::{check_values, Field, FieldValue, Record, ValueKind};

use super::{count_value, Figures};

/// A loan repaid in equal monthly instalments
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    pub name: String,
    pub principal: f64,
    /// Annual rate in percent
    pub rate: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanField {
    Principal,
    Rate,
    Years,
}

impl Field for LoanField {
    const ALL: &'static [Self] = &[LoanField::Principal, LoanField::Rate, LoanField::Years];

    fn name(self) -> &'static str {
        match self {
            LoanField::Principal => "principal",
            LoanField::Rate => "rate",
            LoanField::Years => "years",
        }
    }

    fn label(self) -> &'static str {
        match self {
            LoanField::Principal => "Principal",
            LoanField::Rate => "Rate (%)",
            LoanField::Years => "Years",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            LoanField::Principal | LoanField::Rate => ValueKind::Float,
            LoanField::Years => ValueKind::Int,
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl Loan {
    pub fn new(name: impl Into<String>, principal: f64, rate: f64, years: u32) -> Self {
        Self {
            name: name.into(),
            principal,
            rate,
            years,
        }
    }

    pub fn simple_interest(&self) -> f64 {
        self.principal * self.rate * self.years as f64 / 100.0
    }

    /// Interest compounded once a year
    pub fn compound_interest(&self) -> f64 {
        self.principal * ((1.0 + self.rate / 100.0).powf(self.years as f64) - 1.0)
    }

    /// Equated monthly instalment
    ///
    /// Zero-rate loans split the principal evenly; a zero-year loan has no
    /// instalments and yields 0. Terms too long for the growth factor to stay
    /// finite pay interest only.
    pub fn emi(&self) -> f64 {
        let months = self.years as f64 * 12.0;
        if months == 0.0 {
            return 0.0;
        }

        let monthly_rate = self.rate / (12.0 * 100.0);
        if monthly_rate == 0.0 {
            return self.principal / months;
        }

        let growth = (1.0 + monthly_rate).powf(months);
        if !growth.is_finite() {
            return self.principal * monthly_rate;
        }
        self.principal * monthly_rate * growth / (growth - 1.0)
    }
}

impl Record for Loan {
    type Field = LoanField;

    const STEM: &'static str = "loans";
    const KIND: &'static str = "loan";

    fn key(&self) -> &str {
        &self.name
    }

    fn value(&self, field: LoanField) -> FieldValue {
        match field {
            LoanField::Principal => FieldValue::float(self.principal),
            LoanField::Rate => FieldValue::float(self.rate),
            LoanField::Years => FieldValue::int(self.years as i64),
        }
    }

    fn from_values(key: String, values: &[FieldValue]) -> Result<Self> {
        check_values::<LoanField>(values)?;
        Ok(Self {
            name: key,
            principal: values[0].as_f64(),
            rate: values[1].as_f64(),
            years: count_value(&values[2], "years")?,
        })
    }
}

impl Figures for Loan {
    fn figures(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Simple interest", self.simple_interest()),
            ("Compound interest", self.compound_interest()),
            ("EMI (monthly)", self.emi()),
        ]
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Principal={} | Rate={} | Years={}",
            self.name, self.principal, self.rate, self.years
        )
    }
}
