//! Domain Module
//!
//! The three record kinds managed by finvault and their interest formulas.
//!
//! | Kind    | Key  | Indexed fields              |
//! |---------|------|-----------------------------|
//! | Deposit | name | amount, rate, months        |
//! | Loan    | name | principal, rate, years      |
//! | Credit  | name | amount, interest, months    |

mod credit;
mod deposit;
mod loan;

pub use credit::{Credit, CreditField};
pub use deposit::{Deposit, DepositField};
pub use loan::{Loan, LoanField};

use crate::error::{Result, VaultError};
use crate::store::FieldValue;

/// Derived amounts shown after a record is added
pub trait Figures {
    /// `(label, value)` pairs, e.g. `("Maturity value", 1050.0)`
    fn figures(&self) -> Vec<(&'static str, f64)>;
}

/// Convert an integer field value to a non-negative count
pub(crate) fn count_value(value: &FieldValue, field: &str) -> Result<u32> {
    u32::try_from(value.as_i64()).map_err(|_| {
        VaultError::InvalidValue(format!("{} must be between 0 and {}, got {}", field, u32::MAX, value))
    })
}
