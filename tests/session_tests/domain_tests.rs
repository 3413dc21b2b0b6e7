//! Tests for the record kinds and their formulas

use finvault::domain::{Credit, CreditField, Deposit, DepositField, Figures, Loan, LoanField};
use finvault::store::{Field, FieldValue, Record, SortBy, ValueKind};
use finvault::VaultError;

fn close_to(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}

// =============================================================================
// Formula Tests
// =============================================================================

#[test]
fn test_deposit_interest() {
    let deposit = Deposit::new("fd", 1000.0, 6.0, 18);

    assert!(close_to(deposit.simple_interest(), 90.0));
    assert!(close_to(deposit.maturity(), 1090.0));
}

#[test]
fn test_loan_interest() {
    let loan = Loan::new("home", 100000.0, 10.0, 2);

    assert!(close_to(loan.simple_interest(), 20000.0));
    assert!(close_to(loan.compound_interest(), 21000.0));
}

#[test]
fn test_loan_emi() {
    let loan = Loan::new("car", 100000.0, 10.0, 1);

    assert!((loan.emi() - 8791.5887).abs() < 1e-3, "emi {}", loan.emi());
}

#[test]
fn test_loan_emi_edge_cases() {
    assert!(close_to(Loan::new("free", 12000.0, 0.0, 2).emi(), 500.0));
    assert_eq!(Loan::new("none", 12000.0, 5.0, 0).emi(), 0.0);
}

#[test]
fn test_loan_figures_for_very_long_terms() {
    // years * 12 does not fit in a u32
    let loan = Loan::new("big", 1000.0, 5.0, 400_000_000);

    let figures = loan.figures();

    assert_eq!(figures.len(), 3);
    assert!(close_to(loan.emi(), 1000.0 * 5.0 / 1200.0), "emi {}", loan.emi());
    assert!(close_to(Loan::new("free", 1000.0, 0.0, u32::MAX).emi(), 1000.0 / (u32::MAX as f64 * 12.0)));
}

#[test]
fn test_loan_compound_interest_beyond_i32_years() {
    let loan = Loan::new("big", 1000.0, 5.0, 3_000_000_000);

    assert!(loan.compound_interest() > 0.0, "compound {}", loan.compound_interest());
    assert!(loan.emi() > 0.0);
}

#[test]
fn test_credit_payments() {
    let credit = Credit::new("card", 1000.0, 2.0, 10);

    assert!(close_to(credit.total_payable(), 1200.0));
    assert!(close_to(credit.monthly_payment(), 120.0));

    let due_now = Credit::new("now", 1000.0, 2.0, 0);
    assert!(close_to(due_now.monthly_payment(), 1000.0));
}

#[test]
fn test_figures_labels() {
    let labels: Vec<&str> = Loan::new("l", 1.0, 1.0, 1)
        .figures()
        .into_iter()
        .map(|(label, _)| label)
        .collect();

    assert_eq!(labels, vec!["Simple interest", "Compound interest", "EMI (monthly)"]);
}

// =============================================================================
// Record Trait Tests
// =============================================================================

#[test]
fn test_values_follow_field_order() {
    let deposit = Deposit::new("fd", 1000.0, 6.5, 12);

    assert_eq!(
        deposit.values(),
        vec![FieldValue::float(1000.0), FieldValue::float(6.5), FieldValue::int(12)]
    );
    assert_eq!(deposit.key(), "fd");
}

#[test]
fn test_from_values_roundtrips_values() {
    let credit = Credit::new("card", 300.0, 1.5, 6);

    let rebuilt = Credit::from_values("card".to_string(), &credit.values()).unwrap();

    assert_eq!(rebuilt, credit);
}

#[test]
fn test_from_values_wrong_count() {
    let result = Loan::from_values("l".to_string(), &[FieldValue::float(1.0)]);

    assert!(matches!(result, Err(VaultError::InvalidRecord(_))));
}

#[test]
fn test_from_values_wrong_kind() {
    let values = [FieldValue::float(1.0), FieldValue::float(2.0), FieldValue::float(3.0)];

    let result = Deposit::from_values("d".to_string(), &values);

    assert!(matches!(result, Err(VaultError::InvalidRecord(_))));
}

#[test]
fn test_from_values_negative_count() {
    let values = [FieldValue::float(1.0), FieldValue::float(2.0), FieldValue::int(-1)];

    let result = Loan::from_values("l".to_string(), &values);

    assert!(matches!(result, Err(VaultError::InvalidValue(_))));
}

// =============================================================================
// Field Tests
// =============================================================================

#[test]
fn test_field_parse_ignores_case() {
    assert_eq!(DepositField::parse("AMOUNT").unwrap(), DepositField::Amount);
    assert_eq!(LoanField::parse(" years ").unwrap(), LoanField::Years);
    assert_eq!(CreditField::parse("Interest").unwrap(), CreditField::Interest);
}

#[test]
fn test_field_parse_unknown() {
    assert!(matches!(
        DepositField::parse("principal"),
        Err(VaultError::InvalidField(_))
    ));
}

#[test]
fn test_field_ordinals_match_all() {
    for (idx, field) in DepositField::ALL.iter().enumerate() {
        assert_eq!(field.ordinal(), idx);
    }
    for (idx, field) in LoanField::ALL.iter().enumerate() {
        assert_eq!(field.ordinal(), idx);
    }
    for (idx, field) in CreditField::ALL.iter().enumerate() {
        assert_eq!(field.ordinal(), idx);
    }
}

#[test]
fn test_field_kinds() {
    assert_eq!(DepositField::Amount.kind(), ValueKind::Float);
    assert_eq!(DepositField::Months.kind(), ValueKind::Int);
    assert_eq!(LoanField::Years.kind(), ValueKind::Int);
}

#[test]
fn test_sort_labels() {
    assert_eq!(SortBy::<DepositField>::Key.label(), "name");
    assert_eq!(SortBy::Field(LoanField::Principal).label(), "principal");
}

// =============================================================================
// Value Parsing Tests
// =============================================================================

#[test]
fn test_field_value_parse() {
    assert_eq!(
        FieldValue::parse(ValueKind::Float, " 12.5 ").unwrap(),
        FieldValue::float(12.5)
    );
    assert_eq!(FieldValue::parse(ValueKind::Int, "7").unwrap(), FieldValue::int(7));
    assert!(matches!(
        FieldValue::parse(ValueKind::Int, "7.5"),
        Err(VaultError::InvalidValue(_))
    ));
    assert!(matches!(
        FieldValue::parse(ValueKind::Float, "abc"),
        Err(VaultError::InvalidValue(_))
    ));
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_display() {
    assert_eq!(
        Deposit::new("Jane Doe", 5000.0, 6.5, 12).to_string(),
        "Jane Doe | Amt=5000 | Rate=6.5 | Tenure=12 months"
    );
    assert_eq!(
        Loan::new("home", 250000.0, 8.5, 20).to_string(),
        "home | Principal=250000 | Rate=8.5 | Years=20"
    );
    assert_eq!(
        Credit::new("card", 1000.0, 2.0, 10).to_string(),
        "card | Amt=1000 | Interest=2% | Months=10 | Monthly=120.00"
    );
}
