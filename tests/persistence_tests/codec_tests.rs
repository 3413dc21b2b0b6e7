//! Tests for the record line codec

use std::io::Cursor;

use finvault::domain::{Credit, Deposit, Loan};
use finvault::persistence::{decode_record, encode_record, read_records, write_records};
use finvault::VaultError;

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_deposit() {
    let deposit = Deposit::new("Jane Doe", 5000.0, 6.5, 12);

    assert_eq!(encode_record(&deposit), "Jane Doe 5000 6.5 12");
}

#[test]
fn test_encode_keeps_full_precision() {
    let loan = Loan::new("car", 15000.25, 0.1, 5);
    let line = encode_record(&loan);

    let decoded: Loan = decode_record(&line, 1).unwrap();
    assert_eq!(decoded, loan);
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_single_word_name() {
    let credit: Credit = decode_record("visa 1200 1.5 10", 1).unwrap();

    assert_eq!(credit, Credit::new("visa", 1200.0, 1.5, 10));
}

#[test]
fn test_decode_multi_word_name() {
    let deposit: Deposit = decode_record("  Mary   Ann  Smith 250.5 7 24 ", 3).unwrap();

    assert_eq!(deposit.name, "Mary Ann Smith");
    assert_eq!(deposit.amount, 250.5);
    assert_eq!(deposit.rate, 7.0);
    assert_eq!(deposit.months, 24);
}

#[test]
fn test_decode_missing_name() {
    let result: Result<Deposit, _> = decode_record("5000 6.5 12", 4);

    assert!(matches!(result, Err(VaultError::Parse { line: 4, .. })));
}

#[test]
fn test_decode_bad_number() {
    let result: Result<Deposit, _> = decode_record("Jane lots 6.5 12", 2);

    match result {
        Err(VaultError::Parse { line, reason }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("amount"), "reason: {}", reason);
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_decode_fractional_count_is_rejected() {
    let result: Result<Deposit, _> = decode_record("Jane 5000 6.5 12.5", 1);

    assert!(matches!(result, Err(VaultError::Parse { .. })));
}

#[test]
fn test_decode_negative_count_is_rejected() {
    let result: Result<Loan, _> = decode_record("home 1000 5 -3", 1);

    assert!(matches!(result, Err(VaultError::Parse { .. })));
}

// =============================================================================
// Stream Tests
// =============================================================================

#[test]
fn test_write_then_read_records() {
    let records = vec![
        Deposit::new("alpha", 100.0, 5.0, 12),
        Deposit::new("beta gamma", 200.0, 6.25, 6),
    ];

    let mut buf = Vec::new();
    write_records(&mut buf, &records).unwrap();

    assert_eq!(
        String::from_utf8(buf.clone()).unwrap(),
        "alpha 100 5 12\nbeta gamma 200 6.25 6\n"
    );
    let read: Vec<Deposit> = read_records(Cursor::new(buf)).unwrap();
    assert_eq!(read, records);
}

#[test]
fn test_read_skips_blank_lines() {
    let text = "\nalpha 100 5 12\n   \n\nbeta 200 6 6\n";

    let read: Vec<Deposit> = read_records(Cursor::new(text)).unwrap();

    assert_eq!(read.len(), 2);
    assert_eq!(read[1].name, "beta");
}

#[test]
fn test_read_reports_line_number_of_bad_line() {
    let text = "alpha 100 5 12\n\nbroken line\n";

    let result: Result<Vec<Deposit>, _> = read_records(Cursor::new(text));

    assert!(matches!(result, Err(VaultError::Parse { line: 3, .. })));
}

#[test]
fn test_read_empty_input() {
    let read: Vec<Credit> = read_records(Cursor::new("")).unwrap();
    assert!(read.is_empty());
}
