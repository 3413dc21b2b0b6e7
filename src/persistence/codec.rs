//! Record text codec
//!
//! Encoding and decoding functions for the record file format.
//!
//! ## Line Format
//!
//! ```text
//! ┌──────────────────────┬─────────┬─────────┬─────────┐
//! │ key (1+ words)       │ field 1 │ field 2 │ field 3 │
//! └──────────────────────┴─────────┴─────────┴─────────┘
//!   e.g. "Jane Doe 5000 6.5 12"
//! ```
//!
//! Tokens are separated by whitespace. A record kind with `n` fields takes
//! the last `n` tokens as its values and joins the leading tokens with single
//! spaces to form the key, so keys may contain spaces. Blank lines are
//! skipped.

use std::io::{BufRead, Write};

use crate::error::{Result, VaultError};
use crate::store::{Field, FieldValue, Record};

// =============================================================================
// Single Record Encoding/Decoding
// =============================================================================

/// Encode a record as one line (without the trailing newline)
///
/// Floats use Rust's shortest round-trip formatting, so decoding the line
/// yields exactly the same values.
pub fn encode_record<R: Record>(record: &R) -> String {
    let mut line = record.key().to_string();
    for value in record.values() {
        line.push(' ');
        line.push_str(&value.to_string());
    }
    line
}

/// Decode one non-blank line; `line_no` is 1-based and only used in errors
pub fn decode_record<R: Record>(line: &str, line_no: usize) -> Result<R> {
    let fields = R::Field::ALL;
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() < fields.len() + 1 {
        return Err(VaultError::Parse {
            line: line_no,
            reason: format!(
                "expected a name and {} values, found {} tokens",
                fields.len(),
                tokens.len()
            ),
        });
    }

    let (name_tokens, value_tokens) = tokens.split_at(tokens.len() - fields.len());

    let values = fields
        .iter()
        .zip(value_tokens)
        .map(|(field, token)| {
            FieldValue::parse(field.kind(), token).map_err(|e| VaultError::Parse {
                line: line_no,
                reason: format!("{}: {}", field.name(), e),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    R::from_values(name_tokens.join(" "), &values).map_err(|e| VaultError::Parse {
        line: line_no,
        reason: e.to_string(),
    })
}

// =============================================================================
// Stream Helpers
// =============================================================================

/// Write every record, one per line
pub fn write_records<R: Record, W: Write>(writer: &mut W, records: &[R]) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", encode_record(record))?;
    }
    Ok(())
}

/// Read records until EOF; the first malformed line fails the whole read
pub fn read_records<R: Record, B: BufRead>(reader: B) -> Result<Vec<R>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(decode_record(&line, idx + 1)?);
    }

    Ok(records)
}
