//! Record abstraction
//!
//! What the store needs to know about a record kind: its unique key, its
//! indexable fields, and how to rebuild a record from those parts.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, VaultError};
use crate::index::FloatKey;

/// Type of value an indexable field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Int,
}

/// Value of one indexable field
///
/// Hashes and compares exactly, so `100.0` and `100.000001` are different
/// keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Float(FloatKey),
    Int(i64),
}

impl FieldValue {
    pub fn float(value: f64) -> Self {
        FieldValue::Float(FloatKey::new(value))
    }

    pub fn int(value: i64) -> Self {
        FieldValue::Int(value)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Float(_) => ValueKind::Float,
            FieldValue::Int(_) => ValueKind::Int,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            FieldValue::Float(v) => v.get(),
            FieldValue::Int(v) => *v as f64,
        }
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            FieldValue::Float(v) => v.get() as i64,
            FieldValue::Int(v) => *v,
        }
    }

    /// Parse user or file text as a value of the given kind
    pub fn parse(kind: ValueKind, text: &str) -> Result<Self> {
        let text = text.trim();
        match kind {
            ValueKind::Float => text
                .parse::<f64>()
                .map(FieldValue::float)
                .map_err(|_| VaultError::InvalidValue(format!("expected a number, got '{}'", text))),
            ValueKind::Int => text
                .parse::<i64>()
                .map(FieldValue::Int)
                .map_err(|_| {
                    VaultError::InvalidValue(format!("expected a whole number, got '{}'", text))
                }),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Float(a), FieldValue::Float(b)) => a.cmp(b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            // Mixed kinds never share an index; order numerically, Int first on ties.
            (FieldValue::Int(_), FieldValue::Float(_)) => {
                self.as_f64().total_cmp(&other.as_f64()).then(Ordering::Less)
            }
            (FieldValue::Float(_), FieldValue::Int(_)) => {
                self.as_f64().total_cmp(&other.as_f64()).then(Ordering::Greater)
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Float(v) => v.fmt(f),
            FieldValue::Int(v) => v.fmt(f),
        }
    }
}

/// Selector for one indexable field of a record kind
///
/// Implemented by fieldless enums. `ALL` lists the fields in declaration
/// order, which is also their order in the record file, and `ordinal` must
/// return the field's position in `ALL`.
pub trait Field: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// Lowercase name, accepted by `parse`
    fn name(self) -> &'static str;

    /// Label shown in prompts and listings
    fn label(self) -> &'static str;

    fn kind(self) -> ValueKind;

    fn ordinal(self) -> usize;

    /// Look a field up by name, ignoring case
    fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| VaultError::InvalidField(name.to_string()))
    }
}

/// A record kind the indexed store can hold
pub trait Record: Clone + fmt::Debug {
    type Field: Field;

    /// File stem for this kind's data files (`deposits` → `deposits.txt`)
    const STEM: &'static str;

    /// Singular name used in messages
    const KIND: &'static str;

    /// The unique key
    fn key(&self) -> &str;

    fn value(&self, field: Self::Field) -> FieldValue;

    /// Build a record from its key and one value per field, in `Field::ALL` order
    fn from_values(key: String, values: &[FieldValue]) -> Result<Self>;

    /// Every field value in `Field::ALL` order
    fn values(&self) -> Vec<FieldValue> {
        Self::Field::ALL.iter().map(|field| self.value(*field)).collect()
    }
}

/// Check that `key` survives a trip through a record file
///
/// Keys must be non-empty and whitespace-normalized: words separated by
/// single spaces, nothing leading or trailing, no tabs or newlines.
pub fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(VaultError::InvalidRecord("name must not be empty".to_string()));
    }

    let normalized = key.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized != key {
        return Err(VaultError::InvalidRecord(format!(
            "name {:?} must be words separated by single spaces",
            key
        )));
    }

    Ok(())
}

/// Check that `values` has one value of the right kind per field of `F`
pub fn check_values<F: Field>(values: &[FieldValue]) -> Result<()> {
    if values.len() != F::ALL.len() {
        return Err(VaultError::InvalidRecord(format!(
            "expected {} field values, got {}",
            F::ALL.len(),
            values.len()
        )));
    }

    for (field, value) in F::ALL.iter().zip(values) {
        if field.kind() != value.kind() {
            return Err(VaultError::InvalidRecord(format!(
                "field '{}' expects {:?}, got {:?}",
                field.name(),
                field.kind(),
                value.kind()
            )));
        }
    }

    Ok(())
}

/// Ordering applied to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy<F> {
    /// By unique key (the storage order after a rebuild)
    Key,
    Field(F),
}

impl<F: Field> SortBy<F> {
    /// Whether `a` sorts strictly before `b`
    pub fn precedes<R: Record<Field = F>>(self, a: &R, b: &R) -> bool {
        match self {
            SortBy::Key => a.key() < b.key(),
            SortBy::Field(field) => a.value(field) < b.value(field),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Key => "name",
            SortBy::Field(field) => field.name(),
        }
    }
}

/// A lookup through one of the store's indexes
#[derive(Debug, Clone, PartialEq)]
pub enum Query<F> {
    Key(String),
    Value(F, FieldValue),
}
