//! This module defines the canonical, type-safe representation of a raw cell
//! value, and the `Record` contract that lets the table engine read any row type.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The stable identity of a row, independent of its position in any ordering.
pub type RowId = String;

/// The raw, pre-render value of a single cell.
///
/// Sorting, filtering and faceting operate on this value only; whatever a
/// column's `render` callback produces is for display and never feeds back here.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Returns `true` for `Int` and `Float`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Ordering rank between the value families: numbers, then text, then missing.
    fn family_rank(&self) -> u8 {
        match self {
            Self::Int(_) | Self::Float(_) => 0,
            Self::Text(_) => 1,
            Self::Missing => 2,
        }
    }
}

/// Natural ascending order: numbers numerically, text by code point, `Missing` last.
impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Float(a), Self::Float(b)) => cmp_floats(*a, *b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (a, b) => a.family_rank().cmp(&b.family_rank()),
        }
    }
}

/// `-0.0 == 0.0`; NaNs fall back to `total_cmp` (positive NaN above everything).
fn cmp_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Exact comparison, without rounding `i` to the nearest `f64`.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    // 2^63, the first float above i64::MAX.
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return (i as f64).total_cmp(&f);
    }
    if f >= TWO_POW_63 {
        return Ordering::Less;
    }
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }
    // In range, so the truncated value converts to i64 exactly.
    match i.cmp(&(f.trunc() as i64)) {
        Ordering::Equal if f.fract() > 0.0 => Ordering::Less,
        Ordering::Equal if f.fract() < 0.0 => Ordering::Greater,
        ord => ord,
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue {}

// Must agree with `Eq`: Int(2), Float(2.0) and Float(-0.0)/Float(0.0) pairs are
// equal, so numbers hash as normalized f64 bits.
impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family_rank().hash(state);
        match self {
            Self::Int(v) => (*v as f64).to_bits().hash(state),
            Self::Float(v) => {
                let v = if *v == 0.0 { 0.0 } else { *v };
                v.to_bits().hash(state)
            }
            Self::Text(s) => s.hash(state),
            Self::Missing => {}
        }
    }
}

/// The canonical raw text of a value. Substring filters match against this.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
            Self::Missing => Ok(()),
        }
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Self::Missing)
    }
}

//==================================================================================
// Record Contract
//==================================================================================

/// A row the table engine can sort, filter, facet and page.
pub trait Record {
    /// Explicit stable identifier. Must not depend on the row's position.
    fn row_id(&self) -> RowId;

    /// The raw value for `key`. Unknown keys yield `CellValue::Missing`.
    fn value(&self, key: &str) -> CellValue;
}
