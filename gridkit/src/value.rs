//! Cell values produced by column accessors.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

/// A monetary amount in rupees.
///
/// Thin wrapper around `Decimal` so that money columns display with the
/// currency sign while still sorting and searching numerically.
///
/// # Example
///
/// ```
/// use gridkit::Money;
///
/// let price = Money::from_int(779);
/// assert_eq!(price.to_string(), "₹779");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Creates a new Money value.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a Money value from whole rupees.
    pub fn from_int(value: i64) -> Self {
        Self(Decimal::new(value, 0))
    }

    /// Returns the inner decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::default(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0.normalize())
    }
}

/// A dynamic value extracted from a record by a column accessor.
///
/// Tables never look at record fields directly; everything the filter, sort
/// and renderer need goes through this type.
///
/// # Example
///
/// ```
/// use gridkit::CellValue;
///
/// let name = CellValue::from("Route 1");
/// let cost = CellValue::from(200i64);
/// assert_eq!(name.display(), "Route 1");
/// assert_eq!(cost.search_text(), "200");
/// assert_eq!(CellValue::Null.search_text(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing or empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// Monetary value.
    Money(Money),
    /// Text value.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Several values shown comma separated (e.g. add-ons on an order).
    List(Vec<CellValue>),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Text shown in a table cell.
    pub fn display(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Decimal(d) => d.normalize().to_string(),
            CellValue::Money(m) => m.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::List(items) => items
                .iter()
                .map(CellValue::display)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Text matched by the global filter.
    ///
    /// Money is searched by its bare amount so that a query of `779` matches
    /// a price shown as `₹779`.
    pub fn search_text(&self) -> String {
        match self {
            CellValue::Money(m) => m.value().normalize().to_string(),
            CellValue::Bool(b) => b.to_string(),
            other => other.display(),
        }
    }

    fn as_number(&self) -> Option<Decimal> {
        match self {
            CellValue::Int(i) => Some(Decimal::from(*i)),
            CellValue::Decimal(d) => Some(*d),
            CellValue::Money(m) => Some(m.value()),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Decimal(_) | CellValue::Money(_) => 2,
            CellValue::Date(_) => 3,
            CellValue::Text(_) => 4,
            CellValue::List(_) => 5,
        }
    }

    /// Total ordering used by column sorting.
    ///
    /// Nulls sort first, numbers compare numerically across int/decimal/money,
    /// text compares case-insensitively, dates chronologically. Values of
    /// different kinds order by kind.
    pub fn sort_cmp(&self, other: &CellValue) -> Ordering {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return a.cmp(&b);
        }
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (CellValue::List(a), CellValue::List(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    let ord = x.sort_cmp(y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<u64> for CellValue {
    fn from(v: u64) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<Decimal> for CellValue {
    fn from(v: Decimal) -> Self {
        CellValue::Decimal(v)
    }
}

impl From<Money> for CellValue {
    fn from(v: Money) -> Self {
        CellValue::Money(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        CellValue::Text(v.clone())
    }
}

impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        CellValue::Date(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Null)
    }
}

impl<T: Into<CellValue>> From<Vec<T>> for CellValue {
    fn from(v: Vec<T>) -> Self {
        CellValue::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Null.display(), "");
        assert_eq!(CellValue::from(true).display(), "Yes");
        assert_eq!(CellValue::from(Money::from_int(500)).display(), "₹500");
        assert_eq!(
            CellValue::from(vec!["Lemons", "Mint"]).display(),
            "Lemons, Mint"
        );
        let date = NaiveDate::from_ymd_opt(2023, 7, 17).unwrap();
        assert_eq!(CellValue::from(date).display(), "2023-07-17");
    }

    #[test]
    fn test_search_text_strips_currency() {
        assert_eq!(CellValue::from(Money::from_int(779)).search_text(), "779");
        assert_eq!(CellValue::from(Decimal::new(1250, 2)).search_text(), "12.5");
    }

    #[test]
    fn test_sort_cmp_numbers_across_kinds() {
        let a = CellValue::from(5i64);
        let b = CellValue::from(Money::from_int(10));
        assert_eq!(a.sort_cmp(&b), Ordering::Less);
        assert_eq!(CellValue::Null.sort_cmp(&a), Ordering::Less);
    }

    #[test]
    fn test_sort_cmp_text_case_insensitive() {
        let a = CellValue::from("alice");
        let b = CellValue::from("Bob");
        assert_eq!(a.sort_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_option_into_null() {
        let missing: Option<&str> = None;
        assert!(CellValue::from(missing).is_null());
    }
}
