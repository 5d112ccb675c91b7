//! Record shapes held by a store
//!
//! Each catalog variant serves one flat record type. Field names on the wire
//! are fixed by the serde attributes below.

use serde::{Serialize, Serializer};

/// Whole prices within this bound are written as JSON integers
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// A flat record addressable by an integer identifier
pub trait Record: Serialize + Send + Sync + 'static {
    fn id(&self) -> i64;
}

/// Generic catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

impl Record for Item {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Product listing
///
/// Serialized with upper-case keys (`ID`, `TITLE`, ...) and `ImgUrl`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    #[serde(rename = "ImgUrl")]
    pub img_url: String,
}

impl Record for Product {
    fn id(&self) -> i64 {
        self.id
    }
}

/// `100.0` is written as `100`; fractional prices keep their fraction
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub active: bool,
    /// Creation date, `YYYY-MM-DD`
    pub created: String,
}

impl Record for User {
    fn id(&self) -> i64 {
        self.id
    }
}
