//! Catalog module
//!
//! One generic "list + optional lookup" component over a record shape.
//! The router only sees the object-safe [`Collection`] trait, so it never
//! needs to know which record type backs the process.

mod variant;

pub use variant::CatalogVariant;

use serde::Serialize;
use std::fmt;

use crate::store::{Record, RecordStore};

/// Static payload served by the home route
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HomeInfo {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub endpoints: String,
}

/// Why a lookup produced no record
#[derive(Debug)]
pub enum LookupError {
    /// Identifier token is not an integer
    InvalidId,
    /// No record carries the identifier
    NotFound,
    /// The matched record failed to serialize
    Encode(serde_json::Error),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => f.write_str("invalid identifier"),
            Self::NotFound => f.write_str("record not found"),
            Self::Encode(e) => write!(f, "failed to encode record: {e}"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Read-only view of a record collection, erased over the record type
pub trait Collection: Send + Sync {
    /// Path of the list route, e.g. `/users`
    fn collection_path(&self) -> &'static str;

    /// Singular noun used in error messages, e.g. `user`
    fn noun(&self) -> &'static str;

    fn supports_lookup(&self) -> bool;

    fn home(&self) -> &HomeInfo;

    fn len(&self) -> usize;

    /// Whole store as a JSON array, declaration order
    fn list_json(&self) -> serde_json::Result<Vec<u8>>;

    /// Parse `token` as an id and encode the first matching record
    fn lookup_json(&self, token: &str) -> Result<Vec<u8>, LookupError>;
}

/// Store plus the descriptor it is served under
pub struct Catalog<R> {
    variant: CatalogVariant,
    noun: &'static str,
    home: HomeInfo,
    store: RecordStore<R>,
}

impl<R: Record> Catalog<R> {
    pub fn new(variant: CatalogVariant, noun: &'static str, store: RecordStore<R>) -> Self {
        Self {
            variant,
            noun,
            home: variant.home(),
            store,
        }
    }
}

impl<R: Record> Collection for Catalog<R> {
    fn collection_path(&self) -> &'static str {
        self.variant.collection_path()
    }

    fn noun(&self) -> &'static str {
        self.noun
    }

    fn supports_lookup(&self) -> bool {
        self.variant.supports_lookup()
    }

    fn home(&self) -> &HomeInfo {
        &self.home
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn list_json(&self) -> serde_json::Result<Vec<u8>> {
        encode_json(self.store.all())
    }

    fn lookup_json(&self, token: &str) -> Result<Vec<u8>, LookupError> {
        let id = parse_id(token)?;
        let record = self.store.find(id).ok_or(LookupError::NotFound)?;
        encode_json(record).map_err(LookupError::Encode)
    }
}

/// Parse an identifier token. A leading sign is accepted; anything else
/// non-numeric, including the empty token, is rejected.
pub fn parse_id(token: &str) -> Result<i64, LookupError> {
    token.parse::<i64>().map_err(|_| LookupError::InvalidId)
}

/// Compact JSON followed by a single newline
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = serde_json::to_vec(value)?;
    buf.push(b'\n');
    Ok(buf)
}
