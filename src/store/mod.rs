//! Record store module
//!
//! An ordered, immutable sequence of records built once at startup.
//! There is no mutation API; concurrent readers share it through `Arc`.

pub mod record;
pub mod seed;

pub use record::Record;

/// Fixed in-memory record sequence
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    /// Take ownership of `records`, keeping declaration order
    pub const fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// All records in declaration order
    pub fn all(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Linear scan for `id`. The first matching record wins when ids repeat.
    pub fn find(&self, id: i64) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }
}
