use std::error::Error;

use derive_more::Display;

/// The requested position does not name any field of the record.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
#[display(fmt = "type `{}` has no field at position {} ({} fields, numbered from {})", record, position, field_count, base)]
pub struct PositionNotFound {
    pub record: String,
    pub position: usize,
    pub field_count: usize,
    pub base: usize,
}

impl PositionNotFound {
    pub fn new(record: impl Into<String>, position: usize, field_count: usize) -> Self {
        PositionNotFound {
            record: record.into(),
            position,
            field_count,
            base: crate::BASE_INDEX,
        }
    }
}

impl Error for PositionNotFound {}
