//! Table-driven projection of source fields onto the canonical schema

use super::{CANONICAL_WIDTH, CanonicalRecord};

/// Where a canonical column takes its value from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Copy the source field at this 0-based position
    Field(usize),
    /// The source has no such column; emit an empty string
    Empty,
}

/// One [`ColumnSource`] per canonical column
pub type ColumnMapping = [ColumnSource; CANONICAL_WIDTH];

/// Project source fields through a mapping
///
/// The caller must have validated `fields` against the registry's expected
/// field count; every `Field(i)` in `mapping` must be in bounds.
#[must_use]
pub fn remap_fields<'a>(mapping: &ColumnMapping, fields: &[&'a str]) -> CanonicalRecord<'a> {
    CanonicalRecord::new(std::array::from_fn(|i| match mapping[i] {
        ColumnSource::Field(source) => fields[source],
        ColumnSource::Empty => "",
    }))
}

/// Highest source position a mapping reads, plus one
#[must_use]
pub const fn required_width(mapping: &ColumnMapping) -> usize {
    let mut width = 0;
    let mut i = 0;
    while i < CANONICAL_WIDTH {
        if let ColumnSource::Field(source) = mapping[i] {
            if source + 1 > width {
                width = source + 1;
            }
        }
        i += 1;
    }
    width
}
