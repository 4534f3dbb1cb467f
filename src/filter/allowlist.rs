//! Allowlist of CPF/CNPJ identifiers
//!
//! The allowlist file holds one identifier per line, in ISO-8859-1, with or
//! without punctuation.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::filter::identifier::normalize;
use crate::utils::io::LineReader;
use crate::utils::logging::{log_operation_start, log_warning};

/// A set of normalized identifiers
///
/// An empty allowlist means "no filtering": every identifier is admitted.
#[derive(Debug, Clone, Default)]
pub struct Allowlist {
    identifiers: FxHashSet<String>,
}

impl Allowlist {
    /// Allowlist that admits everything
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an allowlist from raw identifiers, normalizing each one
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            identifiers: raw.into_iter().map(|s| normalize(s.as_ref())).collect(),
        }
    }

    /// Whether filtering is disabled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Number of distinct normalized identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Whether a raw identifier passes the filter
    ///
    /// `raw` is normalized before the lookup.
    #[must_use]
    pub fn admits(&self, raw: &str) -> bool {
        self.is_empty() || self.identifiers.contains(&normalize(raw))
    }

    /// Whether an already-normalized identifier is in the set
    #[must_use]
    pub fn contains(&self, normalized: &str) -> bool {
        self.identifiers.contains(normalized)
    }
}

/// Load the allowlist file, if one was given
///
/// Without a path the result is empty. Duplicates collapse after
/// normalization. A blank line contributes the empty identifier.
///
/// # Errors
/// Returns an IO error if the file cannot be opened or read
pub fn load_allowlist(path: Option<&Path>) -> Result<Allowlist> {
    let Some(path) = path else {
        log::info!("No allowlist given; every record will be kept");
        return Ok(Allowlist::empty());
    };

    log_operation_start("Reading allowlist", path);
    let lines = LineReader::open(path)?.collect::<Result<Vec<_>>>()?;
    let allowlist = Allowlist::from_raw(&lines);

    if allowlist.is_empty() {
        // Same outcome as passing no file at all
        log_warning("Allowlist file is empty, filtering is disabled", Some(path));
    } else {
        log::info!("Allowlist holds {} distinct identifiers", allowlist.len());
    }

    Ok(allowlist)
}
