//! Filtering by CPF/CNPJ
//!
//! Records are kept when their leading identifier, once normalized, belongs
//! to the allowlist. An empty allowlist disables filtering.

pub mod allowlist;
pub mod identifier;

pub use allowlist::{Allowlist, load_allowlist};
pub use identifier::{identifier_prefix, normalize};
