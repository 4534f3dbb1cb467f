//! CPF/CNPJ normalization
//!
//! Identifiers appear formatted (`12.345.678/0001-99`) or bare
//! (`12345678000199`) depending on the source. Matching is done on the bare
//! form.

/// Characters stripped from identifiers before matching
const PUNCTUATION: [char; 3] = ['.', '/', '-'];

/// Canonicalize an identifier for matching
///
/// Removes every `.`, `/` and `-`, then trims surrounding Unicode whitespace
/// (which includes the ISO-8859-1 no-break space `0xA0`). Other
/// characters pass through untouched; the result is not checked to be
/// numeric. Idempotent.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Text before the first `;` of a data line, if the line has one
#[must_use]
pub fn identifier_prefix(line: &str) -> Option<&str> {
    line.split_once(';').map(|(prefix, _)| prefix)
}
