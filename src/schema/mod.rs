//! Canonical consolidated schema
//!
//! The three PGFN datasets share most columns but each one lacks a few.
//! The consolidated output uses the 17-column superset defined here; each
//! registry describes how its own fields land in it through a
//! [`ColumnMapping`].

use smallvec::SmallVec;

pub mod mapping;

pub use mapping::{ColumnMapping, ColumnSource, remap_fields};

/// Field delimiter used by every input and output file
pub const DELIMITER: char = ';';

/// Name of the column that records which dataset a row came from
pub const ORIGIN_COLUMN: &str = "ARQUIVO_ORIGEM";

/// Number of columns in the consolidated schema
pub const CANONICAL_WIDTH: usize = 17;

/// Column names of the consolidated schema, in output order
pub const CANONICAL_COLUMNS: [&str; CANONICAL_WIDTH] = [
    "CPF_CNPJ",
    "TIPO_PESSOA",
    "TIPO_DEVEDOR",
    "NOME_DEVEDOR",
    "UF_UNIDADE_RESPONSAVEL",
    "UNIDADE_RESPONSAVEL",
    "ENTIDADE_RESPONSAVEL",
    "UNIDADE_INSCRICAO",
    "NUMERO_INSCRICAO",
    "TIPO_SITUACAO_INSCRICAO",
    "SITUACAO_INSCRICAO",
    "RECEITA_PRINCIPAL",
    "TIPO_CREDITO",
    "DATA_INSCRICAO",
    "INDICADOR_AJUIZADO",
    "VALOR_CONSOLIDADO",
    ORIGIN_COLUMN,
];

/// Position of a canonical column by name
#[must_use]
pub fn column_index(name: &str) -> Option<usize> {
    CANONICAL_COLUMNS.iter().position(|c| *c == name)
}

/// Split a line on `;`, keeping empty fields (including trailing ones)
#[must_use]
pub fn split_fields(line: &str) -> SmallVec<[&str; 16]> {
    line.split(DELIMITER).collect()
}

/// One row of the consolidated output, borrowing from the source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRecord<'a> {
    fields: [&'a str; CANONICAL_WIDTH],
}

impl<'a> CanonicalRecord<'a> {
    pub(crate) fn new(fields: [&'a str; CANONICAL_WIDTH]) -> Self {
        Self { fields }
    }

    /// All 17 fields in canonical order
    #[must_use]
    pub fn fields(&self) -> &[&'a str; CANONICAL_WIDTH] {
        &self.fields
    }

    /// Field at a canonical position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// Field by canonical column name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&'a str> {
        column_index(name).map(|i| self.fields[i])
    }

    /// Origin tag of the row
    #[must_use]
    pub fn origin(&self) -> &'a str {
        self.fields[CANONICAL_WIDTH - 1]
    }

    /// Number of fields, always [`CANONICAL_WIDTH`]
    #[must_use]
    pub fn len(&self) -> usize {
        CANONICAL_WIDTH
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
