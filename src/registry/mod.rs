//! PGFN debt registries
//!
//! The PGFN publishes its active-debt roll as three datasets with different
//! layouts:
//! - FGTS: unpaid employer contributions to the severance fund (16 fields)
//! - Previdenciário: social-security debts (14 fields)
//! - Não Previdenciário: all other federal debts (14 fields)
//!
//! Field counts include the `ARQUIVO_ORIGEM` column appended by the
//! per-source writer. Each registry owns a [`ColumnMapping`] that projects
//! its fields onto the canonical schema.

use std::fmt;

use crate::error::{PgfnError, Result};
use crate::schema::{CanonicalRecord, ColumnMapping, remap_fields};

pub mod fgts;
pub mod nao_previdenciario;
pub mod previdenciario;

pub use fgts::remap_fgts;
pub use nao_previdenciario::remap_nao_previdenciario;
pub use previdenciario::remap_previdenciario;

/// One of the three PGFN datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Registry {
    Fgts,
    Previdenciario,
    NaoPrevidenciario,
}

impl Registry {
    /// Every registry, in consolidation order
    pub const ALL: [Registry; 3] = [Self::Fgts, Self::Previdenciario, Self::NaoPrevidenciario];

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fgts => "FGTS",
            Self::Previdenciario => "Previdenciário",
            Self::NaoPrevidenciario => "Não Previdenciário",
        }
    }

    /// Value written to the `ARQUIVO_ORIGEM` column
    #[must_use]
    pub const fn origin_tag(self) -> &'static str {
        match self {
            Self::Fgts => "FGTS",
            Self::Previdenciario => "PREVIDENCIARIO",
            Self::NaoPrevidenciario => "NAO_PREVIDENCIARIO",
        }
    }

    /// Number of `;`-separated fields in a tagged per-source row
    #[must_use]
    pub const fn expected_fields(self) -> usize {
        match self {
            Self::Fgts => fgts::FIELD_COUNT,
            Self::Previdenciario => previdenciario::FIELD_COUNT,
            Self::NaoPrevidenciario => nao_previdenciario::FIELD_COUNT,
        }
    }

    /// File name of the per-source output
    #[must_use]
    pub const fn output_file_name(self) -> &'static str {
        match self {
            Self::Fgts => "fgts.csv",
            Self::Previdenciario => "previdenciario.csv",
            Self::NaoPrevidenciario => "nao_previdenciario.csv",
        }
    }

    /// File name of the published zip archive
    #[must_use]
    pub const fn archive_name(self) -> &'static str {
        match self {
            Self::Fgts => "Dados_abertos_FGTS.zip",
            Self::Previdenciario => "Dados_abertos_Previdenciario.zip",
            Self::NaoPrevidenciario => "Dados_abertos_Nao_Previdenciario.zip",
        }
    }

    /// How this registry's fields map onto the canonical schema
    #[must_use]
    pub const fn mapping(self) -> &'static ColumnMapping {
        match self {
            Self::Fgts => &fgts::MAPPING,
            Self::Previdenciario => &previdenciario::MAPPING,
            Self::NaoPrevidenciario => &nao_previdenciario::MAPPING,
        }
    }

    /// Remap a tagged per-source row into canonical form
    ///
    /// # Errors
    /// Returns [`PgfnError::FieldCount`] unless `fields` has exactly
    /// [`Registry::expected_fields`] entries
    pub fn remap<'a>(self, fields: &[&'a str]) -> Result<CanonicalRecord<'a>> {
        if fields.len() != self.expected_fields() {
            return Err(PgfnError::FieldCount {
                registry: self.name(),
                expected: self.expected_fields(),
                found: fields.len(),
            });
        }
        Ok(remap_fields(self.mapping(), fields))
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
