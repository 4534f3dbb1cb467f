//! Não Previdenciário registry
//!
//! Every other federal debt. Same layout as Previdenciário except that the
//! tenth field is `TIPO_CREDITO`, so `RECEITA_PRINCIPAL` stays empty.

use crate::error::Result;
use crate::schema::CanonicalRecord;
use crate::schema::ColumnMapping;
use crate::schema::mapping::required_width;
use crate::schema::ColumnSource::{Empty, Field};

use super::Registry;

/// Fields in a tagged Não Previdenciário row
pub const FIELD_COUNT: usize = 14;

pub const MAPPING: ColumnMapping = [
    Field(0),  // CPF_CNPJ
    Field(1),  // TIPO_PESSOA
    Field(2),  // TIPO_DEVEDOR
    Field(3),  // NOME_DEVEDOR
    Field(4),  // UF_UNIDADE_RESPONSAVEL
    Field(5),  // UNIDADE_RESPONSAVEL
    Empty,     // ENTIDADE_RESPONSAVEL
    Empty,     // UNIDADE_INSCRICAO
    Field(6),  // NUMERO_INSCRICAO
    Field(7),  // TIPO_SITUACAO_INSCRICAO
    Field(8),  // SITUACAO_INSCRICAO
    Empty,     // RECEITA_PRINCIPAL
    Field(9),  // TIPO_CREDITO
    Field(10), // DATA_INSCRICAO
    Field(11), // INDICADOR_AJUIZADO
    Field(12), // VALOR_CONSOLIDADO
    Field(13), // ARQUIVO_ORIGEM
];

// Every source field is mapped
const _: () = assert!(required_width(&MAPPING) == FIELD_COUNT);

/// Remap a tagged Não Previdenciário row into canonical form
///
/// # Errors
/// Fails with a format error unless `fields` has exactly 14 entries
pub fn remap_nao_previdenciario<'a>(fields: &[&'a str]) -> Result<CanonicalRecord<'a>> {
    Registry::NaoPrevidenciario.remap(fields)
}
