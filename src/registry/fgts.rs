//! FGTS registry
//!
//! Debts with the Fundo de Garantia do Tempo de Serviço. The dataset has no
//! `TIPO_CREDITO` column.

use crate::error::Result;
use crate::schema::CanonicalRecord;
use crate::schema::ColumnSource::{Empty, Field};
use crate::schema::ColumnMapping;
use crate::schema::mapping::required_width;

use super::Registry;

/// Fields in a tagged FGTS row
pub const FIELD_COUNT: usize = 16;

/// FGTS fields 0..=11 land in place; `TIPO_CREDITO` is empty and the rest
/// shift right by one.
pub const MAPPING: ColumnMapping = [
    Field(0),  // CPF_CNPJ
    Field(1),  // TIPO_PESSOA
    Field(2),  // TIPO_DEVEDOR
    Field(3),  // NOME_DEVEDOR
    Field(4),  // UF_UNIDADE_RESPONSAVEL
    Field(5),  // UNIDADE_RESPONSAVEL
    Field(6),  // ENTIDADE_RESPONSAVEL
    Field(7),  // UNIDADE_INSCRICAO
    Field(8),  // NUMERO_INSCRICAO
    Field(9),  // TIPO_SITUACAO_INSCRICAO
    Field(10), // SITUACAO_INSCRICAO
    Field(11), // RECEITA_PRINCIPAL
    Empty,     // TIPO_CREDITO
    Field(12), // DATA_INSCRICAO
    Field(13), // INDICADOR_AJUIZADO
    Field(14), // VALOR_CONSOLIDADO
    Field(15), // ARQUIVO_ORIGEM
];

// Every source field is mapped
const _: () = assert!(required_width(&MAPPING) == FIELD_COUNT);

/// Remap a tagged FGTS row into canonical form
///
/// # Errors
/// Fails with a format error unless `fields` has exactly 16 entries
pub fn remap_fgts<'a>(fields: &[&'a str]) -> Result<CanonicalRecord<'a>> {
    Registry::Fgts.remap(fields)
}
