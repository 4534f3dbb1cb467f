use pgfn_merge::registry::{remap_fgts, remap_nao_previdenciario, remap_previdenciario};
use pgfn_merge::schema::{CANONICAL_WIDTH, split_fields};
use pgfn_merge::{CANONICAL_COLUMNS, Registry};

use crate::utils::{fgts_row, nao_prev_row, prev_row};

fn tagged(row: &str, registry: Registry) -> String {
    format!("{row};{}", registry.origin_tag())
}

#[test]
fn test_every_registry_fills_identifier_and_origin() {
    let rows = [
        (Registry::Fgts, tagged(&fgts_row("1", "A"), Registry::Fgts)),
        (Registry::Previdenciario, tagged(&prev_row("1", "A"), Registry::Previdenciario)),
        (
            Registry::NaoPrevidenciario,
            tagged(&nao_prev_row("1", "A"), Registry::NaoPrevidenciario),
        ),
    ];

    for (registry, row) in &rows {
        let fields = split_fields(row);
        assert_eq!(fields.len(), registry.expected_fields());

        let record = registry.remap(&fields).unwrap();
        assert_eq!(record.len(), CANONICAL_WIDTH);
        assert_eq!(record.column("CPF_CNPJ"), Some("1"));
        assert_eq!(record.column("NOME_DEVEDOR"), Some("A"));
        assert_eq!(record.origin(), registry.origin_tag());
    }
}

#[test]
fn test_columns_absent_from_each_layout_are_empty() {
    let absent = |record: &pgfn_merge::CanonicalRecord<'_>| -> Vec<&'static str> {
        CANONICAL_COLUMNS
            .iter()
            .zip(record.fields())
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    };

    let row = tagged(&fgts_row("1", "A"), Registry::Fgts);
    let fields = split_fields(&row);
    assert_eq!(absent(&remap_fgts(&fields).unwrap()), vec!["TIPO_CREDITO"]);

    let row = tagged(&prev_row("1", "A"), Registry::Previdenciario);
    let fields = split_fields(&row);
    assert_eq!(
        absent(&remap_previdenciario(&fields).unwrap()),
        vec!["ENTIDADE_RESPONSAVEL", "UNIDADE_INSCRICAO", "TIPO_CREDITO"]
    );

    let row = tagged(&nao_prev_row("1", "A"), Registry::NaoPrevidenciario);
    let fields = split_fields(&row);
    let record = remap_nao_previdenciario(&fields).unwrap();
    assert_eq!(
        absent(&record),
        vec!["ENTIDADE_RESPONSAVEL", "UNIDADE_INSCRICAO", "RECEITA_PRINCIPAL"]
    );
    assert_eq!(record.column("TIPO_CREDITO"), Some("MULTA"));
}

#[test]
fn test_untagged_row_is_rejected() {
    // Source rows lack ARQUIVO_ORIGEM until the per-source writer adds it
    let row = fgts_row("1", "A");
    let fields = split_fields(&row);
    let err = remap_fgts(&fields).unwrap_err();
    assert!(err.is_format_error());
    assert_eq!(
        err.to_string(),
        "FGTS record has unexpected format: expected 16 fields, found 15"
    );
}

#[test]
fn test_trailing_empty_fields_are_preserved() {
    let row = "1;PF;PRINCIPAL;A;SP;PRFN;1;S;A;R;01/01/2020;NAO;;PREVIDENCIARIO";
    let fields = split_fields(row);
    let record = remap_previdenciario(&fields).unwrap();
    assert_eq!(record.column("VALOR_CONSOLIDADO"), Some(""));
    assert_eq!(
        record.fields().join(";"),
        "1;PF;PRINCIPAL;A;SP;PRFN;;;1;S;A;R;;01/01/2020;NAO;;PREVIDENCIARIO"
    );
}
