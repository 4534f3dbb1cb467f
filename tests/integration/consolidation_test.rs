use std::fs;

use crate::utils::{Fixture, fgts_row, nao_prev_row, prev_row, read_lines, write_latin1};
use pgfn_merge::writer::write_source;
use pgfn_merge::{Allowlist, Registry, consolidate};

#[test]
fn test_consolidate_rejects_short_previdenciario_row() {
    let fixture = Fixture::new(&[fgts_row("1", "A")], &[prev_row("2", "B")], &[]);
    let config = fixture.config();

    let fgts = config.output_path(Registry::Fgts);
    let prev = config.output_path(Registry::Previdenciario);
    write_source(&fgts, &fixture.sources.fgts, Registry::Fgts, &Allowlist::empty()).unwrap();
    // Previdenciário row missing its last field
    write_latin1(
        &prev,
        "H",
        &["2;PF;PRINCIPAL;B;RJ;PRFN;1;S;A;R;01/01/2020;NAO;PREVIDENCIARIO".to_string()],
    );

    let err = consolidate(
        &[(Registry::Fgts, fgts.as_path()), (Registry::Previdenciario, prev.as_path())],
        &config.consolidated_path(),
    )
    .unwrap_err();
    assert!(err.is_format_error());
    let message = err.to_string();
    assert!(message.contains("previdenciario.csv"));
    assert!(message.contains("expected 14 fields, found 13"));

    // Header and the FGTS row were written before the failure
    assert_eq!(read_lines(&config.consolidated_path()).len(), 2);
}

#[test]
fn test_multiple_source_files_are_concatenated() {
    let fixture = Fixture::new(&[], &[], &[nao_prev_row("1", "PRIMEIRO")]);
    let dir = &fixture.sources.nao_previdenciario;
    write_latin1(
        &dir.join("arquivo_lai_SIDA_RJ.csv"),
        "OUTRO CABECALHO",
        &[nao_prev_row("2", "SEGUNDO"), nao_prev_row("3", "TERCEIRO")],
    );
    // Not a CSV, never read
    fs::write(dir.join("LEIAME.txt"), "x;y").unwrap();

    let output = fixture.output.join("nao_previdenciario.csv");
    let summary = write_source(&output, dir, Registry::NaoPrevidenciario, &Allowlist::empty()).unwrap();
    assert_eq!(summary.files, 2);
    assert_eq!(summary.written, 3);

    let lines = read_lines(&output);
    assert_eq!(lines.len(), 4);
    // Exactly one header, taken from whichever file is listed first
    let headers = lines.iter().filter(|l| l.ends_with(";ARQUIVO_ORIGEM")).count();
    assert_eq!(headers, 1);
    assert!(lines[1..].iter().all(|l| l.ends_with(";NAO_PREVIDENCIARIO")));
}

#[test]
fn test_crlf_sources_produce_lf_output() {
    let fixture = Fixture::new(&[], &[], &[]);
    let dir = &fixture.sources.fgts;
    let row = fgts_row("1", "A");
    fs::write(dir.join("arquivo_lai_FGTS_SP.csv"), format!("H\r\n{row}\r\n")).unwrap();

    let output = fixture.output.join("fgts.csv");
    write_source(&output, dir, Registry::Fgts, &Allowlist::empty()).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert!(!bytes.contains(&b'\r'));
    assert_eq!(read_lines(&output)[1].split(';').count(), 16);
}
