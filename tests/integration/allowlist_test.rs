use crate::utils::{Fixture, fgts_row, nao_prev_row, prev_row, read_lines};
use pgfn_merge::{Registry, run};

fn fixture() -> Fixture {
    Fixture::new(
        &[fgts_row("12.345.678/0001-99", "ACME LTDA"), fgts_row("111.222.333-44", "MARIA")],
        &[prev_row("111.222.333-44", "MARIA")],
        &[nao_prev_row("98.765.432/0001-10", "OUTRA SA")],
    )
}

#[test]
fn test_empty_allowlist_file_keeps_everything() {
    let fixture = fixture();
    let config = fixture.config().with_allowlist(fixture.allowlist(&[]));

    let summary = run(&config).unwrap();
    assert_eq!(summary.allowlist_size, 0);
    assert_eq!(summary.consolidated.total_rows(), 4);
}

#[test]
fn test_unmatched_allowlist_writes_headers_only() {
    let fixture = fixture();
    let config = fixture.config().with_allowlist(fixture.allowlist(&["00000000000000"]));

    let summary = run(&config).unwrap();
    assert_eq!(summary.consolidated.total_rows(), 0);
    for registry in Registry::ALL {
        assert_eq!(read_lines(&config.output_path(registry)).len(), 1);
    }
    assert_eq!(read_lines(&config.consolidated_path()).len(), 1);

    let filtered: usize = summary.sources.iter().map(|s| s.filtered_out()).sum();
    assert_eq!(filtered, 4);
}

#[test]
fn test_formatted_and_bare_identifiers_match() {
    let fixture = fixture();
    // Same CPF written two ways, plus surrounding whitespace
    let config = fixture
        .config()
        .with_allowlist(fixture.allowlist(&["  111.222.333-44 ", "11122233344"]));

    let summary = run(&config).unwrap();
    assert_eq!(summary.allowlist_size, 1);
    assert_eq!(summary.consolidated.rows_for(Registry::Fgts), 1);
    assert_eq!(summary.consolidated.rows_for(Registry::Previdenciario), 1);
    assert_eq!(summary.consolidated.rows_for(Registry::NaoPrevidenciario), 0);
}

#[test]
fn test_missing_allowlist_file_is_io_error() {
    let fixture = fixture();
    let config = fixture
        .config()
        .with_allowlist(fixture.root.path().join("nao_existe.txt"));

    let err = run(&config).unwrap_err();
    assert!(err.is_io_error());
    assert!(!config.output_path(Registry::Fgts).exists());
}
