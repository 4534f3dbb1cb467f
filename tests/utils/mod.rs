use std::fs;
use std::path::{Path, PathBuf};

use pgfn_merge::{PipelineConfig, SourceDirs};
use tempfile::TempDir;

pub const FGTS_HEADER: &str = "CPF_CNPJ;TIPO_PESSOA;TIPO_DEVEDOR;NOME_DEVEDOR;UF_UNIDADE_RESPONSAVEL;\
UNIDADE_RESPONSAVEL;ENTIDADE_RESPONSAVEL;UNIDADE_INSCRICAO;NUMERO_INSCRICAO;TIPO_SITUACAO_INSCRICAO;\
SITUACAO_INSCRICAO;RECEITA_PRINCIPAL;DATA_INSCRICAO;INDICADOR_AJUIZADO;VALOR_CONSOLIDADO";

pub const PREV_HEADER: &str = "CPF_CNPJ;TIPO_PESSOA;TIPO_DEVEDOR;NOME_DEVEDOR;UF_UNIDADE_RESPONSAVEL;\
UNIDADE_RESPONSAVEL;NUMERO_INSCRICAO;TIPO_SITUACAO_INSCRICAO;SITUACAO_INSCRICAO;RECEITA_PRINCIPAL;\
DATA_INSCRICAO;INDICADOR_AJUIZADO;VALOR_CONSOLIDADO";

pub const NAO_PREV_HEADER: &str = "CPF_CNPJ;TIPO_PESSOA;TIPO_DEVEDOR;NOME_DEVEDOR;UF_UNIDADE_RESPONSAVEL;\
UNIDADE_RESPONSAVEL;NUMERO_INSCRICAO;TIPO_SITUACAO_INSCRICAO;SITUACAO_INSCRICAO;TIPO_CREDITO;\
DATA_INSCRICAO;INDICADOR_AJUIZADO;VALOR_CONSOLIDADO";

/// A realistic FGTS row (15 fields) for `id`
#[must_use]
pub fn fgts_row(id: &str, name: &str) -> String {
    format!(
        "{id};Pessoa jurídica;PRINCIPAL;{name};SP;PRFN 3ª REGIAO;CAIXA ECONOMICA FEDERAL;\
GERENCIA SP;FGSP201500001;Em cobrança;ATIVA EM COBRANCA;FGTS;15/03/2015;NAO;12345,67"
    )
}

/// A realistic Previdenciário row (13 fields) for `id`
#[must_use]
pub fn prev_row(id: &str, name: &str) -> String {
    format!(
        "{id};Pessoa física;CORRESPONSAVEL;{name};RJ;PRFN 2ª REGIAO;123456789;\
Em cobrança;ATIVA AJUIZADA;CONTRIBUICAO PREVIDENCIARIA;02/05/2018;SIM;987,10"
    )
}

/// A realistic Não Previdenciário row (13 fields) for `id`
#[must_use]
pub fn nao_prev_row(id: &str, name: &str) -> String {
    format!(
        "{id};Pessoa jurídica;PRINCIPAL;{name};MG;PRFN 6ª REGIAO;8011900123;\
Benefício fiscal;ATIVA EM COBRANCA;MULTA;10/10/2019;NAO;55,00"
    )
}

/// Three source directories and an output directory inside one temp dir
pub struct Fixture {
    pub root: TempDir,
    pub sources: SourceDirs,
    pub output: PathBuf,
}

impl Fixture {
    /// Create the directory layout, each source holding one CSV file
    #[must_use]
    pub fn new(fgts: &[String], prev: &[String], nao_prev: &[String]) -> Self {
        let root = tempfile::tempdir().unwrap();
        let sources = SourceDirs::new(
            root.path().join("fgts"),
            root.path().join("prev"),
            root.path().join("nao_prev"),
        );
        let output = root.path().join("out");
        fs::create_dir(&output).unwrap();

        write_source_dir(&sources.fgts, "arquivo_lai_FGTS_SP.csv", FGTS_HEADER, fgts);
        write_source_dir(&sources.previdenciario, "arquivo_lai_PREV_RJ.csv", PREV_HEADER, prev);
        write_source_dir(
            &sources.nao_previdenciario,
            "arquivo_lai_SIDA_MG.csv",
            NAO_PREV_HEADER,
            nao_prev,
        );

        Self { root, sources, output }
    }

    /// Write an allowlist file with one line per entry
    #[must_use]
    pub fn allowlist(&self, entries: &[&str]) -> PathBuf {
        let path = self.root.path().join("cnpjs.txt");
        let mut text = entries.join("\n");
        if !entries.is_empty() {
            text.push('\n');
        }
        fs::write(&path, text).unwrap();
        path
    }

    #[must_use]
    pub fn config(&self) -> PipelineConfig {
        PipelineConfig::new(self.sources.clone(), &self.output)
    }
}

/// Create `dir` holding a single CSV file with `header` and `rows`
pub fn write_source_dir(dir: &Path, file_name: &str, header: &str, rows: &[String]) {
    fs::create_dir_all(dir).unwrap();
    write_latin1(&dir.join(file_name), header, rows);
}

/// Write a CSV file in ISO-8859-1
pub fn write_latin1(path: &Path, header: &str, rows: &[String]) {
    let mut text = String::from(header);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    let mut bytes = Vec::new();
    pgfn_merge::utils::io::latin1::encode_into(&text, &mut bytes).unwrap();
    fs::write(path, bytes).unwrap();
}

/// Read an ISO-8859-1 output file as lines
#[must_use]
pub fn read_lines(path: &Path) -> Vec<String> {
    let bytes = fs::read(path).unwrap();
    pgfn_merge::utils::io::latin1::decode(&bytes)
        .lines()
        .map(str::to_string)
        .collect()
}
