use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

pub enum TableFormat {
    Csv,
    Tsv,
    Json,
}

/// One seed family of a coverage study.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageRow {
    pub repetition: usize,
    pub data_seed: u64,
    pub estimate: f64,
    pub std_error: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub covered: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    rows: Vec<CoverageRow>,
}

impl ResultTable {
    pub fn push(&mut self, row: CoverageRow) {
        self.rows.push(row)
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn rows(&self) -> &[CoverageRow] {
        &self.rows
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: TableFormat) -> Result<(), Error> {
        match fmt {
            TableFormat::Csv => self.export_with_delimiter(path, ','),
            TableFormat::Tsv => self.export_with_delimiter(path, '\t'),
            TableFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(
            w,
            "repetition{d}data_seed{d}estimate{d}std_error{d}ci_lower{d}ci_upper{d}covered",
            d = delimiter
        )?;
        for r in &self.rows {
            writeln!(
                w,
                "{}{d}{}{d}{:.12}{d}{:.12}{d}{:.12}{d}{:.12}{d}{}",
                r.repetition,
                r.data_seed,
                r.estimate,
                r.std_error,
                r.ci_lower,
                r.ci_upper,
                u8::from(r.covered),
                d = delimiter
            )?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.rows)?;
        writeln!(w)?;
        w.flush()
    }
}
