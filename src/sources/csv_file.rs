use crate::core::{Record, Sample};
use crate::sources::{SampleSource, SourceError};
use crate::utils::file_parsing::{parse_flag, split_csv_record};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Sample read from a CSV file with a header row.
///
/// Columns are picked by name; any other column is ignored. Blank lines are
/// skipped. Treatment values go through
/// [`parse_flag`](crate::utils::file_parsing::parse_flag).
#[derive(Debug, Clone)]
pub struct CsvSampleSource {
    path: PathBuf,
    treatment_column: String,
    outcome_column: String,
    covariate_columns: Vec<String>,
}

impl CsvSampleSource {
    pub fn new<P: Into<PathBuf>>(
        path: P,
        treatment_column: &str,
        outcome_column: &str,
        covariate_columns: &[String],
    ) -> Self {
        Self {
            path: path.into(),
            treatment_column: treatment_column.to_string(),
            outcome_column: outcome_column.to_string(),
            covariate_columns: covariate_columns.to_vec(),
        }
    }

    fn column_index(header: &[String], name: &str) -> Result<usize, SourceError> {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SourceError::MissingColumn(name.to_string()))
    }
}

fn parse_number(line: usize, column: &str, value: &str) -> Result<f64, SourceError> {
    value.parse::<f64>().map_err(|_| SourceError::Parse {
        line,
        column: column.to_string(),
        value: value.to_string(),
    })
}

impl SampleSource for CsvSampleSource {
    fn name(&self) -> &str {
        "csv-file"
    }

    fn load(&mut self) -> Result<Sample, SourceError> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut lines = reader.lines().enumerate();

        let header = loop {
            match lines.next() {
                None => return Err(SourceError::Empty),
                Some((_, line)) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break split_csv_record(&line);
                    }
                }
            }
        };

        let t_idx = Self::column_index(&header, &self.treatment_column)?;
        let y_idx = Self::column_index(&header, &self.outcome_column)?;
        let x_idx = self
            .covariate_columns
            .iter()
            .map(|c| Self::column_index(&header, c))
            .collect::<Result<Vec<_>, _>>()?;

        let mut records = Vec::new();
        for (i, line) in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let line_no = i + 1;
            let fields = split_csv_record(&line);
            if fields.len() != header.len() {
                return Err(SourceError::FieldCount {
                    line: line_no,
                    expected: header.len(),
                    found: fields.len(),
                });
            }

            let treatment = parse_flag(&fields[t_idx]).ok_or_else(|| SourceError::Parse {
                line: line_no,
                column: self.treatment_column.clone(),
                value: fields[t_idx].clone(),
            })?;
            let outcome = parse_number(line_no, &self.outcome_column, &fields[y_idx])?;
            let covariates = x_idx
                .iter()
                .zip(&self.covariate_columns)
                .map(|(&j, name)| parse_number(line_no, name, &fields[j]))
                .collect::<Result<Vec<_>, _>>()?;

            records.push(Record::new(treatment, outcome, covariates));
        }

        Ok(Sample::new(records)?)
    }
}
