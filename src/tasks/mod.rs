mod coverage_study;
mod effect_study;
mod result_table;

pub use coverage_study::{CoverageError, CoverageReport, CoverageStudy};
pub use effect_study::{EffectStudy, StudyReport, run_from_file};
pub use result_table::{CoverageRow, ResultTable, TableFormat};
