use crate::config::build::BuildError;
use crate::config::choices::{CsvParameters, SourceChoice, SyntheticParameters};
use crate::sources::{CsvSampleSource, SampleSource, SyntheticSampleSource};

impl TryFrom<CsvParameters> for CsvSampleSource {
    type Error = BuildError;

    fn try_from(parameters: CsvParameters) -> Result<Self, Self::Error> {
        if parameters.treatment_column.is_empty() || parameters.outcome_column.is_empty() {
            return Err(BuildError::InvalidParameter(
                "treatment and outcome columns must be named".into(),
            ));
        }
        Ok(CsvSampleSource::new(
            parameters.path,
            &parameters.treatment_column,
            &parameters.outcome_column,
            &parameters.covariate_columns,
        ))
    }
}

impl TryFrom<SyntheticParameters> for SyntheticSampleSource {
    type Error = BuildError;

    fn try_from(parameters: SyntheticParameters) -> Result<Self, Self::Error> {
        if parameters.size < 2 {
            return Err(BuildError::InvalidParameter("size must be >= 2".into()));
        }
        SyntheticSampleSource::new(
            parameters.size,
            parameters.effect,
            parameters.noise_std,
            parameters.covariates,
            parameters.seed,
        )
        .map_err(BuildError::from)
    }
}

pub fn build_source(choice: SourceChoice) -> Result<Box<dyn SampleSource>, BuildError> {
    match choice {
        SourceChoice::CsvFile(p) => {
            let s = CsvSampleSource::try_from(p)?;
            Ok(Box::new(s))
        }
        SourceChoice::Synthetic(p) => {
            let s = SyntheticSampleSource::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}
