//! Start-up validation of the dashboard dataset.
//!
//! The dataset is a static file, so nothing here runs more than once.
//! Every problem found is collected and reported together, and the
//! program refuses to start with an invalid dataset.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{dataset::Dataset, matrix, route::Route};

/// Tolerance for comparing a precomputed total score with the weighted sum.
pub const TOTAL_SCORE_TOLERANCE: f64 = 0.01;
/// Tolerance for the category weights summing to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;
/// Tolerance for breakdown items summing to their parent cost.
pub const BREAKDOWN_TOLERANCE: f64 = 0.5;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("decision matrix has no categories")]
    EmptyMatrix,
    #[error("category weights sum to {sum:.4}, expected 1.0")]
    WeightSum { sum: f64 },
    #[error("scores for {system:?} have {actual} values but there are {expected} categories")]
    MisalignedScores {
        system: String,
        expected: usize,
        actual: usize,
    },
    #[error("total score for {system:?} is {stored} but the weighted sum is {computed:.4}")]
    TotalMismatch {
        system: String,
        stored: f64,
        computed: f64,
    },
    #[error("decision matrix refers to unknown system {0:?}")]
    UnknownSystem(String),
    #[error("no alternative with id {0:?}")]
    MissingAlternative(String),
    #[error("alternative id {0:?} appears more than once")]
    DuplicateAlternative(String),
    #[error("{kind} breakdown of {id:?} sums to {actual} but the {kind} is {expected}")]
    BreakdownMismatch {
        id: String,
        kind: BreakdownKind,
        expected: f64,
        actual: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownKind {
    Capex,
    Opex,
}

impl fmt::Display for BreakdownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakdownKind::Capex => write!(f, "CAPEX"),
            BreakdownKind::Opex => write!(f, "OPEX"),
        }
    }
}

/// All problems found in one dataset.
#[derive(Debug)]
pub struct ValidationErrors(pub Vec<DatasetError>);

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dataset has {} problem(s):", self.0.len())?;
        for error in &self.0 {
            writeln!(f, "  - {error}")?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    pub fn errors(&self) -> &[DatasetError] {
        &self.0
    }
}

pub fn validate(dataset: &Dataset) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    check_alternatives(dataset, &mut errors);
    check_matrix(dataset, &mut errors);
    check_breakdowns(dataset, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn check_alternatives(dataset: &Dataset, errors: &mut Vec<DatasetError>) {
    let mut seen = HashSet::new();
    for alt in &dataset.alternatives {
        if !seen.insert(alt.id.as_str()) {
            errors.push(DatasetError::DuplicateAlternative(alt.id.clone()));
        }
    }

    // Every technology page must be able to resolve its alternative.
    for id in Route::technologies().iter().filter_map(|route| route.alternative_id()) {
        if dataset.alternative(id).is_none() {
            errors.push(DatasetError::MissingAlternative(id.to_string()));
        }
    }
}

fn check_matrix(dataset: &Dataset, errors: &mut Vec<DatasetError>) {
    let matrix = &dataset.decision_matrix;
    if matrix.categories.is_empty() {
        errors.push(DatasetError::EmptyMatrix);
        return;
    }

    let sum = matrix::weight_sum(&matrix.categories);
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(DatasetError::WeightSum { sum });
    }

    for score in &matrix.scores {
        if dataset.alternative(&score.system).is_none() {
            errors.push(DatasetError::UnknownSystem(score.system.clone()));
        }

        if score.values.len() != matrix.categories.len() {
            errors.push(DatasetError::MisalignedScores {
                system: score.system.clone(),
                expected: matrix.categories.len(),
                actual: score.values.len(),
            });
            continue;
        }

        let computed = matrix::weighted_total(&score.values, &matrix.categories);
        if (computed - score.total_score).abs() > TOTAL_SCORE_TOLERANCE {
            errors.push(DatasetError::TotalMismatch {
                system: score.system.clone(),
                stored: score.total_score,
                computed,
            });
        }
    }
}

fn check_breakdowns(dataset: &Dataset, errors: &mut Vec<DatasetError>) {
    for alt in &dataset.alternatives {
        let details = &alt.details;
        let checks = [
            (BreakdownKind::Capex, &details.capex_breakdown, alt.costs.capex),
            (BreakdownKind::Opex, &details.opex_breakdown, alt.costs.opex_annual),
        ];
        for (kind, items, expected) in checks {
            // An empty OPEX breakdown means the page simply has no chart for it.
            if items.is_empty() && kind == BreakdownKind::Opex {
                continue;
            }
            let actual: f64 = items.iter().map(|item| item.value).sum();
            if (actual - expected).abs() > BREAKDOWN_TOLERANCE {
                errors.push(DatasetError::BreakdownMismatch {
                    id: alt.id.clone(),
                    kind,
                    expected,
                    actual,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::domain::dataset::{fixtures::dataset, Category, ScoreEntry};

    #[rstest]
    fn test_bundled_dataset_is_valid(dataset: Dataset) {
        assert!(validate(&dataset).is_ok());
    }

    #[rstest]
    fn test_misaligned_scores(mut dataset: Dataset) {
        dataset.decision_matrix.scores[1].values.pop();

        let errors = validate(&dataset).err().map(|e| e.0).unwrap_or_default();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            DatasetError::MisalignedScores { system, expected: 5, actual: 4 } if system == "wind"
        ));
    }

    #[rstest]
    fn test_total_mismatch(mut dataset: Dataset) {
        dataset.decision_matrix.scores[0].total_score = 4.5;

        let errors = validate(&dataset).err().map(|e| e.0).unwrap_or_default();
        assert!(matches!(
            &errors[..],
            [DatasetError::TotalMismatch { system, .. }] if system == "solar"
        ));
    }

    #[rstest]
    fn test_total_within_tolerance(mut dataset: Dataset) {
        dataset.decision_matrix.scores[0].total_score = 4.805;
        assert!(validate(&dataset).is_ok());
    }

    #[rstest]
    fn test_weight_sum(mut dataset: Dataset) {
        dataset.decision_matrix.categories[0].weight = 0.5;

        let errors = validate(&dataset).err().map(|e| e.0).unwrap_or_default();
        assert!(errors
            .iter()
            .any(|e| matches!(e, DatasetError::WeightSum { .. })));
    }

    #[rstest]
    fn test_unknown_system(mut dataset: Dataset) {
        dataset.decision_matrix.scores.push(ScoreEntry {
            system: "hydro".to_string(),
            values: vec![1.0; 5],
            total_score: 1.0,
        });

        let errors = validate(&dataset).err().map(|e| e.0).unwrap_or_default();
        assert!(matches!(&errors[..], [DatasetError::UnknownSystem(id)] if id == "hydro"));
    }

    #[rstest]
    fn test_missing_and_duplicate_alternatives(mut dataset: Dataset) {
        dataset.alternatives[2].id = "solar".to_string();

        let messages: Vec<String> = validate(&dataset)
            .err()
            .map(|e| e.0.iter().map(ToString::to_string).collect())
            .unwrap_or_default();
        assert!(messages.contains(&"alternative id \"solar\" appears more than once".to_string()));
        assert!(messages.contains(&"no alternative with id \"dmfc\"".to_string()));
        assert!(messages.contains(&"decision matrix refers to unknown system \"dmfc\"".to_string()));
    }

    #[rstest]
    fn test_capex_breakdown_mismatch(mut dataset: Dataset) {
        dataset.alternatives[0].costs.capex = 5000.0;

        let errors = validate(&dataset).err().map(|e| e.0).unwrap_or_default();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "CAPEX breakdown of \"solar\" sums to 4924 but the CAPEX is 5000"
        );
    }

    #[rstest]
    fn test_opex_breakdown_checked_when_present(mut dataset: Dataset) {
        dataset.alternatives[2].costs.opex_annual = 4980.0;

        let errors = validate(&dataset).err().map(|e| e.0).unwrap_or_default();
        assert!(matches!(
            &errors[..],
            [DatasetError::BreakdownMismatch { kind: BreakdownKind::Opex, .. }]
        ));
    }

    #[rstest]
    fn test_empty_matrix(mut dataset: Dataset) {
        dataset.decision_matrix.categories = Vec::<Category>::new();

        let errors = validate(&dataset).err().map(|e| e.0).unwrap_or_default();
        assert!(matches!(&errors[..], [DatasetError::EmptyMatrix]));
    }

    #[test]
    fn test_validation_errors_display() {
        let errors = ValidationErrors(vec![
            DatasetError::EmptyMatrix,
            DatasetError::UnknownSystem("hydro".to_string()),
        ]);
        assert_eq!(
            errors.to_string(),
            "dataset has 2 problem(s):\n  - decision matrix has no categories\n  - decision matrix refers to unknown system \"hydro\"\n"
        );
    }
}
