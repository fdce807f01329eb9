//! Shared input handling for the Brier score commands

use std::path::PathBuf;

use anyhow::Context;
use survbrier_metrics::{BrierScoreComputer, BrierScoreCurve, EventOfInterest};

use crate::{command::ScoreKind, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvaluationArg {
    /// Path to the training labels JSON file (used to fit the censoring distribution)
    pub train: PathBuf,

    /// Path to the test labels JSON file
    pub test: PathBuf,

    /// Path to the predictions JSON file ({"times": [...], "values": [[...], ...]})
    pub predictions: PathBuf,

    /// What the prediction values represent
    #[arg(long, default_value = "survival")]
    pub kind: ScoreKind,

    /// Event to score: "any" or a positive cause code
    #[arg(long, default_value = "any")]
    pub event_of_interest: EventOfInterest,
}

impl EvaluationArg {
    /// Load the input files and compute the Brier score at each time horizon
    pub(crate) fn evaluate(&self) -> anyhow::Result<BrierScoreCurve> {
        let y_train = util::read_labels_file("training", &self.train)?;
        let y_test = util::read_labels_file("test", &self.test)?;
        let predictions = util::read_predictions_file(&self.predictions)?;
        let y_pred = predictions.to_matrix().with_context(|| {
            format!("Invalid predictions in {}", self.predictions.display())
        })?;

        log::info!("Fitting censoring distribution...");
        let computer = BrierScoreComputer::new(y_train, self.event_of_interest)
            .context("Failed to fit the censoring distribution on the training labels")?;
        log::debug!(
            "Censoring distribution has {} steps",
            computer.censoring_estimator().curve().times.len()
        );

        log::info!(
            "Computing {:?} Brier score for event_of_interest={}...",
            self.kind,
            computer.event_of_interest()
        );
        let times = predictions.times;
        let scores = match self.kind {
            ScoreKind::Survival => computer.brier_score_survival(&y_test, y_pred.view(), &times),
            ScoreKind::Incidence => computer.brier_score_incidence(&y_test, y_pred.view(), &times),
        }
        .context("Failed to compute the Brier score")?;

        Ok(BrierScoreCurve {
            times,
            scores: scores.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use approx::assert_abs_diff_eq;

    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn arg(dir: &Path, predictions: &str, kind: ScoreKind) -> EvaluationArg {
        let labels = r#"[
            {"event": 1, "duration": 2.0},
            {"event": 0, "duration": 5.0},
            {"event": 1, "duration": 3.0}
        ]"#;
        EvaluationArg {
            train: write(dir, "train.json", labels),
            test: write(dir, "test.json", r#"{"event": [1, 0, 1], "duration": [2.0, 5.0, 3.0]}"#),
            predictions: write(dir, "predictions.json", predictions),
            kind,
            event_of_interest: EventOfInterest::Any,
        }
    }

    #[test]
    fn test_evaluate_survival_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let predictions = r#"{"times": [1.0, 4.0], "values": [[0.9, 0.5], [0.9, 0.5], [0.9, 0.5]]}"#;
        let curve = arg(dir.path(), predictions, ScoreKind::Survival)
            .evaluate()
            .unwrap();

        assert_eq!(curve.times, vec![1.0, 4.0]);
        assert_abs_diff_eq!(curve.scores[0], 0.01, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.scores[1], 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_incidence_matches_survival_complement() {
        let dir = tempfile::tempdir().unwrap();
        let survival = r#"{"times": [1.0, 4.0], "values": [[0.9, 0.5], [0.8, 0.6], [0.7, 0.2]]}"#;
        let incidence = r#"{"times": [1.0, 4.0], "values": [[0.1, 0.5], [0.2, 0.4], [0.3, 0.8]]}"#;

        let from_survival = arg(dir.path(), survival, ScoreKind::Survival)
            .evaluate()
            .unwrap();
        let from_incidence = arg(dir.path(), incidence, ScoreKind::Incidence)
            .evaluate()
            .unwrap();
        for (a, b) in from_survival.scores.iter().zip(&from_incidence.scores) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_evaluate_reports_shape_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let predictions =
            r#"{"times": [1.0, 4.0], "values": [[0.9, 0.5, 0.1], [0.9, 0.5, 0.1], [0.9, 0.5, 0.1]]}"#;
        let err = arg(dir.path(), predictions, ScoreKind::Survival)
            .evaluate()
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("(2)") && message.contains("(3)"), "{message}");
    }

    #[test]
    fn test_evaluate_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut arg = arg(dir.path(), r#"{"times": [], "values": []}"#, ScoreKind::Survival);
        arg.train = dir.path().join("missing.json");
        let err = arg.evaluate().unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }
}
