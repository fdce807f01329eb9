use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use self::{brier_score::BrierScoreArg, integrated_brier_score::IntegratedBrierScoreArg};

mod brier_score;
mod evaluation;
mod integrated_brier_score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute the time-dependent Brier score at each time horizon
    BrierScore(#[clap(flatten)] BrierScoreArg),
    /// Compute the Brier score integrated over the time horizons
    IntegratedBrierScore(#[clap(flatten)] IntegratedBrierScoreArg),
}

/// What the prediction values represent
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    /// Probability of surviving (no event of any cause) up to each time
    #[default]
    Survival,
    /// Cumulative incidence of the event of interest at each time
    Incidence,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match args.mode {
        Mode::BrierScore(arg) => brier_score::run(&arg)?,
        Mode::IntegratedBrierScore(arg) => integrated_brier_score::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{num::NonZeroU32, path::PathBuf};

    use survbrier_metrics::EventOfInterest;

    use super::{evaluation::EvaluationArg, *};

    #[test]
    fn test_parse_brier_score_defaults() {
        let args =
            CommandArgs::try_parse_from(["survbrier", "brier-score", "train.json", "test.json", "pred.json"])
                .unwrap();
        let Mode::BrierScore(arg) = args.mode else {
            panic!("unexpected mode");
        };
        let EvaluationArg {
            train,
            test,
            predictions,
            kind,
            event_of_interest,
        } = arg.evaluation;
        assert_eq!(train, PathBuf::from("train.json"));
        assert_eq!(test, PathBuf::from("test.json"));
        assert_eq!(predictions, PathBuf::from("pred.json"));
        assert_eq!(kind, ScoreKind::Survival);
        assert_eq!(event_of_interest, EventOfInterest::Any);
        assert_eq!(arg.output, None);
    }

    #[test]
    fn test_parse_incidence_with_cause() {
        let args = CommandArgs::try_parse_from([
            "survbrier",
            "integrated-brier-score",
            "train.json",
            "test.json",
            "pred.json",
            "--kind",
            "incidence",
            "--event-of-interest",
            "2",
            "--output",
            "out.json",
        ])
        .unwrap();
        let Mode::IntegratedBrierScore(arg) = args.mode else {
            panic!("unexpected mode");
        };
        assert_eq!(arg.evaluation.kind, ScoreKind::Incidence);
        assert_eq!(
            arg.evaluation.event_of_interest,
            EventOfInterest::Cause(NonZeroU32::new(2).unwrap())
        );
        assert_eq!(arg.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_parse_rejects_censoring_code_as_event_of_interest() {
        let result = CommandArgs::try_parse_from([
            "survbrier",
            "brier-score",
            "train.json",
            "test.json",
            "pred.json",
            "--event-of-interest",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_score_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ScoreKind::Incidence).unwrap(),
            "\"incidence\""
        );
    }
}
