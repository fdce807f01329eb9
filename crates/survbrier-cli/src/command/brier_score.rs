use std::path::PathBuf;

use crate::{command::evaluation::EvaluationArg, schema::report::BrierScoreReport, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BrierScoreArg {
    #[clap(flatten)]
    pub evaluation: EvaluationArg,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &BrierScoreArg) -> anyhow::Result<()> {
    let BrierScoreArg { evaluation, output } = arg;
    let curve = evaluation.evaluate()?;

    let report = BrierScoreReport {
        kind: evaluation.kind,
        event_of_interest: evaluation.event_of_interest.to_string(),
        times: curve.times,
        brier_scores: curve.scores,
    };
    Output::save_json(&report, output.clone())
}
