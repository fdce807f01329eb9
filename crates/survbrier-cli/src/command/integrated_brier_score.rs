use std::path::PathBuf;

use crate::{
    command::evaluation::EvaluationArg, schema::report::IntegratedBrierScoreReport, util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct IntegratedBrierScoreArg {
    #[clap(flatten)]
    pub evaluation: EvaluationArg,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &IntegratedBrierScoreArg) -> anyhow::Result<()> {
    let IntegratedBrierScoreArg { evaluation, output } = arg;
    let curve = evaluation.evaluate()?;

    if curve.times.len() < 2 {
        log::warn!(
            "Integrating over {} time horizon(s); the integrated Brier score is undefined",
            curve.times.len()
        );
    }
    if !curve.times.is_sorted() {
        log::warn!("Time horizons are not sorted in ascending order");
    }

    let report = IntegratedBrierScoreReport {
        kind: evaluation.kind,
        event_of_interest: evaluation.event_of_interest.to_string(),
        time_range: curve.times.first().copied().zip(curve.times.last().copied()),
        integrated_brier_score: curve.integrated(),
    };
    Output::save_json(&report, output.clone())
}
