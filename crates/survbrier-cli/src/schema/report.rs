use serde::{Deserialize, Serialize};

use crate::command::ScoreKind;

/// Time-dependent Brier score written by `brier-score`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrierScoreReport {
    pub kind: ScoreKind,
    /// `"any"` or the cause code
    pub event_of_interest: String,
    pub times: Vec<f64>,
    pub brier_scores: Vec<f64>,
}

/// Integrated Brier score written by `integrated-brier-score`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegratedBrierScoreReport {
    pub kind: ScoreKind,
    /// `"any"` or the cause code
    pub event_of_interest: String,
    /// First and last evaluated time horizons
    pub time_range: Option<(f64, f64)>,
    pub integrated_brier_score: f64,
}
