//! Survival labels: aligned `(event, duration)` columns
//!
//! A label pairs an event code with the time at which it was observed:
//!
//! - `event == 0`: the sample was censored at `duration` (follow-up ended first)
//! - `event == k > 0`: the sample experienced cause `k` at `duration`
//!
//! [`SurvivalLabels`] stores a dataset of labels column-wise and is the input
//! type of every Brier score operation. It can be built from records or from
//! columns, and deserialized from either JSON shape:
//!
//! ```text
//! [{"event": 1, "duration": 2.0}, {"event": 0, "duration": 5.0}]
//! {"event": [1, 0], "duration": [2.0, 5.0]}
//! ```

use serde::{Deserialize, Serialize};

/// A single survival label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurvivalLabel {
    /// Event code: `0` for censoring, `k > 0` for cause `k`
    pub event: u32,
    /// Time at which the event or censoring was observed
    pub duration: f64,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LabelError {
    #[display("event and duration must have the same length (event: {event_len}, duration: {duration_len})")]
    LengthMismatch {
        event_len: usize,
        duration_len: usize,
    },
    #[display("duration at index {index} must be a finite non-negative number, got {value}")]
    InvalidDuration { index: usize, value: f64 },
}

/// A validated dataset of survival labels, stored as two aligned columns.
///
/// # Examples
///
/// ```
/// use survbrier_metrics::label::SurvivalLabels;
///
/// let labels = SurvivalLabels::from_columns(vec![1, 0, 2], vec![2.0, 5.0, 3.0]).unwrap();
/// assert_eq!(labels.len(), 3);
/// assert_eq!(labels.event_ids(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LabelsRepr")]
pub struct SurvivalLabels {
    event: Vec<u32>,
    duration: Vec<f64>,
}

/// Accepted input shapes for [`SurvivalLabels`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LabelsRepr {
    Records(Vec<SurvivalLabel>),
    Columns { event: Vec<u32>, duration: Vec<f64> },
}

impl TryFrom<LabelsRepr> for SurvivalLabels {
    type Error = LabelError;

    fn try_from(repr: LabelsRepr) -> Result<Self, Self::Error> {
        match repr {
            LabelsRepr::Records(records) => Self::from_records(records),
            LabelsRepr::Columns { event, duration } => Self::from_columns(event, duration),
        }
    }
}

impl SurvivalLabels {
    /// Builds labels from an event-code column and a duration column.
    pub fn from_columns(event: Vec<u32>, duration: Vec<f64>) -> Result<Self, LabelError> {
        if event.len() != duration.len() {
            return Err(LabelError::LengthMismatch {
                event_len: event.len(),
                duration_len: duration.len(),
            });
        }
        if let Some((index, &value)) = duration
            .iter()
            .enumerate()
            .find(|(_, d)| !(d.is_finite() && **d >= 0.0))
        {
            return Err(LabelError::InvalidDuration { index, value });
        }
        Ok(Self { event, duration })
    }

    /// Builds labels from a sequence of records.
    ///
    /// ```
    /// use survbrier_metrics::label::{SurvivalLabel, SurvivalLabels};
    ///
    /// let labels = SurvivalLabels::from_records([
    ///     SurvivalLabel { event: 1, duration: 2.0 },
    ///     SurvivalLabel { event: 0, duration: 5.0 },
    /// ])
    /// .unwrap();
    /// assert_eq!(labels.durations(), &[2.0, 5.0]);
    /// ```
    pub fn from_records<I>(records: I) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = SurvivalLabel>,
    {
        let (event, duration) = records
            .into_iter()
            .map(|label| (label.event, label.duration))
            .unzip();
        Self::from_columns(event, duration)
    }

    #[must_use]
    pub fn events(&self) -> &[u32] {
        &self.event
    }

    #[must_use]
    pub fn durations(&self) -> &[f64] {
        &self.duration
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.event.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.event.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SurvivalLabel> + '_ {
        self.event
            .iter()
            .zip(&self.duration)
            .map(|(&event, &duration)| SurvivalLabel { event, duration })
    }

    /// Distinct event codes present in the dataset, in ascending order.
    ///
    /// Includes `0` when at least one sample is censored.
    #[must_use]
    pub fn event_ids(&self) -> Vec<u32> {
        let mut ids = self.event.clone();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Whether each sample experienced any event (`event > 0`).
    #[must_use]
    pub fn any_event(&self) -> Vec<bool> {
        self.event.iter().map(|&e| e > 0).collect()
    }
}
