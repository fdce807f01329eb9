//! Censoring distribution estimate for inverse probability of censoring weighting
//!
//! The estimator fits a Kaplan-Meier curve in which *censoring* plays the role
//! of the event: a sample is "censored" in that curve exactly when it
//! experienced an event of any cause. The resulting step function is
//!
//! ```text
//! G(t) = P(remain uncensored beyond t)
//! ```
//!
//! and the inverse probability of censoring weight at `t` is `1 / G(t)`.
//!
//! # Boundary policy
//!
//! `G(t)` is 1.0 before the first censoring time and holds its last value past
//! the final censoring time. When the longest training duration is censored,
//! `G` drops to 0.0 there and the corresponding weight is `+inf`; this is not
//! clamped.

use survbrier_stats::survival::KaplanMeierCurve;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum FitCensoringError {
    #[display("cannot fit the censoring distribution on an empty dataset")]
    Empty,
    #[display("event indicator and duration must have the same length (event: {event_len}, duration: {duration_len})")]
    LengthMismatch {
        event_len: usize,
        duration_len: usize,
    },
}

/// Kaplan-Meier estimate of the censoring survival function `G(t)`.
///
/// Immutable once fitted.
///
/// # Examples
///
/// ```
/// use survbrier_metrics::ipcw::CensoringEstimator;
///
/// // Samples 0 and 2 experienced an event, sample 1 was censored at 5.0
/// let estimator = CensoringEstimator::fit(&[true, false, true], &[2.0, 5.0, 3.0]).unwrap();
/// assert_eq!(estimator.predict(&[1.0, 4.0]), vec![1.0, 1.0]);
/// assert_eq!(estimator.predict(&[5.0]), vec![0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct CensoringEstimator {
    curve: KaplanMeierCurve,
}

impl CensoringEstimator {
    /// Fits the censoring distribution.
    ///
    /// # Arguments
    ///
    /// * `any_event` - `true` if the sample experienced an event of any cause
    /// * `duration` - Observed time of each sample, aligned with `any_event`
    pub fn fit(any_event: &[bool], duration: &[f64]) -> Result<Self, FitCensoringError> {
        if any_event.len() != duration.len() {
            return Err(FitCensoringError::LengthMismatch {
                event_len: any_event.len(),
                duration_len: duration.len(),
            });
        }
        if duration.is_empty() {
            return Err(FitCensoringError::Empty);
        }

        // Censoring is the tracked event: a sample that experienced an event is
        // "censored" with respect to the censoring process.
        let data = duration
            .iter()
            .zip(any_event)
            .map(|(&duration, &event)| (duration, event))
            .collect();
        let curve = KaplanMeierCurve::from_data(data);

        log::debug!(
            "fitted censoring distribution on {} samples ({} censoring times)",
            duration.len(),
            curve.times.len()
        );

        Ok(Self { curve })
    }

    /// Estimated probability of remaining uncensored beyond each query time.
    #[must_use]
    pub fn predict(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.curve.survival_at(t)).collect()
    }

    /// Inverse probability of censoring weights `1 / G(t)` at each query time.
    #[must_use]
    pub fn predict_ipcw(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.predict_ipcw_at(t)).collect()
    }

    /// Inverse probability of censoring weight `1 / G(t)` at a single time.
    #[must_use]
    pub fn predict_ipcw_at(&self, time: f64) -> f64 {
        1.0 / self.curve.survival_at(time)
    }

    #[must_use]
    pub fn curve(&self) -> &KaplanMeierCurve {
        &self.curve
    }
}
