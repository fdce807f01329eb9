//! Time-dependent Brier score with censoring adjustment
//!
//! For a time horizon `t`, each evaluation sample contributes a weighted
//! squared error between its observed outcome by `t` and the predicted
//! probability of that outcome:
//!
//! ```text
//! BS_k(t) = 1/n * sum_i w_i(t) * (I(d_i <= t, e_i = k) - F_k(t | x_i))^2
//!
//! w_i(t) = 1 / G(d_i)   if e_i != 0 and d_i <= t   (event observed by t)
//!          1 / G(t)     if t < d_i                 (still at risk at t)
//!          0            otherwise                  (censored by t)
//! ```
//!
//! where `G` is the censoring survival function estimated on the training set
//! by [`CensoringEstimator`]. Survival predictions are scored as incidence of
//! the collapsed "any event" through `F(t) = 1 - S(t)`.
//!
//! Reference: M. Kretowska, "Tree-based models for survival data with competing
//! risks", Computer Methods and Programs in Biomedicine 159 (2018) 185-198.
//!
//! # Examples
//!
//! ```
//! use ndarray::array;
//! use survbrier_metrics::{BrierScoreComputer, EventOfInterest, SurvivalLabels};
//!
//! let y_train = SurvivalLabels::from_columns(vec![1, 0, 1], vec![2.0, 5.0, 3.0]).unwrap();
//! let computer = BrierScoreComputer::new(y_train.clone(), EventOfInterest::Any).unwrap();
//!
//! let survival = array![[0.9, 0.5], [0.9, 0.5], [0.9, 0.5]];
//! let scores = computer
//!     .brier_score_survival(&y_train, survival.view(), &[1.0, 4.0])
//!     .unwrap();
//! assert_eq!(scores.len(), 2);
//! ```

use std::borrow::Cow;

use ndarray::{Array1, ArrayView2};
use serde::{Deserialize, Serialize};
use survbrier_stats::integration::trapezoid;

use crate::{
    event::EventOfInterest,
    ipcw::{CensoringEstimator, FitCensoringError},
    label::SurvivalLabels,
};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum BrierScoreError {
    #[display("failed to fit the censoring distribution: {_0}")]
    #[from]
    FitCensoring(FitCensoringError),
    #[display(
        "event_of_interest={event_of_interest} does not match any event observed in the training set (event ids: {event_ids:?})"
    )]
    InvalidEventOfInterest {
        event_of_interest: EventOfInterest,
        event_ids: Vec<u32>,
    },
    #[display("'times' length ({times_len}) must be equal to the number of prediction columns ({n_columns})")]
    TimesLengthMismatch { times_len: usize, n_columns: usize },
    #[display("number of labels ({n_samples}) must be equal to the number of prediction rows ({n_rows})")]
    SampleCountMismatch { n_samples: usize, n_rows: usize },
}

/// Per-sample ingredients of the Brier score at a single time horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct IpcwComponents {
    /// `1.0` when the event of interest was observed at or before the horizon
    pub outcome: Vec<f64>,
    /// Inverse probability of censoring weight; `0.0` for samples censored by the horizon
    pub weight: Vec<f64>,
}

/// Time-dependent Brier scores together with the horizons they were evaluated at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrierScoreCurve {
    pub times: Vec<f64>,
    pub scores: Vec<f64>,
}

impl BrierScoreCurve {
    /// Brier score integrated over the evaluated time range, normalized by its length.
    ///
    /// ```text
    /// IBS = 1 / (t_max - t_min) * integral_{t_min}^{t_max} BS(u) du
    /// ```
    ///
    /// `times` should be sorted in ascending order. A zero-length range
    /// (fewer than two horizons, or equal first and last horizons) yields a
    /// non-finite result rather than an error.
    ///
    /// # Panics
    ///
    /// Panics if `times` and `scores` have different lengths.
    #[must_use]
    pub fn integrated(&self) -> f64 {
        let (Some(first), Some(last)) = (self.times.first(), self.times.last()) else {
            return f64::NAN;
        };
        trapezoid(&self.scores, &self.times) / (last - first)
    }
}

/// Brier score evaluator bound to a training set.
///
/// Construction fits the censoring distribution on the training labels, with
/// all event causes collapsed into a single "any event" indicator, and caches
/// the censoring weights at each training duration. The computer can then
/// score any number of prediction matrices.
#[derive(Debug, Clone)]
pub struct BrierScoreComputer {
    train_labels: SurvivalLabels,
    event_ids: Vec<u32>,
    any_event_train: Vec<bool>,
    event_of_interest: EventOfInterest,
    censoring: CensoringEstimator,
    ipcw_train: Vec<f64>,
}

impl BrierScoreComputer {
    pub fn new(
        y_train: SurvivalLabels,
        event_of_interest: EventOfInterest,
    ) -> Result<Self, BrierScoreError> {
        let event_ids = y_train.event_ids();
        let any_event_train = y_train.any_event();
        let censoring = CensoringEstimator::fit(&any_event_train, y_train.durations())?;
        let ipcw_train = censoring.predict_ipcw(y_train.durations());

        Ok(Self {
            train_labels: y_train,
            event_ids,
            any_event_train,
            event_of_interest,
            censoring,
            ipcw_train,
        })
    }

    #[must_use]
    pub fn train_labels(&self) -> &SurvivalLabels {
        &self.train_labels
    }

    #[must_use]
    pub fn event_of_interest(&self) -> EventOfInterest {
        self.event_of_interest
    }

    /// Distinct event codes in the training set, in ascending order.
    #[must_use]
    pub fn event_ids(&self) -> &[u32] {
        &self.event_ids
    }

    #[must_use]
    pub fn censoring_estimator(&self) -> &CensoringEstimator {
        &self.censoring
    }

    /// Time-dependent Brier score of survival function estimates.
    ///
    /// `y_pred` holds one row per sample of `y_true` and one column per entry
    /// of `times`, each value being the predicted probability of surviving
    /// (no event of any cause) up to that time.
    ///
    /// Equivalent to [`brier_score_incidence`](Self::brier_score_incidence)
    /// on `1 - y_pred`.
    pub fn brier_score_survival(
        &self,
        y_true: &SurvivalLabels,
        y_pred: ArrayView2<'_, f64>,
        times: &[f64],
    ) -> Result<Array1<f64>, BrierScoreError> {
        if self.survival_ignores_competing_causes() {
            log::warn!(
                "Computing the survival Brier score only makes sense with a binary event \
                 indicator or when setting event_of_interest=any. Instead this model is \
                 evaluated on data with event ids {:?} and with event_of_interest={}.",
                self.event_ids,
                self.event_of_interest
            );
        }
        let incidence = y_pred.mapv(|p| 1.0 - p);
        self.brier_score_incidence(y_true, incidence.view(), times)
    }

    /// Time-dependent Brier score of cumulative incidence estimates for the
    /// event of interest.
    ///
    /// `y_pred` holds one row per sample of `y_true` and one column per entry
    /// of `times`, each value being the predicted probability that the event
    /// of interest occurred by that time.
    ///
    /// Returns the score at each horizon, averaged over samples.
    #[expect(clippy::cast_precision_loss)]
    pub fn brier_score_incidence(
        &self,
        y_true: &SurvivalLabels,
        y_pred: ArrayView2<'_, f64>,
        times: &[f64],
    ) -> Result<Array1<f64>, BrierScoreError> {
        self.validate_event_of_interest()?;
        if y_pred.ncols() != times.len() {
            return Err(BrierScoreError::TimesLengthMismatch {
                times_len: times.len(),
                n_columns: y_pred.ncols(),
            });
        }
        if y_pred.nrows() != y_true.len() {
            return Err(BrierScoreError::SampleCountMismatch {
                n_samples: y_true.len(),
                n_rows: y_pred.nrows(),
            });
        }

        let (any_event, ipcw_y) = self.event_weights(y_true);
        let n_samples = y_true.len() as f64;

        let scores = times
            .iter()
            .zip(y_pred.columns())
            .map(|(&time, pred)| {
                let components = self.components_at(y_true, &any_event, &ipcw_y, time);
                let sum = components
                    .outcome
                    .iter()
                    .zip(&components.weight)
                    .zip(pred)
                    .map(|((outcome, weight), p)| weight * (outcome - p).powi(2))
                    .sum::<f64>();
                sum / n_samples
            })
            .collect::<Array1<f64>>();

        log::debug!(
            "evaluated Brier score for event_of_interest={} on {} samples at {} horizons",
            self.event_of_interest,
            y_true.len(),
            times.len()
        );

        Ok(scores)
    }

    /// Outcome indicators and weights of each sample of `y_true` at `time`.
    #[must_use]
    pub fn ipcw_components(&self, y_true: &SurvivalLabels, time: f64) -> IpcwComponents {
        let (any_event, ipcw_y) = self.event_weights(y_true);
        self.components_at(y_true, &any_event, &ipcw_y, time)
    }

    /// Survival predictions score the collapsed "any event" outcome, so a
    /// specific cause among several competing ones is not what they estimate.
    fn survival_ignores_competing_causes(&self) -> bool {
        let num_causes = self.event_ids.iter().filter(|&&id| id > 0).count();
        num_causes > 1 && !self.event_of_interest.is_any()
    }

    fn validate_event_of_interest(&self) -> Result<(), BrierScoreError> {
        if self.event_of_interest.is_observed_in(&self.event_ids) {
            Ok(())
        } else {
            Err(BrierScoreError::InvalidEventOfInterest {
                event_of_interest: self.event_of_interest,
                event_ids: self.event_ids.clone(),
            })
        }
    }

    /// Any-event indicators and censoring weights at each sample's own duration.
    ///
    /// Both only depend on `y_true`, so they are computed once per call and
    /// reused from the construction-time cache when `y_true` is the training set.
    fn event_weights(&self, y_true: &SurvivalLabels) -> (Cow<'_, [bool]>, Cow<'_, [f64]>) {
        if std::ptr::eq(y_true, &self.train_labels) {
            (
                Cow::Borrowed(self.any_event_train.as_slice()),
                Cow::Borrowed(self.ipcw_train.as_slice()),
            )
        } else {
            (
                Cow::Owned(y_true.any_event()),
                Cow::Owned(self.censoring.predict_ipcw(y_true.durations())),
            )
        }
    }

    fn components_at(
        &self,
        y_true: &SurvivalLabels,
        any_event: &[bool],
        ipcw_y: &[f64],
        time: f64,
    ) -> IpcwComponents {
        let ipcw_t = self.censoring.predict_ipcw_at(time);

        let (outcome, weight) = y_true
            .iter()
            .zip(any_event)
            .zip(ipcw_y)
            .map(|((label, &any_event), &ipcw_y)| {
                let observed_by_t = label.duration <= time;
                let outcome = if observed_by_t && self.event_of_interest.matches(label.event) {
                    1.0
                } else {
                    0.0
                };
                // An event observed by `t` takes precedence over the at-risk case.
                let weight = if any_event && observed_by_t {
                    ipcw_y
                } else if time < label.duration {
                    ipcw_t
                } else {
                    0.0
                };
                (outcome, weight)
            })
            .unzip();

        IpcwComponents { outcome, weight }
    }
}

/// Time-dependent Brier score of survival function estimates.
///
/// The censoring distribution is fitted on `y_train` with all event causes
/// collapsed into a single event, and `y_test` is scored the same way.
pub fn brier_score_survival(
    y_train: &SurvivalLabels,
    y_test: &SurvivalLabels,
    y_pred: ArrayView2<'_, f64>,
    times: &[f64],
) -> Result<BrierScoreCurve, BrierScoreError> {
    let computer = BrierScoreComputer::new(y_train.clone(), EventOfInterest::Any)?;
    let scores = computer.brier_score_survival(y_test, y_pred, times)?;
    Ok(BrierScoreCurve {
        times: times.to_vec(),
        scores: scores.to_vec(),
    })
}

/// Brier score of survival function estimates, integrated over `times`.
pub fn integrated_brier_score_survival(
    y_train: &SurvivalLabels,
    y_test: &SurvivalLabels,
    y_pred: ArrayView2<'_, f64>,
    times: &[f64],
) -> Result<f64, BrierScoreError> {
    Ok(brier_score_survival(y_train, y_test, y_pred, times)?.integrated())
}

/// Time-dependent Brier score of cumulative incidence estimates for
/// `event_of_interest`.
pub fn brier_score_incidence(
    y_train: &SurvivalLabels,
    y_test: &SurvivalLabels,
    y_pred: ArrayView2<'_, f64>,
    times: &[f64],
    event_of_interest: EventOfInterest,
) -> Result<BrierScoreCurve, BrierScoreError> {
    let computer = BrierScoreComputer::new(y_train.clone(), event_of_interest)?;
    let scores = computer.brier_score_incidence(y_test, y_pred, times)?;
    Ok(BrierScoreCurve {
        times: times.to_vec(),
        scores: scores.to_vec(),
    })
}

/// Brier score of cumulative incidence estimates for `event_of_interest`,
/// integrated over `times`.
pub fn integrated_brier_score_incidence(
    y_train: &SurvivalLabels,
    y_test: &SurvivalLabels,
    y_pred: ArrayView2<'_, f64>,
    times: &[f64],
    event_of_interest: EventOfInterest,
) -> Result<f64, BrierScoreError> {
    Ok(brier_score_incidence(y_train, y_test, y_pred, times, event_of_interest)?.integrated())
}
