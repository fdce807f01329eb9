//! Censoring-adjusted Brier scores for survival and competing-risks models.
//!
//! The time-dependent Brier score measures, at each time horizon, the squared
//! error between a predicted probability and the observed outcome. Right
//! censoring is handled by Inverse Probability of Censoring Weighting (IPCW),
//! using a Kaplan-Meier estimate of the censoring distribution fitted on the
//! training labels.
//!
//! # Modules
//!
//! - [`label`]: Survival labels (`event`, `duration`) and their input formats
//! - [`event`]: Selection of the event of interest (`any` or a specific cause)
//! - [`ipcw`]: Censoring distribution estimator
//! - [`brier`]: [`BrierScoreComputer`] and the free-function entry points
//!
//! # Examples
//!
//! ## Survival model
//!
//! ```
//! use ndarray::array;
//! use survbrier_metrics::{SurvivalLabels, integrated_brier_score_survival};
//!
//! let y_train = SurvivalLabels::from_columns(vec![1, 0, 1, 1], vec![2.0, 5.0, 3.0, 6.0]).unwrap();
//! let y_test = SurvivalLabels::from_columns(vec![1, 0], vec![2.5, 4.5]).unwrap();
//! // Survival probabilities of each test sample at each time
//! let y_pred = array![[0.9, 0.4, 0.2], [0.95, 0.8, 0.6]];
//! let times = [1.0, 3.0, 4.0];
//!
//! let ibs = integrated_brier_score_survival(&y_train, &y_test, y_pred.view(), &times).unwrap();
//! assert!(ibs >= 0.0);
//! ```
//!
//! ## Competing risks
//!
//! ```
//! use ndarray::array;
//! use survbrier_metrics::{EventOfInterest, SurvivalLabels, brier_score_incidence};
//!
//! let y_train = SurvivalLabels::from_columns(vec![1, 2, 0, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! // Cumulative incidence of cause 2 for each training sample
//! let y_pred = array![[0.1, 0.2], [0.6, 0.7], [0.3, 0.4], [0.2, 0.9]];
//! let event_of_interest: EventOfInterest = "2".parse().unwrap();
//!
//! let curve = brier_score_incidence(&y_train, &y_train, y_pred.view(), &[2.5, 5.0], event_of_interest)
//!     .unwrap();
//! assert_eq!(curve.times, vec![2.5, 5.0]);
//! ```

pub use self::{
    brier::{
        BrierScoreComputer, BrierScoreCurve, BrierScoreError, IpcwComponents,
        brier_score_incidence, brier_score_survival, integrated_brier_score_incidence,
        integrated_brier_score_survival,
    },
    event::{EventOfInterest, ParseEventOfInterestError},
    ipcw::{CensoringEstimator, FitCensoringError},
    label::{LabelError, SurvivalLabel, SurvivalLabels},
};

pub mod brier;
pub mod event;
pub mod ipcw;
pub mod label;
