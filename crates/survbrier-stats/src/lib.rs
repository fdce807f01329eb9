//! Statistical building blocks for survival-model evaluation.
//!
//! This crate provides:
//!
//! - **Survival analysis**: Kaplan-Meier estimator for right-censored time-to-event data
//! - **Integration**: trapezoidal rule for curves sampled at arbitrary points
//!
//! # Modules
//!
//! - [`survival`]: Kaplan-Meier survival curves
//! - [`integration`]: Numerical integration of sampled curves
//!
//! # Examples
//!
//! ## Analyzing survival data
//!
//! ```
//! use survbrier_stats::survival::KaplanMeierCurve;
//!
//! // Data: (time, is_censored)
//! let data = vec![
//!     (1.5, false), // Event occurred at time 1.5
//!     (2.0, true),  // Censored at time 2.0
//!     (3.0, false), // Event occurred at time 3.0
//! ];
//! let curve = KaplanMeierCurve::from_data(data);
//! assert_eq!(curve.survival_at(1.0), 1.0);
//! ```
//!
//! ## Integrating a sampled curve
//!
//! ```
//! use survbrier_stats::integration::trapezoid;
//!
//! let times = [0.0, 1.0, 2.0];
//! let values = [0.0, 1.0, 0.0];
//! assert_eq!(trapezoid(&values, &times), 1.0);
//! ```

pub mod integration;
pub mod survival;
