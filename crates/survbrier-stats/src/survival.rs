/// Kaplan-Meier survival curve over real-valued times.
///
/// The Kaplan-Meier estimator is a non-parametric statistic used to estimate the survival
/// function from lifetime data. It accounts for censored data (observations where the tracked
/// event has not occurred by the end of follow-up).
///
/// The "event" tracked by the curve is whatever the caller marks as non-censored. Fitting the
/// curve with the roles swapped (censoring treated as the event) yields the censoring survival
/// function used for inverse probability of censoring weighting.
///
/// # Fields
///
/// The curve stores parallel vectors representing the survival function at discrete time points:
/// - Time points where events occurred
/// - Survival probability at each time point
/// - Number of subjects at risk at each time point
/// - Number of events (non-censored observations) at each time point
#[derive(Debug, Clone, PartialEq)]
pub struct KaplanMeierCurve {
    /// Time points where events (non-censored observations) occurred, in ascending order.
    pub times: Vec<f64>,
    /// Survival probability at each corresponding time point.
    /// Values range from 0.0 (no survival) to 1.0 (complete survival).
    pub survival_prob: Vec<f64>,
    /// Number of subjects at risk (time greater than or equal to the time point).
    pub at_risk: Vec<usize>,
    /// Number of events (non-censored observations) that occurred at each time point.
    pub events: Vec<usize>,
}

impl KaplanMeierCurve {
    /// Computes the Kaplan-Meier survival curve from survival data.
    ///
    /// # Arguments
    ///
    /// * `data` - A vector of tuples where each tuple contains:
    ///   - `time`: The time at which the observation occurred
    ///   - `is_censored`: `true` if the observation was censored (event did not occur),
    ///     `false` if the event occurred
    ///
    /// # Returns
    ///
    /// A `KaplanMeierCurve` with survival probabilities calculated at each event time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use survbrier_stats::survival::KaplanMeierCurve;
    /// // Data: (time, is_censored)
    /// let data = vec![
    ///     (1.0, false), // Event at time 1.0
    ///     (2.5, true),  // Censored at time 2.5
    ///     (3.0, false), // Event at time 3.0
    /// ];
    /// let curve = KaplanMeierCurve::from_data(data);
    /// assert_eq!(curve.times, vec![1.0, 3.0]);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_data(mut data: Vec<(f64, bool)>) -> Self {
        let mut curve = Self {
            times: vec![],
            survival_prob: vec![],
            at_risk: vec![],
            events: vec![],
        };
        if data.is_empty() {
            return curve;
        }

        data.sort_by(|(a, _), (b, _)| a.total_cmp(b));

        let mut current_survival = 1.0;
        let total = data.len();

        let mut i = 0;
        while i < data.len() {
            let current_time = data[i].0;
            let at_risk = total - i;

            // Count events (non-censored) at this time point
            let mut event_count = 0;
            let mut j = i;
            while j < data.len() && data[j].0.total_cmp(&current_time).is_eq() {
                if !data[j].1 {
                    event_count += 1;
                }
                j += 1;
            }

            if event_count > 0 {
                current_survival *= 1.0 - (event_count as f64 / at_risk as f64);

                curve.times.push(current_time);
                curve.survival_prob.push(current_survival);
                curve.at_risk.push(at_risk);
                curve.events.push(event_count);
            }

            i = j;
        }

        curve
    }

    /// Returns the survival probability at a specific time.
    ///
    /// The curve is a right-continuous step function: the survival probability remains
    /// constant between event times and drops exactly at an event time.
    ///
    /// # Returns
    ///
    /// The survival probability at the specified time. Returns `1.0` if the time
    /// is before the first event, or the last known survival probability if the
    /// time is after the last event.
    ///
    /// # Examples
    ///
    /// ```
    /// # use survbrier_stats::survival::KaplanMeierCurve;
    /// let data = vec![(10.0, false), (20.0, false)];
    /// let curve = KaplanMeierCurve::from_data(data);
    ///
    /// assert_eq!(curve.survival_at(5.0), 1.0);  // Before first event
    /// assert_eq!(curve.survival_at(10.0), 0.5); // Drop happens at the event time
    /// assert_eq!(curve.survival_at(99.0), 0.0); // Held after the last event
    /// ```
    #[must_use]
    pub fn survival_at(&self, time: f64) -> f64 {
        // Number of steps with step time <= `time`
        let idx = self.times.partition_point(|&t| t <= time);
        if idx == 0 {
            1.0
        } else {
            self.survival_prob[idx - 1]
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_empty_curve() {
        let curve = KaplanMeierCurve::from_data(vec![]);
        assert!(curve.times.is_empty());
        assert_eq!(curve.survival_at(3.0), 1.0);
    }

    #[test]
    fn test_all_censored() {
        let curve = KaplanMeierCurve::from_data(vec![(1.0, true), (2.0, true)]);
        assert!(curve.times.is_empty());
        assert_eq!(curve.survival_at(10.0), 1.0);
    }

    #[test]
    fn test_censoring_reduces_risk_set() {
        // Event at 1, censored at 2, events at 3 and 4
        let data = vec![(3.0, false), (1.0, false), (2.0, true), (4.0, false)];
        let curve = KaplanMeierCurve::from_data(data);

        assert_eq!(curve.times, vec![1.0, 3.0, 4.0]);
        assert_eq!(curve.at_risk, vec![4, 2, 1]);
        assert_eq!(curve.events, vec![1, 1, 1]);
        assert_abs_diff_eq!(curve.survival_prob[0], 0.75);
        assert_abs_diff_eq!(curve.survival_prob[1], 0.375);
        assert_abs_diff_eq!(curve.survival_prob[2], 0.0);
    }

    #[test]
    fn test_tied_times() {
        // Two events and one censoring all at time 2
        let data = vec![(2.0, false), (2.0, true), (2.0, false), (5.0, false)];
        let curve = KaplanMeierCurve::from_data(data);

        assert_eq!(curve.times, vec![2.0, 5.0]);
        assert_eq!(curve.at_risk, vec![4, 1]);
        assert_eq!(curve.events, vec![2, 1]);
        assert_abs_diff_eq!(curve.survival_at(2.0), 0.5);
        assert_abs_diff_eq!(curve.survival_at(4.999), 0.5);
    }

    #[test]
    fn test_step_is_right_continuous() {
        let curve = KaplanMeierCurve::from_data(vec![(1.0, false), (2.0, false)]);
        assert_eq!(curve.survival_at(0.999), 1.0);
        assert_eq!(curve.survival_at(1.0), 0.5);
        assert_eq!(curve.survival_at(1.5), 0.5);
        assert_eq!(curve.survival_at(2.0), 0.0);
    }
}
