use std::{fmt, num::NonZeroU32, str::FromStr};

/// The event the Brier score is computed for.
///
/// In single-event settings `Any` and `Cause(1)` are equivalent.
///
/// # Examples
///
/// ```
/// use survbrier_metrics::event::EventOfInterest;
///
/// let any: EventOfInterest = "any".parse().unwrap();
/// assert!(any.matches(2));
/// assert!(!any.matches(0));
///
/// let cause: EventOfInterest = "2".parse().unwrap();
/// assert!(cause.matches(2));
/// assert!(!cause.matches(1));
/// ```
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventOfInterest {
    /// All non-zero event codes collapsed into a single event
    #[default]
    Any,
    /// One specific cause in a competing-risks setting
    Cause(NonZeroU32),
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("event of interest must be \"any\" or a positive integer, got {input:?}")]
pub struct ParseEventOfInterestError {
    input: String,
}

impl EventOfInterest {
    /// Whether a sample with `event_code` experienced the event of interest.
    #[must_use]
    pub fn matches(self, event_code: u32) -> bool {
        match self {
            EventOfInterest::Any => event_code > 0,
            EventOfInterest::Cause(cause) => event_code == cause.get(),
        }
    }

    #[must_use]
    pub fn is_any(self) -> bool {
        self == EventOfInterest::Any
    }

    /// Whether the selector refers to an event observed in `event_ids`.
    ///
    /// `Any` is always valid.
    #[must_use]
    pub fn is_observed_in(self, event_ids: &[u32]) -> bool {
        match self {
            EventOfInterest::Any => true,
            EventOfInterest::Cause(cause) => event_ids.contains(&cause.get()),
        }
    }
}

impl FromStr for EventOfInterest {
    type Err = ParseEventOfInterestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("any") {
            return Ok(EventOfInterest::Any);
        }
        s.parse::<NonZeroU32>()
            .map(EventOfInterest::Cause)
            .map_err(|_| ParseEventOfInterestError {
                input: s.to_owned(),
            })
    }
}

impl fmt::Display for EventOfInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventOfInterest::Any => f.write_str("any"),
            EventOfInterest::Cause(cause) => fmt::Display::fmt(cause, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cause(k: u32) -> EventOfInterest {
        EventOfInterest::Cause(NonZeroU32::new(k).unwrap())
    }

    #[test]
    fn test_parse() {
        assert_eq!("any".parse::<EventOfInterest>().unwrap(), EventOfInterest::Any);
        assert_eq!("ANY".parse::<EventOfInterest>().unwrap(), EventOfInterest::Any);
        assert_eq!("3".parse::<EventOfInterest>().unwrap(), cause(3));
    }

    #[test]
    fn test_parse_rejects_censoring_code_and_garbage() {
        for input in ["0", "-1", "1.5", "", "all"] {
            assert!(input.parse::<EventOfInterest>().is_err(), "{input}");
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for eoi in [EventOfInterest::Any, cause(1), cause(12)] {
            assert_eq!(eoi.to_string().parse::<EventOfInterest>().unwrap(), eoi);
        }
    }

    #[test]
    fn test_matches_never_selects_censoring() {
        assert!(!EventOfInterest::Any.matches(0));
        assert!(!cause(1).matches(0));
    }

    #[test]
    fn test_is_observed_in() {
        let ids = [0, 1, 2];
        assert!(EventOfInterest::Any.is_observed_in(&ids));
        assert!(EventOfInterest::Any.is_observed_in(&[]));
        assert!(cause(2).is_observed_in(&ids));
        assert!(!cause(3).is_observed_in(&ids));
    }
}
