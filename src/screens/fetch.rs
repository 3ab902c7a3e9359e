//! The fetch view model shared by every weather screen.
//!
//! All three tabs run the same state machine:
//!
//! ```text
//! Idle -> Loading -> { Loaded | Failed } -> Loading -> ...
//! ```
//!
//! [`FetchController`] owns that machine once, so the screens stay thin
//! bindings. Every submission gets a monotonically increasing sequence
//! number; an outcome is applied only if it carries the number of the
//! latest submission, so overlapping fetches resolve deterministically
//! instead of last-response-wins.

use crate::weather::error::WeatherError;

/// Inline prompt shown when a blank query is submitted. A blank query
/// never starts a fetch and never becomes a Failed state.
pub const BLANK_QUERY_PROMPT: &str = "Enter a location to search";

/// Per-screen fetch state. Exactly one is live per screen at any time.
#[derive(Debug)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

/// What a fetch command sends back over the screen's channel.
#[derive(Debug)]
pub struct FetchOutcome<T> {
    pub seq: u64,
    pub result: Result<T, WeatherError>,
}

/// Result of applying an outcome to the controller.
#[derive(Debug, PartialEq, Eq)]
pub enum Applied {
    /// The payload is now live.
    Loaded,
    /// The fetch failed; surface this message to the user.
    Failed(String),
    /// The outcome belonged to a superseded submission and was discarded.
    Stale,
}

/// State machine core of a screen view model.
#[derive(Debug)]
pub struct FetchController<T> {
    state: FetchState<T>,
    last_seq: u64,
}

impl<T> FetchController<T> {
    pub const fn new() -> Self {
        Self {
            state: FetchState::Idle,
            last_seq: 0,
        }
    }

    /// Transition to Loading and hand out the sequence number the
    /// eventual outcome must carry to be applied.
    pub fn begin(&mut self) -> u64 {
        self.last_seq += 1;
        self.state = FetchState::Loading;
        self.last_seq
    }

    /// Apply a fetch outcome. Outcomes from superseded submissions are
    /// discarded without touching the state. A failure replaces any
    /// previously loaded payload, so the view reverts to its empty body.
    pub fn apply(&mut self, outcome: FetchOutcome<T>) -> Applied {
        if outcome.seq != self.last_seq {
            return Applied::Stale;
        }
        match outcome.result {
            Ok(payload) => {
                self.state = FetchState::Loaded(payload);
                Applied::Loaded
            }
            Err(err) => {
                let message = err.surface_message();
                self.state = FetchState::Failed(message.clone());
                Applied::Failed(message)
            }
        }
    }

    pub const fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub const fn loaded(&self) -> Option<&T> {
        match &self.state {
            FetchState::Loaded(payload) => Some(payload),
            _ => None,
        }
    }
}

impl<T> Default for FetchController<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank-query guard shared by the search-capable screens. Returns the
/// trimmed query, or `None` for input that must not start a fetch.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_failure(message: &str) -> Result<&'static str, WeatherError> {
        Err(WeatherError::Provider(message.to_string()))
    }

    #[test]
    fn begin_transitions_to_loading_synchronously() {
        let mut controller = FetchController::<&str>::new();
        assert!(matches!(controller.state(), FetchState::Idle));

        controller.begin();
        assert!(controller.is_loading());
    }

    #[test]
    fn loaded_outcome_replaces_previous_payload() {
        let mut controller = FetchController::new();

        let seq = controller.begin();
        controller.apply(FetchOutcome {
            seq,
            result: Ok("first"),
        });
        assert_eq!(controller.loaded(), Some(&"first"));

        let seq = controller.begin();
        assert!(controller.is_loading());
        controller.apply(FetchOutcome {
            seq,
            result: Ok("second"),
        });
        assert_eq!(controller.loaded(), Some(&"second"));
    }

    #[test]
    fn failure_clears_loaded_data_and_surfaces_message() {
        let mut controller = FetchController::new();

        let seq = controller.begin();
        controller.apply(FetchOutcome {
            seq,
            result: Ok("payload"),
        });

        let seq = controller.begin();
        let applied = controller.apply(FetchOutcome {
            seq,
            result: provider_failure("No matching location found."),
        });

        assert_eq!(
            applied,
            Applied::Failed("No matching location found.".to_string())
        );
        assert!(controller.loaded().is_none());
        assert!(matches!(
            controller.state(),
            FetchState::Failed(message) if message == "No matching location found."
        ));
    }

    #[test]
    fn superseded_outcome_is_discarded() {
        let mut controller = FetchController::new();

        let first = controller.begin();
        let second = controller.begin();

        // The older response arrives after the newer submission.
        let applied = controller.apply(FetchOutcome {
            seq: first,
            result: Ok("stale"),
        });
        assert_eq!(applied, Applied::Stale);
        assert!(controller.is_loading());

        controller.apply(FetchOutcome {
            seq: second,
            result: Ok("fresh"),
        });
        assert_eq!(controller.loaded(), Some(&"fresh"));

        // And a straggler from the first fetch stays a no-op.
        let applied = controller.apply(FetchOutcome {
            seq: first,
            result: provider_failure("too late"),
        });
        assert_eq!(applied, Applied::Stale);
        assert_eq!(controller.loaded(), Some(&"fresh"));
    }

    #[test]
    fn blank_queries_are_rejected() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("\t\n"), None);
        assert_eq!(normalize_query("  London  "), Some("London".to_string()));
    }
}
