//! # Taskdeck Testing
//!
//! Testing utilities and helpers for the Taskdeck architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits ([`mocks::FixedClock`])
//! - A fluent Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use taskdeck_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(AppReducer::new())
//!     .with_env(test_env())
//!     .given_state(AppState::new())
//!     .when_action(AppAction::AddTodo { content: "스쿼트".into() })
//!     .then_state(|state| assert_eq!(state.todos.entries.len(), 1))
//!     .then_effects(|effects| assertions::assert_has_delay_effect(effects))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use taskdeck_core::environment::Clock;

mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making timestamp-dependent
    /// assertions reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use taskdeck_testing::mocks::FixedClock;
    /// use taskdeck_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which cannot
    /// happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
