//! Reducer logic for the to-do application.
//!
//! Routes actions into the two state components. The only real
//! effect in the application is the notification auto-hide timer,
//! expressed as an `Effect::Delay` that feeds a `NoticeExpired`
//! action back in.

use crate::format;
use crate::types::{AppState, DEFAULT_NOTICE_AUTO_HIDE, NoticeStyle, Severity};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use taskdeck_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};

/// Environment dependencies for the application reducer
#[derive(Clone)]
pub struct AppEnvironment {
    /// Clock for generating creation timestamps
    pub clock: Arc<dyn Clock>,
}

impl AppEnvironment {
    /// Creates a new `AppEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Actions of the to-do application
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum AppAction {
    /// Add a new task; the caller has already validated the trimmed
    /// content is non-empty
    AddTodo {
        /// Task text
        content: String,
    },

    /// Flip the completion flag of a task; no-op for unknown ids
    ToggleComplete {
        /// Task to toggle
        id: u64,
    },

    /// Remove a task; no-op for unknown ids
    RemoveTodo {
        /// Task to remove
        id: u64,
    },

    /// Show a notice, overwriting any visible one
    OpenNotice {
        /// Message text
        message: String,
        /// Severity level
        severity: Severity,
        /// Auto-hide duration
        auto_hide: Duration,
        /// Visual style
        style: NoticeStyle,
    },

    /// Dismiss the notice explicitly
    CloseNotice,

    /// Internal: the auto-hide timer for notice generation `seq` fired
    NoticeExpired {
        /// Generation the timer was armed for
        seq: u64,
    },
}

impl AppAction {
    /// Validates raw form input into an `AddTodo` action
    ///
    /// Returns `None` for empty or whitespace-only input; the form
    /// shows a blocking alert in that case and the store is never
    /// called.
    #[must_use]
    pub fn add_todo(input: &str) -> Option<Self> {
        let content = input.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self::AddTodo {
            content: content.to_owned(),
        })
    }

    /// An `OpenNotice` with the default attributes (success, 3 s
    /// auto-hide, filled)
    #[must_use]
    pub const fn open_notice(message: String) -> Self {
        Self::OpenNotice {
            message,
            severity: Severity::Success,
            auto_hide: DEFAULT_NOTICE_AUTO_HIDE,
            style: NoticeStyle::Filled,
        }
    }
}

/// Reducer for the to-do application
#[derive(Clone, Debug, Default)]
pub struct AppReducer;

impl AppReducer {
    /// Creates a new `AppReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::AddTodo { content } => {
                let created_at = format::date_to_str(env.clock.now());
                let id = state.todos.add(&content, created_at);
                tracing::debug!(id, "Task added");
                smallvec![Effect::None]
            },

            AppAction::ToggleComplete { id } => {
                state.todos.toggle_complete(id);
                smallvec![Effect::None]
            },

            AppAction::RemoveTodo { id } => {
                state.todos.remove(id);
                smallvec![Effect::None]
            },

            AppAction::OpenNotice {
                message,
                severity,
                auto_hide,
                style,
            } => {
                let seq = state.notice.open(message, severity, auto_hide, style);
                smallvec![Effect::Delay {
                    duration: auto_hide,
                    action: Box::new(AppAction::NoticeExpired { seq }),
                }]
            },

            AppAction::CloseNotice => {
                state.notice.close();
                smallvec![Effect::None]
            },

            AppAction::NoticeExpired { seq } => {
                // A timer armed for an overwritten notice must not
                // close its successor
                if state.notice.seq == seq {
                    state.notice.close();
                }
                smallvec![Effect::None]
            },
        }
    }
}
