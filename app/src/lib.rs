//! To-do list application on the Taskdeck architecture.
//!
//! Users add free-text tasks, mark them complete, and view them in a
//! list with identifiers and creation timestamps. State lives only in
//! memory for the duration of one process run.
//!
//! The domain is two state components under one root: the to-do list
//! (ordered newest-first, with a monotonic id counter) and the
//! transient notification banner. All mutation flows through
//! [`reducer::AppReducer`] driven by a `taskdeck_runtime::Store`; the
//! terminal front end in [`ui`] renders state snapshots.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskdeck::{AppAction, AppEnvironment, AppReducer, AppState};
//! use taskdeck_core::environment::SystemClock;
//! use taskdeck_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = AppEnvironment::new(Arc::new(SystemClock));
//! let store = Store::new(AppState::new(), AppReducer::new(), env);
//!
//! // Add a task
//! store.send(AppAction::AddTodo { content: "Buy milk".to_owned() }).await?;
//!
//! // The newest entry sits at the head of the list
//! let id = store.state(|s| s.todos.entries[0].id).await;
//!
//! // Complete it
//! store.send(AppAction::ToggleComplete { id }).await?;
//! # Ok(())
//! # }
//! ```

pub mod format;
pub mod reducer;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use reducer::{AppAction, AppEnvironment, AppReducer};
pub use types::{AppState, NoticeState, NoticeStyle, Severity, TodoEntry, TodoState};
