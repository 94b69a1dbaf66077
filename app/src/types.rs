//! Domain types for the to-do application.
//!
//! Two state components live under one root [`AppState`]: the to-do
//! list itself ([`TodoState`]) and the transient notification banner
//! ([`NoticeState`]). Both are plain owned data; all mutation happens
//! through the reducer.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default auto-hide duration for notices (matches the original
/// snackbar behavior)
pub const DEFAULT_NOTICE_AUTO_HIDE: Duration = Duration::from_millis(3000);

/// A single to-do entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoEntry {
    /// Unique identifier, monotonically increasing for the process lifetime
    pub id: u64,
    /// Task text, trimmed at creation time
    pub content: String,
    /// Formatted creation timestamp (display string, immutable)
    pub created_at: String,
    /// Whether the task is completed
    pub completed: bool,
}

/// State of the to-do list
///
/// Entries are ordered newest-first: `add` inserts at the head.
///
/// Invariant: every entry's `id` is unique within `entries`, and
/// `next_id` is always ≥ the maximum id ever issued. Ids are never
/// reused, even after removal.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TodoState {
    /// All entries, newest first
    pub entries: Vec<TodoEntry>,
    /// Id counter, incremented before each use
    pub next_id: u64,
}

impl TodoState {
    /// Creates a new empty to-do state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds a new entry at the head of the list and returns its id
    ///
    /// The caller is responsible for rejecting empty input before
    /// calling; the store trims but does not re-validate. The new
    /// entry starts uncompleted.
    pub fn add(&mut self, content: &str, created_at: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;

        self.entries.insert(
            0,
            TodoEntry {
                id,
                content: content.trim().to_owned(),
                created_at,
                completed: false,
            },
        );

        id
    }

    /// Flips the completion flag of the entry with the given id
    ///
    /// Ordering and all other entries are unchanged. No-op if the id
    /// is not present.
    pub fn toggle_complete(&mut self, id: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.completed = !entry.completed;
        }
    }

    /// Removes the entry with the given id, preserving the order of
    /// the rest
    ///
    /// No-op if the id is not present.
    pub fn remove(&mut self, id: u64) {
        self.entries.retain(|e| e.id != id);
    }

    /// Returns an entry by id
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&TodoEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Returns the number of entries
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of completed entries
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.completed).count()
    }
}

/// Severity of a notice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Successful operation feedback
    #[default]
    Success,
    /// Error feedback
    Error,
    /// Warning feedback
    Warning,
    /// Informational feedback
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// Visual style of a notice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeStyle {
    /// Solid background
    #[default]
    Filled,
    /// Border only
    Outlined,
    /// Plain text
    Standard,
}

/// State of the transient notification banner
///
/// There is no queue: a second `open` before the first is dismissed
/// overwrites the current notice — last writer wins. The `seq`
/// generation counter lets the delayed auto-hide recognize it was
/// armed for an overwritten notice and expire as a no-op.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoticeState {
    /// Whether a notice is currently shown
    pub visible: bool,
    /// Message text of the current notice
    pub message: String,
    /// Severity of the current notice
    pub severity: Severity,
    /// How long until the notice auto-hides
    pub auto_hide: Duration,
    /// Visual style of the current notice
    pub style: NoticeStyle,
    /// Generation counter, bumped on every `open`
    pub seq: u64,
}

impl NoticeState {
    /// Creates a new hidden notice state
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible: false,
            message: String::new(),
            severity: Severity::default(),
            auto_hide: DEFAULT_NOTICE_AUTO_HIDE,
            style: NoticeStyle::default(),
            seq: 0,
        }
    }

    /// Shows a notice, overwriting any currently visible one
    ///
    /// Returns the new generation number; the auto-hide timer armed
    /// for this notice carries it back in.
    pub fn open(
        &mut self,
        message: String,
        severity: Severity,
        auto_hide: Duration,
        style: NoticeStyle,
    ) -> u64 {
        self.seq += 1;
        self.visible = true;
        self.message = message;
        self.severity = severity;
        self.auto_hide = auto_hide;
        self.style = style;
        self.seq
    }

    /// Hides the notice
    ///
    /// Other attributes are retained but irrelevant until the next
    /// `open`.
    pub fn close(&mut self) {
        self.visible = false;
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application state owned by the store
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    /// The to-do list
    pub todos: TodoState,
    /// The notification banner
    pub notice: NoticeState,
}

impl AppState {
    /// Creates a new empty application state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
