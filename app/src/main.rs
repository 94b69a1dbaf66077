//! Terminal shell for the to-do application.
//!
//! Composes the form, list, and notification components under one
//! store, seeds three example tasks at startup, and runs the
//! render/input loop until the user quits.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use taskdeck::{
    AppAction, AppEnvironment, AppReducer, AppState,
    ui::{self, Focus},
};
use taskdeck_core::environment::SystemClock;
use taskdeck_runtime::Store;

/// The concrete store type of the application
type AppStore = Store<AppState, AppAction, AppEnvironment, AppReducer>;

/// Example tasks seeded once at startup
const SEED_TASKS: [&str; 3] = ["스쿼트", "벤치프레스", "데드리프트"];

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let env = AppEnvironment::new(Arc::new(SystemClock));
    let store = Store::new(AppState::new(), AppReducer::new(), env);

    // Seed fixture tasks (no notification, matching first-mount behavior)
    for content in SEED_TASKS {
        store
            .send(AppAction::AddTodo {
                content: content.to_owned(),
            })
            .await?;
    }

    Shell { store }.run().await
}

/// Full-screen interactive shell
struct Shell {
    store: AppStore,
}

impl Shell {
    /// Sets up the terminal, runs the event loop, restores the
    /// terminal regardless of the outcome
    async fn run(self) -> Result<()> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("create terminal")?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    #[allow(clippy::cognitive_complexity)] // key dispatch is a flat match
    async fn event_loop(&self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut input_buf = String::new();
        let mut focus = Focus::Form;
        let mut selected: usize = 0;
        let mut alert = false;

        loop {
            let snapshot = self.store.state(Clone::clone).await;

            // Keep the selection inside the list as entries come and go
            let count = snapshot.todos.count();
            if count == 0 {
                selected = 0;
            } else if selected >= count {
                selected = count - 1;
            }

            terminal.draw(|f| {
                ui::draw_ui(f, &snapshot, &input_buf, selected, focus, alert);
            })?;

            // Poll for terminal events (non-blocking, 50ms timeout);
            // delayed notice auto-hides surface on the next tick
            if !event::poll(Duration::from_millis(50))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };

            // The empty-input alert is blocking: any key dismisses it
            // and the input keeps focus
            if alert {
                alert = false;
                continue;
            }

            match (key.code, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,

                (KeyCode::Tab, _) => {
                    focus = match focus {
                        Focus::Form => Focus::List,
                        Focus::List => Focus::Form,
                    };
                },

                (KeyCode::Esc, _) => {
                    self.store.send(AppAction::CloseNotice).await?;
                },

                (KeyCode::Enter, _) if focus == Focus::Form => {
                    let Some(action) = AppAction::add_todo(&input_buf) else {
                        input_buf.clear();
                        alert = true;
                        continue;
                    };
                    input_buf.clear();

                    self.store.send(action).await?;

                    // The new entry is at the head; echo its id back
                    // through the notification banner
                    let new_id = self
                        .store
                        .state(|s| s.todos.entries.first().map(|e| e.id))
                        .await;
                    if let Some(id) = new_id {
                        self.store
                            .send(AppAction::open_notice(format!("task #{id} added")))
                            .await?;
                    }
                },

                (KeyCode::Backspace, _) if focus == Focus::Form => {
                    input_buf.pop();
                },

                (KeyCode::Char(c), _) if focus == Focus::Form => {
                    input_buf.push(c);
                },

                (KeyCode::Up, _) if focus == Focus::List => {
                    selected = selected.saturating_sub(1);
                },

                (KeyCode::Down, _) if focus == Focus::List => {
                    if selected + 1 < count {
                        selected += 1;
                    }
                },

                (KeyCode::Char(' ') | KeyCode::Enter, _) if focus == Focus::List => {
                    if let Some(entry) = snapshot.todos.entries.get(selected) {
                        self.store
                            .send(AppAction::ToggleComplete { id: entry.id })
                            .await?;
                    }
                },

                (KeyCode::Char('d') | KeyCode::Delete, _) if focus == Focus::List => {
                    if let Some(entry) = snapshot.todos.entries.get(selected) {
                        self.store.send(AppAction::RemoveTodo { id: entry.id }).await?;
                    }
                },

                _ => {},
            }
        }

        if let Err(error) = self.store.shutdown(Duration::from_secs(5)).await {
            tracing::warn!(%error, "Store shutdown incomplete");
        }

        Ok(())
    }
}

/// Logging goes to stderr and stays silent unless `RUST_LOG` is set,
/// keeping the TUI clean
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
