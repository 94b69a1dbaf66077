//! Terminal rendering for the to-do application.
//!
//! Full-screen layout:
//!   - Header: title + task count
//!   - Scrollable task list (id, creation date, checkbox, content)
//!   - Input line for new tasks (Enter to add)
//!   - Footer: notification banner while visible, key help otherwise
//!   - Blocking alert overlay for empty submissions

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::types::{AppState, NoticeState, NoticeStyle, Severity, TodoState};

/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The new-task input line
    Form,
    /// The task list
    List,
}

/// Draws one frame from a state snapshot
pub fn draw_ui(
    f: &mut Frame,
    state: &AppState,
    input: &str,
    selected: usize,
    focus: Focus,
    alert: bool,
) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(3),    // task list
            Constraint::Length(3), // input line
            Constraint::Length(1), // banner / help
        ])
        .split(area);

    render_header(f, chunks[0], &state.todos);
    render_entries(f, chunks[1], &state.todos, selected, focus);
    render_input(f, chunks[2], input, focus);
    render_footer(f, chunks[3], &state.notice, focus);

    if alert {
        render_alert(f, area);
    }
}

fn render_header(f: &mut Frame, area: Rect, todos: &TodoState) {
    let header = Paragraph::new(format!(
        " Task Manager — {} tasks ({} done)",
        todos.count(),
        todos.completed_count()
    ))
    .style(Style::default().bg(Color::Rgb(28, 28, 40)).fg(Color::White));
    f.render_widget(header, area);
}

fn render_entries(f: &mut Frame, area: Rect, todos: &TodoState, selected: usize, focus: Focus) {
    let items: Vec<ListItem> = todos
        .entries
        .iter()
        .map(|entry| {
            let checkbox = if entry.completed { "[x]" } else { "[ ]" };
            let content_style = if entry.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(checkbox, Style::default().fg(Color::Cyan)),
                Span::styled(format!(" #{:<3}", entry.id), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!(" {} ", entry.created_at),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.content.clone(), content_style),
            ]))
        })
        .collect();

    let border_style = if focus == Focus::List {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Tasks"),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if focus == Focus::List && todos.count() > 0 {
        list_state.select(Some(selected));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_input(f: &mut Frame, area: Rect, input: &str, focus: Focus) {
    let (cursor, border_style) = if focus == Focus::Form {
        ("▌", Style::default().fg(Color::Cyan))
    } else {
        ("", Style::default().fg(Color::DarkGray))
    };

    let text = Paragraph::new(format!("> {input}{cursor}"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("New task"),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(text, area);
}

fn render_footer(f: &mut Frame, area: Rect, notice: &NoticeState, focus: Focus) {
    if notice.visible {
        f.render_widget(
            Paragraph::new(format!(" {} ", notice.message)).style(notice_style(notice)),
            area,
        );
        return;
    }

    let help = match focus {
        Focus::Form => " Enter: add  |  Tab: switch to list  |  Esc: dismiss notice  |  Ctrl+C: quit",
        Focus::List => {
            " Space/Enter: toggle  |  d: delete  |  ↑/↓: select  |  Tab: switch to input  |  Ctrl+C: quit"
        },
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_alert(f: &mut Frame, area: Rect) {
    let popup = centered_rect(40, 3, area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new("Enter a task. (press any key)")
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title("Alert"),
            ),
        popup,
    );
}

/// Maps a notice's severity and style to terminal colors
fn notice_style(notice: &NoticeState) -> Style {
    let color = severity_color(notice.severity);
    match notice.style {
        NoticeStyle::Filled => Style::default().bg(color).fg(Color::Black),
        NoticeStyle::Outlined | NoticeStyle::Standard => Style::default().fg(color),
    }
}

const fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Blue,
    }
}

/// Fixed-height rectangle centered in `r`
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
