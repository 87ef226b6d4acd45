//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table},
    Frame,
};

use crate::features::analysis::classify_sessions;
use crate::features::stopwatch::{StopwatchState, TickSource};
use crate::output::{session_rows, stat_strings, timing_rows, StyleHint};
use crate::tui::app::App;

const HELP: &[(&str, &str)] = &[
    ("1 / 2 / 3", "select Inhalation / Breath-Hold / Exhalation"),
    ("space", "start or pause"),
    ("r", "reset the stopwatch"),
    ("s", "save the measured time"),
    ("b", "save a breath session from the latest timings"),
    ("j / k", "move in the timings list"),
    ("d", "delete the selected timing"),
    ("R", "reload past data"),
    ("?", "toggle this help"),
    ("q / Esc", "quit"),
];

/// Render the application UI.
pub fn render<T: TickSource>(frame: &mut Frame<'_>, app: &App<T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stopwatch
            Constraint::Length(3), // Averages
            Constraint::Min(0),    // Past data
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_stopwatch(frame, app, chunks[0]);
    render_stats(frame, app, chunks[1]);

    let data = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    render_timings(frame, app, data[0]);
    render_sessions(frame, app, data[1]);

    render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        render_help(frame, frame.area());
    }
}

fn render_stopwatch<T: TickSource>(frame: &mut Frame<'_>, app: &App<T>, area: Rect) {
    let state = app.stopwatch.state();
    let clock_color = match state {
        StopwatchState::Running => Color::Green,
        StopwatchState::Paused => Color::Yellow,
        StopwatchState::Idle => Color::White,
    };
    let phase = app
        .stopwatch
        .phase()
        .map_or_else(|| "no phase selected".to_string(), |p| p.to_string());

    let lines = vec![
        Line::from(Span::styled(
            app.stopwatch.formatted_elapsed(),
            Style::default().fg(clock_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(phase, Style::default().fg(Color::Cyan)),
            Span::styled(format!("  ({state})"), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Stopwatch ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}

fn render_stats<T: TickSource>(frame: &mut Frame<'_>, app: &App<T>, area: Rect) {
    let stats = stat_strings(&app.stats);
    let text = format!(
        "Inhale {}   Hold {}   Exhale {}   ({} timings)",
        stats.avg_inhale, stats.avg_hold, stats.avg_exhale, stats.total
    );
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Averages ").borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_timings<T: TickSource>(frame: &mut Frame<'_>, app: &App<T>, area: Rect) {
    let rows = timing_rows(&app.timings);
    let items: Vec<ListItem<'_>> = if rows.is_empty() {
        vec![ListItem::new(Span::styled(
            "No records yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        rows.into_iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<13}", row.phase.to_string()), Style::default().fg(Color::Cyan)),
                    Span::raw(format!("{:>8}s  ", row.duration)),
                    Span::styled(row.date, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().title(" Timings ").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if !app.timings.is_empty() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

const fn hint_color(hint: StyleHint) -> Color {
    match hint {
        StyleHint::Good => Color::Green,
        StyleHint::Borderline => Color::Yellow,
        StyleHint::Bad => Color::Red,
    }
}

fn render_sessions<T: TickSource>(frame: &mut Frame<'_>, app: &App<T>, area: Rect) {
    let block = Block::default().title(" Sessions ").borders(Borders::ALL);

    let classified = classify_sessions(&app.sessions);
    if classified.is_empty() {
        let empty = Paragraph::new("No complete sessions saved yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows = session_rows(classified).into_iter().map(|row| {
        let color = hint_color(row.style);
        Row::new(vec![
            Cell::from(row.index),
            Cell::from(row.inhale),
            Cell::from(row.hold),
            Cell::from(row.exhale),
            Cell::from(row.ratio),
            Cell::from(row.distance),
            Cell::from(row.category.label()).style(Style::default().fg(color)),
        ])
    });

    let header = Row::new(["#", "Inhale", "Hold", "Exhale", "Ratio", "Dist", "Category"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Length(4),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(14),
        Constraint::Length(6),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

fn render_status_bar<T: TickSource>(frame: &mut Frame<'_>, app: &App<T>, area: Rect) {
    let mut text = app
        .status
        .clone()
        .unwrap_or_else(|| "space:start/pause | s:save | b:session | ?:help | q:quit".to_string());
    if app.in_flight > 0 {
        text.push_str(&format!("  [{} pending]", app.in_flight));
    }

    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let width = area.width.min(60);
    let height = area.height.min(u16::try_from(HELP.len()).unwrap_or(u16::MAX) + 2);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let lines: Vec<Line<'_>> = HELP
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:>10}  "), Style::default().fg(Color::Cyan)),
                Span::raw(*what),
            ])
        })
        .collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title(" Keys ").borders(Borders::ALL)),
        popup,
    );
}
