//! Live full-screen table of monitor state.

use crate::error::Result;
use crate::hosts;
use crate::monitor::{HostSnapshot, Monitor};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table};
use ratatui::{DefaultTerminal, Frame};
use std::path::Path;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

/// Delay between event polls; the table redraws once per poll.
const TICK: Duration = Duration::from_millis(500);

/// Minimum time between hosts-file reloads (debounce).
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coloring thresholds for the average latency column.
pub struct Thresholds {
    pub low_ms: f64,
    pub high_ms: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low_ms: 50.0,
            high_ms: 150.0,
        }
    }
}

/// Hosts-file change feed for live reload.
pub struct ReloadFeed<'a> {
    pub events: Receiver<notify::Result<notify::Event>>,
    pub hosts_file: &'a Path,
}

/// Run the dashboard until the user quits.
pub fn run(monitor: &Monitor, thresholds: &Thresholds, reload: Option<ReloadFeed<'_>>) -> Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, monitor, thresholds, reload);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    monitor: &Monitor,
    thresholds: &Thresholds,
    reload: Option<ReloadFeed<'_>>,
) -> Result<()> {
    let mut last_reload = Instant::now();

    loop {
        let rows = monitor.snapshot();
        terminal.draw(|frame| draw(frame, &rows, thresholds))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit_key(key.code, key.modifiers) {
                    monitor.stop();
                    return Ok(());
                }
            }
        }

        if let Some(feed) = &reload {
            let mut relevant = false;
            while let Ok(event) = feed.events.try_recv() {
                if let Ok(event) = event {
                    if matches!(
                        event.kind,
                        notify::EventKind::Modify(_)
                            | notify::EventKind::Create(_)
                            | notify::EventKind::Remove(_)
                    ) {
                        relevant = true;
                    }
                }
            }

            if relevant && last_reload.elapsed() >= RELOAD_DEBOUNCE {
                last_reload = Instant::now();
                // A file mid-edit may be briefly unreadable or empty; keep
                // the current host set in that case.
                if let Ok(entries) = hosts::load_hosts(feed.hosts_file) {
                    if !entries.is_empty() {
                        monitor.sync_hosts(entries);
                    }
                }
            }
        }
    }
}

fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn draw(frame: &mut Frame, rows: &[HostSnapshot], thresholds: &Thresholds) {
    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let header = Row::new(vec![
        "#",
        "Host",
        "Name",
        "Hostname",
        "Last",
        "Avg",
        "Chg",
        "Success %",
        "Count",
        "Updated",
        "Jitter",
    ])
    .style(
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    );

    let body = rows.iter().enumerate().map(|(idx, row)| {
        let row_style = if row.last_latency.is_none() {
            Style::default().bg(Color::Red)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from((idx + 1).to_string()),
            Cell::from(row.address.clone()),
            Cell::from(row.label.clone()),
            Cell::from(row.resolved.clone()),
            Cell::from(format_latency(row.last_latency)),
            avg_cell(row, thresholds),
            trend_cell(row),
            Cell::from(format!("{:.2} %", row.success_rate)),
            Cell::from(row.sample_count.to_string()),
            Cell::from(row.last_update.format("%H:%M:%S").to_string()),
            Cell::from(format!("{:.2} ms", row.jitter)),
        ])
        .style(row_style)
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Length(18),
        Constraint::Length(14),
        Constraint::Length(24),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(3),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Length(9),
        Constraint::Length(10),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .block(Block::bordered().title("netwatch"));
    frame.render_widget(table, table_area);

    let footer = Paragraph::new("q / esc: quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

fn avg_cell(row: &HostSnapshot, thresholds: &Thresholds) -> Cell<'static> {
    if row.last_latency.is_none() || row.avg_latency == 0.0 {
        return Cell::from("N/A").style(Style::default().bg(Color::Red));
    }

    let color = latency_color(row.avg_latency, thresholds);
    Cell::from(format!("{:.2} ms", row.avg_latency)).style(Style::default().bg(color))
}

fn trend_cell(row: &HostSnapshot) -> Cell<'static> {
    use crate::probe::Trend;

    let style = match row.trend {
        Trend::Up => Style::default().fg(Color::Red),
        Trend::Down => Style::default().fg(Color::Green),
        Trend::Flat => Style::default(),
    };
    Cell::from(row.trend.arrow()).style(style)
}

/// Background color for an average latency value.
fn latency_color(avg_ms: f64, thresholds: &Thresholds) -> Color {
    if avg_ms <= thresholds.low_ms {
        Color::Green
    } else if avg_ms <= thresholds.high_ms {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Render a probe outcome for the Last column.
fn format_latency(latency: Option<f64>) -> String {
    match latency {
        Some(ms) => format!("{:.2} ms", ms),
        None => "unavailable".to_string(),
    }
}
