use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};
use report_lens_engine::{
    Status,
    citations::{Citation, UrlCheck},
};

use crate::{
    app::{App, IntakeField},
    plain::stats_line,
    styled::{AMBER, report_lines},
};

const TICK: Duration = Duration::from_millis(100);

/// Sets up the terminal, runs the app until it quits, and restores the terminal.
pub fn run(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        app.drain_completions();
        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}

fn status_style(status: Status) -> Style {
    match status {
        Status::Unknown => Style::default(),
        Status::Checking => Style::default().fg(Color::Yellow),
        Status::Live => Style::default().fg(Color::Green),
        Status::Error => Style::default().fg(Color::Red),
    }
}

fn citation_item(c: &Citation) -> ListItem<'static> {
    let mark = if c.verified { "[x] " } else { "[ ] " };
    let mut first = vec![
        Span::styled(mark, Style::default().fg(Color::Green)),
        Span::raw(c.title.clone()),
    ];
    if let Some(marker) = c.status.marker() {
        first.push(Span::raw(" "));
        first.push(Span::styled(marker, status_style(c.status)));
    }
    let second = Line::styled(
        format!("    {} {}", c.id, c.url),
        Style::default().fg(Color::DarkGray),
    );
    ListItem::new(vec![Line::from(first), second])
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[0]);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(panes[1]);

    // Report panel
    let (lines, title) = if app.show_scratchpad {
        let lines = app.report.scratchpad.lines().map(|l| Line::from(l.to_string()));
        (lines.collect::<Vec<_>>(), format!("{} (scratchpad)", app.name))
    } else {
        (report_lines(&app.blocks), app.name.clone())
    };
    let report = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(report, panes[0]);

    // Citation panel
    let items: Vec<ListItem> = app.ledger.iter().map(citation_item).collect();
    let citations = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Citations"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(citations, side[0], &mut app.list_state);

    let stats = app.ledger.stats();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Verified"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(stats.completion_percent.round().clamp(0.0, 100.0) as u16)
        .label(format!("{}/{}", stats.verified, stats.total));
    f.render_widget(gauge, side[1]);

    // Help / status line
    let help = match &app.status_message {
        Some(message) => Line::from(message.clone()),
        None => Line::from(vec![
            Span::raw("q: Quit | j/k: Select | c: Check | C: Check all | "),
            Span::raw("v: Toggle verified | a: Add source | s: Scratchpad | "),
            Span::styled(stats_line(&app.ledger), Style::default().fg(Color::DarkGray)),
        ]),
    };
    f.render_widget(Paragraph::new(help), rows[1]);

    if app.intake.is_some() {
        draw_intake(f, app);
    }
}

fn draw_intake(f: &mut Frame, app: &App) {
    let Some(form) = &app.intake else {
        return;
    };
    let area = centered(f.area(), 70, 8);

    let field_style = |field: IntakeField| {
        if form.field == field {
            Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };
    let check = match form.intake.check() {
        UrlCheck::Idle => Span::raw(""),
        UrlCheck::Checking => Span::styled(" checking...", Style::default().fg(Color::Yellow)),
        UrlCheck::Found => Span::styled(" found", Style::default().fg(Color::Green)),
        UrlCheck::Unreachable => Span::styled(" unreachable", Style::default().fg(Color::Red)),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("URL:   ", field_style(IntakeField::Url)),
            Span::raw(form.intake.url().to_string()),
            check,
        ]),
        Line::from(vec![
            Span::styled("Title: ", field_style(IntakeField::Title)),
            Span::raw(form.intake.title().to_string()),
        ]),
        Line::default(),
        Line::styled(
            "Tab: next field | Enter: add | Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if let Some(error) = &form.error {
        lines.push(Line::styled(error.clone(), Style::default().fg(Color::Red)));
    }

    let popup = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Add source"))
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A rect of `width` percent and `height` rows centred in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width) / 2),
            Constraint::Percentage(width),
            Constraint::Percentage((100 - width) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ratatui::backend::TestBackend;
    use report_lens_engine::{
        ResearchResult,
        citations::{Probe, ProbeOutcome},
    };
    use std::sync::Arc;

    struct Never;

    #[async_trait]
    impl Probe for Never {
        async fn probe(&self, _url: &str) -> ProbeOutcome {
            ProbeOutcome::Unreachable
        }
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let report = ResearchResult::from_report(
            "## Findings\n### Known Limitations\nSee [Survey](https://s.example).",
        );
        App::new("findings.md".to_string(), report, Arc::new(Never))
    }

    #[tokio::test]
    async fn draws_report_and_citations() {
        let mut app = app();
        let screen = screen_text(&mut app);
        assert!(screen.contains("Findings"));
        assert!(screen.contains("! Known Limitations"));
        assert!(screen.contains("[ ] Survey"));
        assert!(screen.contains("0/1"));
    }

    #[tokio::test]
    async fn scratchpad_toggle_swaps_report_pane() {
        let report = report_lens_engine::split_response(
            "<scratchpad>Plan the vectors</scratchpad>## Findings",
        );
        let mut app = App::new("r.md".to_string(), report, Arc::new(Never));
        app.handle_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('s'),
            crossterm::event::KeyModifiers::NONE,
        ));
        let screen = screen_text(&mut app);
        assert!(screen.contains("r.md (scratchpad)"));
        assert!(screen.contains("Plan the vectors"));
    }

    #[tokio::test]
    async fn draws_intake_popup() {
        let mut app = app();
        app.handle_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('a'),
            crossterm::event::KeyModifiers::NONE,
        ));
        let screen = screen_text(&mut app);
        assert!(screen.contains("Add source"));
        assert!(screen.contains("Tab: next field"));
    }
}
