#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;

use crate::domain::models::Report;
use crate::domain::models::ReportLine;
use crate::domain::models::Tone;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;

pub const HELP_TEXT: &str = "[E] Exact / Bounds   [A] Asymptotic   [Q] Quit";

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Accent => Style::default().fg(Color::Cyan),
        Tone::Caution => Style::default().fg(Color::Yellow),
        Tone::Label => Style::default().fg(Color::Green),
        Tone::AlertLabel => Style::default().fg(Color::Red),
        Tone::Value => Style::default().fg(Color::White),
        Tone::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn report_text(report: &Report) -> Text<'static> {
    let lines = report
        .lines()
        .into_iter()
        .map(|line| match line {
            ReportLine::Field {
                label,
                label_tone,
                value,
            } => Line::from(vec![
                Span::styled(format!("{label}: "), tone_style(label_tone)),
                Span::styled(value, tone_style(Tone::Value)),
            ]),
            ReportLine::Text { text, tone } => Line::from(Span::styled(text, tone_style(tone))),
            ReportLine::Blank => Line::default(),
        })
        .collect::<Vec<Line>>();

    Text::from(lines)
}

pub fn draw(frame: &mut Frame, app_state: &AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(&app_state.textarea, layout[0]);

    let output = Paragraph::new(report_text(app_state.report()))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Kissing Numbers ({})", app_state.mode().title())),
        );
    frame.render_widget(output, layout[1]);

    let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, layout[2]);
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
) -> Result<()> {
    let mut app_state = AppState::new(app_state_props);
    let mut events = EventsService::new();

    tracing::info!(mode = %app_state.mode(), "terminal loop started");

    loop {
        terminal.draw(|frame| draw(frame, &app_state))?;

        let event = events.next().await?;
        if app_state.handle_event(event) {
            break;
        }
    }

    tracing::info!("terminal loop stopped");

    Ok(())
}
