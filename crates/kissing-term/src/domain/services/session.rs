#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use super::QueryEngine;
use crate::domain::models::DisplayMode;
use crate::domain::models::Report;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    AwaitingInput,
    ShowingReport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SubmitDimension(String),
    SelectMode(DisplayMode),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Mutable state of one interactive run. Nothing here outlives the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub dimension: Option<u64>,
    pub mode: DisplayMode,
    pub phase: Phase,
    pub report: Report,
}

impl Session {
    pub fn new(mode: DisplayMode) -> Session {
        Session {
            mode,
            ..Default::default()
        }
    }
}

/// Applies one command to `session` and returns the next session.
pub fn transition(engine: &QueryEngine, session: Session, command: &Command) -> (Session, Flow) {
    match command {
        Command::SubmitDimension(text) => (submit(engine, session, text), Flow::Continue),
        Command::SelectMode(mode) => (select(engine, session, *mode), Flow::Continue),
        Command::Quit => (session, Flow::Quit),
    }
}

fn submit(engine: &QueryEngine, session: Session, text: &str) -> Session {
    let trimmed = text.trim();
    let report = trimmed
        .parse::<i64>()
        .map_err(|err| err.to_string())
        .and_then(|dimension| {
            engine
                .query(dimension, session.mode)
                .map_err(|err| err.to_string())
        });

    match report {
        Ok(report) => Session {
            dimension: report.dimension(),
            phase: Phase::ShowingReport,
            report,
            ..session
        },
        Err(err) => {
            tracing::warn!(input = trimmed, error = %err, "rejected dimension");
            Session {
                phase: Phase::ShowingReport,
                report: Report::Invalid,
                ..session
            }
        }
    }
}

fn select(engine: &QueryEngine, session: Session, mode: DisplayMode) -> Session {
    tracing::info!(mode = %mode, "display mode selected");

    match session.dimension {
        Some(dimension) => Session {
            mode,
            phase: Phase::ShowingReport,
            report: engine
                .query(dimension as i64, mode)
                .unwrap_or(Report::Invalid),
            ..session
        },
        None => Session { mode, ..session },
    }
}

/// Owns the session and feeds host input through [`transition`].
#[derive(Debug, Default)]
pub struct SessionController {
    engine: QueryEngine,
    session: Session,
}

impl SessionController {
    pub fn new(engine: QueryEngine, mode: DisplayMode) -> SessionController {
        SessionController {
            engine,
            session: Session::new(mode),
        }
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        let session = std::mem::take(&mut self.session);
        let (session, flow) = transition(&self.engine, session, &command);
        self.session = session;

        flow
    }

    pub fn submit_dimension(&mut self, text: &str) {
        self.handle(Command::SubmitDimension(text.to_string()));
    }

    pub fn select_mode(&mut self, mode: DisplayMode) {
        self.handle(Command::SelectMode(mode));
    }

    pub fn current_report(&self) -> &Report {
        &self.session.report
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
