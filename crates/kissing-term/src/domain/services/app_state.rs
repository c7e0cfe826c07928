#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use tui_textarea::TextArea;

use super::Command;
use super::Flow;
use super::QueryEngine;
use super::SessionController;
use crate::domain::models::DisplayMode;
use crate::domain::models::Event;
use crate::domain::models::Report;

pub struct AppStateProps {
    pub mode: DisplayMode,
    pub dimension: Option<String>,
}

/// Interactive state: the dimension field and the session behind it.
pub struct AppState<'a> {
    pub controller: SessionController,
    pub textarea: TextArea<'a>,
}

impl<'a> AppState<'a> {
    pub fn new(props: AppStateProps) -> AppState<'a> {
        let mut textarea = TextArea::default();
        textarea.set_block(Block::default().borders(Borders::ALL).title("Dimension n"));

        let mut app_state = AppState {
            controller: SessionController::new(QueryEngine::default(), props.mode),
            textarea,
        };

        if let Some(dimension) = props.dimension {
            app_state.textarea.insert_str(&dimension);
            app_state.controller.submit_dimension(&dimension);
        }

        app_state
    }

    pub fn input_text(&self) -> String {
        self.textarea.lines().join("")
    }

    pub fn report(&self) -> &Report {
        self.controller.current_report()
    }

    pub fn mode(&self) -> DisplayMode {
        self.controller.session().mode
    }

    /// Returns `true` once the user asked to quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::KeyboardCharInput(input) => {
                self.textarea.input(input);
            }
            Event::KeyboardEnter => {
                let text = self.input_text();
                self.controller.submit_dimension(&text);
            }
            Event::ModeSelect(mode) => {
                self.controller.select_mode(mode);
            }
            Event::Quit => {
                return self.controller.handle(Command::Quit) == Flow::Quit;
            }
            Event::UITick => {}
        }

        false
    }
}
