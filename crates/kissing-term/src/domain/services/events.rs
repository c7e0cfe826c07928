#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::DisplayMode;
use crate::domain::models::Event;

pub struct EventsService {
    crossterm_events: EventStream,
}

impl Default for EventsService {
    fn default() -> Self {
        EventsService::new()
    }
}

impl EventsService {
    pub fn new() -> EventsService {
        EventsService {
            crossterm_events: EventStream::new(),
        }
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Key(keyevent) => handle_key(keyevent),
            _ => None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(err)) => return Err(err.into()),
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

/// Maps a key press onto a domain event. Keys the dimension field cannot use
/// are dropped.
pub fn handle_key(keyevent: KeyEvent) -> Option<Event> {
    if keyevent.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = keyevent.modifiers.contains(KeyModifiers::CONTROL);
    let key = match keyevent.code {
        KeyCode::Char('c') if ctrl => return Some(Event::Quit),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => return Some(Event::Quit),
        KeyCode::Char('e' | 'E') => return Some(Event::ModeSelect(DisplayMode::Exact)),
        KeyCode::Char('a' | 'A') => return Some(Event::ModeSelect(DisplayMode::Asymptotic)),
        KeyCode::Enter => return Some(Event::KeyboardEnter),
        KeyCode::Char(c) if !ctrl && (c.is_ascii_digit() || c == '-' || c == '+') => {
            Key::Char(c)
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };

    Some(Event::KeyboardCharInput(Input {
        key,
        ctrl,
        alt: keyevent.modifiers.contains(KeyModifiers::ALT),
        shift: keyevent.modifiers.contains(KeyModifiers::SHIFT),
    }))
}
