use tui_textarea::Input;

use super::DisplayMode;

#[derive(Debug)]
pub enum Event {
    KeyboardCharInput(Input),
    KeyboardEnter,
    ModeSelect(DisplayMode),
    Quit,
    UITick,
}
