use crossterm::event::KeyEventState;

use super::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn it_maps_mode_hotkeys() {
    for c in ['e', 'E'] {
        assert!(matches!(
            handle_key(press(KeyCode::Char(c))),
            Some(Event::ModeSelect(DisplayMode::Exact))
        ));
    }
    for c in ['a', 'A'] {
        assert!(matches!(
            handle_key(press(KeyCode::Char(c))),
            Some(Event::ModeSelect(DisplayMode::Asymptotic))
        ));
    }
}

#[test]
fn it_maps_quit_keys() {
    assert!(matches!(handle_key(press(KeyCode::Char('q'))), Some(Event::Quit)));
    assert!(matches!(handle_key(press(KeyCode::Char('Q'))), Some(Event::Quit)));
    assert!(matches!(handle_key(press(KeyCode::Esc)), Some(Event::Quit)));
    assert!(matches!(
        handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Event::Quit)
    ));
}

#[test]
fn it_forwards_dimension_characters_to_the_input() {
    for c in ['0', '7', '-', '+'] {
        match handle_key(press(KeyCode::Char(c))) {
            Some(Event::KeyboardCharInput(input)) => assert_eq!(input.key, Key::Char(c)),
            other => panic!("{c}: unexpected {other:?}"),
        }
    }

    match handle_key(press(KeyCode::Backspace)) {
        Some(Event::KeyboardCharInput(input)) => assert_eq!(input.key, Key::Backspace),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn it_submits_on_enter() {
    assert!(matches!(handle_key(press(KeyCode::Enter)), Some(Event::KeyboardEnter)));
}

#[test]
fn it_ignores_other_keys() {
    assert!(handle_key(press(KeyCode::Char('x'))).is_none());
    assert!(handle_key(press(KeyCode::Tab)).is_none());
    assert!(handle_key(press(KeyCode::F(1))).is_none());
}

#[test]
fn it_ignores_key_releases() {
    let release = KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };

    assert!(handle_key(release).is_none());
}
