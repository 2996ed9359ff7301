#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_editor::{Editor, EditorOptions};
use core_events::{Event, KeyCode, KeyEvent};
use core_terminal::HeadlessConsole;
use core_text::Text;

pub const FILE: &str = "a.txt";

/// Editor over `content` on a `width` x `height` headless console, with the
/// initial frame already committed.
pub fn editor(content: &str, width: u16, height: u16) -> Editor<HeadlessConsole> {
    editor_with(content, width, height, EditorOptions::default())
}

pub fn editor_with(
    content: &str,
    width: u16,
    height: u16,
    options: EditorOptions,
) -> Editor<HeadlessConsole> {
    let mut ed = Editor::new(
        Text::load(content, false),
        FILE,
        true,
        HeadlessConsole::new(width, height),
        options,
    )
    .expect("editor");
    ed.redraw_all().expect("initial frame");
    ed
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::plain(code))
}

pub fn ch(c: char) -> Event {
    key(KeyCode::Char(c))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::ctrl(KeyCode::Char(c)))
}

pub fn press(ed: &mut Editor<HeadlessConsole>, events: impl IntoIterator<Item = Event>) {
    for ev in events {
        ed.handle_event(ev).expect("event");
    }
}

/// Expected status row, trailing blanks trimmed like `HeadlessConsole::row`.
pub fn status(width: usize, notification: &str, info: &str) -> String {
    let left = width / 2;
    let right = width - left;
    format!("{notification:<left$}{info:>right$}")
        .trim_end()
        .to_string()
}
