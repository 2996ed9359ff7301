mod common;

use common::{FILE, ch, ctrl, editor, editor_with, key, press, status};
use core_editor::{EditorError, EditorOptions, Redraw};
use core_events::{Event, KeyCode};
use core_render::RedrawKind;
use core_terminal::{Console, HeadlessConsole};
use core_text::{Position, Text};
use pretty_assertions::assert_eq;

#[test]
fn initial_frame_shows_text_and_status() {
    let ed = editor("hello\nworld", 40, 6);
    let c = ed.console();
    assert_eq!(c.commits(), 1);
    assert_eq!(c.row(0), "hello");
    assert_eq!(c.row(1), "world");
    assert_eq!(c.row(2), "");
    assert_eq!(c.row(5), status(40, "", "a.txt | LF | [0;0]"));
    assert_eq!(c.cursor(), (0, 0));
}

#[test]
fn typing_redraws_only_the_line() {
    let mut ed = editor("hello\nworld", 40, 6);
    let r = ed.handle_event(ch('X')).unwrap();
    assert_eq!(
        r,
        Redraw {
            kind: RedrawKind::Line,
            row: 0
        }
    );
    let c = ed.console();
    assert_eq!(c.row(0), "Xhello");
    assert_eq!(c.row(5), status(40, "", "*a.txt | LF | [1;0]"));
    assert_eq!(c.cursor(), (1, 0));
    assert_eq!(c.commits(), 2);
    // One text row plus the status row.
    assert_eq!(c.last_frame_writes(), 80);
}

#[test]
fn enter_redraws_from_the_split_row_down() {
    let mut ed = editor("hello\nworld", 40, 6);
    press(&mut ed, [key(KeyCode::Right), key(KeyCode::Right)]);
    let r = ed.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(r.kind, RedrawKind::Below);
    assert_eq!(r.row, 0);
    let c = ed.console();
    assert_eq!(c.screen()[..4], ["he", "llo", "world", ""]);
    assert_eq!(c.cursor(), (0, 1));
    assert_eq!(c.last_frame_writes(), 5 * 40 + 40);
}

#[test]
fn backspace_join_repaints_shifted_rows() {
    let mut ed = editor("ab\ncd\nef", 40, 6);
    press(&mut ed, [key(KeyCode::Down)]);
    let r = ed.handle_event(key(KeyCode::Backspace)).unwrap();
    assert_eq!(r.kind, RedrawKind::Below);
    assert_eq!(ed.console().screen()[..3], ["abcd", "ef", ""]);
    assert_eq!(ed.console().cursor(), (2, 0));
}

#[test]
fn cursor_moves_without_text_repaint() {
    let mut ed = editor("hello", 40, 6);
    let r = ed.handle_event(key(KeyCode::Right)).unwrap();
    assert_eq!(r.kind, RedrawKind::None);
    assert_eq!(ed.console().last_frame_writes(), 40);
    assert_eq!(ed.console().cursor(), (1, 0));
}

#[test]
fn moving_below_the_window_scrolls_with_full_redraw() {
    let content: Vec<String> = (0..20).map(|i| format!("line{i}")).collect();
    let mut ed = editor(&content.join("\n"), 40, 6);
    for _ in 0..4 {
        let r = ed.handle_event(key(KeyCode::Down)).unwrap();
        assert_eq!(r.kind, RedrawKind::None);
    }
    let r = ed.handle_event(key(KeyCode::Down)).unwrap();
    assert_eq!(r.kind, RedrawKind::Full);
    assert_eq!(ed.viewport().y_boundary(), 1);
    let c = ed.console();
    assert_eq!(c.row(0), "line1");
    assert_eq!(c.row(4), "line5");
    assert_eq!(c.cursor(), (0, 4));
}

#[test]
fn moving_right_past_the_edge_scrolls_horizontally() {
    let line: String = ('a'..='z').collect();
    let mut ed = editor(&line, 10, 3);
    for _ in 0..8 {
        ed.handle_event(key(KeyCode::Right)).unwrap();
    }
    assert_eq!(ed.viewport().x_boundary(), 0);
    let r = ed.handle_event(key(KeyCode::Right)).unwrap();
    assert_eq!(r.kind, RedrawKind::Full);
    assert_eq!(ed.viewport().x_boundary(), 1);
    assert_eq!(ed.console().row(0), "bcdefghij");
    assert_eq!(ed.console().cursor(), (8, 0));
}

#[test]
fn split_on_last_visible_row_escalates_to_full() {
    let mut ed = editor("1\n2\n3\n4\n5", 40, 6);
    press(&mut ed, [key(KeyCode::Down); 4]);
    press(&mut ed, [key(KeyCode::Right)]);
    let r = ed.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(r.kind, RedrawKind::Full);
    assert_eq!(ed.viewport().y_boundary(), 1);
    assert_eq!(ed.console().screen()[..5], ["2", "3", "4", "5", ""]);
    assert_eq!(ed.console().cursor(), (0, 4));
}

#[test]
fn far_cursor_scenario_on_ten_by_ten() {
    let rows: Vec<String> = (0..30).map(|_| "x".repeat(30)).collect();
    let mut ed = editor(&rows.join("\n"), 10, 10);
    press(&mut ed, [key(KeyCode::Right); 21]);
    press(&mut ed, [key(KeyCode::Down); 17]);
    assert_eq!(ed.state().cursor.position(), Position::new(21, 17));
    assert_eq!(
        (ed.viewport().x_boundary(), ed.viewport().y_boundary()),
        (13, 9)
    );
}

#[test]
fn undo_restores_with_full_redraw() {
    let mut ed = editor("abc", 40, 6);
    press(&mut ed, [ch('x')]);
    assert_eq!(ed.console().row(0), "xabc");
    let clears = ed.console().clears();
    let r = ed.handle_event(ctrl('z')).unwrap();
    assert_eq!(r.kind, RedrawKind::Full);
    assert_eq!(ed.console().row(0), "abc");
    assert_eq!(ed.console().clears(), clears + 1);
    assert_eq!(ed.console().row(5), status(40, "", "*a.txt | LF | [0;0]"));
}

#[test]
fn undo_with_empty_history_notifies() {
    let mut ed = editor("abc", 40, 6);
    let r = ed.handle_event(ctrl('z')).unwrap();
    assert_eq!(r.kind, RedrawKind::None);
    assert_eq!(ed.notification(), "Nothing to undo.");
    assert_eq!(ed.console().row(5), status(40, "Nothing to undo.", "a.txt | LF | [0;0]"));
    // The next key press clears the notification.
    press(&mut ed, [key(KeyCode::Right)]);
    assert_eq!(ed.notification(), "");
}

#[test]
fn unchanged_resize_commits_an_empty_frame() {
    let mut ed = editor("abc", 40, 6);
    let r = ed
        .handle_event(Event::Resize {
            width: 40,
            height: 6,
        })
        .unwrap();
    assert_eq!(r, Redraw::none());
    assert_eq!(ed.console().commits(), 2);
    assert_eq!(ed.console().last_frame_writes(), 0);
}

#[test]
fn zero_sized_resize_is_ignored() {
    let mut ed = editor("abc", 40, 6);
    let r = ed
        .handle_event(Event::Resize {
            width: 0,
            height: 6,
        })
        .unwrap();
    assert_eq!(r, Redraw::none());
    assert_eq!(ed.viewport().full_display_size(), (40, 6));
}

#[test]
fn resize_through_the_event_loop_repaints_everything() {
    let console = HeadlessConsole::new(40, 6).with_events([
        Event::Resize {
            width: 44,
            height: 4,
        },
        ctrl('x'),
    ]);
    let mut ed = core_editor::Editor::new(
        Text::load("abc", false),
        FILE,
        true,
        console,
        EditorOptions::default(),
    )
    .unwrap();
    ed.run().unwrap();
    assert_eq!(ed.viewport().full_display_size(), (44, 4));
    assert_eq!(ed.console().size(), (44, 4));
    assert_eq!(ed.console().row(0), "abc");
    assert_eq!(ed.console().row(3), status(44, "", "a.txt | LF | [0;0]"));
    assert_eq!(ed.console().commits(), 3);
}

#[test]
fn exit_on_modified_text_asks_first() {
    let console = HeadlessConsole::new(40, 6).with_events([ch('a'), ctrl('x'), ctrl('x')]);
    let mut ed = core_editor::Editor::new(
        Text::load("", false),
        FILE,
        true,
        console,
        EditorOptions::default(),
    )
    .unwrap();
    ed.run().unwrap();
    assert!(ed.should_quit());
    assert_eq!(ed.console().pending_events(), 0);
    // Initial frame plus one per event.
    assert_eq!(ed.console().commits(), 4);
}

#[test]
fn exhausted_input_surfaces_terminal_error() {
    let console = HeadlessConsole::new(40, 6).with_events([ch('a'), ctrl('x')]);
    let mut ed = core_editor::Editor::new(
        Text::load("", false),
        FILE,
        true,
        console,
        EditorOptions::default(),
    )
    .unwrap();
    let err = ed.run().unwrap_err();
    assert!(matches!(err, EditorError::Terminal(_)));
    assert!(ed.console().row(5).starts_with("Unsaved changes."));
}

#[test]
fn unmapped_key_only_refreshes_widgets() {
    let mut ed = editor("abc", 40, 6);
    let r = ed.handle_event(key(KeyCode::Tab)).unwrap();
    assert_eq!(r.kind, RedrawKind::None);
    assert_eq!(ed.state().text.serialize("\n"), "abc");
    assert_eq!(ed.console().commits(), 2);
}

#[test]
fn gutter_shows_absolute_numbers() {
    let opts = EditorOptions {
        line_numbers: true,
        ..EditorOptions::default()
    };
    let mut ed = editor_with("a\nb", 40, 6, opts);
    assert_eq!(ed.console().screen()[..3], ["  1 a", "  2 b", ""]);
    assert_eq!(ed.console().cursor(), (4, 0));
    press(&mut ed, [key(KeyCode::Down), key(KeyCode::Right)]);
    assert_eq!(ed.console().cursor(), (5, 1));
}

#[test]
fn relative_gutter_follows_cursor() {
    let opts = EditorOptions {
        relative_numbers: true,
        ..EditorOptions::default()
    };
    let mut ed = editor_with("a\nb\nc", 40, 6, opts);
    assert_eq!(ed.console().screen()[..3], ["  0 a", "  1 b", "  2 c"]);
    press(&mut ed, [key(KeyCode::Down)]);
    assert_eq!(ed.console().screen()[..3], ["  1 a", "  0 b", "  1 c"]);
}

#[test]
fn padding_fallback_survives_edits() {
    let opts = EditorOptions {
        line_numbers: true,
        ..EditorOptions::default()
    };
    let mut ed = editor_with("abc", 4, 3, opts);
    assert!(ed.viewport().is_padding_fallback());
    press(&mut ed, [ch('z'), key(KeyCode::Enter), key(KeyCode::Down)]);
    assert_eq!(ed.state().text.serialize("\n"), "z\nabc");
    assert_eq!(ed.console().row(0), "");
    assert_eq!(ed.console().cursor(), (0, 0));
    assert_eq!(ed.console().commits(), 4);

    ed.console_mut().push_event(Event::Resize {
        width: 40,
        height: 6,
    });
    let resize = ed.console_mut().next_event().unwrap();
    ed.handle_event(resize).unwrap();
    assert!(!ed.viewport().is_padding_fallback());
    assert_eq!(ed.console().row(0), "  1 z");
}

#[test]
fn ignored_key_disarms_pending_exit() {
    let mut ed = editor("abc", 40, 6);
    press(&mut ed, [ch('x'), ctrl('x')]);
    assert!(ed.notification().starts_with("Unsaved changes."));
    press(&mut ed, [key(KeyCode::Tab)]);
    assert_eq!(ed.notification(), "");
    press(&mut ed, [ctrl('x')]);
    assert!(!ed.should_quit());
    assert!(ed.notification().starts_with("Unsaved changes."));
    press(&mut ed, [ctrl('x')]);
    assert!(ed.should_quit());
}

#[test]
fn zero_sized_resize_from_the_console_keeps_the_session_alive() {
    let console = HeadlessConsole::new(40, 6).with_events([
        Event::Resize {
            width: 0,
            height: 6,
        },
        ch('a'),
        ctrl('x'),
        ctrl('x'),
    ]);
    let mut ed = core_editor::Editor::new(
        Text::load("", false),
        FILE,
        true,
        console,
        EditorOptions::default(),
    )
    .unwrap();
    ed.run().unwrap();
    assert!(ed.should_quit());
    assert_eq!(ed.console().size(), (40, 6));
    assert_eq!(ed.viewport().full_display_size(), (40, 6));
    assert_eq!(ed.console().row(0), "a");
    assert_eq!(ed.console().commits(), 5);
}
