mod common;

use common::{Harness, state_for_path};
use core_actions::dispatcher::SAVED_NOTIFICATION;
use core_actions::{Action, EditEffect};
use core_config::LineEndingPolicy;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::subscriber::with_default;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

struct LockedWriter<'a> {
    guard: MutexGuard<'a, Vec<u8>>,
}

impl Write for LockedWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = LockedWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedWriter {
            guard: self.inner.lock().expect("log buffer poisoned"),
        }
    }
}

#[test]
fn save_writes_file_and_clears_modified() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    let mut h = Harness::new();
    let mut st = state_for_path("one\ntwo", &path, 3, 0);
    h.dispatch(&mut st, Action::InsertChar('!'));
    assert!(st.text.is_modified());

    let out = h.dispatch(&mut st, Action::Save);
    assert_eq!(out.effect, EditEffect::None);
    assert_eq!(out.notification.as_deref(), Some(SAVED_NOTIFICATION));
    assert!(!st.text.is_modified());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one!\ntwo");

    // Clean text exits on the first request.
    assert!(h.dispatch(&mut st, Action::Exit).quit);
}

#[test]
fn crlf_policy_applies_at_save_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    let mut h = Harness::with_policy(LineEndingPolicy::Crlf);
    let mut st = state_for_path("a\nb", &path, 0, 0);
    h.dispatch(&mut st, Action::Save);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\r\nb");
}

#[test]
fn failed_save_notifies_keeps_modified_and_logs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("doc.txt");
    let mut h = Harness::new();
    let mut st = state_for_path("abc", &path, 0, 0);
    h.dispatch(&mut st, Action::InsertChar('x'));

    let buf = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(BufferWriter { inner: buf.clone() })
        .finish();
    let out = with_default(subscriber, || h.dispatch(&mut st, Action::Save));

    let note = out.notification.unwrap();
    assert!(note.starts_with("Save failed:"), "{note}");
    assert!(st.text.is_modified());
    let logs = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("file_write_error"));
    assert!(logs.contains("save_failed"));
}
