//! Checks that conversion fallbacks are reported through tracing

use std::io;
use std::sync::{Arc, Mutex};

use coercion::to_number;
use core_types::{ObjectRef, Value};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

struct SharedWriterGuard<'a> {
    buffer: &'a Arc<Mutex<Vec<u8>>>,
}

impl io::Write for SharedWriterGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedWriter {
    type Writer = SharedWriterGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SharedWriterGuard {
            buffer: &self.buffer,
        }
    }
}

fn capture(run: impl FnOnce()) -> String {
    let writer = SharedWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    let bytes = writer.buffer.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_nan_fallback_is_logged() {
    let output = capture(|| {
        assert!(to_number(&Value::Object(ObjectRef::default())).is_nan());
    });
    assert!(
        output.contains("no conversion hook produced a primitive"),
        "got: {output}"
    );
}

#[test]
fn test_resolved_hook_is_traced() {
    let obj = ObjectRef::create(
        None,
        [("valueOf", Value::function("valueOf", |_, _| Value::number(2.0)))],
    );
    let output = capture(|| {
        assert_eq!(to_number(&Value::Object(obj)), 2.0);
    });
    assert!(output.contains("to_primitive resolved"), "got: {output}");
    assert!(output.contains("valueOf"), "got: {output}");
}
