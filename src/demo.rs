//! Purpose: Run functions for the pattern demonstrations.
//! Exports: `template_method`, `factory_method`, `singleton`, `singleton2`,
//! `adapter`, `adapter2`.
//! Role: Command business logic; the CLI dispatcher maps tokens onto these.
//! Invariants: Demos write human-readable text to the given sink only.
//! Invariants: Demo-level failures are printed and survived; only sink and
//! formatter failures propagate to the caller.

use std::fmt::{self, Write as _};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::{Arc, Barrier, mpsc};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::{Map, json};

use crate::core::adapt::{PlainTextSource, SourceDisplay, SourceDisplayAdapter};
use crate::core::display::{ListDisplay, StagedDisplay, TableDisplay};
use crate::core::error::{Error, ErrorKind};
use crate::core::reader::ReaderFactory;
use crate::core::shared::{EagerShared, RacyLazy};
use crate::notice::{Notice, notice_json};

/// Window forced into the racy accessor so concurrent first callers overlap.
pub const RACE_DELAY: Duration = Duration::from_millis(25);

const RACERS: usize = 3;

pub fn template_method(out: &mut dyn io::Write) -> Result<(), Error> {
    let mut text = String::new();
    render_template_method(&mut text).map_err(fmt_error)?;
    write_text(out, &text)
}

fn render_template_method(text: &mut String) -> fmt::Result {
    writeln!(text, "hello template_method")?;
    let items = vec![
        "Alice Example".to_string(),
        "Bob Example".to_string(),
        "Carol Example".to_string(),
    ];
    ListDisplay::new(items.clone()).display(text)?;
    TableDisplay::new(items).display(text)
}

pub fn factory_method(out: &mut dyn io::Write) -> Result<(), Error> {
    let factory = ReaderFactory::new(resolve_base_dir("factory_method"));
    let mut text = String::new();
    render_factory_method(&factory, &mut text).map_err(fmt_error)?;
    write_text(out, &text)
}

fn render_factory_method(factory: &ReaderFactory, text: &mut String) -> fmt::Result {
    writeln!(text, "hello factory_method")?;
    // The unsupported suffix is part of the demonstration: print the error
    // and keep going.
    for name in ["Sample.csv", "Sample.xml", "Sample.txt"] {
        match factory.create(name) {
            Ok(reader) => writeln!(text, "{}", reader.describe())?,
            Err(err) => writeln!(text, "rejected: {err}")?,
        }
    }
    Ok(())
}

pub fn singleton(out: &mut dyn io::Write) -> Result<(), Error> {
    let mut text = String::new();
    writeln!(text, "hello singleton").map_err(fmt_error)?;
    let lazy = RacyLazy::new(Duration::from_millis(2));
    let first = lazy.get()?;
    let second = lazy.get()?;
    writeln!(
        text,
        "{}, {}, {}",
        first.id(),
        second.id(),
        first.id() == second.id()
    )
    .map_err(fmt_error)?;
    write_text(out, &text)
}

pub fn singleton2(out: &mut dyn io::Write) -> Result<(), Error> {
    let mut text = String::new();
    writeln!(text, "hello singleton thread safe ..?").map_err(fmt_error)?;

    let lazy = Arc::new(RacyLazy::new(RACE_DELAY));
    let barrier = Arc::new(Barrier::new(RACERS));
    let (tx, rx) = mpsc::channel();
    for _ in 0..RACERS {
        let lazy = Arc::clone(&lazy);
        let barrier = Arc::clone(&barrier);
        let tx = tx.clone();
        thread::spawn(move || {
            barrier.wait();
            let _ = tx.send(lazy.get());
        });
    }
    drop(tx);
    for result in rx {
        match result {
            Ok(instance) => writeln!(text, "racy: {}", instance.id()).map_err(fmt_error)?,
            Err(err) => writeln!(text, "racy: error: {err}").map_err(fmt_error)?,
        }
    }

    let eager = Arc::new(EagerShared::new()?);
    let barrier = Arc::new(Barrier::new(RACERS));
    let (tx, rx) = mpsc::channel();
    for _ in 0..RACERS {
        let eager = Arc::clone(&eager);
        let barrier = Arc::clone(&barrier);
        let tx = tx.clone();
        thread::spawn(move || {
            barrier.wait();
            let _ = tx.send(eager.get());
        });
    }
    drop(tx);
    for instance in rx {
        writeln!(text, "eager: {}", instance.id()).map_err(fmt_error)?;
    }

    write_text(out, &text)
}

pub fn adapter(out: &mut dyn io::Write) -> Result<(), Error> {
    let mut text = String::new();
    writeln!(text, "hello adapter").map_err(fmt_error)?;
    let client = SourceDisplayAdapter::new(PlainTextSource);
    client.display(&mut text).map_err(fmt_error)?;
    write_text(out, &text)
}

pub fn adapter2(out: &mut dyn io::Write) -> Result<(), Error> {
    let mut text = String::new();
    writeln!(text, "hello adapter").map_err(fmt_error)?;
    let client: &dyn SourceDisplay = &SourceDisplayAdapter::new(PlainTextSource);
    client.display(&mut text).map_err(fmt_error)?;
    write_text(out, &text)
}

fn resolve_base_dir(demo: &str) -> PathBuf {
    match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            tracing::warn!(demo, error = %err, "working directory unavailable; using empty prefix");
            emit_notice(&dir_resolution_notice(demo, &err));
            PathBuf::new()
        }
    }
}

fn dir_resolution_notice(demo: &str, err: &io::Error) -> Notice {
    let mut details = Map::new();
    details.insert("fallback".to_string(), json!(""));
    Notice {
        kind: "dir_resolution".to_string(),
        time: notice_time_now().unwrap_or_default(),
        demo: demo.to_string(),
        message: format!("working directory unavailable: {err}"),
        details,
    }
}

fn emit_notice(notice: &Notice) {
    if io::stderr().is_terminal() {
        eprintln!("notice: {}", notice.message);
        return;
    }
    let value = notice_json(notice);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"notice\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn notice_time_now() -> Option<String> {
    use time::format_description::well_known::Rfc3339;
    let duration = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
    let ts = time::OffsetDateTime::from_unix_timestamp_nanos(duration.as_nanos() as i128).ok()?;
    ts.format(&Rfc3339).ok()
}

fn write_text(out: &mut dyn io::Write, text: &str) -> Result<(), Error> {
    out.write_all(text.as_bytes()).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write demo output")
            .with_source(err)
    })
}

fn fmt_error(err: fmt::Error) -> Error {
    Error::new(ErrorKind::Internal)
        .with_message("failed to format demo output")
        .with_source(err)
}
