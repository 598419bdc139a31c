//! Purpose: Adapter bridging a plain-text capability to the display contract.
//! Exports: `PlainTextSource`, `SourceDisplay`, `SourceDisplayAdapter`.
//! Invariants: Adapter output is byte-identical to the adaptee's, however the
//! adapter is dispatched (concrete call or trait object).

use std::fmt;

/// The adaptee: knows how to show plain text, nothing else.
pub struct PlainTextSource;

impl PlainTextSource {
    pub fn show_plain(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "Plain")
    }
}

/// The target capability callers expect.
pub trait SourceDisplay {
    fn display(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Embeds the adaptee and forwards `display` to `show_plain`.
pub struct SourceDisplayAdapter {
    source: PlainTextSource,
}

impl SourceDisplayAdapter {
    pub fn new(source: PlainTextSource) -> Self {
        Self { source }
    }
}

impl SourceDisplay for SourceDisplayAdapter {
    fn display(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.source.show_plain(out)
    }
}
