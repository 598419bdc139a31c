//! Purpose: Template-method rendering of an ordered string sequence.
//! Exports: `StagedDisplay`, `ListDisplay`, `TableDisplay`.
//! Invariants: `display` runs header, body, footer in that order, always.
//! Invariants: Items are immutable once a variant is constructed.

use std::fmt::{self, Write};

/// Algorithm skeleton: three required steps, one provided driver.
pub trait StagedDisplay {
    fn header(&self, out: &mut dyn Write) -> fmt::Result;
    fn body(&self, out: &mut dyn Write) -> fmt::Result;
    fn footer(&self, out: &mut dyn Write) -> fmt::Result;

    /// Runs the three steps in fixed order. No step is skipped or reordered.
    fn display(&self, out: &mut dyn Write) -> fmt::Result {
        self.header(out)?;
        self.body(out)?;
        self.footer(out)
    }
}

pub struct ListDisplay {
    items: Vec<String>,
}

impl ListDisplay {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl StagedDisplay for ListDisplay {
    fn header(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "<dl>")
    }

    fn body(&self, out: &mut dyn Write) -> fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            writeln!(out, "<dt> {idx} </dt>")?;
            writeln!(out, "<dd> {item} </dd>")?;
        }
        Ok(())
    }

    fn footer(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "</dl>")
    }
}

pub struct TableDisplay {
    items: Vec<String>,
}

impl TableDisplay {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl StagedDisplay for TableDisplay {
    fn header(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "<table>")
    }

    fn body(&self, out: &mut dyn Write) -> fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            writeln!(out, "<tr>")?;
            writeln!(out, "<th> {idx} </th>")?;
            writeln!(out, "<td> {item} </td>")?;
            writeln!(out, "</tr>")?;
        }
        Ok(())
    }

    fn footer(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "</table>")
    }
}
