//! Frame output for a plain terminal (the `read` subcommand).
//!
//! The committed prefix is printed once. Only the in-flight word and the
//! cursor are rewritten, by backing up over their display width; combining
//! marks are zero-width so a mutated word erases like the plain one.

use crate::engine::reveal::Frame;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub struct StreamWriter<W: Write> {
    out: W,
    printed: usize,
    tail_width: usize,
}

impl<W: Write> StreamWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            printed: 0,
            tail_width: 0,
        }
    }

    pub fn render(&mut self, frame: &Frame) -> io::Result<()> {
        if self.tail_width > 0 {
            let back = "\u{8}".repeat(self.tail_width);
            write!(self.out, "{}{}{}", back, " ".repeat(self.tail_width), back)?;
        }

        let split = frame.active.start.min(frame.text.len());
        let (prefix, tail) = frame.text.split_at(split);
        if let Some(new) = prefix.get(self.printed..) {
            self.out.write_all(new.as_bytes())?;
        }
        self.printed = split;

        self.out.write_all(tail.as_bytes())?;
        self.tail_width = tail.width();

        if frame.is_final() {
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
