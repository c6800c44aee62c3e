use std::fmt::Display;
use std::io::{self, Write};

use chrono::Local;

use crate::config::REPORT;

#[derive(Debug, Default)]
pub struct Reporter {
    buffer: Vec<String>,
}

impl Reporter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.buffer.push(line.into());
    }

    pub fn add_blank(&mut self) {
        self.buffer.push(String::new());
    }

    pub fn add_rule(&mut self, ch: char) {
        self.buffer.push(ch.to_string().repeat(REPORT.rule_width));
    }

    /// Title framed by two rules, preceded by a blank line.
    pub fn add_banner(&mut self, title: &str, ch: char) {
        self.add_blank();
        self.add_rule(ch);
        self.add_line(format!(" {title}"));
        self.add_rule(ch);
    }

    /// Multi-line block such as a rendered table.
    pub fn add_block(&mut self, block: impl Display) {
        self.buffer
            .extend(block.to_string().lines().map(str::to_string));
    }

    pub fn add_timestamp(&mut self) {
        let ts = Local::now().format(REPORT.timestamp_format);
        self.buffer.push(format!("Generated: {ts}"));
    }

    pub fn lines(&self) -> &[String] {
        &self.buffer
    }

    /// Writes and clears the buffered lines.
    pub fn flush_to(&mut self, out: &mut impl Write) -> io::Result<()> {
        for line in self.buffer.drain(..) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}
