//! Console output for the hook.
//!
//! Human-readable status lines: banners, section headers, numbered steps,
//! and prefixed success/warning/error lines. Color is applied only when
//! enabled; with color off the output is plain ASCII apart from the
//! message text.
//!
//! Writes are best-effort. A closed stdout never aborts the hook.

use std::io::{self, Write};

const RULE: &str = "==================================================";

/// Line-oriented console writer
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    /// Console on standard output
    pub fn stdout(color: bool) -> Self {
        Console::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Console { out, color }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    /// Full-width banner
    pub fn banner(&mut self, title: &str) {
        let title = self.colorize(title, "1");
        self.line("");
        self.line(RULE);
        self.line(&title);
        self.line(RULE);
    }

    /// Section header
    pub fn section(&mut self, title: &str) {
        let header = self.colorize(&format!(">> {}", title), "36");
        self.line("");
        self.line(&header);
    }

    /// Numbered step inside a section
    pub fn step(&mut self, index: usize, total: usize, title: &str) {
        self.line(&format!("Step {}/{}: {}", index, total, title));
    }

    pub fn success(&mut self, message: &str) {
        let tag = self.colorize("[ OK ]", "32");
        self.line(&format!("{} {}", tag, message));
    }

    pub fn warning(&mut self, message: &str) {
        let tag = self.colorize("[WARN]", "33");
        self.line(&format!("{} {}", tag, message));
    }

    pub fn error(&mut self, message: &str) {
        let tag = self.colorize("[FAIL]", "31");
        self.line(&format!("{} {}", tag, message));
    }

    /// Untagged line
    pub fn info(&mut self, message: &str) {
        self.line(message);
    }

    /// Indented list item
    pub fn item(&mut self, message: &str) {
        self.line(&format!("  - {}", message));
    }

    /// Label/value pair, indented
    pub fn field(&mut self, label: &str, value: &str) {
        let label = self.colorize(&format!("{}:", label), "90");
        self.line(&format!("  {} {}", label, value));
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
