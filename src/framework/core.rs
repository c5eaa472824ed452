//! # Console Reports
//!
//! Every demo writes its findings as a [`Report`]: a title and one line per entry,
//! framed by dashed rules. The layout is for people reading a terminal and may change.
//!
//! ```text
//! --------------------------------------------------
//! modern showroom
//! I am a modern table!
//! I am a modern chair!
//! I am a modern sofa!
//! --------------------------------------------------
//! ```

use std::fmt;

const RULE: &str = "--------------------------------------------------";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    title: String,
    lines: Vec<String>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "{}", self.title)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        write!(f, "{}", RULE)
    }
}
