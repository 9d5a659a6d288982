//! Line-oriented operator console.
//!
//! Wraps a reader and a writer so the menu loop and the shell escape can be
//! driven by a real terminal or by in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
    unicode: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, ui: &UiContext) -> Self {
        Self::with_style(input, output, ui.color, ui.unicode)
    }

    pub fn with_style(input: R, output: W, color: bool, unicode: bool) -> Self {
        Self {
            input,
            output,
            color,
            unicode,
        }
    }

    /// Print `prompt` without a newline and block for one line of input.
    ///
    /// Returns `None` once the input is closed. The trailing line ending is
    /// stripped; everything else is returned verbatim, with bytes that are not
    /// UTF-8 replaced by U+FFFD.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    pub fn print(&mut self, text: &ColoredText) -> io::Result<()> {
        writeln!(self.output, "{}", text.render(self.color))
    }

    /// Print several styled runs on one line
    pub fn print_parts(&mut self, parts: &[ColoredText]) -> io::Result<()> {
        for part in parts {
            write!(self.output, "{}", part.render(self.color))?;
        }
        writeln!(self.output)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Recoverable problem, e.g. a bad menu choice
    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        let icon = Icon::Warning.colored(self.color, self.unicode);
        writeln!(
            self.output,
            "{} {}",
            icon,
            ColoredText::warning(message).render(self.color)
        )
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let icon = Icon::Error.colored(self.color, self.unicode);
        writeln!(
            self.output,
            "{} {}",
            icon,
            ColoredText::error(message).render(self.color)
        )
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let icon = Icon::Success.colored(self.color, self.unicode);
        writeln!(
            self.output,
            "{} {}",
            icon,
            ColoredText::success(message).bold().render(self.color)
        )
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
