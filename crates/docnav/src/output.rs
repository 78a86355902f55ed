//! Terminal output for docnav commands.

use console::{Style, Term};

/// Human-readable messages go to stderr; [`Output::data`] writes
/// machine-readable output to stdout so it can be piped.
pub(crate) struct Output {
    stderr: Term,
    stdout: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stderr: Term::stderr(),
            stdout: Term::stdout(),
        }
    }

    /// Plain status line.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.stderr.write_line(msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.styled(&Style::new().green(), msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.styled(&Style::new().yellow(), msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.styled(&Style::new().red(), msg);
    }

    /// Heading for a block of resolution output.
    pub(crate) fn heading(&self, msg: &str) {
        self.styled(&Style::new().cyan().bold(), msg);
    }

    /// Secondary line, e.g. sections left in their default state.
    pub(crate) fn detail(&self, msg: &str) {
        self.styled(&Style::new().dim(), msg);
    }

    /// Write a line of command output to stdout.
    pub(crate) fn data(&self, line: &str) -> std::io::Result<()> {
        self.stdout.write_line(line)
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.stderr.write_line(&style.apply_to(msg).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_line_written_without_error() {
        assert!(Output::new().data("{\"navbar\":[]}").is_ok());
    }
}
