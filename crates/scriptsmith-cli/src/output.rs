//! Status output
//!
//! Generated code goes to stdout untouched; everything else goes through
//! [`Reporter`] on stderr so scripts can be piped.

use console::{style, Term};

/// Styled status messages on stderr
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.line(&self.prefix("✓", "OK", Colour::Green), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.line(&self.prefix("⚠", "WARN", Colour::Yellow), message);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.line(&self.prefix("ℹ", "INFO", Colour::Blue), message);
    }

    /// Print a failure message, even in quiet mode
    pub fn failure(&self, message: &str) {
        self.line(&self.prefix("✗", "FAIL", Colour::Red), message);
    }

    fn prefix(&self, symbol: &str, plain: &str, colour: Colour) -> String {
        if !self.use_color {
            return plain.to_string();
        }
        let styled = style(symbol).bold();
        match colour {
            Colour::Green => styled.green(),
            Colour::Yellow => styled.yellow(),
            Colour::Blue => styled.blue(),
            Colour::Red => styled.red(),
        }
        .to_string()
    }

    fn line(&self, prefix: &str, message: &str) {
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }
}

#[derive(Debug, Clone, Copy)]
enum Colour {
    Green,
    Yellow,
    Blue,
    Red,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prefixes() {
        let reporter = Reporter::new(false, false);
        assert_eq!(reporter.prefix("✓", "OK", Colour::Green), "OK");
        assert_eq!(reporter.prefix("✗", "FAIL", Colour::Red), "FAIL");
    }

    #[test]
    fn test_colored_prefix_keeps_symbol() {
        let reporter = Reporter::new(true, false);
        assert!(reporter.prefix("⚠", "WARN", Colour::Yellow).contains('⚠'));
    }

    #[test]
    fn test_quiet_reporter_still_constructs() {
        let reporter = Reporter::new(false, true);
        assert!(reporter.quiet);
        reporter.info("suppressed");
        reporter.success("suppressed");
    }
}
