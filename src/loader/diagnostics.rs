/// A non-fatal finding recorded during a load.
#[derive(Debug, Clone)]
pub struct Warning {
    /// Document identity: a file path, case name, or caller-supplied label.
    pub source: String,
    pub message: String,
}

/// Collector for non-fatal load findings.
///
/// Fatal problems surface as [`LoadError`](super::LoadError); warnings (e.g.
/// unrecognized keys preserved in an extension bucket) accumulate here. The
/// caller owns the collector and decides how to report it; the library never
/// prints.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_warning(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Warning { source: source.into(), message: message.into() });
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_warnings_in_order() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());

        diagnostics.push_warning("pong-impala", "unknown key 'notes' preserved");
        diagnostics.push_warning("pong-impala", "unknown key 'owner' preserved");

        assert_eq!(diagnostics.warning_count(), 2);
        assert_eq!(diagnostics.warnings()[0].message, "unknown key 'notes' preserved");
        assert_eq!(diagnostics.warnings()[1].source, "pong-impala");
    }
}
