//! Diagnostic types reported by lints.

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A likely mistake in the pages directory.
    Warning,
    /// Informational message about how a file was interpreted.
    Info,
}

impl Severity {
    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message produced by a lint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The lint that produced this diagnostic.
    pub lint: &'static str,
    /// The diagnostic message.
    pub message: String,
    /// Optional location (the page file path).
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(lint: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, lint, message)
    }

    /// Create a new info diagnostic.
    pub fn info(lint: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, lint, message)
    }

    fn new(severity: Severity, lint: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            lint,
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, "\n  --> {}", loc)?;
        }
        Ok(())
    }
}
