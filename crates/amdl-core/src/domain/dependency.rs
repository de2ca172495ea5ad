//! Runtime dependency types.

/// Represents the status of a runtime dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Dependency is installed and loadable.
    Present { version: String },
    /// Dependency could not be located.
    Missing,
}

/// How a dependency is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    /// An executable found on the search path.
    Executable,
    /// A package resolvable from the web application's `node_modules`.
    Package,
}

/// Information about a runtime dependency.
#[derive(Debug, Clone)]
pub struct Dependency {
    /// Name of the dependency (e.g., "bun", "elysia").
    pub name: String,
    /// How the dependency is located.
    pub kind: DependencyKind,
    /// Current status of the dependency.
    pub status: DependencyStatus,
    /// Description of what this dependency is used for.
    pub description: String,
    /// Whether a missing dependency stops the bootstrap.
    pub required: bool,
    /// Installation instructions or hints.
    pub install_hint: Option<String>,
}

impl Dependency {
    /// Create a new required dependency.
    pub fn required(
        name: impl Into<String>,
        kind: DependencyKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            status: DependencyStatus::Missing,
            description: description.into(),
            required: true,
            install_hint: None,
        }
    }

    /// Create a new optional dependency.
    pub fn optional(
        name: impl Into<String>,
        kind: DependencyKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind, description)
        }
    }

    /// Set installation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    /// Set the status from an optional detected version.
    #[must_use]
    pub fn with_version(self, version: Option<String>) -> Self {
        self.with_status(version.map_or(DependencyStatus::Missing, |version| {
            DependencyStatus::Present { version }
        }))
    }

    /// Set the status of this dependency.
    #[must_use]
    pub fn with_status(mut self, status: DependencyStatus) -> Self {
        self.status = status;
        self
    }

    pub const fn is_missing(&self) -> bool {
        matches!(self.status, DependencyStatus::Missing)
    }

    /// True when this dependency is required and could not be located.
    pub const fn blocks_bootstrap(&self) -> bool {
        self.required && self.is_missing()
    }
}
