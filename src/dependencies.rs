//! Dependency selection for a new presentation
//!
//! Each preset contributes a fixed base list; optional extras (syntax
//! highlighting, a named theme) are appended after it.

use clap::ValueEnum;

/// Theme name that maps to no extra package.
pub const DEFAULT_THEME: &str = "default";

/// Prefix of published theme packages.
pub const THEME_PREFIX: &str = "spectacle-theme-";

/// Package that ships the post-install bootstrap for the `scripts` preset.
pub const SCRIPTS_PACKAGE: &str = "melodrama-scripts";

const SYNTAX_PACKAGE: &str = "prismjs";

/// Which flavour of project to scaffold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Install `melodrama-scripts` and let it bootstrap the project
    #[default]
    Scripts,
    /// Install react, react-dom and spectacle directly
    Spectacle,
}

impl Preset {
    fn base_packages(self) -> &'static [&'static str] {
        match self {
            Preset::Scripts => &[SCRIPTS_PACKAGE],
            Preset::Spectacle => &["react", "react-dom", "spectacle"],
        }
    }

    /// Package whose entry point bootstraps the project after install
    pub fn bootstrap_package(self) -> Option<&'static str> {
        match self {
            Preset::Scripts => Some(SCRIPTS_PACKAGE),
            Preset::Spectacle => None,
        }
    }
}

/// Inputs that decide the dependency list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyOptions {
    pub preset: Preset,
    pub syntax: bool,
    pub theme: Option<String>,
}

/// Ordered, duplicate-free list of package names to install
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    packages: Vec<String>,
}

impl DependencySet {
    /// Build the dependency list for the given options
    pub fn prepare(options: &DependencyOptions) -> Self {
        let mut set = Self::default();
        for package in options.preset.base_packages() {
            set.push(*package);
        }
        if options.syntax {
            set.push(SYNTAX_PACKAGE);
        }
        let theme = options
            .theme
            .as_deref()
            .map(str::trim)
            .filter(|theme| !theme.is_empty() && *theme != DEFAULT_THEME);
        if let Some(theme) = theme {
            set.push(format!("{THEME_PREFIX}{theme}"));
        }
        set
    }

    /// Append a package unless it is already present
    pub fn push(&mut self, package: impl Into<String>) {
        let package = package.into();
        if !self.packages.contains(&package) {
            self.packages.push(package);
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DependencySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for package in iter {
            set.push(package);
        }
        set
    }
}
