use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

/// Output stream a piece of styled text is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn is_terminal(self) -> bool {
        match self {
            Self::Stdout => std::io::stdout().is_terminal(),
            Self::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

impl ColorMode {
    pub fn should_use_color(&self, stream: Stream) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stream.is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // NO_COLOR per no-color.org
        if var("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    /// Install this configuration as the process-wide `colored` override.
    ///
    /// The override follows stdout, where the banners go.
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color(Stream::Stdout));
    }

    /// Styled error label for stderr.
    ///
    /// Decided against stderr alone, so a redirected stderr gets plain text
    /// even when stdout is a terminal.
    pub fn error_label(&self, text: &str) -> String {
        if !self.color.should_use_color(Stream::Stderr) {
            return text.to_string();
        }
        colored::control::set_override(true);
        let label = text.red().bold().to_string();
        self.apply();
        label
    }
}

/// Styled banner text.
pub fn banner(text: &str) -> String {
    text.bold().to_string()
}

/// Styled file name inside a banner.
pub fn file_name(text: &str) -> String {
    text.cyan().to_string()
}
