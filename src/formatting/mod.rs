use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
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
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Resolve the color mode from `NO_COLOR`, `CLICOLOR` and
    /// `CLICOLOR_FORCE` as read through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // no-color.org: presence alone disables color
        if lookup("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn info(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red().bold())
    }

    fn info(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn info(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick a formatter for `config`.
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    match config.color {
        ColorMode::Never => Box::new(PlainFormatter),
        ColorMode::Auto | ColorMode::Always => Box::new(ColoredFormatter::new(config)),
    }
}

fn detect_color_support() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }

    std::io::stdout().is_terminal()
}
