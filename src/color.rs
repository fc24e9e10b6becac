//! Terminal styling for human-readable output on stderr

use std::env;
use std::fmt;
use std::str::FromStr;

use owo_colors::OwoColorize;

/// `--color` setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ColorMode {
    Always,
    /// Color when stderr supports it
    #[default]
    Auto,
    Never,
}

impl FromStr for ColorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => anyhow::bail!("Invalid color mode: {s}. Expected one of: always, auto, never"),
        }
    }
}

impl ColorMode {
    /// Pick the effective mode
    ///
    /// An explicit `--color` wins. Otherwise `NO_COLOR` (any value) or
    /// `TERM=dumb` turn colors off, and everything else is `Auto`.
    #[must_use]
    pub fn resolve(cli_mode: Option<Self>) -> Self {
        if let Some(mode) = cli_mode {
            return mode;
        }

        let no_color = env::var_os("NO_COLOR").is_some();
        let dumb_term = env::var("TERM").is_ok_and(|term| term == "dumb");
        if no_color || dumb_term {
            Self::Never
        } else {
            Self::Auto
        }
    }

    /// Whether escape codes should be written
    ///
    /// Auto mode asks `supports-color` about stderr, where styled output goes.
    /// stdout carries machine-readable output (`--json`, piped listings).
    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Auto => supports_color::on_cached(supports_color::Stream::Stderr).is_some(),
            Self::Never => false,
        }
    }

    /// Scenario name in cyan
    #[must_use]
    pub fn colorize_scenario(self, text: &str) -> String {
        if self.should_colorize() {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    /// Scenario kind label: green when runnable, yellow when skipped
    #[must_use]
    pub fn colorize_kind(self, text: &str, skipped: bool) -> String {
        match (self.should_colorize(), skipped) {
            (false, _) => text.to_string(),
            (true, true) => text.yellow().to_string(),
            (true, false) => text.green().to_string(),
        }
    }
}

/// How a piece of output is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decoration {
    /// Leading status symbol
    Status(Status),
    /// Whole text dimmed
    Dim,
    /// Tree connector, indented two spaces per depth
    Branch { last: bool, depth: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Ok,
    Note,
    Caution,
    Failure,
}

impl Status {
    const fn glyph(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::Note => "ℹ",
            Self::Caution => "⚠",
            Self::Failure => "✗",
        }
    }

    fn painted(self) -> String {
        let glyph = self.glyph();
        match self {
            Self::Ok => glyph.bright_green().bold().to_string(),
            Self::Note => glyph.bright_cyan().to_string(),
            Self::Caution => glyph.bright_yellow().to_string(),
            Self::Failure => glyph.bright_red().bold().to_string(),
        }
    }
}

/// Text rendered lazily with the decoration and color mode it was built with
pub struct Styled<D> {
    mode: ColorMode,
    decoration: Decoration,
    content: D,
}

impl<D: fmt::Display> fmt::Display for Styled<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colored = self.mode.should_colorize();
        match self.decoration {
            Decoration::Status(status) if colored => {
                write!(f, "{} {}", status.painted(), self.content)
            }
            Decoration::Status(status) => write!(f, "{} {}", status.glyph(), self.content),
            Decoration::Dim if colored => write!(f, "{}", self.content.to_string().dimmed()),
            Decoration::Dim => fmt::Display::fmt(&self.content, f),
            Decoration::Branch { last, depth } => {
                let connector = if last { "└─" } else { "├─" };
                f.write_str(&"  ".repeat(depth))?;
                if colored {
                    write!(f, "{} {}", connector.dimmed(), self.content)
                } else {
                    write!(f, "{connector} {}", self.content)
                }
            }
        }
    }
}

const fn styled<D>(mode: ColorMode, decoration: Decoration, content: D) -> Styled<D> {
    Styled {
        mode,
        decoration,
        content,
    }
}

/// `✓ message` in green
pub const fn success<D: fmt::Display>(mode: ColorMode, message: D) -> Styled<D> {
    styled(mode, Decoration::Status(Status::Ok), message)
}

/// `ℹ message` in cyan
pub const fn info<D: fmt::Display>(mode: ColorMode, message: D) -> Styled<D> {
    styled(mode, Decoration::Status(Status::Note), message)
}

/// `⚠ message` in yellow
pub const fn warn<D: fmt::Display>(mode: ColorMode, message: D) -> Styled<D> {
    styled(mode, Decoration::Status(Status::Caution), message)
}

/// `✗ message` in red
pub const fn error<D: fmt::Display>(mode: ColorMode, message: D) -> Styled<D> {
    styled(mode, Decoration::Status(Status::Failure), message)
}

/// Secondary information (timings, skip reasons)
pub const fn dim<D: fmt::Display>(mode: ColorMode, text: D) -> Styled<D> {
    styled(mode, Decoration::Dim, text)
}

/// Nested line under a scenario, e.g. `  ├─ terraform init`
pub const fn tree_item<D: fmt::Display>(
    mode: ColorMode,
    message: D,
    is_last: bool,
    indent_level: usize,
) -> Styled<D> {
    styled(
        mode,
        Decoration::Branch {
            last: is_last,
            depth: indent_level,
        },
        message,
    )
}
