//! Terminal styling and color detection.
//!
//! Text output highlights headings and optimality verdicts. Everything else
//! (paths, distances, tables) is printed unstyled so it can be piped.

/// ANSI escape codes used by the text renderers.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary details.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for optimal results.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for suboptimal results.
    pub const RED: &str = "\x1b[31m";
    /// Yellow for missing paths.
    pub const YELLOW: &str = "\x1b[33m";
}

/// Resolved color codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub heading: &'static str,
    pub gray: &'static str,
    pub good: &'static str,
    pub bad: &'static str,
    pub warn: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            heading: colors::WHITE_BOLD,
            gray: colors::GRAY,
            good: colors::GREEN,
            bad: colors::RED,
            warn: colors::YELLOW,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            heading: "",
            gray: "",
            good: "",
            bad: "",
            warn: "",
        }
    }

    /// Pick `colored()` or `plain()` from the environment.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Color for an optimality verdict.
    pub fn verdict(&self, optimal: Option<bool>) -> &'static str {
        match optimal {
            Some(true) => self.good,
            Some(false) => self.bad,
            None => self.warn,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check whether ANSI colors should be emitted.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Format a whole number with thousand separators.
///
/// ```
/// # use capitals_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(5096), "5,096");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format kilometres for display, rounded to whole kilometres.
#[must_use]
pub fn format_km(km: f64) -> String {
    format!("{} km", format_with_separators(km.round().max(0.0) as u64))
}
