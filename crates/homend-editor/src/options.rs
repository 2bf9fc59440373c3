//! Host options — the `:set` system.
//!
//! Parses `:set`-style directives and applies them to an [`Options`] value.
//! The binary feeds `--set "..."` through the same parser, so a script and an
//! interactive session configure the host identically.
//!
//! # Supported syntax
//!
//! | Syntax           | Effect                        |
//! |------------------|-------------------------------|
//! | `option`         | Enable boolean / show numeric |
//! | `nooption`       | Disable boolean               |
//! | `option!`        | Toggle boolean                |
//! | `option?`        | Query current value           |
//! | `option=N`       | Assign numeric value          |
//! | *(empty)*        | Show changed options          |
//! | `all`            | Show all options              |
//!
//! # Option names
//!
//! | Full name   | Abbrev | Type    | Default |
//! |-------------|--------|---------|---------|
//! | `pastend`   | `pe`   | bool    | true    |
//! | `scrolloff` | `so`   | integer | 0       |
//! | `markring`  | `mr`   | integer | 100     |

use thiserror::Error;

use crate::mark::MARK_RING_DEFAULT;

/// A parsed `:set` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `option` — enable a boolean option.
    On(String),

    /// `nooption` — disable a boolean option.
    Off(String),

    /// `option!` — toggle a boolean option.
    Toggle(String),

    /// `option?` — query the current value.
    Query(String),

    /// `option=value` — assign a value.
    Assign(String, String),

    /// No arguments — show changed options.
    ShowChanged,

    /// `all` — show all options.
    ShowAll,
}

/// Why a directive could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("Unknown option: {0}")]
    Unknown(String),

    #[error("Invalid argument: {name}={value}")]
    InvalidValue { name: String, value: String },

    #[error("Option is not a toggle: {0}")]
    NotBoolean(String),
}

/// Returns `true` if `name` is a known boolean option (full name or abbreviation).
#[must_use]
pub fn is_bool_option(name: &str) -> bool {
    matches!(name, "pastend" | "pe")
}

/// Returns `true` if `name` is a known numeric option (full name or abbreviation).
#[must_use]
pub fn is_numeric_option(name: &str) -> bool {
    matches!(name, "scrolloff" | "so" | "markring" | "mr")
}

/// Parse a full argument string into directives.
///
/// Multiple space-separated arguments are supported (`pastend scrolloff=5`).
/// An empty string produces [`SetDirective::ShowChanged`].
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return vec![SetDirective::ShowChanged];
    }
    trimmed.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single argument into a directive.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if arg == "all" {
        return SetDirective::ShowAll;
    }

    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }

    if let Some(name) = arg.strip_suffix('?') {
        return SetDirective::Query(name.to_string());
    }

    if let Some(name) = arg.strip_suffix('!') {
        return SetDirective::Toggle(name.to_string());
    }

    // `nooption` only when the remainder is a known boolean option.
    if let Some(name) = arg.strip_prefix("no") {
        if !name.is_empty() && is_bool_option(name) {
            return SetDirective::Off(name.to_string());
        }
    }

    // Bare numeric option name = query its value (Vim behavior).
    if is_numeric_option(arg) {
        return SetDirective::Query(arg.to_string());
    }

    SetDirective::On(arg.to_string())
}

/// Format a boolean option for display.
#[must_use]
pub fn format_bool(name: &str, value: bool) -> String {
    if value {
        name.to_string()
    } else {
        format!("no{name}")
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Host-side settings consulted by the document and its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Cursor may sit after the last char of a line. Line-end navigation
    /// lands there when set, on the last char otherwise.
    pub past_end: bool,

    /// Context lines kept when the window scrolls to follow the cursor.
    pub scrolloff: usize,

    /// Mark ring capacity.
    pub mark_ring: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            past_end: true,
            scrolloff: 0,
            mark_ring: MARK_RING_DEFAULT,
        }
    }
}

impl Options {
    /// Apply one directive. Returns display text for queries and listings.
    ///
    /// # Errors
    ///
    /// Unknown option names, non-numeric assignments, and toggling a numeric
    /// option are rejected without changing anything.
    pub fn apply(&mut self, directive: &SetDirective) -> Result<Option<String>, OptionError> {
        match directive {
            SetDirective::On(name) => self.set_bool(name, |_| true).map(|()| None),
            SetDirective::Off(name) => self.set_bool(name, |_| false).map(|()| None),
            SetDirective::Toggle(name) => self.set_bool(name, |v| !v).map(|()| None),
            SetDirective::Query(name) => self.query(name).map(Some),
            SetDirective::Assign(name, value) => self.assign(name, value).map(|()| None),
            SetDirective::ShowChanged => Ok(Some(self.describe(true))),
            SetDirective::ShowAll => Ok(Some(self.describe(false))),
        }
    }

    /// Parse and apply a whole argument string, collecting display text.
    ///
    /// # Errors
    ///
    /// Stops at the first directive that fails to apply.
    pub fn apply_str(&mut self, args: &str) -> Result<Vec<String>, OptionError> {
        let mut shown = Vec::new();
        for directive in parse_set(args) {
            if let Some(text) = self.apply(&directive)? {
                shown.push(text);
            }
        }
        Ok(shown)
    }

    fn set_bool(&mut self, name: &str, f: impl FnOnce(bool) -> bool) -> Result<(), OptionError> {
        match name {
            "pastend" | "pe" => {
                self.past_end = f(self.past_end);
                Ok(())
            }
            _ if is_numeric_option(name) => Err(OptionError::NotBoolean(name.to_string())),
            _ => Err(OptionError::Unknown(name.to_string())),
        }
    }

    fn assign(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let invalid = || OptionError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match name {
            "scrolloff" | "so" => {
                self.scrolloff = value.parse().map_err(|_| invalid())?;
                Ok(())
            }
            "markring" | "mr" => {
                let n: usize = value.parse().map_err(|_| invalid())?;
                if n == 0 {
                    return Err(invalid());
                }
                self.mark_ring = n;
                Ok(())
            }
            _ if is_bool_option(name) => Err(invalid()),
            _ => Err(OptionError::Unknown(name.to_string())),
        }
    }

    fn query(&self, name: &str) -> Result<String, OptionError> {
        match name {
            "pastend" | "pe" => Ok(format_bool("pastend", self.past_end)),
            "scrolloff" | "so" => Ok(format!("scrolloff={}", self.scrolloff)),
            "markring" | "mr" => Ok(format!("markring={}", self.mark_ring)),
            _ => Err(OptionError::Unknown(name.to_string())),
        }
    }

    fn describe(&self, changed_only: bool) -> String {
        let defaults = Self::default();
        let mut parts = Vec::new();
        if !changed_only || self.past_end != defaults.past_end {
            parts.push(format_bool("pastend", self.past_end));
        }
        if !changed_only || self.scrolloff != defaults.scrolloff {
            parts.push(format!("scrolloff={}", self.scrolloff));
        }
        if !changed_only || self.mark_ring != defaults.mark_ring {
            parts.push(format!("markring={}", self.mark_ring));
        }
        parts.join("  ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_set_arg ─────────────────────────────────────────────────────

    #[test]
    fn parse_boolean_forms() {
        assert_eq!(parse_set_arg("pastend"), SetDirective::On("pastend".into()));
        assert_eq!(parse_set_arg("nope"), SetDirective::Off("pe".into()));
        assert_eq!(parse_set_arg("pe!"), SetDirective::Toggle("pe".into()));
        assert_eq!(parse_set_arg("pastend?"), SetDirective::Query("pastend".into()));
    }

    #[test]
    fn parse_numeric_forms() {
        assert_eq!(
            parse_set_arg("so=3"),
            SetDirective::Assign("so".into(), "3".into())
        );
        assert_eq!(parse_set_arg("scrolloff"), SetDirective::Query("scrolloff".into()));
    }

    #[test]
    fn parse_no_prefix_on_unknown_is_not_negation() {
        // "notanoption" is not "no" + a known bool.
        assert_eq!(
            parse_set_arg("notanoption"),
            SetDirective::On("notanoption".into())
        );
    }

    #[test]
    fn parse_set_multiple_and_empty() {
        assert_eq!(
            parse_set("nopastend so=2"),
            vec![
                SetDirective::Off("pastend".into()),
                SetDirective::Assign("so".into(), "2".into()),
            ]
        );
        assert_eq!(parse_set("   "), vec![SetDirective::ShowChanged]);
        assert_eq!(parse_set("all"), vec![SetDirective::ShowAll]);
    }

    // ── Options::apply ────────────────────────────────────────────────────

    #[test]
    fn defaults() {
        let opts = Options::default();
        assert!(opts.past_end);
        assert_eq!(opts.scrolloff, 0);
        assert_eq!(opts.mark_ring, MARK_RING_DEFAULT);
    }

    #[test]
    fn apply_str_updates_values() {
        let mut opts = Options::default();
        let shown = opts.apply_str("nopastend so=4 mr=10").unwrap();
        assert!(shown.is_empty());
        assert!(!opts.past_end);
        assert_eq!(opts.scrolloff, 4);
        assert_eq!(opts.mark_ring, 10);
    }

    #[test]
    fn toggle_flips() {
        let mut opts = Options::default();
        opts.apply_str("pe!").unwrap();
        assert!(!opts.past_end);
        opts.apply_str("pe!").unwrap();
        assert!(opts.past_end);
    }

    #[test]
    fn queries_and_listings() {
        let mut opts = Options::default();
        assert_eq!(opts.apply_str("so?").unwrap(), vec!["scrolloff=0".to_string()]);
        assert_eq!(opts.apply_str("").unwrap(), vec![String::new()]);

        opts.apply_str("nopastend").unwrap();
        assert_eq!(opts.apply_str("").unwrap(), vec!["nopastend".to_string()]);
        assert_eq!(
            opts.apply_str("all").unwrap(),
            vec!["nopastend  scrolloff=0  markring=100".to_string()]
        );
    }

    #[test]
    fn errors_leave_options_untouched() {
        let mut opts = Options::default();
        assert_eq!(
            opts.apply_str("number"),
            Err(OptionError::Unknown("number".into()))
        );
        assert_eq!(
            opts.apply_str("so=lots"),
            Err(OptionError::InvalidValue {
                name: "so".into(),
                value: "lots".into()
            })
        );
        assert_eq!(
            opts.apply_str("mr=0"),
            Err(OptionError::InvalidValue {
                name: "mr".into(),
                value: "0".into()
            })
        );
        assert_eq!(
            opts.apply_str("so!"),
            Err(OptionError::NotBoolean("so".into()))
        );
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            OptionError::Unknown("x".into()).to_string(),
            "Unknown option: x"
        );
        assert_eq!(
            OptionError::InvalidValue {
                name: "so".into(),
                value: "z".into()
            }
            .to_string(),
            "Invalid argument: so=z"
        );
    }
}
