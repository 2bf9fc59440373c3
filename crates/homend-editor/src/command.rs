//! Commands — identities and the key-script parser.
//!
//! Every action the host can run has a [`CommandId`]. The navigator compares
//! the id of the command being run with the id of the previously executed
//! command to tell a repeated press from a fresh one, so ids are compared by
//! value and are cheap to copy.
//!
//! Key scripts are whitespace-separated tokens, each turned into a
//! [`Command`]:
//!
//! | Token          | Command                                   |
//! |----------------|-------------------------------------------|
//! | `home`, `3home`| navigate-home, optional decile argument   |
//! | `end`, `7end`  | navigate-end, optional decile argument    |
//! | `left`, `4left`| move left (count, default 1)              |
//! | `right`        | move right                                |
//! | `up`, `down`   | move up / down                            |
//! | `scroll-up`    | scroll the window up (count, default 1)   |
//! | `scroll-down`  | scroll the window down                    |
//! | `pop`          | jump back to the previous mark            |
//! | `goto:L:C`     | put the cursor at line L, column C (1-indexed) |
//!
//! A `0` argument on `home`/`end` is a plain press, not a percentage jump.

use std::fmt;

use thiserror::Error;

use crate::position::Position;

// ---------------------------------------------------------------------------
// CommandId
// ---------------------------------------------------------------------------

/// Identity of a bindable command.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(&'static str);

impl CommandId {
    pub const NAVIGATE_HOME: Self = Self("navigate-home");
    pub const NAVIGATE_END: Self = Self("navigate-end");
    pub const MOVE_LEFT: Self = Self("move-left");
    pub const MOVE_RIGHT: Self = Self("move-right");
    pub const MOVE_UP: Self = Self("move-up");
    pub const MOVE_DOWN: Self = Self("move-down");
    pub const SCROLL_UP: Self = Self("scroll-up");
    pub const SCROLL_DOWN: Self = Self("scroll-down");
    pub const POP_MARK: Self = Self("pop-mark");
    pub const GOTO: Self = Self("goto");

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cmd({})", self.0)
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// NavKey
// ---------------------------------------------------------------------------

/// One of the two cycling navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Home,
    End,
}

impl NavKey {
    /// The command bound to this key.
    #[must_use]
    pub const fn command_id(self) -> CommandId {
        match self {
            Self::Home => CommandId::NAVIGATE_HOME,
            Self::End => CommandId::NAVIGATE_END,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::End => "end",
        }
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed script command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `home` / `end`, with an optional percentage decile.
    Navigate { key: NavKey, arg: Option<u8> },

    /// Anything the host runs on its own.
    Motion(Motion),
}

impl Command {
    /// The identity used for repeat detection.
    #[must_use]
    pub const fn id(self) -> CommandId {
        match self {
            Self::Navigate { key, .. } => key.command_id(),
            Self::Motion(motion) => motion.id(),
        }
    }
}

/// A host command that moves the cursor or the window. Every motion ends a
/// navigation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left(usize),
    Right(usize),
    Up(usize),
    Down(usize),

    ScrollUp(usize),
    ScrollDown(usize),

    /// Jump back to the previous mark.
    PopMark,

    /// Put the cursor at an exact (0-indexed) position.
    Goto(Position),
}

impl Motion {
    #[must_use]
    pub const fn id(self) -> CommandId {
        match self {
            Self::Left(_) => CommandId::MOVE_LEFT,
            Self::Right(_) => CommandId::MOVE_RIGHT,
            Self::Up(_) => CommandId::MOVE_UP,
            Self::Down(_) => CommandId::MOVE_DOWN,
            Self::ScrollUp(_) => CommandId::SCROLL_UP,
            Self::ScrollDown(_) => CommandId::SCROLL_DOWN,
            Self::PopMark => CommandId::POP_MARK,
            Self::Goto(_) => CommandId::GOTO,
        }
    }
}

/// A token that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Count out of range: {0}")]
    InvalidCount(String),

    #[error("Command takes no count: {0}")]
    UnexpectedCount(String),

    #[error("Invalid goto (expected goto:LINE:COL, 1-indexed): {0}")]
    InvalidGoto(String),
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a whitespace-separated key script.
///
/// # Errors
///
/// Fails on the first token that isn't a command.
pub fn parse_script(script: &str) -> Result<Vec<Command>, ParseError> {
    script.split_whitespace().map(parse_token).collect()
}

/// Parse one script token.
///
/// # Errors
///
/// See [`ParseError`].
pub fn parse_token(token: &str) -> Result<Command, ParseError> {
    if let Some(rest) = token.strip_prefix("goto:") {
        return parse_goto(token, rest);
    }

    let (count, name) = split_count(token)?;
    let repeat = count.filter(|&n| n > 0).unwrap_or(1);

    match name {
        "home" | "end" => {
            let key = if name == "home" { NavKey::Home } else { NavKey::End };
            let arg = match count {
                None | Some(0) => None,
                Some(n) => Some(
                    u8::try_from(n).map_err(|_| ParseError::InvalidCount(token.to_string()))?,
                ),
            };
            Ok(Command::Navigate { key, arg })
        }
        "left" => Ok(Command::Motion(Motion::Left(repeat))),
        "right" => Ok(Command::Motion(Motion::Right(repeat))),
        "up" => Ok(Command::Motion(Motion::Up(repeat))),
        "down" => Ok(Command::Motion(Motion::Down(repeat))),
        "scroll-up" => Ok(Command::Motion(Motion::ScrollUp(repeat))),
        "scroll-down" => Ok(Command::Motion(Motion::ScrollDown(repeat))),
        "pop" if count.is_some() => Err(ParseError::UnexpectedCount(token.to_string())),
        "pop" => Ok(Command::Motion(Motion::PopMark)),
        _ => Err(ParseError::Unknown(token.to_string())),
    }
}

/// Split a leading decimal count from a token: `"12down"` → `(Some(12), "down")`.
fn split_count(token: &str) -> Result<(Option<usize>, &str), ParseError> {
    let end = token
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(token.len());
    if end == 0 {
        return Ok((None, token));
    }
    let n = token[..end]
        .parse()
        .map_err(|_| ParseError::InvalidCount(token.to_string()))?;
    Ok((Some(n), &token[end..]))
}

/// Parse the `LINE:COL` part of a `goto:` token (1-indexed input).
fn parse_goto(token: &str, rest: &str) -> Result<Command, ParseError> {
    let invalid = || ParseError::InvalidGoto(token.to_string());
    let (line, col) = rest.split_once(':').ok_or_else(invalid)?;
    let line: usize = line.parse().map_err(|_| invalid())?;
    let col: usize = col.parse().map_err(|_| invalid())?;
    if line == 0 || col == 0 {
        return Err(invalid());
    }
    Ok(Command::Motion(Motion::Goto(Position::new(line - 1, col - 1))))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Identity -----------------------------------------------------------

    #[test]
    fn nav_keys_map_to_distinct_ids() {
        assert_eq!(NavKey::Home.command_id(), CommandId::NAVIGATE_HOME);
        assert_eq!(NavKey::End.command_id(), CommandId::NAVIGATE_END);
        assert_ne!(CommandId::NAVIGATE_HOME, CommandId::NAVIGATE_END);
    }

    #[test]
    fn argument_does_not_change_identity() {
        let plain = Command::Navigate { key: NavKey::Home, arg: None };
        let with_arg = Command::Navigate { key: NavKey::Home, arg: Some(3) };
        assert_eq!(plain.id(), with_arg.id());
    }

    #[test]
    fn motions_have_their_own_ids() {
        assert_eq!(Motion::Left(3).id(), CommandId::MOVE_LEFT);
        assert_eq!(Command::Motion(Motion::PopMark).id(), CommandId::POP_MARK);
        assert_eq!(CommandId::POP_MARK.name(), "pop-mark");
        assert_eq!(format!("{:?}", CommandId::GOTO), "Cmd(goto)");
        assert_eq!(CommandId::SCROLL_UP.to_string(), "scroll-up");
    }

    // -- Navigation tokens --------------------------------------------------

    #[test]
    fn parse_plain_navigation() {
        assert_eq!(
            parse_token("home"),
            Ok(Command::Navigate { key: NavKey::Home, arg: None })
        );
        assert_eq!(
            parse_token("end"),
            Ok(Command::Navigate { key: NavKey::End, arg: None })
        );
    }

    #[test]
    fn parse_navigation_argument() {
        assert_eq!(
            parse_token("3home"),
            Ok(Command::Navigate { key: NavKey::Home, arg: Some(3) })
        );
        assert_eq!(
            parse_token("10end"),
            Ok(Command::Navigate { key: NavKey::End, arg: Some(10) })
        );
    }

    #[test]
    fn zero_argument_is_plain_press() {
        assert_eq!(
            parse_token("0end"),
            Ok(Command::Navigate { key: NavKey::End, arg: None })
        );
    }

    #[test]
    fn oversized_argument_is_rejected() {
        assert_eq!(
            parse_token("300home"),
            Err(ParseError::InvalidCount("300home".into()))
        );
    }

    // -- Motion tokens ------------------------------------------------------

    #[test]
    fn parse_motions_with_counts() {
        assert_eq!(parse_token("left"), Ok(Command::Motion(Motion::Left(1))));
        assert_eq!(parse_token("4right"), Ok(Command::Motion(Motion::Right(4))));
        assert_eq!(parse_token("12down"), Ok(Command::Motion(Motion::Down(12))));
        assert_eq!(parse_token("0up"), Ok(Command::Motion(Motion::Up(1))));
        assert_eq!(parse_token("scroll-down"), Ok(Command::Motion(Motion::ScrollDown(1))));
        assert_eq!(parse_token("5scroll-up"), Ok(Command::Motion(Motion::ScrollUp(5))));
    }

    #[test]
    fn parse_pop() {
        assert_eq!(parse_token("pop"), Ok(Command::Motion(Motion::PopMark)));
        assert_eq!(
            parse_token("2pop"),
            Err(ParseError::UnexpectedCount("2pop".into()))
        );
    }

    #[test]
    fn parse_goto_is_one_indexed() {
        assert_eq!(parse_token("goto:121:1"), Ok(Command::Motion(Motion::Goto(Position::new(120, 0)))));
        assert!(matches!(parse_token("goto:0:1"), Err(ParseError::InvalidGoto(_))));
        assert!(matches!(parse_token("goto:5"), Err(ParseError::InvalidGoto(_))));
        assert!(matches!(parse_token("goto:a:b"), Err(ParseError::InvalidGoto(_))));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(parse_token("jump"), Err(ParseError::Unknown("jump".into())));
        assert_eq!(parse_token("7"), Err(ParseError::Unknown("7".into())));
    }

    // -- Scripts ------------------------------------------------------------

    #[test]
    fn parse_script_splits_on_whitespace() {
        let cmds = parse_script("end  end\n2left\tpop").unwrap();
        assert_eq!(
            cmds,
            vec![
                Command::Navigate { key: NavKey::End, arg: None },
                Command::Navigate { key: NavKey::End, arg: None },
                Command::Motion(Motion::Left(2)),
                Command::Motion(Motion::PopMark),
            ]
        );
    }

    #[test]
    fn parse_script_reports_first_bad_token() {
        assert_eq!(
            parse_script("home bogus end"),
            Err(ParseError::Unknown("bogus".into()))
        );
        assert_eq!(parse_script(""), Ok(Vec::new()));
    }
}
