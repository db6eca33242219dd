use std::{fmt, str::FromStr};

use crate::FolioError;

/// Key sent to the reader to advance a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyName {
    #[default]
    Right,
    Left,
    Up,
    Down,
    PageDown,
    PageUp,
    Space,
    Enter,
    Tab,
    Home,
    End,
    /// Any single printable character, e.g. `n` or `j`.
    Char(char),
}

impl KeyName {
    /// Names accepted by [`FromStr`], aliases included.
    pub const NAMED: &'static [(&'static str, KeyName)] = &[
        ("right", KeyName::Right),
        ("left", KeyName::Left),
        ("up", KeyName::Up),
        ("down", KeyName::Down),
        ("pagedown", KeyName::PageDown),
        ("pgdn", KeyName::PageDown),
        ("pageup", KeyName::PageUp),
        ("pgup", KeyName::PageUp),
        ("space", KeyName::Space),
        ("enter", KeyName::Enter),
        ("return", KeyName::Enter),
        ("tab", KeyName::Tab),
        ("home", KeyName::Home),
        ("end", KeyName::End),
    ];
}

impl FromStr for KeyName {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(KeyName::Char(c));
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let normalized = normalized
            .strip_prefix("arrow")
            .or_else(|| normalized.strip_suffix("arrow"))
            .unwrap_or(&normalized);

        KeyName::NAMED
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, key)| *key)
            .ok_or_else(|| FolioError::invalid_config(format!("unknown key name '{trimmed}'")))
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyName::Right => "right",
            KeyName::Left => "left",
            KeyName::Up => "up",
            KeyName::Down => "down",
            KeyName::PageDown => "pagedown",
            KeyName::PageUp => "pageup",
            KeyName::Space => "space",
            KeyName::Enter => "enter",
            KeyName::Tab => "tab",
            KeyName::Home => "home",
            KeyName::End => "end",
            KeyName::Char(c) => return write!(f, "{c}"),
        };
        f.write_str(name)
    }
}
