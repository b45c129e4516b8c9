//! Settings data model: display language, owner name, owner-roller keys.

use core::fmt;

use heapless::Vec;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Closed set of supported UI languages.
///
/// The discriminant is the roller index and the persisted value, so the
/// order must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Language {
    #[default]
    English = 0,
    Chinese = 1,
    Japanese = 2,
    Korean = 3,
    French = 4,
    German = 5,
    Spanish = 6,
    Russian = 7,
}

impl Language {
    /// Number of entries on the language roller.
    pub const COUNT: usize = 8;

    /// Roller order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::English,
        Self::Chinese,
        Self::Japanese,
        Self::Korean,
        Self::French,
        Self::German,
        Self::Spanish,
        Self::Russian,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wraps out-of-range indices onto the roller.
    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx % Self::COUNT]
    }

    /// Name of the language in that language, as shown on the roller.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Chinese => "中文",
            Self::Japanese => "日本語",
            Self::Korean => "한국어",
            Self::French => "Français",
            Self::German => "Deutsch",
            Self::Spanish => "Español",
            Self::Russian => "Русский",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ---------------------------------------------------------------------------
// Owner name
// ---------------------------------------------------------------------------

/// Maximum owner name length in characters.
pub const OWNER_NAME_CAPACITY: usize = 16;

/// Bounded owner name.  Length is counted in characters, never bytes,
/// and can not exceed [`OWNER_NAME_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerName {
    chars: Vec<char, OWNER_NAME_CAPACITY>,
}

impl OwnerName {
    pub const fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Build from a string, keeping at most the first 16 characters.
    /// Returns the name and whether anything was cut off.
    pub fn from_str_truncating(s: &str) -> (Self, bool) {
        let mut name = Self::new();
        let mut truncated = false;
        for c in s.chars() {
            if !name.push(c) {
                truncated = true;
                break;
            }
        }
        (name, truncated)
    }

    /// Append one character.  Returns `false` (and leaves the name
    /// unchanged) when the name is already full.
    pub fn push(&mut self, c: char) -> bool {
        self.chars.push(c).is_ok()
    }

    /// Remove the last character.  No-op on an empty name.
    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.chars.is_full()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl fmt::Display for OwnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for c in self.chars() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Owner roller keys
// ---------------------------------------------------------------------------

/// One option on the owner-name character roller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKey {
    /// Append this character.
    Char(char),
    /// `"<-"`: delete the last character.
    Backspace,
    /// `"Save"`: persist the name and leave the screen.
    Save,
}

const UPPER: usize = 26;
const LOWER: usize = 26;
const DIGITS: usize = 10;
const PUNCTUATION: [char; 2] = [' ', '-'];

impl OwnerKey {
    /// Number of options on the owner roller.
    pub const COUNT: usize = UPPER + LOWER + DIGITS + PUNCTUATION.len() + 2;

    /// Roller order: `A`–`Z`, `a`–`z`, `0`–`9`, space, `-`, `"<-"`, `"Save"`.
    /// Out-of-range indices wrap.
    pub fn from_index(idx: usize) -> Self {
        let idx = idx % Self::COUNT;
        match idx {
            i if i < UPPER => Self::Char(char::from(b'A' + i as u8)),
            i if i < UPPER + LOWER => Self::Char(char::from(b'a' + (i - UPPER) as u8)),
            i if i < UPPER + LOWER + DIGITS => {
                Self::Char(char::from(b'0' + (i - UPPER - LOWER) as u8))
            }
            i if i < UPPER + LOWER + DIGITS + PUNCTUATION.len() => {
                Self::Char(PUNCTUATION[i - UPPER - LOWER - DIGITS])
            }
            i if i == Self::COUNT - 2 => Self::Backspace,
            _ => Self::Save,
        }
    }
}

impl fmt::Display for OwnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(' ') => write!(f, "␣"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Backspace => write!(f, "<-"),
            Self::Save => write!(f, "Save"),
        }
    }
}
