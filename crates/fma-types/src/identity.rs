use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Longest identifier accepted anywhere in FMA.
pub const MAX_KEY_LEN: usize = 128;

/// Validate an identifier: non-empty, bounded, and free of whitespace,
/// control characters and `/` (keys travel as URL path segments).
fn validate(kind: &'static str, value: &str) -> Result<(), TypeError> {
    if value.is_empty() {
        return Err(TypeError::Empty { kind });
    }
    if value.len() > MAX_KEY_LEN {
        return Err(TypeError::TooLong {
            kind,
            len: value.len(),
            max: MAX_KEY_LEN,
        });
    }
    if let Some(ch) = value
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || *c == '/')
    {
        return Err(TypeError::ForbiddenChar { kind, ch });
    }
    Ok(())
}

macro_rules! string_key {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Construct after validation.
            pub fn new(value: impl Into<String>) -> Result<Self, TypeError> {
                let value = value.into();
                validate($kind, &value)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(key: $name) -> String {
                key.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_key!(
    /// Stable subject identifier issued by the external identity provider.
    ///
    /// FMA never interprets the value; it is only compared and stored.
    UserId,
    "user id"
);

string_key!(
    /// Identifies a completable learning unit: a story type such as
    /// `"pizza"` or a quiz lesson number such as `"2"`.
    UnitKey,
    "unit key"
);

string_key!(
    /// Identifies a badge, e.g. `"pizza"` or `"phase_2_mastery"`.
    BadgeKey,
    "badge key"
);

impl UnitKey {
    /// Key of quiz lesson `n`.
    pub fn for_lesson(n: u32) -> Self {
        Self(n.to_string())
    }

    /// The lesson number when this key names a quiz lesson.
    pub fn lesson_number(&self) -> Option<u32> {
        if self.0.bytes().all(|b| b.is_ascii_digit()) {
            self.0.parse().ok()
        } else {
            None
        }
    }

    /// The spelling the catalog uses for this unit: lesson numbers without
    /// leading zeros, story keys in ASCII lower case. `"03"` and `"3"` name
    /// the same lesson, `"Coffee"` and `"coffee"` the same story.
    pub fn canonical(&self) -> UnitKey {
        match self.lesson_number() {
            Some(n) => Self::for_lesson(n),
            None => Self(self.0.to_ascii_lowercase()),
        }
    }

    pub fn is_canonical(&self) -> bool {
        self.canonical() == *self
    }
}

impl BadgeKey {
    /// Mastery badge of quiz lesson `n`: `phase_{n}_mastery`.
    pub fn for_lesson(n: u32) -> Self {
        Self(format!("phase_{n}_mastery"))
    }

    /// Badge of a story unit: the unit key in ASCII lower case.
    pub fn for_story(unit: &UnitKey) -> Self {
        // ASCII lowering keeps length and character classes, so the key
        // stays valid.
        Self(unit.as_str().to_ascii_lowercase())
    }
}
