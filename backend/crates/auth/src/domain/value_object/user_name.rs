//! User Name Value Object
//!
//! 3 to 32 characters of `A-Z a-z 0-9 _ . -`. Case is preserved for display;
//! uniqueness and lookup use the lowercase canonical form.

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

pub const USER_NAME_MIN_LENGTH: usize = 3;
pub const USER_NAME_MAX_LENGTH: usize = 32;

const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-'];

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("User name cannot be empty")]
    Empty,

    #[error("User name is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    #[error("User name is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error("Invalid character '{char}' at position {position}. Only letters, digits, _, . and - are allowed")]
    InvalidCharacter { char: char, position: usize },
}

/// Validated, normalized user name
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserName {
    /// Trimmed, NFKC-normalized input (preserves case)
    original: String,
    /// Lowercase form for uniqueness
    canonical: String,
}

impl UserName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let original = input.as_ref().nfkc().collect::<String>().trim().to_string();
        Self::validate(&original)?;
        let canonical = original.to_ascii_lowercase();
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Rebuild from a stored value (already validated on insert)
    pub fn from_db(original: impl Into<String>) -> Self {
        let original = original.into();
        let canonical = original.to_ascii_lowercase();
        Self {
            original,
            canonical,
        }
    }

    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    fn validate(name: &str) -> Result<(), UserNameError> {
        if name.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = name.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if let Some((position, char)) = name
            .chars()
            .enumerate()
            .find(|(_, c)| !(c.is_ascii_alphanumeric() || ALLOWED_SPECIAL_CHARS.contains(c)))
        {
            return Err(UserNameError::InvalidCharacter { char, position });
        }

        Ok(())
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.original).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_preserve_case() {
        let name = UserName::new("  Alice_W  ").unwrap();
        assert_eq!(name.original(), "Alice_W");
        assert_eq!(name.canonical(), "alice_w");
        assert_eq!(name.to_string(), "Alice_W");
    }

    #[test]
    fn test_fullwidth_input_is_normalized() {
        // NFKC folds fullwidth letters into ASCII
        let name = UserName::new("ｂｏｂ").unwrap();
        assert_eq!(name.canonical(), "bob");
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
        assert_eq!(
            UserName::new("ab"),
            Err(UserNameError::TooShort { length: 2, min: 3 })
        );
        assert!(UserName::new("abc").is_ok());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
        assert_eq!(
            UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)),
            Err(UserNameError::TooLong {
                length: 33,
                max: 32
            })
        );
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            UserName::new("bad name"),
            Err(UserNameError::InvalidCharacter {
                char: ' ',
                position: 3
            })
        );
        assert!(matches!(
            UserName::new("josé"),
            Err(UserNameError::InvalidCharacter { char: 'é', .. })
        ));
        assert!(UserName::new("trip.planner-01").is_ok());
    }
}
