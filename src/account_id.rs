//! AWS account id segment.

use std::fmt;
use std::str::FromStr;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::constants::ACCOUNT_ID_LENGTH;
use crate::error::AccountIdError;

/// A validated 12-digit AWS account id.
///
/// This is a character-class check, not a numeric one: leading zeros are
/// kept and the id is never converted to an integer. Any Unicode decimal
/// digit (`Nd`) counts, so Arabic-Indic digits are accepted while signs,
/// whitespace and digit separators are not.
///
/// # Examples
///
/// ```
/// use sqs_url::AccountId;
///
/// let id = AccountId::parse("000123456789").unwrap();
/// assert_eq!(id.as_str(), "000123456789");
///
/// assert!(AccountId::parse("12345678901").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(pub(crate) String);

impl AccountId {
    /// Parses an account id from a path segment.
    ///
    /// # Errors
    ///
    /// Returns `AccountIdError` if:
    /// - The segment is not exactly 12 characters long
    /// - The segment contains anything other than decimal digits
    pub fn parse(input: &str) -> Result<Self, AccountIdError> {
        Self::validate(input)?;
        Ok(Self(input.to_string()))
    }

    /// Returns true if the segment is a well-formed account id.
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        Self::validate(input).is_ok()
    }

    /// Returns the account id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn validate(input: &str) -> Result<(), AccountIdError> {
        let len = input.chars().count();
        if len != ACCOUNT_ID_LENGTH {
            return Err(AccountIdError::WrongLength {
                expected: ACCOUNT_ID_LENGTH,
                actual: len,
            });
        }

        let not_digit = |&(_, c): &(usize, char)| {
            get_general_category(c) != GeneralCategory::DecimalNumber
        };
        if let Some((position, c)) = input.chars().enumerate().find(not_digit) {
            return Err(AccountIdError::InvalidChar { char: c, position });
        }

        Ok(())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AccountId {
    type Error = AccountIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
