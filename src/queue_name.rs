//! Queue name segment.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::constants::MAX_QUEUE_NAME_LENGTH;
use crate::error::QueueNameError;

/// A validated SQS queue name.
///
/// Queue names are 1 to 80 characters of letters, digits, hyphens and
/// underscores. Letters are the Unicode letter categories (`Lu`, `Ll`, `Lt`,
/// `Lm`, `Lo`), so `naïve` and `очередь` are accepted. Digits are decimal
/// digits (`Nd`) plus the superscript, subscript and circled forms that
/// carry a digit value, such as `²` and `①`. Other numerals (`½`, `Ⅻ`),
/// combining marks and punctuation such as `.` and `/` are rejected.
///
/// # Examples
///
/// ```
/// use sqs_url::QueueName;
///
/// let name = QueueName::parse("orders_dead-letter").unwrap();
/// assert_eq!(name.as_str(), "orders_dead-letter");
///
/// assert!(QueueName::parse("orders.fifo").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueueName(pub(crate) String);

impl QueueName {
    /// Parses a queue name from a path segment.
    ///
    /// # Errors
    ///
    /// Returns `QueueNameError` if:
    /// - The name is empty
    /// - The name exceeds 80 characters
    /// - The name contains a character other than a letter, digit, `-` or `_`
    pub fn parse(input: &str) -> Result<Self, QueueNameError> {
        Self::validate(input)?;
        Ok(Self(input.to_string()))
    }

    /// Returns true if the segment is a well-formed queue name.
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        Self::validate(input).is_ok()
    }

    /// Returns the queue name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the character may appear in a queue name.
    #[must_use]
    pub fn is_valid_char(c: char) -> bool {
        c == '_' || c == '-' || is_letter(c) || is_digit(c)
    }

    pub(crate) fn validate(input: &str) -> Result<(), QueueNameError> {
        if input.is_empty() {
            return Err(QueueNameError::Empty);
        }

        let len = input.chars().count();
        if len > MAX_QUEUE_NAME_LENGTH {
            return Err(QueueNameError::TooLong {
                max: MAX_QUEUE_NAME_LENGTH,
                actual: len,
            });
        }

        for (i, c) in input.chars().enumerate() {
            if !Self::is_valid_char(c) {
                return Err(QueueNameError::InvalidChar { char: c, position: i });
            }
        }

        Ok(())
    }
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
        || DIGIT_VALUED_SYMBOLS.iter().any(|range| range.contains(&c))
}

/// Characters outside `Nd` whose numeric type is `Digit`.
const DIGIT_VALUED_SYMBOLS: &[RangeInclusive<char>] = &[
    '\u{00B2}'..='\u{00B3}',
    '\u{00B9}'..='\u{00B9}',
    '\u{1369}'..='\u{1371}',
    '\u{19DA}'..='\u{19DA}',
    '\u{2070}'..='\u{2070}',
    '\u{2074}'..='\u{2079}',
    '\u{2080}'..='\u{2089}',
    '\u{2460}'..='\u{2468}',
    '\u{2474}'..='\u{247C}',
    '\u{2488}'..='\u{2490}',
    '\u{24EA}'..='\u{24EA}',
    '\u{24F5}'..='\u{24FD}',
    '\u{24FF}'..='\u{24FF}',
    '\u{2776}'..='\u{277E}',
    '\u{2780}'..='\u{2788}',
    '\u{278A}'..='\u{2792}',
    '\u{10A40}'..='\u{10A43}',
    '\u{10E60}'..='\u{10E68}',
    '\u{11052}'..='\u{1105A}',
    '\u{1F100}'..='\u{1F10A}',
];

impl fmt::Display for QueueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QueueName {
    type Err = QueueNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for QueueName {
    type Error = QueueNameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for QueueName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueueName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QueueName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
