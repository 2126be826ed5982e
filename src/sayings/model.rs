//! # Record Model
//!
//! A [`Record`] is a closed set of two variants, [`Aphorism`] and [`Proverb`].
//! Both carry `content`; each adds one variant-specific field. Records are
//! immutable once built, and [`Record::create`] either builds a complete record
//! or returns an error, so partial records never exist.
//!
//! The type tag (`"APHORISM"`, `"PROVERB"`) resolves to a [`RecordType`]
//! through its `FromStr` impl. Each variant then takes its fields in declared
//! order, `content` first, so the first missing one is the one reported.

use crate::error::{Result, SayingsError};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Parsed `key="value"` arguments of an ADD command.
pub type Fields = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    Aphorism,
    Proverb,
}

impl RecordType {
    pub fn tag(&self) -> &'static str {
        match self {
            RecordType::Aphorism => "APHORISM",
            RecordType::Proverb => "PROVERB",
        }
    }

    pub fn all() -> &'static [RecordType] {
        &[RecordType::Aphorism, RecordType::Proverb]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RecordType {
    type Err = SayingsError;

    fn from_str(s: &str) -> Result<Self> {
        RecordType::all()
            .iter()
            .copied()
            .find(|t| t.tag() == s)
            .ok_or_else(|| SayingsError::UnknownRecordType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aphorism {
    pub content: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proverb {
    pub content: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Record {
    Aphorism(Aphorism),
    Proverb(Proverb),
}

impl Record {
    /// Builds the variant named by `type_tag` from `fields`.
    ///
    /// Unrecognized keys in `fields` are ignored.
    pub fn create(type_tag: &str, fields: &Fields) -> Result<Self> {
        let record_type: RecordType = type_tag.parse()?;
        let require = |name: &str| {
            fields
                .get(name)
                .cloned()
                .ok_or_else(|| SayingsError::MissingField {
                    field: name.to_string(),
                    record_type: type_tag.to_string(),
                })
        };

        let record = match record_type {
            RecordType::Aphorism => Record::Aphorism(Aphorism {
                content: require("content")?,
                author: require("author")?,
            }),
            RecordType::Proverb => Record::Proverb(Proverb {
                content: require("content")?,
                country: require("country")?,
            }),
        };
        Ok(record)
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Record::Aphorism(_) => RecordType::Aphorism,
            Record::Proverb(_) => RecordType::Proverb,
        }
    }

    pub fn type_tag(&self) -> &'static str {
        self.record_type().tag()
    }

    pub fn content(&self) -> &str {
        match self {
            Record::Aphorism(a) => &a.content,
            Record::Proverb(p) => &p.content,
        }
    }

    /// Looks up a field by its literal name. Names a variant does not carry
    /// yield `None`.
    pub fn field(&self, name: &str) -> Option<&str> {
        match (self, name) {
            (_, "content") => Some(self.content()),
            (Record::Aphorism(a), "author") => Some(&a.author),
            (Record::Proverb(p), "country") => Some(&p.country),
            _ => None,
        }
    }

    /// Case-sensitive substring test on the named field. Unknown names never match.
    pub fn matches_field(&self, name: &str, substring: &str) -> bool {
        self.field(name)
            .is_some_and(|value| value.contains(substring))
    }

    /// Canonical single-line form, e.g. `[PROVERB] content="..." country="..."`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key, value) = match self {
            Record::Aphorism(a) => ("author", &a.author),
            Record::Proverb(p) => ("country", &p.country),
        };
        write!(
            f,
            "[{}] content=\"{}\" {}=\"{}\"",
            self.type_tag(),
            self.content(),
            key,
            value
        )
    }
}
