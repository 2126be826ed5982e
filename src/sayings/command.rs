//! # Command Grammar
//!
//! One command per line. The whole line is trimmed first; blank lines carry no
//! command.
//!
//! ```text
//! ADD <TYPE>;<key>="<value>";<key>="<value>"...
//! REM <field>~"<substring>"
//! PRINT
//! ```
//!
//! The keyword is the first whitespace-delimited token and is case-sensitive.
//! `PRINT` takes no arguments: `PRINT 1` is not a command.
//!
//! Inside an ADD argspec, whitespace around keys, `=` and values is ignored and
//! one matched pair of `"` around a value is stripped. Segments without `=` are
//! dropped. When a key repeats, the last occurrence wins.

use crate::error::{Result, SayingsError};
use crate::model::{Fields, Record};
use std::fmt;

/// `(field name, substring)` selecting records for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: String,
    pub substring: String,
}

impl Predicate {
    pub fn new(field: impl Into<String>, substring: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            substring: substring.into(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.matches_field(&self.field, &self.substring)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~\"{}\"", self.field, self.substring)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { type_tag: String, fields: Fields },
    Remove(Predicate),
    Print,
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Add { .. } => "ADD",
            Command::Remove(_) => "REM",
            Command::Print => "PRINT",
        }
    }
}

/// Parses one input line. Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line == "PRINT" {
        return Ok(Some(Command::Print));
    }

    let (keyword, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));

    match keyword {
        "ADD" => parse_add(rest.trim()).map(Some),
        "REM" => parse_rem(rest.trim()).map(Some),
        _ => Err(SayingsError::UnrecognizedCommand(line.to_string())),
    }
}

fn parse_add(data: &str) -> Result<Command> {
    let (type_tag, argspec) = data
        .split_once(';')
        .ok_or_else(|| SayingsError::MalformedAdd(data.to_string()))?;

    Ok(Command::Add {
        type_tag: type_tag.trim().to_string(),
        fields: parse_args(argspec),
    })
}

fn parse_rem(data: &str) -> Result<Command> {
    let (field, substring) = data
        .split_once('~')
        .ok_or_else(|| SayingsError::InvalidCondition(data.to_string()))?;

    Ok(Command::Remove(Predicate::new(
        field.trim(),
        strip_quotes(substring.trim()),
    )))
}

/// Parses a `key="value";key2="value2"` argspec into a field mapping.
pub fn parse_args(argspec: &str) -> Fields {
    let mut fields = Fields::new();
    for segment in argspec.split(';') {
        if let Some((key, value)) = segment.split_once('=') {
            fields.insert(
                key.trim().to_string(),
                strip_quotes(value.trim()).to_string(),
            );
        }
    }
    fields
}

/// Removes one matched pair of surrounding double quotes.
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(type_tag: &str, pairs: &[(&str, &str)]) -> Command {
        Command::Add {
            type_tag: type_tag.to_string(),
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn blank_lines_carry_no_command() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \t ").unwrap(), None);
    }

    #[test]
    fn parses_add() {
        let cmd = parse_line(r#"ADD APHORISM;content="Knowledge is power";author="Francis Bacon""#)
            .unwrap()
            .unwrap();
        assert_eq!(
            cmd,
            add(
                "APHORISM",
                &[("content", "Knowledge is power"), ("author", "Francis Bacon")]
            )
        );
    }

    #[test]
    fn add_without_semicolon_is_malformed() {
        let err = parse_line("ADD APHORISM content=\"x\"").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error in ADD command: missing semicolon in 'APHORISM content=\"x\"'"
        );

        let err = parse_line("ADD").unwrap_err();
        assert!(matches!(err, SayingsError::MalformedAdd(data) if data.is_empty()));
    }

    #[test]
    fn add_type_is_trimmed() {
        let cmd = parse_line("  ADD   PROVERB ;content=\"a\";country=\"b\"  ")
            .unwrap()
            .unwrap();
        assert_eq!(cmd, add("PROVERB", &[("content", "a"), ("country", "b")]));
    }

    #[test]
    fn parses_args_with_surrounding_whitespace() {
        let fields = parse_args(r#"  content  =  "Text with spaces"  ;  author  =  "Someone"  "#);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["content"], "Text with spaces");
        assert_eq!(fields["author"], "Someone");
    }

    #[test]
    fn drops_segments_without_equals() {
        assert!(parse_args("content:test").is_empty());
        assert!(parse_args("").is_empty());

        let fields = parse_args(r#"junk;content="x""#);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["content"], "x");
    }

    #[test]
    fn last_duplicate_key_wins() {
        let fields = parse_args(r#"content="A";content="B""#);
        assert_eq!(fields["content"], "B");
    }

    #[test]
    fn value_keeps_inner_equals_and_unbalanced_quotes() {
        let fields = parse_args(r#"content="a=b";author="unterminated"#);
        assert_eq!(fields["content"], "a=b");
        assert_eq!(fields["author"], "\"unterminated");
    }

    #[test]
    fn strips_only_one_pair_of_quotes() {
        let fields = parse_args(r#"content=""quoted"""#);
        assert_eq!(fields["content"], "\"quoted\"");
        assert_eq!(parse_args("content=bare")["content"], "bare");
    }

    #[test]
    fn parses_rem() {
        let cmd = parse_line(r#"REM content~"power""#).unwrap().unwrap();
        assert_eq!(cmd, Command::Remove(Predicate::new("content", "power")));

        let cmd = parse_line(r#"REM  country ~  "Rus"  "#).unwrap().unwrap();
        assert_eq!(cmd, Command::Remove(Predicate::new("country", "Rus")));
    }

    #[test]
    fn rem_without_tilde_is_invalid() {
        let err = parse_line(r#"REM content="test""#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error in REM command: missing '~' character in 'content=\"test\"'"
        );
    }

    #[test]
    fn parses_print() {
        assert_eq!(parse_line("  PRINT ").unwrap(), Some(Command::Print));
    }

    #[test]
    fn rejects_unknown_and_malformed_keywords() {
        for line in ["INVALID command", "PRINT all", "print", "ADDX APHORISM;a=b", "REMOVE a~b"] {
            let err = parse_line(line).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid command in file: {line}"));
        }
    }

    #[test]
    fn predicate_display_round_trips_through_parser() {
        let predicate = Predicate::new("author", "Bacon");
        let parsed = parse_line(&format!("REM {predicate}")).unwrap().unwrap();
        assert_eq!(parsed, Command::Remove(predicate));
    }
}
