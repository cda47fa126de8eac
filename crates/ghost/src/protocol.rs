// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire protocol definitions.
//!
//! `GET` answers with a JSON object of monitor states, `POST` carries a
//! URL-encoded form with the [`FIELD_ACTION`] and [`FIELD_NAME`] fields.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Form field carrying the [`Action`].
pub const FIELD_ACTION: &str = "action";

/// Form field carrying the target monitor name.
pub const FIELD_NAME: &str = "name";

/// Monitor name to enabled state, as listed by the handler.
pub type MonitorStates = BTreeMap<String, bool>;

/// Toggle instruction sent in a `POST` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Enable,
    Disable,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Enable => "enable",
            Action::Disable => "disable",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown action value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid action '{0}' (expected 'enable' or 'disable')")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enable" => Ok(Action::Enable),
            "disable" => Ok(Action::Disable),
            other => Err(ParseActionError(other.to_string())),
        }
    }
}

/// Error returned when a request body is not a valid URL-encoded form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFormError {
    #[error("invalid semicolon separator in form body")]
    Semicolon,
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),
}

/// Body of a toggle request.
///
/// Missing fields decode as empty strings so that an absent `name` is
/// reported as an unknown monitor and an absent `action` as invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToggleForm {
    pub action: String,
    pub name: String,
}

impl ToggleForm {
    pub fn new(action: Action, name: impl Into<String>) -> Self {
        Self {
            action: action.as_str().to_string(),
            name: name.into(),
        }
    }

    /// Decode an `application/x-www-form-urlencoded` body.
    ///
    /// Pairs are split on `&` only; a `;` or a malformed `%` escape rejects
    /// the whole body. When a field repeats, its first value is kept.
    pub fn decode(body: &[u8]) -> Result<Self, ParseFormError> {
        for pair in body.split(|b| *b == b'&') {
            check_pair(pair)?;
        }

        let mut action = None;
        let mut name = None;
        for (key, value) in form_urlencoded::parse(body) {
            match &*key {
                FIELD_ACTION if action.is_none() => action = Some(value.into_owned()),
                FIELD_NAME if name.is_none() => name = Some(value.into_owned()),
                _ => {}
            }
        }

        Ok(Self {
            action: action.unwrap_or_default(),
            name: name.unwrap_or_default(),
        })
    }
}

fn check_pair(pair: &[u8]) -> Result<(), ParseFormError> {
    if pair.contains(&b';') {
        return Err(ParseFormError::Semicolon);
    }

    let mut rest = pair;
    while let Some(pos) = rest.iter().position(|b| *b == b'%') {
        let escape = rest.get(pos + 1..pos + 3).unwrap_or(&rest[pos + 1..]);
        if escape.len() != 2 || !escape.iter().all(u8::is_ascii_hexdigit) {
            let end = (pos + 3).min(rest.len());
            return Err(ParseFormError::InvalidEscape(
                String::from_utf8_lossy(&rest[pos..end]).into_owned(),
            ));
        }
        rest = &rest[pos + 3..];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parse() {
        assert_eq!("enable".parse::<Action>(), Ok(Action::Enable));
        assert_eq!("disable".parse::<Action>(), Ok(Action::Disable));
    }

    #[test]
    fn test_action_parse_is_case_sensitive() {
        assert!("Enable".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
        let err = "bogus".parse::<Action>().unwrap_err();
        assert_eq!(err, ParseActionError("bogus".to_string()));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_action_display_matches_wire_value() {
        assert_eq!(Action::Enable.to_string(), "enable");
        assert_eq!(Action::Disable.to_string(), "disable");
    }

    #[test]
    fn test_toggle_form_new() {
        let form = ToggleForm::new(Action::Enable, "runtime");
        assert_eq!(form.action, "enable");
        assert_eq!(form.name, "runtime");
    }

    #[test]
    fn test_decode_form_fields() {
        let form = ToggleForm::decode(b"action=enable&name=runtime").unwrap();
        assert_eq!(form, ToggleForm::new(Action::Enable, "runtime"));

        let form = ToggleForm::decode(b"name=debug+log%2Fhttp&action=disable").unwrap();
        assert_eq!(form.name, "debug log/http");
        assert_eq!(form.action, "disable");
    }

    #[test]
    fn test_decode_missing_fields_are_empty() {
        assert_eq!(ToggleForm::decode(b"").unwrap(), ToggleForm::default());

        let form = ToggleForm::decode(b"action=enable&&other=1&name").unwrap();
        assert_eq!(form.action, "enable");
        assert_eq!(form.name, "");
    }

    #[test]
    fn test_decode_keeps_first_value() {
        let form = ToggleForm::decode(b"name=runtime&action=enable&name=other&action=bogus").unwrap();
        assert_eq!(form, ToggleForm::new(Action::Enable, "runtime"));
    }

    #[test]
    fn test_decode_rejects_semicolon() {
        assert_eq!(
            ToggleForm::decode(b"action=enable;name=runtime"),
            Err(ParseFormError::Semicolon)
        );
    }

    #[test]
    fn test_decode_rejects_bad_escape() {
        assert_eq!(
            ToggleForm::decode(b"action=enable&name=%zz"),
            Err(ParseFormError::InvalidEscape("%zz".to_string()))
        );
        assert_eq!(
            ToggleForm::decode(b"action=enable&name=run%4"),
            Err(ParseFormError::InvalidEscape("%4".to_string()))
        );
        assert!(ToggleForm::decode(b"action=%&name=runtime").is_err());
    }
}
