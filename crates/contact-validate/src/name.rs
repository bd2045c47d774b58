//! Name validation.
//!
//! A name may contain ASCII letters, Latin-1 accented letters (which include
//! ñ and Ñ), ASCII digits and whitespace. Anything else is rejected.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

const NAME_CHARS: &str = r"A-Za-zÀ-ÖØ-öø-ÿ0-9\s";

/// Whole-string name pattern; requires at least one character.
pub static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[{NAME_CHARS}]+$")).expect("name pattern is valid")
});

static NAME_DISALLOWED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[^{NAME_CHARS}]")).expect("name pattern is valid")
});

/// Why a name value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameRejection {
    #[error("value is missing")]
    Missing,
    #[error("value is empty")]
    Empty,
    #[error("value contains disallowed character {0:?}")]
    DisallowedCharacter(char),
}

impl NameRejection {
    /// Label of the failed check. Unlike `Display`, never includes name content.
    pub fn stage(self) -> &'static str {
        match self {
            NameRejection::Missing => "missing",
            NameRejection::Empty => "empty",
            NameRejection::DisallowedCharacter(_) => "disallowed_character",
        }
    }
}

pub fn check_name(value: Option<&str>) -> Result<(), NameRejection> {
    let Some(name) = value else {
        return Err(NameRejection::Missing);
    };
    if NAME_REGEX.is_match(name) {
        return Ok(());
    }
    if name.is_empty() {
        return Err(NameRejection::Empty);
    }
    let offending = NAME_DISALLOWED_REGEX
        .find(name)
        .and_then(|m| m.as_str().chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Err(NameRejection::DisallowedCharacter(offending))
}

/// Returns true when the value is an acceptable contact name.
pub fn validate_name(value: Option<&str>) -> bool {
    check_name(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_accents_digits_and_spaces() {
        assert_eq!(check_name(Some("María Pérez 2")), Ok(()));
        assert_eq!(check_name(Some("ÑANDÚ Müller")), Ok(()));
        assert_eq!(check_name(Some("Zoë\tGarçon")), Ok(()));
        assert_eq!(check_name(Some("   ")), Ok(()));
    }

    #[test]
    fn rejects_punctuation() {
        assert_eq!(
            check_name(Some("O'Brien")),
            Err(NameRejection::DisallowedCharacter('\''))
        );
        assert_eq!(
            check_name(Some("Ana-María")),
            Err(NameRejection::DisallowedCharacter('-'))
        );
        assert_eq!(
            check_name(Some("Juan × Pedro")),
            Err(NameRejection::DisallowedCharacter('×'))
        );
    }

    #[test]
    fn rejects_missing_and_empty() {
        assert_eq!(check_name(None), Err(NameRejection::Missing));
        assert_eq!(check_name(Some("")), Err(NameRejection::Empty));
    }

    #[test]
    fn stage_hides_name_content() {
        let rejection = check_name(Some("Zoë*")).unwrap_err();
        assert_eq!(rejection, NameRejection::DisallowedCharacter('*'));
        assert_eq!(rejection.stage(), "disallowed_character");
        assert_eq!(NameRejection::Missing.stage(), "missing");
    }
}
