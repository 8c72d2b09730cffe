//! # Validation Utilities
//!
//! Input validation helpers for user registration and chirp posting.

/// Longest chirp body accepted, in characters.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Replacement for a masked word.
const MASK: &str = "****";

/// Words masked out of chirp bodies (compared lowercase).
const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format.
///
/// Requires an `@` that is neither first nor last, followed somewhere later by
/// a `.` that is not the final character.
pub fn validate_email(email: &str) -> Result<(), String> {
    let invalid = || Err("Invalid or missing email address".to_string());

    let Some(at) = email.find('@') else {
        return invalid();
    };
    if at == 0 || at == email.len() - 1 {
        return invalid();
    }

    let domain = &email[at + 1..];
    match domain.find('.') {
        Some(dot) if dot < domain.len() - 1 => Ok(()),
        _ => invalid(),
    }
}

/// Validate chirp body length.
pub fn validate_chirp(body: &str) -> Result<(), String> {
    if body.chars().count() > MAX_CHIRP_LENGTH {
        Err("Chirp is too long".to_string())
    } else {
        Ok(())
    }
}

/// Mask profane words in a chirp body.
///
/// Words are split on single spaces only, so a word with punctuation attached
/// (`Sharbert!`) is kept as written. Spacing is preserved.
pub fn clean_chirp(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            if PROFANE_WORDS.contains(&lower.as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a@b.c").is_ok());

        let rejected = [
            "",
            "alice",
            "@example.com",
            "alice@",
            "alice@example",
            "alice@example.",
            "alice.smith@example",
        ];
        for bad in rejected {
            assert!(validate_email(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_validate_chirp_length() {
        let exact = "a".repeat(MAX_CHIRP_LENGTH);
        assert!(validate_chirp(&exact).is_ok());

        let long = "a".repeat(MAX_CHIRP_LENGTH + 1);
        assert_eq!(
            validate_chirp(&long).expect_err("141 chars should fail"),
            "Chirp is too long"
        );
    }

    #[test]
    fn test_clean_chirp() {
        assert_eq!(
            clean_chirp("I had something interesting for breakfast"),
            "I had something interesting for breakfast"
        );
        assert_eq!(
            clean_chirp("I hear Mastodon is better than Chirpy. sharbert I need to migrate"),
            "I hear Mastodon is better than Chirpy. **** I need to migrate"
        );
        assert_eq!(
            clean_chirp("I really need a kerfuffle to go to bed sooner, Fornax !"),
            "I really need a **** to go to bed sooner, **** !"
        );
    }

    #[test]
    fn test_clean_chirp_keeps_punctuated_words() {
        assert_eq!(clean_chirp("Sharbert! what a KERFUFFLE"), "Sharbert! what a ****");
        assert_eq!(clean_chirp("two  spaces"), "two  spaces");
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("x", "email").is_ok());
        assert_eq!(
            validate_not_empty("   ", "email").expect_err("blank should fail"),
            "email cannot be empty"
        );
    }
}
