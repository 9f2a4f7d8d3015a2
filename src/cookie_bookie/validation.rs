//! Recipe form validation.
//!
//! Rules run in order and the first failure wins:
//! - Title is required and at least [`MIN_TITLE_CHARS`] characters after trimming
//! - Ingredients and steps are required
//! - An image URL, when given, must be an absolute `http` or `https` URL

use crate::model::RecipePayload;
use thiserror::Error;
use url::Url;

/// Minimum title length after trimming, counted in UTF-16 code units like a browser string.
pub const MIN_TITLE_CHARS: usize = 3;

/// Why a recipe form was rejected. The display text is the user-facing status message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required.")]
    TitleRequired,

    #[error("Title should be at least 3 characters.")]
    TitleTooShort,

    #[error("Ingredients are required.")]
    IngredientsRequired,

    #[error("Steps are required.")]
    StepsRequired,

    #[error("Image URL must start with http or https.")]
    ImageScheme,

    #[error("Please provide a valid image URL or leave it blank.")]
    ImageInvalid,
}

/// Checks a payload, returning the first rule it breaks.
///
/// # Examples
/// ```
/// use cookie_bookie::model::RecipePayload;
/// use cookie_bookie::validation::{validate, ValidationError};
///
/// let ok = RecipePayload::new("Shortbread", "", "Butter, Sugar, Flour", "Mix\nBake");
/// assert!(validate(&ok).is_ok());
///
/// let short = RecipePayload::new("Ab", "", "Butter", "Bake");
/// assert_eq!(validate(&short), Err(ValidationError::TitleTooShort));
/// ```
pub fn validate(payload: &RecipePayload) -> Result<(), ValidationError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.encode_utf16().count() < MIN_TITLE_CHARS {
        return Err(ValidationError::TitleTooShort);
    }
    if payload.ingredients.trim().is_empty() {
        return Err(ValidationError::IngredientsRequired);
    }
    if payload.steps.trim().is_empty() {
        return Err(ValidationError::StepsRequired);
    }
    if let Some(image) = payload.image_url() {
        validate_image_url(&image)?;
    }
    Ok(())
}

fn validate_image_url(raw: &str) -> Result<(), ValidationError> {
    let url = Url::parse(raw).map_err(|_| ValidationError::ImageInvalid)?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::ImageScheme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, image: &str, ingredients: &str, steps: &str) -> RecipePayload {
        RecipePayload::new(title, image, ingredients, steps)
    }

    #[test]
    fn accepts_complete_payload() {
        assert_eq!(validate(&payload("Brownies", "", "Cocoa", "Bake")), Ok(()));
        assert_eq!(
            validate(&payload("Brownies", "https://example.com/b.jpg", "Cocoa", "Bake")),
            Ok(())
        );
        assert_eq!(
            validate(&payload("Brownies", " http://example.com/b.jpg ", "Cocoa", "Bake")),
            Ok(())
        );
    }

    #[test]
    fn requires_title() {
        let err = validate(&payload("   ", "", "Cocoa", "Bake")).unwrap_err();
        assert_eq!(err, ValidationError::TitleRequired);
        assert_eq!(err.to_string(), "Title is required.");
    }

    #[test]
    fn rejects_short_title() {
        let err = validate(&payload("Ab", "", "Cocoa", "Bake")).unwrap_err();
        assert_eq!(err.to_string(), "Title should be at least 3 characters.");
        // Surrounding whitespace does not count
        assert_eq!(
            validate(&payload("  Ab  ", "", "Cocoa", "Bake")),
            Err(ValidationError::TitleTooShort)
        );
    }

    #[test]
    fn counts_title_in_utf16_units_not_bytes() {
        assert_eq!(validate(&payload("Ñoñ", "", "x", "y")), Ok(()));
        // Each emoji here is a surrogate pair, so two of them make four units
        assert_eq!(validate(&payload("🍪🍪", "", "x", "y")), Ok(()));
        assert_eq!(
            validate(&payload("🍪", "", "x", "y")),
            Err(ValidationError::TitleTooShort)
        );
    }

    #[test]
    fn requires_ingredients_then_steps() {
        assert_eq!(
            validate(&payload("Brownies", "", " \n ", "")),
            Err(ValidationError::IngredientsRequired)
        );
        assert_eq!(
            validate(&payload("Brownies", "", "Cocoa", "  ")),
            Err(ValidationError::StepsRequired)
        );
    }

    #[test]
    fn first_failure_wins() {
        assert_eq!(
            validate(&payload("", "ftp://x", "", "")),
            Err(ValidationError::TitleRequired)
        );
        assert_eq!(
            validate(&payload("Brownies", "ftp://x", "", "")),
            Err(ValidationError::IngredientsRequired)
        );
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = validate(&payload("Brownies", "ftp://x.com/a.png", "Cocoa", "Bake")).unwrap_err();
        assert_eq!(err, ValidationError::ImageScheme);
        assert_eq!(err.to_string(), "Image URL must start with http or https.");
    }

    #[test]
    fn rejects_unparseable_url() {
        for bad in ["example.com/a.png", "not a url", "http://"] {
            assert_eq!(
                validate(&payload("Brownies", bad, "Cocoa", "Bake")),
                Err(ValidationError::ImageInvalid),
                "expected {:?} to be rejected",
                bad
            );
        }
    }
}
