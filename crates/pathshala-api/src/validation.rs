use pathshala_content::models::Locale;

use crate::error::ApiError;

/// Validate a `lang` query value and turn it into a [`Locale`]
///
/// # Examples
/// ```
/// use pathshala_api::validation::validate_locale;
/// use pathshala_content::models::Locale;
///
/// assert_eq!(validate_locale("bn").unwrap(), Locale::Bn);
/// assert!(validate_locale("fr").is_err());
/// ```
pub fn validate_locale(code: &str) -> Result<Locale, ApiError> {
    if code.is_empty() {
        return Err(ApiError::Validation(
            "Language code cannot be empty".to_string(),
        ));
    }

    code.to_lowercase().parse().map_err(|_| {
        ApiError::Validation(format!(
            "Invalid language code: '{code}'. Supported codes are 'en' and 'bn'"
        ))
    })
}
