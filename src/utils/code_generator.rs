//! Short code generation and validation utilities.
//!
//! Provides random code generation over the 62-character alphanumeric
//! alphabet and validation for custom user-provided codes.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serde_json::json;

use crate::error::AppError;

/// Length of auto-generated codes.
pub const GENERATED_CODE_LEN: usize = 6;

/// Shape every stored code satisfies: 6 to 8 alphanumeric characters,
/// case-sensitive. Generated codes sit at the lower bound.
pub static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Generates a random code of `len` characters.
///
/// Characters are drawn uniformly from `[A-Za-z0-9]`, giving 62^6 possible
/// codes at the default length.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(GENERATED_CODE_LEN);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(len: usize) -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// Surrounding whitespace is trimmed before matching; what remains must
/// satisfy [`CODE_REGEX`] exactly. Case is preserved, so `MyCode1` and
/// `mycode1` are distinct codes.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the trimmed code does not match.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_custom_code(" mycode1 ").unwrap(), "mycode1");
/// assert!(normalize_custom_code("abc").is_err());       // Too short
/// assert!(normalize_custom_code("my-code1").is_err());  // Hyphen
/// ```
pub fn normalize_custom_code(code: &str) -> Result<String, AppError> {
    let trimmed = code.trim();

    if !CODE_REGEX.is_match(trimmed) {
        return Err(AppError::bad_request(
            "Code must be 6-8 alphanumeric characters",
            json!({ "code": code }),
        ));
    }

    Ok(trimmed.to_string())
}
