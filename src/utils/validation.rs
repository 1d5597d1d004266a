use crate::utils::error::{CheckError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Country codes the lookup service is documented to support. Membership is
/// advisory; the service accepts any two-letter code.
pub const SUPPORTED_COUNTRIES: &[&str] = &[
    "BR", "MX", "NG", "IN", "ID", "US", "CA", "GB", "DE", "FR",
];

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CheckError::ValidationError {
            message: format!("{}: URL cannot be empty", field_name),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CheckError::ValidationError {
                message: format!("{}: unsupported URL scheme: {}", field_name, scheme),
            }),
        },
        Err(e) => Err(CheckError::ValidationError {
            message: format!("{}: invalid URL format: {}", field_name, e),
        }),
    }
}

/// Advisory check: exactly two ASCII letters.
pub fn validate_country_code(country: &str) -> Result<()> {
    if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CheckError::ValidationError {
            message: format!("'{}' is not a two-letter country code", country),
        });
    }
    Ok(())
}

pub fn is_supported_country(country: &str) -> bool {
    let country = country.to_uppercase();
    SUPPORTED_COUNTRIES.contains(&country.as_str())
}

/// Advisory check: 8 to 15 digits once everything else is stripped.
pub fn validate_phone_number(number: &str) -> Result<()> {
    let digits = number.chars().filter(|c| c.is_ascii_digit()).count();
    if !(8..=15).contains(&digits) {
        return Err(CheckError::ValidationError {
            message: format!(
                "'{}' has {} digits, expected between 8 and 15",
                number, digits
            ),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CheckError::ValidationError {
            message: format!("{}: value must be at least {}", field_name, min_value),
        });
    }
    Ok(())
}
