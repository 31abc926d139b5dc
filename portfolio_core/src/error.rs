use email_address::EmailAddress;
use thiserror::Error;
use url::Url;

/// Field-level write validation failure. Persistence is blocked; nothing is
/// clamped or coerced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("{field} is not a valid email address")]
    InvalidEmail { field: &'static str },
}

pub(crate) fn validate_range(
    field: &'static str,
    value: i32,
    min: i64,
    max: i64,
) -> Result<(), ValidationError> {
    if (min..=max).contains(&(value as i64)) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value: value as i64,
        })
    }
}

pub(crate) fn validate_non_negative(
    field: &'static str,
    value: i32,
) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field,
            value: value as f64,
        });
    }
    Ok(())
}

pub(crate) fn validate_non_negative_decimal(
    field: &'static str,
    value: f32,
) -> Result<(), ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field,
            value: value as f64,
        });
    }
    Ok(())
}

pub(crate) fn validate_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Accepts http(s) URLs only. Applied to every URL field at write time.
pub(crate) fn validate_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ValidationError::InvalidUrl {
                field,
                reason: format!("unsupported scheme: {scheme}"),
            }),
        },
        Err(e) => Err(ValidationError::InvalidUrl {
            field,
            reason: e.to_string(),
        }),
    }
}

pub(crate) fn validate_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if EmailAddress::is_valid(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(validate_range("progress", 0, 0, 100).is_ok());
        assert!(validate_range("progress", 100, 0, 100).is_ok());
        assert!(validate_range("progress", 101, 0, 100).is_err());
        assert!(validate_range("progress", -1, 0, 100).is_err());
    }

    #[test]
    fn url_scheme_is_checked() {
        assert!(validate_url("demo_url", "https://example.com/demo").is_ok());
        assert!(validate_url("demo_url", "http://example.com").is_ok());
        assert!(validate_url("demo_url", "ftp://example.com").is_err());
        assert!(validate_url("demo_url", "not a url").is_err());
    }

    #[test]
    fn email_is_checked() {
        assert!(validate_email("email", "dev@example.com").is_ok());
        assert!(validate_email("email", "not-an-email").is_err());
    }
}
