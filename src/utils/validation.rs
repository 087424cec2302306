use crate::utils::error::{RetinaError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RetinaError::InvalidParameterError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RetinaError::InvalidParameterError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RetinaError::InvalidParameterError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(RetinaError::InvalidParameterError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 必填參數：空字串或純空白視為未提供，在送出請求前就失敗
pub fn require_param<'a>(parameter: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(RetinaError::missing_parameter(parameter));
    }
    Ok(value)
}

pub fn require_non_empty<'a, T>(parameter: &str, values: &'a [T]) -> Result<&'a [T]> {
    if values.is_empty() {
        return Err(RetinaError::missing_parameter(parameter));
    }
    Ok(values)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RetinaError::InvalidParameterError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 無法比較，一律視為超出範圍
    if !(min..=max).contains(&value) {
        return Err(RetinaError::InvalidParameterError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_path", "https://api.cortical.io/rest").is_ok());
        assert!(validate_url("base_path", "http://localhost:8080").is_ok());
        assert!(validate_url("base_path", "").is_err());
        assert!(validate_url("base_path", "invalid-url").is_err());
        assert!(validate_url("base_path", "ftp://example.com").is_err());
    }

    #[test]
    fn test_require_param() {
        assert_eq!(require_param("term", "apple").unwrap(), "apple");
        assert!(matches!(
            require_param("term", "  "),
            Err(RetinaError::MissingParameterError { parameter }) if parameter == "term"
        ));
        assert!(require_non_empty::<u32>("positions", &[]).is_err());
        assert!(require_non_empty("positions", &[1u32]).is_ok());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("sparsity", 0.5, 0.0, 1.0).is_ok());
        assert!(validate_range("sparsity", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range("sparsity", 0.0, 0.0, 1.0).is_ok());
        assert!(validate_range("sparsity", 1.0, 0.0, 1.0).is_ok());
        assert!(validate_range("sparsity", f64::NAN, 0.0, 1.0).is_err());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
    }
}
