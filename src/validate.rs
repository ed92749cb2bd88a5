use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

/// First failing field of a request payload, with the violated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" {}", self.field, self.message)
    }
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Missing required fields fail here, as a 400, not at deserialization.
pub fn required<'a, T>(field: &'static str, value: &'a Option<T>) -> Result<&'a T, FieldError> {
    value.as_ref().ok_or_else(|| FieldError::new(field, "is required"))
}

pub fn length_between(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(FieldError::new(
            field,
            format!("must be between {min} and {max} characters"),
        ));
    }
    Ok(())
}

pub fn range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), FieldError> {
    if !value.is_finite() || value < min || value > max {
        return Err(FieldError::new(field, format!("must be between {min} and {max}")));
    }
    Ok(())
}

pub fn non_negative(field: &'static str, value: i32) -> Result<(), FieldError> {
    if value < 0 {
        return Err(FieldError::new(field, "must be 0 or greater"));
    }
    Ok(())
}

/// Foreign-key ids arrive as strings; the format is checked before any
/// persistence access happens.
pub fn object_id(field: &'static str, value: &str) -> Result<Uuid, FieldError> {
    Uuid::parse_str(value).map_err(|_| FieldError::new(field, "must be a valid id"))
}

pub fn email(field: &'static str, value: &str) -> Result<(), FieldError> {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::new(field, "must be a valid email"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_accepts_boundaries() {
        assert!(length_between("name", "abc", 3, 50).is_ok());
        assert!(length_between("name", &"a".repeat(50), 3, 50).is_ok());
    }

    #[test]
    fn length_rejects_outside_bounds() {
        let err = length_between("name", "ab", 3, 50).unwrap_err();
        assert_eq!(err.field, "name");
        assert!(length_between("name", &"a".repeat(51), 3, 50).is_err());
    }

    #[test]
    fn range_accepts_endpoints() {
        assert!(range("dailyRentalRate", 0.0, 0.0, 100.0).is_ok());
        assert!(range("dailyRentalRate", 100.0, 0.0, 100.0).is_ok());
        assert!(range("dailyRentalRate", 100.1, 0.0, 100.0).is_err());
        assert!(range("dailyRentalRate", f64::NAN, 0.0, 100.0).is_err());
    }

    #[test]
    fn object_id_rejects_malformed_strings() {
        assert!(object_id("genreId", "not-a-uuid").is_err());
        assert!(object_id("genreId", "").is_err());
        let id = Uuid::new_v4();
        assert_eq!(object_id("genreId", &id.to_string()).unwrap(), id);
    }

    #[test]
    fn email_checks_shape() {
        assert!(email("email", "user@example.com").is_ok());
        assert!(email("email", "not-an-email").is_err());
        assert!(email("email", "a b@example.com").is_err());
    }

    #[test]
    fn display_names_the_field() {
        let err = length_between("phone", "123", 10, 20).unwrap_err();
        assert_eq!(err.to_string(), "\"phone\" must be between 10 and 20 characters");
    }
}
