use serde::Deserialize;

use crate::validate::{length_between, required, FieldError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGenre {
    pub name: Option<String>,
}

impl CreateGenre {
    pub fn validate(&self) -> Result<String, FieldError> {
        let name = required("name", &self.name)?;
        length_between("name", name, 3, 50)?;
        Ok(name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>) -> CreateGenre {
        CreateGenre { name: name.map(String::from) }
    }

    #[test]
    fn accepts_boundary_lengths() {
        assert!(payload(Some("abc")).validate().is_ok());
        let max = "a".repeat(50);
        assert!(payload(Some(max.as_str())).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_bounds_names() {
        assert!(payload(Some("12")).validate().is_err());
        let long = "a".repeat(51);
        assert!(payload(Some(long.as_str())).validate().is_err());
    }

    #[test]
    fn rejects_missing_name() {
        let err = payload(None).validate().unwrap_err();
        assert_eq!(err.field, "name");
    }
}
