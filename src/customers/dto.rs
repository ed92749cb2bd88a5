use serde::Deserialize;

use crate::validate::{length_between, required, FieldError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub name: Option<String>,
    #[serde(default)]
    pub is_gold: bool,
    pub phone: Option<String>,
}

/// Validated creation payload; construction goes through `validate`.
#[derive(Debug, Clone)]
pub struct ValidCustomer {
    pub name: String,
    pub is_gold: bool,
    pub phone: String,
}

impl CreateCustomer {
    pub fn validate(&self) -> Result<ValidCustomer, FieldError> {
        let name = required("name", &self.name)?;
        length_between("name", name, 3, 50)?;
        let phone = required("phone", &self.phone)?;
        length_between("phone", phone, 10, 20)?;
        Ok(ValidCustomer {
            name: name.clone(),
            is_gold: self.is_gold,
            phone: phone.clone(),
        })
    }
}
