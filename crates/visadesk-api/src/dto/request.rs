//! Request DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use visadesk_entity::employee::model::{CreateEmployee, UpdateEmployee};

/// Body for `POST /api/employees`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    /// Full display name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Contact email address.
    #[validate(email)]
    pub email: String,
    /// Employing company.
    #[validate(length(min = 1, max = 200))]
    pub company_name: String,
    /// Job title (optional).
    pub position: Option<String>,
    /// Visa expiry date (optional).
    pub visa_expiry_date: Option<NaiveDate>,
}

impl From<CreateEmployeeRequest> for CreateEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            company_name: req.company_name,
            position: req.position,
            visa_expiry_date: req.visa_expiry_date,
        }
    }
}

/// Body for `PUT /api/employees/:id`. Absent fields are left unchanged;
/// `"visa_expiry_date": null` explicitly clears the date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    /// New display name.
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    /// New email address.
    #[validate(email)]
    pub email: Option<String>,
    /// New employing company.
    #[validate(length(min = 1, max = 200))]
    pub company_name: Option<String>,
    /// New job title.
    pub position: Option<String>,
    /// New visa expiry date (double optional: absent vs. explicit null).
    #[serde(default, deserialize_with = "some_if_present")]
    pub visa_expiry_date: Option<Option<NaiveDate>>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl From<UpdateEmployeeRequest> for UpdateEmployee {
    fn from(req: UpdateEmployeeRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            company_name: req.company_name,
            position: req.position,
            visa_expiry_date: req.visa_expiry_date,
            is_active: req.is_active,
        }
    }
}

/// Distinguishes an absent field (left as `None` by `#[serde(default)]`)
/// from an explicit `null` (deserialized here as `Some(None)`).
fn some_if_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_bad_email() {
        let req = CreateEmployeeRequest {
            name: "Aliya".to_string(),
            email: "not-an-email".to_string(),
            company_name: "Acme".to_string(),
            position: None,
            visa_expiry_date: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_distinguishes_absent_from_null_date() {
        let absent: UpdateEmployeeRequest = serde_json::from_str(r#"{"name": "A"}"#).unwrap();
        assert_eq!(absent.visa_expiry_date, None);

        let cleared: UpdateEmployeeRequest =
            serde_json::from_str(r#"{"visa_expiry_date": null}"#).unwrap();
        assert_eq!(cleared.visa_expiry_date, Some(None));

        let set: UpdateEmployeeRequest =
            serde_json::from_str(r#"{"visa_expiry_date": "2025-06-01"}"#).unwrap();
        assert_eq!(
            set.visa_expiry_date,
            Some(NaiveDate::from_ymd_opt(2025, 6, 1))
        );
    }
}
