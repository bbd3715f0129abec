//! Renders a [`VisaAlert`] from an employee and a crossed threshold.

use visadesk_core::types::alert::VisaAlert;
use visadesk_entity::employee::model::Employee;
use visadesk_entity::employee::threshold::Threshold;

/// Build the alert for one (employee, threshold) crossing.
///
/// The rendered title and body are final: channels deliver them verbatim.
pub fn build_alert(employee: &Employee, threshold: Threshold, days_remaining: i64) -> VisaAlert {
    let expiry = employee
        .visa_expiry_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let (title, body) = match threshold {
        Threshold::Expired => (
            format!("Visa expired: {}", employee.name),
            format!(
                "The visa for {} ({}) expired on {}. Immediate action is required.",
                employee.name, employee.company_name, expiry
            ),
        ),
        _ => {
            let days_word = if days_remaining == 1 { "day" } else { "days" };
            (
                format!(
                    "Visa expires in {} {}: {}",
                    days_remaining, days_word, employee.name
                ),
                format!(
                    "The visa for {} ({}) expires on {} — {} {} remaining.",
                    employee.name, employee.company_name, expiry, days_remaining, days_word
                ),
            )
        }
    };

    VisaAlert {
        employee_id: employee.id,
        employee_name: employee.name.clone(),
        employee_email: employee.email.clone(),
        company_name: employee.company_name.clone(),
        days_remaining,
        title,
        body,
        severity: threshold.severity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use sqlx::types::Json;
    use uuid::Uuid;
    use visadesk_core::types::alert::AlertSeverity;
    use visadesk_entity::employee::status::ThresholdState;

    fn employee(expiry: &str) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "Nilufar Karimova".to_string(),
            email: "nilufar@example.com".to_string(),
            company_name: "Orient Freight".to_string(),
            position: None,
            visa_expiry_date: NaiveDate::parse_from_str(expiry, "%Y-%m-%d").ok(),
            is_active: true,
            notification_state: Json(ThresholdState::empty()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn reminder_wording_includes_days_and_company() {
        let alert = build_alert(&employee("2024-01-31"), Threshold::Days30, 30);
        assert_eq!(alert.title, "Visa expires in 30 days: Nilufar Karimova");
        assert!(alert.body.contains("Orient Freight"));
        assert!(alert.body.contains("2024-01-31"));
        assert_eq!(alert.severity, AlertSeverity::Info);
    }

    #[test]
    fn one_day_uses_singular() {
        let alert = build_alert(&employee("2024-01-02"), Threshold::Days1, 1);
        assert_eq!(alert.title, "Visa expires in 1 day: Nilufar Karimova");
        assert_eq!(alert.severity, AlertSeverity::Warning);
    }

    #[test]
    fn expired_wording_is_terminal() {
        let alert = build_alert(&employee("2024-01-01"), Threshold::Expired, -31);
        assert_eq!(alert.title, "Visa expired: Nilufar Karimova");
        assert!(alert.body.contains("expired on 2024-01-01"));
        assert_eq!(alert.severity, AlertSeverity::Critical);
    }
}
