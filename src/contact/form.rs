use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Body of the contact POST. Field names are what the endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ContactSubmission {
    /// Required fields first, then email shape. Service is optional.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.name, &self.email, &self.phone, &self.message];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    BrushKart,
    Hydraulic,
    Fabrication,
    Maintenance,
    Consultation,
    Other,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::BrushKart,
        Service::Hydraulic,
        Service::Fabrication,
        Service::Maintenance,
        Service::Consultation,
        Service::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Service::BrushKart => "brush-kart",
            Service::Hydraulic => "hydraulic",
            Service::Fabrication => "fabrication",
            Service::Maintenance => "maintenance",
            Service::Consultation => "consultation",
            Service::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Service::BrushKart => "Brush Kart Manufacturing",
            Service::Hydraulic => "Hydraulic System Solutions",
            Service::Fabrication => "Industrial Fabrication & Welding",
            Service::Maintenance => "Machine Servicing & Maintenance",
            Service::Consultation => "Technical Consultation",
            Service::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "Alfred John".into(),
            email: "alfred@example.com".into(),
            phone: "+971501234567".into(),
            service: String::new(),
            message: "Need a hydraulic press serviced".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn empty_required_fields_are_rejected() {
        let mut form = filled();
        form.message = String::new();
        assert_eq!(form.validate(), Err(ValidationError::MissingRequired));

        let mut form = filled();
        form.phone = String::new();
        assert_eq!(form.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn only_truly_empty_fields_count_as_missing() {
        let mut form = filled();
        form.name = "   ".into();
        assert_eq!(form.validate(), Ok(()));

        form.email = " ".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn missing_fields_win_over_bad_email() {
        let mut form = filled();
        form.email = "not-an-email".into();
        form.name = String::new();
        assert_eq!(form.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn email_shape() {
        let mut form = filled();
        form.email = "not-an-email".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );

        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@c.de"));
    }

    #[test]
    fn serializes_with_endpoint_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        for key in ["name", "email", "phone", "service", "message"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn service_values_are_unique() {
        let mut values: Vec<&str> = Service::ALL.iter().map(Service::value).collect();
        values.dedup();
        assert_eq!(values.len(), Service::ALL.len());
    }
}
