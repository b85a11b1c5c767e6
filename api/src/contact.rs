//! Payloads for the contact and newsletter forms.

use serde::Serialize;

/// The contact-form submission body.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub state: String,
    /// Whether the enquiry is about a dog (as opposed to a product).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dog: Option<bool>,
    /// The specific dog or product the enquiry refers to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_uuid: Option<String>,
}

/// The newsletter signup body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let req = ContactRequest {
            full_name: "An Nguyen".into(),
            phone: "0900000000".into(),
            email: "an@example.com".into(),
            city: "Hanoi".into(),
            state: "HN".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"fullName\""));
        assert!(!json.contains("isDog"));
        assert!(!json.contains("interestUuid"));
    }
}
