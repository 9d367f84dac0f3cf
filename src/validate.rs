//! Checkout Validation
//!
//! Field rules for the shipping form and the payment modal. The shipping
//! form is described by one explicit field table so the markup, the
//! validation pass, and the hidden-field copy all read from the same place.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ShippingDetails;

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(09\d{9}|\+639\d{9})$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static GCASH_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{13}$").unwrap());

/// Longest accepted value for the optional address sub-fields
pub const ADDRESS_PART_MAX: usize = 50;

/// Validation rule attached to a shipping field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Phone,
    Email,
    /// Optional field with a length ceiling
    MaxLen(usize),
}

/// One shipping form field: wire name, display label, rule
#[derive(Debug, Clone, Copy)]
pub struct ShippingField {
    pub name: &'static str,
    pub label: &'static str,
    pub rule: Rule,
}

/// The full shipping form, in render order
pub const SHIPPING_FIELDS: &[ShippingField] = &[
    ShippingField { name: "firstName", label: "First name", rule: Rule::Required },
    ShippingField { name: "lastName", label: "Last name", rule: Rule::Required },
    ShippingField { name: "phone", label: "Phone number", rule: Rule::Phone },
    ShippingField { name: "email", label: "Email address", rule: Rule::Email },
    ShippingField { name: "street", label: "Street", rule: Rule::Required },
    ShippingField { name: "barangay", label: "Barangay", rule: Rule::Required },
    ShippingField { name: "municipality", label: "Municipality", rule: Rule::Required },
    ShippingField { name: "province", label: "Province", rule: Rule::Required },
    ShippingField { name: "houseNo", label: "House no.", rule: Rule::MaxLen(ADDRESS_PART_MAX) },
    ShippingField { name: "lotNo", label: "Lot no.", rule: Rule::MaxLen(ADDRESS_PART_MAX) },
    ShippingField { name: "blockNo", label: "Block no.", rule: Rule::MaxLen(ADDRESS_PART_MAX) },
];

/// A failed field with its feedback message
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validate the shipping form; an empty result means the modal may open.
pub fn validate_shipping(form: &ShippingDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for field in SHIPPING_FIELDS {
        let value = form.field(field.name).trim();
        let message = match field.rule {
            Rule::Required if value.is_empty() => {
                Some(format!("{} is required", field.label))
            }
            Rule::Required => None,
            Rule::Phone if value.is_empty() => Some("Phone number is required".to_string()),
            Rule::Phone if !PHONE.is_match(value) => {
                Some("Use the format 09xxxxxxxxx or +639xxxxxxxxx".to_string())
            }
            Rule::Phone => None,
            Rule::Email if value.is_empty() => Some("Email address is required".to_string()),
            Rule::Email if !EMAIL.is_match(value) => {
                Some("Enter a valid email address".to_string())
            }
            Rule::Email => None,
            Rule::MaxLen(limit) if value.chars().count() > limit => {
                Some(format!("{} must be {} characters or fewer", field.label, limit))
            }
            Rule::MaxLen(_) => None,
        };
        if let Some(message) = message {
            errors.push(FieldError { field: field.name, message });
        }
    }
    errors
}

/// Payment method options in the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    GCash,
    CashOnDelivery,
}

impl PaymentMethod {
    /// Wire value posted with the payment form
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::GCash => "GCASH",
            PaymentMethod::CashOnDelivery => "COD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::GCash => "GCash",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// Validate the payment step before the form is allowed to submit.
///
/// Cash on Delivery needs nothing extra; GCash needs an attached receipt and
/// an exactly-13-digit reference number.
pub fn validate_payment(
    method: PaymentMethod,
    receipt_attached: bool,
    reference_no: &str,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if method == PaymentMethod::GCash {
        if !receipt_attached {
            errors.push(FieldError {
                field: "receipt",
                message: "Attach your GCash payment receipt".to_string(),
            });
        }
        if !GCASH_REF.is_match(reference_no.trim()) {
            errors.push(FieldError {
                field: "referenceNo",
                message: "Reference number must be 13 digits".to_string(),
            });
        }
    }
    errors
}

/// Feedback message for one field, if any.
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ShippingDetails {
        ShippingDetails {
            first_name: "Maria".to_string(),
            last_name: "Santos".to_string(),
            phone: "09171234567".to_string(),
            email: "maria@example.com".to_string(),
            street: "Mabini St".to_string(),
            barangay: "San Isidro".to_string(),
            municipality: "Quezon City".to_string(),
            province: "Metro Manila".to_string(),
            ..ShippingDetails::default()
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(validate_shipping(&filled_form()).is_empty());
    }

    #[test]
    fn every_required_field_is_reported_when_blank() {
        let errors = validate_shipping(&ShippingDetails::default());
        let required_count = SHIPPING_FIELDS
            .iter()
            .filter(|f| !matches!(f.rule, Rule::MaxLen(_)))
            .count();
        assert_eq!(errors.len(), required_count);
    }

    #[test]
    fn short_phone_gets_the_format_hint() {
        let mut form = filled_form();
        form.phone = "12345".to_string();
        let errors = validate_shipping(&form);
        let message = message_for(&errors, "phone").unwrap();
        assert!(message.contains("09xxxxxxxxx"), "got: {}", message);
    }

    #[test]
    fn both_local_and_international_phone_formats_pass() {
        let mut form = filled_form();
        form.phone = "+639171234567".to_string();
        assert!(validate_shipping(&form).is_empty());
        form.phone = "09991234567".to_string();
        assert!(validate_shipping(&form).is_empty());
    }

    #[test]
    fn phone_rejects_extra_digits() {
        let mut form = filled_form();
        form.phone = "091712345678".to_string();
        assert!(message_for(&validate_shipping(&form), "phone").is_some());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        assert!(message_for(&validate_shipping(&form), "email").is_some());
    }

    #[test]
    fn optional_fields_are_bounded_not_required() {
        let mut form = filled_form();
        assert!(validate_shipping(&form).is_empty());
        form.lot_no = "x".repeat(ADDRESS_PART_MAX + 1);
        let errors = validate_shipping(&form);
        assert_eq!(
            message_for(&errors, "lotNo").unwrap(),
            "Lot no. must be 50 characters or fewer"
        );
        form.lot_no = "x".repeat(ADDRESS_PART_MAX);
        assert!(validate_shipping(&form).is_empty());
    }

    #[test]
    fn field_table_maps_onto_distinct_struct_fields() {
        let mut form = ShippingDetails::default();
        for (index, field) in SHIPPING_FIELDS.iter().enumerate() {
            form.set_field(field.name, format!("value-{}", index));
        }
        for (index, field) in SHIPPING_FIELDS.iter().enumerate() {
            assert_eq!(form.field(field.name), format!("value-{}", index));
        }
    }

    #[test]
    fn cod_needs_no_extra_validation() {
        assert!(validate_payment(PaymentMethod::CashOnDelivery, false, "").is_empty());
    }

    #[test]
    fn gcash_requires_receipt_and_13_digit_reference() {
        let errors = validate_payment(PaymentMethod::GCash, false, "123");
        assert_eq!(errors.len(), 2);
        assert_eq!(
            message_for(&errors, "referenceNo").unwrap(),
            "Reference number must be 13 digits"
        );
        assert!(message_for(&errors, "receipt").is_some());
    }

    #[test]
    fn gcash_happy_path_passes() {
        assert!(validate_payment(PaymentMethod::GCash, true, "1234567890123").is_empty());
    }

    #[test]
    fn gcash_reference_rejects_14_digits_and_letters() {
        assert!(!validate_payment(PaymentMethod::GCash, true, "12345678901234").is_empty());
        assert!(!validate_payment(PaymentMethod::GCash, true, "12345678901ab").is_empty());
    }
}
