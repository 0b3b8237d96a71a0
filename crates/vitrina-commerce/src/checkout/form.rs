//! Checkout form state and validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fields of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CheckoutField {
    Email,
    FullName,
    Address,
    City,
    ZipCode,
    Country,
    CardNumber,
    CardName,
    ExpiryDate,
    Cvv,
}

impl CheckoutField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutField::Email => "email",
            CheckoutField::FullName => "fullName",
            CheckoutField::Address => "address",
            CheckoutField::City => "city",
            CheckoutField::ZipCode => "zipCode",
            CheckoutField::Country => "country",
            CheckoutField::CardNumber => "cardNumber",
            CheckoutField::CardName => "cardName",
            CheckoutField::ExpiryDate => "expiryDate",
            CheckoutField::Cvv => "cvv",
        }
    }
}

/// Checkout form state: shipping and payment fields plus the per-field
/// error map populated by step validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub email: String,
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
    pub card_number: String,
    pub card_name: String,
    pub expiry_date: String,
    pub cvv: String,
    errors: BTreeMap<CheckoutField, String>,
}

impl CheckoutForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a field value.
    ///
    /// Payment inputs are shaped on write the way the original form fields
    /// do it: card numbers are regrouped, the expiry gets its slash, the
    /// cvv keeps digits only. Editing a field clears its pending error.
    pub fn set(&mut self, field: CheckoutField, value: &str) {
        let value = match field {
            CheckoutField::CardNumber => format_card_number(value),
            CheckoutField::ExpiryDate => format_expiry_date(value),
            CheckoutField::Cvv => digits(value, 4),
            _ => value.to_string(),
        };
        *self.slot(field) = value;
        self.errors.remove(&field);
    }

    /// Read a field value.
    pub fn value(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::Email => &self.email,
            CheckoutField::FullName => &self.full_name,
            CheckoutField::Address => &self.address,
            CheckoutField::City => &self.city,
            CheckoutField::ZipCode => &self.zip_code,
            CheckoutField::Country => &self.country,
            CheckoutField::CardNumber => &self.card_number,
            CheckoutField::CardName => &self.card_name,
            CheckoutField::ExpiryDate => &self.expiry_date,
            CheckoutField::Cvv => &self.cvv,
        }
    }

    /// The current validation errors, keyed by field.
    pub fn errors(&self) -> &BTreeMap<CheckoutField, String> {
        &self.errors
    }

    /// The error message for a single field, if any.
    pub fn error(&self, field: CheckoutField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Validate the fields belonging to `step` (1 = shipping, 2 = payment;
    /// step 3 is review and has no fields of its own).
    ///
    /// Replaces the error map with the failures found and returns whether
    /// the step passed. Validation failures never abort anything; they
    /// only block advancement.
    pub fn validate_step(&mut self, step: u8) -> bool {
        let mut errors = BTreeMap::new();

        if step == 1 {
            if self.email.is_empty() {
                errors.insert(CheckoutField::Email, "El email es requerido".to_string());
            } else if !is_valid_email(&self.email) {
                errors.insert(CheckoutField::Email, "Email inválido".to_string());
            }
            if self.full_name.is_empty() {
                errors.insert(
                    CheckoutField::FullName,
                    "El nombre completo es requerido".to_string(),
                );
            }
            if self.address.is_empty() {
                errors.insert(
                    CheckoutField::Address,
                    "La dirección es requerida".to_string(),
                );
            }
            if self.city.is_empty() {
                errors.insert(CheckoutField::City, "La ciudad es requerida".to_string());
            }
            if self.zip_code.is_empty() {
                errors.insert(
                    CheckoutField::ZipCode,
                    "El código postal es requerido".to_string(),
                );
            }
            if self.country.is_empty() {
                errors.insert(CheckoutField::Country, "El país es requerido".to_string());
            }
        }

        if step == 2 {
            let card_digits: String = self
                .card_number
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if self.card_number.is_empty() {
                errors.insert(
                    CheckoutField::CardNumber,
                    "El número de tarjeta es requerido".to_string(),
                );
            } else if card_digits.len() != 16 || !card_digits.chars().all(|c| c.is_ascii_digit()) {
                errors.insert(
                    CheckoutField::CardNumber,
                    "El número de tarjeta debe tener 16 dígitos".to_string(),
                );
            }
            if self.card_name.is_empty() {
                errors.insert(
                    CheckoutField::CardName,
                    "El nombre en la tarjeta es requerido".to_string(),
                );
            }
            if self.expiry_date.is_empty() {
                errors.insert(
                    CheckoutField::ExpiryDate,
                    "La fecha de expiración es requerida".to_string(),
                );
            } else if !is_valid_expiry(&self.expiry_date) {
                errors.insert(
                    CheckoutField::ExpiryDate,
                    "Formato inválido (MM/AA)".to_string(),
                );
            }
            if self.cvv.is_empty() {
                errors.insert(CheckoutField::Cvv, "El CVV es requerido".to_string());
            } else if !(3..=4).contains(&self.cvv.len())
                || !self.cvv.chars().all(|c| c.is_ascii_digit())
            {
                errors.insert(CheckoutField::Cvv, "CVV inválido".to_string());
            }
        }

        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    fn slot(&mut self, field: CheckoutField) -> &mut String {
        match field {
            CheckoutField::Email => &mut self.email,
            CheckoutField::FullName => &mut self.full_name,
            CheckoutField::Address => &mut self.address,
            CheckoutField::City => &mut self.city,
            CheckoutField::ZipCode => &mut self.zip_code,
            CheckoutField::Country => &mut self.country,
            CheckoutField::CardNumber => &mut self.card_number,
            CheckoutField::CardName => &mut self.card_name,
            CheckoutField::ExpiryDate => &mut self.expiry_date,
            CheckoutField::Cvv => &mut self.cvv,
        }
    }
}

/// Regroup a card number as blocks of 4 digits separated by spaces,
/// capped at 16 digits.
pub fn format_card_number(input: &str) -> String {
    let digits = digits(input, 16);
    let mut out = String::with_capacity(19);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Shape an expiry input as `MM/YY`, inserting the slash after the second
/// digit.
pub fn format_expiry_date(input: &str) -> String {
    let digits = digits(input, 4);
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

fn digits(input: &str, max: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max)
        .collect()
}

/// Simple `x@y.z` shape check, the same bar the original form sets.
fn is_valid_email(value: &str) -> bool {
    let not_blank = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
    match value.split_once('@') {
        Some((local, rest)) => match rest.rsplit_once('.') {
            Some((host, tld)) => not_blank(local) && not_blank(host) && not_blank(tld),
            None => false,
        },
        None => false,
    }
}

/// Two digits, a slash, two digits.
fn is_valid_expiry(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'/'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_shipping() -> CheckoutForm {
        let mut form = CheckoutForm::new();
        form.set(CheckoutField::Email, "juan@example.com");
        form.set(CheckoutField::FullName, "Juan Pérez");
        form.set(CheckoutField::Address, "Calle Mayor 1");
        form.set(CheckoutField::City, "Madrid");
        form.set(CheckoutField::ZipCode, "28001");
        form.set(CheckoutField::Country, "ES");
        form
    }

    fn filled_payment() -> CheckoutForm {
        let mut form = filled_shipping();
        form.set(CheckoutField::CardNumber, "1234567812345678");
        form.set(CheckoutField::CardName, "JUAN PEREZ");
        form.set(CheckoutField::ExpiryDate, "1226");
        form.set(CheckoutField::Cvv, "123");
        form
    }

    #[test]
    fn test_card_number_formatting() {
        assert_eq!(
            format_card_number("1234567812345678"),
            "1234 5678 1234 5678"
        );
        assert_eq!(format_card_number("1234 5678 1234 5678"), "1234 5678 1234 5678");
        assert_eq!(format_card_number("12345"), "1234 5");
        assert_eq!(format_card_number("123"), "123");
        // Capped at 16 digits
        assert_eq!(
            format_card_number("12345678123456789999"),
            "1234 5678 1234 5678"
        );
        // Non-digits are stripped
        assert_eq!(format_card_number("1234-5678"), "1234 5678");
    }

    #[test]
    fn test_expiry_formatting() {
        assert_eq!(format_expiry_date("1226"), "12/26");
        assert_eq!(format_expiry_date("12"), "12/");
        assert_eq!(format_expiry_date("1"), "1");
        assert_eq!(format_expiry_date("12/26"), "12/26");
        assert_eq!(format_expiry_date("122634"), "12/26");
    }

    #[test]
    fn test_cvv_keeps_digits_only() {
        let mut form = CheckoutForm::new();
        form.set(CheckoutField::Cvv, "12a34b5");
        assert_eq!(form.cvv, "1234");
    }

    #[test]
    fn test_step1_requires_all_fields() {
        let mut form = CheckoutForm::new();
        assert!(!form.validate_step(1));
        assert_eq!(form.errors().len(), 6);
        assert_eq!(
            form.error(CheckoutField::Email),
            Some("El email es requerido")
        );
    }

    #[test]
    fn test_step1_email_shape() {
        let mut form = filled_shipping();

        form.set(CheckoutField::Email, "foo");
        assert!(!form.validate_step(1));
        assert_eq!(form.error(CheckoutField::Email), Some("Email inválido"));

        form.set(CheckoutField::Email, "a@b.co");
        assert!(form.validate_step(1));
    }

    #[test]
    fn test_step1_valid() {
        let mut form = filled_shipping();
        assert!(form.validate_step(1));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_step2_rejects_15_digit_card() {
        let mut form = filled_payment();
        form.set(CheckoutField::CardNumber, "123456781234567");
        assert!(!form.validate_step(2));
        assert_eq!(
            form.error(CheckoutField::CardNumber),
            Some("El número de tarjeta debe tener 16 dígitos")
        );
    }

    #[test]
    fn test_step2_accepts_spaced_card_number() {
        let mut form = filled_payment();
        form.set(CheckoutField::CardNumber, "1234 5678 1234 5678");
        assert!(form.validate_step(2));
    }

    #[test]
    fn test_step2_expiry_shape() {
        let mut form = filled_payment();
        form.expiry_date = "13-26".to_string();
        assert!(!form.validate_step(2));
        assert_eq!(
            form.error(CheckoutField::ExpiryDate),
            Some("Formato inválido (MM/AA)")
        );
    }

    #[test]
    fn test_step2_cvv_length() {
        let mut form = filled_payment();
        form.cvv = "12".to_string();
        assert!(!form.validate_step(2));

        form.cvv = "1234".to_string();
        assert!(form.validate_step(2));
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = CheckoutForm::new();
        form.validate_step(1);
        assert!(form.error(CheckoutField::City).is_some());

        form.set(CheckoutField::City, "Madrid");
        assert!(form.error(CheckoutField::City).is_none());
        // Other errors are untouched
        assert!(form.error(CheckoutField::Email).is_some());
    }

    #[test]
    fn test_step3_has_no_fields() {
        let mut form = CheckoutForm::new();
        assert!(form.validate_step(3));
    }
}
