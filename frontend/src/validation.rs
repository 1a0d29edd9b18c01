//! Order form validation.
//!
//! Each input has its own named validator returning `Ok(())` or the
//! [`FieldError`] to display under it. [`validate_order`] runs all of them
//! and, when nothing failed, builds the typed [`ShipmentRequest`].
//!
//! # Rules
//!
//! | Field | Rule |
//! |-------|------|
//! | `client_name` | required |
//! | `client_phone` | required, loose international phone |
//! | `client_email` | optional, `local@domain.tld` |
//! | `route` | required, one of [`Route::ALL`] |
//! | `cargo_type` | required |
//! | `cargo_weight`, `cargo_volume` | optional, number ≥ 0 |

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Field, FieldError, OrderFormValues, Route, ShipmentRequest};

pub const MSG_REQUIRED: &str = "Обязательное поле";
pub const MSG_BAD_PHONE: &str = "Неверный формат телефона";
pub const MSG_BAD_EMAIL: &str = "Неверный формат email";
pub const MSG_BAD_ROUTE: &str = "Выберите направление из списка";
pub const MSG_NOT_A_NUMBER: &str = "Введите число";
pub const MSG_NEGATIVE: &str = "Значение не может быть отрицательным";

/// Digits with optional leading `+` and the usual separators.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9\s().-]*[0-9]$").expect("valid phone regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email regex")
});

/// Accepted digit count for a phone number (E.164 caps at 15).
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

fn required(field: Field, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::new(field, MSG_REQUIRED))
    } else {
        Ok(())
    }
}

pub fn validate_client_name(value: &str) -> Result<(), FieldError> {
    required(Field::ClientName, value)
}

pub fn validate_client_phone(value: &str) -> Result<(), FieldError> {
    required(Field::ClientPhone, value)?;

    let value = value.trim();
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if PHONE_RE.is_match(value) && PHONE_DIGITS.contains(&digits) {
        Ok(())
    } else {
        Err(FieldError::new(Field::ClientPhone, MSG_BAD_PHONE))
    }
}

/// Blank is fine: the email is optional.
pub fn validate_client_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() || EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::new(Field::ClientEmail, MSG_BAD_EMAIL))
    }
}

pub fn validate_route(value: &str) -> Result<Route, FieldError> {
    required(Field::Route, value)?;
    value
        .parse()
        .map_err(|_| FieldError::new(Field::Route, MSG_BAD_ROUTE))
}

pub fn validate_cargo_type(value: &str) -> Result<(), FieldError> {
    required(Field::CargoType, value)
}

/// Optional non-negative number; `,` is accepted as decimal separator.
fn non_negative(field: Field, value: &str) -> Result<Option<f64>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let number: f64 = value
        .replace(',', ".")
        .parse()
        .map_err(|_| FieldError::new(field, MSG_NOT_A_NUMBER))?;

    if !number.is_finite() {
        Err(FieldError::new(field, MSG_NOT_A_NUMBER))
    } else if number < 0.0 {
        Err(FieldError::new(field, MSG_NEGATIVE))
    } else {
        Ok(Some(number))
    }
}

pub fn validate_cargo_weight(value: &str) -> Result<Option<f64>, FieldError> {
    non_negative(Field::CargoWeight, value)
}

pub fn validate_cargo_volume(value: &str) -> Result<Option<f64>, FieldError> {
    non_negative(Field::CargoVolume, value)
}

/// Run the validator for one field.
///
/// Free-text fields with no rule always pass.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::ClientName => validate_client_name(value),
        Field::ClientPhone => validate_client_phone(value),
        Field::ClientEmail => validate_client_email(value),
        Field::Route => validate_route(value).map(|_| ()),
        Field::CargoType => validate_cargo_type(value),
        Field::CargoWeight => validate_cargo_weight(value).map(|_| ()),
        Field::CargoVolume => validate_cargo_volume(value).map(|_| ()),
        Field::CompanyName
        | Field::Description
        | Field::PickupAddress
        | Field::DeliveryAddress => Ok(()),
    }
}

fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Validate every field and build the request.
///
/// # Returns
/// * `Ok(ShipmentRequest)` when all checks pass
/// * `Err(Vec<FieldError>)` with one entry per failing field, in form order
pub fn validate_order(values: &OrderFormValues) -> Result<ShipmentRequest, Vec<FieldError>> {
    let errors: Vec<FieldError> = Field::ALL
        .iter()
        .filter_map(|field| validate_field(*field, values.get(*field)).err())
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    // All checks passed above, so these conversions cannot fail here.
    let route = validate_route(&values.route).map_err(|e| vec![e])?;
    let cargo_weight = validate_cargo_weight(&values.cargo_weight).map_err(|e| vec![e])?;
    let cargo_volume = validate_cargo_volume(&values.cargo_volume).map_err(|e| vec![e])?;

    Ok(ShipmentRequest {
        client_name: values.client_name.trim().to_string(),
        client_phone: values.client_phone.trim().to_string(),
        client_email: optional_text(&values.client_email),
        company_name: optional_text(&values.company_name),
        route,
        cargo_type: values.cargo_type.trim().to_string(),
        cargo_weight,
        cargo_volume,
        description: optional_text(&values.description),
        pickup_address: optional_text(&values.pickup_address),
        delivery_address: optional_text(&values.delivery_address),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OrderFormValues {
        OrderFormValues {
            client_name: "Иван Иванов".into(),
            client_phone: "+7 (999) 123-45-67".into(),
            route: "uae_to_rf".into(),
            cargo_type: "Электроника".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_phone_accepts_common_formats() {
        for phone in [
            "+7 (999) 123-45-67",
            "+79991234567",
            "8 999 123 45 67",
            "+971 50 123 4567",
            "+90.532.123.45.67",
        ] {
            assert!(validate_client_phone(phone).is_ok(), "{phone} should pass");
        }
    }

    #[test]
    fn test_phone_rejects_garbage() {
        for phone in ["abc", "12345", "+7 999 abc 45 67", "++79991234567", "1234567890123456"] {
            let err = validate_client_phone(phone).unwrap_err();
            assert_eq!(err.field, Field::ClientPhone);
            assert_eq!(err.message, MSG_BAD_PHONE, "{phone} should fail");
        }
    }

    #[test]
    fn test_phone_required() {
        let err = validate_client_phone("   ").unwrap_err();
        assert_eq!(err.message, MSG_REQUIRED);
    }

    #[test]
    fn test_email_optional_but_checked() {
        assert!(validate_client_email("").is_ok());
        assert!(validate_client_email("ivan@example.com").is_ok());
        assert!(validate_client_email("Ivan.Petrov+cargo@Mail.Example.RU").is_ok());

        assert!(validate_client_email("ivan@example").is_err());
        assert!(validate_client_email("ivan.example.com").is_err());
        assert!(validate_client_email("@example.com").is_err());
    }

    #[test]
    fn test_route_values() {
        assert_eq!(validate_route("turkey_to_rf"), Ok(Route::TurkeyToRf));
        assert_eq!(validate_route("").unwrap_err().message, MSG_REQUIRED);
        assert_eq!(validate_route("china_to_rf").unwrap_err().message, MSG_BAD_ROUTE);
    }

    #[test]
    fn test_numeric_fields() {
        assert_eq!(validate_cargo_weight(""), Ok(None));
        assert_eq!(validate_cargo_weight("0"), Ok(Some(0.0)));
        assert_eq!(validate_cargo_weight("12,5"), Ok(Some(12.5)));
        assert_eq!(validate_cargo_volume(" 1.5 "), Ok(Some(1.5)));

        assert_eq!(validate_cargo_weight("-1").unwrap_err().message, MSG_NEGATIVE);
        assert_eq!(validate_cargo_volume("-0.01").unwrap_err().message, MSG_NEGATIVE);
        assert_eq!(validate_cargo_weight("много").unwrap_err().message, MSG_NOT_A_NUMBER);
        assert_eq!(validate_cargo_volume("inf").unwrap_err().message, MSG_NOT_A_NUMBER);
    }

    #[test]
    fn test_missing_required_fields_each_reported() {
        let errors = validate_order(&OrderFormValues::default()).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![Field::ClientName, Field::ClientPhone, Field::Route, Field::CargoType]
        );
        assert!(errors.iter().all(|e| e.message == MSG_REQUIRED));
    }

    #[test]
    fn test_valid_order_builds_trimmed_request() {
        let mut values = filled();
        values.client_name = "  Иван Иванов ".into();
        values.company_name = "   ".into();
        values.client_email = " ivan@example.com ".into();
        values.cargo_volume = "2".into();

        let request = validate_order(&values).unwrap();
        assert_eq!(request.client_name, "Иван Иванов");
        assert_eq!(request.client_email.as_deref(), Some("ivan@example.com"));
        assert_eq!(request.company_name, None);
        assert_eq!(request.route, Route::UaeToRf);
        assert_eq!(request.cargo_weight, None);
        assert_eq!(request.cargo_volume, Some(2.0));
    }

    #[test]
    fn test_mixed_errors_in_form_order() {
        let mut values = filled();
        values.client_email = "nope".into();
        values.cargo_weight = "-5".into();

        let errors = validate_order(&values).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, Field::ClientEmail);
        assert_eq!(errors[1].field, Field::CargoWeight);
    }
}
