//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos recibidos desde los formularios/JSON.

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

use crate::models::{MAX_COST, MAX_DAILY_RATE};

lazy_static! {
    /// Matrícula: letras mayúsculas, dígitos y guiones (ej. MH12AB1234)
    static ref LICENSE_PLATE_RE: Regex = Regex::new(r"^[A-Z0-9][A-Z0-9-]{1,19}$")
        .expect("license plate regex is valid");
}

/// Formatos aceptados para fechas con hora (ISO con 'T' o con espacio)
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Validar y convertir string a datetime.
///
/// Acepta `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]` y una fecha
/// sola `YYYY-MM-DD`, que se interpreta como medianoche.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let value = value.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }

    let mut error = ValidationError::new("datetime");
    error.add_param("value".into(), &value.to_string());
    error.add_param("format".into(), &"YYYY-MM-DD[THH:MM[:SS]]".to_string());
    Err(error)
}

/// Deserializador serde para campos de fecha con hora en los DTOs
pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(|_| {
        serde::de::Error::custom(format!(
            "invalid date-time '{}', expected YYYY-MM-DD[THH:MM[:SS]]",
            raw
        ))
    })
}

/// Normaliza una matrícula (mayúsculas, sin espacios)
pub fn normalize_license_plate(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Validar formato de matrícula ya normalizada
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    if !LICENSE_PLATE_RE.is_match(&normalize_license_plate(value)) {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

fn amount_error(code: &'static str, value: &Decimal) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.add_param("value".into(), &value.to_string());
    error
}

/// Importe con a lo sumo dos decimales y sin superar `max`
fn validate_amount_fits(value: &Decimal, max: Decimal) -> Result<(), ValidationError> {
    if value.scale() > 2 && value.normalize().scale() > 2 {
        return Err(amount_error("amount_precision", value));
    }
    if *value > max {
        let mut error = amount_error("amount_range", value);
        error.add_param("max".into(), &max.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un importe sea estrictamente positivo
pub fn validate_positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(amount_error("positive_amount", value));
    }
    Ok(())
}

/// Tarifa diaria: positiva y representable en la columna `daily_rate`
pub fn validate_daily_rate(value: &Decimal) -> Result<(), ValidationError> {
    validate_positive_amount(value)?;
    validate_amount_fits(value, MAX_DAILY_RATE)
}

/// Coste de mantenimiento: no negativo y representable en la columna `cost`
pub fn validate_cost(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(amount_error("non_negative_amount", value));
    }
    validate_amount_fits(value, MAX_COST)
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
