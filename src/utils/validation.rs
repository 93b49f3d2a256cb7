//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! que complementan las validaciones derive de los DTOs.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un precio sea positivo
pub fn validate_positive_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut error = ValidationError::new("positive_price");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un entero opcional sea positivo cuando está presente
pub fn validate_positive_optional(value: i32) -> Result<(), ValidationError> {
    if value < 1 {
        let mut error = ValidationError::new("positive");
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Airport Shuttle").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }

    #[test]
    fn test_validate_positive_price() {
        assert!(validate_positive_price(&Decimal::from_str("25.50").unwrap()).is_ok());
        assert!(validate_positive_price(&Decimal::ZERO).is_err());
        assert!(validate_positive_price(&Decimal::from_str("-1.00").unwrap()).is_err());
    }

    #[test]
    fn test_validate_positive_optional() {
        assert!(validate_positive_optional(30).is_ok());
        assert!(validate_positive_optional(0).is_err());
        assert!(validate_positive_optional(-5).is_err());
    }
}
