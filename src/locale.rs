//! Locale descriptors for locale-aware numeric formatting.

use crate::value::Value;

/// Controls how numeric values are rendered when a locale is bound to their
/// type and no renderer takes precedence.
///
/// The general-purpose numeric form varies between locales only in its
/// decimal separator, so that is all the descriptor carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    decimal_point: char,
}

impl Locale {
    /// English (United States): `19.5`.
    pub const EN_US: Self = Self::new('.');

    /// German (Germany): `19,5`.
    pub const DE_DE: Self = Self::new(',');

    /// French (France): `19,5`.
    pub const FR_FR: Self = Self::new(',');

    /// Russian (Russia): `19,5`.
    pub const RU_RU: Self = Self::new(',');

    /// Creates a locale with the given decimal separator.
    #[must_use]
    pub const fn new(decimal_point: char) -> Self {
        Self { decimal_point }
    }

    /// Formats a numeric value in this locale's general-purpose form.
    ///
    /// Returns `None` for non-numeric values; the printer reports those as
    /// [`Error::LocaleUnsupported`](crate::Error::LocaleUnsupported).
    ///
    /// # Examples
    ///
    /// ```
    /// use oprint::{Locale, Value};
    ///
    /// assert_eq!(Locale::DE_DE.format(&Value::Float(19.5)), Some("19,5".to_string()));
    /// assert_eq!(Locale::EN_US.format(&Value::Int(42)), Some("42".to_string()));
    /// assert_eq!(Locale::EN_US.format(&Value::Null), None);
    /// ```
    #[must_use]
    pub fn format(self, value: &Value<'_>) -> Option<String> {
        match value {
            Value::Int(v) => Some(v.to_string()),
            Value::Float(v) => {
                let rendered = v.to_string();
                if self.decimal_point == '.' {
                    Some(rendered)
                } else {
                    Some(rendered.replace('.', &self.decimal_point.to_string()))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use test_case::test_case;

    use super::*;

    #[test_case(Locale::EN_US, 19.5, "19.5"; "en us")]
    #[test_case(Locale::DE_DE, 19.5, "19,5"; "de de")]
    #[test_case(Locale::FR_FR, -0.25, "-0,25"; "fr fr negative")]
    #[test_case(Locale::RU_RU, 2.0, "2"; "integral float has no separator")]
    fn formats_floats(locale: Locale, value: f64, expected: &str) {
        assert_eq!(locale.format(&Value::Float(value)), Some(expected.to_string()));
    }

    #[test]
    fn integers_have_no_decimal_separator() {
        assert_eq!(Locale::DE_DE.format(&Value::Int(-1234)), Some("-1234".to_string()));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        assert_eq!(Locale::EN_US.format(&Value::Text(Cow::Borrowed("x"))), None);
        assert_eq!(Locale::EN_US.format(&Value::Null), None);
    }

    #[test]
    fn custom_separator() {
        let locale = Locale::new(';');
        assert_eq!(locale.format(&Value::Float(1.5)), Some("1;5".to_string()));
    }
}
