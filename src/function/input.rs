//! Parsing of the plotter's text fields.

use crate::function::sampler::{Coefficients, InputError, SampleRange};

/// Parse one numeric field. Surrounding whitespace is ignored and `,` is accepted as
/// the decimal separator.
pub fn parse_field(field: &str, text: &str) -> Result<f64, InputError> {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::InvalidNumber {
            field: field.to_string(),
        }),
    }
}

/// Raw text of the nine plotter inputs, in form order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotInputs {
    pub a1: String,
    pub b1: String,
    pub a2: String,
    pub b2: String,
    pub a3: String,
    pub b3: String,
    pub x0: String,
    pub xk: String,
    pub dx: String,
}

impl PlotInputs {
    /// Fill every field from typed values.
    pub fn from_values(c: &Coefficients, r: &SampleRange) -> Self {
        Self {
            a1: c.a1.to_string(),
            b1: c.b1.to_string(),
            a2: c.a2.to_string(),
            b2: c.b2.to_string(),
            a3: c.a3.to_string(),
            b3: c.b3.to_string(),
            x0: r.x0.to_string(),
            xk: r.xk.to_string(),
            dx: r.dx.to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse all fields, stopping at the first invalid one, then validate the range.
    pub fn parse(&self) -> Result<(Coefficients, SampleRange), InputError> {
        let coefficients = Coefficients {
            a1: parse_field("a1", &self.a1)?,
            b1: parse_field("b1", &self.b1)?,
            a2: parse_field("a2", &self.a2)?,
            b2: parse_field("b2", &self.b2)?,
            a3: parse_field("a3", &self.a3)?,
            b3: parse_field("b3", &self.b3)?,
        };
        let range = SampleRange {
            x0: parse_field("x0", &self.x0)?,
            xk: parse_field("xk", &self.xk)?,
            dx: parse_field("dx", &self.dx)?,
        };
        range.validate()?;

        Ok((coefficients, range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_accepts_comma_and_spaces() {
        assert_eq!(parse_field("a1", " 0,5 "), Ok(0.5));
        assert_eq!(parse_field("a1", "-2e1"), Ok(-20.0));
    }

    #[test]
    fn test_parse_field_names_the_field() {
        assert_eq!(
            parse_field("dx", "abc"),
            Err(InputError::InvalidNumber {
                field: "dx".to_string()
            })
        );
        assert!(parse_field("x0", "").is_err());
        assert!(parse_field("x0", "inf").is_err());
    }

    #[test]
    fn test_round_trip_defaults() {
        let inputs = PlotInputs::from_values(&Coefficients::default(), &SampleRange::default());
        let (c, r) = inputs.parse().unwrap();
        assert_eq!(c, Coefficients::default());
        assert_eq!(r, SampleRange::default());
    }

    #[test]
    fn test_first_invalid_field_reported() {
        let mut inputs =
            PlotInputs::from_values(&Coefficients::default(), &SampleRange::default());
        inputs.b2 = "x".into();
        inputs.xk = "y".into();
        assert_eq!(
            inputs.parse(),
            Err(InputError::InvalidNumber {
                field: "b2".to_string()
            })
        );
    }

    #[test]
    fn test_range_checked_after_parse() {
        let mut inputs =
            PlotInputs::from_values(&Coefficients::default(), &SampleRange::default());
        inputs.dx = "0".into();
        assert_eq!(inputs.parse(), Err(InputError::NonPositiveStep));
        inputs.dx = "0.1".into();
        inputs.x0 = "20".into();
        assert_eq!(inputs.parse(), Err(InputError::EmptyRange));
    }

    #[test]
    fn test_clear_empties_fields() {
        let mut inputs =
            PlotInputs::from_values(&Coefficients::default(), &SampleRange::default());
        inputs.clear();
        assert_eq!(inputs, PlotInputs::default());
        assert!(inputs.parse().is_err());
    }
}
