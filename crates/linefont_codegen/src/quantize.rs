//! Conversion of font units to fixed-point coordinates
use crate::errors::{CodegenError, CodegenResult};

/// Marks the end of a subpath, and of a glyph. Never a valid coordinate.
pub const SENTINEL: i16 = 0x7FFF;

/// Font units per output unit
pub const DEFAULT_SCALE: f64 = 50.0;

/// Divides font units by a fixed scale and truncates toward zero.
///
/// Values that do not fit in an `i16`, or that would collide with [`SENTINEL`], are an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    scale: f64,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

impl Quantizer {
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn quantize(&self, value: f64) -> CodegenResult<i16> {
        let scaled = (value / self.scale).trunc();
        if !(f64::from(i16::MIN)..f64::from(SENTINEL)).contains(&scaled) {
            return Err(CodegenError::OutOfRange {
                value,
                quantized: scaled,
            });
        }
        Ok(scaled as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(123.4, 2; "advance")]
    #[test_case(-10.5, 0; "toward zero not floor")]
    #[test_case(-50.0, -1; "negative whole")]
    #[test_case(-99.9, -1; "negative fraction")]
    #[test_case(49.999, 0; "just below scale")]
    #[test_case(50.0, 1; "exact scale")]
    #[test_case(0.0, 0; "zero")]
    #[test_case(1000.0, 20; "em")]
    fn default_scale(value: f64, expected: i16) {
        assert_eq!(Quantizer::default().quantize(value), Ok(expected));
    }

    #[test]
    fn custom_scale() {
        let quantizer = Quantizer::new(10.0);
        assert_eq!(quantizer.quantize(123.4), Ok(12));
        assert_eq!(quantizer.quantize(-123.4), Ok(-12));
        assert_eq!(quantizer.scale(), 10.0);
    }

    #[test_case(-1_638_400.0, -32768; "lowest")]
    #[test_case(1_638_349.9, 32766; "highest")]
    fn range_limits(value: f64, expected: i16) {
        assert_eq!(Quantizer::default().quantize(value), Ok(expected));
    }

    #[test_case(1_638_350.0; "sentinel")]
    #[test_case(2_000_000.0; "huge")]
    #[test_case(-1_638_450.0; "below minimum")]
    #[test_case(f64::INFINITY; "infinite")]
    #[test_case(f64::NAN; "nan")]
    fn out_of_range(value: f64) {
        let err = Quantizer::default().quantize(value).unwrap_err();
        assert!(matches!(err, CodegenError::OutOfRange { .. }));
    }
}
