//! Play-field bounds

use serde::{Deserialize, Serialize};

use crate::consts::MAX_RADIUS;
use crate::error::FieldError;

/// Fixed bounds of a match. `y = 0` is the top edge, balloons rise toward it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    width: f32,
    height: f32,
}

impl Field {
    /// Validate and build a field. The width must fit the largest balloon.
    pub fn new(width: f32, height: f32) -> Result<Self, FieldError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(FieldError::NonPositive { width, height });
        }
        if width < MAX_RADIUS * 2.0 {
            return Err(FieldError::TooNarrow {
                width,
                max_radius: MAX_RADIUS,
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Whether a circle centered at `x` lies strictly between the side walls
    #[inline]
    pub fn fits_horizontally(&self, x: f32, radius: f32) -> bool {
        x > radius && x < self.width - radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_rejects_bad_dimensions() {
        assert!(matches!(Field::new(0.0, 600.0), Err(FieldError::NonPositive { .. })));
        assert!(matches!(Field::new(400.0, -1.0), Err(FieldError::NonPositive { .. })));
        assert!(matches!(Field::new(f32::NAN, 600.0), Err(FieldError::NonPositive { .. })));
        assert!(matches!(Field::new(99.0, 600.0), Err(FieldError::TooNarrow { .. })));
        assert!(Field::new(100.0, 600.0).is_ok());
    }

    #[test]
    fn test_fits_horizontally_is_strict() {
        let field = Field::new(400.0, 600.0).unwrap();
        assert!(field.fits_horizontally(200.0, 20.0));
        assert!(!field.fits_horizontally(20.0, 20.0));
        assert!(!field.fits_horizontally(380.0, 20.0));
        assert!(field.fits_horizontally(20.5, 20.0));
    }
}
