//! Scalar fields: 2-D grids of noise values sampled over normalized space.

use crate::error::FieldError;

/// A row-major 2-D grid of `f32` values.
///
/// Fields are produced and consumed by value. After [`ScalarField::normalize`]
/// or [`ScalarField::combine`] every value lies in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl ScalarField {
    /// A field of zeros.
    pub fn zeros(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width as usize * height as usize],
        }
    }

    /// Wrap existing row-major values.
    pub fn from_values(width: u32, height: u32, values: Vec<f32>) -> Result<Self, FieldError> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(FieldError::ValueCount {
                expected,
                found: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Sample `f` at `(x / width, y / height)` for every pixel.
    pub fn generate<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        let inv_w = 1.0 / f64::from(width);
        let inv_h = 1.0 / f64::from(height);
        for y in 0..height {
            let ny = f64::from(y) * inv_h;
            for x in 0..width {
                values.push(f(f64::from(x) * inv_w, ny) as f32);
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Value at pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values[(y * self.width + x) as usize]
    }

    /// Overwrite the value at pixel `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        self.values[(y * self.width + x) as usize] = value;
    }

    /// Row-major values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Smallest and largest value. `(0, 0)` for an empty field.
    pub fn min_max(&self) -> (f32, f32) {
        if self.values.is_empty() {
            return (0.0, 0.0);
        }
        self.values
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Apply `f` to every value.
    pub fn map<F>(mut self, f: F) -> Self
    where
        F: Fn(f32) -> f32,
    {
        for v in &mut self.values {
            *v = f(*v);
        }
        self
    }

    /// Rescale to `[0, 1]` by the observed min/max.
    ///
    /// A constant field becomes all zeros rather than dividing by zero.
    pub fn normalize(mut self) -> Self {
        let (lo, hi) = self.min_max();
        let range = hi - lo;
        if range <= f32::EPSILON {
            self.values.fill(0.0);
            return self;
        }
        for v in &mut self.values {
            *v = ((*v - lo) / range).clamp(0.0, 1.0);
        }
        self
    }

    /// Weighted sum of `fields`, re-normalized to `[0, 1]`.
    ///
    /// `weights = None` weights every field equally. All fields must share
    /// the dimensions of the first one.
    pub fn combine(fields: &[ScalarField], weights: Option<&[f32]>) -> Result<Self, FieldError> {
        let first = fields.first().ok_or(FieldError::Empty)?;

        let equal;
        let weights = match weights {
            Some(w) => w,
            None => {
                equal = vec![1.0 / fields.len() as f32; fields.len()];
                &equal
            }
        };
        if weights.len() != fields.len() {
            return Err(FieldError::WeightCount {
                fields: fields.len(),
                weights: weights.len(),
            });
        }

        let mut result = ScalarField::zeros(first.width, first.height);
        for (field, &weight) in fields.iter().zip(weights) {
            if field.dimensions() != first.dimensions() {
                return Err(FieldError::ShapeMismatch {
                    expected: first.dimensions(),
                    found: field.dimensions(),
                });
            }
            for (acc, &v) in result.values.iter_mut().zip(&field.values) {
                *acc += v * weight;
            }
        }

        Ok(result.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32) -> ScalarField {
        ScalarField::generate(width, height, |x, y| x + y)
    }

    #[test]
    fn test_generate_samples_normalized_coordinates() {
        let field = ScalarField::generate(4, 2, |x, y| x * 10.0 + y);
        assert_eq!(field.dimensions(), (4, 2));
        assert_eq!(field.get(0, 0), 0.0);
        assert!((field.get(2, 0) - 5.0).abs() < 1e-6, "x=2/4 -> 0.5*10");
        assert!((field.get(3, 1) - 8.0).abs() < 1e-6, "x=3/4, y=1/2");
    }

    #[test]
    fn test_normalize_range() {
        let field = ramp(16, 16).normalize();
        let (lo, hi) = field.min_max();
        assert_eq!(lo, 0.0);
        assert!((hi - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_constant_field_is_zero() {
        let field = ScalarField::generate(8, 8, |_, _| 0.42).normalize();
        assert!(field.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = ramp(10, 10).normalize();
        let twice = once.clone().normalize();
        for (a, b) in once.values().iter().zip(twice.values()) {
            assert!((a - b).abs() < 1e-6, "normalize changed {a} to {b}");
        }
    }

    #[test]
    fn test_combine_output_in_unit_range() {
        let a = ScalarField::generate(12, 12, |x, y| (x * 7.0).sin() * y);
        let b = ScalarField::generate(12, 12, |x, y| x - y * 3.0);
        let combined = ScalarField::combine(&[a, b], Some(&[0.7, 0.3])).unwrap();
        for &v in combined.values() {
            assert!((0.0..=1.0).contains(&v), "combined value {v} out of range");
        }
    }

    #[test]
    fn test_combine_default_weights_equal() {
        let a = ramp(6, 6);
        let b = ScalarField::generate(6, 6, |x, _| x);
        let default = ScalarField::combine(&[a.clone(), b.clone()], None).unwrap();
        let explicit = ScalarField::combine(&[a, b], Some(&[0.5, 0.5])).unwrap();
        assert_eq!(default, explicit);
    }

    #[test]
    fn test_combine_empty_is_error() {
        assert_eq!(ScalarField::combine(&[], None), Err(FieldError::Empty));
    }

    #[test]
    fn test_combine_weight_count_mismatch() {
        let err = ScalarField::combine(&[ramp(4, 4), ramp(4, 4)], Some(&[1.0])).unwrap_err();
        assert_eq!(
            err,
            FieldError::WeightCount {
                fields: 2,
                weights: 1
            }
        );
    }

    #[test]
    fn test_combine_shape_mismatch() {
        let err = ScalarField::combine(&[ramp(4, 4), ramp(5, 4)], None).unwrap_err();
        assert_eq!(
            err,
            FieldError::ShapeMismatch {
                expected: (4, 4),
                found: (5, 4)
            }
        );
    }

    #[test]
    fn test_combine_constant_inputs_give_zeros() {
        let a = ScalarField::generate(4, 4, |_, _| 0.3);
        let b = ScalarField::generate(4, 4, |_, _| 0.9);
        let combined = ScalarField::combine(&[a, b], None).unwrap();
        assert!(combined.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_values_checks_length() {
        assert!(ScalarField::from_values(2, 2, vec![0.0; 4]).is_ok());
        assert!(ScalarField::from_values(2, 2, vec![0.0; 3]).is_err());
    }
}
