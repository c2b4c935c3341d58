//! Bilinear 2D interpolation for surfaces.

use crate::types::InterpolationError;
use num_traits::Float;

/// Bilinear interpolator for 2D grid data.
///
/// Stores a grid of values z(x, y) in flat row-major order and performs
/// bilinear interpolation at arbitrary (x, y) coordinates within the grid.
/// Suited to volatility surfaces and other smooth 2D market data.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Grid Layout
///
/// Values are stored flat: `zs[i * ys.len() + j] = z(xs[i], ys[j])` where
/// `xs` defines the row axis and `ys` the column axis. Both axes must be
/// strictly increasing.
///
/// # Example
///
/// ```
/// use pathsim_core::math::interpolators::BilinearInterpolator;
///
/// let interp = BilinearInterpolator::<f64>::new(
///     vec![0.0, 1.0, 2.0],
///     vec![0.0, 1.0],
///     vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
/// )
/// .unwrap();
///
/// let z = interp.interpolate(0.5, 0.5).unwrap();
/// assert!((z - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BilinearInterpolator<T: Float> {
    /// Row-axis coordinates, strictly increasing
    xs: Vec<T>,
    /// Column-axis coordinates, strictly increasing
    ys: Vec<T>,
    /// Grid values in row-major order
    zs: Vec<T>,
}

impl<T: Float> BilinearInterpolator<T> {
    /// Construct a bilinear interpolator from grid data.
    ///
    /// # Arguments
    ///
    /// * `xs` - Row-axis coordinates (strictly increasing, length >= 2)
    /// * `ys` - Column-axis coordinates (strictly increasing, length >= 2)
    /// * `zs` - Flat row-major grid values, length `xs.len() * ys.len()`
    ///
    /// # Returns
    ///
    /// * `Ok(BilinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points on an axis
    /// * `Err(InterpolationError::NonMonotonicData)` - Axis not strictly increasing
    /// * `Err(InterpolationError::InvalidInput)` - Grid size does not match the axes
    pub fn new(xs: Vec<T>, ys: Vec<T>, zs: Vec<T>) -> Result<Self, InterpolationError> {
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }
        if ys.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: ys.len(),
                need: 2,
            });
        }
        if zs.len() != xs.len() * ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "Grid size ({}) must equal rows ({}) times columns ({})",
                zs.len(),
                xs.len(),
                ys.len()
            )));
        }

        if let Some(index) = first_non_increasing(&xs) {
            return Err(InterpolationError::NonMonotonicData { index });
        }
        if let Some(index) = first_non_increasing(&ys) {
            return Err(InterpolationError::NonMonotonicData { index });
        }

        Ok(Self { xs, ys, zs })
    }

    /// Interpolate the value at point (x, y).
    ///
    /// # Formula
    ///
    /// ```text
    /// z = (1-u)(1-v)*z00 + u*(1-v)*z10 + (1-u)*v*z01 + u*v*z11
    /// ```
    ///
    /// where `u` and `v` are the normalised coordinates inside the grid cell.
    ///
    /// # Returns
    ///
    /// * `Ok(z)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - If (x, y) lies outside the grid
    pub fn interpolate(&self, x: T, y: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain_x();
        if x < x_min || x > x_max {
            return Err(out_of_bounds(x, x_min, x_max));
        }
        let (y_min, y_max) = self.domain_y();
        if y < y_min || y > y_max {
            return Err(out_of_bounds(y, y_min, y_max));
        }

        let i = cell_index(&self.xs, x);
        let j = cell_index(&self.ys, y);

        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[j], self.ys[j + 1]);

        let z00 = self.value(i, j);
        let z10 = self.value(i + 1, j);
        let z01 = self.value(i, j + 1);
        let z11 = self.value(i + 1, j + 1);

        let u = (x - x0) / (x1 - x0);
        let v = (y - y0) / (y1 - y0);

        let one = T::one();
        Ok((one - u) * (one - v) * z00 + u * (one - v) * z10 + (one - u) * v * z01 + u * v * z11)
    }

    /// Return the valid interpolation domain for x.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Return the valid interpolation domain for y.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    #[inline]
    fn value(&self, i: usize, j: usize) -> T {
        self.zs[i * self.ys.len() + j]
    }
}

/// Index of the first axis element that fails strict monotonicity, if any.
fn first_non_increasing<T: Float>(axis: &[T]) -> Option<usize> {
    (1..axis.len()).find(|&i| axis[i] <= axis[i - 1])
}

/// Lower cell index for a query inside the axis domain (binary search).
#[inline]
fn cell_index<T: Float>(axis: &[T], q: T) -> usize {
    let pos = axis.partition_point(|&a| a <= q);
    pos.clamp(1, axis.len() - 1) - 1
}

fn out_of_bounds<T: Float>(x: T, min: T, max: T) -> InterpolationError {
    InterpolationError::OutOfBounds {
        x: x.to_f64().unwrap_or(f64::NAN),
        min: min.to_f64().unwrap_or(f64::NAN),
        max: max.to_f64().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> BilinearInterpolator<f64> {
        BilinearInterpolator::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![1.0, 2.0, 3.0, 4.0])
            .unwrap()
    }

    #[test]
    fn test_new_minimum_grid() {
        assert!(
            BilinearInterpolator::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0; 4]).is_ok()
        );
    }

    #[test]
    fn test_new_insufficient_x_axis() {
        let result = BilinearInterpolator::new(vec![0.0], vec![0.0, 1.0], vec![0.0, 1.0]);
        match result.unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            other => panic!("Expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_new_insufficient_y_axis() {
        let result = BilinearInterpolator::new(vec![0.0, 1.0], vec![0.0], vec![0.0, 1.0]);
        assert!(matches!(
            result.unwrap_err(),
            InterpolationError::InsufficientData { got: 1, need: 2 }
        ));
    }

    #[test]
    fn test_new_grid_size_mismatch() {
        let result = BilinearInterpolator::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0; 3]);
        match result.unwrap_err() {
            InterpolationError::InvalidInput(msg) => assert!(msg.contains("Grid size")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_new_non_monotonic_x_axis() {
        let result =
            BilinearInterpolator::new(vec![0.0, 2.0, 1.0], vec![0.0, 1.0], vec![0.0; 6]);
        match result.unwrap_err() {
            InterpolationError::NonMonotonicData { index } => assert_eq!(index, 2),
            other => panic!("Expected NonMonotonicData, got {:?}", other),
        }
    }

    #[test]
    fn test_new_duplicate_y_axis() {
        let result =
            BilinearInterpolator::new(vec![0.0, 1.0], vec![0.0, 0.0, 1.0], vec![0.0; 6]);
        assert!(matches!(
            result.unwrap_err(),
            InterpolationError::NonMonotonicData { index: 1 }
        ));
    }

    #[test]
    fn test_interpolate_at_corners() {
        let interp = unit_square();
        assert!((interp.interpolate(0.0, 0.0).unwrap() - 1.0).abs() < 1e-12);
        assert!((interp.interpolate(0.0, 1.0).unwrap() - 2.0).abs() < 1e-12);
        assert!((interp.interpolate(1.0, 0.0).unwrap() - 3.0).abs() < 1e-12);
        assert!((interp.interpolate(1.0, 1.0).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_interpolate_at_center() {
        // Average of the four corners.
        let interp = unit_square();
        let z = interp.interpolate(0.5, 0.5).unwrap();
        assert!((z - 2.5).abs() < 1e-12, "Expected 2.5, got {}", z);
    }

    #[test]
    fn test_interpolate_along_edges() {
        let interp = unit_square();
        assert!((interp.interpolate(0.0, 0.5).unwrap() - 1.5).abs() < 1e-12);
        assert!((interp.interpolate(0.5, 0.0).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_interpolate_recovers_plane() {
        // Bilinear interpolation is exact for z = x + y.
        let xs = vec![0.0, 1.0, 2.0];
        let ys = vec![0.0, 1.0, 2.0];
        let mut zs = Vec::new();
        for &x in &xs {
            for &y in &ys {
                zs.push(x + y);
            }
        }
        let interp = BilinearInterpolator::new(xs, ys, zs).unwrap();

        for (x, y) in [(0.5, 0.5), (1.5, 0.5), (0.25, 1.75), (2.0, 0.0)] {
            let z = interp.interpolate(x, y).unwrap();
            assert!(
                (z - (x + y)).abs() < 1e-12,
                "At ({}, {}), expected {}, got {}",
                x,
                y,
                x + y,
                z
            );
        }
    }

    #[test]
    fn test_interpolate_out_of_bounds() {
        let interp = unit_square();
        for (x, y) in [(-0.1, 0.5), (1.1, 0.5), (0.5, -0.1), (0.5, 1.1)] {
            match interp.interpolate(x, y) {
                Err(InterpolationError::OutOfBounds { .. }) => {}
                other => panic!("Expected OutOfBounds at ({}, {}), got {:?}", x, y, other),
            }
        }
    }

    #[test]
    fn test_domains() {
        let interp = BilinearInterpolator::new(
            vec![1.0, 2.0, 3.0],
            vec![10.0, 20.0],
            vec![0.0; 6],
        )
        .unwrap();
        assert_eq!(interp.domain_x(), (1.0, 3.0));
        assert_eq!(interp.domain_y(), (10.0, 20.0));
    }

    #[test]
    fn test_with_f32() {
        let interp = BilinearInterpolator::new(
            vec![0.0_f32, 1.0],
            vec![0.0_f32, 1.0],
            vec![0.0_f32, 1.0, 2.0, 3.0],
        )
        .unwrap();
        let z = interp.interpolate(0.5_f32, 0.5_f32).unwrap();
        assert!(z.is_finite());
    }
}
