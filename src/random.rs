//! Random matrix fills.
//!
//! The generator is always passed in, so tests can seed a
//! [`rand::rngs::StdRng`] and assert on exact draws; the convenience
//! methods on [`Matrix`] fall back to [`rand::thread_rng`].

use crate::{
    error::{MatrixError, Result},
    matrix::Matrix,
};
use num_traits::FromPrimitive;
use rand::Rng;

/// Default exclusive width of the random range.
pub const DEFAULT_CEILING: f64 = 10.0;
/// Default inclusive lower bound of the random range.
pub const DEFAULT_FLOOR: f64 = 0.0;

/// Returns a matrix shaped like `matrix` with every cell replaced by an
/// independent integer-valued draw from `[floor, floor + ceiling)`.
///
/// Each cell is computed as `floor(u * ceiling) + floor` with `u` drawn
/// uniformly from `[0, 1)`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `ceiling` or `floor` is non-finite, or if
/// a draw is not representable in the cell type.
pub fn randomized<T, R>(
    matrix: &Matrix<T>,
    rng: &mut R,
    ceiling: f64,
    floor: f64,
) -> Result<Matrix<T>>
where
    T: Clone + FromPrimitive,
    R: Rng + ?Sized,
{
    if !ceiling.is_finite() || !floor.is_finite() {
        return Err(MatrixError::invalid_argument(format!(
            "randomize bounds must be finite, got ceiling {ceiling} and floor {floor}"
        )));
    }

    let mut values = Vec::with_capacity(matrix.len());
    for _ in 0..matrix.len() {
        let draw = (rng.gen::<f64>() * ceiling).floor() + floor;
        let cell = T::from_f64(draw).ok_or_else(|| {
            MatrixError::invalid_argument(format!(
                "random draw {draw} is not representable in the cell type"
            ))
        })?;
        values.push(cell);
    }

    Ok(Matrix::from_parts(matrix.rows(), matrix.columns(), values))
}

impl<T: Clone + FromPrimitive> Matrix<T> {
    /// In-place [`randomized`] with a caller-supplied generator.
    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ceiling: f64,
        floor: f64,
    ) -> Result<()> {
        *self = randomized(self, rng, ceiling, floor)?;
        Ok(())
    }

    /// In-place [`randomized`] using the thread-local generator.
    pub fn randomize(&mut self, ceiling: f64, floor: f64) -> Result<()> {
        self.randomize_with(&mut rand::thread_rng(), ceiling, floor)
    }

    /// [`Matrix::randomize`] with the default `[0, 10)` range.
    pub fn randomize_default(&mut self) -> Result<()> {
        self.randomize(DEFAULT_CEILING, DEFAULT_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_randomized_respects_the_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m: Matrix<i32> = Matrix::new(15, 15, 0);
        let out = randomized(&m, &mut rng, 10.0, 0.0).unwrap();
        assert_eq!(out.dims(), (15, 15));
        assert!(out.as_slice().iter().all(|&v| (0..10).contains(&v)));
    }

    #[test]
    fn test_randomized_applies_the_floor_offset() {
        let mut rng = StdRng::seed_from_u64(42);
        let m: Matrix<i32> = Matrix::new(10, 10, 0);
        let out = randomized(&m, &mut rng, 5.0, -2.0).unwrap();
        assert!(out.as_slice().iter().all(|&v| (-2..3).contains(&v)));
    }

    #[test]
    fn test_randomized_is_deterministic_under_a_seed() {
        let m: Matrix<i32> = Matrix::new(4, 4, 0);
        let a = randomized(&m, &mut StdRng::seed_from_u64(1), 10.0, 0.0).unwrap();
        let b = randomized(&m, &mut StdRng::seed_from_u64(1), 10.0, 0.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_randomized_leaves_input_unchanged() {
        let m: Matrix<i32> = Matrix::new(3, 3, 9);
        let mut rng = StdRng::seed_from_u64(3);
        let _ = randomized(&m, &mut rng, 10.0, 0.0).unwrap();
        assert!(m.as_slice().iter().all(|&v| v == 9));
    }

    #[test]
    fn test_randomized_rejects_non_finite_bounds() {
        let m: Matrix<i32> = Matrix::new(2, 2, 0);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(randomized(&m, &mut rng, f64::NAN, 0.0).is_err());
        assert!(randomized(&m, &mut rng, 10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_randomize_with_fills_in_place() {
        let mut m: Matrix<i32> = Matrix::new(15, 15, 0);
        let mut rng = StdRng::seed_from_u64(11);
        m.randomize_with(&mut rng, 10.0, 0.0).unwrap();
        assert!(m.as_slice().iter().all(|&v| (0..10).contains(&v)));
    }

    #[test]
    fn test_randomize_default_range() {
        let mut m: Matrix<i32> = Matrix::new(15, 15, 0);
        m.randomize_default().unwrap();
        assert!(m.as_slice().iter().all(|&v| (0..10).contains(&v)));
    }
}
