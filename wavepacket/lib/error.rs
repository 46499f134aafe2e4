//! Collection of all error types.
//!
//! None of the closed-form generators return errors; invalid numerical input
//! simply propagates as `inf`/`NaN`. Errors only arise where two sampled arrays
//! have to be combined pointwise.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from the sampled-packet analysis functions in
/// [`packet`][crate::packet].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PacketError {
    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// Returned when a coordinate grid is too short to define a spacing.
    #[error("coordinate grid must have at least 2 points; got {0}")]
    GridTooShort(usize),
}

impl PacketError {
    pub(crate) fn check_grid(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::GridTooShort(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_check() {
        let a: nd::Array1<f64> = nd::Array1::zeros(3);
        let b: nd::Array1<f64> = nd::Array1::zeros(4);
        assert_eq!(LengthError::check(&a, &a), Ok(()));
        assert_eq!(LengthError::check(&a, &b), Err(LengthError(3, 4)));
    }

    #[test]
    fn grid_check() {
        assert_eq!(PacketError::check_grid(2), Ok(()));
        assert_eq!(PacketError::check_grid(1), Err(PacketError::GridTooShort(1)));
        let err: PacketError = LengthError(1, 2).into();
        assert_eq!(
            err.to_string(),
            "array length error: encountered arrays with incompatible lengths; got 1 and 2",
        );
    }
}
