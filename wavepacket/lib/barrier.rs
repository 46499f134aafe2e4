//! Step and rectangular potential barriers.
//!
//! ```
//! use ndarray as nd;
//! use wavepacket::barrier::{ theta, square_barrier };
//!
//! assert_eq!(theta(&nd::array![-1.0, 0.0, 1.0]), nd::array![0.0, 0.0, 1.0]);
//! assert_eq!(
//!     square_barrier(&nd::array![-1.0, 0.5, 1.5, 3.0], 2.0, 5.0),
//!     nd::array![0.0, 5.0, 5.0, 0.0],
//! );
//! ```

use ndarray as nd;
use crate::Arr1;

// elementwise step with θ(0) = 0
fn step(xk: f64) -> f64 { if xk > 0.0 { 1.0 } else { 0.0 } }

/// Heaviside step function, evaluated elementwise.
///
/// Returns `1.0` where an element is strictly positive and `0.0` everywhere
/// else, including at zero and for `NaN`.
pub fn theta<S>(x: &Arr1<S>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(step)
}

/// Rectangular barrier of the given `width` and `height` with its left edge at
/// the origin:
/// ```text
/// V(x) = height * (θ(x) - θ(x - width))
/// ```
///
/// With the tie-break θ(0) = 0, the barrier occupies the interval
/// `(0, width]`. A zero width gives a barrier that is zero everywhere.
pub fn square_barrier<S>(x: &Arr1<S>, width: f64, height: f64)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| height * (step(xk) - step(xk - width)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theta_values() {
        let x = nd::array![-3.5, -1e-300, 0.0, -0.0, 1e-300, 2.0, f64::NAN];
        assert_eq!(theta(&x), nd::array![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn theta_accepts_views() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-1.0, 1.0, 5);
        assert_eq!(theta(&x.slice(nd::s![2..])), nd::array![0.0, 1.0, 1.0]);
    }

    #[test]
    fn barrier_edges() {
        let x = nd::array![-1.0, 0.0, 1.0, 2.0];
        assert_eq!(square_barrier(&x, 2.0, 5.0), nd::array![0.0, 0.0, 5.0, 5.0]);
        let x = nd::array![0.0, 0.25, 0.75, 1.0, 1.25];
        assert_eq!(square_barrier(&x, 1.0, -2.0), nd::array![0.0, -2.0, -2.0, -2.0, 0.0]);
    }

    #[test]
    fn zero_width_is_empty() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 101);
        assert!(square_barrier(&x, 0.0, 10.0).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn barrier_inside_outside() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 1001);
        let (width, height) = (1.7, 0.3);
        square_barrier(&x, width, height).iter().zip(&x)
            .for_each(|(&v, &xk)| {
                if xk > 0.0 && xk - width <= 0.0 {
                    assert_eq!(v, height);
                } else {
                    assert_eq!(v, 0.0);
                }
            });
    }
}
