//! Gaussian wave packets in position and momentum space.
//!
//! ```
//! use ndarray as nd;
//! use wavepacket::{ packet, utils };
//!
//! let x: nd::Array1<f64> = nd::Array1::linspace(-20.0, 20.0, 4001);
//! let dx = x[1] - x[0];
//! let psi = packet::gauss_x(&x, 1.5, -2.0, 3.0);
//! assert!((utils::wf_norm(&psi, dx) - 1.0).abs() < 1e-9);
//! ```

use std::f64::consts::{ PI, TAU };
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ LengthError, PacketError },
    utils::{ fft, fft_freq, fft_shift, trapz },
};

pub type PacketResult<T> = Result<T, PacketError>;

/// Evaluate a normalized Gaussian wave packet of width `a`, centered at `x0`,
/// with wavenumber `k0`:
/// ```text
/// ψ(x) = (a √π)^(-1/2) exp(-(x - x0)² / 2a² + i k0 x)
/// ```
///
/// `a` is not checked; non-positive widths give meaningless (possibly `NaN`)
/// values.
pub fn gauss_x<S>(x: &Arr1<S>, a: f64, x0: f64, k0: f64) -> nd::Array1<C64>
where S: nd::Data<Elem = f64>
{
    let norm = (a * PI.sqrt()).powf(-0.5);
    x.mapv(|xk| {
        norm * C64::new(-0.5 * ((xk - x0) / a).powi(2), xk * k0).exp()
    })
}

/// Evaluate the analytic Fourier transform of [`gauss_x`] with the same
/// parameters over the momentum-space coordinates `k`:
/// ```text
/// φ(k) = (a / √π)^(1/2) exp(-a² (k - k0)² / 2 - i (k - k0) x0)
/// ```
pub fn gauss_k<S>(k: &Arr1<S>, a: f64, x0: f64, k0: f64) -> nd::Array1<C64>
where S: nd::Data<Elem = f64>
{
    let norm = (a / PI.sqrt()).powf(0.5);
    k.mapv(|kk| {
        norm * C64::new(-0.5 * (a * (kk - k0)).powi(2), -(kk - k0) * x0).exp()
    })
}

/// Compute `|ψ|²` elementwise.
pub fn probability_density<S>(psi: &Arr1<S>) -> nd::Array1<f64>
where S: nd::Data<Elem = C64>
{
    psi.mapv(|qk| qk.norm_sqr())
}

/// Compute the position expectation value `∫ x |ψ|² dx / ∫ |ψ|² dx` of a
/// sampled wavefunction.
///
/// *Panics if the arrays have length less than 2*.
pub fn expectation_x<S, T>(x: &Arr1<S>, psi: &Arr1<T>, dx: f64)
    -> Result<f64, LengthError>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = C64>,
{
    LengthError::check(x, psi)?;
    let rho = probability_density(psi);
    Ok(trapz(&(&rho * x), dx) / trapz(&rho, dx))
}

/// Numerically transform a wavefunction sampled over the evenly spaced
/// coordinates `x` into momentum space, using the same convention as
/// [`gauss_k`]:
/// ```text
/// φ(k) = (2π)^(-1/2) ∫ ψ(x) exp(-i k x) dx
/// ```
///
/// Returns the momentum coordinates in ascending order along with the
/// transformed values. The spacing of `x` is taken from its first two
/// elements.
pub fn momentum_space<S, T>(x: &Arr1<S>, psi: &Arr1<T>)
    -> PacketResult<(nd::Array1<f64>, nd::Array1<C64>)>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = C64>,
{
    LengthError::check(x, psi)?;
    let n = x.len();
    PacketError::check_grid(n)?;
    let dx = x[1] - x[0];
    let x_first = x[0];
    let k: nd::Array1<f64> = fft_freq(n, dx).mapv(|f| TAU * f);
    let scale = dx / TAU.sqrt();
    let mut phi = fft(psi);
    nd::Zip::from(&mut phi).and(&k)
        .for_each(|phik, &kk| {
            *phik *= scale * C64::new(0.0, -kk * x_first).exp();
        });
    Ok((fft_shift(&k), fft_shift(&phi)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::utils::wf_norm;

    #[test]
    fn gauss_x_peak_and_phase() {
        let a = 2.0;
        let x = nd::array![1.0];
        let psi = gauss_x(&x, a, 1.0, PI / 2.0);
        let peak = (a * PI.sqrt()).powf(-0.5);
        assert_abs_diff_eq!(psi[0].re, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(psi[0].im, peak, epsilon = 1e-12);
    }

    #[test]
    fn gauss_x_is_normalized() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-40.0, 40.0, 8001);
        let dx = x[1] - x[0];
        let psi = gauss_x(&x, 3.0, 5.0, -1.2);
        assert_abs_diff_eq!(wf_norm(&psi, dx), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn gauss_k_is_normalized() {
        let k: nd::Array1<f64> = nd::Array1::linspace(-10.0, 10.0, 4001);
        let dk = k[1] - k[0];
        let phi = gauss_k(&k, 1.0, 3.0, 2.0);
        assert_abs_diff_eq!(wf_norm(&phi, dk), 1.0, epsilon = 1e-9);
        let peak = phi.iter()
            .map(|p| p.norm())
            .fold(0.0, f64::max);
        assert_abs_diff_eq!(peak, PI.powf(-0.25), epsilon = 1e-3);
    }

    #[test]
    fn bad_width_propagates_nan() {
        let psi = gauss_x(&nd::array![0.5], 0.0, 0.0, 0.0);
        assert!(psi[0].re.is_nan() || psi[0].re.is_infinite());
        let psi = gauss_x(&nd::array![0.5], -1.0, 0.0, 0.0);
        assert!(psi[0].re.is_nan());
    }

    #[test]
    fn momentum_space_matches_analytic() {
        let (a, x0, k0) = (1.0, 0.5, 2.0);
        let x: nd::Array1<f64>
            = (0..1024).map(|i| 0.05 * (i as f64 - 512.0)).collect();
        let psi = gauss_x(&x, a, x0, k0);
        let (k, phi) = momentum_space(&x, &psi).unwrap();
        assert_eq!(k.len(), x.len());
        assert!(k.iter().zip(k.iter().skip(1)).all(|(l, r)| l < r));
        let expected = gauss_k(&k, a, x0, k0);
        phi.iter().zip(&expected)
            .for_each(|(num, ana)| {
                assert_abs_diff_eq!(num.re, ana.re, epsilon = 1e-8);
                assert_abs_diff_eq!(num.im, ana.im, epsilon = 1e-8);
            });
    }

    #[test]
    fn momentum_space_errors() {
        let x = nd::array![0.0, 1.0, 2.0];
        let psi: nd::Array1<C64> = nd::Array1::zeros(2);
        assert_eq!(
            momentum_space(&x, &psi),
            Err(PacketError::Length(LengthError(3, 2))),
        );
        let x = nd::array![0.0];
        let psi: nd::Array1<C64> = nd::Array1::zeros(1);
        assert_eq!(
            momentum_space(&x, &psi),
            Err(PacketError::GridTooShort(1)),
        );
    }

    #[test]
    fn expectation_tracks_center() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-30.0, 30.0, 6001);
        let dx = x[1] - x[0];
        let psi = gauss_x(&x, 1.0, -4.0, 7.0);
        assert_abs_diff_eq!(expectation_x(&x, &psi, dx).unwrap(), -4.0, epsilon = 1e-9);
        assert!(expectation_x(&x, &psi.slice(nd::s![1..]), dx).is_err());
    }
}
