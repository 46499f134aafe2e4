//! Numerical tools for inspecting sampled wavefunctions.
//!
//! Everything here works on evenly spaced one-dimensional samples. The FFT
//! helpers are only used to look at a packet in momentum space; nothing in
//! this crate evolves a state in time.

use ndarray::{ self as nd, concatenate, Ix1 };
use num_complex::Complex64 as C64;
use num_traits::Float;
use rustfft as fft;
use crate::error::LengthError;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the norm `∫|q|² dx` of a wavefunction with the trapezoidal rule.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = C64>
{
    trapz(&q.mapv(|qk| qk.norm_sqr()), dx)
}

/// Calculate the inner product `∫ conj(q) p dx` of two wavefunctions.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: f64,
) -> Result<C64, LengthError>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    LengthError::check(q, p)?;
    let n: usize = q.len();
    let inner: C64
        = q.iter().zip(p).skip(1).take(n - 2)
        .fold(C64::new(0.0, 0.0), |acc, (qk, pk)| acc + qk.conj() * pk);
    Ok(
        (dx / 2.0) * (
            q[0].conj() * p[0]
            + 2.0 * inner
            + q[n - 1].conj() * p[n - 1]
        )
    )
}

/// Generate an array of frequency-space coordinates to accompany a FFT of `n`
/// points for sampling interval `dt`, in FFT (not ascending) order.
pub fn fft_freq(n: usize, dt: f64) -> nd::Array1<f64> {
    let n_pos = (n + 1) / 2;
    let scale = (n as f64 * dt).recip();
    let fp: nd::Array1<f64>
        = (0..n_pos).map(|k| k as f64 * scale).collect();
    let fm: nd::Array1<f64>
        = (1..n - n_pos + 1).rev().map(|k| -(k as f64) * scale).collect();
    concatenate!(nd::Axis(0), fp, fm)
}

/// Perform the one-dimensional, complex-valued forward FFT (unnormalized,
/// kernel `exp(-2πi jk/n)`).
pub fn fft<S>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let mut buf: Vec<C64> = x.iter().copied().collect();
    let mut planner = fft::FftPlanner::new();
    let plan = planner.plan_fft_forward(buf.len());
    plan.process(&mut buf);
    nd::Array1::from(buf)
}

/// Return a copy of `x` with indices shifted to map super-Nyquist frequency
/// components to negative frequencies, so that [`fft_freq`] output becomes
/// ascending.
pub fn fft_shift<S, A>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Clone,
{
    let n = x.len();
    let (p, m) = x.view().split_at(nd::Axis(0), (n + 1) / 2);
    concatenate!(nd::Axis(0), m.into_owned(), p.into_owned())
}
