#![allow(non_snake_case)]

//! Provides closed-form initial conditions for one-dimensional wave-packet
//! scattering simulations: a Gaussian packet in position space along with its
//! analytic momentum-space transform, Heaviside step and square-barrier
//! potentials, and generators that sample all of these over a common spatial
//! grid.
//!
//! Nothing here evolves a state in time. The arrays produced by
//! [`scenario`] are meant to be handed directly to a separate time-evolution
//! routine, indexed identically over the grid.
//!
//! Provides:
//! - Wave packets: [`packet::gauss_x`], [`packet::gauss_k`]
//! - Potentials: [`barrier::theta`], [`barrier::square_barrier`]
//! - Grid generators: [`scenario::generate_x`],
//!   [`scenario::generate_psi_x0`], [`scenario::generate_V_x`]
//! - Tools to check sampled packets: [`utils`], [`packet::momentum_space`]
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod barrier;
pub mod packet;
pub mod scenario;
pub mod utils;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
