//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Gaussian packets](#gaussian-packets)
//! - [Barrier and walls](#barrier-and-walls)
//! - [Units and parameters](#units-and-parameters)
//! - [Sampling](#sampling)
//!
//! # Background
//! A standard demonstration of quantum tunneling is to send a localized wave
//! packet toward a potential barrier whose height exceeds the packet's mean
//! kinetic energy, and to watch part of the packet leak through. The
//! one-dimensional time-dependent Schrödinger equation
//! ```text
//!    ħ² ∂²                               ∂
//! - --- --- ψ(x, t) + V(x) ψ(x, t) = i ħ -- ψ(x, t)
//!   2 m ∂x²                              ∂t
//! ```
//! needs two inputs for such a run: the initial state *ψ*(*x*, 0) and the
//! potential *V*(*x*), both sampled over a finite grid. This crate supplies
//! exactly these (plus the grid itself) and leaves the time evolution to
//! other code.
//!
//! # Gaussian packets
//! The initial state is a Gaussian envelope of width *a* centered at *x*₀,
//! modulated by a plane wave of wavenumber *k*₀,
//! ```text
//!                -1/2      (x - x0)²
//! ψ(x) = (a √π)      exp(- --------- + i k0 x)
//!                             2 a²
//! ```
//! normalized so that ∫|*ψ*|² d*x* = 1 over the whole real line. Its Fourier
//! transform, with the convention
//! ```text
//!           1
//! φ(k) = ------ ∫ ψ(x) exp(-i k x) dx
//!        √(2 π)
//! ```
//! is again Gaussian,
//! ```text
//!                1/2       a² (k - k0)²
//! φ(k) = (a / √π)    exp(- ------------ - i (k - k0) x0)
//!                               2
//! ```
//! with width 1/*a* about *k*₀. The product of the two widths is fixed, so a
//! packet that is narrow in space is broad in momentum and vice versa.
//!
//! On a grid with finite extent, the sampled packet is only normalized to the
//! extent that its tails are negligible at the grid edges.
//! [`packet::momentum_space`][crate::packet::momentum_space] evaluates the
//! transform above numerically so that the sampled state can be compared to
//! the analytic *φ*.
//!
//! # Barrier and walls
//! The barrier is built from the Heaviside step
//! ```text
//! θ(x) = 1 if x > 0
//!        0 otherwise
//! ```
//! as *V*(*x*) = *V*₀ (*θ*(*x*) - *θ*(*x* - *w*)). Since *θ*(0) = 0, the
//! barrier covers the half-open interval (0, *w*].
//!
//! A grid of finite extent needs some treatment of its edges. Here the
//! potential is simply set to a very large value (10⁶) for |*x*| > 98, which
//! reflects anything that reaches the edges of the default grid. The walls are
//! applied after the barrier, so a barrier wide enough to reach into the wall
//! region is overwritten there.
//!
//! # Units and parameters
//! Everything is expressed in natural units with *ħ* = 1. A barrier of height
//! *V*₀ and a particle of mass *m* define the length scale
//! ```text
//!          ħ
//! L = ----------
//!     √(2 m V0)
//! ```
//! which is the decay length of a zero-energy state inside the barrier. The
//! barrier is given width 3 *L* and the packet starts at *x*₀ = -60 *L*, well
//! to its left. The packet momentum is chosen so that the mean kinetic energy
//! is a fifth of the barrier height,
//! ```text
//! p0 = √(2 m · 0.2 V0)
//! ```
//! and its momentum spread is fixed by *δp*² = *p*₀² / 80, giving a spatial
//! width *d* = *ħ* / √(2 *δp*²). With these choices a fraction of the packet
//! tunnels through the barrier while the rest is reflected.
//!
//! # Sampling
//! The grid is `x[i] = dx (i - N/2)` for `i` in `0..N`, so it contains the
//! origin and is shifted by one spacing toward negative `x`. For the default
//! `N = 2048`, `dx = 0.1`, this covers [-102.4, 102.3], which puts the
//! walls a few spacings inside each edge.
//!
//! The grid spacing limits the wavenumbers that can be represented to
//! |*k*| < *π* / *dx*; the packet's *k*₀ and spread must lie well within this
//! range for the sampled state to be meaningful.
