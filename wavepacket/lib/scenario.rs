//! Initial conditions for a Gaussian packet incident on a square barrier.
//!
//! All quantities are in natural units with ħ = 1. Given a grid size `N`,
//! spacing `dx`, barrier height `V0` and particle mass `m`, the packet and
//! barrier parameters are derived as
//! ```text
//! p0  = √(2 m · 0.2 · V0)     (packet momentum)
//! δp² = p0² / 80              (momentum-space spread)
//! d   = ħ / √(2 δp²)          (packet width)
//! L   = ħ / √(2 m V0)         (length scale)
//! a   = 3 L                   (barrier width)
//! x0  = -60 L                 (packet center)
//! k0  = p0 / ħ                (packet wavenumber)
//! ```
//! so the packet carries a fifth of the barrier height in kinetic energy and
//! starts well to the left of it. The region `|x| > 98` is walled off with a
//! potential of `1e6`.
//!
//! ```
//! use wavepacket::scenario::{ Scenario, generate_x, generate_V_x };
//!
//! let scen = Scenario::default();
//! let ic = scen.generate();
//! assert_eq!(ic.x, generate_x(scen.n, scen.dx));
//! assert_eq!(ic.v_x, generate_V_x(scen.n, scen.dx, scen.v0, scen.m));
//! assert_eq!(ic.psi_x0.len(), 2048);
//! ```

use log::debug;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    barrier::square_barrier,
    packet::gauss_x,
};

/// Default number of grid points.
pub const DEF_N: usize = 1 << 11;

/// Default grid spacing.
pub const DEF_DX: f64 = 0.1;

/// Default barrier height.
pub const DEF_V0: f64 = 1.5;

/// Default particle mass.
pub const DEF_M: f64 = 1.9;

/// Reduced Planck constant in natural units.
pub const HBAR: f64 = 1.0;

/// Packet kinetic energy as a fraction of the barrier height.
pub const ENERGY_FRACTION: f64 = 0.2;

/// Ratio `p0² / δp²` setting the momentum-space spread of the packet.
pub const MOMENTUM_SPREAD_RATIO: f64 = 80.0;

/// Barrier width in units of the length scale `L`.
pub const BARRIER_WIDTH_SCALE: f64 = 3.0;

/// Packet center in units of the length scale `L`.
pub const PACKET_CENTER_SCALE: f64 = -60.0;

/// Potential value used for the hard walls at the edges of the grid.
pub const WALL_POTENTIAL: f64 = 1e6;

/// Positions beyond `±WALL_POSITION` are inside the hard walls.
pub const WALL_POSITION: f64 = 98.0;

/// Packet and barrier parameters derived from a barrier height and particle
/// mass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constants {
    /// Reduced Planck constant.
    pub hbar: f64,
    /// Packet momentum.
    pub p0: f64,
    /// Squared momentum-space spread.
    pub dp2: f64,
    /// Packet width.
    pub d: f64,
    /// Characteristic length scale.
    pub l: f64,
    /// Barrier width.
    pub a_barrier: f64,
    /// Packet center.
    pub x0: f64,
    /// Packet wavenumber.
    pub k0: f64,
}

impl Constants {
    /// Derive all parameters for barrier height `v0` and particle mass `m`.
    ///
    /// Nothing is validated; non-positive `v0` or `m` produce `NaN` or
    /// infinite values.
    pub fn new(v0: f64, m: f64) -> Self {
        let hbar = HBAR;
        let p0 = (2.0 * m * ENERGY_FRACTION * v0).sqrt();
        let dp2 = p0 * p0 * 1.0 / MOMENTUM_SPREAD_RATIO;
        let d = hbar / (2.0 * dp2).sqrt();
        let l = hbar / (2.0 * m * v0).sqrt();
        let a_barrier = BARRIER_WIDTH_SCALE * l;
        let x0 = PACKET_CENTER_SCALE * l;
        let k0 = p0 / hbar;
        Self { hbar, p0, dp2, d, l, a_barrier, x0, k0 }
    }
}

/// Generate the spatial grid `dx * (i - N/2)` for `i = 0, ..., N - 1`.
pub fn generate_x(n: usize, dx: f64) -> nd::Array1<f64> {
    let half = 0.5 * n as f64;
    (0..n).map(|i| dx * (i as f64 - half)).collect()
}

/// Generate the initial Gaussian packet sampled over [`generate_x`]`(n, dx)`.
pub fn generate_psi_x0(n: usize, dx: f64, V0: f64, m: f64)
    -> nd::Array1<C64>
{
    let consts = Constants::new(V0, m);
    debug!("packet parameters: {consts:?}");
    let x = generate_x(n, dx);
    gauss_x(&x, consts.d, consts.x0, consts.k0)
}

/// Generate the potential sampled over [`generate_x`]`(n, dx)`: a square
/// barrier of height `V0` and width `3 L` at the origin, with every point
/// beyond `±98` then overwritten by a hard wall of height `1e6`.
pub fn generate_V_x(n: usize, dx: f64, V0: f64, m: f64) -> nd::Array1<f64> {
    let consts = Constants::new(V0, m);
    debug!("barrier width: {:.6e}", consts.a_barrier);
    let x = generate_x(n, dx);
    let mut V = square_barrier(&x, consts.a_barrier, V0);
    nd::Zip::from(&mut V).and(&x)
        .for_each(|Vk, &xk| {
            if xk < -WALL_POSITION || xk > WALL_POSITION {
                *Vk = WALL_POTENTIAL;
            }
        });
    V
}

/// Input parameters for a barrier-scattering run.
///
/// `Default` gives the baseline scenario `N = 2048`, `dx = 0.1`, `V0 = 1.5`,
/// `m = 1.9`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scenario {
    /// Number of grid points.
    pub n: usize,
    /// Grid spacing.
    pub dx: f64,
    /// Barrier height.
    pub v0: f64,
    /// Particle mass.
    pub m: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self { n: DEF_N, dx: DEF_DX, v0: DEF_V0, m: DEF_M }
    }
}

impl Scenario {
    pub fn new(n: usize, dx: f64, v0: f64, m: f64) -> Self {
        Self { n, dx, v0, m }
    }

    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_dx(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }

    pub fn with_v0(mut self, v0: f64) -> Self {
        self.v0 = v0;
        self
    }

    pub fn with_m(mut self, m: f64) -> Self {
        self.m = m;
        self
    }

    /// Derived packet and barrier parameters.
    pub fn constants(&self) -> Constants { Constants::new(self.v0, self.m) }

    /// Spatial grid; see [`generate_x`].
    pub fn x(&self) -> nd::Array1<f64> { generate_x(self.n, self.dx) }

    /// Initial wavefunction; see [`generate_psi_x0`].
    pub fn psi_x0(&self) -> nd::Array1<C64> {
        generate_psi_x0(self.n, self.dx, self.v0, self.m)
    }

    /// Potential; see [`generate_V_x`].
    pub fn v_x(&self) -> nd::Array1<f64> {
        generate_V_x(self.n, self.dx, self.v0, self.m)
    }

    /// Generate all three aligned arrays at once.
    pub fn generate(&self) -> InitialConditions {
        debug!("generating initial conditions for {self:?}");
        InitialConditions { x: self.x(), psi_x0: self.psi_x0(), v_x: self.v_x() }
    }
}

/// Spatial grid, initial wavefunction, and potential for a single scenario.
///
/// Index `i` in each array refers to the same position `x[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialConditions {
    pub x: nd::Array1<f64>,
    pub psi_x0: nd::Array1<C64>,
    pub v_x: nd::Array1<f64>,
}

impl InitialConditions {
    /// Grid spacing, taken from the first two grid points.
    ///
    /// Returns `None` for grids with fewer than two points.
    pub fn dx(&self) -> Option<f64> {
        (self.x.len() >= 2).then(|| self.x[1] - self.x[0])
    }
}
