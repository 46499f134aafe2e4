use std::{ fs::{ self, File }, path::PathBuf };
use anyhow::Context;
use clap::Parser;
use log::info;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use num_complex::Complex64 as C64;
use wavepacket::{ packet, scenario, utils };

// generate initial conditions for a Gaussian packet incident on a square
// barrier and write them out for an external time-evolution routine

#[derive(Debug, Parser)]
#[command(about = "Generate wave-packet/barrier initial conditions")]
struct Args {
    /// Number of grid points
    #[arg(long, default_value_t = scenario::DEF_N)]
    n: usize,

    /// Grid spacing
    #[arg(long, default_value_t = scenario::DEF_DX)]
    dx: f64,

    /// Barrier height
    #[arg(long, default_value_t = scenario::DEF_V0)]
    v0: f64,

    /// Particle mass
    #[arg(long, default_value_t = scenario::DEF_M)]
    m: f64,

    /// Output directory
    #[arg(long, default_value = "output")]
    outdir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let scen = scenario::Scenario::new(args.n, args.dx, args.v0, args.m);
    let consts = scen.constants();
    info!("{scen:?}");
    info!(
        "packet: x0 = {:.4}, d = {:.4}, k0 = {:.4}; barrier width = {:.4}",
        consts.x0, consts.d, consts.k0, consts.a_barrier,
    );

    let ic = scen.generate();
    if let Some(dx) = ic.dx() {
        info!("numerical norm: {:.10}", utils::wf_norm(&ic.psi_x0, dx));
    }

    let (k, phi_numeric): (nd::Array1<f64>, nd::Array1<C64>)
        = packet::momentum_space(&ic.x, &ic.psi_x0)
        .context("failed to transform the initial state")?;
    let phi_analytic = packet::gauss_k(&k, consts.d, consts.x0, consts.k0);

    fs::create_dir_all(&args.outdir)
        .with_context(|| format!("couldn't create {}", args.outdir.display()))?;
    let outfile = args.outdir.join("barrier.npz");
    let mut npz = NpzWriter::new(File::create(&outfile)?);
    npz.add_array("x", &ic.x)?;
    npz.add_array("v", &ic.v_x)?;
    npz.add_array("psi_x0", &ic.psi_x0)?;
    npz.add_array("k", &k)?;
    npz.add_array("phi_analytic", &phi_analytic)?;
    npz.add_array("phi_numeric", &phi_numeric)?;
    npz.finish()?;
    info!("wrote {}", outfile.display());
    Ok(())
}
