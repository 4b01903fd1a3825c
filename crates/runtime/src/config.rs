//! Command-line configuration for the runtime.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;

/// Scripted screen-space drag, `DX,DY` in pixels
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Throw {
    pub dx: f64,
    pub dy: f64,
}

impl FromStr for Throw {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (dx, dy) = s
            .split_once(',')
            .with_context(|| format!("expected DX,DY but got {s:?}"))?;
        Ok(Self {
            dx: dx.trim().parse().with_context(|| format!("invalid DX {dx:?}"))?,
            dy: dy.trim().parse().with_context(|| format!("invalid DY {dy:?}"))?,
        })
    }
}

/// Steps the cube demo scene without a window.
#[derive(Parser, Debug)]
#[command(name = "cubebox", version)]
pub struct Args {
    /// Number of simulation steps to run
    #[arg(long, default_value_t = 600)]
    pub steps: usize,

    /// Time step in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f64,

    /// Log cube state every N steps (0 disables progress logs)
    #[arg(long, default_value_t = 60)]
    pub log_every: usize,

    /// Throw cube 0 with a mouse drag of DX,DY pixels before the first step
    #[arg(long, value_name = "DX,DY", allow_hyphen_values = true)]
    pub throw: Option<Throw>,

    /// Nudge cube 0 along z this many times (negative for -z)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub nudge_z: i32,

    /// Sleep between steps so the simulation runs at wall-clock speed
    #[arg(long)]
    pub realtime: bool,
}

/// Validated run settings
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub steps: usize,
    pub dt: f64,
    pub log_every: usize,
    pub throw: Option<Throw>,
    pub nudge_z: i32,
    pub realtime: bool,
}

impl Args {
    /// Check ranges that clap can't express.
    ///
    /// # Errors
    ///
    /// Fails when `dt` is not a positive finite number.
    pub fn validated(&self) -> Result<SimConfig> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            bail!("--dt must be a positive number of seconds, got {}", self.dt);
        }
        Ok(SimConfig {
            steps: self.steps,
            dt: self.dt,
            log_every: self.log_every,
            throw: self.throw,
            nudge_z: self.nudge_z,
            realtime: self.realtime,
        })
    }
}
