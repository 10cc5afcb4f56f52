//! Single-spin-flip Metropolis sampling at a fixed temperature.

#![allow(non_snake_case)]

use auto_args::AutoArgs;
use rand::{Rng, SeedableRng};

use crate::ising::{Ising, IsingParams};
use crate::mc::plugin;
use crate::prettyfloat::PrettyFloat;
use crate::rng::MyRng;

/// The parameters needed to configure a simulation.
#[derive(Debug, AutoArgs, Clone)]
pub struct MCParams {
    /// The temperature of interest
    pub _temperature: Temperature,
    /// How many production sweeps to sample over (default 10000)
    pub production: Option<u64>,
    /// How many thermalization sweeps to discard first (default 500)
    pub thermalization: Option<u64>,
    /// How many production sweeps between samples (default 100)
    pub sample_stride: Option<u64>,
    /// The seed for the random number generator
    pub seed: Option<u64>,
    /// report input
    pub _report: plugin::ReportParams,
}

impl Default for MCParams {
    fn default() -> Self {
        MCParams {
            _temperature: Temperature::Beta(1.0),
            production: None,
            thermalization: None,
            sample_stride: None,
            seed: None,
            _report: plugin::ReportParams::default(),
        }
    }
}

/// The temperature of interest, specified either directly or inversely.
#[derive(Debug, AutoArgs, Clone, Copy, PartialEq)]
pub enum Temperature {
    /// The temperature kT/J
    T(f64),
    /// The inverse temperature J/kT
    Beta(f64),
}

impl Temperature {
    /// The inverse temperature.
    pub fn beta(self) -> f64 {
        match self {
            Temperature::T(t) => 1.0 / t,
            Temperature::Beta(b) => b,
        }
    }
}

/// A configuration that cannot be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The lattice needs at least one site.
    ZeroSide,
    /// A sample every zero sweeps is not a schedule.
    ZeroStride,
    /// The schedule would finish without taking any samples.
    NoSamples {
        /// The configured number of production sweeps.
        production: u64,
        /// The configured number of sweeps between samples.
        stride: u64,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::ZeroSide => write!(f, "lattice side must be at least 1"),
            ConfigError::ZeroStride => write!(f, "sample stride must be at least 1"),
            ConfigError::NoSamples { production, stride } => write!(
                f,
                "configuration takes no samples: {} production sweeps with a sample every {}",
                production, stride
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Running sums of the sampled observables.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Accumulator {
    /// The total of |m| over samples
    m_total: f64,
    /// The total of m squared over samples
    msqr_total: f64,
    /// The total of e over samples
    e_total: f64,
    /// The total of e squared over samples
    esqr_total: f64,
    /// How many samples have been folded in
    samples: u64,
}

impl Accumulator {
    /// Fold one sample into the running sums.  The sign of m is
    /// discarded here: only |m| is physical for this Hamiltonian.
    pub fn accumulate(&mut self, m: f64, e: f64) {
        let m = m.abs();
        self.m_total += m;
        self.msqr_total += m * m;
        self.e_total += e;
        self.esqr_total += e * e;
        self.samples += 1;
    }

    /// The number of samples folded in so far.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Means and variances of the samples, or None if there were none.
    /// Variances are E[X^2] - E[X]^2.
    pub fn finalize(&self, temperature: f64) -> Option<Observables> {
        if self.samples == 0 {
            return None;
        }
        let n = self.samples as f64;
        let mean_m = self.m_total / n;
        let mean_e = self.e_total / n;
        Some(Observables {
            T: temperature,
            mean_m,
            var_m: self.msqr_total / n - mean_m * mean_m,
            mean_e,
            var_e: self.esqr_total / n - mean_e * mean_e,
        })
    }
}

/// The equilibrium statistics estimated by one run.
///
/// The energy convention matches the sampler: aligned bonds count
/// positively with J = 1, so e approaches +2 in the fully ordered
/// limit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Observables {
    /// The temperature 1/beta
    pub T: f64,
    /// The mean |magnetization| per site
    pub mean_m: f64,
    /// The variance of |magnetization|
    pub var_m: f64,
    /// The mean energy per site
    pub mean_e: f64,
    /// The variance of the energy per site
    pub var_e: f64,
}

impl std::fmt::Display for Observables {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            PrettyFloat(self.T),
            PrettyFloat(self.mean_m),
            PrettyFloat(self.var_m),
            PrettyFloat(self.mean_e),
            PrettyFloat(self.var_e)
        )
    }
}

/// A fixed-temperature Metropolis simulation of one lattice.
#[derive(Debug)]
pub struct MC {
    /// The lattice being sampled
    pub system: Ising,
    /// The inverse temperature
    pub beta: f64,
    // Boltzmann factors for the two positive flip costs.
    p4: f64,
    p8: f64,
    /// Sweeps to discard before sampling begins
    thermalization: u64,
    /// Sweeps to sample over
    production: u64,
    /// Production sweeps between samples
    sample_stride: u64,
    /// The number of full sweeps completed, both phases included
    pub sweeps: u64,
    /// The number of accepted flips
    pub accepted: u64,
    /// Running sums of the sampled observables
    pub accumulator: Accumulator,
    /// The random number generator
    pub rng: MyRng,
    /// Progress reporting
    report: plugin::Report,
}

impl MC {
    /// Construct a validated simulation from its parameters.
    ///
    /// Extreme temperatures are legitimate configurations, not errors:
    /// beta = 0 accepts every flip (infinite-temperature dynamics), and
    /// a beta large enough to underflow the Boltzmann factors rejects
    /// every unfavorable flip (a zero-temperature quench).
    pub fn from_params(params: MCParams, lattice: IsingParams) -> Result<MC, ConfigError> {
        if lattice.L == 0 {
            return Err(ConfigError::ZeroSide);
        }
        let sample_stride = params.sample_stride.unwrap_or(100);
        if sample_stride == 0 {
            return Err(ConfigError::ZeroStride);
        }
        let production = params.production.unwrap_or(10_000);
        if production / sample_stride == 0 {
            return Err(ConfigError::NoSamples {
                production,
                stride: sample_stride,
            });
        }
        let beta = params._temperature.beta();
        let mut rng = MyRng::seed_from_u64(params.seed.unwrap_or(0));
        let system = if lattice.random {
            Ising::random(lattice.L, &mut rng)
        } else {
            Ising::ordered(lattice.L)
        };
        Ok(MC {
            system,
            beta,
            p4: (-4.0 * beta).exp(),
            p8: (-8.0 * beta).exp(),
            thermalization: params.thermalization.unwrap_or(500),
            production,
            sample_stride,
            sweeps: 0,
            accepted: 0,
            accumulator: Accumulator::default(),
            rng,
            report: plugin::Report::from(params._report),
        })
    }

    /// The temperature 1/beta.
    pub fn temperature(&self) -> f64 {
        1.0 / self.beta
    }

    /// Perform one full sweep, visiting every site in order.
    ///
    /// Later sites see the flips already made earlier in the same sweep
    /// (sequential update; a synchronous update would change the
    /// dynamics).  The generator is advanced only at sites whose flip
    /// would cost energy.
    pub fn sweep_once(&mut self) {
        for i in 0..self.system.num_sites() {
            let de = self.system.delta_energy(i);
            if de <= 0 {
                // Downhill and energy-neutral flips always happen.
                self.system.flip(i);
                self.accepted += 1;
            } else {
                debug_assert!(de == 4 || de == 8);
                let p = if de == 4 { self.p4 } else { self.p8 };
                if self.rng.gen::<f64>() < p {
                    self.system.flip(i);
                    self.accepted += 1;
                }
            }
        }
        self.sweeps += 1;
    }

    /// Run the whole simulation: thermalize, then sample periodically
    /// during production, then summarize.
    pub fn run(&mut self) -> Observables {
        let total = self.thermalization + self.production;
        for _ in 0..self.thermalization {
            self.sweep_once();
            self.report.tick(self.sweeps, total);
        }
        for s in 1..=self.production {
            self.sweep_once();
            if s % self.sample_stride == 0 {
                let m = self.system.magnetization();
                let e = self.system.energy_per_site();
                self.accumulator.accumulate(m, e);
            }
            self.report.tick(self.sweeps, total);
        }
        self.report
            .finish(self.accepted, self.sweeps * self.system.num_sites() as u64);
        match self.accumulator.finalize(self.temperature()) {
            Some(observables) => observables,
            None => unreachable!("from_params guarantees at least one sample"),
        }
    }
}
