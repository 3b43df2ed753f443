//! Physical constants and unit conversions used to turn DFT energetics (eV) into the
//! quantities MKMCXX reads (J/mol, J).
//!
//! The table is a plain `Copy` value: the calculator receives it by value, so tests can run
//! the whole pipeline with an alternate table.
use serde::{Deserialize, Serialize};

/// Avogadro's number, 1/mol
pub const NAV: f64 = 6.02214076e23;
/// Planck's constant, J*s
pub const H: f64 = 6.62607015e-34;
/// Boltzmann's constant, J/K
pub const KB: f64 = 1.380649e-23;
/// Boltzmann's constant in eV/K. This is the value the MKMCXX input files have always been
/// generated with, it differs from CODATA (8.617333e-5).
pub const KB_EV: f64 = 8.1673303e-5;
/// gas constant, J/(mol*K)
pub const R: f64 = 8.3145;
/// J/eV
pub const EV_TO_J: f64 = 1.602176565e-19;
/// kJ/eV
pub const EV_TO_KJ: f64 = 1.602176565e-22;
/// "1 mole" used for eV -> J/mol conversion of activation energies
pub const MOLE: f64 = 6.0223e23;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    pub avogadro: f64,
    pub planck: f64,
    pub boltzmann: f64,
    pub boltzmann_ev: f64,
    pub gas_constant: f64,
    pub ev_to_joule: f64,
    pub ev_to_kilojoule: f64,
    pub mole: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            avogadro: NAV,
            planck: H,
            boltzmann: KB,
            boltzmann_ev: KB_EV,
            gas_constant: R,
            ev_to_joule: EV_TO_J,
            ev_to_kilojoule: EV_TO_KJ,
            mole: MOLE,
        }
    }
}

impl PhysicalConstants {
    /// eV -> J/mol, evaluated as `energy * eV->J * mole` (left to right)
    pub fn ev_to_joule_per_mole(&self, energy_ev: f64) -> f64 {
        energy_ev * self.ev_to_joule * self.mole
    }
    /// eV per particle -> J per mole of particles using Avogadro's number
    pub fn ev_to_molar_joule(&self, energy_ev: f64) -> f64 {
        energy_ev * self.ev_to_joule * self.avogadro
    }
    /// k_B*T in eV
    pub fn thermal_energy_ev(&self, temperature: f64) -> f64 {
        self.boltzmann_ev * temperature
    }
}
