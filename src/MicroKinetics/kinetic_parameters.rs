//! Kinetic parameters of the `&reactions` section.
//!
//! HK (adsorption) line:
//! `HK; {eq} ; m^2 ; amu ; ThetaRot(K) ; Sigma ; sticking ; Edes J/mol ; adsorption`
//! - geometric area of the site is 1e-20 m^2 for every reaction
//! - amu, rotational temperature and symmetry number are taken from the first species of the
//!   molecular data, 0 when there is none
//! - the sticking coefficient is the Boltzmann factor of the per-site activation energy at
//!   the reference temperature of 520 K, normalised over all HK reactions of the request:
//!   s_i = exp(-Ea_i/(kB*520)) / sum_j exp(-Ea_j/(kB*520)), rounded to 3 significant figures.
//!   The 520 K do not follow the temperature sweep of the run block.
//! - desorption energy is -(dE/coverage) converted eV -> J/mol
//!
//! AR (surface reaction) line:
//! `AR; {eq} ; vf ; vb ; Eaf J/mol ; Eab J/mol`
//! - vf = vb = 6.2e12 1/s for every reaction. Computing prefactors from partition functions
//!   changes the result of the microkinetic run by a negligible amount.
//! - Eaf = Ea/coverage, Eab = Eaf - dE/coverage, both in J/mol rounded to 0.01
use crate::MicroKinetics::equation_parser::{EquationError, format_equation};
use crate::MicroKinetics::number_format::{
    JsonNumber, exp_without_plus, float_repr, round_to_decimals, round_to_sf,
};
use crate::MicroKinetics::physical_constants::PhysicalConstants;
use crate::MicroKinetics::reaction_record::ReactionRecord;
use crate::MicroKinetics::resolved::{Fallback, Resolved};
use log::warn;

/// m^2
pub const GEOMETRIC_AREA: f64 = 1e-20;
/// K
pub const STICKING_REFERENCE_TEMPERATURE: f64 = 520.0;
pub const ADSORPTION_COEFFICIENT: i64 = 1;
/// 1/s, both directions
pub const RATE_CONSTANT: f64 = 6.2e12;
pub const STICKING_SIGNIFICANT_FIGURES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct AdsorptionParameters {
    /// equation in MKMCXX notation
    pub equation: String,
    pub geometric_area: f64,
    pub molecular_weight: JsonNumber,
    pub rotational_constant: JsonNumber,
    pub symmetry_sigma: JsonNumber,
    pub sticking_coefficient: Resolved<f64>,
    /// J/mol
    pub desorption_energy: f64,
    pub adsorption_coefficient: i64,
}

impl AdsorptionParameters {
    pub fn row(&self) -> String {
        format!(
            "HK; {:<35} ; {:<8} ; {:<8} ; {:<8} ; {:<8} ; {:<8} ; {:<10} ; {:<3}",
            self.equation,
            float_repr(self.geometric_area),
            self.molecular_weight.to_string(),
            self.rotational_constant.to_string(),
            self.symmetry_sigma.to_string(),
            float_repr(self.sticking_coefficient.value()),
            exp_without_plus(self.desorption_energy, 2),
            self.adsorption_coefficient
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceReactionParameters {
    pub equation: String,
    pub forward_rate_constant: f64,
    pub backward_rate_constant: f64,
    /// J/mol
    pub forward_activation_energy: f64,
    /// J/mol
    pub backward_activation_energy: f64,
}

impl SurfaceReactionParameters {
    pub fn row(&self) -> String {
        format!(
            "AR; {:<35} ; {:<8} ; {:<8} ; {:<10} ; {:<10}",
            self.equation,
            // prefactors are written in exponent form, 6.2e12
            format!("{:e}", self.forward_rate_constant),
            format!("{:e}", self.backward_rate_constant),
            float_repr(self.forward_activation_energy),
            float_repr(self.backward_activation_energy)
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KineticCalculator {
    pub constants: PhysicalConstants,
}

impl KineticCalculator {
    pub fn new(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    fn coverage(reaction: &ReactionRecord) -> f64 {
        reaction.coverage.value() as f64
    }
    /// activation energy per site, J/mol
    pub fn single_activation_energy(&self, reaction: &ReactionRecord) -> f64 {
        self.constants
            .ev_to_joule_per_mole(reaction.activation_energy.value())
            / Self::coverage(reaction)
    }
    /// reaction energy per site, J/mol
    pub fn single_reaction_energy(&self, reaction: &ReactionRecord) -> f64 {
        self.constants
            .ev_to_joule_per_mole(reaction.reaction_energy.value())
            / Self::coverage(reaction)
    }

    pub fn individual_sticking_factor(&self, reaction: &ReactionRecord) -> f64 {
        let thermal_energy = self
            .constants
            .thermal_energy_ev(STICKING_REFERENCE_TEMPERATURE);
        (-self.single_activation_energy(reaction) / thermal_energy).exp()
    }

    pub fn group_sticking_sum(&self, group: &[&ReactionRecord]) -> f64 {
        group
            .iter()
            .map(|reaction| self.individual_sticking_factor(reaction))
            .sum()
    }
    /// sticking of reaction normalised by the sum over its adsorption group; 1 if the sum
    /// gives no finite quotient
    pub fn sticking_coefficient(&self, reaction: &ReactionRecord, group_sum: f64) -> Resolved<f64> {
        let sticking = self.individual_sticking_factor(reaction) / group_sum;
        if group_sum == 0.0 || !sticking.is_finite() {
            return Resolved::Defaulted(1.0, Fallback::DegenerateStickingSum);
        }
        Resolved::Parsed(round_to_sf(sticking, STICKING_SIGNIFICANT_FIGURES))
    }
    /// J/mol, positive reaction energy gives negative desorption energy
    pub fn desorption_energy(&self, reaction: &ReactionRecord) -> f64 {
        let single_reaction_energy = reaction.reaction_energy.value() / Self::coverage(reaction);
        self.constants.ev_to_molar_joule(-single_reaction_energy)
    }

    pub fn forward_activation_energy(&self, reaction: &ReactionRecord) -> f64 {
        round_to_decimals(self.single_activation_energy(reaction), 2)
    }

    pub fn backward_activation_energy(&self, reaction: &ReactionRecord) -> f64 {
        round_to_decimals(
            self.single_activation_energy(reaction) - self.single_reaction_energy(reaction),
            2,
        )
    }
    /// parameters of every reaction of adsorption group, in group order
    pub fn adsorption_parameters(
        &self,
        group: &[&ReactionRecord],
    ) -> Result<Vec<AdsorptionParameters>, EquationError> {
        let group_sum = self.group_sticking_sum(group);
        group
            .iter()
            .map(|reaction| {
                let species = reaction.species_data();
                let sticking_coefficient = self.sticking_coefficient(reaction, group_sum);
                if let Some(reason) = sticking_coefficient.fallback() {
                    warn!(
                        "reaction '{}': {}, sticking coefficient set to 1",
                        reaction.equation, reason
                    );
                }
                Ok(AdsorptionParameters {
                    equation: format_equation(&reaction.equation)?,
                    geometric_area: GEOMETRIC_AREA,
                    molecular_weight: species.molecular_weight.value().rounded(2),
                    rotational_constant: species.rotational_constant.value().rounded(2),
                    symmetry_sigma: species.symmetry_sigma.value(),
                    sticking_coefficient,
                    desorption_energy: self.desorption_energy(reaction),
                    adsorption_coefficient: ADSORPTION_COEFFICIENT,
                })
            })
            .collect()
    }

    pub fn surface_reaction_parameters(
        &self,
        group: &[&ReactionRecord],
    ) -> Result<Vec<SurfaceReactionParameters>, EquationError> {
        group
            .iter()
            .map(|reaction| {
                Ok(SurfaceReactionParameters {
                    equation: format_equation(&reaction.equation)?,
                    forward_rate_constant: RATE_CONSTANT,
                    backward_rate_constant: RATE_CONSTANT,
                    forward_activation_energy: self.forward_activation_energy(reaction),
                    backward_activation_energy: self.backward_activation_energy(reaction),
                })
            })
            .collect()
    }
}
