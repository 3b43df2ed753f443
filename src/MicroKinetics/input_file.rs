//! Generation of the whole MKMCXX input file from a user request.
//!
//! A request (the JSON the web front end sends) holds initial concentrations, the chosen
//! reactions with their DFT energetics, the run conditions and the pressure:
//! ```json
//! {
//!   "initial_concentrations": {"CO2": "0.4", "H2O": "0.6", "*": "1", "CO*": "0"},
//!   "reactions_data": [{"Equation": "CO2 + * -> CO2*", "activationEnergy": 0.1,
//!                       "reactionEnergy": -0.3, "surfaceComposition": "Fe"}],
//!   "initial_conditions": {"min_temperature": 300, "max_temperature": 900,
//!                          "time": "10e5", "atol": "1e-8", "rtol": "1e-8"},
//!   "pressure": "1"
//! }
//! ```
//! Order of concentrations and reactions in the request is the order of rows in the file.
//! # Examples
//! ```
//! use KiMKM::MicroKinetics::input_file::{GenerationRequest, generate};
//! let request: GenerationRequest = serde_json::from_str(r#"{
//!     "initial_concentrations": {"CO": "1", "*": "1", "CO*": "0"},
//!     "reactions_data": [{"Equation": "CO + * -> CO*", "activationEnergy": 0.0,
//!                         "reactionEnergy": -1.2, "surfaceComposition": "Pt"}],
//!     "initial_conditions": {"min_temperature": 400, "max_temperature": 600,
//!                            "time": "1e6", "atol": "1e-10", "rtol": "1e-8"},
//!     "pressure": 20
//! }"#).unwrap();
//! let document = generate(&request).unwrap();
//! assert!(document.contains("PRESSURE = 20"));
//! assert!(document.contains("HK; {CO} + {*}  => {CO*}"));
//! ```
use crate::MicroKinetics::concentrations::{
    ConcentrationEntry, deserialize_concentrations, sort_concentrations,
};
use crate::MicroKinetics::equation_parser::EquationError;
use crate::MicroKinetics::kinetic_parameters::KineticCalculator;
use crate::MicroKinetics::mkm_template::{InputFileSections, render_input_file};
pub use crate::MicroKinetics::mkm_template::SimulationConditions;
use crate::MicroKinetics::number_format::deserialize_text;
use crate::MicroKinetics::physical_constants::PhysicalConstants;
use crate::MicroKinetics::reaction_classifier::{classify, separate_reactions};
use crate::MicroKinetics::reaction_record::ReactionRecord;
use crate::MicroKinetics::resolved::Resolved;
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Equation(#[from] EquationError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    #[serde(deserialize_with = "deserialize_concentrations")]
    pub initial_concentrations: Vec<ConcentrationEntry>,
    pub reactions_data: Vec<ReactionRecord>,
    pub initial_conditions: SimulationConditions,
    #[serde(deserialize_with = "deserialize_text")]
    pub pressure: String,
}

impl GenerationRequest {
    /// surface of the first reaction - all reactions of one request are on the same surface
    pub fn surface_composition(&self) -> String {
        match self.reactions_data.first() {
            Some(reaction) => reaction.surface_composition.clone(),
            None => {
                warn!("request has no reactions, surface composition left empty");
                String::new()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputFileGenerator {
    pub calculator: KineticCalculator,
}

impl InputFileGenerator {
    pub fn new(constants: PhysicalConstants) -> Self {
        Self {
            calculator: KineticCalculator::new(constants),
        }
    }
    /// all sections of the file; fails only on equation without (or with several) `->`
    pub fn sections(&self, request: &GenerationRequest) -> Result<InputFileSections, EquationError> {
        let concentrations = sort_concentrations(&request.initial_concentrations);
        let (hk_reactions, ar_reactions) = separate_reactions(&request.reactions_data)?;
        info!(
            "{} adsorption (HK) and {} surface (AR) reactions",
            hk_reactions.len(),
            ar_reactions.len()
        );
        let hk_rows = self
            .calculator
            .adsorption_parameters(&hk_reactions)?
            .iter()
            .map(|parameters| parameters.row())
            .collect();
        let ar_rows = self
            .calculator
            .surface_reaction_parameters(&ar_reactions)?
            .iter()
            .map(|parameters| parameters.row())
            .collect();
        Ok(InputFileSections {
            gas_compounds: concentrations.gas_compounds,
            surface_compounds: concentrations.surface_compounds,
            surface: request.surface_composition(),
            free_sites: concentrations.free_sites,
            hk_reactions: hk_rows,
            ar_reactions: ar_rows,
            pressure: request.pressure.clone(),
            runs: request.initial_conditions.runs(),
        })
    }

    pub fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError> {
        let sections = self.sections(request)?;
        Ok(render_input_file(&sections))
    }
}

/// input file text with the standard physical constants
pub fn generate(request: &GenerationRequest) -> Result<String, GeneratorError> {
    InputFileGenerator::default().generate(request)
}

pub fn load_request(path: &Path) -> Result<GenerationRequest, GeneratorError> {
    let content = fs::read_to_string(path)?;
    let request: GenerationRequest = serde_json::from_str(&content)?;
    info!(
        "request '{}' loaded: {} species, {} reactions",
        path.display(),
        request.initial_concentrations.len(),
        request.reactions_data.len()
    );
    Ok(request)
}

pub fn write_input_file(request: &GenerationRequest, path: &Path) -> Result<(), GeneratorError> {
    let document = generate(request)?;
    fs::write(path, document)?;
    info!("MKMCXX input file written to '{}'", path.display());
    Ok(())
}

/// table of reactions with their mechanism and energetics
pub fn reactions_table(reactions: &[ReactionRecord]) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("#"),
        Cell::new("Equation"),
        Cell::new("Type"),
        Cell::new("Ea, eV"),
        Cell::new("dE, eV"),
        Cell::new("Coverage"),
        Cell::new("Surface"),
    ]));
    for (i, reaction) in reactions.iter().enumerate() {
        let mechanism = match classify(&reaction.equation) {
            Ok(mechanism) => mechanism.to_string(),
            Err(_) => "invalid".to_string(),
        };
        let energy = |resolved: &Resolved<f64>| {
            if resolved.is_defaulted() {
                format!("{} (default)", resolved.value())
            } else {
                resolved.value().to_string()
            }
        };
        table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()),
            Cell::new(&reaction.equation),
            Cell::new(&mechanism),
            Cell::new(&energy(&reaction.activation_energy)),
            Cell::new(&energy(&reaction.reaction_energy)),
            Cell::new(&reaction.coverage.value().to_string()),
            Cell::new(&reaction.surface_composition),
        ]));
    }
    table
}

pub fn pretty_print_reactions(reactions: &[ReactionRecord]) {
    reactions_table(reactions).printstd();
}
