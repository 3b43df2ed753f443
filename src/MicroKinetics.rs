/// Physical constants used in the energy conversions (eV -> J/mol) and the Boltzmann factors
/// of the sticking coefficients
pub mod physical_constants;
/// Text forms of numbers in the input file (shortest float text, two-digit exponents)
pub mod number_format;
/// value + reason why a default replaced malformed reaction data
pub mod resolved;
/// The module turns database reaction equations into the MKMCXX bracketed notation:
/// `CO* + O* - 0* -> CO2(g) + 2*` becomes `{CO*} + {O*}  => {CO2} + 2{*}`
/// # Examples
/// ```
/// use KiMKM::MicroKinetics::equation_parser::format_equation;
/// let formatted = format_equation("12CO2 + * -> 12CO2*").unwrap();
/// assert_eq!(formatted, "12{CO2} + {*}  => 12{CO2*}");
/// ```
pub mod equation_parser;
/// Surface reaction records (Catalysis-Hub JSON) with energies, coverage and molecular data
/// resolved into typed fields
pub mod reaction_record;
/// HK (adsorption, Hertz-Knudsen) / AR (surface reaction, Arrhenius) split of reactions
pub mod reaction_classifier;
/// gas / surface / free site groups of the initial concentrations
pub mod concentrations;
/// HK and AR rows: sticking coefficients, desorption and activation energies in J/mol
pub mod kinetic_parameters;
/// layout of MKMCXX input file and the temperature sweep of the `&runs` block
pub mod mkm_template;
/// The module takes as input a generation request:
/// 1) initial concentrations of gas and surface species
/// 2) list of reactions with DFT energetics from the reaction database
/// 3) simulation conditions (temperature range, time, tolerances) and pressure
/// and produces the complete MKMCXX input file
pub mod input_file;
/// tests of the whole generation
mod input_file_tests;
