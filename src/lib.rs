#[allow(non_snake_case)]
pub mod MicroKinetics;
#[allow(non_snake_case)]
pub mod ReactionDB;
pub mod cli;
pub mod logging;
pub mod settings;
