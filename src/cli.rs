/// command line: argument commands and the interactive menu
pub mod cli_main;
/// reactions from Catalysis-Hub: fetch, count, save to JSON
pub mod cli_fetch;
/// MKMCXX input file from a request JSON
pub mod cli_generate;
