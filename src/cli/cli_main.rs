use super::cli_fetch::{count_command, fetch_command, fetch_menu, parse_fetch_args};
use super::cli_generate::{generate_command, generate_menu};
use crate::settings::Settings;
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

/// what the binary was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Interactive,
    Generate {
        request: String,
        output: Option<String>,
    },
    Fetch(Vec<String>),
    Count(Vec<String>),
    Help,
}

/// arguments after the program name
pub fn parse_command(args: &[String]) -> Result<Command, String> {
    let Some(name) = args.first() else {
        return Ok(Command::Interactive);
    };
    let rest = &args[1..];
    match name.as_str() {
        "generate" => match rest {
            [request] => Ok(Command::Generate {
                request: request.clone(),
                output: None,
            }),
            [request, output] => Ok(Command::Generate {
                request: request.clone(),
                output: Some(output.clone()),
            }),
            _ => Err("usage: generate <request.json> [output file]".to_string()),
        },
        "fetch" => Ok(Command::Fetch(rest.to_vec())),
        "count" => Ok(Command::Count(rest.to_vec())),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(format!("unknown command '{}'", other)),
    }
}

pub fn run_command(command: Command, settings: &Settings) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Interactive => run_interactive_menu(settings),
        Command::Generate { request, output } => {
            let output = output.unwrap_or_else(|| settings.output_file.clone());
            generate_command(Path::new(&request), Path::new(&output))?;
        }
        Command::Fetch(args) => {
            let options = parse_fetch_args(&args)?;
            fetch_command(settings, &options)?;
        }
        Command::Count(args) => {
            let options = parse_fetch_args(&args)?;
            count_command(settings, &options.query)?;
        }
        Command::Help => print_help(),
    }
    Ok(())
}

pub fn print_help() {
    println!("KiMKM: input files for the MKMCXX microkinetic solver");
    println!();
    println!("usage:");
    println!("  KiMKM                                   interactive menu");
    println!("  KiMKM generate <request.json> [output]  write MKMCXX input file");
    println!("  KiMKM fetch [filters] [--max N] [--out reactions.json]");
    println!("  KiMKM count [filters]");
    println!();
    println!("filters: --reactants X --products Y --surface Z --facet F");
    println!("settings are read from mkm_settings.json in the working directory");
}

pub fn run_interactive_menu(settings: &Settings) {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => generate_menu(settings),
            "2" => fetch_menu(settings),
            "3" => show_settings(settings),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!("\x1b[34m\n Welcome to KiMKM: input files for the MKMCXX microkinetic solver \n \x1b[0m");
    println!("\x1b[33m1. Generate input file from request\x1b[0m");
    println!("\x1b[33m2. Catalysis-Hub reactions\x1b[0m");
    println!("\x1b[33m3. Show settings\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}

fn show_settings(settings: &Settings) {
    println!("\n=== Settings ===");
    println!("endpoint:    {}", settings.endpoint);
    println!("page size:   {}", settings.page_size);
    println!("output file: {}", settings.output_file);
    println!("log level:   {}", settings.log_level);
    println!(
        "log file:    {}",
        settings.log_file.as_deref().unwrap_or("(terminal only)")
    );
}

fn get_user_input() -> String {
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        // closed stdin ends the menu
        return "0".to_string();
    }
    if input.is_empty() {
        return "0".to_string();
    }
    input
}
