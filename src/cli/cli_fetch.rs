use crate::MicroKinetics::input_file::pretty_print_reactions;
use crate::MicroKinetics::reaction_record::RawReactionRecord;
use crate::ReactionDB::catalysis_hub_api::{
    CatalysisHubClient, ReactionQuery, ReactionSource, fetch_all_reactions,
};
use crate::settings::Settings;
use log::info;
use reqwest::blocking::Client;
use std::error::Error;
use std::fs;
use std::io::{self, Write};

/// filters and output options of the `fetch` and `count` commands
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchOptions {
    pub query: ReactionQuery,
    pub max_records: Option<usize>,
    /// JSON file for the fetched records
    pub output: Option<String>,
}

/// `--reactants CO --products CO2 --surface Pt --facet 111 --max 50 --out reactions.json`
pub fn parse_fetch_args(args: &[String]) -> Result<FetchOptions, String> {
    let mut options = FetchOptions::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| format!("option '{}' needs a value", flag))?;
        match flag.as_str() {
            "--reactants" => options.query.reactants = value.clone(),
            "--products" => options.query.products = value.clone(),
            "--surface" => options.query.surface_composition = value.clone(),
            "--facet" => options.query.facet = value.clone(),
            "--max" => {
                let max = value
                    .parse::<usize>()
                    .map_err(|_| format!("'{}' is not a number of records", value))?;
                options.max_records = Some(max);
            }
            "--out" => options.output = Some(value.clone()),
            _ => return Err(format!("unknown option '{}'", flag)),
        }
    }
    Ok(options)
}

fn client(settings: &Settings) -> Result<CatalysisHubClient<Client>, Box<dyn Error>> {
    Ok(CatalysisHubClient::with_client(
        Client::new(),
        settings.endpoint()?.as_str(),
        settings.page_size,
    )?)
}

pub fn fetch_command(settings: &Settings, options: &FetchOptions) -> Result<(), Box<dyn Error>> {
    let source = client(settings)?;
    let reactions = fetch_all_reactions(&source, &options.query, options.max_records)?;
    pretty_print_reactions(&reactions);
    if let Some(path) = &options.output {
        let raw: Vec<&RawReactionRecord> = reactions.iter().map(|r| &r.raw).collect();
        fs::write(path, serde_json::to_string_pretty(&raw)?)?;
        info!("{} reactions saved to '{}'", raw.len(), path);
    }
    Ok(())
}

pub fn count_command(settings: &Settings, query: &ReactionQuery) -> Result<u64, Box<dyn Error>> {
    let total = client(settings)?.count_reactions(query)?;
    println!("{} reactions match the query", total);
    Ok(total)
}

pub fn fetch_menu(settings: &Settings) {
    println!("\n=== Catalysis-Hub reactions ===");
    println!("(empty answer matches anything)");
    let reactants = prompt("Reactants: ");
    let products = prompt("Products: ");
    let surface = prompt("Surface composition: ");
    let facet = prompt("Facet: ");
    let query = ReactionQuery::new(&reactants, &products, &surface, &facet);
    let mut options = FetchOptions {
        query,
        ..Default::default()
    };
    if let Err(e) = count_command(settings, &options.query) {
        println!("Error: {}", e);
        return;
    }
    let max = prompt("How many reactions to fetch (empty - all): ");
    if !max.is_empty() {
        match max.parse::<usize>() {
            Ok(max) => options.max_records = Some(max),
            Err(_) => {
                println!("Invalid number");
                return;
            }
        }
    }
    let output = prompt("Save to JSON file (empty - do not save): ");
    if !output.is_empty() {
        options.output = Some(output);
    }
    if let Err(e) = fetch_command(settings, &options) {
        println!("Error: {}", e);
    }
}

pub(crate) fn prompt(text: &str) -> String {
    print!("\x1b[36m{}\x1b[0m", text);
    let _ = io::stdout().flush();
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}
