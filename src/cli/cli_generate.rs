use super::cli_fetch::prompt;
use crate::MicroKinetics::input_file::{
    GeneratorError, load_request, pretty_print_reactions, write_input_file,
};
use crate::settings::Settings;
use std::path::Path;

/// reads request JSON, prints its reactions and writes the MKMCXX input file
pub fn generate_command(request_path: &Path, output_path: &Path) -> Result<(), GeneratorError> {
    let request = load_request(request_path)?;
    pretty_print_reactions(&request.reactions_data);
    write_input_file(&request, output_path)?;
    println!("Input file written to {}", output_path.display());
    Ok(())
}

pub fn generate_menu(settings: &Settings) {
    println!("\n=== MKMCXX input file ===");
    let request = prompt("Request JSON file: ");
    if request.is_empty() {
        println!("No request file given");
        return;
    }
    let output = prompt(&format!("Output file (empty - {}): ", settings.output_file));
    let output = if output.is_empty() {
        settings.output_file.clone()
    } else {
        output
    };
    if let Err(e) = generate_command(Path::new(&request), Path::new(&output)) {
        println!("Error: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_generate_command() {
        let dir = tempfile::tempdir().unwrap();
        let request = dir.path().join("request.json");
        fs::write(
            &request,
            r#"{"initial_concentrations": {"CO": "1", "*": "1", "CO*": "0"},
                "reactions_data": [{"Equation": "CO + * -> CO*", "activationEnergy": 0.0,
                                    "reactionEnergy": -1.2, "surfaceComposition": "Pt"}],
                "initial_conditions": {"min_temperature": 400, "max_temperature": 500,
                                       "time": "1e6", "atol": "1e-10", "rtol": "1e-8"},
                "pressure": "1"}"#,
        )
        .unwrap();
        let output = dir.path().join("input_file.mkm");
        generate_command(&request, &output).unwrap();
        let document = fs::read_to_string(&output).unwrap();
        assert!(document.contains("HK; {CO} + {*}  => {CO*}"));
        assert!(document.contains("# surface \"*\" : Pt"));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            generate_command(&missing, &output),
            Err(GeneratorError::Io(_))
        ));
    }
}
