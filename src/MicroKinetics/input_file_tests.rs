//! Whole-file tests of the generator on requests as the front end sends them.
#[cfg(test)]
mod tests {
    use crate::MicroKinetics::equation_parser::EquationError;
    use crate::MicroKinetics::input_file::*;
    use crate::MicroKinetics::resolved::Fallback;
    use approx::assert_relative_eq;
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::NamedTempFile;

    const CO_OXIDATION_REQUEST: &str = r#"{
        "initial_concentrations": {"CO": "1", "O2": "0.5", "*": "1", "CO*": "0", "O*": "0", "CO2": 0},
        "reactions_data": [
            {"Equation": "CO + * -> CO*", "activationEnergy": 0.0, "reactionEnergy": -1.2,
             "coverages": "{}",
             "molecularData": "{\"COgas\": {\"molecularWeight\": 27.994914622099998, \"symmetrySigma\": 1, \"rotationalConstant\": 2.7772}}",
             "surfaceComposition": "Pt"},
            {"Equation": "O2(g) + 2* -> 2O*", "activationEnergy": 0.1, "reactionEnergy": -2.1,
             "coverages": "{\"O\": 2}",
             "molecularData": "{\"O2gas\": {\"molecularWeight\": 32, \"symmetrySigma\": 2, \"rotationalConstant\": 2.0787}}",
             "surfaceComposition": "Pt"},
            {"Equation": "CO* + O* -> CO2(g) + 2*", "activationEnergy": 0.85, "reactionEnergy": -0.6,
             "coverages": "{}", "surfaceComposition": "Pt"}
        ],
        "initial_conditions": {"min_temperature": 400, "max_temperature": 650,
                               "time": "1e6", "atol": "1e-10", "rtol": "1e-8"},
        "pressure": "20"
    }"#;

    const CO_OXIDATION_FILE: [&str; 48] = [
        "# =========================== #",
        "#     MKMCXX: Begin input     #",
        "# =========================== #",
        "",
        "&compounds",
        "# Gas phase compounds",
        "# name ; surface ; initial concentration",
        "CO     ; 0       ; 1       ",
        "O2     ; 0       ; 0.5     ",
        "CO2    ; 0       ; 0       ",
        "# Surface compounds (denote with a star)",
        "CO*    ; 1       ; 0       ",
        "O*     ; 1       ; 0       ",
        "",
        "",
        "",
        "# free sites on the surface",
        "# surface \"*\" : Pt",
        "*      ; 1       ; 1       ",
        "",
        "&reactions",
        "# Adsorption;                            m^2;      amu;       ThetaRot(K); Sigma;    sticking;  J/mol",
        "HK; {CO} + {*}  => {CO*}                ; 1e-20    ; 27.99    ; 2.78     ; 1        ; 1.0      ; 1.16e05    ; 1  ",
        "HK; {O2} + 2{*}  => 2{O*}               ; 1e-20    ; 32       ; 2.08     ; 2        ; 0.0      ; 1.01e05    ; 1  ",
        "",
        "# reaction;                              vf;       vb;         EafJ/mol;     Eab J/mol",
        "AR; {CO*} + {O*}  => {CO2} + 2{*}       ; 6.2e12   ; 6.2e12   ; 82014.7    ; 139907.42 ",
        "",
        "",
        "&settings",
        "TYPE = SEQUENCERUN",
        "# pressure in bar",
        "PRESSURE = 20",
        "#REAGENTS = {}",
        "#KEYCOMPONENTS = {}",
        "EACT=0",
        "ORDERS=0",
        "DRC=0",
        "",
        "&runs",
        "#temperature; simulation time; atol   ; rtol",
        "400         ; 1e6            ; 1e-10  ; 1e-8  ",
        "500         ; 1e6            ; 1e-10  ; 1e-8  ",
        "600         ; 1e6            ; 1e-10  ; 1e-8   ",
        "",
        "# =========================== #",
        "#      MKMCXX: End input      #",
        "# =========================== #",
    ];

    fn fe_co_record() -> Value {
        json!({
            "Equation": "FeCO* -> FeCO*",
            "activationEnergy": 0.9991554200000792,
            "chemicalComposition": "Fe120",
            "coverages": "{}",
            "dftCode": "VASP",
            "facet": "100",
            "molecularData": "{\"FeCOstar\": {\"molecularWeight\": 27.994914622099998, \"symmetrySigma\": 1, \"rotationalConstant\": 110.39269857451734}}",
            "reactionEnergy": 0.6190308800000821,
            "surfaceComposition": "Fe"
        })
    }

    fn fe_co_request() -> GenerationRequest {
        serde_json::from_value(json!({
            "initial_concentrations": {
                "CO2": "0.4", "H20": "0.6", "H": "0", "H2": "0", "CO": "0", "HCOOH": "0",
                "COOH*": "0", "*": "1", "CO*": "0", "CO2*": "0", "OCHO*": "0"
            },
            "reactions_data": [fe_co_record(), fe_co_record(), fe_co_record()],
            "initial_conditions": {"min_temperature": 300, "max_temperature": 900,
                                   "time": "10e5", "atol": "1e-8", "rtol": "1e-8"},
            "pressure": "1"
        }))
        .unwrap()
    }

    fn section<'a>(document: &'a str, start: &str, end: &str) -> Vec<&'a str> {
        let tail = &document[document.find(start).unwrap() + start.len()..];
        let body = &tail[..tail.find(end).unwrap()];
        body.lines().filter(|line| !line.is_empty()).collect()
    }

    #[test]
    fn test_co_oxidation_file() {
        let request: GenerationRequest = serde_json::from_str(CO_OXIDATION_REQUEST).unwrap();
        let document = generate(&request).unwrap();
        assert_eq!(document, CO_OXIDATION_FILE.join("\n"));
    }

    #[test]
    fn test_three_identical_surface_reactions() {
        let document = generate(&fe_co_request()).unwrap();
        let ar = section(&document, "Eab J/mol\n", "&settings");
        assert_eq!(ar.len(), 3);
        for row in &ar {
            assert_eq!(
                *row,
                "AR; {FeCO*}  => {FeCO*}                 ; 6.2e12   ; 6.2e12   ; 96406.39   ; 36677.41  "
            );
        }
        let hk = section(&document, "J/mol\n", "# reaction;");
        assert!(hk.is_empty());
        let runs = section(&document, "rtol\n", "# ====");
        assert_eq!(runs.len(), 7);
        assert!(runs[0].starts_with("300 "));
        assert!(runs[6].starts_with("900 "));
        assert!(document.contains("# surface \"*\" : Fe\n"));
        assert!(document.contains("PRESSURE = 1\n"));
    }

    #[test]
    fn test_concentrations_are_grouped() {
        let document = generate(&fe_co_request()).unwrap();
        let gas = section(&document, "initial concentration\n", "# Surface compounds");
        let names: Vec<&str> = gas
            .iter()
            .map(|row| row.split(';').next().unwrap().trim())
            .collect();
        assert_eq!(names, vec!["CO2", "H20", "H", "H2", "CO", "HCOOH"]);
        assert!(gas.iter().all(|row| row.split(';').nth(1).unwrap().trim() == "0"));
        let surface = section(&document, "(denote with a star)\n", "# free sites");
        assert_eq!(
            surface,
            vec![
                "COOH*  ; 1       ; 0       ",
                "CO*    ; 1       ; 0       ",
                "CO2*   ; 1       ; 0       ",
                "OCHO*  ; 1       ; 0       "
            ]
        );
        let free_sites = section(&document, ": Fe\n", "&reactions");
        assert_eq!(free_sites, vec!["*      ; 1       ; 1       "]);
    }

    #[test]
    fn test_adsorption_group_sticking_is_normalised() {
        let mut request = fe_co_request();
        request.reactions_data = ["CO + * -> CO*", "H2 + 2* -> 2H*", "O2 + 2* -> 2O*"]
            .iter()
            .map(|equation| {
                serde_json::from_value(json!({
                    "Equation": equation, "activationEnergy": 0.0, "reactionEnergy": -0.5
                }))
                .unwrap()
            })
            .collect();
        let document = generate(&request).unwrap();
        let hk = section(&document, "J/mol\n", "# reaction;");
        assert_eq!(hk.len(), 3);
        let sticking: Vec<f64> = hk
            .iter()
            .map(|row| row.split(';').nth(6).unwrap().trim().parse().unwrap())
            .collect();
        for s in sticking {
            assert_relative_eq!(s, 0.333);
        }
        // no surfaceComposition in the records
        assert!(document.contains("# surface \"*\" : \n"));
        let generator = InputFileGenerator::default();
        let sections = generator.sections(&request).unwrap();
        assert!(sections.ar_reactions.is_empty());
        assert_eq!(sections.hk_reactions, hk);
    }

    #[test]
    fn test_unparsable_energy_uses_default() {
        let mut record = fe_co_record();
        record["activationEnergy"] = json!("not computed");
        let mut request = fe_co_request();
        request.reactions_data = vec![serde_json::from_value(record).unwrap()];
        assert_eq!(
            request.reactions_data[0].activation_energy.fallback(),
            Some(&Fallback::Unparsable("not computed".to_string()))
        );
        let document = generate(&request).unwrap();
        // 1 eV per mole
        assert!(document.contains("; 96487.88   ;"));
    }

    #[test]
    fn test_equation_without_arrow_fails() {
        let mut record = fe_co_record();
        record["Equation"] = json!("FeCO* = FeCO*");
        let mut request = fe_co_request();
        request.reactions_data.push(serde_json::from_value(record).unwrap());
        let result = generate(&request);
        assert!(matches!(
            result,
            Err(GeneratorError::Equation(EquationError::MissingArrow(_)))
        ));
    }

    #[test]
    fn test_no_reactions() {
        let mut request = fe_co_request();
        request.reactions_data.clear();
        assert_eq!(request.surface_composition(), "");
        let document = generate(&request).unwrap();
        assert!(document.contains("J/mol\n\n\n# reaction;"));
        assert!(document.contains("Eab J/mol\n\n\n\n&settings"));
    }

    #[test]
    fn test_numbers_in_request_are_written_as_text() {
        let request: GenerationRequest = serde_json::from_value(json!({
            "initial_concentrations": {"CO": 1, "*": 1.0},
            "reactions_data": [],
            "initial_conditions": {"min_temperature": 500, "max_temperature": 500,
                                   "time": 1000000, "atol": 1e-8, "rtol": "1e-6"},
            "pressure": 2.5
        }))
        .unwrap();
        let document = generate(&request).unwrap();
        assert!(document.contains("CO     ; 0       ; 1       \n"));
        assert!(document.contains("*      ; 1       ; 1.0     \n"));
        assert!(document.contains("PRESSURE = 2.5\n"));
        assert!(document.contains("500         ; 1000000        ; 1e-08  ; 1e-6   \n"));
    }

    #[test]
    fn test_load_request_and_write_input_file() {
        let request_file = NamedTempFile::new().unwrap();
        fs::write(request_file.path(), CO_OXIDATION_REQUEST).unwrap();
        let request = load_request(request_file.path()).unwrap();
        assert_eq!(request.reactions_data.len(), 3);
        assert_eq!(request.initial_conditions.temperatures(), vec![400, 500, 600]);

        let output_file = NamedTempFile::new().unwrap();
        write_input_file(&request, output_file.path()).unwrap();
        let written = fs::read_to_string(output_file.path()).unwrap();
        assert_eq!(written, CO_OXIDATION_FILE.join("\n"));
    }

    #[test]
    fn test_request_text_keeps_exact_floats() {
        let request_file = NamedTempFile::new().unwrap();
        fs::write(
            request_file.path(),
            r#"{"initial_concentrations": {"CO": "1", "*": "1", "CO*": "0"},
                "reactions_data": [{"Equation": "CO + * -> CO*",
                                    "activationEnergy": 27.994914622099998,
                                    "reactionEnergy": 0.6190308800000821,
                                    "molecularData": {"COgas": {"molecularWeight": 27.994914622099998}},
                                    "surfaceComposition": "Fe"}],
                "initial_conditions": {"min_temperature": 300, "max_temperature": 300,
                                       "time": "1", "atol": "1", "rtol": "1"},
                "pressure": "1"}"#,
        )
        .unwrap();
        let request = load_request(request_file.path()).unwrap();
        let reaction = &request.reactions_data[0];
        assert_eq!(reaction.activation_energy.value(), 27.994914622099998);
        assert_eq!(reaction.activation_energy.value().to_string(), "27.994914622099998");
        assert_eq!(reaction.reaction_energy.value(), 0.6190308800000821);
        assert_eq!(
            reaction.species_data().molecular_weight.value().as_f64(),
            27.994914622099998
        );
    }

    #[test]
    fn test_load_request_errors() {
        let request_file = NamedTempFile::new().unwrap();
        fs::write(request_file.path(), "{\"initial_concentrations\": {}}").unwrap();
        assert!(matches!(
            load_request(request_file.path()),
            Err(GeneratorError::Json(_))
        ));
        let missing = request_file.path().with_extension("missing");
        assert!(matches!(load_request(&missing), Err(GeneratorError::Io(_))));
    }

    #[test]
    fn test_reactions_table() {
        let request: GenerationRequest = serde_json::from_str(CO_OXIDATION_REQUEST).unwrap();
        let table = reactions_table(&request.reactions_data);
        // header + one row per reaction
        assert_eq!(table.len(), 4);
        let text = table.to_string();
        assert!(text.contains("O2(g) + 2* -> 2O*"));
        assert!(text.contains("HK"));
        assert!(text.contains("AR"));
    }
}
