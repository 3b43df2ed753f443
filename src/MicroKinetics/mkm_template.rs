//! Layout of the MKMCXX input file and the temperature sweep of its `&runs` block.
use crate::MicroKinetics::number_format::deserialize_text;
use serde::Deserialize;

pub const TEMPERATURE_STEP: usize = 100;

/// `initial_conditions` of the request; time and tolerances are written as given
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationConditions {
    /// K
    pub min_temperature: i64,
    /// K
    pub max_temperature: i64,
    #[serde(deserialize_with = "deserialize_text")]
    pub time: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub atol: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub rtol: String,
}

impl SimulationConditions {
    pub fn new(min_temperature: i64, max_temperature: i64, time: &str, atol: &str, rtol: &str) -> Self {
        Self {
            min_temperature,
            max_temperature,
            time: time.to_string(),
            atol: atol.to_string(),
            rtol: rtol.to_string(),
        }
    }
    /// min, min + 100, ... up to and including max
    pub fn temperatures(&self) -> Vec<i64> {
        (self.min_temperature..=self.max_temperature)
            .step_by(TEMPERATURE_STEP)
            .collect()
    }
    /// `temperature ; simulation time ; atol ; rtol` for every temperature
    pub fn runs(&self) -> Vec<String> {
        self.temperatures()
            .iter()
            .map(|temperature| {
                format!(
                    "{:<11} ; {:<14} ; {:<6} ; {:<6}",
                    temperature, self.time, self.atol, self.rtol
                )
            })
            .collect()
    }
}

/// already rendered rows of every section
#[derive(Debug, Clone, Default)]
pub struct InputFileSections {
    pub gas_compounds: Vec<String>,
    pub surface_compounds: Vec<String>,
    pub surface: String,
    pub free_sites: Vec<String>,
    pub hk_reactions: Vec<String>,
    pub ar_reactions: Vec<String>,
    pub pressure: String,
    pub runs: Vec<String>,
}

pub fn render_input_file(sections: &InputFileSections) -> String {
    format!(
        r#"# =========================== #
#     MKMCXX: Begin input     #
# =========================== #

&compounds
# Gas phase compounds
# name ; surface ; initial concentration
{gas}
# Surface compounds (denote with a star)
{surface_compounds}



# free sites on the surface
# surface "*" : {surface}
{free_sites}

&reactions
# Adsorption;                            m^2;      amu;       ThetaRot(K); Sigma;    sticking;  J/mol
{hk}

# reaction;                              vf;       vb;         EafJ/mol;     Eab J/mol
{ar}


&settings
TYPE = SEQUENCERUN
# pressure in bar
PRESSURE = {pressure}
#REAGENTS = {{}}
#KEYCOMPONENTS = {{}}
EACT=0
ORDERS=0
DRC=0

&runs
#temperature; simulation time; atol   ; rtol
{runs} 

# =========================== #
#      MKMCXX: End input      #
# =========================== #"#,
        gas = sections.gas_compounds.join("\n"),
        surface_compounds = sections.surface_compounds.join("\n"),
        surface = sections.surface,
        free_sites = sections.free_sites.join("\n"),
        hk = sections.hk_reactions.join("\n"),
        ar = sections.ar_reactions.join("\n"),
        pressure = sections.pressure,
        runs = sections.runs.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_sweep() {
        let conditions = SimulationConditions::new(300, 900, "10e5", "1e-8", "1e-8");
        assert_eq!(
            conditions.temperatures(),
            vec![300, 400, 500, 600, 700, 800, 900]
        );
        let runs = conditions.runs();
        assert_eq!(runs.len(), 7);
        assert_eq!(runs[0], "300         ; 10e5           ; 1e-8   ; 1e-8  ");
        // upper bound is included only when it is on the grid
        let conditions = SimulationConditions::new(300, 850, "10e5", "1e-8", "1e-8");
        assert_eq!(conditions.temperatures().last(), Some(&800));
        let conditions = SimulationConditions::new(500, 400, "10e5", "1e-8", "1e-8");
        assert!(conditions.runs().is_empty());
        let conditions = SimulationConditions::new(600, 600, "1", "1", "1");
        assert_eq!(conditions.temperatures(), vec![600]);
    }

    #[test]
    fn test_render_places_sections() {
        let sections = InputFileSections {
            gas_compounds: vec!["CO2    ; 0       ; 0.4     ".to_string()],
            surface_compounds: vec!["CO*    ; 1       ; 0       ".to_string()],
            surface: "Fe".to_string(),
            free_sites: vec!["*      ; 1       ; 1       ".to_string()],
            hk_reactions: vec![],
            ar_reactions: vec!["AR; a".to_string(), "AR; b".to_string()],
            pressure: "1".to_string(),
            runs: vec!["300".to_string(), "400".to_string()],
        };
        let text = render_input_file(&sections);
        assert!(text.starts_with("# =========================== #\n#     MKMCXX: Begin input     #"));
        assert!(text.ends_with("#      MKMCXX: End input      #\n# =========================== #"));
        assert!(text.contains("# surface \"*\" : Fe\n*      ; 1       ; 1       \n"));
        assert!(text.contains("Eab J/mol\nAR; a\nAR; b\n\n\n&settings"));
        assert!(text.contains("PRESSURE = 1\n#REAGENTS = {}\n#KEYCOMPONENTS = {}\n"));
        assert!(text.contains("rtol\n300\n400 \n\n"));
        // empty HK group leaves an empty line under its header
        assert!(text.contains("J/mol\n\n\n# reaction;"));
    }
}
