//! Initial concentrations for the `&compounds` section.
//!
//! Every species goes to one of three groups: gas phase (no `*` in the name), surface species
//! (`CO*`) and the free site itself (`*`). The second column of the row is the surface flag
//! MKMCXX expects: 0 for gas, 1 for anything on the surface.
use crate::MicroKinetics::equation_parser::FREE_SITE;
use crate::MicroKinetics::number_format::text_of;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundKind {
    Gas,
    Surface,
    FreeSite,
}

impl CompoundKind {
    pub fn surface_flag(&self) -> &'static str {
        match self {
            CompoundKind::Gas => "0",
            CompoundKind::Surface | CompoundKind::FreeSite => "1",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationEntry {
    pub species: String,
    /// written to the file as is
    pub value: String,
}

impl ConcentrationEntry {
    pub fn new(species: &str, value: &str) -> Self {
        Self {
            species: species.to_string(),
            value: value.to_string(),
        }
    }

    pub fn kind(&self) -> CompoundKind {
        if self.species == FREE_SITE {
            CompoundKind::FreeSite
        } else if self.species.contains(FREE_SITE) {
            CompoundKind::Surface
        } else {
            CompoundKind::Gas
        }
    }
    /// `name ; surface ; initial concentration`
    pub fn row(&self) -> String {
        format!(
            "{:<6} ; {:<7} ; {:<8}",
            self.species,
            self.kind().surface_flag(),
            self.value
        )
    }
}

/// rows of the three groups, input order kept inside each group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortedConcentrations {
    pub gas_compounds: Vec<String>,
    pub surface_compounds: Vec<String>,
    pub free_sites: Vec<String>,
}

pub fn sort_concentrations(entries: &[ConcentrationEntry]) -> SortedConcentrations {
    let mut sorted = SortedConcentrations::default();
    for entry in entries {
        let group = match entry.kind() {
            CompoundKind::Gas => &mut sorted.gas_compounds,
            CompoundKind::Surface => &mut sorted.surface_compounds,
            CompoundKind::FreeSite => &mut sorted.free_sites,
        };
        group.push(entry.row());
    }
    sorted
}

/// JSON object `{"CO2": "0.4", "*": 1}` into entries, in document order
pub fn entries_from_map(map: &Map<String, Value>) -> Vec<ConcentrationEntry> {
    map.iter()
        .map(|(species, value)| ConcentrationEntry {
            species: species.clone(),
            value: text_of(value),
        })
        .collect()
}

pub fn deserialize_concentrations<'de, D>(
    deserializer: D,
) -> Result<Vec<ConcentrationEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Map::<String, Value>::deserialize(deserializer)?;
    Ok(entries_from_map(&map))
}
