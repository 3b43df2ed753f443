//! Surface reaction records as they come from Catalysis-Hub or the local reaction base.
//!
//! Records arrive as JSON with the database field names (`Equation`, `activationEnergy`,
//! `reactionEnergy`, `coverages`, `molecularData`, `surfaceComposition`). Energies may be
//! numbers or strings, `coverages` is an annotation like `{"COstar": 2}` and `molecularData`
//! is an embedded JSON document (sometimes already an object). All of that is resolved once,
//! when the record is built, into typed fields.
use crate::MicroKinetics::number_format::JsonNumber;
use crate::MicroKinetics::resolved::{Fallback, Resolved};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_ENERGY: f64 = 1.0;
pub const DEFAULT_COVERAGE: i64 = 1;

/// record exactly as deserialized from the database JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawReactionRecord {
    #[serde(rename = "Equation")]
    pub equation: String,
    #[serde(rename = "activationEnergy", default)]
    pub activation_energy: Value,
    #[serde(rename = "reactionEnergy", default)]
    pub reaction_energy: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverages: Option<Value>,
    #[serde(rename = "molecularData", default, skip_serializing_if = "Option::is_none")]
    pub molecular_data: Option<Value>,
    #[serde(rename = "surfaceComposition", default)]
    pub surface_composition: Option<String>,
}

/// molecular data of one species; a field that is absent or not a number is 0
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesData {
    pub molecular_weight: Resolved<JsonNumber>,
    pub symmetry_sigma: Resolved<JsonNumber>,
    pub rotational_constant: Resolved<JsonNumber>,
}

impl Default for SpeciesData {
    fn default() -> Self {
        let missing = Resolved::Defaulted(JsonNumber::default(), Fallback::Missing);
        Self {
            molecular_weight: missing.clone(),
            symmetry_sigma: missing.clone(),
            rotational_constant: missing,
        }
    }
}

impl SpeciesData {
    fn fields(&self) -> [(&'static str, &Resolved<JsonNumber>); 3] {
        [
            ("molecularWeight", &self.molecular_weight),
            ("symmetrySigma", &self.symmetry_sigma),
            ("rotationalConstant", &self.rotational_constant),
        ]
    }
}

/// molecular data of all species of reaction, in the order of the JSON document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MolecularData {
    pub species: Vec<(String, SpeciesData)>,
}

impl MolecularData {
    /// accepts an object or a string containing JSON object; None if neither
    pub fn from_value(value: &Value) -> Option<Self> {
        let parsed;
        let object = match value {
            Value::Object(map) => map,
            Value::String(text) => {
                parsed = serde_json::from_str::<Value>(text).ok()?;
                parsed.as_object()?
            }
            _ => return None,
        };
        let species = object
            .iter()
            .map(|(name, data)| {
                let field = |key: &str| resolve_molecular_field(data.get(key));
                (
                    name.clone(),
                    SpeciesData {
                        molecular_weight: field("molecularWeight"),
                        symmetry_sigma: field("symmetrySigma"),
                        rotational_constant: field("rotationalConstant"),
                    },
                )
            })
            .collect();
        Some(Self { species })
    }
    /// data of the first species - the one MKMCXX gets for the adsorbing molecule
    pub fn first(&self) -> Option<&SpeciesData> {
        self.species.first().map(|(_, data)| data)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawReactionRecord")]
pub struct ReactionRecord {
    pub equation: String,
    pub activation_energy: Resolved<f64>,
    pub reaction_energy: Resolved<f64>,
    pub coverage: Resolved<i64>,
    pub molecular_data: Option<MolecularData>,
    pub surface_composition: String,
    pub raw: RawReactionRecord,
}

impl From<RawReactionRecord> for ReactionRecord {
    fn from(raw: RawReactionRecord) -> Self {
        let equation = raw.equation.clone();
        let activation_energy = resolve_energy(&raw.activation_energy);
        let reaction_energy = resolve_energy(&raw.reaction_energy);
        let coverage = match &raw.coverages {
            None | Some(Value::Null) => get_coverage(None),
            Some(Value::String(text)) => get_coverage(Some(text)),
            Some(other) => Resolved::Defaulted(DEFAULT_COVERAGE, Fallback::Unparsable(other.to_string())),
        };
        for (name, resolved) in [
            ("activationEnergy", &activation_energy),
            ("reactionEnergy", &reaction_energy),
        ] {
            if let Some(reason) = resolved.fallback() {
                warn!(
                    "reaction '{}': {} {}, using {}",
                    equation, name, reason, DEFAULT_ENERGY
                );
            }
        }
        if let Resolved::Defaulted(_, reason @ (Fallback::Unparsable(_) | Fallback::ZeroCoverage)) =
            &coverage
        {
            warn!(
                "reaction '{}': coverage {}, using {}",
                equation, reason, DEFAULT_COVERAGE
            );
        }
        let molecular_data = raw.molecular_data.as_ref().and_then(|value| {
            let data = MolecularData::from_value(value);
            if data.is_none() && !value.is_null() {
                warn!(
                    "reaction '{}': molecular data is not a JSON object, molecular fields default to 0",
                    equation
                );
            }
            data
        });
        if let Some((name, species)) = molecular_data.as_ref().and_then(|data| data.species.first()) {
            for (field, resolved) in species.fields() {
                if let Some(reason) = resolved.fallback() {
                    warn!(
                        "reaction '{}': {} of '{}' {}, using 0",
                        equation, field, name, reason
                    );
                }
            }
        }
        let surface_composition = raw.surface_composition.clone().unwrap_or_default();
        Self {
            equation,
            activation_energy,
            reaction_energy,
            coverage,
            molecular_data,
            surface_composition,
            raw,
        }
    }
}

impl ReactionRecord {
    pub fn new(equation: &str, activation_energy: Value, reaction_energy: Value) -> Self {
        RawReactionRecord {
            equation: equation.to_string(),
            activation_energy,
            reaction_energy,
            ..Default::default()
        }
        .into()
    }

    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn with_coverages(self, coverages: &str) -> Self {
        let mut raw = self.raw;
        raw.coverages = Some(Value::String(coverages.to_string()));
        raw.into()
    }

    pub fn with_molecular_data(self, molecular_data: Value) -> Self {
        let mut raw = self.raw;
        raw.molecular_data = Some(molecular_data);
        raw.into()
    }

    pub fn with_surface(self, surface: &str) -> Self {
        let mut raw = self.raw;
        raw.surface_composition = Some(surface.to_string());
        raw.into()
    }
    /// first species of the molecular data, all fields defaulted if there is no data
    pub fn species_data(&self) -> SpeciesData {
        self.molecular_data
            .as_ref()
            .and_then(|data| data.first().cloned())
            .unwrap_or_default()
    }
}

/// number of molecular data; numeric text (`"2"`, `"28.0"`) is accepted as the number it spells
fn resolve_molecular_field(value: Option<&Value>) -> Resolved<JsonNumber> {
    let missing = || Resolved::Defaulted(JsonNumber::default(), Fallback::Missing);
    let unparsable = |text: String| Resolved::Defaulted(JsonNumber::default(), Fallback::Unparsable(text));
    match value {
        None | Some(Value::Null) => missing(),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                Resolved::Parsed(JsonNumber::Int(i))
            } else {
                match trimmed.parse::<f64>() {
                    Ok(f) if f.is_finite() => Resolved::Parsed(JsonNumber::Float(f)),
                    _ => unparsable(text.clone()),
                }
            }
        }
        Some(other) => match JsonNumber::from_value(other) {
            Some(number) => Resolved::Parsed(number),
            None => unparsable(other.to_string()),
        },
    }
}

fn resolve_energy(value: &Value) -> Resolved<f64> {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(v) => Resolved::Parsed(v),
            None => Resolved::Defaulted(DEFAULT_ENERGY, Fallback::Unparsable(n.to_string())),
        },
        Value::String(text) => match text.trim().parse::<f64>() {
            Ok(v) => Resolved::Parsed(v),
            Err(_) => Resolved::Defaulted(DEFAULT_ENERGY, Fallback::Unparsable(text.clone())),
        },
        Value::Null => Resolved::Defaulted(DEFAULT_ENERGY, Fallback::Missing),
        other => Resolved::Defaulted(DEFAULT_ENERGY, Fallback::Unparsable(other.to_string())),
    }
}

/// coverage multiplier from annotation `"<label>:<int>}"`; 1 whenever it is absent, malformed
/// or zero
pub fn get_coverage(annotation: Option<&str>) -> Resolved<i64> {
    let Some(text) = annotation else {
        return Resolved::Defaulted(DEFAULT_COVERAGE, Fallback::Missing);
    };
    let unparsable = || Resolved::Defaulted(DEFAULT_COVERAGE, Fallback::Unparsable(text.to_string()));
    let Some(value_part) = text.split(':').nth(1) else {
        return unparsable();
    };
    // drop the closing brace
    let mut chars = value_part.trim().chars();
    chars.next_back();
    match chars.as_str().trim().parse::<i64>() {
        Ok(0) => Resolved::Defaulted(DEFAULT_COVERAGE, Fallback::ZeroCoverage),
        Ok(coverage) => Resolved::Parsed(coverage),
        Err(_) => unparsable(),
    }
}
