//! Turns database equations like `CO* + O* - 0* -> CO2(g) + 2*` into the bracketed notation
//! MKMCXX reads: `{CO*} + {O*}  => {CO2} + 2{*}`.
//!
//! Rules:
//! 1) the gas marker `(g)` is removed everywhere
//! 2) the equation is split on `->` (exactly one is required)
//! 3) each side is cut at every `+`/`-`, the separators are kept to be written back
//! 4) leading digits of a term are its coefficient, the rest is the species name
//! 5) a term is written as `coefficient{species}`
//! 6) zero free sites `0{*}` written after a separator (`+ 0{*}`, `- 0{*}`) are dropped,
//!    they are bookkeeping noise of some databases
use thiserror::Error;

pub const GAS_MARKER: &str = "(g)";
pub const ARROW: &str = "->";
pub const MKM_ARROW: &str = "=>";
pub const FREE_SITE: &str = "*";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquationError {
    #[error("equation '{0}' has no '->' separator")]
    MissingArrow(String),
    #[error("equation '{0}' has more than one '->' separator")]
    MultipleArrows(String),
}

/// splits equation into trimmed (reactants, products)
pub fn split_sides(equation: &str) -> Result<(&str, &str), EquationError> {
    let mut parts = equation.split(ARROW);
    let reactants = parts.next().unwrap_or_default();
    let products = parts
        .next()
        .ok_or_else(|| EquationError::MissingArrow(equation.to_string()))?;
    if parts.next().is_some() {
        return Err(EquationError::MultipleArrows(equation.to_string()));
    }
    Ok((reactants.trim(), products.trim()))
}

/// one term of a side: optional integer coefficient and species name
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coefficient: Option<String>,
    pub species: String,
}

impl Term {
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        let digits_end = token
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(token.len());
        let (coefficient, species) = token.split_at(digits_end);
        Self {
            coefficient: (!coefficient.is_empty()).then(|| coefficient.to_string()),
            species: species.trim().to_string(),
        }
    }
    /// `0*`
    pub fn is_zero_free_site(&self) -> bool {
        self.coefficient.as_deref() == Some("0") && self.species == FREE_SITE
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.coefficient {
            Some(coefficient) => write!(f, "{}{{{}}}", coefficient, self.species),
            None => write!(f, "{{{}}}", self.species),
        }
    }
}

/// terms of one side of equation and the `+`/`-` between them
/// (`separators.len() == terms.len() - 1`)
#[derive(Debug, Clone, PartialEq)]
pub struct Side {
    pub terms: Vec<Term>,
    pub separators: Vec<char>,
}

impl Side {
    pub fn tokenize(side: &str) -> Self {
        let mut terms = Vec::new();
        let mut separators = Vec::new();
        let mut current = String::new();
        for c in side.chars() {
            if c == '+' || c == '-' {
                terms.push(Term::parse(&current));
                separators.push(c);
                current.clear();
            } else {
                current.push(c);
            }
        }
        terms.push(Term::parse(&current));
        Self { terms, separators }
    }

    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                if term.is_zero_free_site() {
                    continue;
                }
                rendered.push(' ');
                rendered.push(self.separators[i - 1]);
                rendered.push(' ');
            }
            rendered.push_str(&term.to_string());
        }
        rendered
    }
}

/// equation in MKMCXX notation
pub fn format_equation(equation: &str) -> Result<String, EquationError> {
    let without_gas = equation.replace(GAS_MARKER, "");
    let (reactants, products) = split_sides(&without_gas).map_err(|e| match e {
        // report the equation as the user gave it
        EquationError::MissingArrow(_) => EquationError::MissingArrow(equation.to_string()),
        EquationError::MultipleArrows(_) => EquationError::MultipleArrows(equation.to_string()),
    })?;
    let reactants = Side::tokenize(reactants);
    let products = Side::tokenize(products);
    let formatted = format!(
        "{}  {} {}",
        reactants.render(),
        MKM_ARROW,
        products.render()
    );
    Ok(formatted.trim_end().to_string())
}
