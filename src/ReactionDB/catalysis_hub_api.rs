//! # Catalysis-Hub GraphQL client
//!
//! ## Aim
//! Fetches surface reactions with DFT energetics from Catalysis-Hub
//! (https://api.catalysis-hub.org/graphql) so they can be used as `reactions_data` of an input
//! file request.
//!
//! ## Main Data Structures and Logic
//! - `ReactionSource`: anything that can give reactions page by page and count them
//! - `CatalysisHubClient<C>`: GraphQL implementation with dependency injection of the HTTP
//!   client (real `reqwest` client or a mock in tests)
//! - `ReactionQuery`: filters; `~` is the Catalysis-Hub wildcard ("contains"), so the default
//!   query matches everything
//! - pagination is cursor based: `first: <page size>` and `after: "<endCursor of previous page>"`
//!
//! ## Usage
//! ```rust, ignore
//! let client = CatalysisHubClient::new();
//! let query = ReactionQuery::default().with_surface("Pt").with_reactants("CO");
//! let total = client.count_reactions(&query)?;
//! let reactions = fetch_all_reactions(&client, &query, Some(200))?;
//! ```
use crate::MicroKinetics::reaction_record::ReactionRecord;
use log::{info, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;
use url::Url;

pub const CATALYSIS_HUB_ENDPOINT: &str = "https://api.catalysis-hub.org/graphql";
pub const DEFAULT_PAGE_SIZE: usize = 100;
/// matches any value in Catalysis-Hub filters
pub const WILDCARD: &str = "~";

/// fields of reaction node requested from the server
const NODE_FIELDS: &str = "Equation
            sites
            id
            pubId
            dftCode
            dftFunctional
            reactants
            products
            facet
            chemicalComposition
            reactionEnergy
            activationEnergy
            surfaceComposition
            reactionSystems {
              name
              energyCorrection
              aseId
            }";

/// HTTP client trait for dependency injection
pub trait HttpClient {
    /// posts JSON body, returns (status code, response text)
    fn post_json(&self, url: &str, body: &Value) -> Result<(u16, String), reqwest::Error>;
}

impl HttpClient for Client {
    fn post_json(&self, url: &str, body: &Value) -> Result<(u16, String), reqwest::Error> {
        let response = self.post(url).json(body).send()?;
        let status = response.status().as_u16();
        Ok((status, response.text()?))
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionQuery {
    pub reactants: String,
    pub products: String,
    pub surface_composition: String,
    /// sent as `~<facet>`, empty matches every facet
    pub facet: String,
}

impl Default for ReactionQuery {
    fn default() -> Self {
        Self {
            reactants: WILDCARD.to_string(),
            products: WILDCARD.to_string(),
            surface_composition: WILDCARD.to_string(),
            facet: String::new(),
        }
    }
}

impl ReactionQuery {
    /// empty filters mean "anything", as in the web form
    pub fn new(reactants: &str, products: &str, surface_composition: &str, facet: &str) -> Self {
        let or_wildcard = |s: &str| {
            if s.trim().is_empty() {
                WILDCARD.to_string()
            } else {
                s.trim().to_string()
            }
        };
        Self {
            reactants: or_wildcard(reactants),
            products: or_wildcard(products),
            surface_composition: or_wildcard(surface_composition),
            facet: facet.trim().to_string(),
        }
    }

    pub fn with_reactants(mut self, reactants: &str) -> Self {
        self.reactants = reactants.to_string();
        self
    }

    pub fn with_products(mut self, products: &str) -> Self {
        self.products = products.to_string();
        self
    }

    pub fn with_surface(mut self, surface_composition: &str) -> Self {
        self.surface_composition = surface_composition.to_string();
        self
    }

    pub fn with_facet(mut self, facet: &str) -> Self {
        self.facet = facet.to_string();
        self
    }
    /// arguments of the `reactions(...)` field without pagination
    fn filter_arguments(&self) -> String {
        format!(
            "surfaceComposition: {}, facet: {}, reactants: {}, products: {}",
            graphql_string(&self.surface_composition),
            graphql_string(&format!("{}{}", WILDCARD, self.facet)),
            graphql_string(&self.reactants),
            graphql_string(&self.products)
        )
    }
}

/// JSON string literal is a valid GraphQL string literal
fn graphql_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

#[derive(Debug, Clone)]
pub struct ReactionPage {
    pub records: Vec<ReactionRecord>,
    /// cursor to request the next page with
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

pub trait ReactionSource {
    /// one page of reactions, `None` cursor gives the first page
    fn fetch_reactions(
        &self,
        query: &ReactionQuery,
        cursor: Option<&str>,
    ) -> Result<ReactionPage, SourceError>;

    fn count_reactions(&self, query: &ReactionQuery) -> Result<u64, SourceError>;
}

pub struct CatalysisHubClient<C: HttpClient> {
    client: C,
    endpoint: Url,
    page_size: usize,
}

impl CatalysisHubClient<Client> {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            // constant address, always valid
            endpoint: Url::parse(CATALYSIS_HUB_ENDPOINT).unwrap(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for CatalysisHubClient<Client> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> CatalysisHubClient<C> {
    pub fn with_client(client: C, endpoint: &str, page_size: usize) -> Result<Self, SourceError> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self {
            client,
            endpoint,
            page_size: page_size.max(1),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn build_page_query(&self, query: &ReactionQuery, cursor: Option<&str>) -> String {
        let after = match cursor {
            Some(cursor) => format!(", after: {}", graphql_string(cursor)),
            None => String::new(),
        };
        format!(
            "query {{
      reactions(first: {}, {}{}) {{
        totalCount
        pageInfo {{
          hasNextPage
          endCursor
        }}
        edges {{
          node {{
            {}
          }}
        }}
      }}
    }}",
            self.page_size,
            query.filter_arguments(),
            after,
            NODE_FIELDS
        )
    }

    pub fn build_count_query(&self, query: &ReactionQuery) -> String {
        format!(
            "query {{ reactions(first: 0, {}) {{ totalCount }} }}",
            query.filter_arguments()
        )
    }
    /// `data.reactions` of the GraphQL answer
    fn post_query(&self, graphql: &str) -> Result<Value, SourceError> {
        let body = json!({ "query": graphql });
        let (status, text) = self.client.post_json(self.endpoint.as_str(), &body)?;
        if status != 200 {
            return Err(SourceError::InvalidResponse(format!(
                "HTTP status {} from {}",
                status, self.endpoint
            )));
        }
        let mut response: Value = serde_json::from_str(&text)?;
        if let Some(errors) = response.get("errors").and_then(Value::as_array) {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| {
                    e.get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown error")
                        .to_string()
                })
                .collect();
            return Err(SourceError::InvalidResponse(messages.join("; ")));
        }
        response
            .pointer_mut("/data/reactions")
            .map(Value::take)
            .filter(|reactions| reactions.is_object())
            .ok_or_else(|| SourceError::InvalidResponse("no data.reactions in response".to_string()))
    }
}

impl<C: HttpClient> ReactionSource for CatalysisHubClient<C> {
    fn fetch_reactions(
        &self,
        query: &ReactionQuery,
        cursor: Option<&str>,
    ) -> Result<ReactionPage, SourceError> {
        let reactions = self.post_query(&self.build_page_query(query, cursor))?;
        let edges = reactions
            .get("edges")
            .and_then(Value::as_array)
            .ok_or_else(|| SourceError::InvalidResponse("no edges in response".to_string()))?;
        let mut records = Vec::with_capacity(edges.len());
        for edge in edges {
            match edge.get("node") {
                Some(node) => records.push(ReactionRecord::from_json(node.clone())?),
                None => warn!("edge without node skipped"),
            }
        }
        let page_info = reactions.get("pageInfo");
        let has_more = page_info
            .and_then(|info| info.get("hasNextPage"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let next_cursor = page_info
            .and_then(|info| info.get("endCursor"))
            .and_then(Value::as_str)
            .map(str::to_string);
        info!(
            "{} reactions received from {}, more pages: {}",
            records.len(),
            self.endpoint,
            has_more
        );
        Ok(ReactionPage {
            records,
            next_cursor,
            has_more,
        })
    }

    fn count_reactions(&self, query: &ReactionQuery) -> Result<u64, SourceError> {
        let reactions = self.post_query(&self.build_count_query(query))?;
        reactions
            .get("totalCount")
            .and_then(Value::as_u64)
            .ok_or_else(|| SourceError::InvalidResponse("no totalCount in response".to_string()))
    }
}

/// walks the pages until the source has no more of them or `max_records` are collected
pub fn fetch_all_reactions<S: ReactionSource>(
    source: &S,
    query: &ReactionQuery,
    max_records: Option<usize>,
) -> Result<Vec<ReactionRecord>, SourceError> {
    let mut records = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let page = source.fetch_reactions(query, cursor.as_deref())?;
        records.extend(page.records);
        if let Some(max) = max_records {
            if records.len() >= max {
                records.truncate(max);
                break;
            }
        }
        match (page.has_more, page.next_cursor) {
            (true, Some(next)) => cursor = Some(next),
            (true, None) => {
                warn!("server reports more pages but gives no cursor, stopping");
                break;
            }
            (false, _) => break,
        }
    }
    Ok(records)
}
