/// eng
/// Client of the Catalysis-Hub reaction database (GraphQL API). Reactions are fetched page by page
/// with optional filters on reactants, products, surface composition and facet, and come back as
/// reaction records ready to be used in an input file request.
/// ----------------------------------------------------------------
/// The HTTP client is injected through the `HttpClient` trait so the module is tested without
/// network access.
pub mod catalysis_hub_api;
