use thiserror::Error;

pub mod catalog;
pub mod request;
pub mod response;


pub use catalog::{
    Catalog, CatalogEntry, PokemonId, PokemonRecord, PokemonSummary, SkippedEntry, UnitRecord,
    parse_catalog,
};
pub use request::{TurnRequest, parse_turn_request};
pub use response::{ErrorResponse, StartResponse, TurnResponse, Winner};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON document: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("No data provided.")]
    EmptyBody,
}
