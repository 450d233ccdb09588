//! JSON-in, JSON-out game operations
//!
//! Each operation takes a request document and returns a [`Reply`] carrying
//! an HTTP-equivalent status and the response document. Client mistakes map
//! to 4xx with a readable message; anything else is a generic 500.

use pokemap_battle::{BattleError, BattleRules, BattleSession, Creature, TeamState, advance_with};
use pokemap_protocol::{
    ErrorResponse, ParseError, StartResponse, TurnRequest, TurnResponse, parse_turn_request,
};
use pokemap_team::{StartingTeams, TeamError, TeamInitializer, UnitPolicy};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

const NOT_ENOUGH_POKEMON: &str = "Not enough Pokémon in the database to start the game.";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Team(#[from] TeamError),

    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ServiceError {
    /// Error document shown to the caller
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            ServiceError::Parse(e) => ErrorResponse::bad_request(e.to_string()),
            ServiceError::Battle(e) => ErrorResponse::bad_request(e.to_string()),
            ServiceError::Team(TeamError::InsufficientPool { .. }) => {
                ErrorResponse::not_found(NOT_ENOUGH_POKEMON)
            }
            ServiceError::Team(e) => ErrorResponse::bad_request(e.to_string()),
            ServiceError::Encode(_) => ErrorResponse::internal(),
        }
    }
}

/// Status plus JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub const OK: u16 = 200;

    pub fn is_success(&self) -> bool {
        self.status == Self::OK
    }

    fn ok<T: Serialize>(document: &T) -> Self {
        match serde_json::to_string_pretty(document) {
            Ok(body) => Self {
                status: Self::OK,
                body,
            },
            Err(e) => Self::from_error(&ServiceError::Encode(e)),
        }
    }

    fn from_error(err: &ServiceError) -> Self {
        let response = err.to_response();
        if response.is_client_error() {
            warn!(status = response.status, error = %err, "request rejected");
        } else {
            error!(error = %err, "internal fault");
        }
        Self {
            status: response.status,
            // An ErrorResponse is two plain fields and always encodes
            body: serde_json::to_string_pretty(&response).unwrap_or_default(),
        }
    }

    fn from_result<T: Serialize>(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(document) => Self::ok(&document),
            Err(e) => Self::from_error(&e),
        }
    }
}

/// Sample starting teams from the catalog
pub fn start_teams<P: UnitPolicy, R: Rng + ?Sized>(
    pool: &[Creature],
    initializer: &TeamInitializer<P>,
    rng: &mut R,
) -> Result<StartingTeams, ServiceError> {
    Ok(initializer.start(pool, rng)?)
}

/// The "start" operation
pub fn start_game<P: UnitPolicy, R: Rng + ?Sized>(
    pool: &[Creature],
    initializer: &TeamInitializer<P>,
    rng: &mut R,
) -> Reply {
    Reply::from_result(start_teams(pool, initializer, rng).map(|teams| teams.to_protocol()))
}

/// Confirm the user's picks from a start document, producing the first
/// turn request
pub fn open_session(
    start: &StartResponse,
    picks: &[u32],
    squad_size: usize,
) -> Result<TurnRequest, ServiceError> {
    let user = TeamState::from_protocol(&start.user_pokemon)?;
    let cpu = TeamState::from_protocol(&start.cpu_pokemon)?;
    let session = StartingTeams { user, cpu }.into_session(picks, squad_size)?;
    Ok(TurnRequest {
        user_team: session.user_team.to_protocol(),
        cpu_team: session.cpu_team.to_protocol(),
        current_turn: i64::from(session.current_turn),
    })
}

/// Play one turn from a request document
pub fn resolve_turn(
    body: &str,
    rules: &BattleRules,
) -> Result<TurnResponse, ServiceError> {
    let request = parse_turn_request(body)?;
    let session = BattleSession::from_protocol(&request)?;
    let result = advance_with(session, rules)?;
    debug!(
        turn = result.session.current_turn,
        game_over = result.game_over,
        "turn resolved"
    );
    Ok(result.to_protocol())
}

/// The "turn" operation
pub fn play_turn(body: &str, rules: &BattleRules) -> Reply {
    Reply::from_result(resolve_turn(body, rules))
}
