use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("Not enough Pokémon to start the game: {available} available, {required} required")]
    InsufficientPool { available: usize, required: usize },

    #[error("Please select exactly {expected} Pokémon, got {actual}")]
    WrongSquadSize { expected: usize, actual: usize },

    #[error("Pokémon #{0} was picked more than once")]
    DuplicatePick(u32),

    #[error("Pokémon #{0} is not among the offered Pokémon")]
    UnknownPick(u32),
}
