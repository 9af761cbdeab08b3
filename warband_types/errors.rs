pub mod game_error;

pub use game_error::GameError;

pub type Result<T, E = GameError> = std::result::Result<T, E>;
