pub mod army;
pub mod battle;
pub mod civilization;
pub mod errors;

pub use errors::Result;
