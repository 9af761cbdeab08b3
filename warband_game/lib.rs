pub mod battle;
pub mod config;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
