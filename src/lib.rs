pub mod config;
pub mod engine;
pub mod model;
pub mod traits;

#[cfg(test)]
mod test_utils;
