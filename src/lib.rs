pub mod error;
pub mod models;
pub mod parsing;
pub mod roster;
pub mod teams;

pub use error::Error;
