//! Small helpers shared across layers: request extraction, credential handling,
//! token issuing and value parsing.

pub mod extract;
pub mod parse;
pub mod password;
pub mod token;
pub mod validate;
