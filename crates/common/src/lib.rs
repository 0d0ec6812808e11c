//! Cross-cutting helpers shared by the server and the binary: logging setup,
//! startup environment checks and small wire types.

pub mod types;
pub mod utils;
pub mod env;
