//! SeaORM entities for employees and departments, plus the client input
//! types and the validation that turns them into trusted field sets.

pub mod errors;
pub mod db;
pub mod employee;
pub mod department;
mod wire;

#[cfg(test)]
mod tests;
