//! Material evaluation: specialized endgame evaluators, the imbalance polynomial and the
//! per-thread cache tying them together.

pub mod classify;
pub mod endgame;
mod imbalance;
mod material;
mod push_tables;
#[cfg(test)]
mod tests;

pub use endgame::{Endgame, EndgameKind, Endgames, ScaleEndgame, ScaleFn};
pub use imbalance::{imbalance, PieceCounts};
pub use material::{Entry, MaterialTable};
