//! Type-safe wrappers for league data.

pub mod ids;
pub mod winner;

#[cfg(test)]
mod tests;

pub use ids::{FixtureId, LeagueId, TeamId};
pub use winner::{Winner, DRAW};
