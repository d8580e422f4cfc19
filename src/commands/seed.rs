//! Seed command implementation

use crate::{
    storage::{seed_demo_data, LeagueDatabase, SeedReport},
    Result,
};

/// Handle the seed command
pub fn handle_seed(db: &mut LeagueDatabase) -> Result<SeedReport> {
    let report = seed_demo_data(db)?;

    if report.already_seeded {
        println!("Database already contains teams; nothing to do.");
    } else {
        println!("Dummy data populated successfully.");
    }

    Ok(report)
}
