//! Generator producing randomized player statistics records.

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::record::PlayerStatRecord;

/// Generator that produces randomized player statistics records.
///
/// The generator holds its own seeded random number generator, so two
/// generators constructed with the same seed emit the same sequence of
/// records (apart from the wall-clock timestamp). Every field is drawn
/// independently; no cross-field consistency is enforced, which is intended
/// for load testing rather than realism.
pub struct StatsGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
}

impl StatsGenerator {
    /// Create a generator with a fixed seed for deterministic output.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generate the next player statistics record.
    ///
    /// The draw order is fixed: season start year, then playerId, gameId,
    /// points, rebounds, assists, steals, blocks, fouls, turnovers, teamId,
    /// then minutes played (in tenths), then the two halves of the record id.
    /// Callers relying on seeded reproducibility depend on this order.
    pub fn generate(&mut self) -> PlayerStatRecord {
        let year: i64 = self.rng.gen_range(2020..=2024);
        let player_id: i64 = self.rng.gen_range(1..=14);
        let game_id: i64 = self.rng.gen_range(1..=50);
        let points = self.rng.gen_range(0..=50);
        let rebounds = self.rng.gen_range(0..=25);
        let assists = self.rng.gen_range(0..=20);
        let steals = self.rng.gen_range(0..=10);
        let blocks = self.rng.gen_range(0..=10);
        let fouls = self.rng.gen_range(0..=6);
        let turnovers = self.rng.gen_range(0..=10);
        let team_id = self.rng.gen_range(0..=10);
        let minute_tenths: i64 = self.rng.gen_range(0..=480);
        let id_high: i64 = self.rng.gen_range(0..=10_000_000);
        let id_low: i64 = self.rng.gen_range(0..=10_000_000);

        PlayerStatRecord {
            player_id: player_id.to_string(),
            game_id: game_id.to_string(),
            timestamp: local_timestamp(),
            season: format!("{year}-{}", year + 1),
            points,
            rebounds,
            assists,
            steals,
            blocks,
            fouls,
            turnovers,
            team_id,
            id: format!("{id_high}-{id_low}"),
            minutes_played: format_minute_tenths(minute_tenths),
        }
    }
}

/// Current local instant in ISO 8601, microsecond precision, no UTC offset.
fn local_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Render a tenths-of-a-minute count as an exact decimal string.
///
/// Integer arithmetic only; whole minutes render without a fractional digit
/// (240 -> "24", 237 -> "23.7").
fn format_minute_tenths(tenths: i64) -> String {
    if tenths % 10 == 0 {
        (tenths / 10).to_string()
    } else {
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}
