//! Synthetic player statistics for NBA API load testing.
//!
//! This crate provides the `StatsGenerator` which produces randomized
//! `PlayerStatRecord` values suitable for POSTing to the statistics API.
//! The generator uses a seeded RNG to ensure reproducibility across runs
//! with the same seed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  StatsGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    PlayerStatRecord { playerId, gameId, points, ..., minutesPlayed }
//! ```
//!
//! # Example
//!
//! ```rust
//! use stats_generator::StatsGenerator;
//!
//! let mut generator = StatsGenerator::new(42);
//! let record = generator.generate();
//! println!("Generated record: {:?}", record);
//! ```

pub mod generator;
pub mod record;

// Re-exports for convenience
pub use generator::StatsGenerator;
pub use record::PlayerStatRecord;
