// src/lib.rs

#[macro_use]
pub mod macros;

pub mod core;
pub mod error;
pub mod fetch;
pub mod params;
pub mod ranks;
pub mod scrape;
pub mod specs;
pub mod translate;

pub use error::LookupError;
pub use fetch::{Fetch, FetchError, FetchedPage, HttpFetcher};
pub use ranks::{Rank, RankProgress, progress_for, rank_for};
pub use scrape::{
    Category, Equipment, LeaderboardEntry, LeaderboardPage, PlayerProfile, RankingEntry,
    lookup_leaderboard, lookup_player,
};
