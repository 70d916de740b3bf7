// src/scrape/mod.rs
//! Lookup orchestration: fetch a page through the [`Fetch`](crate::fetch::Fetch)
//! boundary, run the matching spec, and assemble typed records. Specs extract,
//! this layer decides — translation, rank math, field defaulting and
//! pagination all happen here, once, at the assembly boundary.

pub mod leaderboard;
pub mod player;

pub use leaderboard::{Category, LeaderboardEntry, LeaderboardPage, lookup_leaderboard};
pub use player::{Equipment, PlayerProfile, RankingEntry, lookup_player};
