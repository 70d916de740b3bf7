// src/specs/mod.rs
//! Page-specific extraction specs.
//!
//! Each spec knows *where the ground truth lives* in one of the site's pages
//! and how to read it tolerantly: case-insensitive tag scanning, local
//! matching inside known blocks, entity/whitespace normalization. Specs are
//! pure functions over a raw document string — no fetching, no translation,
//! no rank math — so they test offline against captured or synthetic HTML.
//!
//! Conventions:
//! - The *defining anchor* of a page (profile: the bold name in the stats
//!   container; leaderboard: any table) decides the whole record: absent
//!   anchor → `None`, and the caller reports "not found".
//! - Everything else degrades per field or per row: a malformed row is
//!   skipped, a missing fragment becomes an empty `Option`/`Vec`.
//! - Raw localized text passes through untranslated; the `scrape` layer owns
//!   vocabulary and typing.

pub mod leaderboard;
pub mod profile;
