// src/scrape/player.rs
//
// Player profile lookup: fetch → profile spec → typed record. The name is
// the defining field: no name, no record. Every other field defaults.

use crate::core::num::{parse_decimal, parse_integer};
use crate::error::LookupError;
use crate::fetch::Fetch;
use crate::params;
use crate::ranks::{self, Rank, RankProgress};
use crate::specs::profile::{self, ProfileDoc};
use crate::translate::{
    self, LABEL_DEATHS, LABEL_GOLDBOXES, LABEL_GROUP, LABEL_KD, LABEL_KILLS, LABEL_PREMIUM,
    WORD_YES,
};

/// Canonical (translated, lowercase) turret names. Classification is a closed
/// membership test; an item matching no set is dropped, never guessed.
const TURRETS: &[&str] = &["freeze", "smoky", "isida", "hammer", "twins", "flamethrower"];
const HULLS: &[&str] = &["hunter", "wasp", "dictator", "titan", "viking", "hornet"];
const RESISTANCES: &[&str] = &["dolphin", "ocelot", "badger", "wolf", "panther"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Equipment {
    pub turret: Option<String>,
    pub hull: Option<String>,
    pub paint: Option<String>,
    pub resistances: Vec<String>,
}

/// Position of the player in one leaderboard category.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub category: String,
    pub position: u64,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub rank: Rank,
    pub progress: RankProgress,
    pub kills: u64,
    pub deaths: u64,
    pub kd_ratio: f64,
    pub goldboxes: u64,
    pub premium: bool,
    pub group: String,
    pub equipment: Equipment,
    pub rankings: Vec<RankingEntry>,
    pub profile_url: String,
}

pub fn lookup_player(fetch: &dyn Fetch, username: &str) -> Result<PlayerProfile, LookupError> {
    let url = params::user_url(username);
    let page = fetch.fetch(&url)?;

    // Unknown names bounce back to the site root.
    if redirected_to_root(&page.final_url, username) || page.body.contains("Found. Redirecting to /")
    {
        log::info!("player {username:?} redirected to root");
        return Err(LookupError::NotFound);
    }

    let doc = profile::extract(&page.body).ok_or(LookupError::NotFound)?;
    Ok(assemble(doc, url))
}

fn redirected_to_root(final_url: &str, username: &str) -> bool {
    let expected = join!(params::USER_PATH, username);
    final_url.ends_with('/') && !final_url.ends_with(&expected)
}

fn assemble(doc: ProfileDoc, profile_url: String) -> PlayerProfile {
    let xp = doc.xp_text.as_deref().map(current_xp_of).unwrap_or(0);
    let progress = ranks::progress_for(xp as i64);

    let mut kills = 0u64;
    let mut deaths = 0u64;
    let mut kd_ratio = 0.0f64;
    let mut goldboxes = 0u64;
    let mut premium = false;
    let mut group = s!();

    for (label, value) in &doc.stat_rows {
        if label.contains(LABEL_KILLS) {
            kills = parse_integer(value);
        } else if label.contains(LABEL_DEATHS) {
            deaths = parse_integer(value);
        } else if label.contains(LABEL_KD) {
            kd_ratio = parse_decimal(value);
        } else if label.contains(LABEL_GOLDBOXES) {
            goldboxes = parse_integer(value);
        } else if label.contains(LABEL_GROUP) {
            group = translate::translate(value);
        } else if label.contains(LABEL_PREMIUM) {
            premium = value.contains(WORD_YES);
        }
    }
    if kd_ratio == 0.0 {
        kd_ratio = kd_of(kills, deaths);
    }

    let rankings = doc
        .rankings
        .iter()
        .map(|(category, position, value)| RankingEntry {
            category: translate::category_key(category),
            position: parse_integer(position),
            value: parse_integer(value),
        })
        .collect();

    PlayerProfile {
        name: doc.name,
        rank: progress.rank,
        kills,
        deaths,
        kd_ratio,
        goldboxes,
        premium,
        group,
        equipment: classify_equipment(&doc.equipped, doc.paint.as_deref()),
        rankings,
        progress,
        profile_url,
    }
}

/// Current XP is the left half of the "125 919 / 156 000" fragment.
fn current_xp_of(text: &str) -> u64 {
    match text.split_once('/') {
        Some((current, _)) => parse_integer(current),
        None => 0,
    }
}

/// Fallback when the page omits the ratio row.
fn kd_of(kills: u64, deaths: u64) -> f64 {
    if deaths == 0 {
        if kills > 0 { kills as f64 } else { 0.0 }
    } else {
        (kills as f64 / deaths as f64 * 100.0).round() / 100.0
    }
}

fn classify_equipment(equipped: &[String], paint: Option<&str>) -> Equipment {
    let mut eq = Equipment {
        paint: paint.map(translate::translate),
        ..Equipment::default()
    };
    for raw in equipped {
        let name = translate::translate(raw);
        let lower = name.to_lowercase();
        if TURRETS.iter().any(|t| lower.contains(t)) {
            eq.turret = Some(name);
        } else if HULLS.iter().any(|h| lower.contains(h)) {
            eq.hull = Some(name);
        } else if RESISTANCES.iter().any(|r| lower.contains(r)) {
            eq.resistances.push(name);
        }
        // anything else stays unclassified
    }
    eq
}
