// src/scrape/leaderboard.rs
//
// Leaderboard lookup: one fetch brings every category's full standing; the
// requested category is cut into fixed-size pages in memory.

use std::str::FromStr;

use crate::core::num::parse_integer;
use crate::error::LookupError;
use crate::fetch::Fetch;
use crate::params::{self, PAGE_SIZE};
use crate::ranks::Rank;
use crate::specs::leaderboard::{self, RawEntry};
use crate::translate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Experience,
    Crystals,
    Kills,
    Goldboxes,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Experience,
        Category::Crystals,
        Category::Kills,
        Category::Goldboxes,
    ];

    /// Caption fragment identifying this category's container on the page.
    pub fn label_ru(self) -> &'static str {
        match self {
            Category::Experience => "по заработанному опыту",
            Category::Crystals => "по заработанным кристаллам",
            Category::Kills => "по убийствам",
            Category::Goldboxes => "по пойманным голдам",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::Experience => "experience",
            Category::Crystals => "crystals",
            Category::Kills => "kills",
            Category::Goldboxes => "goldboxes",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Experience => "Experience Earned",
            Category::Crystals => "Crystals Earned",
            Category::Kills => "Kills",
            Category::Goldboxes => "Gold Boxes Caught",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "experience" | "xp" => Ok(Category::Experience),
            "crystals" => Ok(Category::Crystals),
            "kills" => Ok(Category::Kills),
            "goldboxes" | "gold" => Ok(Category::Goldboxes),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// 1-based standing; 0 when the page showed something non-numeric.
    pub position: u64,
    pub name: String,
    pub rank: Rank,
    pub value: u64,
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardPage {
    pub category: Category,
    pub page: u32,
    pub total_pages: usize,
    pub total_players: usize,
    pub entries: Vec<LeaderboardEntry>,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Fetch the standings for `category` and return its 1-based `page`.
/// Pages past the end are not an error: they come back empty with
/// `has_next == false`.
pub fn lookup_leaderboard(
    fetch: &dyn Fetch,
    category: Category,
    page: u32,
) -> Result<LeaderboardPage, LookupError> {
    let fetched = fetch.fetch(&params::leaderboard_url())?;
    let raw = leaderboard::extract(&fetched.body, category.label_ru())
        .ok_or(LookupError::NotFound)?;

    let entries = raw.into_iter().map(to_entry).collect();
    Ok(paginate(category, page, entries))
}

fn to_entry(raw: RawEntry) -> LeaderboardEntry {
    // Digits only; a decorated cell ("1.", "—") counts as unknown.
    let all_digits = !raw.position.is_empty() && raw.position.chars().all(|c| c.is_ascii_digit());
    LeaderboardEntry {
        position: if all_digits { parse_integer(&raw.position) } else { 0 },
        name: raw.name,
        rank: translate::rank_from_image(&raw.img_src),
        value: parse_integer(&raw.value),
        profile_url: raw.href.map(|href| join!(params::BASE_URL, &href)),
    }
}

fn paginate(category: Category, page: u32, all: Vec<LeaderboardEntry>) -> LeaderboardPage {
    let total = all.len();
    let start = (page as usize).saturating_sub(1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total);

    let entries = if start < total { all[start..end].to_vec() } else { Vec::new() };

    LeaderboardPage {
        category,
        page,
        total_pages: total.div_ceil(PAGE_SIZE),
        total_players: total,
        has_next: start + entries.len() < total,
        has_previous: page > 1,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(position: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            position,
            name: format!("p{position}"),
            rank: Rank::Recruit,
            value: 1_000 - position,
            profile_url: None,
        }
    }

    fn standings(n: u64) -> Vec<LeaderboardEntry> {
        (1..=n).map(entry).collect()
    }

    #[test]
    fn first_page_of_23() {
        let page = paginate(Category::Experience, 1, standings(23));
        assert_eq!(page.entries.len(), 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_players, 23);
        assert!(!page.has_previous);
        assert!(page.has_next);
        assert_eq!(page.entries[0].position, 1);
    }

    #[test]
    fn last_page_of_23_is_short() {
        let page = paginate(Category::Experience, 3, standings(23));
        assert_eq!(page.entries.len(), 3);
        assert!(page.has_previous);
        assert!(!page.has_next);
        assert_eq!(page.entries[0].position, 21);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = paginate(Category::Kills, 5, standings(23));
        assert!(page.entries.is_empty());
        assert!(!page.has_next);
        assert!(page.has_previous);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let page = paginate(Category::Crystals, 2, standings(20));
        assert_eq!(page.entries.len(), 10);
        assert!(!page.has_next);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn empty_standings() {
        let page = paginate(Category::Goldboxes, 1, Vec::new());
        assert!(page.entries.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn categories_are_distinct() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.label_ru(), b.label_ru());
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn entry_conversion_is_lenient() {
        let raw = RawEntry {
            position: s!("7"),
            name: s!("tanker"),
            href: Some(s!("/user/tanker")),
            img_src: s!("https://i.imgur.com/paF1myt.png"),
            value: s!("1 234 567"),
        };
        let e = to_entry(raw);
        assert_eq!(e.position, 7);
        assert_eq!(e.rank, Rank::Marshal);
        assert_eq!(e.value, 1_234_567);
        assert_eq!(
            e.profile_url.as_deref(),
            Some("https://ratings.ranked-rtanks.online/user/tanker")
        );

        let decorated = RawEntry {
            position: s!("1."),
            name: s!("x"),
            href: None,
            img_src: s!("unknown.png"),
            value: s!("-"),
        };
        let e = to_entry(decorated);
        assert_eq!(e.position, 0);
        assert_eq!(e.rank, Rank::Recruit);
        assert_eq!(e.value, 0);
        assert_eq!(e.profile_url, None);
    }
}
