// src/ranks.rs
//
// XP-threshold rank table. Pure data plus two total functions; nothing here
// touches the network or the markup.

use crate::core::num::format_integer;

/// The closed, ordered set of rank tiers. Variant order follows the XP
/// threshold table, so the derived `Ord` is the rank order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Recruit,
    Private,
    Gefreiter,
    Corporal,
    MasterCorporal,
    Sergeant,
    StaffSergeant,
    MasterSergeant,
    FirstSergeant,
    SergeantMajor,
    WarrantOfficer1,
    ChiefWarrantOfficer2,
    ChiefWarrantOfficer3,
    ChiefWarrantOfficer4,
    ChiefWarrantOfficer5,
    ThirdLieutenant,
    SecondLieutenant,
    FirstLieutenant,
    Captain,
    Major,
    LieutenantColonel,
    Colonel,
    Brigadier,
    MajorGeneral,
    LieutenantGeneral,
    General,
    Marshal,
    FieldMarshal,
    Commander,
    Generalissimo,
    LegendPremium,
}

/// XP required to hold each tier, ascending. Index i is `Rank` discriminant i.
pub const THRESHOLDS: [(u64, Rank); 31] = [
    (0, Rank::Recruit),
    (100, Rank::Private),
    (500, Rank::Gefreiter),
    (1_500, Rank::Corporal),
    (3_700, Rank::MasterCorporal),
    (7_100, Rank::Sergeant),
    (12_300, Rank::StaffSergeant),
    (20_000, Rank::MasterSergeant),
    (29_000, Rank::FirstSergeant),
    (41_000, Rank::SergeantMajor),
    (57_000, Rank::WarrantOfficer1),
    (76_000, Rank::ChiefWarrantOfficer2),
    (98_000, Rank::ChiefWarrantOfficer3),
    (125_000, Rank::ChiefWarrantOfficer4),
    (156_000, Rank::ChiefWarrantOfficer5),
    (192_000, Rank::ThirdLieutenant),
    (233_000, Rank::SecondLieutenant),
    (280_000, Rank::FirstLieutenant),
    (332_000, Rank::Captain),
    (390_000, Rank::Major),
    (455_000, Rank::LieutenantColonel),
    (527_000, Rank::Colonel),
    (606_000, Rank::Brigadier),
    (692_000, Rank::MajorGeneral),
    (787_000, Rank::LieutenantGeneral),
    (889_000, Rank::General),
    (1_000_000, Rank::Marshal),
    (1_122_000, Rank::FieldMarshal),
    (1_255_000, Rank::Commander),
    (1_400_000, Rank::Generalissimo),
    (1_600_000, Rank::LegendPremium),
];

impl Rank {
    /// Stable kebab-case key, the canonical identifier for a tier.
    pub fn key(self) -> &'static str {
        match self {
            Rank::Recruit => "recruit",
            Rank::Private => "private",
            Rank::Gefreiter => "gefreiter",
            Rank::Corporal => "corporal",
            Rank::MasterCorporal => "master-corporal",
            Rank::Sergeant => "sergeant",
            Rank::StaffSergeant => "staff-sergeant",
            Rank::MasterSergeant => "master-sergeant",
            Rank::FirstSergeant => "first-sergeant",
            Rank::SergeantMajor => "sergeant-major",
            Rank::WarrantOfficer1 => "warrant-officer-1",
            Rank::ChiefWarrantOfficer2 => "chief-warrant-officer-2",
            Rank::ChiefWarrantOfficer3 => "chief-warrant-officer-3",
            Rank::ChiefWarrantOfficer4 => "chief-warrant-officer-4",
            Rank::ChiefWarrantOfficer5 => "chief-warrant-officer-5",
            Rank::ThirdLieutenant => "third-lieutenant",
            Rank::SecondLieutenant => "second-lieutenant",
            Rank::FirstLieutenant => "first-lieutenant",
            Rank::Captain => "captain",
            Rank::Major => "major",
            Rank::LieutenantColonel => "lieutenant-colonel",
            Rank::Colonel => "colonel",
            Rank::Brigadier => "brigadier",
            Rank::MajorGeneral => "major-general",
            Rank::LieutenantGeneral => "lieutenant-general",
            Rank::General => "general",
            Rank::Marshal => "marshal",
            Rank::FieldMarshal => "field-marshal",
            Rank::Commander => "commander",
            Rank::Generalissimo => "generalissimo",
            Rank::LegendPremium => "legend-premium",
        }
    }

    /// XP required to hold this tier.
    pub fn threshold(self) -> u64 {
        THRESHOLDS[self as usize].0
    }

    /// "chief-warrant-officer-2" → "Chief Warrant Officer 2"
    pub fn display_name(self) -> String {
        let mut out = s!();
        for (i, word) in self.key().split('-').enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
        out
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Highest tier whose threshold is ≤ `xp`. Negative input counts as zero.
pub fn rank_for(xp: i64) -> Rank {
    let xp = xp.max(0) as u64;
    let mut current = Rank::Recruit;
    for &(threshold, rank) in &THRESHOLDS {
        if xp >= threshold {
            current = rank;
        } else {
            break;
        }
    }
    current
}

/// Current tier plus the step to the next one, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankProgress {
    pub xp: u64,
    pub rank: Rank,
    pub current_threshold: u64,
    pub next_rank: Option<Rank>,
    pub next_threshold: Option<u64>,
}

impl RankProgress {
    /// The site's own "current / next" shape, comma-grouped.
    pub fn progress_text(&self) -> String {
        match self.next_threshold {
            Some(next) => format!("{} / {}", format_integer(self.xp), format_integer(next)),
            None => format!("{} (max rank)", format_integer(self.xp)),
        }
    }
}

pub fn progress_for(xp: i64) -> RankProgress {
    let rank = rank_for(xp);
    let (next_rank, next_threshold) = match THRESHOLDS.get(rank as usize + 1) {
        Some(&(t, r)) => (Some(r), Some(t)),
        None => (None, None),
    };
    RankProgress {
        xp: xp.max(0) as u64,
        rank,
        current_threshold: rank.threshold(),
        next_rank,
        next_threshold,
    }
}
