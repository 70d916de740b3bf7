// src/main.rs

use std::env;

use color_eyre::eyre::{Result, eyre};

use rt_scrape::core::num::format_integer;
use rt_scrape::{
    Category, HttpFetcher, LeaderboardPage, LookupError, PlayerProfile, lookup_leaderboard,
    lookup_player,
};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("player") => {
            let name = args.get(1).ok_or_else(|| eyre!("missing player name"))?;
            cmd_player(name)
        }
        Some("top") => {
            let category: Category = args
                .get(1)
                .ok_or_else(|| eyre!("missing category"))?
                .parse()
                .map_err(|e: String| eyre!(e))?;
            let page: u32 = match args.get(2) {
                Some(p) => p.parse()?,
                None => 1,
            };
            if page == 0 {
                return Err(eyre!("page numbers start at 1"));
            }
            cmd_top(category, page)
        }
        Some("-h" | "--help") | None => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
        Some(other) => Err(eyre!("unknown command: {other} (try --help)")),
    }
}

fn cmd_player(name: &str) -> Result<()> {
    let fetcher = HttpFetcher::new()?;
    match lookup_player(&fetcher, name) {
        Ok(profile) => {
            print_profile(&profile);
            Ok(())
        }
        Err(LookupError::NotFound) => {
            println!("No such player: {name}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_top(category: Category, page: u32) -> Result<()> {
    let fetcher = HttpFetcher::new()?;
    match lookup_leaderboard(&fetcher, category, page) {
        Ok(board) => {
            print_board(&board);
            Ok(())
        }
        Err(LookupError::NotFound) => {
            println!("No leaderboard data for {}", category.key());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_profile(p: &PlayerProfile) {
    println!("{}  [{}]", p.name, p.rank);
    println!("  XP:        {}", p.progress.progress_text());
    println!("  Kills:     {}", format_integer(p.kills));
    println!("  Deaths:    {}", format_integer(p.deaths));
    println!("  K/D:       {:.2}", p.kd_ratio);
    println!("  Goldboxes: {}", format_integer(p.goldboxes));
    println!("  Premium:   {}", if p.premium { "yes" } else { "no" });
    if !p.group.is_empty() {
        println!("  Group:     {}", p.group);
    }

    let eq = &p.equipment;
    if let Some(turret) = &eq.turret {
        println!("  Turret:    {turret}");
    }
    if let Some(hull) = &eq.hull {
        println!("  Hull:      {hull}");
    }
    if let Some(paint) = &eq.paint {
        println!("  Paint:     {paint}");
    }
    if !eq.resistances.is_empty() {
        println!("  Modules:   {}", eq.resistances.join(", "));
    }

    if !p.rankings.is_empty() {
        println!("  Standings:");
        for r in &p.rankings {
            println!(
                "    {:<12} #{} ({})",
                r.category,
                r.position,
                format_integer(r.value)
            );
        }
    }
}

fn print_board(b: &LeaderboardPage) {
    println!(
        "{} — page {}/{} ({} players)",
        b.category.title(),
        b.page,
        b.total_pages,
        b.total_players
    );
    for e in &b.entries {
        println!(
            "{:>4}. {:<20} [{}] {}",
            e.position,
            e.name,
            e.rank,
            format_integer(e.value)
        );
    }
    if b.entries.is_empty() {
        println!("  (no entries on this page)");
    }
}
