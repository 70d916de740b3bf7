// src/specs/profile.rs
//
// Player profile page (`/user/<name>`). The defining anchor is the player's
// bold-styled name inside the stats container; without it the document does
// not describe a player and the whole extraction yields None.

use crate::core::html;
use crate::core::sanitize::normalize_entities;
use crate::translate::{MARK_EQUIPPED, PAINT_NAMES, WORD_YES};

/// Raw fragments of one profile page. Text is cleaned (entities, whitespace,
/// tags) but still localized.
#[derive(Debug, Default, PartialEq)]
pub struct ProfileDoc {
    pub name: String,
    /// Progress fragment of the shape "125 919 / 156 000", verbatim.
    pub xp_text: Option<String>,
    /// Every (label, value) table row on the page; the assembler picks the
    /// rows it recognizes by their localized labels.
    pub stat_rows: Vec<(String, String)>,
    /// Names of equipment cards flagged with the equipped marker.
    pub equipped: Vec<String>,
    /// Equipped paint, when one of the known paint names appears near an
    /// equipped marker.
    pub paint: Option<String>,
    /// Per-category leaderboard positions: (category label, position, value).
    pub rankings: Vec<(String, String, String)>,
}

pub fn extract(doc: &str) -> Option<ProfileDoc> {
    let (cs, ce) = html::class_block_ci(doc, "div", "stats", 0)?;
    let name = find_bold_name(&doc[cs..ce])?;

    Some(ProfileDoc {
        name,
        xp_text: find_xp_text(doc),
        stat_rows: read_stat_rows(doc),
        equipped: read_equipped(doc),
        paint: find_paint(doc),
        rankings: read_rankings(doc),
    })
}

/// The display name sits in a bold-styled `<font>` next to the rank badge.
fn find_bold_name(container: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((s, e)) = html::next_tag_block_ci(container, "<font", "</font>", pos) {
        let block = &container[s..e];
        pos = e;

        let bold = html::attr_ci(html::open_tag_of(block), "style")
            .map(|style| is_bold(&style))
            .unwrap_or(false);
        if !bold {
            continue;
        }
        let name = html::strip_tags(normalize_entities(&html::inner_after_open_tag(block)));
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

/// Matches "font-weight: bold" with arbitrary spacing.
fn is_bold(style: &str) -> bool {
    let squashed: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    squashed.contains("font-weight:bold")
}

fn find_xp_text(doc: &str) -> Option<String> {
    let (s, e) = html::class_block_ci(doc, "div", "text_xp", 0)?;
    let text = html::strip_tags(normalize_entities(&html::inner_after_open_tag(&doc[s..e])));
    // Expect the "<num> / <num>" shape; a reshuffled page gives up here
    // rather than feed garbage downstream.
    if text.contains('/') { Some(text) } else { None }
}

fn read_stat_rows(doc: &str) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = html::next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let cells = read_cells(&doc[s..e]);
        pos = e;
        if cells.len() >= 2 {
            rows.push((cells[0].clone(), cells[1].clone()));
        }
    }
    rows
}

/// Per-category positions live in the first table of the page.
fn read_rankings(doc: &str) -> Vec<(String, String, String)> {
    let mut out = Vec::new();
    let Some((ts, te)) = html::next_tag_block_ci(doc, "<table", "</table>", 0) else {
        return out;
    };
    let table = &doc[ts..te];

    let mut pos = 0usize;
    while let Some((s, e)) = html::next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let cells = read_cells(&table[s..e]);
        pos = e;
        if cells.len() >= 3 {
            out.push((cells[0].clone(), cells[1].clone(), cells[2].clone()));
        }
    }
    out
}

fn read_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = html::next_tag_block_ci(tr, "<td", "</td>", pos) {
        let inner = html::inner_after_open_tag(&tr[s..e]);
        cells.push(html::strip_tags(normalize_entities(&inner)));
        pos = e;
    }
    cells
}

/// Equipment cards are divs whose class mentions equipment/item; the mounted
/// one carries the localized equipped marker. Item name from its heading.
fn read_equipped(doc: &str) -> Vec<String> {
    let mut out = Vec::new();
    for token in ["equipment", "item"] {
        let mut pos = 0usize;
        while let Some((s, e)) = html::class_block_ci(doc, "div", token, pos) {
            let block = &doc[s..e];
            pos = e;
            if !(block.contains(MARK_EQUIPPED) && block.contains(WORD_YES)) {
                continue;
            }
            if let Some(name) = heading_text(block) {
                if !out.contains(&name) {
                    out.push(name);
                }
            }
        }
    }
    out
}

fn heading_text(block: &str) -> Option<String> {
    for (open, close) in [("<h3", "</h3>"), ("<h4", "</h4>")] {
        if let Some((s, e)) = html::next_tag_block_ci(block, open, close, 0) {
            let text =
                html::strip_tags(normalize_entities(&html::inner_after_open_tag(&block[s..e])));
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Paints appear as free-standing names; one counts as equipped when the
/// equipped marker sits in its surrounding markup.
fn find_paint(doc: &str) -> Option<String> {
    for name in PAINT_NAMES {
        let mut from = 0usize;
        while let Some(rel) = doc[from..].find(name) {
            let at = from + rel;
            from = at + name.len();
            let window = window_around(doc, at, name.len(), 300);
            if window.contains(MARK_EQUIPPED) && window.contains(WORD_YES) {
                return Some(s!(*name));
            }
        }
    }
    None
}

/// Byte window around a match, snapped to char boundaries.
fn window_around(doc: &str, at: usize, len: usize, radius: usize) -> &str {
    let mut lo = at.saturating_sub(radius);
    while !doc.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (at + len + radius).min(doc.len());
    while !doc.is_char_boundary(hi) {
        hi += 1;
    }
    &doc[lo..hi]
}
