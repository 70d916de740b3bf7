// src/specs/leaderboard.rs
//
// Leaderboard landing page. All categories share one page; each sits in its
// own `container` div carrying a localized caption ("по заработанному
// опыту", …). The defining anchor is a table: a document without one has no
// leaderboard at all.

use crate::core::html;
use crate::core::sanitize::normalize_entities;

/// One raw leaderboard row: left cell, middle-cell link + badge, right cell.
/// Still untranslated and unparsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub position: String,
    pub name: String,
    pub href: Option<String>,
    pub img_src: String,
    pub value: String,
}

/// Extract the rows for the category whose caption contains `label`.
///
/// When no container matches the label the whole document is scanned and its
/// first table wins — a page redesign then returns *some* category rather
/// than nothing, which is the lenient policy wanted here (logged, since it
/// may silently be the wrong category). `None` only when there is no table.
pub fn extract(doc: &str, label: &str) -> Option<Vec<RawEntry>> {
    let scope = find_category_container(doc, label).unwrap_or(doc);
    let (ts, te) = html::next_tag_block_ci(scope, "<table", "</table>", 0)?;
    let table = &scope[ts..te];

    let mut entries = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = html::next_tag_block_ci(table, "<tr", "</tr>", pos) {
        if let Some(entry) = read_row(&table[s..e]) {
            entries.push(entry);
        }
        pos = e;
    }
    Some(entries)
}

fn find_category_container<'a>(doc: &'a str, label: &str) -> Option<&'a str> {
    let mut pos = 0usize;
    while let Some((s, e)) = html::class_block_ci(doc, "div", "container", pos) {
        let block = &doc[s..e];
        pos = e;
        if block.contains(label) {
            return Some(block);
        }
    }
    log::debug!("no leaderboard container matched {label:?}; falling back to first table");
    None
}

/// A data row has at least three cells and a middle cell holding both the
/// profile link and the rank badge. Anything else (headers, spacers, broken
/// rows) is skipped without aborting its siblings.
fn read_row(tr: &str) -> Option<RawEntry> {
    let cells = cell_blocks(tr);
    if cells.len() < 3 {
        return None;
    }

    let (name, href) = anchor_of(cells[1])?;
    let img_src = img_src_of(cells[1])?;

    Some(RawEntry {
        position: cell_text(cells[0]),
        name,
        href,
        img_src,
        value: cell_text(cells[2]),
    })
}

fn cell_blocks(tr: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = html::next_tag_block_ci(tr, "<td", "</td>", pos) {
        out.push(&tr[s..e]);
        pos = e;
    }
    out
}

fn cell_text(block: &str) -> String {
    html::strip_tags(normalize_entities(&html::inner_after_open_tag(block)))
}

fn anchor_of(cell: &str) -> Option<(String, Option<String>)> {
    let (s, e) = html::next_tag_block_ci(cell, "<a ", "</a>", 0)?;
    let block = &cell[s..e];
    let name = html::strip_tags(normalize_entities(&html::inner_after_open_tag(block)));
    let href = html::attr_ci(html::open_tag_of(block), "href").filter(|h| !h.is_empty());
    Some((name, href))
}

/// `<img>` is void, so only the open tag is scanned.
fn img_src_of(cell: &str) -> Option<String> {
    let lc = html::to_lower(cell);
    let at = lc.find("<img")?;
    let end = cell[at..].find('>')? + at + 1;
    html::attr_ci(&cell[at..end], "src")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL_XP: &str = "по заработанному опыту";
    const LABEL_KILLS: &str = "по убийствам";

    fn row(pos: u32, name: &str, img: &str, value: &str) -> String {
        format!(
            r#"<tr><td>{pos}</td>
               <td><a href="/user/{name}"><img src="https://i.imgur.com/{img}.png"> {name}</a></td>
               <td>{value}</td></tr>"#
        )
    }

    fn board_fixture() -> String {
        let mut xp_rows = s!();
        for i in 1..=3 {
            xp_rows.push_str(&row(i, &format!("xp_player{i}"), "rCN2gJm", "100 000"));
        }
        format!(
            r#"<html><body>
            <div class="container"><p>Топ по убийствам</p>
              <table>{}</table>
            </div>
            <div class="container"><p>Топ по заработанному опыту</p>
              <table>
                <tr><th>#</th><th>Игрок</th><th>Опыт</th></tr>
                {xp_rows}
                <tr><td>4</td><td>no link here</td><td>50</td></tr>
                <tr><td colspan="3">spacer</td></tr>
              </table>
            </div>
            </body></html>"#,
            row(1, "killer", "paF1myt", "9 999"),
        )
    }

    #[test]
    fn picks_the_labeled_container() {
        let doc = board_fixture();
        let entries = extract(&doc, LABEL_XP).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "xp_player1");
        assert_eq!(entries[0].position, "1");
        assert_eq!(entries[0].href.as_deref(), Some("/user/xp_player1"));
        assert_eq!(entries[0].value, "100 000");

        let kills = extract(&doc, LABEL_KILLS).unwrap();
        assert_eq!(kills.len(), 1);
        assert_eq!(kills[0].name, "killer");
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let doc = board_fixture();
        let entries = extract(&doc, LABEL_XP).unwrap();
        // header row, linkless row and spacer all dropped
        assert!(entries.iter().all(|e| e.name.starts_with("xp_player")));
    }

    #[test]
    fn unknown_label_falls_back_to_first_table() {
        let doc = board_fixture();
        let entries = extract(&doc, "по чему-то новому").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "killer");
    }

    #[test]
    fn document_without_table_is_none() {
        assert_eq!(extract("<html><body><p>nothing</p></body></html>", LABEL_XP), None);
    }
}
