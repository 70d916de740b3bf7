// tests/lookup.rs
//
// End-to-end lookups against a stub fetcher: fixture documents in, typed
// records out, no network.

use rt_scrape::fetch::{Fetch, FetchError, FetchedPage};
use rt_scrape::{Category, LookupError, Rank, lookup_leaderboard, lookup_player};

/// Serves one canned response regardless of URL.
enum StubFetch {
    Page { final_url: &'static str, body: String },
    Echo { body: String },
    Fail(u16),
}

impl Fetch for StubFetch {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        match self {
            StubFetch::Page { final_url, body } => Ok(FetchedPage {
                final_url: (*final_url).to_string(),
                body: body.clone(),
            }),
            StubFetch::Echo { body } => Ok(FetchedPage {
                final_url: url.to_string(),
                body: body.clone(),
            }),
            StubFetch::Fail(status) => Err(FetchError::Status(*status)),
        }
    }
}

fn profile_body() -> String {
    r#"
    <html><body>
    <table>
      <tr><td>По опыту</td><td>4</td><td>125 919</td></tr>
      <tr><td>Голдоловов</td><td>12</td><td>37</td></tr>
    </table>
    <div class="stats container">
      <img src="https://i.imgur.com/BNZpCPo.png">
      <font style="font-weight: bold">Tank_Hunter</font>
      <div class="text_xp">125 919 / 156 000</div>
      <table>
        <tr><td>Уничтожил</td><td>10 500</td></tr>
        <tr><td>Подбит</td><td>5 200</td></tr>
        <tr><td>У/П</td><td>2,02</td></tr>
        <tr><td>Поймано золотых ящиков</td><td>37</td></tr>
        <tr><td>Группа</td><td>Клан</td></tr>
        <tr><td>Премиум</td><td>Да</td></tr>
      </table>
      <div class="equipment card"><h3>Фриз M2</h3><p>Установленный: Да</p></div>
      <div class="equipment card"><h3>Хорнет XT</h3><p>Установленный: Да</p></div>
      <div class="item card"><h4>Дельфин</h4><p>Установленный: Да</p></div>
      <div class="item card"><span>Фотон</span><p>Установленный: Да</p></div>
    </div>
    </body></html>
    "#
    .to_string()
}

fn board_body(rows: usize) -> String {
    let mut body = String::from(
        r#"<html><body><div class="container"><p>Топ по заработанному опыту</p><table>
        <tr><th>#</th><th>Игрок</th><th>Опыт</th></tr>"#,
    );
    for i in 1..=rows {
        body.push_str(&format!(
            r#"<tr><td>{i}</td>
            <td><a href="/user/player{i}"><img src="https://i.imgur.com/rCN2gJm.png"> player{i}</a></td>
            <td>{}</td></tr>"#,
            1_000_000 - i * 1_000
        ));
    }
    body.push_str("</table></div></body></html>");
    body
}

#[test]
fn player_lookup_assembles_typed_profile() {
    let stub = StubFetch::Echo { body: profile_body() };
    let p = lookup_player(&stub, "Tank_Hunter").unwrap();

    assert_eq!(p.name, "Tank_Hunter");
    assert_eq!(p.rank, Rank::ChiefWarrantOfficer4);
    assert_eq!(p.progress.xp, 125_919);
    assert_eq!(p.progress.next_threshold, Some(156_000));
    assert_eq!(p.progress.next_rank, Some(Rank::ChiefWarrantOfficer5));

    assert_eq!(p.kills, 10_500);
    assert_eq!(p.deaths, 5_200);
    assert_eq!(p.kd_ratio, 2.02);
    assert_eq!(p.goldboxes, 37);
    assert!(p.premium);
    assert_eq!(p.group, "Clan");

    assert_eq!(p.equipment.turret.as_deref(), Some("Freeze M2"));
    assert_eq!(p.equipment.hull.as_deref(), Some("Hornet XT"));
    assert_eq!(p.equipment.paint.as_deref(), Some("Photon"));
    assert_eq!(p.equipment.resistances, vec!["Dolphin"]);

    assert_eq!(p.rankings.len(), 2);
    assert_eq!(p.rankings[0].category, "experience");
    assert_eq!(p.rankings[0].position, 4);
    assert_eq!(p.rankings[1].category, "goldboxes");

    assert!(p.profile_url.ends_with("/user/Tank_Hunter"));
}

#[test]
fn unknown_player_redirects_to_root() {
    let stub = StubFetch::Page {
        final_url: "https://ratings.ranked-rtanks.online/",
        body: "<html><body>front page</body></html>".to_string(),
    };
    let err = lookup_player(&stub, "ghost").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn profile_without_name_anchor_is_not_found() {
    let stub = StubFetch::Echo {
        body: r#"<div class="stats container">renamed everything</div>"#.to_string(),
    };
    let err = lookup_player(&stub, "someone").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn fetch_failure_is_not_swallowed() {
    let stub = StubFetch::Fail(503);
    match lookup_player(&stub, "anyone") {
        Err(LookupError::Fetch(FetchError::Status(503))) => {}
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn leaderboard_pages_of_23() {
    let stub = StubFetch::Echo { body: board_body(23) };

    let first = lookup_leaderboard(&stub, Category::Experience, 1).unwrap();
    assert_eq!(first.entries.len(), 10);
    assert_eq!(first.total_players, 23);
    assert_eq!(first.total_pages, 3);
    assert!(!first.has_previous);
    assert!(first.has_next);
    assert_eq!(first.entries[0].name, "player1");
    assert_eq!(first.entries[0].rank, Rank::SergeantMajor);
    assert_eq!(first.entries[0].value, 999_000);
    assert_eq!(
        first.entries[0].profile_url.as_deref(),
        Some("https://ratings.ranked-rtanks.online/user/player1")
    );

    let last = lookup_leaderboard(&stub, Category::Experience, 3).unwrap();
    assert_eq!(last.entries.len(), 3);
    assert!(last.has_previous);
    assert!(!last.has_next);
    assert_eq!(last.entries[0].name, "player21");

    let past = lookup_leaderboard(&stub, Category::Experience, 5).unwrap();
    assert!(past.entries.is_empty());
    assert!(!past.has_next);
    assert_eq!(past.total_pages, 3);
}

#[test]
fn positions_increase_in_document_order() {
    let stub = StubFetch::Echo { body: board_body(23) };
    let page = lookup_leaderboard(&stub, Category::Experience, 1).unwrap();
    for pair in page.entries.windows(2) {
        assert!(pair[0].position < pair[1].position);
    }
}

#[test]
fn tableless_page_is_not_found() {
    let stub = StubFetch::Echo {
        body: "<html><body><p>maintenance</p></body></html>".to_string(),
    };
    let err = lookup_leaderboard(&stub, Category::Kills, 1).unwrap_err();
    assert!(err.is_not_found());
}
