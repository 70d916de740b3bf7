// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rt_scrape::specs;

fn board_sample(rows: usize) -> String {
    let mut doc = String::from(
        r#"<html><body><div class="container"><p>Топ по заработанному опыту</p><table>"#,
    );
    for i in 1..=rows {
        doc.push_str(&format!(
            r#"<tr><td>{i}</td>
            <td><a href="/user/player{i}"><img src="https://i.imgur.com/rCN2gJm.png"> player{i}</a></td>
            <td>{} 000</td></tr>"#,
            rows - i + 1
        ));
    }
    doc.push_str("</table></div></body></html>");
    doc
}

fn profile_sample() -> String {
    let stats: String = (0..40)
        .map(|i| format!("<tr><td>Строка {i}</td><td>{i}</td></tr>"))
        .collect();
    format!(
        r#"<html><body>
        <div class="stats container">
          <font style="font-weight: bold">Bench_Player</font>
          <div class="text_xp">125 919 / 156 000</div>
          <table>{stats}</table>
          <div class="equipment card"><h3>Фриз M2</h3><p>Установленный: Да</p></div>
        </div>
        </body></html>"#
    )
}

fn bench_extract(c: &mut Criterion) {
    let board = board_sample(100);
    let profile = profile_sample();

    c.bench_function("leaderboard_100_rows", |b| {
        b.iter(|| {
            let rows = specs::leaderboard::extract(
                black_box(&board),
                black_box("по заработанному опыту"),
            );
            black_box(rows.map(|r| r.len()))
        })
    });

    c.bench_function("profile_page", |b| {
        b.iter(|| {
            let doc = specs::profile::extract(black_box(&profile));
            black_box(doc.map(|d| d.stat_rows.len()))
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
