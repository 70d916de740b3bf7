// src/core/html.rs
//
// Hand-rolled, case-insensitive scanning over raw markup. The source site's
// HTML is neither versioned nor well-formed, so everything here is tolerant:
// attribute order, quoting style and whitespace must not matter, and a failed
// match is an Option, never a panic.

/// ASCII-only lowercasing. Leaves multi-byte chars untouched so byte offsets
/// into the lowered copy stay valid for the original string.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `<o ...> ... </o>` block at or after `from`.
/// Returns byte offsets of the whole block. Not nesting-aware; fine for
/// leaf-ish tags (`<tr>`, `<td>`, `<font>`, `<table>` rows scanning).
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Find the next `<tag ...>` whose `class` attribute contains `class_token`,
/// and return the offsets of the whole element. Unlike [`next_tag_block_ci`]
/// this tracks nesting depth, so a `<div class="stats">` holding inner divs
/// is returned in full.
pub fn class_block_ci(
    s: &str,
    tag: &str,
    class_token: &str,
    from: usize,
) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open = join!("<", &to_lower(tag));
    let token = to_lower(class_token);

    let mut pos = from;
    while let Some(rel) = lc.get(pos..).and_then(|t| t.find(&open)) {
        let start = pos + rel;
        let open_end = s[start..].find('>')? + start + 1;
        pos = open_end;

        // `<div` must not match `<divx`
        let boundary = lc.as_bytes().get(start + open.len()).copied();
        let name_ok = matches!(boundary, Some(b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'/'));
        if !name_ok {
            continue;
        }

        let open_tag = &s[start..open_end];
        let class_hit = attr_ci(open_tag, "class")
            .map(|c| to_lower(&c).contains(&token))
            .unwrap_or(false);
        if !class_hit {
            continue;
        }

        if let Some(end) = close_of(s, &lc, tag, open_end) {
            return Some((start, end));
        }
    }
    None
}

/// Locate the matching close tag for an element whose open tag ends at
/// `open_end`, counting nested opens of the same tag.
fn close_of(s: &str, lc: &str, tag: &str, open_end: usize) -> Option<usize> {
    let open = join!("<", &to_lower(tag));
    let close = join!("</", &to_lower(tag));

    let mut depth = 1usize;
    let mut pos = open_end;
    loop {
        let next_close = lc[pos..].find(&close)? + pos;
        let next_open = lc[pos..].find(&open).map(|i| i + pos);
        match next_open {
            Some(o) if o < next_close => {
                depth += 1;
                pos = s[o..].find('>')? + o + 1;
            }
            _ => {
                let end = s[next_close..].find('>')? + next_close + 1;
                depth -= 1;
                if depth == 0 {
                    return Some(end);
                }
                pos = end;
            }
        }
    }
}

/// Pull an attribute value out of an open tag, quoted or bare.
pub fn attr_ci(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let nl = to_lower(name);

    let mut pos = 0usize;
    while let Some(rel) = lc.get(pos..).and_then(|t| t.find(&nl)) {
        let at = pos + rel;
        pos = at + nl.len();

        let before_ok = at > 0 && matches!(lc.as_bytes()[at - 1], b' ' | b'\t' | b'\n' | b'\r');
        let rest = tag[at + nl.len()..].trim_start();
        if !before_ok || !rest.starts_with('=') {
            continue;
        }
        let v = rest[1..].trim_start();
        let value = if let Some(q) = v.strip_prefix('"') {
            q.split('"').next().unwrap_or("")
        } else if let Some(q) = v.strip_prefix('\'') {
            q.split('\'').next().unwrap_or("")
        } else {
            v.split(|c: char| c.is_whitespace() || c == '>')
                .next()
                .unwrap_or("")
        };
        return Some(s!(value));
    }
    None
}

/// The `<tag ...>` prefix of a block returned by the scanners above.
pub fn open_tag_of(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
