// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Dropdown name → URL slug: spaces to `-`, lowercased.
/// `"Blue Rutile"` → `"blue-rutile"`.
pub fn glaze_slug(name: &str) -> String {
    name.replace(' ', "-").to_lowercase()
}

/// Slug → label for the viewer.
///
/// Numeric parts are kept verbatim, the first part is uppercased (it is the
/// product line code), the rest are capitalized. Parts are joined with
/// spaces and then the *first* space becomes `-`, which restores codes
/// like `PC-12`.
pub fn display_name(glaze_id: &str) -> String {
    let words: Vec<String> = glaze_id
        .split('-')
        .enumerate()
        .map(|(i, part)| {
            if is_numeric(part) {
                s!(part)
            } else if i == 0 {
                part.to_uppercase()
            } else {
                capitalize(part)
            }
        })
        .collect();
    words.join(" ").replacen(' ', "-", 1)
}

// An empty part counts as numeric, so it is passed through untouched.
// `nan`/`inf` parse as f64 but are words here.
fn is_numeric(part: &str) -> bool {
    part.is_empty() || part.parse::<f64>().is_ok_and(f64::is_finite)
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => s!(),
    }
}
