use std::collections::BTreeSet;

/// Normalizes a header value by stripping a BOM and surrounding whitespace.
///
/// Inner whitespace is left alone so payload headers are written back as read.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Normalizes a header row.
///
/// A header whose trimmed form collides with an earlier column keeps its
/// original text (minus a BOM), so distinct source headers stay distinct.
pub fn normalize_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = BTreeSet::new();
    raw.into_iter()
        .map(|value| {
            let trimmed = normalize_header(value);
            let name = if seen.contains(&trimmed) {
                value.trim_start_matches('\u{feff}').to_string()
            } else {
                trimmed
            };
            seen.insert(name.clone());
            name
        })
        .collect()
}
