//! Index allocation and ` (N)` suffix handling

use regex::Regex;
use std::sync::LazyLock;

static INDEX_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" \(([0-9]*)\)$").expect("index suffix pattern is valid")
});

/// Lowest non-negative integer not present in `used`.
///
/// Sorts the indices and returns the first position whose value differs from
/// the position, or one past the largest index when there is no gap.
pub fn lowest_free_index(used: &[u32]) -> u32 {
    let mut sorted = used.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    for (position, &index) in sorted.iter().enumerate() {
        let position = position as u32;
        if position != index {
            return position;
        }
    }
    sorted.last().map_or(0, |max| max + 1)
}

/// Format a display name, eliding the suffix for index zero
pub fn format_indexed_name(base: &str, index: u32) -> String {
    if index == 0 {
        base.to_string()
    } else {
        format!("{base} ({index})")
    }
}

/// Split a trailing ` (N)` suffix from a name.
///
/// Returns the unsuffixed base and the parsed index. Names without a suffix, or
/// whose suffix has no digits or does not fit a `u32`, come back unchanged.
pub fn split_index_suffix(name: &str) -> (&str, Option<u32>) {
    let Some(captures) = INDEX_SUFFIX.captures(name) else {
        return (name, None);
    };
    let (Some(whole), Some(digits)) = (captures.get(0), captures.get(1)) else {
        return (name, None);
    };
    match digits.as_str().parse::<u32>() {
        Ok(index) => (&name[..whole.start()], Some(index)),
        Err(_) => (name, None),
    }
}

/// Index carried by a name's ` (N)` suffix, zero when there is none
pub fn extract_index(name: &str) -> u32 {
    split_index_suffix(name).1.unwrap_or(0)
}
