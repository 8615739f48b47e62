//! Joining rendered groups into the final phrase.

use tracing::trace;

use super::grouper::GroupSequence;

/// Scale word appended to a group, by group index.
const SCALES: [&str; 5] = ["", " thousand", " million", " billion", " trillion"];

/// Join rendered groups with their scale words and separators.
///
/// Zero groups are omitted. Groups are separated by ", " except between the
/// thousands group and a units group in `1..100`, which takes " and "
/// ("one thousand and eight", but "one thousand, one hundred").
///
/// Only groups that have both a rendering and a scale word are joined.
pub fn assemble(groups: &GroupSequence, rendered: &[String]) -> String {
    let units = groups.as_slice().first().copied().unwrap_or(0);

    // Segments are produced least-significant first and joined in reverse.
    let mut segments: Vec<String> = Vec::with_capacity(groups.len() * 2);

    let tiers = groups.iter().zip(rendered).zip(SCALES);
    for (index, ((value, words), scale)) in tiers.enumerate() {
        if value == 0 {
            continue;
        }

        if !segments.is_empty() {
            let separator = if index == 1 && (1..100).contains(&units) {
                " and "
            } else {
                ", "
            };
            segments.push(separator.to_string());
        }

        segments.push(format!("{}{}", words, scale));
        trace!("Group {} ({}) -> {:?}", index, value, segments.last());
    }

    segments.iter().rev().map(String::as_str).collect()
}
