//! Pure selection logic over decoded hero records.
//!
//! Nothing in here performs I/O or returns errors: malformed fields degrade
//! to excluding the record, and an empty candidate set is an ordinary
//! `None` result.

use super::types::{FilterCriteria, HeroRecord, TallestHero};

/// Whether an occupation string counts as "has work".
/// True unless the string is empty or exactly `"-"` after trimming.
pub fn has_work(occupation: &str) -> bool {
    let trimmed = occupation.trim();
    !trimmed.is_empty() && trimmed != "-"
}

/// Parse the metric half of a height pair into integer centimeters.
///
/// Takes the second element of the `[imperial, metric]` pair; a missing
/// field or a pair with fewer than two elements falls back to the sentinel
/// `"0"`, so such records stay eligible at height zero. A trailing `" cm"`
/// suffix is stripped before parsing. Returns None when the remainder is
/// not an integer (e.g. `"unknown"`), which excludes the record.
pub fn parse_height_cm(height: Option<&[String]>) -> Option<i64> {
    let metric = height
        .and_then(|pair| pair.get(1))
        .map(String::as_str)
        .unwrap_or("0");
    let stripped = metric.strip_suffix(" cm").unwrap_or(metric);
    stripped.trim().parse::<i64>().ok()
}

/// Select the tallest hero matching the given gender and employment status.
///
/// Single pass over the input: a record is a candidate iff its gender
/// matches case-insensitively, its derived has-work boolean equals the
/// requested one, and its metric height parses. Among candidates the
/// maximum height wins, ties going to the first-encountered record.
/// Returns None when no record survives all three filters.
pub fn select_tallest(records: &[HeroRecord], criteria: &FilterCriteria) -> Option<TallestHero> {
    let wanted_gender = criteria.gender.to_lowercase();
    let mut best: Option<TallestHero> = None;

    for record in records {
        let gender = record.appearance.gender.as_deref().unwrap_or("");
        if gender.to_lowercase() != wanted_gender {
            continue;
        }

        let occupation = record.work.occupation.as_deref().unwrap_or("");
        if has_work(occupation) != criteria.has_work {
            continue;
        }

        let height_cm = match parse_height_cm(record.appearance.height.as_deref()) {
            Some(height_cm) => height_cm,
            None => continue,
        };

        // Strictly-greater keeps the first maximal record on ties
        if best.as_ref().map_or(true, |b| height_cm > b.height_cm) {
            best = Some(TallestHero {
                hero: record.clone(),
                height_cm,
            });
        }
    }

    best
}
