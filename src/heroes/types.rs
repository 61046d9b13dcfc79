use serde::{Deserialize, Serialize};

/// One entry from the superhero dataset.
///
/// The upstream JSON is semi-structured: any nested field may be missing,
/// empty, or malformed, and the full records carry many more fields
/// (powerstats, biography, images) than we care about. Every field here is
/// defaulted on deserialization so a sparse record never fails to decode;
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeroRecord {
    pub id: Option<u64>,
    pub name: String,
    pub appearance: Appearance,
    pub work: Work,
}

/// Physical appearance sub-structure of a hero record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Appearance {
    /// Gender as provided by the dataset, case-varying ("Male", "female", "-").
    pub gender: Option<String>,
    /// Height as an `[imperial, metric]` string pair, e.g. `["6'1", "185 cm"]`.
    /// The pair may be missing, short, or hold unparseable strings.
    pub height: Option<Vec<String>>,
}

/// Employment sub-structure of a hero record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Work {
    /// Occupation string; `"-"`, empty, or absent all mean "no work".
    pub occupation: Option<String>,
}

/// What to filter the dataset by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Gender to match, compared case-insensitively.
    pub gender: String,
    /// Whether the hero must have an occupation listed.
    pub has_work: bool,
}

/// A selected hero plus its derived metric height.
///
/// The record is flattened on serialization, so the output is the hero
/// record with one extra `height_cm` key. The derived field exists only on
/// selection output, never on raw input records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TallestHero {
    #[serde(flatten)]
    pub hero: HeroRecord,
    /// Integer centimeter height parsed from the metric half of the pair.
    pub height_cm: i64,
}
