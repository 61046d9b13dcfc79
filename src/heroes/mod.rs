pub mod api_client;
pub mod selector;
pub mod types;

use tracing::info;

use crate::error::HeroScoutError;

use self::api_client::HeroApiClient;
use self::selector::select_tallest;
use self::types::{FilterCriteria, TallestHero};

/// Fetch the hero dataset and select the tallest record matching the
/// criteria.
///
/// The fetch layer is the only part that can fail; once the dataset is
/// decoded, selection degrades malformed records to exclusion and an empty
/// candidate set is `Ok(None)`, not an error.
pub async fn find_tallest_hero(
    client: &HeroApiClient,
    criteria: &FilterCriteria,
) -> Result<Option<TallestHero>, HeroScoutError> {
    let records = client.fetch_all().await?;
    let result = select_tallest(&records, criteria);

    match &result {
        Some(hero) => info!(
            "Tallest match for gender '{}' (has_work={}): '{}' at {} cm",
            criteria.gender, criteria.has_work, hero.hero.name, hero.height_cm
        ),
        None => info!(
            "No hero matched gender '{}' with has_work={}",
            criteria.gender, criteria.has_work
        ),
    }

    Ok(result)
}
