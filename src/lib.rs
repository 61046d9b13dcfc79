pub mod error;
pub mod heroes;

pub use error::HeroScoutError;
pub use heroes::api_client::{HeroApiClient, DEFAULT_API_URL};
pub use heroes::find_tallest_hero;
pub use heroes::selector::{has_work, parse_height_cm, select_tallest};
pub use heroes::types::{Appearance, FilterCriteria, HeroRecord, TallestHero, Work};
