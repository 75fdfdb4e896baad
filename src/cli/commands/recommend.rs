//! Recommend command - match the catalog against preferences

use recommender::config::GlobalConfig;
use recommender::core::models::Preferences;
use recommender::core::services::{Criteria, score_recommendations};
use recommender::output::{OutputMode, RecommendationCard, RecommendationList};

use super::{CatalogArgs, load_catalog};

/// Raw preference values as typed on the command line
#[derive(Debug, Default)]
pub struct RecommendArgs {
    /// Desired mood
    pub mood: Option<String>,
    /// Available minutes, not yet coerced
    pub time: Option<String>,
    /// Desired category
    pub category: Option<String>,
    /// Require the category to match as well
    pub strict_category: bool,
    /// Show score and label per card
    pub scores: bool,
}

/// Run a recommendation query
pub fn recommend(
    args: &RecommendArgs,
    catalog_args: &CatalogArgs,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = GlobalConfig::load();

    let preferences = Preferences::from_raw(
        args.mood.as_deref(),
        args.time.as_deref(),
        args.category.as_deref(),
    )?;

    let criteria = if args.strict_category {
        Criteria::with_category()
    } else {
        config.matching.criteria()
    };
    let show_scores = args.scores || config.output.show_scores;

    let (catalog, _) = load_catalog(catalog_args, &config)?;
    if preferences.is_unconstrained() {
        log::debug!("No constraints given, every item matches");
    }

    let matches = score_recommendations(&catalog, &preferences, &criteria);
    let registered: Vec<String> = criteria.registered().iter().map(ToString::to_string).collect();
    log::debug!(
        "{} of {} item(s) matched {:?} using {}",
        matches.len(),
        catalog.len(),
        preferences,
        registered.join(" && ")
    );

    let cards = matches
        .iter()
        .map(|scored| {
            if show_scores {
                RecommendationCard::from(scored)
            } else {
                RecommendationCard::from(scored.item)
            }
        })
        .collect();

    RecommendationList::new(catalog.domain(), cards).render(mode);
    Ok(())
}
