//! Render-agnostic summaries of catalog entities.
//!
//! [`page`] projects a slice of an ordering into [`Card`]s for the browse
//! grid; [`details`] builds the info and watch sets for a single identifier.

pub mod details;

pub use details::{
    InfoCard, InfoCards, WatchCard, WatchCards, info_cards, watch_cards,
};

use serde::Serialize;
use serviam_model::FileData;
use tracing::warn;

use crate::catalog::{CatalogIndex, Entity, EntityRef};

/// Poster shown for items the scraper found no artwork for.
pub const EMPTY_POSTER: &str = "files/empty_poster.jpg";

/// Prefix under which the media root is served.
pub const MEDIA_PREFIX: &str = "media";

/// Summary of one entity in an ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(rename = "text")]
    pub subtitle: String,
    pub picture: String,
    pub watchable: bool,
}

/// `media/<path>` for a present file, `None` when the scraper left it empty.
pub fn media_url(file: &FileData) -> Option<String> {
    (!file.is_missing()).then(|| format!("{MEDIA_PREFIX}/{}", file.path))
}

fn poster_url(file: &FileData) -> String {
    media_url(file).unwrap_or_else(|| EMPTY_POSTER.to_string())
}

/// Card for `entity`, or `None` if the ref does not belong to `index`.
pub fn card(index: &CatalogIndex, entity: EntityRef) -> Option<Card> {
    let card = match index.resolve(entity)? {
        Entity::Film(film) => Card {
            id: film.id.clone(),
            title: film.title.clone(),
            subtitle: film.release_date.clone(),
            picture: poster_url(&film.poster_file),
            watchable: film.is_watchable(),
        },
        Entity::Collection(collection) => Card {
            id: collection.name.clone(),
            title: collection.name.clone(),
            subtitle: String::new(),
            picture: poster_url(&collection.poster_file),
            // Playing a collection starts at its first member.
            watchable: index
                .member_films(collection)
                .next()
                .is_some_and(|film| film.is_watchable()),
        },
        Entity::Show(show) => Card {
            id: show.name.clone(),
            title: show.name.clone(),
            subtitle: show.first_air_date.clone(),
            picture: poster_url(&show.poster_file),
            watchable: true,
        },
        Entity::Season(season) => Card {
            id: season.id.clone(),
            title: season.name.clone(),
            subtitle: season.air_date.clone(),
            picture: poster_url(&season.poster_file),
            watchable: season
                .episodes
                .iter()
                .any(|episode| episode.playable_file().is_some()),
        },
    };
    Some(card)
}

/// Cards for `ordering[first..last]`.
///
/// An empty or inverted range, or one starting past the end, yields no cards;
/// a range running past the end is clamped to it.
pub fn page(
    index: &CatalogIndex,
    ordering: &[EntityRef],
    first: usize,
    last: usize,
) -> Vec<Card> {
    let len = ordering.len();
    if first >= last {
        warn!(first, last, "card range is empty or inverted");
        return Vec::new();
    }
    if first >= len {
        warn!(first, last, len, "card range starts past the end of the ordering");
        return Vec::new();
    }

    ordering[first..last.min(len)]
        .iter()
        .filter_map(|&entity| card(index, entity))
        .collect()
}
