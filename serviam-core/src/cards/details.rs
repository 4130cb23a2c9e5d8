use serde::Serialize;
use serviam_model::{EpisodeRecord, FileData, FilmRecord};
use tracing::debug;

use super::media_url;
use crate::{
    catalog::{CatalogIndex, Entity, Film, Season, Show},
    error::{CatalogError, Result},
};

/// Backdrop plus blurb for one film or season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoCard {
    pub id: String,
    pub picture: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoCards {
    pub name: String,
    pub cards: Vec<InfoCard>,
}

/// One playable entry: a film or an episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchCard {
    pub title: String,
    pub text: String,
    /// `media/<path>` of the first mp4 file, if there is one
    pub video: Option<String>,
    pub video_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchCards {
    pub name: String,
    pub cards: Vec<WatchCard>,
}

fn resolve_id<'a>(index: &'a CatalogIndex, id: &str) -> Result<Entity<'a>> {
    index
        .lookup(id)
        .and_then(|entity| index.resolve(entity))
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))
}

fn backdrop(file: &FileData) -> String {
    media_url(file).unwrap_or_default()
}

fn film_info(film: &FilmRecord) -> InfoCard {
    InfoCard {
        id: film.id.clone(),
        picture: backdrop(&film.backdrop_file),
        title: film.title.clone(),
        text: film.overview.clone(),
    }
}

fn show_info(index: &CatalogIndex, show: &Show) -> InfoCards {
    let picture = backdrop(&show.backdrop_file);
    InfoCards {
        name: show.name.clone(),
        cards: index
            .seasons_of(show)
            .map(|season| InfoCard {
                id: season.id.clone(),
                picture: picture.clone(),
                title: season.name.clone(),
                text: season.overview.clone(),
            })
            .collect(),
    }
}

/// Info cards for the item registered under `id`.
///
/// Films yield a single card, collections one per member film and shows one
/// per season. A season shows the info of the show it belongs to.
pub fn info_cards(index: &CatalogIndex, id: &str) -> Result<InfoCards> {
    let cards = match resolve_id(index, id)? {
        Entity::Film(film) => InfoCards {
            name: film.title.clone(),
            cards: vec![film_info(film)],
        },
        Entity::Collection(collection) => InfoCards {
            name: collection.name.clone(),
            cards: index
                .member_films(collection)
                .map(|film| film_info(film))
                .collect(),
        },
        Entity::Show(show) => show_info(index, show),
        Entity::Season(season) => {
            let show = index
                .show(season.show)
                .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
            show_info(index, show)
        }
    };
    debug!(id, cards = cards.cards.len(), "info cards built");
    Ok(cards)
}

fn playable(file: Option<&FileData>) -> (Option<String>, String) {
    match file {
        Some(file) => (media_url(file), file.file_type.clone()),
        None => (None, String::new()),
    }
}

fn film_watch(film: &Film) -> WatchCard {
    let (video, video_type) = playable(film.playable_file());
    WatchCard {
        title: film.title.clone(),
        text: film.release_date.clone(),
        video,
        video_type,
    }
}

fn episode_watch(episode: &EpisodeRecord) -> WatchCard {
    let (video, video_type) = playable(episode.playable_file());
    WatchCard {
        title: episode.name.clone(),
        text: episode.air_date.clone(),
        video,
        video_type,
    }
}

fn season_watch(season: &Season) -> impl Iterator<Item = WatchCard> + '_ {
    season.episodes.iter().map(episode_watch)
}

/// Watch cards for the item registered under `id`.
///
/// Films yield a single card, collections one per member, seasons one per
/// episode and shows every episode of every season in order.
pub fn watch_cards(index: &CatalogIndex, id: &str) -> Result<WatchCards> {
    let cards = match resolve_id(index, id)? {
        Entity::Film(film) => WatchCards {
            name: film.title.clone(),
            cards: vec![film_watch(film)],
        },
        Entity::Collection(collection) => WatchCards {
            name: collection.name.clone(),
            cards: index.member_films(collection).map(film_watch).collect(),
        },
        Entity::Season(season) => WatchCards {
            name: season.name.clone(),
            cards: season_watch(season).collect(),
        },
        Entity::Show(show) => WatchCards {
            name: show.name.clone(),
            cards: index.seasons_of(show).flat_map(season_watch).collect(),
        },
    };
    debug!(id, cards = cards.cards.len(), "watch cards built");
    Ok(cards)
}
