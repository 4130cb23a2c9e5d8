//! Catalog records as written by the scraping tools.
//!
//! Collections and shows are generic over their children so the index can
//! swap embedded records for slots into its flat arrays while keeping every
//! other field intact (see [`CollectionRecord::map_films`] and
//! [`ShowRecord::map_seasons`]).

use super::files::FileData;

/// TMDB genre tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// `films/<id>/<id>.json`, or one member of a collection record
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilmRecord {
    /// Derived by the scraper from title and release date; never recomputed.
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub overview: String,
    pub release_date: String,
    pub runtime: i64,
    pub poster_file: FileData,
    pub backdrop_file: FileData,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::nullable::or_default"))]
    pub film_files: Vec<FileData>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::nullable::or_default"))]
    pub genres: Vec<Genre>,
    pub tmdb_id: i64,
    pub budget: i64,
    pub revenue: i64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub popularity: f64,
}

impl FilmRecord {
    pub fn playable_file(&self) -> Option<&FileData> {
        FileData::find_playable(&self.film_files)
    }

    pub fn is_watchable(&self) -> bool {
        self.playable_file().is_some()
    }
}

/// `collections/<name>/<name>.json`; embeds the full member film records.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "F: serde::Deserialize<'de> + Default"))
)]
pub struct CollectionRecord<F = FilmRecord> {
    /// Display name, also the catalog key
    pub name: String,
    pub poster_file: FileData,
    pub backdrop_file: FileData,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::nullable::or_default"))]
    pub films: Vec<F>,
    pub tmdb_id: i64,
}

impl<F> CollectionRecord<F> {
    /// Replace every member with `f(member)`, preserving member order.
    pub fn map_films<G>(
        self,
        f: impl FnMut(F) -> G,
    ) -> CollectionRecord<G> {
        CollectionRecord {
            name: self.name,
            poster_file: self.poster_file,
            backdrop_file: self.backdrop_file,
            films: self.films.into_iter().map(f).collect(),
            tmdb_id: self.tmdb_id,
        }
    }
}

/// Single episode of a season
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EpisodeRecord {
    pub id: String,
    pub episode_number: i64,
    pub name: String,
    pub air_date: String,
    pub overview: String,
    pub still_file: FileData,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::nullable::or_default"))]
    pub files: Vec<FileData>,
    pub tmdb_id: i64,
    pub vote_average: f64,
    pub vote_count: i64,
}

impl EpisodeRecord {
    pub fn playable_file(&self) -> Option<&FileData> {
        FileData::find_playable(&self.files)
    }
}

/// Season embedded in a show record
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeasonRecord {
    pub id: String,
    pub season_number: i64,
    pub name: String,
    pub air_date: String,
    pub overview: String,
    pub poster_file: FileData,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::nullable::or_default"))]
    pub episodes: Vec<EpisodeRecord>,
    pub tmdb_id: i64,
}

/// `shows/<name>/<name>.json`; embeds seasons, which embed episodes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "S: serde::Deserialize<'de> + Default"))
)]
pub struct ShowRecord<S = SeasonRecord> {
    pub id: String,
    /// Display name, also the catalog key
    pub name: String,
    pub first_air_date: String,
    pub overview: String,
    pub number_of_seasons: i64,
    pub number_of_episodes: i64,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::nullable::or_default"))]
    pub episode_run_time: Vec<i64>,
    pub poster_file: FileData,
    pub backdrop_file: FileData,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::nullable::or_default"))]
    pub seasons: Vec<S>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::nullable::or_default"))]
    pub genres: Vec<Genre>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub show_type: String,
    pub tmdb_id: i64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub popularity: f64,
}

impl<S> ShowRecord<S> {
    /// Replace every season with `f(season)`, preserving season order.
    pub fn map_seasons<T>(self, f: impl FnMut(S) -> T) -> ShowRecord<T> {
        ShowRecord {
            id: self.id,
            name: self.name,
            first_air_date: self.first_air_date,
            overview: self.overview,
            number_of_seasons: self.number_of_seasons,
            number_of_episodes: self.number_of_episodes,
            episode_run_time: self.episode_run_time,
            poster_file: self.poster_file,
            backdrop_file: self.backdrop_file,
            seasons: self.seasons.into_iter().map(f).collect(),
            genres: self.genres,
            show_type: self.show_type,
            tmdb_id: self.tmdb_id,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            popularity: self.popularity,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn film_record_reads_scraper_field_names() {
        let raw = r#"{
            "id": "Alien_1979-05-25",
            "title": "Alien",
            "release_date": "1979-05-25",
            "poster_file": {"name": "poster", "path": "films/Alien_1979-05-25/poster.jpg", "type": "jpg"},
            "film_files": [
                {"name": "Alien", "path": "films/Alien_1979-05-25/Alien.srt", "type": "srt"},
                {"name": "Alien", "path": "films/Alien_1979-05-25/Alien.mp4", "type": "mp4"}
            ],
            "genres": [{"id": 27, "name": "Horror"}],
            "vote_average": 8.1
        }"#;

        let film: FilmRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(film.id, "Alien_1979-05-25");
        assert_eq!(film.poster_file.file_type, "jpg");
        assert!(film.backdrop_file.is_missing());
        assert!(film.is_watchable());
        assert_eq!(film.genres[0].name, "Horror");
    }

    #[test]
    fn map_films_keeps_collection_fields_and_order() {
        let collection = CollectionRecord {
            name: "Trilogy".to_string(),
            films: vec![
                FilmRecord {
                    id: "one".into(),
                    ..Default::default()
                },
                FilmRecord {
                    id: "two".into(),
                    ..Default::default()
                },
            ],
            tmdb_id: 7,
            ..Default::default()
        };

        let ids = collection.map_films(|film| film.id);
        assert_eq!(ids.name, "Trilogy");
        assert_eq!(ids.tmdb_id, 7);
        assert_eq!(ids.films, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn show_type_uses_reserved_field_name() {
        let raw = r#"{"name": "Firefly", "type": "Scripted", "seasons": [{"id": "Firefly_S1", "episodes": []}]}"#;
        let show: ShowRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(show.show_type, "Scripted");
        assert_eq!(show.seasons[0].id, "Firefly_S1");
    }

    #[test]
    fn null_lists_decode_as_empty() {
        // Shape written for a collection created before any member is moved in.
        let raw = r#"{"name": "Alien Collection", "poster_file": {"name": "poster", "path": "collections/Alien_Collection/poster.jpg", "type": "jpg"}, "films": null, "tmdb_id": 8091}"#;
        let collection: CollectionRecord = serde_json::from_str(raw).unwrap();
        assert!(collection.films.is_empty());
        assert_eq!(collection.tmdb_id, 8091);

        let raw = r#"{"name": "Firefly", "episode_run_time": null, "genres": null, "seasons": [{"id": "Firefly_S0", "episodes": null}]}"#;
        let show: ShowRecord = serde_json::from_str(raw).unwrap();
        assert!(show.episode_run_time.is_empty());
        assert!(show.seasons[0].episodes.is_empty());

        let raw = r#"{"id": "Heat_1995-12-15", "film_files": null, "genres": null}"#;
        let film: FilmRecord = serde_json::from_str(raw).unwrap();
        assert!(!film.is_watchable());

        let raw = r#"{"id": "Firefly_S1_E1", "files": null}"#;
        let episode: EpisodeRecord = serde_json::from_str(raw).unwrap();
        assert!(episode.playable_file().is_none());
    }
}
