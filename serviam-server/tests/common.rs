// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::{fs, path::Path};

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use serde_json::{Value, json};
use serviam_core::catalog::{CatalogIndex, CatalogLoader};
use serviam_server::{
    AppState, create_app,
    infra::config::Config,
};
use tempfile::TempDir;

pub struct TestApp {
    pub server: TestServer,
    pub media: TempDir,
    pub files: TempDir,
}

fn write_record(root: &Path, kind: &str, name: &str, record: Value) -> Result<()> {
    let item = root.join(kind).join(name);
    fs::create_dir_all(&item)?;
    fs::write(item.join(format!("{name}.json")), serde_json::to_vec(&record)?)?;
    Ok(())
}

fn film(id: &str, title: &str, mp4: bool) -> Value {
    let mut files = vec![json!({
        "name": title,
        "path": format!("films/{id}/{title}.srt"),
        "type": "srt",
    })];
    if mp4 {
        files.push(json!({
            "name": title,
            "path": format!("films/{id}/{title}.mp4"),
            "type": "mp4",
        }));
    }
    json!({
        "id": id,
        "title": title,
        "release_date": "1995-12-15",
        "overview": format!("About {title}."),
        "backdrop_file": {
            "name": "backdrop",
            "path": format!("films/{id}/backdrop.jpg"),
            "type": "jpg",
        },
        "film_files": files,
    })
}

/// Two standalone films, a three-film collection and a two-season show.
pub fn write_sample_catalog(root: &Path) -> Result<()> {
    for kind in ["films", "collections", "shows"] {
        fs::create_dir_all(root.join(kind))?;
    }

    write_record(root, "films", "Heat_1995-12-15", film("Heat_1995-12-15", "Heat", true))?;
    write_record(root, "films", "Ronin_1998-09-25", film("Ronin_1998-09-25", "Ronin", false))?;
    write_record(
        root,
        "collections",
        "Trilogy",
        json!({
            "name": "Trilogy",
            "poster_file": {"name": "poster", "path": "collections/Trilogy/poster.jpg", "type": "jpg"},
            "films": [
                film("Part_One_2001", "Part One", true),
                film("Part_Two_2003", "Part Two", false),
                film("Part_Three_2005", "Part Three", true),
            ],
        }),
    )?;
    write_record(
        root,
        "shows",
        "Firefly",
        json!({
            "id": "Firefly",
            "name": "Firefly",
            "first_air_date": "2002-09-20",
            "seasons": [
                {
                    "id": "Firefly_S1",
                    "name": "Season 1",
                    "overview": "Browncoats.",
                    "episodes": [
                        {"id": "Firefly_S1E1", "name": "Serenity", "air_date": "2002-12-20",
                         "files": [{"name": "Serenity", "path": "shows/Firefly/S1/Serenity.mp4", "type": "mp4"}]},
                        {"id": "Firefly_S1E2", "name": "The Train Job", "air_date": "2002-09-20", "files": []},
                    ],
                },
                {"id": "Firefly_S2", "name": "Season 2", "episodes": []},
            ],
        }),
    )?;

    fs::write(root.join("films/Heat_1995-12-15/Heat.mp4"), b"not really a video")?;
    Ok(())
}

pub fn build_test_app() -> Result<TestApp> {
    build_test_app_with(|_| {})
}

pub fn build_test_app_with(configure: impl FnOnce(&mut Config)) -> Result<TestApp> {
    let media = TempDir::new()?;
    let files = TempDir::new()?;
    write_sample_catalog(media.path())?;
    fs::write(files.path().join("empty_poster.jpg"), b"placeholder")?;

    let mut config = Config::default();
    config.media.root = media.path().to_path_buf();
    config.media.files_dir = files.path().to_path_buf();
    configure(&mut config);

    let catalog = CatalogIndex::build(&CatalogLoader::new(media.path()))?;
    let router = create_app(AppState::new(config, catalog));
    let server = TestServer::new(router).map_err(|err| anyhow!(err.to_string()))?;

    Ok(TestApp { server, media, files })
}
