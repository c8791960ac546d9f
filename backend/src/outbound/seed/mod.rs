//! Seed file adapter for the `NewsSource` port.
//!
//! Reads a JSON array of records through `cap-std` and converts the parsed
//! `news-seed` records into domain [`News`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use news_seed::{NewsSeed, NewsSeedSet};

use crate::domain::ports::{NewsSource, NewsSourceError};
use crate::domain::{News, NewsId};

/// News source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileNewsSource {
    path: PathBuf,
}

impl JsonFileNewsSource {
    /// Create a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the seed file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_contents(&self) -> Result<String, NewsSourceError> {
        let path = self.path.as_path();
        let read_error =
            |error: &dyn std::fmt::Display| NewsSourceError::read(format!("{}: {error}", path.display()));

        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error(&"seed path must be a file"))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| read_error(&error))?;
        let payload = dir
            .read(Path::new(file_name))
            .map_err(|error| read_error(&error))?;
        String::from_utf8(payload).map_err(|error| read_error(&error))
    }
}

#[async_trait]
impl NewsSource for JsonFileNewsSource {
    async fn load(&self) -> Result<Vec<News>, NewsSourceError> {
        let contents = self.read_contents()?;
        let seeds = NewsSeedSet::from_json(&contents)
            .map_err(|error| NewsSourceError::parse(error.to_string()))?;
        Ok(seeds.into_records().into_iter().map(news_from_seed).collect())
    }
}

fn news_from_seed(seed: NewsSeed) -> News {
    News {
        id: NewsId::new(seed.id),
        title: seed.title.unwrap_or_default(),
        description: seed.description,
        body: seed.body,
        published_at: seed.published_at,
        unix_seconds: seed.unix_seconds,
        link: seed.link,
        source: seed.source,
        kind: seed.kind,
        category_name: seed.category_name,
        tags: seed.tags,
        cluster_id: seed.cluster_id,
    }
}
