//! Store configuration.
//!
//! The only runtime configuration Bono has is how to reach the document
//! store. Values are read from the environment (a `.env` file is loaded by the
//! desktop shell before this runs).

use std::time::Duration;

use crate::error::{Error, Result};
use crate::util::normalize_text_option;

const ENV_STORE: &str = "BONO_STORE";
const ENV_PROJECT_ID: &str = "BONO_FIRESTORE_PROJECT_ID";
const ENV_API_KEY: &str = "BONO_FIRESTORE_API_KEY";
const ENV_DATABASE: &str = "BONO_FIRESTORE_DATABASE";
const ENV_COLLECTION: &str = "BONO_COLLECTION";
const ENV_POLL_INTERVAL_MS: &str = "BONO_POLL_INTERVAL_MS";

const DEFAULT_DATABASE: &str = "(default)";
const DEFAULT_COLLECTION: &str = "bookmarks";
const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;
const MIN_POLL_INTERVAL_MS: u64 = 250;

const FIRESTORE_API_BASE: &str = "https://firestore.googleapis.com/v1";

/// Which document store backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Hosted Firestore, reached through its REST API
    Firestore,
    /// Process-local store, lost when the session ends
    Memory,
}

impl StoreKind {
    fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "firestore" => Ok(Self::Firestore),
            "memory" => Ok(Self::Memory),
            other => Err(Error::Config(format!(
                "{ENV_STORE} must be `firestore` or `memory`, got `{other}`"
            ))),
        }
    }
}

/// Connection settings for the bookmark collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub kind: StoreKind,
    /// Firestore project id
    pub project_id: Option<String>,
    /// Web API key, sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Firestore database id
    pub database: String,
    /// Collection holding bookmark documents
    pub collection: String,
    /// How often the Firestore backend re-runs the live query
    pub poll_interval: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::Memory,
            project_id: None,
            api_key: None,
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl StoreConfig {
    /// Configuration for a Firestore project with default database/collection
    pub fn firestore(project_id: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            kind: StoreKind::Firestore,
            project_id: Some(project_id.into()),
            api_key,
            ..Self::default()
        }
    }

    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// When `BONO_STORE` is unset the Firestore backend is chosen if a project
    /// id is present, the memory backend otherwise.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str| normalize_text_option(lookup(key));

        let project_id = read(ENV_PROJECT_ID);
        let kind = match read(ENV_STORE) {
            Some(raw) => StoreKind::parse(&raw)?,
            None if project_id.is_some() => StoreKind::Firestore,
            None => StoreKind::Memory,
        };
        if kind == StoreKind::Firestore && project_id.is_none() {
            return Err(Error::Config(format!(
                "{ENV_PROJECT_ID} is required for the Firestore store"
            )));
        }

        let poll_interval = match read(ENV_POLL_INTERVAL_MS) {
            Some(raw) => {
                let millis: u64 = raw.parse().map_err(|_| {
                    Error::Config(format!(
                        "{ENV_POLL_INTERVAL_MS} must be a whole number of milliseconds"
                    ))
                })?;
                Duration::from_millis(millis.max(MIN_POLL_INTERVAL_MS))
            }
            None => Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        };

        Ok(Self {
            kind,
            project_id,
            api_key: read(ENV_API_KEY),
            database: read(ENV_DATABASE).unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            collection: read(ENV_COLLECTION).unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            poll_interval,
        })
    }

    /// Resource path of the database, e.g. `projects/p/databases/(default)`
    pub fn database_path(&self) -> Result<String> {
        let project_id = self
            .project_id
            .as_deref()
            .ok_or_else(|| Error::Config(format!("{ENV_PROJECT_ID} is not set")))?;
        Ok(format!(
            "projects/{project_id}/databases/{}",
            self.database
        ))
    }

    /// REST root of the database's documents
    pub fn documents_url(&self) -> Result<String> {
        Ok(format!("{FIRESTORE_API_BASE}/{}/documents", self.database_path()?))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_selects_memory_store() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn project_id_selects_firestore() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (ENV_PROJECT_ID, " url-bookmarks-app "),
            (ENV_API_KEY, "abc"),
            (ENV_POLL_INTERVAL_MS, "5000"),
        ]))
        .unwrap();
        assert_eq!(config.kind, StoreKind::Firestore);
        assert_eq!(config.project_id.as_deref(), Some("url-bookmarks-app"));
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(
            config.documents_url().unwrap(),
            "https://firestore.googleapis.com/v1/projects/url-bookmarks-app/databases/(default)/documents"
        );
    }

    #[test]
    fn explicit_firestore_requires_project() {
        let result = StoreConfig::from_lookup(lookup_from(&[(ENV_STORE, "firestore")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn rejects_unknown_store_kind_and_bad_interval() {
        assert!(StoreConfig::from_lookup(lookup_from(&[(ENV_STORE, "sqlite")])).is_err());
        assert!(
            StoreConfig::from_lookup(lookup_from(&[(ENV_POLL_INTERVAL_MS, "soon")])).is_err()
        );
    }

    #[test]
    fn poll_interval_has_a_floor() {
        let config =
            StoreConfig::from_lookup(lookup_from(&[(ENV_POLL_INTERVAL_MS, "10")])).unwrap();
        assert_eq!(config.poll_interval, Duration::from_millis(MIN_POLL_INTERVAL_MS));
    }
}
