//! Document store connection for the desktop application

use bono_core::config::StoreConfig;
use bono_core::store::{Backend, MemoryStore};
use bono_core::SyncService;

/// Sync service over the store chosen at startup
pub type BookmarkService = SyncService<Backend>;

/// Connect to the store described by the environment.
///
/// A missing or invalid configuration falls back to the in-memory store so
/// the app stays usable; bookmarks then last only for this session.
pub fn connect() -> BookmarkService {
    let backend = backend_from(StoreConfig::from_env());

    if matches!(backend, Backend::Memory(_)) {
        tracing::warn!(
            "Running with the in-memory store (set BONO_FIRESTORE_PROJECT_ID to persist bookmarks)"
        );
    } else {
        tracing::info!("Connected to the {} store", backend.label());
    }
    SyncService::new(backend)
}

/// Backend for a loaded configuration, or the in-memory store when it is unusable
fn backend_from(config: bono_core::Result<StoreConfig>) -> Backend {
    config
        .and_then(|config| Backend::from_config(&config))
        .unwrap_or_else(|error| {
            tracing::warn!(
                "Store configuration unusable ({}), using in-memory store",
                error
            );
            Backend::Memory(MemoryStore::new())
        })
}

#[cfg(test)]
mod tests {
    use bono_core::Error;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn invalid_configuration_falls_back_to_memory() {
        let backend = backend_from(Err(Error::Config(
            "BONO_STORE=firestore requires BONO_FIRESTORE_PROJECT_ID".to_string(),
        )));
        assert_eq!(backend.label(), "memory");
    }

    #[test]
    fn default_configuration_uses_memory() {
        assert_eq!(backend_from(Ok(StoreConfig::default())).label(), "memory");
    }

    #[test]
    fn firestore_configuration_is_used_as_given() {
        let backend = backend_from(Ok(StoreConfig::firestore("demo-project", None)));
        assert_eq!(backend.label(), "firestore");
    }

    #[test]
    fn firestore_without_project_falls_back_to_memory() {
        let config = StoreConfig::from_lookup(|key| {
            (key == "BONO_STORE").then(|| "firestore".to_string())
        });
        assert!(config.is_err());
        assert_eq!(backend_from(config).label(), "memory");
    }
}
