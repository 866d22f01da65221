use crate::domain::a001_sales::fixtures::Fixtures;
use crate::shared::error::ApiError;
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::RwLock;

static STORE: OnceCell<SalesStore> = OnceCell::new();

/// In-memory fixture data shared by all handlers
pub struct SalesStore {
    fixtures: RwLock<Fixtures>,
}

impl SalesStore {
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            fixtures: RwLock::new(fixtures),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&Fixtures) -> R) -> Result<R, ApiError> {
        let guard = self.fixtures.read().map_err(|_| ApiError::StoreUnavailable)?;
        Ok(f(&guard))
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Fixtures) -> R) -> Result<R, ApiError> {
        let mut guard = self.fixtures.write().map_err(|_| ApiError::StoreUnavailable)?;
        Ok(f(&mut guard))
    }
}

/// Load fixtures from `path`, or the embedded set when no path is given
pub fn initialize_store(path: Option<&Path>) -> anyhow::Result<()> {
    let fixtures = match path {
        Some(path) => {
            tracing::info!("Loading fixtures from: {}", path.display());
            let contents = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
            Fixtures::from_json(&contents)?
        }
        None => {
            tracing::info!("Using embedded fixtures");
            Fixtures::embedded()?
        }
    };

    tracing::info!(
        "Fixture store ready: {} services, {} accounts, {} sales",
        fixtures.services.len(),
        fixtures.accounts.len(),
        fixtures.sales.len()
    );

    STORE
        .set(SalesStore::new(fixtures))
        .map_err(|_| anyhow::anyhow!("fixture store already initialized"))
}

pub fn get_store() -> Result<&'static SalesStore, ApiError> {
    STORE.get().ok_or(ApiError::StoreUnavailable)
}

/// Store with the embedded fixtures, initialized on first use
#[cfg(test)]
pub fn test_store() -> &'static SalesStore {
    STORE.get_or_init(|| SalesStore::new(Fixtures::embedded().unwrap()))
}
