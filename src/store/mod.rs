pub mod local;
pub mod remote;

use anyhow::Result;
use log::info;

use crate::config::AppConfig;
use crate::database;
use crate::domain::{SquadId, SquadPatch, SquadRecord};

pub use local::LocalSquadStore;
pub use remote::RemoteSquadStore;

/// Save/load contract shared by the account store and the device store
#[allow(async_fn_in_trait)]
pub trait SquadStore {
    /// Persist a new squad and return it with its assigned id.
    async fn save(&self, record: &SquadRecord) -> Result<SquadRecord>;
    async fn update(&self, id: SquadId, patch: &SquadPatch) -> Result<SquadRecord>;
    async fn list(&self) -> Result<Vec<SquadRecord>>;
    async fn get(&self, id: SquadId) -> Result<SquadRecord>;
    async fn delete(&self, id: SquadId) -> Result<()>;
}

/// Backend picked by the auth gate
pub enum Persistence {
    Account(RemoteSquadStore),
    Device(LocalSquadStore),
}

impl Persistence {
    /// A configured token selects the account store, otherwise squads stay
    /// on this device.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        match &config.api.token {
            Some(token) => {
                info!("Using account squad store at {}", config.api.base_url);
                Ok(Self::Account(RemoteSquadStore::new(&config.api, token)?))
            }
            None => {
                info!("Guest mode, using local squads in {}", config.storage.database_path);
                let pool = database::create_pool(&config.storage.database_path)?;
                Ok(Self::Device(LocalSquadStore::new(pool)))
            }
        }
    }

    pub fn is_account(&self) -> bool {
        matches!(self, Persistence::Account(_))
    }
}

impl SquadStore for Persistence {
    async fn save(&self, record: &SquadRecord) -> Result<SquadRecord> {
        match self {
            Self::Account(store) => store.save(record).await,
            Self::Device(store) => store.save(record).await,
        }
    }

    async fn update(&self, id: SquadId, patch: &SquadPatch) -> Result<SquadRecord> {
        match self {
            Self::Account(store) => store.update(id, patch).await,
            Self::Device(store) => store.update(id, patch).await,
        }
    }

    async fn list(&self) -> Result<Vec<SquadRecord>> {
        match self {
            Self::Account(store) => store.list().await,
            Self::Device(store) => store.list().await,
        }
    }

    async fn get(&self, id: SquadId) -> Result<SquadRecord> {
        match self {
            Self::Account(store) => store.get(id).await,
            Self::Device(store) => store.get(id).await,
        }
    }

    async fn delete(&self, id: SquadId) -> Result<()> {
        match self {
            Self::Account(store) => store.delete(id).await,
            Self::Device(store) => store.delete(id).await,
        }
    }
}
