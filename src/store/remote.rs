use anyhow::{Context, Result};
use log::info;

use super::SquadStore;
use crate::config::settings::ApiSettings;
use crate::domain::{SquadId, SquadPatch, SquadRecord};
use crate::http::{AuthedClient, ensure_success};

/// Squads kept by the account service over HTTP
pub struct RemoteSquadStore {
    client: AuthedClient,
}

impl RemoteSquadStore {
    pub fn new(settings: &ApiSettings, token: &str) -> Result<Self> {
        let client = AuthedClient::new(settings, token)?;
        Ok(Self { client })
    }

    fn squad_path(id: SquadId) -> String {
        format!("squads/{}", id)
    }
}

impl SquadStore for RemoteSquadStore {
    async fn save(&self, record: &SquadRecord) -> Result<SquadRecord> {
        let response = ensure_success(self.client.post("squads", record).await?).await?;
        let saved: SquadRecord = response
            .json()
            .await
            .context("Failed to parse saved squad")?;
        info!("Saved squad {} to account", saved.name);
        Ok(saved)
    }

    async fn update(&self, id: SquadId, patch: &SquadPatch) -> Result<SquadRecord> {
        let path = Self::squad_path(id);
        let response = ensure_success(self.client.patch(&path, patch).await?).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse updated squad {}", id))
    }

    async fn list(&self) -> Result<Vec<SquadRecord>> {
        let response = ensure_success(self.client.get("squads").await?).await?;
        response
            .json()
            .await
            .context("Failed to parse squad list")
    }

    async fn get(&self, id: SquadId) -> Result<SquadRecord> {
        let path = Self::squad_path(id);
        let response = ensure_success(self.client.get(&path).await?).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse squad {}", id))
    }

    async fn delete(&self, id: SquadId) -> Result<()> {
        let path = Self::squad_path(id);
        ensure_success(self.client.delete(&path).await?).await?;
        info!("Deleted squad {} from account", id);
        Ok(())
    }
}
