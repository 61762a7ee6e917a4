use anyhow::{Context, Result};
use log::info;

use super::SquadStore;
use crate::database::{self, DbPool};
use crate::domain::{SquadId, SquadPatch, SquadRecord};

/// Squads kept in a SQLite file on this device
#[derive(Clone)]
pub struct LocalSquadStore {
    pool: DbPool,
}

impl LocalSquadStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl SquadStore for LocalSquadStore {
    async fn save(&self, record: &SquadRecord) -> Result<SquadRecord> {
        let mut conn = database::get_connection(&self.pool)?;
        let saved = database::squads::insert_squad(&mut conn, record)?;
        info!("Saved squad {} locally", record.name);
        Ok(saved)
    }

    async fn update(&self, id: SquadId, patch: &SquadPatch) -> Result<SquadRecord> {
        let mut conn = database::get_connection(&self.pool)?;
        database::squads::update_squad(&mut conn, id, patch.clone())?
            .with_context(|| format!("Squad {} not found", id))
    }

    async fn list(&self) -> Result<Vec<SquadRecord>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::squads::list_all(&mut conn)
    }

    async fn get(&self, id: SquadId) -> Result<SquadRecord> {
        let mut conn = database::get_connection(&self.pool)?;
        database::squads::find_by_id(&mut conn, id)?
            .with_context(|| format!("Squad {} not found", id))
    }

    async fn delete(&self, id: SquadId) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        if !database::squads::delete_squad(&mut conn, id)? {
            anyhow::bail!("Squad {} not found", id);
        }
        info!("Deleted local squad {}", id);
        Ok(())
    }
}
