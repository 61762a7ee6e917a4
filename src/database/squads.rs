use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{OptionalExtension, params};

use super::connection::DbConn;
use crate::domain::{RosterEntry, Ruleset, SquadId, SquadPatch, SquadRecord};

const SQUAD_COLUMNS: &str = "id, name, formation, players, game_type, created_at, updated_at";

pub fn insert_squad(conn: &mut DbConn, record: &SquadRecord) -> Result<SquadRecord> {
    let now = Utc::now();
    let players = encode_players(&record.players)?;
    let sql = format!(
        "INSERT INTO squads (name, formation, players, game_type, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5) RETURNING {}",
        SQUAD_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            record.name,
            record.formation,
            players,
            record.game_type.map(|g| g.as_str()),
            now
        ],
        parse_squad_row,
    )
    .context("Failed to insert squad")
}

pub fn find_by_id(conn: &mut DbConn, id: SquadId) -> Result<Option<SquadRecord>> {
    let sql = format!("SELECT {} FROM squads WHERE id = ?1", SQUAD_COLUMNS);

    conn.query_row(&sql, params![id], parse_squad_row)
        .optional()
        .context("Failed to query squad by id")
}

/// Most recently updated first
pub fn list_all(conn: &mut DbConn) -> Result<Vec<SquadRecord>> {
    let sql = format!(
        "SELECT {} FROM squads ORDER BY updated_at DESC, id DESC",
        SQUAD_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_squad_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Apply a partial update. `None` when the squad does not exist.
pub fn update_squad(
    conn: &mut DbConn,
    id: SquadId,
    patch: SquadPatch,
) -> Result<Option<SquadRecord>> {
    let Some(mut record) = find_by_id(conn, id)? else {
        return Ok(None);
    };
    record.apply(patch);

    let players = encode_players(&record.players)?;
    let sql = format!(
        "UPDATE squads SET name = ?1, formation = ?2, players = ?3, game_type = ?4, updated_at = ?5 WHERE id = ?6 RETURNING {}",
        SQUAD_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            record.name,
            record.formation,
            players,
            record.game_type.map(|g| g.as_str()),
            Utc::now(),
            id
        ],
        parse_squad_row,
    )
    .optional()
    .context("Failed to update squad")
}

/// Returns whether a row was removed.
pub fn delete_squad(conn: &mut DbConn, id: SquadId) -> Result<bool> {
    let removed = conn
        .execute("DELETE FROM squads WHERE id = ?1", params![id])
        .context("Failed to delete squad")?;
    Ok(removed > 0)
}

fn encode_players(players: &[RosterEntry]) -> Result<String> {
    serde_json::to_string(players).context("Failed to encode squad players")
}

fn parse_squad_row(row: &rusqlite::Row) -> rusqlite::Result<SquadRecord> {
    let players_json: String = row.get(3)?;
    let players: Vec<RosterEntry> = serde_json::from_str(&players_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    let game_type: Option<String> = row.get(4)?;
    let game_type = game_type
        .map(|g| g.parse::<Ruleset>())
        .transpose()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, e.into()))?;

    let created_at: DateTime<Utc> = row.get(5)?;
    let updated_at: DateTime<Utc> = row.get(6)?;

    Ok(SquadRecord {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        formation: row.get(2)?,
        players,
        game_type,
        created_at: Some(created_at),
        updated_at: Some(updated_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::{DbPool, create_memory_pool, get_connection};
    use crate::domain::PositionCode;

    fn pool() -> DbPool {
        create_memory_pool().unwrap()
    }

    fn record(name: &str) -> SquadRecord {
        SquadRecord {
            id: None,
            name: name.to_string(),
            formation: "5v5 1-2-1".to_string(),
            players: vec![RosterEntry {
                id: 1,
                name: "Keeper".to_string(),
                position: PositionCode::GK,
                x: 50.0,
                y: 90.0,
                is_bench: false,
                team_name: Some("Team 1".to_string()),
            }],
            game_type: Some(Ruleset::Reduced),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_insert_assigns_id_and_timestamps() {
        let pool = pool();
        let mut conn = get_connection(&pool).unwrap();

        let saved = insert_squad(&mut conn, &record("Tuesday")).unwrap();

        assert!(saved.id.is_some());
        assert!(saved.created_at.is_some());
        assert_eq!(saved.created_at, saved.updated_at);
        assert_eq!(saved.players, record("Tuesday").players);
        assert_eq!(saved.game_type, Some(Ruleset::Reduced));
    }

    #[test]
    fn test_find_list_delete() {
        let pool = pool();
        let mut conn = get_connection(&pool).unwrap();
        let first = insert_squad(&mut conn, &record("one")).unwrap();
        let second = insert_squad(&mut conn, &record("two")).unwrap();

        let listed = list_all(&mut conn).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);

        let id = first.id.unwrap();
        assert_eq!(find_by_id(&mut conn, id).unwrap(), Some(first));
        assert!(delete_squad(&mut conn, id).unwrap());
        assert!(!delete_squad(&mut conn, id).unwrap());
        assert!(find_by_id(&mut conn, id).unwrap().is_none());
    }

    #[test]
    fn test_update_applies_patch() {
        let pool = pool();
        let mut conn = get_connection(&pool).unwrap();
        let saved = insert_squad(&mut conn, &record("before")).unwrap();
        let id = saved.id.unwrap();

        let patch = SquadPatch {
            name: Some("after".to_string()),
            ..SquadPatch::default()
        };
        let updated = update_squad(&mut conn, id, patch).unwrap().unwrap();

        assert_eq!(updated.name, "after");
        assert_eq!(updated.formation, saved.formation);
        assert_eq!(updated.created_at, saved.created_at);
        assert!(updated.updated_at >= saved.updated_at);

        assert!(
            update_squad(&mut conn, 999, SquadPatch::default())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_missing_game_type_round_trips_as_none() {
        let pool = pool();
        let mut conn = get_connection(&pool).unwrap();
        let mut old = record("legacy");
        old.game_type = None;

        let saved = insert_squad(&mut conn, &old).unwrap();
        assert_eq!(saved.game_type, None);
        assert_eq!(saved.ruleset(), Ruleset::Reduced);
    }
}
