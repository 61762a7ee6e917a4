use anyhow::{Context, Result};

use super::connection::DbConn;

/// Create missing tables. Safe to run on every start.
pub fn init_database(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");

    for (idx, statement) in split_sql_statements(schema_sql).iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute schema statement {}", idx + 1))?;
    }

    log::debug!("Squad schema ready");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
