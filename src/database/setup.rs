use anyhow::{Context, Result};

use super::connection::DbConn;

const DROP_STATEMENTS: [&str; 4] = [
    "DROP VIEW IF EXISTS player_standings",
    "DROP TABLE IF EXISTS matches",
    "DROP TABLE IF EXISTS players",
    "DROP TABLE IF EXISTS tournaments",
];

/// Creates any missing tables and views; existing data is left alone.
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::debug!("Database schema ensured ({} statements)", statements.len());
    Ok(())
}

pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    for statement in DROP_STATEMENTS {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute `{}`", statement))?;
    }

    ensure_schema(conn)?;
    log::info!("Database schema reset successfully");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_splits_into_tables_indexes_and_view() {
        let statements = split_sql_statements(include_str!("schema.sql"));

        assert_eq!(statements.len(), 6);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS tournaments"));
        assert!(statements[5].starts_with("CREATE VIEW IF NOT EXISTS player_standings"));
    }
}
