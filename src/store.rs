use std::path::Path;

use rusqlite::{params, Connection};
use tracing::info;

use crate::config::{COUNTRY_COLUMN, GDP_COLUMN};
use crate::error::EtlError;
use crate::transform::{GdpTable, Record};

/// Open (or create) the SQLite database file.
pub fn open(path: impl AsRef<Path>) -> Result<Connection, EtlError> {
    Connection::open(path.as_ref()).map_err(EtlError::Store)
}

/// Write the table as the named relation, dropping any existing table of that
/// name first. Replace, never append. Table names come from configuration
/// constants, which is the only reason interpolating them here is acceptable.
pub fn load_table(
    conn: &Connection,
    table_name: &str,
    table: &GdpTable,
) -> Result<(), EtlError> {
    conn.execute_batch(&format!(
        "DROP TABLE IF EXISTS {table_name};
         CREATE TABLE {table_name} ({COUNTRY_COLUMN} TEXT, {GDP_COLUMN} REAL);"
    ))
    .map_err(EtlError::Store)?;

    let mut insert = conn
        .prepare(&format!(
            "INSERT INTO {table_name} ({COUNTRY_COLUMN}, {GDP_COLUMN}) VALUES (?1, ?2)"
        ))
        .map_err(EtlError::Store)?;
    for record in &table.records {
        insert
            .execute(params![record.country, record.gdp_billion])
            .map_err(EtlError::Store)?;
    }

    info!(rows = table.records.len(), table = table_name, "loaded table");
    println!("Table is ready");
    Ok(())
}

/// Execute `query`, print the query text and its tabular result, and return
/// the rows in result order.
pub fn run_query(conn: &Connection, query: &str) -> Result<GdpTable, EtlError> {
    let mut stmt = conn.prepare(query).map_err(EtlError::Query)?;
    let records = stmt
        .query_map([], |row| {
            Ok(Record {
                country: row.get(0)?,
                gdp_billion: row.get(1)?,
            })
        })
        .map_err(EtlError::Query)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(EtlError::Query)?;

    let result = GdpTable { records };
    println!("{query}");
    print!("{result}");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, f64)]) -> GdpTable {
        GdpTable {
            records: rows
                .iter()
                .map(|(country, gdp)| Record {
                    country: country.to_string(),
                    gdp_billion: *gdp,
                })
                .collect(),
        }
    }

    #[test]
    fn load_replaces_an_existing_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE Countries_by_GDP (Country TEXT, GDP_USD_Billion REAL);
             INSERT INTO Countries_by_GDP VALUES ('Stale A', 1.0);
             INSERT INTO Countries_by_GDP VALUES ('Stale B', 2.0);
             INSERT INTO Countries_by_GDP VALUES ('Stale C', 3.0);",
        )
        .unwrap();

        load_table(&conn, "Countries_by_GDP", &table(&[("Fresh", 9.0), ("New", 8.0)])).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM Countries_by_GDP", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn filter_query_is_boundary_inclusive() {
        let conn = Connection::open_in_memory().unwrap();
        let rows = table(&[("A", 50.0), ("B", 150.0), ("C", 100.0), ("D", 99.99)]);
        load_table(&conn, "Countries_by_GDP", &rows).unwrap();

        let result = run_query(
            &conn,
            "SELECT * FROM Countries_by_GDP WHERE GDP_USD_Billion >= 100",
        )
        .unwrap();

        assert_eq!(
            result,
            table(&[("B", 150.0), ("C", 100.0)]),
            "only the two records at or above the boundary, in insertion order"
        );
    }

    #[test]
    fn query_against_missing_table_is_a_query_error() {
        let conn = Connection::open_in_memory().unwrap();
        let err = run_query(&conn, "SELECT * FROM no_such_table").unwrap_err();
        assert!(matches!(err, EtlError::Query(_)));
    }

    #[test]
    fn open_creates_the_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("World_Economies.db");
        let conn = open(&path).unwrap();
        load_table(&conn, "Countries_by_GDP", &table(&[("X", 1.0)])).unwrap();
        assert!(path.is_file());
    }
}
