//! Bulk loading of the `users.csv` / `orders.csv` exports through
//! `COPY ... FROM STDIN`.

use shared::config::ConnectionPool;
use sqlx::postgres::PgPoolCopyExt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, AsyncReadExt, BufReader},
};
use tracing::info;

const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedTable {
    Users,
    Orders,
}

impl SeedTable {
    pub fn name(&self) -> &'static str {
        match self {
            SeedTable::Users => "users",
            SeedTable::Orders => "orders",
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            SeedTable::Users => &[
                "id",
                "first_name",
                "last_name",
                "email",
                "age",
                "gender",
                "state",
                "street_address",
                "postal_code",
                "city",
                "country",
                "latitude",
                "longitude",
                "traffic_source",
                "created_at",
            ],
            SeedTable::Orders => &[
                "order_id",
                "user_id",
                "status",
                "gender",
                "created_at",
                "returned_at",
                "shipped_at",
                "delivered_at",
                "num_of_item",
            ],
        }
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} has no header line")]
    MissingHeader(PathBuf),
    #[error("Column '{column}' is not a column of table {table}")]
    UnknownColumn { table: &'static str, column: String },
    #[error("Column '{column}' appears twice in the header")]
    DuplicateColumn { column: String },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Splits one CSV record. Commas inside double quotes do not separate
/// fields and `""` inside quotes is a literal quote.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}

/// Splits a CSV header line and checks every name against the table.
pub fn parse_header(table: SeedTable, line: &str) -> Result<Vec<String>, SeedError> {
    let line = line.trim_start_matches('\u{feff}').trim_end_matches(['\r', '\n']);
    let mut columns: Vec<String> = Vec::new();

    for raw in split_record(line) {
        let column = raw.trim().to_string();

        if !table.columns().contains(&column.as_str()) {
            return Err(SeedError::UnknownColumn {
                table: table.name(),
                column,
            });
        }
        if columns.contains(&column) {
            return Err(SeedError::DuplicateColumn { column });
        }
        columns.push(column);
    }

    Ok(columns)
}

pub fn copy_statement(table: SeedTable, columns: &[String]) -> String {
    format!(
        "COPY {} ({}) FROM STDIN WITH (FORMAT csv, HEADER true)",
        table.name(),
        columns.join(", ")
    )
}

async fn read_header(path: &Path) -> Result<String, SeedError> {
    let io_err = |source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).await.map_err(io_err)?;
    let mut line = String::new();
    let read = BufReader::new(file)
        .read_line(&mut line)
        .await
        .map_err(io_err)?;

    if read == 0 || line.trim().is_empty() {
        return Err(SeedError::MissingHeader(path.to_path_buf()));
    }

    Ok(line)
}

/// Appends every row of `path` to `table`; returns the number of rows copied.
pub async fn load_csv(
    pool: &ConnectionPool,
    table: SeedTable,
    path: &Path,
) -> Result<u64, SeedError> {
    let header = read_header(path).await?;
    let columns = parse_header(table, &header)?;
    let statement = copy_statement(table, &columns);

    info!("📥 Loading {} into {}", path.display(), table.name());

    let io_err = |source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).await.map_err(io_err)?;
    let mut copy = pool.copy_in_raw(&statement).await?;
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = match file.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                copy.abort(format!("failed reading {}", path.display())).await?;
                return Err(io_err(e));
            }
        };
        copy.send(&buf[..n]).await?;
    }

    Ok(copy.finish().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_in_export_order_is_accepted() {
        let columns = parse_header(
            SeedTable::Orders,
            "order_id,user_id,status,gender,created_at,returned_at,shipped_at,delivered_at,num_of_item\r\n",
        )
        .unwrap();

        assert_eq!(columns.len(), 9);
        assert_eq!(columns[0], "order_id");
        assert_eq!(columns[8], "num_of_item");
    }

    #[test]
    fn quoted_and_bom_prefixed_names_are_normalised() {
        let columns = parse_header(SeedTable::Users, "\u{feff}\"id\", \"email\"\n").unwrap();

        assert_eq!(columns, vec!["id".to_string(), "email".to_string()]);
    }

    #[test]
    fn quoted_comma_stays_inside_one_name() {
        let err = parse_header(SeedTable::Users, "id,\"email,age\"").unwrap_err();

        match err {
            SeedError::UnknownColumn { column, .. } => assert_eq!(column, "email,age"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn escaped_quotes_are_unescaped() {
        assert_eq!(
            split_record("\"a\"\"b\",c"),
            vec!["a\"b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn unknown_column_is_rejected() {
        let err = parse_header(SeedTable::Users, "id,email;DROP TABLE users").unwrap_err();

        assert!(matches!(err, SeedError::UnknownColumn { table: "users", .. }));
    }

    #[test]
    fn duplicate_column_is_rejected() {
        let err = parse_header(SeedTable::Orders, "order_id,status,order_id").unwrap_err();

        assert!(matches!(err, SeedError::DuplicateColumn { .. }));
    }

    #[test]
    fn copy_statement_lists_header_columns() {
        let columns = vec!["id".to_string(), "first_name".to_string()];

        assert_eq!(
            copy_statement(SeedTable::Users, &columns),
            "COPY users (id, first_name) FROM STDIN WITH (FORMAT csv, HEADER true)"
        );
    }

    #[tokio::test]
    async fn empty_file_has_no_header() {
        let path = std::env::temp_dir().join(format!("seed-empty-{}.csv", std::process::id()));
        tokio::fs::write(&path, b"").await.unwrap();

        let err = read_header(&path).await.unwrap_err();
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(matches!(err, SeedError::MissingHeader(_)));
    }
}
