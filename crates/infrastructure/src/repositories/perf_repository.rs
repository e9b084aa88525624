use async_trait::async_trait;
use dnsperf_application::ports::PerfRowSink;
use dnsperf_domain::{DomainError, PerfRow};
use sqlx::SqlitePool;
use tracing::{error, instrument};

const CREATE_TABLE_PERF: &str = r#"
    CREATE TABLE IF NOT EXISTS perf (
        Id          TEXT PRIMARY KEY,
        Rid         TEXT NOT NULL,
        Counter     INTEGER NOT NULL,
        At          TEXT NOT NULL,
        ServerAddr  TEXT NOT NULL,
        ServerDesc  TEXT NOT NULL,
        Domain      TEXT NOT NULL,
        LookupTime  REAL NOT NULL,
        LookupIp    TEXT
    )
"#;

const INSERT_PERF: &str = "INSERT OR IGNORE INTO perf \
     (Id, Rid, Counter, At, ServerAddr, ServerDesc, Domain, LookupTime, LookupIp) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";

type PerfTuple = (
    String,
    String,
    i64,
    String,
    String,
    String,
    String,
    f64,
    Option<String>,
);

pub struct SqlitePerfRepository {
    pool: SqlitePool,
}

impl SqlitePerfRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_from_tuple(row: PerfTuple) -> PerfRow {
        let (id, rid, counter, at, server_addr, server_desc, domain, lookup_time, lookup_ip) = row;

        PerfRow {
            id,
            rid,
            counter,
            at,
            server_addr,
            server_desc,
            domain,
            lookup_time,
            lookup_ip,
        }
    }

    /// Rows of one run in sequence order.
    #[instrument(skip(self))]
    pub async fn get_by_run(&self, rid: &str) -> Result<Vec<PerfRow>, DomainError> {
        let rows = sqlx::query_as::<_, PerfTuple>(
            "SELECT Id, Rid, Counter, At, ServerAddr, ServerDesc, Domain, LookupTime, LookupIp
             FROM perf WHERE Rid = ? ORDER BY Counter",
        )
        .bind(rid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query perf rows by run");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_from_tuple).collect())
    }
}

#[async_trait]
impl PerfRowSink for SqlitePerfRepository {
    #[instrument(skip(self))]
    async fn ensure_table(&self) -> Result<(), DomainError> {
        sqlx::query(CREATE_TABLE_PERF)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to create perf table");
                DomainError::DatabaseError(e.to_string())
            })?;
        Ok(())
    }

    #[instrument(skip(self, row), fields(id = %row.id))]
    async fn insert_if_absent(&self, row: &PerfRow) -> Result<bool, DomainError> {
        let result = sqlx::query(INSERT_PERF)
            .bind(&row.id)
            .bind(&row.rid)
            .bind(row.counter)
            .bind(&row.at)
            .bind(&row.server_addr)
            .bind(&row.server_desc)
            .bind(&row.domain)
            .bind(row.lookup_time)
            .bind(&row.lookup_ip)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM perf")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count perf rows");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count.0.max(0) as u64)
    }
}
