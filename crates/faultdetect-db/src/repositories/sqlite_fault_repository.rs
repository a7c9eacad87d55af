//! `SQLite` implementation of the fault repository.
//!
//! Fault records live in the `faults` table. The repository assigns each
//! record its identifier at insert time and validates raw identifiers
//! before any lookup reaches the database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use faultdetect_core::domain::fault::{Fault, FaultId, NewFault};
use faultdetect_core::ports::fault_repository::{FaultRepository, FaultRepositoryError};

/// `SQLite` implementation of the fault repository.
pub struct SqliteFaultRepository {
    pool: SqlitePool,
}

impl SqliteFaultRepository {
    /// Create a new `SQLite` fault repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Internal row type for database queries
// ─────────────────────────────────────────────────────────────────────────────

#[derive(sqlx::FromRow)]
struct FaultRow {
    id: String,
    product_id: String,
    fault_type: String,
    confidence: f64,
    detected_at: String,
    image_url: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a `FaultRow` to a domain `Fault`.
///
/// A row that fails to decode is a storage-level problem, never `NotFound`.
fn row_to_fault(row: FaultRow) -> Result<Fault, FaultRepositoryError> {
    let id = FaultId::parse(&row.id).ok_or_else(|| {
        FaultRepositoryError::Storage(format!("stored fault has malformed id: {}", row.id))
    })?;

    let detected_at = parse_datetime(&row.detected_at)?;

    Ok(Fault {
        id,
        product_id: row.product_id,
        fault_type: row.fault_type,
        confidence: row.confidence,
        detected_at,
        image_url: row.image_url,
    })
}

/// Parse an RFC 3339 datetime string from `SQLite` to a `DateTime<Utc>`.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, FaultRepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            FaultRepositoryError::Storage(format!("stored fault has malformed detected_at: {e}"))
        })
}

/// Map `SQLx` errors to `FaultRepositoryError`.
fn map_sqlx_error(e: sqlx::Error) -> FaultRepositoryError {
    FaultRepositoryError::Storage(e.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl FaultRepository for SqliteFaultRepository {
    async fn insert(&self, fault: NewFault) -> Result<Fault, FaultRepositoryError> {
        let id = FaultId::generate();

        sqlx::query(
            r#"
            INSERT INTO faults (id, product_id, fault_type, confidence, detected_at, image_url)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.as_str())
        .bind(&fault.product_id)
        .bind(&fault.fault_type)
        .bind(fault.confidence)
        .bind(fault.detected_at.to_rfc3339())
        .bind(&fault.image_url)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        // Fetch and return the persisted record through the common mapping path
        self.find_by_id(id.as_str()).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Fault, FaultRepositoryError> {
        tracing::debug!(id, "querying fault");

        let Some(parsed) = FaultId::parse(id) else {
            tracing::debug!(id, "rejected malformed fault id");
            return Err(FaultRepositoryError::InvalidId(id.to_string()));
        };

        let row = sqlx::query_as::<_, FaultRow>(
            r#"
            SELECT id, product_id, fault_type, confidence, detected_at, image_url
            FROM faults WHERE id = ?
            "#,
        )
        .bind(parsed.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| FaultRepositoryError::NotFound(parsed.to_string()))?;

        row_to_fault(row)
    }
}

impl SqliteFaultRepository {
    /// Dump every fault record, oldest detection first.
    ///
    /// Maintenance helper for the `query-faults` CLI command; deliberately
    /// not part of the `FaultRepository` port, which exposes no listing.
    pub async fn dump_all(&self) -> Result<Vec<Fault>, FaultRepositoryError> {
        let rows = sqlx::query_as::<_, FaultRow>(
            r#"
            SELECT id, product_id, fault_type, confidence, detected_at, image_url
            FROM faults ORDER BY detected_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(row_to_fault).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::setup::setup_test_database;

    async fn test_repo() -> SqliteFaultRepository {
        let pool = setup_test_database().await.unwrap();
        SqliteFaultRepository::new(pool)
    }

    fn sample_fault() -> NewFault {
        NewFault {
            product_id: "P1".to_string(),
            fault_type: "crack".to_string(),
            confidence: 0.92,
            detected_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            image_url: Some("https://img.example/p1.jpg".to_string()),
        }
    }

    #[tokio::test]
    async fn insert_assigns_well_formed_id() {
        let repo = test_repo().await;

        let fault = repo.insert(sample_fault()).await.unwrap();

        assert_eq!(fault.id.as_str().len(), 24);
        assert!(fault.id.as_str().bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn insert_then_find_roundtrips_all_fields() {
        let repo = test_repo().await;
        let new_fault = sample_fault();

        let created = repo.insert(new_fault.clone()).await.unwrap();
        let found = repo.find_by_id(created.id.as_str()).await.unwrap();

        assert_eq!(found, created);
        assert_eq!(found.product_id, new_fault.product_id);
        assert_eq!(found.fault_type, new_fault.fault_type);
        assert_eq!(found.confidence, new_fault.confidence);
        assert_eq!(found.detected_at, new_fault.detected_at);
        assert_eq!(found.image_url, new_fault.image_url);
    }

    #[tokio::test]
    async fn find_rejects_malformed_ids_before_querying() {
        let repo = test_repo().await;

        for bad in ["", "not-a-valid-id", "abc123", "5f9d88b1c2a34e0012ab34cg"] {
            let err = repo.find_by_id(bad).await.unwrap_err();
            assert!(
                matches!(err, FaultRepositoryError::InvalidId(_)),
                "expected InvalidId for {bad:?}, got {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn find_returns_not_found_for_unassigned_id() {
        let repo = test_repo().await;

        let err = repo.find_by_id("5f9d88b1c2a34e0012ab34cd").await.unwrap_err();

        assert!(matches!(err, FaultRepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn find_accepts_mixed_case_ids() {
        let repo = test_repo().await;
        let created = repo.insert(sample_fault()).await.unwrap();

        let upper = created.id.as_str().to_ascii_uppercase();
        let found = repo.find_by_id(&upper).await.unwrap();

        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn identical_payloads_get_distinct_ids() {
        let repo = test_repo().await;
        let payload = sample_fault();

        let first = repo.insert(payload.clone()).await.unwrap();
        let second = repo.insert(payload).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(
            repo.find_by_id(first.id.as_str()).await.unwrap().id,
            first.id
        );
        assert_eq!(
            repo.find_by_id(second.id.as_str()).await.unwrap().id,
            second.id
        );
    }

    #[tokio::test]
    async fn record_without_image_url_roundtrips_as_none() {
        let repo = test_repo().await;
        let new_fault = NewFault {
            image_url: None,
            ..sample_fault()
        };

        let created = repo.insert(new_fault).await.unwrap();
        let found = repo.find_by_id(created.id.as_str()).await.unwrap();

        assert_eq!(found.image_url, None);
    }

    #[tokio::test]
    async fn dump_all_returns_records_by_detection_time() {
        let repo = test_repo().await;

        let later = NewFault {
            detected_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            ..sample_fault()
        };
        let earlier = NewFault {
            detected_at: Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap(),
            ..sample_fault()
        };

        let later = repo.insert(later).await.unwrap();
        let earlier = repo.insert(earlier).await.unwrap();

        let all = repo.dump_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, earlier.id);
        assert_eq!(all[1].id, later.id);
    }
}
