use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

use super::Datastore;
use crate::core::error::Result;
use crate::features::scans::models::{NewScan, Scan};
use crate::features::vehicles::models::Vehicle;
use crate::features::violations::models::{
    NewViolation, Violation, ViolationFilter, ViolationStatus,
};

const VEHICLE_COLUMNS: &str = "id, plate_number, vin, make, model, year, color, owner_name, \
     registration_status, insurance_status, created_at";

/// Postgres-backed datastore
#[derive(Clone)]
pub struct PgDatastore {
    pool: PgPool,
}

impl PgDatastore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Datastore for PgDatastore {
    async fn find_vehicle_by_plate(&self, plate_number: &str) -> Result<Option<Vehicle>> {
        let sql = format!(
            "SELECT {} FROM vehicles WHERE plate_number = $1",
            VEHICLE_COLUMNS
        );
        let vehicle = sqlx::query_as::<_, Vehicle>(&sql)
            .bind(plate_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    async fn find_vehicles_by_plate_or_vin(
        &self,
        identifier: &str,
        limit: i64,
    ) -> Result<Vec<Vehicle>> {
        let sql = format!(
            "SELECT {} FROM vehicles WHERE plate_number = $1 OR vin = $1 LIMIT $2",
            VEHICLE_COLUMNS
        );
        let vehicles = sqlx::query_as::<_, Vehicle>(&sql)
            .bind(identifier)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    async fn count_violations(&self, plate_number: &str, status: ViolationStatus) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM violations WHERE plate_number = $1 AND status = $2",
        )
        .bind(plate_number)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn insert_violation(&self, violation: NewViolation) -> Result<Violation> {
        let created = sqlx::query_as::<_, Violation>(
            r#"
            INSERT INTO violations (
                plate_number, vehicle_id, officer_id, violation_type, violation_details,
                location, status, evidence_urls, fine_amount
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, plate_number, vehicle_id, officer_id, violation_type,
                      violation_details, location, status, evidence_urls, fine_amount,
                      created_at
            "#,
        )
        .bind(&violation.plate_number)
        .bind(violation.vehicle_id)
        .bind(&violation.officer_id)
        .bind(&violation.violation_type)
        .bind(&violation.violation_details)
        .bind(&violation.location)
        .bind(violation.status)
        .bind(&violation.evidence_urls)
        .bind(violation.fine_amount)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_violations(
        &self,
        filter: &ViolationFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Violation>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM violations
            WHERE ($1::violation_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR plate_number = $2)
              AND ($3::text IS NULL OR officer_id = $3)
            "#,
        )
        .bind(filter.status)
        .bind(&filter.plate_number)
        .bind(&filter.officer_id)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, Violation>(
            r#"
            SELECT id, plate_number, vehicle_id, officer_id, violation_type,
                   violation_details, location, status, evidence_urls, fine_amount,
                   created_at
            FROM violations
            WHERE ($1::violation_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR plate_number = $2)
              AND ($3::text IS NULL OR officer_id = $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(filter.status)
        .bind(&filter.plate_number)
        .bind(&filter.officer_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok((rows, total))
    }

    async fn insert_scan(&self, scan: NewScan) -> Result<Scan> {
        let created = sqlx::query_as::<_, Scan>(
            r#"
            INSERT INTO scans (officer_id, plate_number, scan_type, scan_result, location)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, officer_id, plate_number, scan_type, scan_result, location, created_at
            "#,
        )
        .bind(&scan.officer_id)
        .bind(&scan.plate_number)
        .bind(scan.scan_type)
        .bind(Json(&scan.scan_result))
        .bind(&scan.location)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
