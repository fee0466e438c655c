//! Repository for the singleton `business_info` row.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::business_info::{BusinessInfoRow, UpdateBusinessInfo};

/// Column list for `business_info` queries.
const COLUMNS: &str = "\
    name, address, phone, email, google_maps_url, google_place_id, \
    working_hours, social_media, updated_at";

/// Key of the only row.
const SINGLETON_ID: i16 = 1;

/// Reads and merge-updates the business record.
pub struct BusinessInfoRepo;

impl BusinessInfoRepo {
    /// The business record, or `None` if it has never been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<BusinessInfoRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM business_info WHERE id = $1");
        sqlx::query_as::<_, BusinessInfoRow>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Merge `input` into the stored record, creating it first if needed.
    ///
    /// Localized maps are overlaid key by key; every other present field
    /// replaces the stored value. `check` sees the merged row while the row
    /// lock is held: an `Err` rolls the transaction back and is returned as
    /// the inner result.
    pub async fn merge<F, E>(
        pool: &PgPool,
        input: &UpdateBusinessInfo,
        check: F,
    ) -> Result<Result<BusinessInfoRow, E>, sqlx::Error>
    where
        F: FnOnce(&BusinessInfoRow) -> Result<(), E>,
    {
        let mut tx = pool.begin().await?;

        sqlx::query("INSERT INTO business_info (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(SINGLETON_ID)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "UPDATE business_info SET \
                 name = name || COALESCE($2, '{{}}'::jsonb), \
                 address = address || COALESCE($3, '{{}}'::jsonb), \
                 phone = COALESCE($4, phone), \
                 email = CASE WHEN $5 THEN $6 ELSE email END, \
                 google_maps_url = CASE WHEN $7 THEN $8 ELSE google_maps_url END, \
                 google_place_id = CASE WHEN $9 THEN $10 ELSE google_place_id END, \
                 working_hours = COALESCE($11, working_hours), \
                 social_media = COALESCE($12, social_media), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, BusinessInfoRow>(&query)
            .bind(SINGLETON_ID)
            .bind(input.name.as_ref().map(Json))
            .bind(input.address.as_ref().map(Json))
            .bind(input.phone.as_deref())
            .bind(input.email.is_some())
            .bind(input.email.as_ref().and_then(|v| v.as_deref()))
            .bind(input.google_maps_url.is_some())
            .bind(input.google_maps_url.as_ref().and_then(|v| v.as_deref()))
            .bind(input.google_place_id.is_some())
            .bind(input.google_place_id.as_ref().and_then(|v| v.as_deref()))
            .bind(input.working_hours.as_ref().map(Json))
            .bind(input.social_media.as_ref().map(Json))
            .fetch_one(&mut *tx)
            .await?;

        if let Err(rejected) = check(&row) {
            tx.rollback().await?;
            return Ok(Err(rejected));
        }

        tx.commit().await?;
        Ok(Ok(row))
    }
}
