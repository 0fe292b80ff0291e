//! PostgreSQL inventory store (`alat_kesehatan` table)

use async_trait::async_trait;
use sqlx::{Pool, Postgres, QueryBuilder};

use super::InventoryStore;
use crate::{
    error::{AppError, AppResult},
    models::{AssetRecord, Condition},
};

const SELECT_ASSET: &str = r#"
    SELECT kode_aset AS id,
           nama_alat AS name,
           merk AS brand,
           ruangan AS room,
           kondisi AS condition,
           tahun_pengadaan AS acquisition_year
    FROM alat_kesehatan
"#;

/// Rows per INSERT statement; six binds each stays under the protocol limit
const INSERT_CHUNK: usize = 1000;

#[derive(Clone)]
pub struct AssetsRepository {
    pool: Pool<Postgres>,
}

impl AssetsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryStore for AssetsRepository {
    /// Replace the whole table inside one transaction. The table lock makes
    /// concurrent imports and condition updates wait for the commit.
    async fn replace_all(&self, records: Vec<AssetRecord>) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("LOCK TABLE alat_kesehatan IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM alat_kesehatan")
            .execute(&mut *tx)
            .await?;

        for chunk in records.chunks(INSERT_CHUNK) {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO alat_kesehatan (kode_aset, nama_alat, merk, ruangan, kondisi, tahun_pengadaan) ",
            );
            builder.push_values(chunk, |mut row, record| {
                row.push_bind(record.id.clone())
                    .push_bind(record.name.clone())
                    .push_bind(record.brand.clone())
                    .push_bind(record.room.clone())
                    .push_bind(record.condition.as_str().to_string())
                    .push_bind(record.acquisition_year.clone());
            });
            builder.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn update_condition(&self, id: &str, condition: &Condition) -> AppResult<AssetRecord> {
        sqlx::query_as::<_, AssetRecord>(
            r#"
            UPDATE alat_kesehatan SET kondisi = $1
            WHERE kode_aset = $2
            RETURNING kode_aset AS id, nama_alat AS name, merk AS brand, ruangan AS room,
                      kondisi AS condition, tahun_pengadaan AS acquisition_year
            "#,
        )
        .bind(condition.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<AssetRecord> {
        sqlx::query_as::<_, AssetRecord>(&format!("{} WHERE kode_aset = $1", SELECT_ASSET))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    async fn find_all(&self) -> AppResult<Vec<AssetRecord>> {
        let rows = sqlx::query_as::<_, AssetRecord>(&format!("{} ORDER BY kode_aset", SELECT_ASSET))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn search(&self, needle: &str) -> AppResult<Vec<AssetRecord>> {
        let query = format!(
            r#"{}
            WHERE kode_aset ILIKE $1 OR nama_alat ILIKE $1 OR merk ILIKE $1
               OR ruangan ILIKE $1 OR kondisi ILIKE $1 OR tahun_pengadaan ILIKE $1
            ORDER BY kode_aset"#,
            SELECT_ASSET
        );
        let rows = sqlx::query_as::<_, AssetRecord>(&query)
            .bind(like_pattern(needle))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM alat_kesehatan")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// `%needle%` with LIKE wildcards in the needle escaped
fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("igd"), "%igd%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }
}
