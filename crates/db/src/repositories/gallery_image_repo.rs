//! Repository for the `gallery_images` table.
//!
//! Reads join `categories` so callers receive [`GalleryImageDetail`] with the
//! category expanded. The join is a LEFT JOIN: images whose category has been
//! deleted are still returned, with `category = None`.

use gallery_core::pagination::PageRequest;
use gallery_core::search::contains_pattern;
use gallery_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery_image::{
    CreateGalleryImage, GalleryFilter, GalleryImage, GalleryImageDetail, GalleryImagePage,
    GalleryImageRow, UpdateGalleryImage,
};

/// Column list for flat `gallery_images` queries.
const COLUMNS: &str = "id, title, url, category_id, created_at, updated_at";

/// Column list for `g` (images) joined with `c` (categories).
const JOINED_COLUMNS: &str = "\
    g.id, g.title, g.url, g.category_id, g.created_at, g.updated_at, \
    c.id AS cat_id, c.name AS cat_name, c.description AS cat_description, \
    c.image AS cat_image, c.created_at AS cat_created_at, c.updated_at AS cat_updated_at";

/// Provides CRUD and paginated listing for gallery images.
pub struct GalleryImageRepo;

impl GalleryImageRepo {
    /// List one page of images matching `filter`, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &GalleryFilter,
        page: PageRequest,
    ) -> Result<GalleryImagePage, sqlx::Error> {
        let title_pattern = filter.title_contains.as_deref().map(contains_pattern);

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.category_id.is_some() {
            conditions.push(format!("g.category_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if title_pattern.is_some() {
            conditions.push(format!("g.title ILIKE ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_query = format!("SELECT COUNT(*) FROM gallery_images g {where_clause}");
        let mut count_q = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(category_id) = filter.category_id {
            count_q = count_q.bind(category_id);
        }
        if let Some(ref pattern) = title_pattern {
            count_q = count_q.bind(pattern.clone());
        }
        let total = count_q.fetch_one(pool).await?;

        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM gallery_images g \
             LEFT JOIN categories c ON c.id = g.category_id \
             {where_clause} \
             ORDER BY g.created_at DESC, g.id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );
        let mut q = sqlx::query_as::<_, GalleryImageRow>(&query);
        if let Some(category_id) = filter.category_id {
            q = q.bind(category_id);
        }
        if let Some(ref pattern) = title_pattern {
            q = q.bind(pattern.clone());
        }
        let rows = q
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        Ok(GalleryImagePage {
            items: rows.into_iter().map(GalleryImageDetail::from).collect(),
            total,
        })
    }

    /// Find an image by ID, with its category expanded.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GalleryImageDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM gallery_images g \
             LEFT JOIN categories c ON c.id = g.category_id \
             WHERE g.id = $1"
        );
        let row = sqlx::query_as::<_, GalleryImageRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(GalleryImageDetail::from))
    }

    /// Insert a new image and return it with its category expanded.
    ///
    /// The caller is responsible for checking that the category exists.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryImage,
    ) -> Result<GalleryImageDetail, sqlx::Error> {
        let query = format!(
            "WITH g AS (
                INSERT INTO gallery_images (title, url, category_id)
                VALUES ($1, $2, $3)
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS}
             FROM g LEFT JOIN categories c ON c.id = g.category_id"
        );
        let row = sqlx::query_as::<_, GalleryImageRow>(&query)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.category_id)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Apply a partial update and return the image with its category expanded.
    ///
    /// Fields left as `None` keep their current value. Returns `None` if no
    /// image has this ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryImage,
    ) -> Result<Option<GalleryImageDetail>, sqlx::Error> {
        let query = format!(
            "WITH g AS (
                UPDATE gallery_images SET
                    title = COALESCE($2, title),
                    url = COALESCE($3, url),
                    category_id = COALESCE($4, category_id),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS}
             FROM g LEFT JOIN categories c ON c.id = g.category_id"
        );
        let row = sqlx::query_as::<_, GalleryImageRow>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.url.as_deref())
            .bind(input.category_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(GalleryImageDetail::from))
    }

    /// Delete an image by ID, returning the deleted row if there was one.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!("DELETE FROM gallery_images WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
