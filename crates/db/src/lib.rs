use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Fails if the database cannot be reached, so a misconfigured process
/// never starts serving requests.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Row counts of both collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct StoreStats {
    pub categories: i64,
    pub gallery_images: i64,
}

/// Count categories and gallery images in one round trip.
///
/// Doubles as the liveness probe for the pool.
pub async fn store_stats(pool: &DbPool) -> Result<StoreStats, sqlx::Error> {
    sqlx::query_as::<_, StoreStats>(
        "SELECT \
            (SELECT COUNT(*) FROM categories) AS categories, \
            (SELECT COUNT(*) FROM gallery_images) AS gallery_images",
    )
    .fetch_one(pool)
    .await
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
