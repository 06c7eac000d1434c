use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    let mut conn = pool.acquire().await?;
    recipebox_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;
    drop(conn);

    Ok(pool)
}
