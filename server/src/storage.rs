use anyhow::Result;
use dioxus::fullstack::Lazy;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::CONFIG;
pub use session::Session;
pub use user::StoredUser;

mod session;
mod user;

pub static POOL: Lazy<SqlitePool> = Lazy::new(|| async {
    let db_path = CONFIG.data_dir.join("db.sqlite");

    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);

    SqlitePool::connect_with(options).await
});

pub async fn migrate() -> Result<()> {
    Ok(sqlx::migrate!("../migrations").run(&*POOL).await?)
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
    sqlx::migrate!("../migrations").run(&pool).await.unwrap();
    pool
}
