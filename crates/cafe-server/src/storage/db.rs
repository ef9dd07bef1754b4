//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use cafe_types::{Cafe, NewCafe};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create database directory: {}", parent.display())
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // AUTOINCREMENT keeps deleted ids from ever being reassigned.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cafes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE NOT NULL,
                map_url TEXT NOT NULL,
                img_url TEXT NOT NULL,
                location TEXT NOT NULL,
                seats TEXT NOT NULL,
                has_toilet BOOLEAN NOT NULL,
                has_wifi BOOLEAN NOT NULL,
                has_sockets TEXT NOT NULL,
                can_take_calls BOOLEAN NOT NULL,
                coffee_price TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Insert a cafe and return its assigned id.
    ///
    /// A duplicate name trips the UNIQUE constraint and comes back as an
    /// error; callers treat that as an unhandled server fault.
    pub async fn create_cafe(&self, cafe: &NewCafe) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO cafes (name, map_url, img_url, location, seats,
                               has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&cafe.name)
        .bind(&cafe.map_url)
        .bind(&cafe.img_url)
        .bind(&cafe.location)
        .bind(&cafe.seats)
        .bind(cafe.has_toilet)
        .bind(cafe.has_wifi)
        .bind(&cafe.has_sockets)
        .bind(cafe.can_take_calls)
        .bind(&cafe.coffee_price)
        .execute(&*self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// All cafes, ordered by name ascending.
    pub async fn list_cafes(&self) -> Result<Vec<Cafe>> {
        let rows: Vec<CafeRow> = sqlx::query_as(
            r#"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn get_cafe(&self, id: i64) -> Result<Option<Cafe>> {
        let row: Option<CafeRow> = sqlx::query_as(
            r#"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row.map(|r| r.into()))
    }

    /// Cafes whose location exactly equals the given string, ordered by name.
    pub async fn list_cafes_by_location(&self, location: &str) -> Result<Vec<Cafe>> {
        let rows: Vec<CafeRow> = sqlx::query_as(
            r#"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes WHERE location = ?1
            ORDER BY name ASC
            "#,
        )
        .bind(location)
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Update only the coffee price. Returns false when the id is absent.
    pub async fn update_coffee_price(&self, id: i64, new_price: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE cafes SET coffee_price = ?1 WHERE id = ?2
            "#,
        )
        .bind(new_price)
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a cafe. Returns false when the id is absent.
    pub async fn delete_cafe(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM cafes WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct CafeRow {
    id: i64,
    name: String,
    map_url: String,
    img_url: String,
    location: String,
    seats: String,
    has_toilet: bool,
    has_wifi: bool,
    has_sockets: String,
    can_take_calls: bool,
    coffee_price: Option<String>,
}

impl From<CafeRow> for Cafe {
    fn from(r: CafeRow) -> Self {
        Cafe {
            id: r.id,
            name: r.name,
            map_url: r.map_url,
            img_url: r.img_url,
            location: r.location,
            seats: r.seats,
            has_toilet: r.has_toilet,
            has_wifi: r.has_wifi,
            has_sockets: r.has_sockets,
            can_take_calls: r.can_take_calls,
            coffee_price: r.coffee_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cafes.db");
        let db = Database::new(path.to_str().unwrap()).await.expect("open db");
        (dir, db)
    }

    fn sample_cafe(name: &str, location: &str) -> NewCafe {
        NewCafe {
            name: name.to_string(),
            map_url: "https://maps.example.com/cafe".to_string(),
            img_url: "https://img.example.com/cafe.jpg".to_string(),
            location: location.to_string(),
            seats: "20-30".to_string(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: "some".to_string(),
            can_take_calls: false,
            coffee_price: Some("£2.50".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (_dir, db) = test_db().await;

        let id = db.create_cafe(&sample_cafe("Grind", "London")).await.unwrap();
        assert!(id > 0);

        let cafes = db.list_cafes().await.unwrap();
        assert_eq!(cafes.len(), 1);
        assert_eq!(cafes[0].id, id);
        assert_eq!(cafes[0].name, "Grind");
        assert_eq!(cafes[0].seats, "20-30");
        assert!(cafes[0].has_wifi);
        assert!(!cafes[0].can_take_calls);
        assert_eq!(cafes[0].coffee_price.as_deref(), Some("£2.50"));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_name() {
        let (_dir, db) = test_db().await;

        db.create_cafe(&sample_cafe("Zetland", "London")).await.unwrap();
        db.create_cafe(&sample_cafe("Attendant", "London")).await.unwrap();
        db.create_cafe(&sample_cafe("Monmouth", "London")).await.unwrap();

        let names: Vec<_> = db
            .list_cafes()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Attendant", "Monmouth", "Zetland"]);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let (_dir, db) = test_db().await;

        db.create_cafe(&sample_cafe("Grind", "London")).await.unwrap();
        let err = db.create_cafe(&sample_cafe("Grind", "Peckham")).await;
        assert!(err.is_err());

        // The failed insert must not leave a row behind.
        assert_eq!(db.list_cafes().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_cafe() {
        let (_dir, db) = test_db().await;

        let id = db.create_cafe(&sample_cafe("Grind", "London")).await.unwrap();
        let cafe = db.get_cafe(id).await.unwrap().unwrap();
        assert_eq!(cafe.name, "Grind");

        assert!(db.get_cafe(id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_location_filter_is_exact() {
        let (_dir, db) = test_db().await;

        db.create_cafe(&sample_cafe("Grind", "London")).await.unwrap();
        db.create_cafe(&sample_cafe("Old Spike", "Peckham")).await.unwrap();

        let hits = db.list_cafes_by_location("Peckham").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Old Spike");

        // Case matters at this layer; normalization happens above it.
        assert!(db.list_cafes_by_location("peckham").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_price_touches_only_price() {
        let (_dir, db) = test_db().await;

        let id = db.create_cafe(&sample_cafe("Grind", "London")).await.unwrap();
        let before = db.get_cafe(id).await.unwrap().unwrap();

        assert!(db.update_coffee_price(id, "£3.10").await.unwrap());

        let after = db.get_cafe(id).await.unwrap().unwrap();
        assert_eq!(after.coffee_price.as_deref(), Some("£3.10"));
        assert_eq!(
            Cafe {
                coffee_price: before.coffee_price.clone(),
                ..after.clone()
            },
            before
        );
    }

    #[tokio::test]
    async fn test_update_price_missing_id() {
        let (_dir, db) = test_db().await;
        assert!(!db.update_coffee_price(42, "£3.10").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_cafe() {
        let (_dir, db) = test_db().await;

        let id = db.create_cafe(&sample_cafe("Grind", "London")).await.unwrap();
        assert!(db.delete_cafe(id).await.unwrap());
        assert!(db.list_cafes().await.unwrap().is_empty());

        assert!(!db.delete_cafe(id).await.unwrap());
    }
}
