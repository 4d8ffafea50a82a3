use axum::async_trait;
use registry_types::Veterinarian;
use sqlx::PgPool;
use thiserror::Error;

/// Persistence operations for veterinarian records.
#[async_trait]
pub trait VeterinarianStore: Send + Sync {
    /// Insert a new record. Duplicate ids are rejected by the table, not pre-checked.
    async fn create(&self, vet: &Veterinarian) -> Result<(), StoreError>;

    /// Overwrite email, age and is_admin of the row with `vet.id`.
    /// Touches nothing when the id is unknown.
    async fn update(&self, vet: &Veterinarian) -> Result<(), StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Veterinarian>, StoreError>;

    /// All records, in no particular order.
    async fn get_all(&self) -> Result<Vec<Veterinarian>, StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("veterinarian {id} already exists")]
    Duplicate { id: String },
    #[error(transparent)]
    Unavailable(#[from] sqlx::Error),
}

/// Primary-key violations become [`StoreError::Duplicate`], anything else is a store failure.
fn classify_insert_error(err: sqlx::Error, id: &str) -> StoreError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            StoreError::Duplicate { id: id.to_owned() }
        }
        other => StoreError::Unavailable(other),
    }
}

#[derive(sqlx::FromRow)]
struct VeterinarianRow {
    id: String,
    email: String,
    age: i32,
    is_admin: bool,
}

impl From<VeterinarianRow> for Veterinarian {
    fn from(row: VeterinarianRow) -> Self {
        Veterinarian {
            id: row.id,
            email: row.email,
            age: row.age,
            is_admin: row.is_admin,
        }
    }
}

#[derive(Clone)]
pub struct PgVeterinarianRepository {
    pool: PgPool,
}

impl PgVeterinarianRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `veterinarios` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl VeterinarianStore for PgVeterinarianRepository {
    async fn create(&self, vet: &Veterinarian) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO veterinarios (id, email, age, is_admin)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&vet.id)
        .bind(&vet.email)
        .bind(vet.age)
        .bind(vet.is_admin)
        .execute(&self.pool)
        .await
        .map_err(|err| classify_insert_error(err, &vet.id))?;

        Ok(())
    }

    async fn update(&self, vet: &Veterinarian) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE veterinarios
            SET email = $2, age = $3, is_admin = $4
            WHERE id = $1
            "#,
        )
        .bind(&vet.id)
        .bind(&vet.email)
        .bind(vet.age)
        .bind(vet.is_admin)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Veterinarian>, StoreError> {
        let row = sqlx::query_as::<_, VeterinarianRow>(
            r#"SELECT id, email, age, is_admin FROM veterinarios WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Veterinarian::from))
    }

    async fn get_all(&self) -> Result<Vec<Veterinarian>, StoreError> {
        let rows = sqlx::query_as::<_, VeterinarianRow>(
            r#"SELECT id, email, age, is_admin FROM veterinarios"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Veterinarian::from).collect())
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::{StoreError, VeterinarianStore};
    use axum::async_trait;
    use registry_types::Veterinarian;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-process stand-in for the Postgres table, keyed by id.
    #[derive(Default)]
    pub struct MemoryStore {
        rows: Mutex<HashMap<String, Veterinarian>>,
    }

    impl MemoryStore {
        pub fn with(vets: impl IntoIterator<Item = Veterinarian>) -> Self {
            let rows = vets.into_iter().map(|v| (v.id.clone(), v)).collect();
            Self {
                rows: Mutex::new(rows),
            }
        }

        pub fn snapshot(&self) -> HashMap<String, Veterinarian> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl VeterinarianStore for MemoryStore {
        async fn create(&self, vet: &Veterinarian) -> Result<(), StoreError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.contains_key(&vet.id) {
                return Err(StoreError::Duplicate { id: vet.id.clone() });
            }
            rows.insert(vet.id.clone(), vet.clone());
            Ok(())
        }

        async fn update(&self, vet: &Veterinarian) -> Result<(), StoreError> {
            if let Some(row) = self.rows.lock().unwrap().get_mut(&vet.id) {
                row.email = vet.email.clone();
                row.age = vet.age;
                row.is_admin = vet.is_admin;
            }
            Ok(())
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Veterinarian>, StoreError> {
            Ok(self.rows.lock().unwrap().get(id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Veterinarian>, StoreError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }
    }
}
