//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use lectio::{DomainError, User, UserRepository};

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
///
/// Preference columns are stored as text and parsed into their domain
/// types on the way out. A row that fails to parse is a corrupt record,
/// surfaced as a repository error rather than a panic.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    phone: String,
    email: Option<String>,
    password_hash: Option<String>,
    version: String,
    plan: String,
    reading_order: String,
    delivery_time: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = row.id;
        Ok(Self {
            id,
            name: row.name,
            phone: row.phone,
            email: row.email,
            password_hash: row.password_hash,
            version: row.version.parse().map_err(|e| corrupt_row(id, e))?,
            plan: row.plan.parse().map_err(|e| corrupt_row(id, e))?,
            reading_order: row.reading_order.parse().map_err(|e| corrupt_row(id, e))?,
            delivery_time: row.delivery_time.parse().map_err(|e| corrupt_row(id, e))?,
            created_at: row.created_at,
        })
    }
}

fn corrupt_row(id: Uuid, detail: String) -> DomainError {
    DomainError::Repository(format!("stored user {} is invalid: {}", id, detail))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, phone, email, password_hash, version, plan,
                   reading_order, delivery_time, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, phone, email, password_hash, version, plan,
                   reading_order, delivery_time, created_at
            FROM users
            WHERE phone = $1
            "#,
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, phone, email, password_hash, version, plan,
                   reading_order, delivery_time, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, phone, email, password_hash, version, plan,
                   reading_order, delivery_time, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, name, phone, email, password_hash, version,
                               plan, reading_order, delivery_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, phone, email, password_hash, version, plan,
                      reading_order, delivery_time, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.phone)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.version.to_string())
        .bind(user.plan.to_string())
        .bind(user.reading_order.to_string())
        .bind(user.delivery_time.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        User::try_from(row)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = $2, email = $3, password_hash = $4, version = $5,
                plan = $6, reading_order = $7, delivery_time = $8
            WHERE id = $1
            RETURNING id, name, phone, email, password_hash, version, plan,
                      reading_order, delivery_time, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.version.to_string())
        .bind(user.plan.to_string())
        .bind(user.reading_order.to_string())
        .bind(user.delivery_time.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        match row {
            Some(row) => User::try_from(row),
            None => Err(DomainError::not_found("User", user.id)),
        }
    }
}
