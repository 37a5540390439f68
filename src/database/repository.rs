use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::DbUser;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All rows of the `"Users"` table, in storage order
    pub async fn find_all(&self) -> Result<Vec<DbUser>, DatabaseError> {
        let users = sqlx::query_as::<_, DbUser>(
            r#"SELECT id, name, email, password, role::text AS role FROM "Users""#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
