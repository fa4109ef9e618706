use sqlx::PgPool;

use crate::models::Course;

pub async fn list(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY name ASC")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, name: &str) -> Result<Course, sqlx::Error> {
    sqlx::query_as::<_, Course>("INSERT INTO courses (name) VALUES ($1) RETURNING *")
        .bind(name)
        .fetch_one(pool)
        .await
}
