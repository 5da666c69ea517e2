//! User queries

use roster_core::{
    error::{Result, RosterError},
    CreateUser, Profile, User, UserId,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

fn user_from_row(row: &SqliteRow) -> Result<User> {
    let profile: String = row.try_get("profile")?;
    let profile: Profile = serde_json::from_str(&profile)?;

    Ok(User {
        id: row.try_get::<UserId, _>("id")?,
        name: row.try_get("name")?,
        profile,
    })
}

/// Get all users, ordered by id
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, profile FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter().map(user_from_row).collect()
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, profile FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Insert a user
///
/// Without a requested id SQLite assigns `max(id) + 1`. A requested id that
/// already exists, or lies outside `1..=UserId::MAX_REQUESTED`, leaves the
/// table untouched and yields `None`.
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<Option<User>> {
    match user.id {
        Some(id) if !id.is_requestable() => {
            tracing::debug!(%id, "Rejecting insert, id out of range");
            return Ok(None);
        }
        Some(_) => {}
        // SQLite picks a random free rowid once i64::MAX is taken
        None => {
            let max: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM users")
                .fetch_one(pool)
                .await?;
            if max == Some(i64::MAX) {
                return Err(RosterError::storage("User id space exhausted"));
            }
        }
    }

    let profile = serde_json::to_string(&user.profile)?;

    let result = sqlx::query(
        "INSERT OR IGNORE INTO users (id, name, profile, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(user.id)
    .bind(user.name.as_deref())
    .bind(profile)
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    let id = UserId::new(result.last_insert_rowid());
    Ok(Some(User::from_create(id, user)))
}

/// Count stored users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
