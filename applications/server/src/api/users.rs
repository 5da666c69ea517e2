/// Users API routes
///
/// Thin translation layer: one store call per request, outcome mapped to a
/// status code. Lookup misses and rejected writes are not errors here.
use crate::{config::CreateResponseMode, error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{CreateUser, User, UserId};

/// Every response the users endpoints can produce
#[derive(Debug)]
pub enum UserResponse {
    /// 200 with a JSON array
    List(Vec<User>),
    /// 200 with a JSON user
    Found(User),
    /// 204, no body and no `Content-Type`
    NoContent,
    /// 201, no body
    Created,
    /// 201 with the saved user and its `Location`
    CreatedWithBody(User),
    /// 409, no body
    Conflict,
    /// 406, no body
    NotAcceptable,
}

impl IntoResponse for UserResponse {
    fn into_response(self) -> Response {
        match self {
            Self::List(users) => (StatusCode::OK, Json(users)).into_response(),
            Self::Found(user) => (StatusCode::OK, Json(user)).into_response(),
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
            Self::Created => StatusCode::CREATED.into_response(),
            Self::CreatedWithBody(user) => {
                let location = format!("/users/{}", user.id);
                (StatusCode::CREATED, [(header::LOCATION, location)], Json(user)).into_response()
            }
            Self::Conflict => StatusCode::CONFLICT.into_response(),
            Self::NotAcceptable => StatusCode::NOT_ACCEPTABLE.into_response(),
        }
    }
}

/// GET /users
/// List all users in store order
pub async fn list_users(State(app_state): State<AppState>) -> Result<UserResponse> {
    let users = app_state.store.list_all().await?;
    tracing::debug!(count = users.len(), "Listed users");

    Ok(UserResponse::List(users))
}

/// GET /users/:id
/// Get a single user; 204 when the id is unknown
pub async fn get_user(
    Path(id): Path<UserId>,
    State(app_state): State<AppState>,
) -> Result<UserResponse> {
    match app_state.store.find_by_id(id).await? {
        Some(user) => Ok(UserResponse::Found(user)),
        None => {
            tracing::debug!(%id, "User not found");
            Ok(UserResponse::NoContent)
        }
    }
}

/// POST /users
/// Create a user from a JSON body; 409 when the store rejects it
pub async fn create_user(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateUser>,
) -> Result<UserResponse> {
    if !accepts_json(&headers) {
        return Ok(UserResponse::NotAcceptable);
    }

    let requested = req.id;
    let Some(saved) = app_state.store.save(req).await? else {
        tracing::warn!(id = ?requested, "User rejected by store");
        return Ok(UserResponse::Conflict);
    };

    tracing::info!(id = %saved.id, "User created");

    match app_state.api.create_response {
        CreateResponseMode::Empty => Ok(UserResponse::Created),
        CreateResponseMode::Entity => Ok(UserResponse::CreatedWithBody(saved)),
    }
}

/// Whether the request's `Accept` headers admit a JSON response.
/// No `Accept` header at all means anything goes; `q=0` excludes a range.
fn accepts_json(headers: &HeaderMap) -> bool {
    let mut values = headers.get_all(header::ACCEPT).into_iter().peekable();
    if values.peek().is_none() {
        return true;
    }

    values
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|range| {
            let mut parts = range.split(';');
            let media = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
            let json = matches!(media.as_str(), "*/*" | "application/*" | "application/json")
                || (media.starts_with("application/") && media.ends_with("+json"));

            json && quality(parts) > 0.0
        })
}

/// The `q` weight among a media range's parameters, 1.0 when absent.
/// Unparseable weights count as 0.
fn quality<'a>(params: impl Iterator<Item = &'a str>) -> f32 {
    params
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
        .map_or(1.0, |(_, value)| value.trim().parse().unwrap_or(0.0))
}
