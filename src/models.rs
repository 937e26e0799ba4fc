use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;

// --- Core Application Schemas (Mapped to Database) ---

/// Actor
///
/// A row from the `actors` table. `id` is server-generated and immutable; all
/// other fields are non-null at creation time.
///
/// `age` is stored and serialized as a string. This mirrors the existing wire
/// contract, which clients already depend on; changing it to a number would be
/// a breaking change.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Actor {
    pub id: i32,
    pub name: String,
    pub age: String,
    pub gender: String,
}

/// Movie
///
/// A row from the `movies` table. `release` is a string-typed date/year
/// representation, kept as-is for the same wire-contract reason as `Actor::age`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release: String,
}

// --- Request Payloads (Input Schemas) ---

/// CreateActorRequest
///
/// Input payload for POST /actors. Fields are `Option<String>` so that a missing
/// field reaches the handler's own validation (which answers 400) instead of
/// being rejected by the JSON deserializer. Empty strings are treated the same
/// as missing fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateActorRequest {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}

/// CreateMovieRequest
///
/// Input payload for POST /movies. Same validation contract as
/// [`CreateActorRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub release: Option<String>,
}

/// NewActor
///
/// The validated form of a create request, handed to the repository. All fields
/// are guaranteed present and non-empty by the handler.
#[derive(Debug, Clone)]
pub struct NewActor {
    pub name: String,
    pub age: String,
    pub gender: String,
}

/// NewMovie
///
/// The validated form of a movie create request.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub release: String,
}

/// UpdateActorRequest
///
/// Partial update payload for PATCH /actors/{id}. Only the supplied fields
/// change; omitted fields keep their stored values (COALESCE at the repository
/// layer).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateActorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// UpdateMovieRequest
///
/// Partial update payload for PATCH /movies/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateMovieRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
}

// --- Response Envelopes (Output Schemas) ---

// Every successful response carries `success: true` alongside the payload,
// matching the envelope clients of this API expect.

/// ActorListResponse
///
/// Output of GET /actors: one page of actors.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ActorListResponse {
    pub actors: Vec<Actor>,
    pub success: bool,
}

/// ActorResponse
///
/// Output of POST /actors and PATCH /actors/{id}: the created or updated record.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ActorResponse {
    pub actor: Actor,
    pub success: bool,
}

/// ActorDeletedResponse
///
/// Output of DELETE /actors/{id}: only the removed id is echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ActorDeletedResponse {
    pub actor_id: i32,
    pub success: bool,
}

/// MovieListResponse
///
/// Output of GET /movies: one page of movies.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
    pub success: bool,
}

/// MovieResponse
///
/// Output of POST /movies and PATCH /movies/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct MovieResponse {
    pub movie: Movie,
    pub success: bool,
}

/// MovieDeletedResponse
///
/// Output of DELETE /movies/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct MovieDeletedResponse {
    pub movie_id: i32,
    pub success: bool,
}
