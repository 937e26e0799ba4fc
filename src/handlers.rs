use crate::{
    AppState,
    auth::AuthClaims,
    error::ApiError,
    models::{
        Actor, ActorDeletedResponse, ActorListResponse, ActorResponse, CreateActorRequest,
        CreateMovieRequest, Movie, MovieDeletedResponse, MovieListResponse, MovieResponse,
        NewActor, NewMovie, UpdateActorRequest, UpdateMovieRequest,
    },
    pagination::paginate,
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use serde::Deserialize;

// --- Query Parameters ---

/// PageQuery
///
/// The accepted query parameters for the list endpoints. Pages are 1-indexed
/// and default to the first page when the parameter is absent.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct PageQuery {
    pub page: Option<usize>,
}

/// Pulls a required create-request field out of its `Option`, answering 400 for
/// a missing or empty value.
fn require_field(value: Option<String>) -> Result<String, ApiError> {
    value.filter(|v| !v.is_empty()).ok_or(ApiError::BadRequest)
}

// --- Handlers ---

/// welcome
///
/// [Public Route] Static landing message at the API root.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message", body = String))
)]
pub async fn welcome() -> Json<&'static str> {
    Json("Welcome to the Casting Agency")
}

/// get_actors
///
/// [Protected Route: get:actors] Lists one page of actors, ordered by id.
///
/// An empty collection answers 404; an out-of-range page of a non-empty
/// collection answers 200 with an empty list.
#[utoipa::path(
    get,
    path = "/actors",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of actors", body = ActorListResponse),
        (status = 404, description = "No actors stored")
    )
)]
pub async fn get_actors(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ActorListResponse>, ApiError> {
    claims.require("get:actors")?;

    let actors = state.repo.list_actors().await;
    if actors.is_empty() {
        return Err(ApiError::NotFound);
    }

    let page: Vec<Actor> = paginate(&actors, query.page.unwrap_or(1)).to_vec();
    Ok(Json(ActorListResponse {
        actors: page,
        success: true,
    }))
}

/// get_movies
///
/// [Protected Route: get:movies] Lists one page of movies, ordered by id.
#[utoipa::path(
    get,
    path = "/movies",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of movies", body = MovieListResponse),
        (status = 404, description = "No movies stored")
    )
)]
pub async fn get_movies(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<MovieListResponse>, ApiError> {
    claims.require("get:movies")?;

    let movies = state.repo.list_movies().await;
    if movies.is_empty() {
        return Err(ApiError::NotFound);
    }

    let page: Vec<Movie> = paginate(&movies, query.page.unwrap_or(1)).to_vec();
    Ok(Json(MovieListResponse {
        movies: page,
        success: true,
    }))
}

/// create_actor
///
/// [Protected Route: post:actors] Inserts a new actor.
///
/// All three fields must be present and non-empty (400 otherwise); a store
/// failure during the insert answers 422.
#[utoipa::path(
    post,
    path = "/actors",
    request_body = CreateActorRequest,
    responses(
        (status = 200, description = "Created", body = ActorResponse),
        (status = 400, description = "Missing or empty field"),
        (status = 422, description = "Store rejected the insert")
    )
)]
pub async fn create_actor(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    payload: Result<Json<CreateActorRequest>, JsonRejection>,
) -> Result<Json<ActorResponse>, ApiError> {
    claims.require("post:actors")?;

    let Json(payload) = payload.map_err(|_| ApiError::BadRequest)?;
    let new_actor = NewActor {
        name: require_field(payload.name)?,
        age: require_field(payload.age)?,
        gender: require_field(payload.gender)?,
    };

    let actor = state.repo.create_actor(new_actor).await?;
    Ok(Json(ActorResponse {
        actor,
        success: true,
    }))
}

/// create_movie
///
/// [Protected Route: post:movies] Inserts a new movie. Same validation contract
/// as `create_actor`.
#[utoipa::path(
    post,
    path = "/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 200, description = "Created", body = MovieResponse),
        (status = 400, description = "Missing or empty field"),
        (status = 422, description = "Store rejected the insert")
    )
)]
pub async fn create_movie(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    payload: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Result<Json<MovieResponse>, ApiError> {
    claims.require("post:movies")?;

    let Json(payload) = payload.map_err(|_| ApiError::BadRequest)?;
    let new_movie = NewMovie {
        title: require_field(payload.title)?,
        release: require_field(payload.release)?,
    };

    let movie = state.repo.create_movie(new_movie).await?;
    Ok(Json(MovieResponse {
        movie,
        success: true,
    }))
}

/// update_actor
///
/// [Protected Route: patch:actors] Partial update: only the supplied fields
/// change, omitted fields keep their stored values. 404 when the id does not
/// exist.
#[utoipa::path(
    patch,
    path = "/actors/{id}",
    params(("id" = i32, Path, description = "Actor ID")),
    request_body = UpdateActorRequest,
    responses(
        (status = 200, description = "Updated", body = ActorResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_actor(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateActorRequest>, JsonRejection>,
) -> Result<Json<ActorResponse>, ApiError> {
    claims.require("patch:actors")?;

    let Json(patch) = payload.map_err(|_| ApiError::BadRequest)?;
    match state.repo.update_actor(id, patch).await {
        Some(actor) => Ok(Json(ActorResponse {
            actor,
            success: true,
        })),
        None => Err(ApiError::NotFound),
    }
}

/// update_movie
///
/// [Protected Route: patch:movies] Partial update for a movie.
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Updated", body = MovieResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_movie(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateMovieRequest>, JsonRejection>,
) -> Result<Json<MovieResponse>, ApiError> {
    claims.require("patch:movies")?;

    let Json(patch) = payload.map_err(|_| ApiError::BadRequest)?;
    match state.repo.update_movie(id, patch).await {
        Some(movie) => Ok(Json(MovieResponse {
            movie,
            success: true,
        })),
        None => Err(ApiError::NotFound),
    }
}

/// delete_actor
///
/// [Protected Route: delete:actors] Removes an actor permanently, echoing back
/// the deleted id. 404 when nothing was removed.
#[utoipa::path(
    delete,
    path = "/actors/{id}",
    params(("id" = i32, Path, description = "Actor ID")),
    responses(
        (status = 200, description = "Deleted", body = ActorDeletedResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_actor(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ActorDeletedResponse>, ApiError> {
    claims.require("delete:actors")?;

    if state.repo.delete_actor(id).await {
        Ok(Json(ActorDeletedResponse {
            actor_id: id,
            success: true,
        }))
    } else {
        Err(ApiError::NotFound)
    }
}

/// delete_movie
///
/// [Protected Route: delete:movies] Removes a movie permanently.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Deleted", body = MovieDeletedResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_movie(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieDeletedResponse>, ApiError> {
    claims.require("delete:movies")?;

    if state.repo.delete_movie(id).await {
        Ok(Json(MovieDeletedResponse {
            movie_id: id,
            success: true,
        }))
    } else {
        Err(ApiError::NotFound)
    }
}
