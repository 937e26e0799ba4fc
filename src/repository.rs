use crate::models::{Actor, Movie, NewActor, NewMovie, UpdateActorRequest, UpdateMovieRequest};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations over the two
/// record kinds. Handlers interact with the data layer through this trait only,
/// so the concrete implementation (Postgres in production, mocks in tests) can
/// be swapped without touching routing or authorization.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's async task boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Actors ---
    /// All actors ordered by id. An empty result is a normal return here; the
    /// caller decides whether that is a not-found condition.
    async fn list_actors(&self) -> Vec<Actor>;
    async fn get_actor(&self, id: i32) -> Option<Actor>;
    /// Inserts and returns the new row. Store failures surface to the caller,
    /// which maps them to 422.
    async fn create_actor(&self, actor: NewActor) -> Result<Actor, sqlx::Error>;
    /// Partial update: only the supplied fields change. `None` when the id does
    /// not exist.
    async fn update_actor(&self, id: i32, patch: UpdateActorRequest) -> Option<Actor>;
    /// Returns true when a row was removed.
    async fn delete_actor(&self, id: i32) -> bool;

    // --- Movies ---
    async fn list_movies(&self) -> Vec<Movie>;
    async fn get_movie(&self, id: i32) -> Option<Movie>;
    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, sqlx::Error>;
    async fn update_movie(&self, id: i32, patch: UpdateMovieRequest) -> Option<Movie>;
    async fn delete_movie(&self, id: i32) -> bool;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer across the application
/// state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by PostgreSQL.
/// Every operation commits immediately; there are no multi-call transactions.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PostgresRepository {
    async fn list_actors(&self) -> Vec<Actor> {
        match sqlx::query_as::<_, Actor>(
            r#"SELECT id, name, age, gender FROM actors ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("list_actors error: {:?}", e);
                vec![]
            }
        }
    }

    async fn get_actor(&self, id: i32) -> Option<Actor> {
        sqlx::query_as::<_, Actor>(r#"SELECT id, name, age, gender FROM actors WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_actor error: {:?}", e);
                None
            })
    }

    async fn create_actor(&self, actor: NewActor) -> Result<Actor, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            r#"INSERT INTO actors (name, age, gender) VALUES ($1, $2, $3)
               RETURNING id, name, age, gender"#,
        )
        .bind(actor.name)
        .bind(actor.age)
        .bind(actor.gender)
        .fetch_one(&self.pool)
        .await
    }

    /// Uses `COALESCE` so only the supplied fields change; omitted fields keep
    /// their stored values.
    async fn update_actor(&self, id: i32, patch: UpdateActorRequest) -> Option<Actor> {
        sqlx::query_as::<_, Actor>(
            r#"
            UPDATE actors
            SET name = COALESCE($2, name),
                age = COALESCE($3, age),
                gender = COALESCE($4, gender)
            WHERE id = $1
            RETURNING id, name, age, gender
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.age)
        .bind(patch.gender)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_actor error: {:?}", e);
            None
        })
    }

    async fn delete_actor(&self, id: i32) -> bool {
        match sqlx::query(r#"DELETE FROM actors WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_actor error: {:?}", e);
                false
            }
        }
    }

    async fn list_movies(&self) -> Vec<Movie> {
        match sqlx::query_as::<_, Movie>(
            r#"SELECT id, title, "release" FROM movies ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("list_movies error: {:?}", e);
                vec![]
            }
        }
    }

    async fn get_movie(&self, id: i32) -> Option<Movie> {
        sqlx::query_as::<_, Movie>(r#"SELECT id, title, "release" FROM movies WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_movie error: {:?}", e);
                None
            })
    }

    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"INSERT INTO movies (title, "release") VALUES ($1, $2)
               RETURNING id, title, "release""#,
        )
        .bind(movie.title)
        .bind(movie.release)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_movie(&self, id: i32, patch: UpdateMovieRequest) -> Option<Movie> {
        sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET title = COALESCE($2, title),
                "release" = COALESCE($3, "release")
            WHERE id = $1
            RETURNING id, title, "release"
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.release)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_movie error: {:?}", e);
            None
        })
    }

    async fn delete_movie(&self, id: i32) -> bool {
        match sqlx::query(r#"DELETE FROM movies WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_movie error: {:?}", e);
                false
            }
        }
    }
}
