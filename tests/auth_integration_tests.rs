use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{Method, Request, StatusCode, Uri, header, request::Parts},
};
use casting_agency::{
    AppState, TokenVerifier,
    auth::{AuthClaims, Claims},
    config::AppConfig,
    models::{Actor, Movie, NewActor, NewMovie, UpdateActorRequest, UpdateMovieRequest},
    repository::Repository,
};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use std::{sync::Arc, time::SystemTime};

// --- Mock Repository for Auth Logic ---

// The extractor never touches the repository, so every method is a placeholder.
#[derive(Default)]
struct MockAuthRepo;

#[async_trait]
impl Repository for MockAuthRepo {
    async fn list_actors(&self) -> Vec<Actor> {
        vec![]
    }
    async fn get_actor(&self, _id: i32) -> Option<Actor> {
        None
    }
    async fn create_actor(&self, _actor: NewActor) -> Result<Actor, sqlx::Error> {
        Ok(Actor::default())
    }
    async fn update_actor(&self, _id: i32, _patch: UpdateActorRequest) -> Option<Actor> {
        None
    }
    async fn delete_actor(&self, _id: i32) -> bool {
        false
    }
    async fn list_movies(&self) -> Vec<Movie> {
        vec![]
    }
    async fn get_movie(&self, _id: i32) -> Option<Movie> {
        None
    }
    async fn create_movie(&self, _movie: NewMovie) -> Result<Movie, sqlx::Error> {
        Ok(Movie::default())
    }
    async fn update_movie(&self, _id: i32, _patch: UpdateMovieRequest) -> Option<Movie> {
        None
    }
    async fn delete_movie(&self, _id: i32) -> bool {
        false
    }
}

// --- Helper Functions ---

const TEST_JWT_SECRET: &str = "test-secret-value-1234567890";

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

fn claims_with(permissions: Option<Vec<&str>>, exp_offset: i64) -> Claims {
    let now = now_secs();
    Claims {
        sub: "auth0|integration-tester".to_string(),
        exp: (now + exp_offset) as usize,
        iat: Some(now as usize),
        permissions: permissions.map(|p| p.into_iter().map(String::from).collect()),
    }
}

fn create_token(claims: &Claims) -> String {
    let key = EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes());
    encode(&Header::default(), claims, &key).unwrap()
}

fn create_app_state(secret: &str) -> AppState {
    AppState {
        repo: Arc::new(MockAuthRepo),
        verifier: Arc::new(TokenVerifier::from_secret(secret)),
        config: AppConfig::default(),
    }
}

/// Helper to get the mutable Parts struct from a generated Request.
fn get_request_parts(method: Method, uri: Uri) -> Parts {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let (parts, _) = request.into_parts();
    parts
}

fn bearer_parts(token: &str) -> Parts {
    let mut parts = get_request_parts(Method::GET, "/actors".parse().unwrap());
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    parts
}

// --- Extractor Tests ---

#[tokio::test]
async fn test_auth_success_with_valid_jwt() {
    let claims = claims_with(Some(vec!["get:actors", "post:actors"]), 3600);
    let token = create_token(&claims);
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = bearer_parts(&token);
    let extracted = AuthClaims::from_request_parts(&mut parts, &app_state).await;

    assert!(extracted.is_ok());
    let AuthClaims(decoded) = extracted.unwrap();
    assert_eq!(decoded.sub, "auth0|integration-tester");
    assert_eq!(
        decoded.permissions,
        Some(vec!["get:actors".to_string(), "post:actors".to_string()])
    );
}

#[tokio::test]
async fn test_auth_failure_with_missing_header() {
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/actors".parse().unwrap());
    let extracted = AuthClaims::from_request_parts(&mut parts, &app_state).await;

    assert!(extracted.is_err());
    assert_eq!(extracted.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_failure_without_bearer_prefix() {
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/actors".parse().unwrap());
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_static("Basic dXNlcjpwYXNz"),
    );
    let extracted = AuthClaims::from_request_parts(&mut parts, &app_state).await;

    assert!(extracted.is_err());
    assert_eq!(extracted.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_failure_with_garbage_token() {
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = bearer_parts("not-a-jwt-at-all");
    let extracted = AuthClaims::from_request_parts(&mut parts, &app_state).await;

    assert!(extracted.is_err());
    assert_eq!(extracted.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_failure_with_expired_jwt() {
    // Expired well beyond the decoder's default leeway.
    let claims = claims_with(Some(vec!["get:actors"]), -600);
    let token = create_token(&claims);
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = bearer_parts(&token);
    let extracted = AuthClaims::from_request_parts(&mut parts, &app_state).await;

    assert!(extracted.is_err());
    assert_eq!(extracted.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_failure_with_wrong_secret() {
    let claims = claims_with(Some(vec!["get:actors"]), 3600);
    let token = create_token(&claims);
    // The verifier holds a different secret than the one the token was signed with.
    let app_state = create_app_state("a-completely-different-secret");

    let mut parts = bearer_parts(&token);
    let extracted = AuthClaims::from_request_parts(&mut parts, &app_state).await;

    assert!(extracted.is_err());
    assert_eq!(extracted.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_failure_with_unexpected_algorithm() {
    // Signed with HS384; the verifier only accepts HS256.
    let claims = claims_with(Some(vec!["get:actors"]), 3600);
    let key = EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes());
    let token = encode(&Header::new(Algorithm::HS384), &claims, &key).unwrap();
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = bearer_parts(&token);
    let extracted = AuthClaims::from_request_parts(&mut parts, &app_state).await;

    assert!(extracted.is_err());
    assert_eq!(extracted.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}

// --- Authorization Gate Tests ---

#[test]
fn test_require_granted_permission() {
    let claims = claims_with(Some(vec!["post:actors", "delete:actors"]), 3600);
    assert!(claims.require("post:actors").is_ok());
    assert!(claims.require("delete:actors").is_ok());
}

#[test]
fn test_require_missing_permission_is_forbidden() {
    let claims = claims_with(Some(vec!["get:actors"]), 3600);
    let err = claims.require("delete:actors").unwrap_err();
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
}

#[test]
fn test_require_without_permissions_claim_is_unauthorized() {
    // A token with no permissions claim at all carries no grants: 401, not 403.
    let claims = claims_with(None, 3600);
    let err = claims.require("get:actors").unwrap_err();
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_require_with_empty_permissions_is_forbidden() {
    let claims = claims_with(Some(vec![]), 3600);
    let err = claims.require("get:actors").unwrap_err();
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
}
