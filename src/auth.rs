use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, header, request::Parts},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header, errors::ErrorKind};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Claims
///
/// The decoded payload of a verified bearer token. Tokens are signed by the
/// external identity provider; this service only validates them and reads the
/// `permissions` list used for per-route authorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): the opaque identity of the caller.
    pub sub: String,
    /// Expiration time (exp): timestamp after which the token must be rejected.
    pub exp: usize,
    /// Issued at (iat): timestamp when the token was minted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
    /// The permission strings granted to the caller (e.g. "post:actors").
    /// `None` means the provider issued a token without any permissions claim,
    /// which is treated as an unauthenticatable token rather than an empty grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Claims {
    /// require
    ///
    /// The authorization gate: checks that `permission` is present in the claim's
    /// permission list. Handlers call this before touching the repository.
    ///
    /// - no permissions claim at all -> 401 (the token carries no grants)
    /// - claim present but permission absent -> 403
    pub fn require(&self, permission: &str) -> Result<(), AuthError> {
        match &self.permissions {
            None => Err(AuthError::MissingPermissions),
            Some(granted) if granted.iter().any(|p| p == permission) => Ok(()),
            Some(_) => Err(AuthError::Forbidden(permission.to_string())),
        }
    }
}

/// AuthError
///
/// Every way token verification or the permission check can fail. All variants
/// map to 401 except `Forbidden`, which is a valid token lacking the required
/// permission (403).
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("authorization header is expected")]
    MissingHeader,
    #[error("authorization header must be a bearer token")]
    MalformedHeader,
    #[error("unable to parse authentication token")]
    Malformed,
    #[error("token is signed with an unexpected algorithm")]
    Algorithm,
    #[error("no matching signing key found")]
    UnknownKey,
    #[error("token has expired")]
    Expired,
    #[error("token signature verification failed")]
    Invalid,
    #[error("permissions claim is missing from the token")]
    MissingPermissions,
    #[error("permission '{0}' is not granted")]
    Forbidden(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Forbidden(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Jwks
///
/// The identity provider's published key set, fetched once at startup from the
/// `.well-known/jwks.json` endpoint. Only the RSA components needed for RS256
/// verification are read; other key types in the document are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    pub kty: String,
    pub kid: Option<String>,
    /// RSA modulus, base64url. Absent for non-RSA keys.
    pub n: Option<String>,
    /// RSA public exponent, base64url.
    pub e: Option<String>,
}

impl Jwks {
    /// Fetches the key set from the identity provider. Called once at startup;
    /// a provider outage at boot is a fatal configuration problem, not something
    /// to limp along without.
    pub async fn fetch(url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::new();
        client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Jwks>()
            .await
    }

    fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys
            .iter()
            .find(|key| key.kty == "RSA" && key.kid.as_deref() == Some(kid))
    }
}

/// The key material the verifier validates against. Selected once at startup
/// based on the runtime environment.
enum KeyMaterial {
    /// Local development: HS256 with the shared secret from configuration.
    Secret(DecodingKey),
    /// Production: RS256 against the provider's key set, selected by `kid`.
    Jwks {
        jwks: Jwks,
        issuer: String,
        audience: String,
    },
}

/// TokenVerifier
///
/// Stateless per call: given a raw bearer token string, either returns the
/// decoded [`Claims`] or the [`AuthError`] describing why the token was
/// rejected. Holds no mutable state, so a single instance is shared across all
/// requests via `Arc`.
pub struct TokenVerifier {
    keys: KeyMaterial,
}

/// The concrete type used to share the verifier across the application state.
pub type VerifierState = Arc<TokenVerifier>;

impl TokenVerifier {
    /// Builds a verifier for the local environment, validating HS256 signatures
    /// against the shared secret.
    pub fn from_secret(secret: &str) -> Self {
        Self {
            keys: KeyMaterial::Secret(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    /// Builds a verifier for production, validating RS256 signatures against the
    /// provider's key set. `issuer` and `audience` are enforced on every token.
    pub fn from_jwks(jwks: Jwks, issuer: String, audience: String) -> Self {
        Self {
            keys: KeyMaterial::Jwks {
                jwks,
                issuer,
                audience,
            },
        }
    }

    /// verify
    ///
    /// Validates signature, algorithm, expiry and (in production) issuer and
    /// audience, and returns the decoded claim set.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        // The header must parse before anything else; it names the algorithm
        // and, for JWKS verification, the signing key id.
        let token_header = decode_header(token).map_err(|_| AuthError::Malformed)?;

        match &self.keys {
            KeyMaterial::Secret(key) => {
                if token_header.alg != Algorithm::HS256 {
                    return Err(AuthError::Algorithm);
                }
                let validation = Validation::new(Algorithm::HS256);
                decode::<Claims>(token, key, &validation)
                    .map(|data| data.claims)
                    .map_err(map_decode_error)
            }
            KeyMaterial::Jwks {
                jwks,
                issuer,
                audience,
            } => {
                if token_header.alg != Algorithm::RS256 {
                    return Err(AuthError::Algorithm);
                }
                let kid = token_header.kid.ok_or(AuthError::UnknownKey)?;
                let jwk = jwks.find(&kid).ok_or(AuthError::UnknownKey)?;
                let (n, e) = match (&jwk.n, &jwk.e) {
                    (Some(n), Some(e)) => (n, e),
                    _ => return Err(AuthError::UnknownKey),
                };
                let key =
                    DecodingKey::from_rsa_components(n, e).map_err(|_| AuthError::UnknownKey)?;

                let mut validation = Validation::new(Algorithm::RS256);
                validation.set_issuer(&[issuer]);
                validation.set_audience(&[audience]);
                decode::<Claims>(token, &key, &validation)
                    .map(|data| data.claims)
                    .map_err(map_decode_error)
            }
        }
    }
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::InvalidToken => AuthError::Malformed,
        ErrorKind::InvalidAlgorithm => AuthError::Algorithm,
        // Bad signature, wrong issuer/audience, missing required claim, etc.
        _ => AuthError::Invalid,
    }
}

/// AuthClaims Extractor
///
/// Implements Axum's `FromRequestParts`, making the verified claim set usable as
/// a function argument in any protected handler. Extraction performs the whole
/// token pipeline: header presence, bearer prefix, then [`TokenVerifier::verify`].
///
/// Rejection: an [`ApiError`] carrying the 401/403 JSON envelope. The handler
/// body is never entered when extraction fails.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
    // Allows the extractor to pull the shared verifier from the app state.
    VerifierState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verifier = VerifierState::from_ref(state);

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingHeader)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MalformedHeader)?;

        let claims = verifier.verify(token)?;

        Ok(AuthClaims(claims))
    }
}
