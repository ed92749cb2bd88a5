use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::claims::Claims;
use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;

pub const TOKEN_HEADER: &str = "x-auth-token";

/// Base guard: a missing token rejects with 401, a present but invalid one
/// with 400. The asymmetry is deliberate and covered by tests.
pub struct AuthUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid token");
            ApiError::InvalidToken
        })?;

        Ok(AuthUser(claims))
    }
}

/// Admin guard: runs the base guard first, then requires the admin claim.
pub struct AdminUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;
        if !claims.is_admin {
            warn!(user_id = %claims.sub, "admin claim missing");
            return Err(ApiError::Forbidden);
        }
        Ok(AdminUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo::User;
    use crate::state::AppState;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use http_body_util::BodyExt;
    use time::OffsetDateTime;
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn guarded(AuthUser(_): AuthUser) -> &'static str {
        "ok"
    }

    async fn admin_only(AdminUser(_): AdminUser) -> &'static str {
        "ok"
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/guarded", get(guarded))
            .route("/admin", get(admin_only))
            .with_state(state)
    }

    fn token_for(state: &AppState, is_admin: bool) -> String {
        let user = User {
            id: Uuid::new_v4(),
            name: "Vu Nam".into(),
            email: "vu@example.com".into(),
            password_hash: "irrelevant".into(),
            is_admin,
            created_at: OffsetDateTime::now_utc(),
        };
        JwtKeys::from_ref(state).sign(&user).expect("sign")
    }

    fn request(path: &str, token: Option<&str>) -> Request<axum::body::Body> {
        let mut builder = Request::builder().uri(path).method("GET");
        if let Some(t) = token {
            builder = builder.header(TOKEN_HEADER, t);
        }
        builder.body(axum::body::Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let resp = app(AppState::fake())
            .oneshot(request("/guarded", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn empty_token_is_unauthorized() {
        let resp = app(AppState::fake())
            .oneshot(request("/guarded", Some("")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_token_is_bad_request() {
        let resp = app(AppState::fake())
            .oneshot(request("/guarded", Some("a")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(text, "Invalid token.");
    }

    #[tokio::test]
    async fn valid_token_passes_base_guard() {
        let state = AppState::fake();
        let token = token_for(&state, false);
        let resp = app(state)
            .oneshot(request("/guarded", Some(&token)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn non_admin_token_is_forbidden_on_admin_route() {
        let state = AppState::fake();
        let token = token_for(&state, false);
        let resp = app(state)
            .oneshot(request("/admin", Some(&token)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn admin_token_passes_admin_guard() {
        let state = AppState::fake();
        let token = token_for(&state, true);
        let resp = app(state)
            .oneshot(request("/admin", Some(&token)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn admin_route_keeps_missing_vs_malformed_asymmetry() {
        let state = AppState::fake();
        let resp = app(state.clone()).oneshot(request("/admin", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let resp = app(state).oneshot(request("/admin", Some("garbage"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
