//! HTTP client for the users endpoints.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{User, UserId, UserPage};

/// The three backend operations the admin screen needs.
///
/// The UI state container is generic over this trait so tests can script
/// responses without a server.
pub trait UsersApi {
    fn list_users(&self) -> impl std::future::Future<Output = Result<Vec<User>, ApiError>>;
    fn update_user(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<User, ApiError>>;
    fn delete_user(&self, id: UserId) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// [`UsersApi`] over HTTP via `reqwest`.
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: Client,
    config: ApiConfig,
}

impl UsersClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Client configured from the environment (see [`ApiConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn user_url(&self, id: UserId) -> String {
        self.config.endpoint(&format!("/api/users/{id}"))
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

impl UsersApi for UsersClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.config.endpoint("/api/users");
        tracing::debug!("GET {}", url);
        let response = ensure_success(self.http.get(&url).send().await?)?;
        let page: UserPage = decode(response).await?;
        Ok(page.data)
    }

    async fn update_user(&self, user: &User) -> Result<User, ApiError> {
        let url = self.user_url(user.id);
        tracing::debug!("PUT {}", url);
        let response = self.http.put(&url).json(user).send().await?;
        decode(ensure_success(response)?).await
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        let url = self.user_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self
            .http
            .delete(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    fn user(id: UserId, email: &str) -> User {
        User {
            id,
            email: email.to_string(),
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            avatar: format!("https://example.test/{id}.jpg"),
        }
    }

    /// Fake backend: lists users 1 and 2, echoes updates with a server-side
    /// avatar, deletes only id 1.
    async fn spawn_backend() -> String {
        let app = Router::new()
            .route(
                "/api/users",
                get(|| async {
                    Json(json!({
                        "page": 1,
                        "per_page": 6,
                        "data": [user(1, "one@example.test"), user(2, "two@example.test")],
                    }))
                }),
            )
            .route(
                "/api/users/{id}",
                put(
                    |Path(id): Path<UserId>, headers: HeaderMap, Json(mut body): Json<Value>| async move {
                        let content_type = headers
                            .get("content-type")
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default()
                            .to_string();
                        if id == 404 || content_type != "application/json" {
                            return Err(StatusCode::NOT_FOUND);
                        }
                        body["avatar"] = json!("https://example.test/canonical.jpg");
                        Ok(Json(body))
                    },
                )
                .delete(|Path(id): Path<UserId>| async move {
                    if id == 1 {
                        StatusCode::NO_CONTENT
                    } else {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                }),
            );
        serve(app).await
    }

    /// Misbehaving backend. Under `/down` every call is a 500; under
    /// `/garbled` every call succeeds with a body that is not JSON.
    async fn spawn_broken_backend() -> String {
        let app = Router::new()
            .route("/down/api/users", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/garbled/api/users", get(|| async { "not json" }))
            .route("/garbled/api/users/{id}", put(|| async { "not json" }));
        serve(app).await
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_list_users_keeps_server_order() {
        let base = spawn_backend().await;
        let client = UsersClient::new(ApiConfig::new(base));

        let users = client.list_users().await.unwrap();
        let ids: Vec<UserId> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(users[1].email, "two@example.test");
    }

    #[tokio::test]
    async fn test_update_returns_server_representation() {
        let base = spawn_backend().await;
        let client = UsersClient::new(ApiConfig::new(base));

        let submitted = user(2, "changed@example.test");
        let returned = client.update_user(&submitted).await.unwrap();
        assert_eq!(returned.email, "changed@example.test");
        assert_eq!(returned.avatar, "https://example.test/canonical.jpg");
    }

    #[tokio::test]
    async fn test_update_non_success_is_status_error() {
        let base = spawn_backend().await;
        let client = UsersClient::new(ApiConfig::new(base));

        let err = client.update_user(&user(404, "x@example.test")).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_delete_success_and_failure() {
        let base = spawn_backend().await;
        let client = UsersClient::new(ApiConfig::new(base));

        assert!(client.delete_user(1).await.is_ok());
        let err = client.delete_user(2).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_list_non_success_is_status_error() {
        let base = spawn_broken_backend().await;
        let client = UsersClient::new(ApiConfig::new(format!("{base}/down")));

        let err = client.list_users().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_decode_error() {
        let base = spawn_broken_backend().await;
        let client = UsersClient::new(ApiConfig::new(format!("{base}/garbled")));

        let err = client.list_users().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let err = client.update_user(&user(2, "x@example.test")).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_missing_base_url_fails_as_transport_error() {
        let client = UsersClient::new(ApiConfig::unset());
        let err = client.list_users().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Bind then drop so the port is closed
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = UsersClient::new(ApiConfig::new(format!("http://{addr}")));
        let err = client.delete_user(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
