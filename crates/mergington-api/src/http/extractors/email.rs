//! Student email extractors.
//!
//! Signup takes the email from the `email` query parameter. Clients that
//! post a body instead are served by falling back to a form or JSON body
//! when the query parameter is absent. A repeated `email` key resolves to
//! its last value.
//!
//! Unregister always reads a JSON body `{"email": "..."}` regardless of
//! the declared content type.
//!
//! Neither extractor rejects a missing email: it surfaces as `None` so the
//! service can report it in its own error order.

use axum::body::Bytes;
use axum::extract::{FromRequest, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;

use crate::http::error::AppError;

type Pairs = Vec<(String, String)>;

fn last_email(pairs: Pairs) -> Option<String> {
    pairs
        .into_iter()
        .rev()
        .find_map(|(key, value)| (key == "email").then_some(value))
}

/// Email for `POST /activities/{name}/signup`.
#[derive(Debug)]
pub struct SignupEmail(pub Option<String>);

impl<S> FromRequest<S> for SignupEmail
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Pairs>::try_from_uri(req.uri())
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        let from_query = last_email(pairs);
        if from_query.is_some() {
            return Ok(Self(from_query));
        }

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let email = Form::<Pairs>::from_request(req, state)
                .await
                .ok()
                .and_then(|Form(pairs)| last_email(pairs));
            return Ok(Self(email));
        }

        if content_type.starts_with("application/json") {
            let body = read_body(req, state).await?;
            return Ok(Self(email_from_json(&body)));
        }

        Ok(Self(None))
    }
}

/// Email for `POST /activities/{name}/unregister`.
#[derive(Debug)]
pub struct JsonEmail(pub Option<String>);

impl<S> FromRequest<S> for JsonEmail
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = read_body(req, state).await?;
        Ok(Self(email_from_json(&body)))
    }
}

async fn read_body<S: Send + Sync>(req: Request, state: &S) -> Result<Bytes, AppError> {
    Bytes::from_request(req, state)
        .await
        .map_err(|_| AppError::Validation("Failed to read request body".to_string()))
}

/// Pull a string `email` field out of a JSON object.
///
/// Unparseable bodies, non-objects and non-string values all yield `None`.
fn email_from_json(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value.get("email")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    async fn signup_email(req: Request) -> Option<String> {
        SignupEmail::from_request(req, &()).await.unwrap().0
    }

    #[test]
    fn email_from_json_variants() {
        assert_eq!(
            email_from_json(br#"{"email": "a@mergington.edu"}"#),
            Some("a@mergington.edu".to_string())
        );
        assert_eq!(email_from_json(br#"{"email": ""}"#), Some(String::new()));
        assert_eq!(email_from_json(br#"{"email": 42}"#), None);
        assert_eq!(email_from_json(br#"{"mail": "a@b.edu"}"#), None);
        assert_eq!(email_from_json(b"not json"), None);
        assert_eq!(email_from_json(b""), None);
    }

    #[tokio::test]
    async fn signup_prefers_query_parameter() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/activities/Chess%20Club/signup?email=query%40mergington.edu")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"email": "body@mergington.edu"}"#))
            .unwrap();
        assert_eq!(
            signup_email(req).await.as_deref(),
            Some("query@mergington.edu")
        );
    }

    #[tokio::test]
    async fn signup_repeated_query_key_takes_last_value() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/activities/Chess%20Club/signup?email=a%40b.edu&email=c%40d.edu")
            .body(Body::empty())
            .unwrap();
        assert_eq!(signup_email(req).await.as_deref(), Some("c@d.edu"));
    }

    #[tokio::test]
    async fn signup_ignores_unrelated_query_keys() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/activities/Chess%20Club/signup?source=web")
            .body(Body::empty())
            .unwrap();
        assert_eq!(signup_email(req).await, None);
    }

    #[tokio::test]
    async fn signup_falls_back_to_json_body() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/activities/Chess%20Club/signup")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"email": "body@mergington.edu"}"#))
            .unwrap();
        assert_eq!(signup_email(req).await.as_deref(), Some("body@mergington.edu"));
    }

    #[tokio::test]
    async fn signup_falls_back_to_form_body() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/activities/Chess%20Club/signup")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("email=form%40mergington.edu"))
            .unwrap();
        assert_eq!(signup_email(req).await.as_deref(), Some("form@mergington.edu"));
    }

    #[tokio::test]
    async fn signup_without_email_is_none() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/activities/Chess%20Club/signup")
            .body(Body::empty())
            .unwrap();
        assert_eq!(signup_email(req).await, None);
    }

    #[tokio::test]
    async fn unregister_ignores_content_type() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/activities/Chess%20Club/unregister")
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"email": "michael@mergington.edu"}"#))
            .unwrap();
        let JsonEmail(email) = JsonEmail::from_request(req, &()).await.unwrap();
        assert_eq!(email.as_deref(), Some("michael@mergington.edu"));
    }
}
