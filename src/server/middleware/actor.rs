use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying the authenticated subject, set by the upstream gateway.
pub const AUTH_SUBJECT_HEADER: &str = "x-auth-subject";

/// Actor recorded when no subject header is present.
pub const ANONYMOUS_ACTOR: &str = "anonymous";

/// The caller on whose behalf a request runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(pub String);

impl Actor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let subject = parts
            .headers
            .get(AUTH_SUBJECT_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(ANONYMOUS_ACTOR);

        Ok(Actor(subject.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(subject: Option<&str>) -> Actor {
        let mut builder = Request::builder().uri("/");
        if let Some(subject) = subject {
            builder = builder.header(AUTH_SUBJECT_HEADER, subject);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();

        Actor::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn reads_subject_header() {
        assert_eq!(extract(Some("svc-gateway")).await.as_str(), "svc-gateway");
    }

    #[tokio::test]
    async fn defaults_to_anonymous() {
        assert_eq!(extract(None).await.as_str(), ANONYMOUS_ACTOR);
        assert_eq!(extract(Some("  ")).await.as_str(), ANONYMOUS_ACTOR);
    }
}
