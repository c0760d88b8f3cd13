use std::fmt;

use gloo_net::http::{Request, RequestBuilder};
use urlencoding::encode;

use crate::model::{Reply, Roster};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network failure, or a body that was not the JSON we expected.
    Transport(String),
    /// The server answered with a non-2xx status.
    Rejected {
        status: u16,
        detail: Option<String>,
    },
}

impl ApiError {
    fn transport(e: impl fmt::Display) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "transport error: {e}"),
            ApiError::Rejected {
                status,
                detail: Some(d),
            } => write!(f, "HTTP {status}: {d}"),
            ApiError::Rejected {
                status,
                detail: None,
            } => write!(f, "HTTP {status}"),
        }
    }
}

/// The three roster endpoints. Implemented over gloo-net in the browser and
/// by in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait RosterApi {
    async fn fetch_roster(&self) -> Result<Roster, ApiError>;

    /// Returns the server's `message`, if it sent one.
    async fn signup(&self, activity: &str, email: &str) -> Result<Option<String>, ApiError>;

    async fn unregister(&self, activity: &str, email: &str) -> Result<Option<String>, ApiError>;
}

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base.trim_end_matches('/'))
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/{}/signup?email={}",
        activities_url(base),
        encode(activity),
        encode(email)
    )
}

pub fn participants_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/{}/participants?email={}",
        activities_url(base),
        encode(activity),
        encode(email)
    )
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

pub fn interpret_roster(status: u16, body: &str) -> Result<Roster, ApiError> {
    if !is_success(status) {
        let detail = serde_json::from_str::<Reply>(body)
            .ok()
            .and_then(|r| r.detail());
        return Err(ApiError::Rejected { status, detail });
    }
    serde_json::from_str(body).map_err(ApiError::transport)
}

/// Both mutation endpoints answer with `{message}` or `{detail}`; anything
/// that is not JSON is a transport failure regardless of status.
pub fn interpret_reply(status: u16, body: &str) -> Result<Option<String>, ApiError> {
    let reply: Reply = serde_json::from_str(body).map_err(ApiError::transport)?;
    if is_success(status) {
        Ok(reply.message())
    } else {
        Err(ApiError::Rejected {
            status,
            detail: reply.detail(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRosterApi {
    base: String,
}

impl HttpRosterApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn read(request: RequestBuilder) -> Result<(u16, String), ApiError> {
        let resp = request.send().await.map_err(ApiError::transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(ApiError::transport)?;
        Ok((status, body))
    }
}

impl RosterApi for HttpRosterApi {
    async fn fetch_roster(&self) -> Result<Roster, ApiError> {
        let (status, body) = Self::read(Request::get(&activities_url(&self.base))).await?;
        interpret_roster(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Option<String>, ApiError> {
        let url = signup_url(&self.base, activity, email);
        let (status, body) = Self::read(Request::post(&url)).await?;
        interpret_reply(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Option<String>, ApiError> {
        let url = participants_url(&self.base, activity, email);
        let (status, body) = Self::read(Request::delete(&url)).await?;
        interpret_reply(status, &body)
    }
}
