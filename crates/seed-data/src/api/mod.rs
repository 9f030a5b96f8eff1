//! HTTP side of seeding: procedure URLs, the transport seam and tRPC envelopes.
//!
//! The catalog API is a tRPC router mounted under `/api/trpc`; every
//! mutation is a POST to `<base>/<router>.<procedure>` with a JSON body.

use std::future::Future;

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::SeedError;

/// Default API base used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/trpc";

/// tRPC procedures the seeder calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    Signup,
    Signin,
    CreateBrand,
    CreateProduct,
}

impl Procedure {
    pub fn path(&self) -> &'static str {
        match self {
            Procedure::Signup => "auth.signup",
            Procedure::Signin => "auth.signin",
            Procedure::CreateBrand => "brand.createBrand",
            Procedure::CreateProduct => "product.createProduct",
        }
    }

    /// Full endpoint URL under the given API base.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body as a tRPC result envelope and returns its `data`.
    pub fn trpc_data<T: DeserializeOwned>(&self) -> Result<T, SeedError> {
        let envelope: TrpcEnvelope<T> = serde_json::from_str(&self.body).map_err(|_| {
            SeedError::UnexpectedResponse {
                status: self.status,
                body: self.body.clone(),
            }
        })?;
        Ok(envelope.result.data)
    }

    /// Message of a tRPC error body, if the body is one.
    pub fn trpc_error_message(&self) -> Option<String> {
        serde_json::from_str::<TrpcErrorEnvelope>(&self.body)
            .ok()
            .map(|envelope| envelope.error.message)
    }
}

#[derive(Debug, Deserialize)]
struct TrpcEnvelope<T> {
    result: TrpcResult<T>,
}

#[derive(Debug, Deserialize)]
struct TrpcResult<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct TrpcErrorEnvelope {
    error: TrpcErrorBody,
}

#[derive(Debug, Deserialize)]
struct TrpcErrorBody {
    message: String,
}

/// `data` of a successful `auth.signin` call.
#[derive(Debug, Clone, Deserialize)]
pub struct SigninData {
    pub token: String,
}

/// Sends one JSON POST and waits for the whole response.
///
/// A returned error means the request never produced a response. HTTP
/// error statuses are regular [`Response`]s.
pub trait Transport {
    fn post_json(
        &self,
        url: &str,
        body: &Value,
        bearer: Option<&str>,
    ) -> impl Future<Output = Result<Response, SeedError>> + Send;
}

/// [`Transport`] backed by a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        bearer: Option<&str>,
    ) -> Result<Response, SeedError> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        debug!("POST {} (auth: {})", url, bearer.is_some());
        let resp = request.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(Response { status, body })
    }
}
