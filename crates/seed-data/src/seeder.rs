//! The seeding loop.
//!
//! Requests go out strictly one after another. Every completed request
//! writes one `"<status> <record>"` line to the output sink before the
//! next one starts, so the output is a faithful log of what the server
//! has already accepted or rejected.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::api::{Procedure, SigninData, Transport};
use crate::credentials::Credentials;
use crate::error::SeedError;
use crate::records::SigninRecord;

/// Status returned for one seeded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome<'r, R> {
    pub status: u16,
    pub record: &'r R,
}

impl<R> SeedOutcome<'_, R> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts records to the catalog API through a [`Transport`].
pub struct Seeder<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> Seeder<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Endpoint URL of a procedure under this seeder's base URL.
    pub fn endpoint(&self, procedure: Procedure) -> String {
        procedure.url(&self.base_url)
    }

    /// POSTs every record to `endpoint` in order.
    ///
    /// `header_for` yields the bearer token for a record, or `None` for an
    /// unauthenticated request. An error from it, or a transport failure,
    /// stops the run; lines for earlier records have already been written.
    /// Error statuses are reported and seeding continues.
    pub async fn seed<'r, R, F, W>(
        &self,
        endpoint: &str,
        records: &'r [R],
        mut header_for: F,
        out: &mut W,
    ) -> Result<Vec<SeedOutcome<'r, R>>, SeedError>
    where
        R: Serialize,
        F: FnMut(&R) -> Result<Option<String>, SeedError>,
        W: Write,
    {
        info!("Seeding {} records to {}", records.len(), endpoint);
        let mut outcomes = Vec::with_capacity(records.len());

        for record in records {
            let rendered = serde_json::to_string(record)?;
            let body = serde_json::to_value(record)?;
            let bearer = header_for(record)?;

            let resp = self
                .transport
                .post_json(endpoint, &body, bearer.as_deref())
                .await?;

            if !resp.is_success() {
                match resp.trpc_error_message() {
                    Some(message) => warn!("{} rejected {}: {}", endpoint, rendered, message),
                    None => warn!("{} returned {} for {}", endpoint, resp.status, rendered),
                }
            }

            writeln!(out, "{} {}", resp.status, rendered)?;
            outcomes.push(SeedOutcome {
                status: resp.status,
                record,
            });
        }

        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        info!("Seeded {}/{} records to {}", succeeded, records.len(), endpoint);
        Ok(outcomes)
    }

    /// Seeds records that need no authorization.
    pub async fn seed_public<'r, R, W>(
        &self,
        endpoint: &str,
        records: &'r [R],
        out: &mut W,
    ) -> Result<Vec<SeedOutcome<'r, R>>, SeedError>
    where
        R: Serialize,
        W: Write,
    {
        self.seed(endpoint, records, |_| Ok(None), out).await
    }

    /// Seeds records that all share one bearer token.
    pub async fn seed_with_token<'r, R, W>(
        &self,
        endpoint: &str,
        records: &'r [R],
        token: &str,
        out: &mut W,
    ) -> Result<Vec<SeedOutcome<'r, R>>, SeedError>
    where
        R: Serialize,
        W: Write,
    {
        self.seed(endpoint, records, |_| Ok(Some(token.to_string())), out)
            .await
    }

    /// Signs in each record and collects the returned tokens by email.
    ///
    /// Writes `"<status> <token>"` per record. A response without a token
    /// ends the run.
    pub async fn collect_tokens<W: Write>(
        &self,
        endpoint: &str,
        signins: &[SigninRecord],
        out: &mut W,
    ) -> Result<Credentials, SeedError> {
        info!("Collecting tokens for {} users from {}", signins.len(), endpoint);
        let mut credentials = Credentials::new();

        for signin in signins {
            let body = serde_json::to_value(signin)?;
            let resp = self.transport.post_json(endpoint, &body, None).await?;

            let data = resp.trpc_data::<SigninData>().inspect_err(|_| {
                warn!(
                    "Signin for {} failed: {}",
                    signin.email,
                    resp.trpc_error_message()
                        .unwrap_or_else(|| format!("status {}", resp.status))
                );
            })?;

            debug!("Signed in {}", signin.email);
            writeln!(out, "{} {}", resp.status, data.token)?;
            credentials.insert(signin.email.clone(), data.token);
        }

        Ok(credentials)
    }
}
