//! Provider liveness probe.
//!
//! An unauthenticated, bodiless POST to the provider endpoint. A live
//! provider refuses it with 401; anything else, including a timeout, counts
//! as unreachable.

use crate::error::EmailResult;
use reqwest::{Client, StatusCode, redirect};
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound on a single probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Clone, Debug)]
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new() -> EmailResult<Self> {
        Self::with_timeout(PROBE_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> EmailResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self { client })
    }

    /// Returns true only when `url` answers 401 Unauthorized.
    pub async fn probe(&self, url: &str) -> bool {
        match self.client.post(url).send().await {
            Ok(response) => {
                let reachable = response.status() == StatusCode::UNAUTHORIZED;
                if reachable {
                    debug!(url, "Provider probe succeeded");
                } else {
                    warn!(
                        url,
                        status = response.status().as_u16(),
                        "Provider probe got unexpected status"
                    );
                }
                reachable
            }
            Err(e) => {
                warn!(url, error = %e, "Provider probe failed");
                false
            }
        }
    }
}
