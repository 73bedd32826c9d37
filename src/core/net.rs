// src/core/net.rs

// Blocking HTTP GET. One request per run, so no client reuse and no timeout.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// The parts of an HTTP response the scraper cares about. Also the on-disk
/// cache shape (see `store`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Fail unless the server answered 200.
    pub fn ensure_ok(&self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(Error::Status { url: self.url.clone(), status: self.status })
        }
    }
}

/// GET `url` and read the whole body. Non-200 statuses are returned, not
/// raised; the caller decides (see `Response::ensure_ok`).
pub fn http_get(url: &str) -> Result<Response> {
    let http_err = |source| Error::Http { url: s!(url), source };

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None::<Duration>)
        .build()
        .map_err(http_err)?;

    info!(url, "GET");
    let resp = client.get(url).send().map_err(http_err)?;
    let status = resp.status().as_u16();
    let body = resp.text().map_err(http_err)?;
    debug!(url, status, bytes = body.len(), "response read");

    Ok(Response { url: s!(url), status, body })
}
