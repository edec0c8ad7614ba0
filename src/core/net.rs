// src/core/net.rs
//
// Blocking HTTP GET. One request at a time, default client timeouts,
// no retries: a failed fetch is final for that identifier.

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// Anything that can turn a URL into a document body.
/// The builder only talks to this trait so tests can feed captured pages.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let resp = self.agent.get(url).call().map_err(|e| Error::Http {
            url: s!(url),
            source: Box::new(e),
        })?;
        resp.into_string().map_err(|e| Error::io(url, e))
    }
}
