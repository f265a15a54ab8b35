//! Repository lookup over the GitHub REST API.
//!
//! Uses the curl crate (libcurl) for `GET <base>/repos/{owner}/{name}`.
//! The explorer only sees the [`RepositoryLookup`] trait.

mod error;
mod parse;

pub use error::LookupError;

use std::time::Duration;
use url::Url;

use crate::config::GhxConfig;
use crate::repository::RepositoryRecord;

/// Source of repository records keyed by `owner/name`.
pub trait RepositoryLookup {
    fn fetch(&self, identifier: &str) -> Result<RepositoryRecord, LookupError>;
}

impl<T: RepositoryLookup + ?Sized> RepositoryLookup for &T {
    fn fetch(&self, identifier: &str) -> Result<RepositoryRecord, LookupError> {
        (**self).fetch(identifier)
    }
}

/// Blocking libcurl client for the repository endpoint.
#[derive(Debug, Clone)]
pub struct HttpLookup {
    base_url: Url,
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpLookup {
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let defaults = GhxConfig::default();
        let parsed = Url::parse(base_url).map_err(|_| LookupError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(LookupError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }
        let connect_timeout = defaults.connect_timeout();
        let timeout = defaults.timeout();
        Ok(Self {
            base_url: parsed,
            user_agent: defaults.user_agent,
            connect_timeout,
            timeout,
        })
    }

    pub fn from_config(cfg: &GhxConfig) -> Result<Self, LookupError> {
        Ok(Self::new(&cfg.api_base_url)?
            .with_user_agent(cfg.user_agent.clone())
            .with_timeouts(cfg.connect_timeout(), cfg.timeout()))
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeouts(mut self, connect_timeout: Duration, timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.timeout = timeout;
        self
    }

    /// `<base>/repos/` followed by each `/`-separated part of `identifier`
    /// as its own percent-encoded path segment.
    pub fn endpoint(&self, identifier: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| LookupError::InvalidBaseUrl {
                    url: self.base_url.to_string(),
                })?;
            segments.pop_if_empty().push("repos");
            for part in identifier.split('/') {
                segments.push(part);
            }
        }
        Ok(url)
    }
}

impl RepositoryLookup for HttpLookup {
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    fn fetch(&self, identifier: &str) -> Result<RepositoryRecord, LookupError> {
        let url = self.endpoint(identifier)?;
        tracing::debug!(url = %url, "repository lookup");

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/vnd.github+json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        parse::decode_response(code, &body)
    }
}
