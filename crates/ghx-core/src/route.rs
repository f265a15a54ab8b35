//! Route table for the two screens.
//!
//! `/` is the dashboard (exact match). `/repository/{owner}/{name}` is the
//! detail screen; everything after the prefix is the repository's full name.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const REPOSITORY_PREFIX: &str = "/repository/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Repository { full_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches {path:?}")]
pub struct RouteError {
    pub path: String,
}

impl Route {
    pub fn repository(full_name: impl Into<String>) -> Self {
        Route::Repository {
            full_name: full_name.into(),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Repository { full_name } => format!("{REPOSITORY_PREFIX}{full_name}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        if path == "/" {
            return Ok(Route::Dashboard);
        }
        match path.strip_prefix(REPOSITORY_PREFIX) {
            Some(full_name) if !full_name.is_empty() => Ok(Route::repository(full_name)),
            _ => Err(RouteError {
                path: path.to_string(),
            }),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
