use std::env;

use url::Url;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const BASE_URL_VAR: &str = "STUDY_API_BASE_URL";

/// Where the study API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Validate `base_url` as an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the URL does not parse or uses
    /// another scheme.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };
        let parsed = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
        }
        Ok(Self { base_url: parsed })
    }

    /// Read `STUDY_API_BASE_URL`, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the variable holds an invalid URL.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`ApiConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the variable holds an invalid URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        match lookup(BASE_URL_VAR) {
            Some(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `path` under the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(config.endpoint("/profile"), "http://localhost:8000/profile");

        let nested = ApiConfig::new("https://example.com/api").unwrap();
        assert_eq!(nested.endpoint("plan"), "https://example.com/api/plan");
    }

    #[test]
    fn rejects_relative_and_non_http_urls() {
        assert!(matches!(
            ApiConfig::new("localhost"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ApiConfig::new("ftp://example.com"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn lookup_falls_back_to_default_when_unset_or_blank() {
        let unset = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(unset.base_url().as_str(), "http://127.0.0.1:8000/");

        let blank = ApiConfig::from_lookup(|_| Some("  ".into())).unwrap();
        assert_eq!(blank, unset);

        let set = ApiConfig::from_lookup(|name| {
            (name == BASE_URL_VAR).then(|| "https://study.example".to_owned())
        })
        .unwrap();
        assert_eq!(set.base_url().as_str(), "https://study.example/");

        assert!(ApiConfig::from_lookup(|_| Some("nope".into())).is_err());
    }
}
