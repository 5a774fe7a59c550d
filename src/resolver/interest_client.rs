// ==========================================
// Course Planner - interest resolver client
// ==========================================
//
// Turns a student's free-text interests into candidate course codes by
// querying the interest-matching service. A primary and a backup endpoint
// are raced concurrently and the first well-formed response wins.

use async_trait::async_trait;
use serde::Deserialize;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

use crate::config::ResolverConfig;
use crate::domain::CourseCode;
use crate::resolver::error::{ResolverError, ResolverResult};

/// User agent reported to the interest-matching service.
const USER_AGENT: &str = concat!("course-planner/", env!("CARGO_PKG_VERSION"));

// ==========================================
// Source abstraction
// ==========================================

/// Source of interest-matched course candidates.
///
/// Implementations must be total: resolution that cannot produce
/// candidates returns an empty list rather than an error, so planning
/// can always proceed.
#[async_trait]
pub trait InterestSource: Send + Sync {
    /// Resolve free-text interests into an ordered list of course codes.
    async fn resolve_interests(&self, interests: &str) -> Vec<CourseCode>;
}

// ==========================================
// Wire format
// ==========================================

/// One record of the service's JSON array response. Anything other than
/// an array (for example an informational object) counts as no data.
#[derive(Debug, Clone, Deserialize)]
struct InterestMatch {
    #[serde(rename = "Course Code")]
    course_code: String,
}

/// Parses a response body into candidate codes.
fn parse_candidates(body: &str) -> ResolverResult<Vec<CourseCode>> {
    let records: Vec<InterestMatch> = serde_json::from_str(body)
        .map_err(|e| ResolverError::MalformedResponse(e.to_string()))?;
    Ok(records
        .into_iter()
        .map(|record| CourseCode::from(record.course_code))
        .collect())
}

// ==========================================
// HTTP resolver
// ==========================================

/// Interest resolver backed by the course-matching HTTP service.
pub struct HttpInterestResolver {
    client: reqwest::Client,
    config: ResolverConfig,
}

impl HttpInterestResolver {
    /// Creates a resolver with a per-request timeout taken from the config.
    pub fn new(config: ResolverConfig) -> ResolverResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ResolverError::ClientBuild(e.to_string()))?;

        Ok(HttpInterestResolver { client, config })
    }

    /// Fetches candidates from a single endpoint.
    async fn fetch(
        client: reqwest::Client,
        url: String,
        interests: String,
    ) -> ResolverResult<Vec<CourseCode>> {
        debug!(%url, "querying interest-matching service");

        let response = client
            .get(&url)
            .query(&[("interests", interests.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ResolverError::Timeout(url.clone())
                } else {
                    ResolverError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolverError::ServiceStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResolverError::Network(e.to_string()))?;

        parse_candidates(&body)
    }
}

#[async_trait]
impl InterestSource for HttpInterestResolver {
    #[instrument(skip(self, interests))]
    async fn resolve_interests(&self, interests: &str) -> Vec<CourseCode> {
        if interests.trim().is_empty() {
            debug!("no interests provided, skipping resolution");
            return Vec::new();
        }

        let mut tasks = JoinSet::new();
        tasks.spawn(Self::fetch(
            self.client.clone(),
            self.config.primary_url.clone(),
            interests.to_string(),
        ));
        tasks.spawn(Self::fetch(
            self.client.clone(),
            self.config.backup_url.clone(),
            interests.to_string(),
        ));

        let mut failures = 0usize;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(candidates)) => {
                    info!(candidates = candidates.len(), "interest resolution succeeded");
                    // The losing request is abandoned once a winner lands.
                    tasks.abort_all();
                    return candidates;
                }
                Ok(Err(error)) => {
                    failures += 1;
                    warn!(%error, "interest endpoint failed");
                }
                Err(join_error) => {
                    failures += 1;
                    warn!(%join_error, "interest request task failed to join");
                }
            }
        }

        warn!(failures, "all interest endpoints failed, continuing without candidates");
        Vec::new()
    }
}

// ==========================================
// Tests
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn unroutable_config() -> ResolverConfig {
        ResolverConfig {
            primary_url: "http://127.0.0.1:9/recommend-courses/".to_string(),
            backup_url: "http://127.0.0.1:1/recommend-courses/".to_string(),
            timeout: Duration::from_millis(300),
        }
    }

    #[test]
    fn test_new_builds_client() {
        let resolver = HttpInterestResolver::new(ResolverConfig::default());
        assert!(resolver.is_ok());
    }

    #[test]
    fn test_parse_candidates_array() {
        let body = r#"[
            {"Course Code": "AVI1O", "Course Name": "Visual Arts"},
            {"Course Code": "TAS2O", "Course Name": "Technology and Society"}
        ]"#;

        let codes = parse_candidates(body).unwrap();
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[0].as_str(), "AVI1O");
        assert_eq!(codes[1].as_str(), "TAS2O");
    }

    #[test]
    fn test_parse_candidates_empty_array() {
        let codes = parse_candidates("[]").unwrap();
        assert!(codes.is_empty());
    }

    #[test]
    fn test_parse_candidates_rejects_object() {
        let body = r#"{"message": "no courses matched"}"#;
        let result = parse_candidates(body);
        assert!(matches!(result, Err(ResolverError::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_candidates_rejects_invalid_json() {
        let result = parse_candidates("not json at all");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_resolve_returns_empty_when_all_endpoints_fail() {
        let resolver = HttpInterestResolver::new(unroutable_config()).unwrap();
        let codes = resolver.resolve_interests("music and painting").await;
        assert!(codes.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_skips_blank_interests() {
        let resolver = HttpInterestResolver::new(unroutable_config()).unwrap();
        let codes = resolver.resolve_interests("   ").await;
        assert!(codes.is_empty());
    }
}
