//! Route parameters bound from inbound request paths.

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Path segments captured by the proxy routes.
///
/// Every route binds `owner` and `repo`; download routes also bind `tag` and
/// `name`. Missing segments deserialize as empty strings / `None` and are
/// rejected by [`RouteParams::repo`] and [`RouteParams::asset`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteParams {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub repo: String,
    /// Release id (unused: only tag-based downloads are routed)
    #[serde(default)]
    pub id: Option<String>,
    /// Asset file name
    #[serde(default)]
    pub name: Option<String>,
    /// Release tag
    #[serde(default)]
    pub tag: Option<String>,
}

/// A validated `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

/// A validated tag-based asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub repo: RepoRef,
    pub tag: String,
    pub name: String,
}

impl RouteParams {
    /// Require non-empty `owner` and `repo`.
    pub fn repo(&self) -> Result<RepoRef, GatewayError> {
        Ok(RepoRef {
            owner: required("owner", Some(&self.owner))?,
            repo: required("repo", Some(&self.repo))?,
        })
    }

    /// Require `owner`, `repo`, `tag` and `name`.
    pub fn asset(&self) -> Result<AssetRef, GatewayError> {
        let repo = self.repo()?;
        Ok(AssetRef {
            repo,
            tag: required("tag", self.tag.as_ref())?,
            name: required("name", self.name.as_ref())?,
        })
    }
}

fn required(field: &str, value: Option<&String>) -> Result<String, GatewayError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.clone()),
        _ => Err(GatewayError::invalid_request(format!(
            "Key: 'RouteParams.{field}' Error: field '{field}' is required"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn params(owner: &str, repo: &str) -> RouteParams {
        RouteParams { owner: owner.to_string(), repo: repo.to_string(), ..Default::default() }
    }

    #[test]
    fn test_repo_requires_owner() {
        let err = params("", "hello-world").repo().unwrap_err();
        assert_eq!(err.http_status_code(), 400);
        assert!(err.to_string().contains("owner"));
    }

    #[test]
    fn test_repo_requires_repo() {
        let err = params("octocat", "").repo().unwrap_err();
        assert!(err.to_string().contains("repo"));
    }

    #[test]
    fn test_asset_requires_tag_and_name() {
        let mut p = params("octocat", "hello-world");
        p.name = Some("hello.tar.gz".to_string());
        assert!(p.asset().unwrap_err().to_string().contains("tag"));

        p.tag = Some("v1.0.0".to_string());
        p.name = Some(String::new());
        assert!(p.asset().unwrap_err().to_string().contains("name"));
    }

    #[test]
    fn test_asset_ok() {
        let mut p = params("octocat", "hello-world");
        p.tag = Some("v1.0.0".to_string());
        p.name = Some("hello.tar.gz".to_string());

        let asset = p.asset().unwrap();
        assert_eq!(asset.repo.owner, "octocat");
        assert_eq!(asset.tag, "v1.0.0");
        assert_eq!(asset.name, "hello.tar.gz");
    }

    #[test]
    fn test_deserialize_ignores_unrouted_segments() {
        let p: RouteParams =
            serde_json::from_str(r#"{"owner":"o","repo":"r","rest":"/latest"}"#).unwrap();
        assert_eq!(p.repo().unwrap(), RepoRef { owner: "o".into(), repo: "r".into() });
        assert!(p.tag.is_none());
    }
}
