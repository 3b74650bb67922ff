//! Request target rewriting.

use axum::http::Uri;
use url::Url;

/// Decides where an inbound request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Director {
    /// Fixed upstream: the inbound path is appended to the base path and the
    /// query strings are merged (base first).
    SingleHost(Url),
    /// Resolved target: scheme, host, port, path and query are all replaced.
    Rewrite(Url),
}

impl Director {
    pub fn target_for(&self, uri: &Uri) -> Url {
        match self {
            Self::SingleHost(base) => {
                let mut target = base.clone();
                target.set_path(&single_joining_slash(base.path(), uri.path()));
                target.set_query(merge_query(base.query(), uri.query()).as_deref());
                target.set_fragment(None);
                target
            },
            Self::Rewrite(resolved) => {
                let mut target = resolved.clone();
                target.set_fragment(None);
                target
            },
        }
    }
}

fn single_joining_slash(a: &str, b: &str) -> String {
    match (a.ends_with('/'), b.starts_with('/')) {
        (true, true) => format!("{}{}", a, &b[1..]),
        (false, false) => format!("{}/{}", a, b),
        _ => format!("{}{}", a, b),
    }
}

fn merge_query(base: Option<&str>, inbound: Option<&str>) -> Option<String> {
    let base = base.filter(|q| !q.is_empty());
    let inbound = inbound.filter(|q| !q.is_empty());
    match (base, inbound) {
        (Some(a), Some(b)) => Some(format!("{}&{}", a, b)),
        (Some(a), None) => Some(a.to_string()),
        (None, b) => b.map(str::to_string),
    }
}
