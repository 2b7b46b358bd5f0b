use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Verified claim set of one request's bearer token.
///
/// `permissions` is `None` when the claim is absent, which is not the same as
/// a token granted no permissions at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedToken {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub permissions: Option<HashSet<String>>,
}

impl DecodedToken {
    pub fn with_permissions<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sub: None,
            permissions: Some(permissions.into_iter().map(Into::into).collect()),
        }
    }
}
