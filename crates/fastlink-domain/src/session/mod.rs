mod token_extractor;

use std::fmt;

pub use token_extractor::SessionTokenExtractor;

/// Session token value object
/// Concatenated `name=value` cookie pairs proving authentication for one run
///
/// Never persisted: a token lives only as long as the run that created it.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Create a token, rejecting an empty cookie string
    pub fn new(cookies: impl Into<String>) -> Option<Self> {
        let cookies = cookies.into();
        if cookies.is_empty() {
            None
        } else {
            Some(Self(cookies))
        }
    }

    /// Value for a `Cookie` request header
    pub fn as_cookie_header(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cookie names are useful in logs, values are secrets
        let names = self
            .0
            .split("; ")
            .map(|pair| pair.split('=').next().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "SessionToken([{}])", names)
    }
}
