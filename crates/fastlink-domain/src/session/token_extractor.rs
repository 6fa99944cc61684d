use super::SessionToken;

/// Service to build a session token from `Set-Cookie` response headers
pub struct SessionTokenExtractor;

impl SessionTokenExtractor {
    /// Separator used between cookie pairs, as in a `Cookie` request header
    const PAIR_SEPARATOR: &'static str = "; ";

    /// Extract session token from `Set-Cookie` header values
    ///
    /// Strategy:
    /// 1. Keep the portion of each header before the first `;` (the `name=value` pair)
    /// 2. Join the pairs with `"; "` in header order
    /// 3. Return `None` when no header was present
    pub fn extract<I, S>(set_cookie_headers: I) -> Option<SessionToken>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pairs = set_cookie_headers
            .into_iter()
            .map(|header| {
                let header = header.as_ref();
                header.split(';').next().unwrap_or(header).to_string()
            })
            .collect::<Vec<_>>();

        SessionToken::new(pairs.join(Self::PAIR_SEPARATOR))
    }
}
