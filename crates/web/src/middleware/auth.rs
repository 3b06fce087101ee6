use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{
        HeaderMap,
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
    },
};
use std::convert::Infallible;
use storage::models::AccessToken;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// The access token the browser presented, if any. Absence is not a
/// rejection: the form component reports the missing session itself.
#[derive(Debug, Clone, Default)]
pub struct SessionToken(pub Option<AccessToken>);

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(token_from_headers(&parts.headers)))
    }
}

/// `Authorization: Bearer` wins over the cookie.
pub fn token_from_headers(headers: &HeaderMap) -> Option<AccessToken> {
    bearer_token(headers).or_else(|| cookie_token(headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<AccessToken> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(AccessToken::parse)
}

fn cookie_token(headers: &HeaderMap) -> Option<AccessToken> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == ACCESS_TOKEN_COOKIE)
        .and_then(|(_, value)| AccessToken::parse(value))
}
