use crate::config::AppConfig;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE: &str = "session";

// Session claims; the user id is the only payload. Everything else about
// the user is re-read from storage on each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // user id
    pub exp: usize,
    pub iat: usize,
}

pub struct SessionUtils;

impl SessionUtils {
    fn get_secret() -> String {
        AppConfig::get().session.secret.clone()
    }

    /// Sign a session token for the given user.
    pub fn issue_token(user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let now = chrono::Utc::now();
        let expiration = now + chrono::Duration::days(config.session.ttl_days);

        let claims = SessionClaims {
            sub: user_id.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        encode(&Header::default(), &claims, &encoding_key)
    }

    /// Verify a session token and return the user id it was issued for.
    pub fn verify_token(token: &str) -> Result<i64, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        let claims = decode::<SessionClaims>(token, &decoding_key, &validation)?.claims;
        claims.sub.parse::<i64>().map_err(|_| {
            jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::InvalidToken)
        })
    }

    /// Session cookie carrying the signed token.
    pub fn create_session_cookie(token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(SESSION_COOKIE, token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::days(
                config.session.ttl_days,
            ))
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(config.is_production()) // HTTPS only in production
            .finish()
    }

    /// Expired session cookie, used on logout.
    pub fn create_empty_session_cookie() -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(SESSION_COOKIE, "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let token = SessionUtils::issue_token(42).unwrap();
        assert_eq!(SessionUtils::verify_token(&token).unwrap(), 42);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = SessionUtils::issue_token(42).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(SessionUtils::verify_token(&tampered).is_err());
        assert!(SessionUtils::verify_token("not-a-token").is_err());
    }

    #[test]
    fn test_session_cookie_flags() {
        let cookie = SessionUtils::create_session_cookie("token");
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_logout_cookie_expires_immediately() {
        let cookie = SessionUtils::create_empty_session_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(
            cookie.max_age(),
            Some(actix_web::cookie::time::Duration::seconds(0))
        );
    }
}
