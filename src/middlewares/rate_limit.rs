/*!
 * Rate limiting middleware.
 *
 * Throttles requests per client IP to slow down credential stuffing and
 * bulk account creation on the public auth endpoints.
 *
 * ## Usage
 *
 * ```rust,ignore
 * use crate::middlewares::RateLimit;
 *
 * web::resource("/login")
 *     .route(web::post().to(login_handler).wrap(RateLimit::login()))
 * ```
 *
 * Counting uses a fixed window per key. Requests over the limit get a
 * 429 with a `Retry-After` header for the remainder of the window.
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use dashmap::DashMap;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

use crate::models::ErrorResponse;

/// Window state per key: (window start, requests seen in that window).
static RATE_LIMIT_BUCKETS: Lazy<DashMap<String, (u64, u32)>> = Lazy::new(DashMap::new);

/// Stale buckets are swept once the map grows past this.
const MAX_TRACKED_KEYS: usize = 100_000;

#[derive(Clone)]
pub struct RateLimit {
    /// Maximum requests allowed inside one window
    max_requests: u32,
    /// Window length in seconds
    window_secs: u64,
    /// Key prefix separating endpoints that share a client
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// Login endpoint: 5 attempts per minute per IP.
    pub fn login() -> Self {
        Self::new(5, 60).with_prefix("login")
    }

    /// Registration endpoint: 3 attempts per minute per IP.
    pub fn register() -> Self {
        Self::new(3, 60).with_prefix("register")
    }
}

/// Client IP for the rate limit key.
///
/// Forwarding headers are only meaningful behind a reverse proxy that
/// sets them; values that do not parse as an IP are ignored.
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Count one request against the key's fixed window.
///
/// Returns `Err(retry_after_secs)` when the key is over its limit.
fn check_rate_limit(key: &str, max_requests: u32, window_secs: u64, now: u64) -> Result<(), u64> {
    if RATE_LIMIT_BUCKETS.len() > MAX_TRACKED_KEYS {
        RATE_LIMIT_BUCKETS.retain(|_, (start, _)| now.saturating_sub(*start) < window_secs);
    }

    let mut entry = RATE_LIMIT_BUCKETS
        .entry(key.to_string())
        .or_insert((now, 0));
    let (start, count) = *entry;

    if now.saturating_sub(start) >= window_secs {
        *entry = (now, 1);
        return Ok(());
    }

    if count >= max_requests {
        let retry_after = (start + window_secs).saturating_sub(now).max(1);
        return Err(retry_after);
    }

    entry.1 = count + 1;
    Ok(())
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ErrorResponse::new(
            "Too many requests. Please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            max_requests: self.max_requests,
            window_secs: self.window_secs,
            key_prefix: self.key_prefix.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let max_requests = self.max_requests;
        let window_secs = self.window_secs;
        let key_prefix = self.key_prefix.clone();

        Box::pin(async move {
            let identifier = format!("ip:{}", extract_client_ip(&req));
            let cache_key = if key_prefix.is_empty() {
                identifier
            } else {
                format!("{}:{}", key_prefix, identifier)
            };

            if let Err(retry_after) =
                check_rate_limit(&cache_key, max_requests, window_secs, unix_now())
            {
                warn!(
                    "Rate limit exceeded for key: {} (limit: {}/{}s)",
                    cache_key, max_requests, window_secs
                );
                return Ok(req
                    .into_response(create_rate_limit_response(retry_after).map_into_right_body()));
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_presets() {
        let login = RateLimit::login();
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window_secs, 60);
        assert_eq!(login.key_prefix, "login");

        let register = RateLimit::register();
        assert_eq!(register.max_requests, 3);
        assert_eq!(register.window_secs, 60);
    }

    #[test]
    fn test_window_counts_and_blocks() {
        // Unique key so parallel tests cannot interfere
        let key = "test:window_counts_and_blocks";
        let now = 1_000_000;

        for _ in 0..3 {
            assert!(check_rate_limit(key, 3, 60, now).is_ok());
        }
        let retry = check_rate_limit(key, 3, 60, now).unwrap_err();
        assert_eq!(retry, 60);

        // Later in the same window the retry hint shrinks
        let retry = check_rate_limit(key, 3, 60, now + 45).unwrap_err();
        assert_eq!(retry, 15);
    }

    #[test]
    fn test_window_resets_after_expiry() {
        let key = "test:window_resets_after_expiry";
        let now = 2_000_000;

        for _ in 0..2 {
            assert!(check_rate_limit(key, 2, 60, now).is_ok());
        }
        assert!(check_rate_limit(key, 2, 60, now).is_err());

        // New window, counting starts over
        assert!(check_rate_limit(key, 2, 60, now + 60).is_ok());
        assert!(check_rate_limit(key, 2, 60, now + 61).is_ok());
        assert!(check_rate_limit(key, 2, 60, now + 62).is_err());
    }
}
