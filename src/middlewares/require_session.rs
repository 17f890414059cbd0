/*!
 * Session authentication middleware.
 *
 * Verifies the signed session cookie and loads the matching user before
 * the handler runs. The user row is fetched from storage on every
 * request, never cached, so deleting an account invalidates its
 * outstanding sessions immediately.
 *
 * ## Usage
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireSession;
 *
 * web::scope("/api/students")
 *     .wrap(RequireSession)
 *     .route("", web::get().to(list_students));
 * ```
 *
 * Handlers behind the middleware read the authenticated user back out of
 * the request extensions via [`RequireSession::extract_user`].
 */

use crate::models::users::entities::{self, UserRole};
use crate::storage::Storage;
use crate::utils::session::{SESSION_COOKIE, SessionUtils};
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireSession;

async fn authenticate(req: &ServiceRequest) -> Result<entities::User, String> {
    let cookie = req
        .cookie(SESSION_COOKIE)
        .ok_or_else(|| "Missing session cookie".to_string())?;

    let user_id = SessionUtils::verify_token(cookie.value()).map_err(|err| {
        info!("Session token validation failed: {}", err);
        "Invalid session token".to_string()
    })?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|_| "Failed to retrieve user from storage".to_string())?
        .ok_or_else(|| "User no longer exists".to_string())?;

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
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
        Box::pin(async move {
            // CORS preflight never carries credentials
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            match authenticate(&req).await {
                Ok(user) => {
                    debug!("Session authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Session authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireSession {
    /// Authenticated user stored by the middleware, if any.
    pub fn extract_user(req: &actix_web::HttpRequest) -> Option<entities::User> {
        req.extensions().get::<entities::User>().cloned()
    }

    /// Shortcut for the authenticated user's id.
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions()
            .get::<entities::User>()
            .map(|user| user.id)
    }

    /// Shortcut for the authenticated user's role.
    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions()
            .get::<entities::User>()
            .map(|user| user.role)
    }
}
