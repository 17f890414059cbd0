/*!
 * Role-based access control middleware.
 *
 * Must run after [`RequireSession`](super::RequireSession); it reads the
 * authenticated user from the request extensions and checks the role.
 * Roles do not form a hierarchy: a gate for one role rejects the other,
 * so admin-only scopes turn teachers away and teacher-only routes turn
 * admins away.
 *
 * ## Usage
 *
 * ```rust,ignore
 * use crate::middlewares::{RequireRole, RequireSession};
 * use crate::models::users::entities::UserRole;
 *
 * web::scope("/api/admin")
 *     .wrap(RequireRole::new(&UserRole::Admin))
 *     .wrap(RequireSession)
 *     .route("/teachers", web::get().to(list_teachers));
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::models::users::entities::{self, UserRole};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    required_role: UserRole,
}

impl RequireRole {
    /// Middleware requiring exactly the given role.
    pub fn new(role: &UserRole) -> Self {
        Self {
            required_role: *role,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    required_role: UserRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let required_role = self.required_role;

        Box::pin(async move {
            let user = req.extensions().get::<entities::User>().cloned();

            match user {
                Some(user) => {
                    if user.role == required_role {
                        let res = srv.call(req).await?.map_into_left_body();
                        Ok(res)
                    } else {
                        info!(
                            "Access denied for user {} (role: {}). Required role: {}",
                            user.id, user.role, required_role
                        );
                        Ok(req.into_response(
                            create_error_response(StatusCode::FORBIDDEN, "Forbidden")
                                .map_into_right_body(),
                        ))
                    }
                }
                None => {
                    info!(
                        "Role check failed: no user found in request. Make sure RequireSession middleware is applied first."
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
