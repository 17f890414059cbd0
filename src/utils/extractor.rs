//! Path parameter extractors that answer with the JSON error envelope
//! instead of actix's plain-text 400 when a segment is not a valid i64.

/// Defines a typed i64 path extractor for one named route parameter.
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok());
                std::future::ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let response = actix_web::HttpResponse::BadRequest().json(
                            $crate::models::ErrorResponse::new(concat!("Invalid ", $param)),
                        );
                        Err(actix_web::error::InternalError::from_response(
                            concat!("Invalid path parameter: ", $param),
                            response,
                        )
                        .into())
                    }
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafeAcademicsIdI64, "academics_id");
define_safe_i64_extractor!(SafeValueIdI64, "value_id");
define_safe_i64_extractor!(SafeEventIdI64, "event_id");
define_safe_i64_extractor!(SafeTeacherIdI64, "teacher_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::FromRequest;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_valid_id() {
        let req = TestRequest::default()
            .param("student_id", "10452")
            .to_http_request();
        let id = SafeStudentIdI64::extract(&req).await.unwrap();
        assert_eq!(id.0, 10452);
    }

    #[actix_web::test]
    async fn test_rejects_non_numeric_id() {
        let req = TestRequest::default()
            .param("student_id", "abc")
            .to_http_request();
        assert!(SafeStudentIdI64::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_rejects_missing_param() {
        let req = TestRequest::default().to_http_request();
        assert!(SafeEventIdI64::extract(&req).await.is_err());
    }
}
