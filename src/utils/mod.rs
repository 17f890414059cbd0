pub mod extractor;
pub mod parameter_error_handler;
pub mod password;
pub mod session;
pub mod validate;

pub use extractor::{
    SafeAcademicsIdI64, SafeEventIdI64, SafeStudentIdI64, SafeTeacherIdI64, SafeValueIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
