//! Unified error handling.
//!
//! Error variants are generated by a macro so every error carries a stable
//! code and a type name alongside its message.

use std::fmt;

/// Defines the application error enum.
///
/// Generates:
/// - the enum itself
/// - `code()` - stable error code
/// - `error_type()` - human readable type name
/// - `message()` - error detail
/// - snake_case convenience constructors
macro_rules! define_meritbook_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum MeritbookError {
            $($variant(String),)*
        }

        impl MeritbookError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(MeritbookError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(MeritbookError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(MeritbookError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl MeritbookError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        MeritbookError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_meritbook_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    PasswordHash("E005", "Password Hash Error"),
    IdAllocation("E006", "Student ID Allocation Error"),
}

impl MeritbookError {
    /// Colored output for development builds.
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MeritbookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MeritbookError {}

impl From<sea_orm::DbErr> for MeritbookError {
    fn from(err: sea_orm::DbErr) -> Self {
        MeritbookError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MeritbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MeritbookError::database_config("test").code(), "E001");
        assert_eq!(MeritbookError::validation("test").code(), "E004");
        assert_eq!(MeritbookError::id_allocation("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            MeritbookError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            MeritbookError::password_hash("test").error_type(),
            "Password Hash Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = MeritbookError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = MeritbookError::id_allocation("id space exhausted");
        let formatted = err.format_simple();
        assert!(formatted.contains("Student ID Allocation Error"));
        assert!(formatted.contains("id space exhausted"));
    }

    #[test]
    fn test_from_db_err() {
        let err: MeritbookError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }
}
