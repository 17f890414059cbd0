pub mod academics;

pub mod admin;

pub mod auth;

pub mod events;

pub mod students;

pub mod values;

pub use academics::configure_academics_routes;
pub use admin::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use events::configure_events_routes;
pub use students::configure_student_routes;
pub use values::configure_values_routes;
