//! SeaORM entity definitions
//!
//! These entities back database operations and are separate from the
//! business models under `models`. The storage layer runs CRUD against
//! them and converts rows into business models.

pub mod prelude;

pub mod academics;
pub mod events;
pub mod students;
pub mod users;
pub mod values;
