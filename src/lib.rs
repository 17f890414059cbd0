//! Meritbook - school student achievement record backend
//!
//! Actix Web service where teachers keep per-student academic, values and
//! event records and an admin manages the teacher accounts.
//!
//! # Architecture
//! - `config`: configuration management
//! - `entity`: SeaORM database entities
//! - `errors`: unified error handling
//! - `middlewares`: session, role and rate-limit middleware
//! - `models`: data model definitions
//! - `points`: event points table
//! - `routes`: API route layer
//! - `runtime`: runtime lifecycle management
//! - `services`: business logic layer
//! - `storage`: data storage layer (SeaORM)
//! - `utils`: helper functions

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod points;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
