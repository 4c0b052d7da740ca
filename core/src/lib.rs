//! Core library for the task manager
//!
//! This crate contains the application logic, including:
//! - Task store with persistence on every mutation
//! - Remote user/post fetching
//! - Derived views (filtering, search, pagination)
//! - The task board and API explorer panels

pub mod board;
pub mod error;
pub mod explorer;
pub mod remote;
pub mod storage;
pub mod task;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
