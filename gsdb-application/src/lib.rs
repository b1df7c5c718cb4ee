//! # gsdb-application
//!
//! Application-level flows of greenspacedb: each flow resolves the
//! caller once at the boundary, drives the matching use cases and
//! maps every failure onto the top-level error type.

#[macro_use]
extern crate log;

mod approve_content_request;
mod reject_content_request;
mod submit_content_request;

pub mod prelude {
    pub use super::{
        approve_content_request::*, reject_content_request::*, submit_content_request::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use gsdb_core::{db::*, entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
