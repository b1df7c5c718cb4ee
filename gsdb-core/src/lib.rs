#![cfg_attr(test, deny(warnings))]

//! # gsdb-core
//!
//! Domain logic of greenspacedb: the storage and gateway contracts
//! and the use cases operating on them, including the content-request
//! moderation workflow.

pub mod authorization;
pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use gsdb_entities::{
        content_request::*, event::*, favorite::*, green_space::*, id::*, image::*,
        registration::*, time::*, user::*,
    };
}

pub use self::repositories::Error as RepoError;
