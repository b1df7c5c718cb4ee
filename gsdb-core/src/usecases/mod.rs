mod error;
mod favorites;
mod load_green_spaces;
mod load_requests;
mod moderate_request;
mod query_events;
mod registrations;
mod store_event;
mod store_green_space;
mod submit_request;
mod users;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::Error, favorites::*, load_green_spaces::*, load_requests::*, moderate_request::*,
    query_events::*, registrations::*, store_event::*, store_green_space::*, submit_request::*,
    users::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, RepoError};
}
