use thiserror::Error;

use gsdb_entities::{event::Event, green_space::GreenSpace};

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

#[derive(Debug, Error)]
pub enum GreenSpaceInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("Invalid entry price")]
    EntryPrice,
}

impl Validate for GreenSpace {
    type Error = GreenSpaceInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if !self.entry_price.is_finite() || self.entry_price < 0.0 {
            return Err(Self::Error::EntryPrice);
        }
        Ok(())
    }
}

impl AutoCorrect for GreenSpace {
    fn auto_correct(mut self) -> Self {
        self.images.retain(|image| !image.as_str().is_empty());
        // Coordinates are only meaningful as a pair.
        if self.lat.is_none() || self.lng.is_none() {
            self.lat = None;
            self.lng = None;
        }
        self
    }
}

#[derive(Debug, Error)]
pub enum EventInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("The end time is not after the start time")]
    EndTimeBeforeStart,
}

impl Validate for Event {
    type Error = EventInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if self.end_time <= self.start_time {
            return Err(Self::Error::EndTimeBeforeStart);
        }
        Ok(())
    }
}
