use super::prelude::*;
use crate::util::validate::{AutoCorrect, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewGreenSpace {
    pub name         : String,
    pub entry_price  : f64,
    pub plant_info   : String,
    pub working_time : String,
    pub working_days : String,
    pub description  : String,
    pub location     : String,
    pub facilities   : String,
    pub images       : Vec<ImageRef>,
    pub lat          : Option<f64>,
    pub lng          : Option<f64>,
}

pub fn create_green_space<R>(repo: &R, g: NewGreenSpace) -> Result<GreenSpace>
where
    R: GreenSpaceRepo,
{
    let NewGreenSpace {
        name,
        entry_price,
        plant_info,
        working_time,
        working_days,
        description,
        location,
        facilities,
        images,
        lat,
        lng,
    } = g;
    let working_days = working_days.parse::<WorkingDays>()?;
    let now = Timestamp::now();
    let green_space = GreenSpace {
        id: Id::new(),
        name,
        entry_price,
        plant_info,
        working_time,
        working_days,
        description,
        location,
        facilities,
        images,
        lat,
        lng,
        created_at: now,
        updated_at: now,
    }
    .auto_correct();
    green_space.validate()?;
    log::debug!("Storing newly created green space: {:?}", green_space);
    repo.create_green_space(green_space.clone())?;
    Ok(green_space)
}

/// Partial update of a green space; absent fields stay untouched.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct GreenSpacePatch {
    pub name         : Option<String>,
    pub entry_price  : Option<f64>,
    pub plant_info   : Option<String>,
    pub working_time : Option<String>,
    pub working_days : Option<String>,
    pub description  : Option<String>,
    pub location     : Option<String>,
    pub facilities   : Option<String>,
    pub images       : Option<Vec<ImageRef>>,
    pub lat          : Option<f64>,
    pub lng          : Option<f64>,
}

impl From<GreenSpaceUpdateDraft> for GreenSpacePatch {
    fn from(from: GreenSpaceUpdateDraft) -> Self {
        let GreenSpaceUpdateDraft {
            green_space_id: _,
            name,
            entry_price,
            plant_info,
            working_time,
            working_days,
            description,
            location,
            facilities,
            images,
        } = from;
        Self {
            name,
            entry_price,
            plant_info,
            working_time,
            working_days,
            description,
            location,
            facilities,
            images,
            lat: None,
            lng: None,
        }
    }
}

pub fn update_green_space<R>(repo: &R, id: &Id, patch: GreenSpacePatch) -> Result<GreenSpace>
where
    R: GreenSpaceRepo,
{
    let mut green_space = repo.get_green_space(id.as_str())?;
    let GreenSpacePatch {
        name,
        entry_price,
        plant_info,
        working_time,
        working_days,
        description,
        location,
        facilities,
        images,
        lat,
        lng,
    } = patch;
    if let Some(name) = name {
        green_space.name = name;
    }
    if let Some(entry_price) = entry_price {
        green_space.entry_price = entry_price;
    }
    if let Some(plant_info) = plant_info {
        green_space.plant_info = plant_info;
    }
    if let Some(working_time) = working_time {
        green_space.working_time = working_time;
    }
    if let Some(working_days) = working_days {
        green_space.working_days = working_days.parse()?;
    }
    if let Some(description) = description {
        green_space.description = description;
    }
    if let Some(location) = location {
        green_space.location = location;
    }
    if let Some(facilities) = facilities {
        green_space.facilities = facilities;
    }
    if let Some(images) = images {
        green_space.images = images;
    }
    if let Some(lat) = lat {
        green_space.lat = Some(lat);
    }
    if let Some(lng) = lng {
        green_space.lng = Some(lng);
    }
    green_space.updated_at = Timestamp::now();
    let green_space = green_space.auto_correct();
    green_space.validate()?;
    log::debug!("Storing updated green space: {:?}", green_space);
    repo.update_green_space(&green_space)?;
    Ok(green_space)
}

pub fn delete_green_space<R>(repo: &R, id: &Id) -> Result<()>
where
    R: GreenSpaceRepo,
{
    log::info!("Deleting green space {id}");
    Ok(repo.delete_green_space(id.as_str())?)
}
