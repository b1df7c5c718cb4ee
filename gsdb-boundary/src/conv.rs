use gsdb_entities::content_request::{
    EventDraft, GreenSpaceDraft, GreenSpaceUpdateDraft, RequestKind, RequestPayload,
};
use gsdb_entities::image::ImageRef;

use crate::PayloadRecord;

impl From<&RequestPayload> for PayloadRecord {
    fn from(from: &RequestPayload) -> Self {
        let kind = from.kind().to_string();
        match from {
            RequestPayload::AddEvent(draft) => {
                let EventDraft {
                    name,
                    category,
                    date,
                    start_time,
                    end_time,
                    description,
                    location,
                } = draft;
                Self {
                    kind,
                    name: Some(name.clone()),
                    category: Some(category.clone()),
                    date: Some(date.clone()),
                    start_time: Some(start_time.clone()),
                    end_time: Some(end_time.clone()),
                    event_description: Some(description.clone()),
                    event_location: Some(location.clone()),
                    ..Default::default()
                }
            }
            RequestPayload::AddGreenSpace(draft) => {
                let GreenSpaceDraft {
                    name,
                    entry_price,
                    plant_info,
                    working_time,
                    working_days,
                    description,
                    location,
                    facilities,
                    images,
                } = draft;
                Self {
                    kind,
                    green_space_name: Some(name.clone()),
                    entry_price: Some(*entry_price),
                    plant_info: Some(plant_info.clone()),
                    working_time: Some(working_time.clone()),
                    working_days: Some(working_days.clone()),
                    green_space_description: Some(description.clone()),
                    green_space_location: Some(location.clone()),
                    facilities: Some(facilities.clone()),
                    images: Some(images.iter().map(|i| i.as_str().to_owned()).collect()),
                    ..Default::default()
                }
            }
            RequestPayload::UpdateGreenSpace(draft) => {
                let GreenSpaceUpdateDraft {
                    green_space_id,
                    name,
                    entry_price,
                    plant_info,
                    working_time,
                    working_days,
                    description,
                    location,
                    facilities,
                    images,
                } = draft;
                Self {
                    kind,
                    green_space_id: Some(green_space_id.to_string()),
                    green_space_name: name.clone(),
                    entry_price: *entry_price,
                    plant_info: plant_info.clone(),
                    working_time: working_time.clone(),
                    working_days: working_days.clone(),
                    green_space_description: description.clone(),
                    green_space_location: location.clone(),
                    facilities: facilities.clone(),
                    images: images
                        .as_ref()
                        .map(|refs| refs.iter().map(|i| i.as_str().to_owned()).collect()),
                    ..Default::default()
                }
            }
        }
    }
}

/// Restores the typed payload from a flat record.
///
/// Missing fields fall back to their empty defaults for the creating
/// kinds and stay absent for the update kind; field contents are not
/// validated here.
pub(crate) fn payload_from_record(
    kind: RequestKind,
    record: PayloadRecord,
) -> RequestPayload {
    let PayloadRecord {
        kind: _,
        name,
        category,
        date,
        start_time,
        end_time,
        event_description,
        event_location,
        green_space_id,
        green_space_name,
        entry_price,
        plant_info,
        working_time,
        working_days,
        green_space_description,
        green_space_location,
        facilities,
        images,
    } = record;
    match kind {
        RequestKind::AddEvent => RequestPayload::AddEvent(EventDraft {
            name: name.unwrap_or_default(),
            category: category.unwrap_or_default(),
            date: date.unwrap_or_default(),
            start_time: start_time.unwrap_or_default(),
            end_time: end_time.unwrap_or_default(),
            description: event_description.unwrap_or_default(),
            location: event_location.unwrap_or_default(),
        }),
        RequestKind::AddGreenSpace => RequestPayload::AddGreenSpace(GreenSpaceDraft {
            name: green_space_name.unwrap_or_default(),
            entry_price: entry_price.unwrap_or_default(),
            plant_info: plant_info.unwrap_or_default(),
            working_time: working_time.unwrap_or_default(),
            working_days: working_days.unwrap_or_default(),
            description: green_space_description.unwrap_or_default(),
            location: green_space_location.unwrap_or_default(),
            facilities: facilities.unwrap_or_default(),
            images: images
                .unwrap_or_default()
                .into_iter()
                .map(ImageRef::from)
                .collect(),
        }),
        RequestKind::UpdateGreenSpace => RequestPayload::UpdateGreenSpace(GreenSpaceUpdateDraft {
            green_space_id: green_space_id.unwrap_or_default().into(),
            name: green_space_name,
            entry_price,
            plant_info,
            working_time,
            working_days,
            description: green_space_description,
            location: green_space_location,
            facilities,
            images: images.map(|refs| refs.into_iter().map(ImageRef::from).collect()),
        }),
    }
}
