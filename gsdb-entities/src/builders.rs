pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{content_request_builder::*, event_builder::*, green_space_builder::*};

pub mod green_space_builder {

    use super::*;
    use crate::{green_space::*, id::*, image::*, time::*};

    #[derive(Debug)]
    pub struct GreenSpaceBuild {
        green_space: GreenSpace,
    }

    impl GreenSpaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.green_space.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.green_space.name = name.into();
            self
        }
        pub fn entry_price(mut self, price: f64) -> Self {
            self.green_space.entry_price = price;
            self
        }
        pub fn working_days(mut self, days: &str) -> Self {
            self.green_space.working_days = days.parse().unwrap();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.green_space.description = desc.into();
            self
        }
        pub fn location(mut self, location: &str) -> Self {
            self.green_space.location = location.into();
            self
        }
        pub fn images(mut self, images: Vec<&str>) -> Self {
            self.green_space.images = images.into_iter().map(ImageRef::from).collect();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.green_space.lat = Some(lat);
            self.green_space.lng = Some(lng);
            self
        }
        pub fn finish(self) -> GreenSpace {
            self.green_space
        }
    }

    impl Builder for GreenSpace {
        type Build = GreenSpaceBuild;
        fn build() -> GreenSpaceBuild {
            GreenSpaceBuild {
                green_space: GreenSpace {
                    id: Id::new(),
                    name: "".into(),
                    entry_price: 0.0,
                    plant_info: "".into(),
                    working_time: "".into(),
                    working_days: "".parse().unwrap(),
                    description: "".into(),
                    location: "".into(),
                    facilities: "".into(),
                    images: vec![],
                    lat: None,
                    lng: None,
                    created_at: Timestamp::now(),
                    updated_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod event_builder {

    use super::*;
    use crate::{event::*, id::*};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.event.name = name.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.event.category = category.into();
            self
        }
        pub fn date(mut self, date: &str) -> Self {
            self.event.date = date.into();
            self
        }
        pub fn times(mut self, start: &str, end: &str) -> Self {
            self.event.start_time = start.parse().unwrap();
            self.event.end_time = end.parse().unwrap();
            self
        }
        pub fn location(mut self, green_space_id: &str) -> Self {
            self.event.location = green_space_id.into();
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> EventBuild {
            EventBuild {
                event: Event {
                    id: Id::new(),
                    name: "".into(),
                    category: "".into(),
                    date: "".into(),
                    start_time: TimeOfDay::default(),
                    end_time: TimeOfDay::default(),
                    description: "".into(),
                    location: Id::new(),
                },
            }
        }
    }
}

pub mod content_request_builder {

    use super::*;
    use crate::{content_request::*, id::*, time::*};

    #[derive(Debug)]
    pub struct ContentRequestBuild {
        request: ContentRequest,
    }

    impl ContentRequestBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.request.id = id.into();
            self
        }
        pub fn submitter(mut self, user_id: &str) -> Self {
            self.request.submitter = user_id.into();
            self
        }
        pub fn kind(mut self, kind: RequestKind) -> Self {
            self.request.kind = kind;
            self
        }
        pub fn status(mut self, status: RequestStatus) -> Self {
            self.request.status = status;
            self
        }
        pub fn payload(mut self, encoded: &str) -> Self {
            self.request.payload = encoded.to_owned().into();
            self
        }
        pub fn finish(self) -> ContentRequest {
            self.request
        }
    }

    impl Builder for ContentRequest {
        type Build = ContentRequestBuild;
        fn build() -> ContentRequestBuild {
            ContentRequestBuild {
                request: ContentRequest {
                    id: Id::new(),
                    submitter: Id::new(),
                    kind: RequestKind::AddGreenSpace,
                    status: RequestStatus::default(),
                    payload: String::new().into(),
                    created_at: Timestamp::now(),
                    updated_at: Timestamp::now(),
                },
            }
        }
    }
}
