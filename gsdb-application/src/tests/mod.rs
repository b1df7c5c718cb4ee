
pub mod prelude {

    use std::sync::atomic::{AtomicUsize, Ordering};

    pub use gsdb_core::{
        entities::*,
        gateways::{
            identity::{Identity, IdentityGateway},
            images::ImageStorageGateway,
        },
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use gsdb_db_mem::MemoryDb;

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    /// Deterministic stand-in for the external image storage.
    pub struct DummyImageGW;

    impl ImageStorageGateway for DummyImageGW {
        fn generate_upload_url(&self) -> anyhow::Result<url::Url> {
            Ok("https://images.test/upload".parse()?)
        }

        fn resolve_url(&self, image: &ImageRef) -> anyhow::Result<Option<url::Url>> {
            Ok(Some(format!("https://images.test/{image}").parse()?))
        }
    }

    /// Identity gateway of one simulated device session.
    pub struct SessionGW(pub Option<Identity>);

    impl IdentityGateway for SessionGW {
        fn current_identity(&self) -> Option<Identity> {
            self.0.clone()
        }
    }

    pub fn anonymous() -> SessionGW {
        SessionGW(None)
    }

    static USER_SEQ: AtomicUsize = AtomicUsize::new(0);

    pub struct BackendFixture {
        pub db: MemoryDb,
        pub images: DummyImageGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            Self {
                db: MemoryDb::default(),
                images: DummyImageGW,
            }
        }

        pub fn create_user(&self, is_admin: bool) -> User {
            let n = USER_SEQ.fetch_add(1, Ordering::Relaxed);
            let external_id = format!("subject-{n}");
            usecases::create_new_user(
                &self.db,
                usecases::NewUser {
                    external_id: external_id.clone(),
                    first_name: "Test".into(),
                    last_name: "User".into(),
                    email: format!("user-{n}@users.test"),
                    is_admin,
                    ..Default::default()
                },
            )
            .unwrap()
        }

        pub fn signed_in_as(&self, user: &User) -> SessionGW {
            SessionGW(Some(Identity {
                subject: user.external_id.clone(),
            }))
        }

        pub fn try_get_green_space(&self, id: &str) -> Option<GreenSpace> {
            match self.db.get_green_space(id) {
                Ok(green_space) => Some(green_space),
                Err(RepoError::NotFound) => None,
                Err(err) => panic!("Unexpected storage error: {err}"),
            }
        }

        pub fn request_status(&self, id: &Id) -> RequestStatus {
            self.db
                .get_content_request(id.as_str())
                .unwrap()
                .status
        }
    }
}
