pub mod model;
pub mod repository;
pub mod storage;
pub mod types;

pub use model::Model;
pub use repository::Repository;

use navicula::publisher::RefPublisher;
use navicula::types::EnvironmentType;

use self::storage::Data;
use self::types::Session;

/// Everything the shell is allowed to touch outside its own state: the
/// network boundary, the persisted session, and the shared store snapshot.
#[derive(Clone)]
pub struct Environment {
    pub model: Model,
    pub repository: Repository,
    pub session: Option<Session>,
    pub storage: RefPublisher<Data>,
}

impl EnvironmentType for Environment {
    type AppEvent = types::AppEvent;
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    pub fn new(model: Model, repository: Repository) -> Self {
        let session = repository.session();
        let storage = RefPublisher::new(Data::new(session.is_some()));
        Self {
            model,
            repository,
            session,
            storage,
        }
    }

    pub fn signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn open_url(&self, url: &str) {
        let _ = webbrowser::open(url);
    }
}
