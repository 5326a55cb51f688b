use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::contact::{ContactService, SeaOrmContactRepository};

/// Shared handler state. The connection pool inside is the only thing
/// requests have in common.
#[derive(Clone)]
pub struct ServerState {
    pub contacts: Arc<ContactService<SeaOrmContactRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmContactRepository::new(db));
        Self { contacts: Arc::new(ContactService::new(repo)) }
    }
}
