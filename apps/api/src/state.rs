//! Shared application state.

use std::sync::Arc;

use veloce_db::Database;

use crate::services::admin_gate::AdminGate;
use crate::services::concierge::ChatModel;
use crate::services::notifier::NotificationDispatcher;

/// Shared state handed to every handler.
///
/// Cloning is cheap: the database clones its pool handle and the service
/// seams are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub dispatcher: NotificationDispatcher,
    pub admin_gate: AdminGate,
    pub concierge: Arc<dyn ChatModel>,
}

impl AppState {
    pub fn new(
        db: Database,
        dispatcher: NotificationDispatcher,
        concierge: Arc<dyn ChatModel>,
    ) -> Self {
        let admin_gate = AdminGate::new(db.settings());
        AppState {
            db,
            dispatcher,
            admin_gate,
            concierge,
        }
    }
}
