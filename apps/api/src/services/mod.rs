//! Service layer: everything that talks to the outside world or guards
//! access to it. Handlers orchestrate; services do the work.

pub mod admin_gate;
pub mod concierge;
pub mod notifier;
