//! Repository modules. Each adds `impl PortalService` methods for one resource.

pub mod groups;
pub mod reviews;
pub mod study_sessions;
pub mod words;
