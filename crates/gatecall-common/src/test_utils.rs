//! Test utilities and shared fixtures for the Gatecall workspace.

use crate::types::{AnnouncementRequest, BoardingGroup, TemplateKind};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests once per process.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// A fully populated request for flight 5240 to Lima through gate 12.
pub fn sample_request(template: TemplateKind) -> AnnouncementRequest {
    AnnouncementRequest::new(template)
        .with_flight_number("5240")
        .with_destination("Lima")
        .with_gate("12")
}

/// [`sample_request`] with groups 1 and 2 selected.
pub fn sample_request_with_groups(template: TemplateKind) -> AnnouncementRequest {
    sample_request(template).with_groups([BoardingGroup::Two, BoardingGroup::One])
}
