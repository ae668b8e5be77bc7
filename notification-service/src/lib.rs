//! Notifications status service.

use service_core::ServiceIdentity;

pub const SERVICE_NAME: &str = "notifications";

pub fn identity() -> ServiceIdentity {
    ServiceIdentity::new(SERVICE_NAME)
}
