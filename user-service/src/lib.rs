//! Users status service.

use service_core::ServiceIdentity;

pub const SERVICE_NAME: &str = "users";

pub fn identity() -> ServiceIdentity {
    ServiceIdentity::new(SERVICE_NAME)
}
