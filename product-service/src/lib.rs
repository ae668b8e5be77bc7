//! Products status service.

use service_core::ServiceIdentity;

pub const SERVICE_NAME: &str = "products";

pub fn identity() -> ServiceIdentity {
    ServiceIdentity::new(SERVICE_NAME)
}
