pub mod claims;
pub mod service_account;

pub use claims::ServiceAccountClaims;
pub use service_account::{ServiceAccountAuth, ServiceAccountKey};
