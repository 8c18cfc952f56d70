//! Wire models exchanged with the PolicyPlay REST API.
//!
//! Field names follow the backend's JSON. Absent optional fields decode to
//! their defaults.

mod admin;
mod auth;
mod escape;
mod policy;
mod quiz;
mod scores;
mod tap;

pub use admin::*;
pub use auth::*;
pub use escape::*;
pub use policy::*;
pub use quiz::*;
pub use scores::*;
pub use tap::*;
