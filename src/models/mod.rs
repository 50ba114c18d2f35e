pub mod user;
pub mod snapshot;
pub mod report;

pub use user::*;
pub use snapshot::*;
pub use report::*;
