//! The time when the application started. It is used by the stopped clock as
//! its default fixed time outside of tests.
use std::time::SystemTime;

lazy_static! {
    /// The time at the start of the application.
    pub static ref TIME_AT_APP_START: SystemTime = SystemTime::now();
}
