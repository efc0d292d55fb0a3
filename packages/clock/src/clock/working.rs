use std::time::SystemTime;

use hbnb_primitives::DurationSinceUnixEpoch;

use crate::clock;

#[allow(clippy::module_name_repetitions)]
pub struct WorkingClock;

impl clock::Time for clock::Working {
    fn now() -> DurationSinceUnixEpoch {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .expect("the system time is before the Unix Epoch")
    }

    fn dbg_clock_type() -> String {
        "Working".to_owned()
    }
}
