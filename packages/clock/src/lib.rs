//! Time related functions and types.
//!
//! It's usually a good idea to control where the time comes from in an
//! application so that it can be mocked for testing and it can be controlled
//! in production so we get the intended behavior without relying on the
//! specific time zone of the underlying system.
//!
//! Entity timestamps (`created_at`, `updated_at`) and token expiry dates are
//! derived from clocks in this crate. Clocks return a
//! `DurationSinceUnixEpoch`, which is a `std::time::Duration` since the Unix
//! Epoch (a timestamp).
//!
//! > **NOTICE**: the timestamp does not depend on the time zone. That gives
//! you the ability to use the clock regardless of the underlying system time
//! zone configuration. See [Unix time Wikipedia entry](https://en.wikipedia.org/wiki/Unix_time).

pub mod clock;
pub mod conv;
pub mod static_time;

#[macro_use]
extern crate lazy_static;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
