//! This module contains logic related to cryptographic keys.
pub mod ephemeral_instance_keys;
