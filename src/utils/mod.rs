//! Utilities to implement the different zips of this crate.

mod lockstep;

pub(crate) use lockstep::{all_ready, size_hint, step};
