//! Shared helpers.

pub mod timecode;
