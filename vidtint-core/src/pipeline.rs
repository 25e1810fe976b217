//! Job orchestration: decode, transform passes, encode, scoped cleanup.

pub mod job;
