//! Command-line host for the version computation

pub mod orchestration;
