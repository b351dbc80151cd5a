//! Route handlers organized by resource

pub mod configs;
pub mod health;
pub mod runs;
pub mod testbeds;
