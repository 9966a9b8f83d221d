//! Utility modules for the prober

pub mod port_spec;
pub mod target;
