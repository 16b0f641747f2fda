//! CLI library components for the Cardioscreen service.

pub mod logging;
