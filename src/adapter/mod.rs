//! This module contains the configured adapters of the application. Every adapter is an enum that
//! dispatches to the adapter implementation selected in the [configuration](crate::config).

pub mod locale;
pub mod store;
