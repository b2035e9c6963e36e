//! Flutter-facing bridge crate for the Placemark core.

pub mod api;
