#![forbid(unsafe_code)]

pub mod editor;
pub mod model;
pub mod reconcile;
pub mod time;
