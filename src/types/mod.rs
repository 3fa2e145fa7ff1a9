// ABOUTME: Validated domain newtypes shared across the crate.
// ABOUTME: App names and container image references.

mod app_name;
mod image_ref;

pub use app_name::{AppName, AppNameError};
pub use image_ref::{ImageRef, ParseImageRefError};
