//! Form rendering module
//!
//! - `field_renderer`: labeled input and help line
//! - `user_form`: create-user form

mod field_renderer;
mod user_form;

pub use user_form::draw_create as draw_user_create;
