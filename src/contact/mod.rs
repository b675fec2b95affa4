//! Contact form: validation, payload, submission outcome.

pub mod csrf;
pub mod form;
pub mod phone;
pub mod submit;
