
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8000"  // Django dev server when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub const CONTACT_ENDPOINT: &str = "/api/contact/";
pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// How long a successful submission message stays up.
pub const SUCCESS_MESSAGE_MS: u32 = 5_000;

/// Services hero parallax is skipped on narrow screens.
pub const PARALLAX_MIN_VIEWPORT_WIDTH: f64 = 768.0;

pub fn contact_url() -> String {
    format!("{}{}", get_backend_url(), CONTACT_ENDPOINT)
}
