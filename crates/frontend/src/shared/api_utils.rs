//! API utilities for frontend-backend communication

/// Port the backend listens on when the frontend is served separately (trunk serve)
const BACKEND_PORT: u16 = 4000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:4000"
/// - Empty string if window is not available (requests become same-origin)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/team");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
