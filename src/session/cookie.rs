//! Access token persistence in the browser cookie jar.
//!
//! Outside the browser there is no cookie jar; reads return `None` and writes are
//! ignored so the application simply starts anonymous.

/// Name of the cookie holding the access token
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Find the value of the cookie `name` in a `document.cookie` style string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(feature = "web")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Read the access token from the cookie jar
#[cfg(feature = "web")]
pub fn read_access_token() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    cookie_value(&cookies, ACCESS_TOKEN_COOKIE)
}

#[cfg(not(feature = "web"))]
pub fn read_access_token() -> Option<String> {
    None
}

/// Store the access token so it survives page reloads
#[cfg(feature = "web")]
pub fn store_access_token(token: &str) {
    let cookie = format!("{}={}; path=/; SameSite=Lax", ACCESS_TOKEN_COOKIE, token);
    set_cookie(&cookie);
}

#[cfg(not(feature = "web"))]
pub fn store_access_token(_token: &str) {}

/// Remove the access token, signing the user out
#[cfg(feature = "web")]
pub fn clear_access_token() {
    set_cookie(&format!("{}=; path=/; max-age=0", ACCESS_TOKEN_COOKIE));
}

#[cfg(not(feature = "web"))]
pub fn clear_access_token() {}

#[cfg(feature = "web")]
fn set_cookie(cookie: &str) {
    let stored = html_document().is_some_and(|document| document.set_cookie(cookie).is_ok());

    if !stored {
        dioxus_logger::tracing::warn!("Failed to write access token cookie");
    }
}
