use web_sys::window;

pub fn get_api_base_url() -> String {
    // Use the current origin so the app works when accessed from other
    // computers on the network.
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            let protocol = window
                .location()
                .protocol()
                .unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    // Default to 127.0.0.1 for development
    "http://127.0.0.1:9091".to_string()
}
