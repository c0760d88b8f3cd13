// Operator console. Native builds (unit tests) have no browser console, so
// the same messages go to stderr there.

#[cfg(target_arch = "wasm32")]
pub fn error(context: &str, detail: &dyn std::fmt::Display) {
    gloo::console::error!(context, detail.to_string());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(context: &str, detail: &dyn std::fmt::Display) {
    gloo::console::warn!(context, detail.to_string());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(context: &str, detail: &dyn std::fmt::Display) {
    eprintln!("ERROR {context} {detail}");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(context: &str, detail: &dyn std::fmt::Display) {
    eprintln!("WARN {context} {detail}");
}
