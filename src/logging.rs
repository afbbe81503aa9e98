//! Tagged console logging
//!
//! In the browser lines go straight to `console`, e.g. `[NUI] getStash failed`.
//! Native builds (unit tests) route through the `log` facade instead.

pub fn info(tag: &str, msg: impl AsRef<str>) {
    let line = format!("[{}] {}", tag, msg.as_ref());
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    log::info!("{}", line);
}

pub fn warn(tag: &str, msg: impl AsRef<str>) {
    let line = format!("[{}] {}", tag, msg.as_ref());
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    log::warn!("{}", line);
}

pub fn error(tag: &str, msg: impl AsRef<str>) {
    let line = format!("[{}] {}", tag, msg.as_ref());
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{}", line);
}
