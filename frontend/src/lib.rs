mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;

pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting XClone Frontend (wasm)");

    // Resolve the API base URL and config.json before mounting, so the
    // first request and the first toast both see the runtime config.
    // window.__XCLONE_ENV (env.js) takes precedence over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!(
            "Runtime config initialized (toasts dismiss after {} ms)",
            config::toast_duration_ms()
        );
        router::mount_app();
    });
}
