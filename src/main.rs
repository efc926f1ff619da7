mod logging;

// Only the browser build renders pages; the native host just serves files.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod menu;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod motion;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod navigation;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod particles;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod reveal;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
mod backend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    let config = backend::HostConfig::from_env();
    logging::init(config.log_level);

    match backend::run(config).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            let message = err.to_string();
            log::error!(error = message.as_str(); "server_failed");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
