use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use tauri::{
    async_runtime,
    plugin::{Builder, PluginApi, TauriPlugin},
    AppHandle, Runtime,
};
use tracing::debug;

pub use client::{AnalyticsClient, MainThread, Task};
pub use error::{Error, Result};
pub use handler::AnalyticsHandler;
pub use models::*;

#[cfg(target_os = "android")]
mod android;
mod client;
mod commands;
#[cfg(not(target_os = "android"))]
mod desktop;
mod error;
mod handler;
mod models;

static HANDLER: OnceCell<AnalyticsHandler> = OnceCell::new();

/// Initializes the plugin.
///
/// Reads `plugins.analytics` from `tauri.conf.json`, see [`Config`].
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new("analytics")
        .invoke_handler(commands::commands())
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            let handler = platform_handler(app, api)?;
            async_runtime::block_on(handler.apply_config(&config))?;
            HANDLER
                .set(handler)
                .map_err(|_| Error::AlreadyInitialized)?;
            debug!("analytics plugin initialized");
            Ok(())
        })
        .build()
}

#[cfg(target_os = "android")]
fn platform_handler<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    api: PluginApi<R, C>,
) -> Result<AnalyticsHandler> {
    let client = Arc::new(android::init(api)?);
    Ok(AnalyticsHandler::new(client, android::UiThread))
}

#[cfg(not(target_os = "android"))]
fn platform_handler<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> Result<AnalyticsHandler> {
    let client = Arc::new(desktop::DebugClient::new());
    Ok(AnalyticsHandler::new(client, app.clone()))
}

pub fn get_handler() -> error::Result<&'static AnalyticsHandler> {
    let handler = HANDLER.get().ok_or(error::Error::HandlerNotInitialized)?;
    Ok(handler)
}
