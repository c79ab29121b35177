use tauri::{command, Runtime};

use crate::error::Result;
use crate::get_handler;
use crate::models::{AppInstanceId, EventParams};

#[command]
pub(crate) async fn set_user_property(name: Option<String>, value: Option<String>) -> Result<()> {
    get_handler()?.set_user_property(name, value).await
}

#[command]
pub(crate) async fn log_event(name: Option<String>, parameters: Option<EventParams>) -> Result<()> {
    get_handler()?.log_event(name, parameters).await
}

#[command]
pub(crate) async fn set_user_id(user_id: Option<String>) -> Result<()> {
    get_handler()?.set_user_id(user_id).await
}

#[command]
pub(crate) async fn set_screen_name(
    screen_name: Option<String>,
    screen_class_override: Option<String>,
) -> Result<()> {
    get_handler()?.set_screen_name(screen_name, screen_class_override)
}

#[command]
pub(crate) async fn app_instance_id() -> Result<AppInstanceId> {
    get_handler()?.app_instance_id().await
}

#[command]
pub(crate) async fn reset_analytics_data() -> Result<()> {
    get_handler()?.reset_analytics_data().await
}

#[command]
pub(crate) async fn set_collection_enabled(enabled: Option<bool>) -> Result<()> {
    get_handler()?.set_collection_enabled(enabled).await
}

#[command]
pub(crate) async fn set_session_timeout_duration(duration: Option<u64>) -> Result<()> {
    get_handler()?.set_session_timeout_duration(duration).await
}

pub fn commands<R: Runtime>() -> impl Fn(tauri::ipc::Invoke<R>) -> bool {
    tauri::generate_handler![
        set_user_property,
        log_event,
        set_user_id,
        set_screen_name,
        app_instance_id,
        reset_analytics_data,
        set_collection_enabled,
        set_session_timeout_duration
    ]
}
