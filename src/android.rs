use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tauri::{
    async_runtime,
    plugin::{PluginApi, PluginHandle},
    Runtime,
};

use crate::client::{AnalyticsClient, MainThread, Task};
use crate::error::{Error, Result};
use crate::models::{AppInstanceId, Bundle};

/// Forwards every call to the Kotlin `AnalyticsPlugin`, which owns the
/// Firebase Analytics instance.
pub struct MobileClient<R: Runtime>(PluginHandle<R>);

pub fn init<R: Runtime, C: DeserializeOwned>(api: PluginApi<R, C>) -> Result<MobileClient<R>> {
    let handle = api.register_android_plugin("app.tauri.analytics", "AnalyticsPlugin")?;
    Ok(MobileClient(handle))
}

/// Runs queued work on the blocking pool instead of the event loop.
/// `setCurrentScreen` moves itself onto the UI looper on the Kotlin side.
pub struct UiThread;

impl MainThread for UiThread {
    fn dispatch(&self, task: Task) -> Result<()> {
        async_runtime::spawn_blocking(task);
        Ok(())
    }
}

impl<R: Runtime> MobileClient<R> {
    fn run<T: DeserializeOwned>(&self, command: &str, payload: impl Serialize) -> Result<T> {
        self.0
            .run_mobile_plugin(command, payload)
            .map_err(Error::vendor)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogEventParams<'a> {
    name: &'a str,
    params: &'a Bundle,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserPropertyParams<'a> {
    name: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScreenParams<'a> {
    screen_name: &'a str,
    screen_class_override: Option<&'a str>,
}

#[async_trait]
impl<R: Runtime> AnalyticsClient for MobileClient<R> {
    async fn log_event(&self, name: &str, params: &Bundle) -> Result<()> {
        self.run("logEvent", LogEventParams { name, params })
    }

    async fn set_user_property(&self, name: &str, value: &str) -> Result<()> {
        self.run("setUserProperty", UserPropertyParams { name, value })
    }

    async fn set_user_id(&self, user_id: &str) -> Result<()> {
        self.run("setUserId", serde_json::json!({ "userId": user_id }))
    }

    async fn set_current_screen(
        &self,
        screen_name: &str,
        screen_class_override: Option<&str>,
    ) -> Result<()> {
        self.run(
            "setCurrentScreen",
            ScreenParams {
                screen_name,
                screen_class_override,
            },
        )
    }

    async fn app_instance_id(&self) -> Result<String> {
        let res: AppInstanceId = self.run("appInstanceId", serde_json::Value::Null)?;
        Ok(res.app_id)
    }

    async fn reset_analytics_data(&self) -> Result<()> {
        self.run("resetAnalyticsData", serde_json::Value::Null)
    }

    async fn set_collection_enabled(&self, enabled: bool) -> Result<()> {
        self.run(
            "setCollectionEnabled",
            serde_json::json!({ "enabled": enabled }),
        )
    }

    async fn set_session_timeout_duration(&self, millis: u64) -> Result<()> {
        self.run(
            "setSessionTimeoutDuration",
            serde_json::json!({ "duration": millis }),
        )
    }
}
