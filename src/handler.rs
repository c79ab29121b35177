use std::sync::Arc;

use tauri::async_runtime;
use tracing::{debug, error, warn};

use crate::client::{AnalyticsClient, MainThread};
use crate::error::{Error, Result};
use crate::models::{to_bundle, AppInstanceId, Config, EventParams};

pub struct AnalyticsHandler {
    client: Arc<dyn AnalyticsClient>,
    main_thread: Box<dyn MainThread>,
}

fn required<T>(value: Option<T>, key: &'static str) -> Result<T> {
    value.ok_or(Error::MissingKey(key))
}

impl AnalyticsHandler {
    pub fn new(client: Arc<dyn AnalyticsClient>, main_thread: impl MainThread) -> Self {
        Self {
            client,
            main_thread: Box::new(main_thread),
        }
    }

    /// Pushes the startup configuration to the vendor SDK.
    pub async fn apply_config(&self, config: &Config) -> Result<()> {
        if let Some(enabled) = config.collection_enabled {
            self.client.set_collection_enabled(enabled).await?;
        }
        if let Some(millis) = config.session_timeout_duration {
            self.client.set_session_timeout_duration(millis).await?;
        }
        Ok(())
    }

    pub async fn set_user_property(
        &self,
        name: Option<String>,
        value: Option<String>,
    ) -> Result<()> {
        let name = required(name, "name")?;
        let value = required(value, "value")?;
        debug!("setting user property {name}");
        self.client.set_user_property(&name, &value).await
    }

    /// Logs `name` with every parameter that fits a bundle slot.
    ///
    /// Keys with unsupported values are skipped, the event is still logged
    /// with the rest, and the call then fails listing the skipped keys.
    pub async fn log_event(&self, name: Option<String>, params: Option<EventParams>) -> Result<()> {
        let name = required(name, "name")?;
        let params = required(params, "parameters")?;
        let (bundle, rejected) = to_bundle(params);
        for r in &rejected {
            warn!("logging {name} without parameter: {r}");
        }
        debug!("logging event {name} with {} parameters", bundle.len());
        self.client.log_event(&name, &bundle).await?;
        if rejected.is_empty() {
            Ok(())
        } else {
            Err(Error::UnsupportedParameters(rejected))
        }
    }

    pub async fn set_user_id(&self, user_id: Option<String>) -> Result<()> {
        let user_id = required(user_id, "userId")?;
        debug!("setting user id");
        self.client.set_user_id(&user_id).await
    }

    /// Queues the screen update on the main thread and returns right away.
    /// A failure inside the queued call is only logged.
    pub fn set_screen_name(
        &self,
        screen_name: Option<String>,
        screen_class_override: Option<String>,
    ) -> Result<()> {
        let screen_name = required(screen_name, "screenName")?;
        let client = self.client.clone();
        debug!("scheduling screen name {screen_name}");
        self.main_thread.dispatch(Box::new(move || {
            let res = async_runtime::block_on(
                client.set_current_screen(&screen_name, screen_class_override.as_deref()),
            );
            if let Err(e) = res {
                error!("failed to set screen name {screen_name}: {e}");
            }
        }))
    }

    pub async fn app_instance_id(&self) -> Result<AppInstanceId> {
        let app_id = self.client.app_instance_id().await?;
        Ok(AppInstanceId { app_id })
    }

    pub async fn reset_analytics_data(&self) -> Result<()> {
        debug!("resetting analytics data");
        self.client.reset_analytics_data().await
    }

    pub async fn set_collection_enabled(&self, enabled: Option<bool>) -> Result<()> {
        let enabled = required(enabled, "enabled")?;
        debug!("setting collection enabled to {enabled}");
        self.client.set_collection_enabled(enabled).await
    }

    pub async fn set_session_timeout_duration(&self, duration: Option<u64>) -> Result<()> {
        let duration = required(duration, "duration")?;
        debug!("setting session timeout to {duration}ms");
        self.client.set_session_timeout_duration(duration).await
    }
}
