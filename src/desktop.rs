use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::client::AnalyticsClient;
use crate::error::Result;
use crate::models::Bundle;

/// Stand-in for the vendor SDK on targets without one.
/// Every call is written to the `tracing` log.
pub struct DebugClient {
    instance_id: RwLock<Uuid>,
    collection_enabled: RwLock<bool>,
    events_logged: RwLock<u64>,
}

impl DebugClient {
    pub fn new() -> Self {
        Self {
            instance_id: RwLock::new(Uuid::new_v4()),
            collection_enabled: RwLock::new(true),
            events_logged: RwLock::new(0),
        }
    }
}

impl Default for DebugClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsClient for DebugClient {
    async fn log_event(&self, name: &str, params: &Bundle) -> Result<()> {
        if !*self.collection_enabled.read().await {
            info!("collection disabled, dropping event {name}");
            return Ok(());
        }
        let mut logged = self.events_logged.write().await;
        *logged += 1;
        info!("event #{} {name}: {params:?}", *logged);
        Ok(())
    }

    async fn set_user_property(&self, name: &str, value: &str) -> Result<()> {
        info!("user property {name} = {value}");
        Ok(())
    }

    async fn set_user_id(&self, user_id: &str) -> Result<()> {
        info!("user id = {user_id}");
        Ok(())
    }

    async fn set_current_screen(
        &self,
        screen_name: &str,
        screen_class_override: Option<&str>,
    ) -> Result<()> {
        info!(
            "screen {screen_name} ({})",
            screen_class_override.unwrap_or(screen_name)
        );
        Ok(())
    }

    async fn app_instance_id(&self) -> Result<String> {
        Ok(self.instance_id.read().await.to_string())
    }

    async fn reset_analytics_data(&self) -> Result<()> {
        let mut id = self.instance_id.write().await;
        *id = Uuid::new_v4();
        info!("analytics data reset, new instance id {}", *id);
        Ok(())
    }

    async fn set_collection_enabled(&self, enabled: bool) -> Result<()> {
        *self.collection_enabled.write().await = enabled;
        info!("collection enabled = {enabled}");
        Ok(())
    }

    async fn set_session_timeout_duration(&self, millis: u64) -> Result<()> {
        info!("session timeout = {millis}ms");
        Ok(())
    }
}
