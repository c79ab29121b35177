use async_trait::async_trait;
use tauri::{AppHandle, Runtime};

use crate::error::Result;
use crate::models::Bundle;

/// The vendor analytics SDK, one method per SDK call.
#[async_trait]
pub trait AnalyticsClient: Send + Sync + 'static {
    async fn log_event(&self, name: &str, params: &Bundle) -> Result<()>;

    async fn set_user_property(&self, name: &str, value: &str) -> Result<()>;

    async fn set_user_id(&self, user_id: &str) -> Result<()>;

    /// Must be called on the main thread.
    async fn set_current_screen(
        &self,
        screen_name: &str,
        screen_class_override: Option<&str>,
    ) -> Result<()>;

    async fn app_instance_id(&self) -> Result<String>;

    async fn reset_analytics_data(&self) -> Result<()>;

    async fn set_collection_enabled(&self, enabled: bool) -> Result<()>;

    async fn set_session_timeout_duration(&self, millis: u64) -> Result<()>;
}

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Schedules work on the platform's main/UI thread.
///
/// `dispatch` returns once the task is queued; it never waits for the task.
pub trait MainThread: Send + Sync + 'static {
    fn dispatch(&self, task: Task) -> Result<()>;
}

impl<R: Runtime> MainThread for AppHandle<R> {
    fn dispatch(&self, task: Task) -> Result<()> {
        self.run_on_main_thread(task)?;
        Ok(())
    }
}
