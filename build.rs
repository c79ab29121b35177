const COMMANDS: &[&str] = &[
    "set_user_property",
    "log_event",
    "set_user_id",
    "set_screen_name",
    "app_instance_id",
    "reset_analytics_data",
    "set_collection_enabled",
    "set_session_timeout_duration",
];

fn main() {
    tauri_plugin::Builder::new(COMMANDS)
        .android_path("android")
        .build();
}
