//! Server identity, installed packages and scheduled tasks.

use chrono::{DateTime, FixedOffset};
use ordered_float::OrderedFloat;
use uuid::Uuid;

use crate::configuration::CastReceiverApplication;
use crate::ticks::Ticks;

dto_enum! {
    pub enum TaskState {
        Idle => "Idle",
        Cancelling => "Cancelling",
        Running => "Running",
    }
}

dto_enum! {
    pub enum TaskCompletionStatus {
        Completed => "Completed",
        Failed => "Failed",
        Cancelled => "Cancelled",
        Aborted => "Aborted",
    }
}

dto_enum! {
    pub enum TaskTriggerInfoType {
        DailyTrigger => "DailyTrigger",
        WeeklyTrigger => "WeeklyTrigger",
        IntervalTrigger => "IntervalTrigger",
        StartupTrigger => "StartupTrigger",
    }
}

dto! {
    /// One released version of a plugin package. Mostly camelCase on the wire.
    pub struct VersionInfo => VersionInfoBuilder {
        #[serde(rename = "version")]
        version: String,
        version_number: String,
        #[serde(rename = "changelog")]
        changelog: String,
        #[serde(rename = "targetAbi")]
        target_abi: String,
        #[serde(rename = "sourceUrl")]
        source_url: String,
        #[serde(rename = "checksum")]
        checksum: String,
        #[serde(rename = "timestamp")]
        timestamp: String,
        #[serde(rename = "repositoryName")]
        repository_name: String,
        #[serde(rename = "repositoryUrl")]
        repository_url: String,
    }
}

dto! {
    /// Plugin package from a repository manifest. camelCase on the wire.
    pub struct PackageInfo => PackageInfoBuilder {
        #[serde(rename = "name")]
        name: String,
        #[serde(rename = "description")]
        description: String,
        #[serde(rename = "overview")]
        overview: String,
        #[serde(rename = "owner")]
        owner: String,
        #[serde(rename = "category")]
        category: String,
        #[serde(rename = "guid")]
        guid: Uuid,
        #[serde(rename = "versions")]
        versions: Vec<VersionInfo>; push add_version: VersionInfo,
        #[serde(rename = "imageUrl")]
        image_url: String,
    }
}

dto! {
    pub struct InstallationInfo => InstallationInfoBuilder {
        guid: Uuid,
        name: String,
        version: String,
        changelog: String,
        source_url: String,
        checksum: String,
        package_info: PackageInfo,
    }
}

dto! {
    /// `/System/Info`. The path and platform fields are deprecated upstream
    /// but still populated by current servers, so they are kept.
    pub struct SystemInfo => SystemInfoBuilder {
        local_address: String,
        server_name: String,
        version: String,
        product_name: String,
        /// Deprecated upstream.
        operating_system: String,
        id: String,
        startup_wizard_completed: bool,
        /// Deprecated upstream.
        operating_system_display_name: String,
        package_name: String,
        has_pending_restart: bool,
        is_shutting_down: bool,
        supports_library_monitor: bool,
        web_socket_port_number: i32,
        completed_installations: Vec<InstallationInfo>; push add_completed_installation: InstallationInfo,
        /// Deprecated upstream.
        can_self_restart: bool = true,
        /// Deprecated upstream.
        can_launch_web_browser: bool = false,
        /// Deprecated upstream.
        program_data_path: String,
        /// Deprecated upstream.
        web_path: String,
        /// Deprecated upstream.
        items_by_name_path: String,
        /// Deprecated upstream.
        cache_path: String,
        /// Deprecated upstream.
        log_path: String,
        /// Deprecated upstream.
        internal_metadata_path: String,
        /// Deprecated upstream.
        transcoding_temp_path: String,
        cast_receiver_applications: Vec<CastReceiverApplication>; push add_cast_receiver_application: CastReceiverApplication,
        /// Deprecated upstream.
        has_update_available: bool = false,
        /// Deprecated upstream.
        encoder_location: String = String::from("System"),
        /// Deprecated upstream.
        system_architecture: String = String::from("X64"),
    }
}

dto! {
    /// `/System/Info/Public`, available without authentication.
    pub struct PublicSystemInfo => PublicSystemInfoBuilder {
        local_address: String,
        server_name: String,
        version: String,
        product_name: String,
        /// Deprecated upstream.
        operating_system: String,
        id: String,
        startup_wizard_completed: bool,
    }
}

dto! {
    pub struct TaskResult => TaskResultBuilder {
        start_time_utc: DateTime<FixedOffset>,
        end_time_utc: DateTime<FixedOffset>,
        status: TaskCompletionStatus,
        name: String,
        key: String,
        id: String,
        error_message: String,
        long_error_message: String,
    }
}

impl TaskResult {
    pub fn duration(&self) -> Option<chrono::TimeDelta> {
        Some(self.end_time_utc? - self.start_time_utc?)
    }
}

dto! {
    pub struct TaskTriggerInfo => TaskTriggerInfoBuilder {
        r#type: TaskTriggerInfoType,
        time_of_day_ticks: Ticks,
        interval_ticks: Ticks,
        day_of_week: crate::kinds::DayOfWeek,
        max_runtime_ticks: Ticks,
    }
}

dto! {
    /// A scheduled task and its last run.
    pub struct TaskInfo => TaskInfoBuilder {
        name: String,
        state: TaskState,
        current_progress_percentage: OrderedFloat<f64>,
        id: String,
        last_execution_result: TaskResult,
        triggers: Vec<TaskTriggerInfo>; push add_trigger: TaskTriggerInfo,
        description: String,
        category: String,
        is_hidden: bool,
        key: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Dto;

    #[test]
    fn deprecated_fields_stay_on_the_wire() {
        let info = SystemInfo::builder()
            .server_name("den")
            .operating_system("Linux")
            .log_path("/var/log/jellyfin")
            .build();

        let json = info.to_json().expect("serialize");
        assert!(json.contains("\"OperatingSystem\":\"Linux\""));
        assert!(json.contains("\"LogPath\":\"/var/log/jellyfin\""));
        assert!(json.contains("\"CanSelfRestart\":true"));
        assert!(json.contains("\"EncoderLocation\":\"System\""));
        assert!(json.contains("\"SystemArchitecture\":\"X64\""));
    }

    #[test]
    fn parsed_info_does_not_invent_defaults() {
        let info = SystemInfo::from_json(r#"{"ServerName":"den"}"#).expect("deserialize");
        assert_eq!(info.can_self_restart, None);
        assert_eq!(info.encoder_location, None);
    }

    #[test]
    fn package_manifest_is_camel_case() {
        let json = r#"{"name":"Trakt","guid":"4fe3201e-d6ae-4f2e-8917-e12bda571281","versions":[{"version":"25.0.0.0","VersionNumber":"25.0.0.0","targetAbi":"10.10.0.0"}]}"#;
        let package = PackageInfo::from_json(json).expect("deserialize");

        let versions = package.versions.as_deref().expect("versions");
        assert_eq!(versions[0].target_abi.as_deref(), Some("10.10.0.0"));
        assert_eq!(versions[0].version_number.as_deref(), Some("25.0.0.0"));
        assert_eq!(package.to_json().expect("serialize"), json);
    }

    #[test]
    fn task_result_duration() {
        let result = TaskResult::from_json(
            r#"{"StartTimeUtc":"2026-01-01T03:00:00Z","EndTimeUtc":"2026-01-01T03:02:30Z","Status":"Completed"}"#,
        )
        .expect("deserialize");

        assert_eq!(result.duration(), Some(chrono::TimeDelta::seconds(150)));
        assert_eq!(TaskResult::default().duration(), None);
    }
}
