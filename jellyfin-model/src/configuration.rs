//! Server-wide configuration objects (`/System/Configuration`).

dto_enum! {
    pub enum ImageSavingConvention {
        Legacy => "Legacy",
        Compatible => "Compatible",
    }
}

dto_enum! {
    pub enum ImageResolution {
        MatchSource => "MatchSource",
        P144 => "P144",
        P240 => "P240",
        P360 => "P360",
        P480 => "P480",
        P720 => "P720",
        P1080 => "P1080",
        P1440 => "P1440",
        P2160 => "P2160",
    }
}

dto_enum! {
    pub enum TrickplayScanBehavior {
        Blocking => "Blocking",
        NonBlocking => "NonBlocking",
    }
}

dto_enum! {
    pub enum ProcessPriorityClass {
        Normal => "Normal",
        Idle => "Idle",
        High => "High",
        RealTime => "RealTime",
        BelowNormal => "BelowNormal",
        AboveNormal => "AboveNormal",
    }
}

dto! {
    /// Generic name/value pair, used for content type overrides and channel
    /// mappings.
    pub struct NameValuePair => NameValuePairBuilder {
        name: String,
        value: String,
    }
}

dto! {
    pub struct RepositoryInfo => RepositoryInfoBuilder {
        name: String,
        url: String,
        enabled: bool,
    }
}

dto! {
    pub struct PathSubstitution => PathSubstitutionBuilder {
        from: String,
        to: String,
    }
}

dto! {
    pub struct CastReceiverApplication => CastReceiverApplicationBuilder {
        id: String,
        name: String,
    }
}

dto! {
    /// Per item-type metadata fetcher and saver ordering.
    pub struct MetadataOptions => MetadataOptionsBuilder {
        item_type: String,
        disabled_metadata_savers: Vec<String>; push add_disabled_metadata_saver: String,
        local_metadata_reader_order: Vec<String>; push add_local_metadata_reader: String,
        disabled_metadata_fetchers: Vec<String>; push add_disabled_metadata_fetcher: String,
        metadata_fetcher_order: Vec<String>; push add_metadata_fetcher: String,
        disabled_image_fetchers: Vec<String>; push add_disabled_image_fetcher: String,
        image_fetcher_order: Vec<String>; push add_image_fetcher: String,
    }
}

dto! {
    pub struct TrickplayOptions => TrickplayOptionsBuilder {
        enable_hw_acceleration: bool,
        enable_hw_encoding: bool,
        enable_key_frame_only_extraction: bool,
        scan_behavior: TrickplayScanBehavior,
        process_priority: ProcessPriorityClass,
        interval: i32,
        width_resolutions: Vec<i32>; push add_width_resolution: i32,
        tile_width: i32,
        tile_height: i32,
        qscale: i32,
        jpeg_quality: i32,
        process_threads: i32,
    }
}

dto! {
    /// Server configuration as returned by and posted to
    /// `/System/Configuration`.
    pub struct ServerConfiguration => ServerConfigurationBuilder {
        log_file_retention_days: i32,
        is_startup_wizard_completed: bool,
        cache_path: String,
        previous_version: String,
        previous_version_str: String,
        enable_metrics: bool,
        enable_normalized_item_by_name_ids: bool,
        is_port_authorized: bool,
        quick_connect_available: bool,
        enable_case_sensitive_item_ids: bool,
        disable_live_tv_channel_user_data_name: bool,
        metadata_path: String,
        preferred_metadata_language: String,
        metadata_country_code: String,
        sort_replace_characters: Vec<String> = Vec::new(); push add_sort_replace_character: String,
        sort_remove_characters: Vec<String> = Vec::new(); push add_sort_remove_character: String,
        sort_remove_words: Vec<String> = Vec::new(); push add_sort_remove_word: String,
        min_resume_pct: i32,
        max_resume_pct: i32,
        min_resume_duration_seconds: i32,
        min_audiobook_resume: i32,
        max_audiobook_resume: i32,
        inactive_session_threshold: i32,
        library_monitor_delay: i32,
        library_update_duration: i32,
        cache_size: i32,
        image_saving_convention: ImageSavingConvention,
        metadata_options: Vec<MetadataOptions> = Vec::new(); push add_metadata_options: MetadataOptions,
        skip_deserialization_for_basic_types: bool,
        server_name: String,
        #[serde(rename = "UICulture")]
        ui_culture: String,
        save_metadata_hidden: bool,
        content_types: Vec<NameValuePair> = Vec::new(); push add_content_type: NameValuePair,
        remote_client_bitrate_limit: i32,
        enable_folder_view: bool,
        enable_grouping_movies_into_collections: bool,
        enable_grouping_shows_into_collections: bool,
        display_specials_within_seasons: bool,
        codecs_used: Vec<String> = Vec::new(); push add_codec_used: String,
        plugin_repositories: Vec<RepositoryInfo> = Vec::new(); push add_plugin_repository: RepositoryInfo,
        enable_external_content_in_suggestions: bool,
        image_extraction_timeout_ms: i32,
        path_substitutions: Vec<PathSubstitution> = Vec::new(); push add_path_substitution: PathSubstitution,
        enable_slow_response_warning: bool,
        slow_response_threshold_ms: i64,
        cors_hosts: Vec<String> = Vec::new(); push add_cors_host: String,
        activity_log_retention_days: i32,
        library_scan_fanout_concurrency: i32,
        library_metadata_refresh_concurrency: i32,
        allow_client_log_upload: bool,
        dummy_chapter_duration: i32,
        chapter_image_resolution: ImageResolution,
        parallel_image_encoding_limit: i32,
        cast_receiver_applications: Vec<CastReceiverApplication> = Vec::new(); push add_cast_receiver_application: CastReceiverApplication,
        trickplay_options: TrickplayOptions,
        enable_legacy_authorization: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Dto;

    #[test]
    fn ui_culture_keeps_upstream_spelling() {
        let config = ServerConfiguration::builder()
            .ui_culture("en-US")
            .server_name("living-room")
            .build();

        let json = config.to_json().expect("serialize");
        assert!(json.contains("\"UICulture\":\"en-US\""));
        assert!(!json.contains("UiCulture"));
        assert_eq!(ServerConfiguration::from_json(&json).expect("deserialize"), config);
    }

    #[test]
    fn list_defaults_are_present_but_empty() {
        let config = ServerConfiguration::default();
        assert_eq!(config.cors_hosts, Some(Vec::new()));
        assert_eq!(config.trickplay_options, None);

        let json = config.to_json().expect("serialize");
        assert!(json.contains("\"CorsHosts\":[]"));
        // Empty lists carry no query pairs.
        assert_eq!(config.to_url_query_string().expect("query"), "");
    }
}
