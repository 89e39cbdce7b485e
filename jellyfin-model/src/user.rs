//! Per-user authorization policy and preferences.

use ordered_float::OrderedFloat;
use uuid::Uuid;

dto_enum! {
    pub enum UnratedItem {
        Movie => "Movie",
        Trailer => "Trailer",
        Series => "Series",
        Music => "Music",
        Book => "Book",
        LiveTvChannel => "LiveTvChannel",
        LiveTvProgram => "LiveTvProgram",
        ChannelContent => "ChannelContent",
        Other => "Other",
    }
}

dto_enum! {
    pub enum SyncPlayUserAccessType {
        CreateAndJoinGroups => "CreateAndJoinGroups",
        JoinGroups => "JoinGroups",
        None => "None",
    }
}

dto_enum! {
    /// Day selector for access schedules, including the grouped forms.
    pub enum DynamicDayOfWeek {
        Sunday => "Sunday",
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
        Everyday => "Everyday",
        Weekday => "Weekday",
        Weekend => "Weekend",
    }
}

dto_enum! {
    pub enum SubtitlePlaybackMode {
        Default => "Default",
        Always => "Always",
        OnlyForced => "OnlyForced",
        None => "None",
        Smart => "Smart",
    }
}

dto! {
    /// Time window during which a user may sign in. Hours are fractional,
    /// `6.5` meaning 06:30.
    pub struct AccessSchedule => AccessScheduleBuilder {
        id: i32,
        user_id: Uuid,
        day_of_week: DynamicDayOfWeek,
        start_hour: OrderedFloat<f64>,
        end_hour: OrderedFloat<f64>,
    }
}

dto! {
    pub struct UserPolicy => UserPolicyBuilder {
        is_administrator: bool,
        is_hidden: bool,
        enable_collection_management: bool = false,
        enable_subtitle_management: bool = false,
        enable_lyric_management: bool = false,
        is_disabled: bool,
        max_parental_rating: i32,
        max_parental_sub_rating: i32,
        blocked_tags: Vec<String>; push add_blocked_tag: String,
        allowed_tags: Vec<String>; push add_allowed_tag: String,
        enable_user_preference_access: bool,
        access_schedules: Vec<AccessSchedule>; push add_access_schedule: AccessSchedule,
        block_unrated_items: Vec<UnratedItem>; push add_block_unrated_item: UnratedItem,
        enable_remote_control_of_other_users: bool,
        enable_shared_device_control: bool,
        enable_remote_access: bool,
        enable_live_tv_management: bool,
        enable_live_tv_access: bool,
        enable_media_playback: bool,
        enable_audio_playback_transcoding: bool,
        enable_video_playback_transcoding: bool,
        enable_playback_remuxing: bool,
        force_remote_source_transcoding: bool,
        enable_content_deletion: bool,
        enable_content_deletion_from_folders: Vec<String>; push add_content_deletion_folder: String,
        enable_content_downloading: bool,
        enable_sync_transcoding: bool,
        enable_media_conversion: bool,
        enabled_devices: Vec<String>; push add_enabled_device: String,
        enable_all_devices: bool,
        enabled_channels: Vec<Uuid>; push add_enabled_channel: Uuid,
        enable_all_channels: bool,
        enabled_folders: Vec<Uuid>; push add_enabled_folder: Uuid,
        enable_all_folders: bool,
        invalid_login_attempt_count: i32,
        login_attempts_before_lockout: i32,
        max_active_sessions: i32,
        enable_public_sharing: bool,
        blocked_media_folders: Vec<Uuid>; push add_blocked_media_folder: Uuid,
        blocked_channels: Vec<Uuid>; push add_blocked_channel: Uuid,
        remote_client_bitrate_limit: i32,
        authentication_provider_id: String,
        password_reset_provider_id: String,
        sync_play_access: SyncPlayUserAccessType,
    }
}

dto! {
    pub struct UserConfiguration => UserConfigurationBuilder {
        audio_language_preference: String,
        play_default_audio_track: bool,
        subtitle_language_preference: String,
        display_missing_episodes: bool,
        grouped_folders: Vec<Uuid> = Vec::new(); push add_grouped_folder: Uuid,
        subtitle_mode: SubtitlePlaybackMode,
        display_collections_view: bool,
        enable_local_password: bool,
        ordered_views: Vec<Uuid> = Vec::new(); push add_ordered_view: Uuid,
        latest_items_excludes: Vec<Uuid> = Vec::new(); push add_latest_items_exclude: Uuid,
        my_media_excludes: Vec<Uuid> = Vec::new(); push add_my_media_exclude: Uuid,
        hide_played_in_latest: bool,
        remember_audio_selections: bool,
        remember_subtitle_selections: bool,
        enable_next_episode_auto_play: bool,
        cast_receiver_id: String,
    }
}
