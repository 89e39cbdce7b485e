//! Live TV: guide queries, tuner and listings configuration, recordings.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::configuration::NameValuePair;
use crate::item::BaseItemDto;
use crate::kinds::{DayOfWeek, ImageType, ItemFields, ItemSortBy, SortOrder};
use crate::ticks::Ticks;

dto_enum! {
    pub enum KeepUntil {
        UntilDeleted => "UntilDeleted",
        UntilSpaceNeeded => "UntilSpaceNeeded",
        UntilWatched => "UntilWatched",
        UntilDate => "UntilDate",
    }
}

dto_enum! {
    pub enum RecordingStatus {
        New => "New",
        InProgress => "InProgress",
        Completed => "Completed",
        Cancelled => "Cancelled",
        ConflictedOk => "ConflictedOk",
        ConflictedNotOk => "ConflictedNotOk",
        Error => "Error",
    }
}

dto_enum! {
    pub enum DayPattern {
        Daily => "Daily",
        Weekdays => "Weekdays",
        Weekends => "Weekends",
    }
}

dto! {
    /// Guide search filters, posted to `/LiveTv/Programs`.
    pub struct GetProgramsDto => GetProgramsDtoBuilder {
        channel_ids: Vec<Uuid>; push add_channel_id: Uuid,
        user_id: Uuid,
        min_start_date: DateTime<FixedOffset>,
        has_aired: bool,
        is_airing: bool,
        max_start_date: DateTime<FixedOffset>,
        min_end_date: DateTime<FixedOffset>,
        max_end_date: DateTime<FixedOffset>,
        is_movie: bool,
        is_series: bool,
        is_news: bool,
        is_kids: bool,
        is_sports: bool,
        start_index: i32,
        limit: i32,
        sort_by: Vec<ItemSortBy>; push add_sort_by: ItemSortBy,
        sort_order: Vec<SortOrder>; push add_sort_order: SortOrder,
        genres: Vec<String>; push add_genre: String,
        genre_ids: Vec<Uuid>; push add_genre_id: Uuid,
        enable_images: bool,
        enable_total_record_count: bool = true,
        image_type_limit: i32,
        enable_image_types: Vec<ImageType>; push add_enable_image_type: ImageType,
        enable_user_data: bool,
        series_timer_id: String,
        library_series_id: Uuid,
        fields: Vec<ItemFields>; push add_field: ItemFields,
    }
}

dto! {
    pub struct TunerHostInfo => TunerHostInfoBuilder {
        id: String,
        url: String,
        r#type: String,
        device_id: String,
        friendly_name: String,
        import_favorites_only: bool,
        #[serde(rename = "AllowHWTranscoding")]
        allow_hw_transcoding: bool,
        allow_fmp4_transcoding_container: bool,
        allow_stream_sharing: bool,
        fallback_max_streaming_bitrate: i32,
        enable_stream_looping: bool,
        source: String,
        tuner_count: i32,
        user_agent: String,
        ignore_dts: bool,
        read_at_native_framerate: bool,
    }
}

dto! {
    /// An electronic program guide source (XMLTV file, Schedules Direct, ...).
    pub struct ListingsProviderInfo => ListingsProviderInfoBuilder {
        id: String,
        r#type: String,
        username: String,
        password: String,
        listings_id: String,
        zip_code: String,
        country: String,
        path: String,
        enabled_tuners: Vec<String>; push add_enabled_tuner: String,
        enable_all_tuners: bool,
        news_categories: Vec<String>; push add_news_category: String,
        sports_categories: Vec<String>; push add_sports_category: String,
        kids_categories: Vec<String>; push add_kids_category: String,
        movie_categories: Vec<String>; push add_movie_category: String,
        channel_mappings: Vec<NameValuePair>; push add_channel_mapping: NameValuePair,
        movie_prefix: String,
        preferred_language: String,
        user_agent: String,
    }
}

dto! {
    pub struct LiveTvOptions => LiveTvOptionsBuilder {
        guide_days: i32,
        recording_path: String,
        movie_recording_path: String,
        series_recording_path: String,
        enable_recording_subfolders: bool,
        enable_original_audio_with_encoded_recordings: bool,
        tuner_hosts: Vec<TunerHostInfo>; push add_tuner_host: TunerHostInfo,
        listing_providers: Vec<ListingsProviderInfo>; push add_listing_provider: ListingsProviderInfo,
        pre_padding_seconds: i32,
        post_padding_seconds: i32,
        media_locations_created: Vec<String>; push add_media_location_created: String,
        recording_post_processor: String,
        recording_post_processor_arguments: String,
        #[serde(rename = "SaveRecordingNFO")]
        save_recording_nfo: bool,
        save_recording_images: bool,
    }
}

dto! {
    /// A scheduled, running or finished single recording.
    pub struct TimerInfoDto => TimerInfoDtoBuilder {
        id: String,
        r#type: String,
        server_id: String,
        external_id: String,
        channel_id: Uuid,
        external_channel_id: String,
        channel_name: String,
        channel_primary_image_tag: String,
        program_id: String,
        external_program_id: String,
        name: String,
        overview: String,
        start_date: DateTime<FixedOffset>,
        end_date: DateTime<FixedOffset>,
        service_name: String,
        priority: i32,
        pre_padding_seconds: i32,
        post_padding_seconds: i32,
        is_pre_padding_required: bool,
        parent_backdrop_item_id: String,
        parent_backdrop_image_tags: Vec<String>; push add_parent_backdrop_image_tag: String,
        is_post_padding_required: bool,
        keep_until: KeepUntil,
        status: RecordingStatus,
        series_timer_id: String,
        external_series_timer_id: String,
        run_time_ticks: Ticks,
        program_info: BaseItemDto,
    }
}

impl TimerInfoDto {
    pub fn is_recording(&self) -> bool {
        self.status == Some(RecordingStatus::InProgress)
    }
}

dto! {
    /// A recurring recording rule.
    pub struct SeriesTimerInfoDto => SeriesTimerInfoDtoBuilder {
        id: String,
        r#type: String,
        server_id: String,
        external_id: String,
        channel_id: Uuid,
        external_channel_id: String,
        channel_name: String,
        channel_primary_image_tag: String,
        program_id: String,
        external_program_id: String,
        name: String,
        overview: String,
        start_date: DateTime<FixedOffset>,
        end_date: DateTime<FixedOffset>,
        service_name: String,
        priority: i32,
        pre_padding_seconds: i32,
        post_padding_seconds: i32,
        is_pre_padding_required: bool,
        parent_backdrop_item_id: String,
        parent_backdrop_image_tags: Vec<String>; push add_parent_backdrop_image_tag: String,
        is_post_padding_required: bool,
        keep_until: KeepUntil,
        record_any_time: bool,
        skip_episodes_in_library: bool,
        record_any_channel: bool,
        keep_up_to: i32,
        record_new_only: bool,
        days: Vec<DayOfWeek>; push add_day: DayOfWeek,
        day_pattern: DayPattern,
        image_tags: BTreeMap<String, Option<String>>; insert_nullable insert_image_tag: String => String,
        parent_thumb_item_id: String,
        parent_thumb_image_tag: String,
        parent_primary_image_item_id: Uuid,
        parent_primary_image_tag: String,
    }
}

dto! {
    pub struct TimerInfoDtoQueryResult => TimerInfoDtoQueryResultBuilder {
        items: Vec<TimerInfoDto>; push add_item: TimerInfoDto,
        total_record_count: i32,
        start_index: i32,
    }
}

dto! {
    pub struct SeriesTimerInfoDtoQueryResult => SeriesTimerInfoDtoQueryResultBuilder {
        items: Vec<SeriesTimerInfoDto>; push add_item: SeriesTimerInfoDto,
        total_record_count: i32,
        start_index: i32,
    }
}
