//! Library items and their satellite objects.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, TimeDelta};
use ordered_float::OrderedFloat;
use uuid::Uuid;

use crate::kinds::{BaseItemKind, DayOfWeek, MediaType};
use crate::media::{IsoType, MediaSourceInfo, MediaStream, Video3DFormat, VideoType};
use crate::ticks::Ticks;

dto_enum! {
    pub enum ExtraType {
        Unknown => "Unknown",
        Clip => "Clip",
        Trailer => "Trailer",
        BehindTheScenes => "BehindTheScenes",
        DeletedScene => "DeletedScene",
        Interview => "Interview",
        Scene => "Scene",
        Sample => "Sample",
        ThemeSong => "ThemeSong",
        ThemeVideo => "ThemeVideo",
        Featurette => "Featurette",
        Short => "Short",
    }
}

dto_enum! {
    pub enum PlayAccess {
        Full => "Full",
        None => "None",
    }
}

dto_enum! {
    /// Library collection type. Lower case on the wire.
    pub enum CollectionType {
        Unknown => "unknown",
        Movies => "movies",
        TvShows => "tvshows",
        Music => "music",
        MusicVideos => "musicvideos",
        Trailers => "trailers",
        HomeVideos => "homevideos",
        BoxSets => "boxsets",
        Books => "books",
        Photos => "photos",
        LiveTv => "livetv",
        Playlists => "playlists",
        Folders => "folders",
    }
}

dto_enum! {
    pub enum LocationType {
        FileSystem => "FileSystem",
        Remote => "Remote",
        Virtual => "Virtual",
        Offline => "Offline",
    }
}

dto_enum! {
    pub enum ImageOrientation {
        TopLeft => "TopLeft",
        TopRight => "TopRight",
        BottomRight => "BottomRight",
        BottomLeft => "BottomLeft",
        LeftTop => "LeftTop",
        RightTop => "RightTop",
        RightBottom => "RightBottom",
        LeftBottom => "LeftBottom",
    }
}

dto_enum! {
    pub enum ChannelType {
        Tv => "TV",
        Radio => "Radio",
    }
}

dto_enum! {
    pub enum ProgramAudio {
        Mono => "Mono",
        Stereo => "Stereo",
        Dolby => "Dolby",
        DolbyDigital => "DolbyDigital",
        Thx => "Thx",
        Atmos => "Atmos",
    }
}

dto_enum! {
    pub enum MetadataField {
        Cast => "Cast",
        Genres => "Genres",
        ProductionLocations => "ProductionLocations",
        Studios => "Studios",
        Tags => "Tags",
        Name => "Name",
        Overview => "Overview",
        Runtime => "Runtime",
        OfficialRating => "OfficialRating",
    }
}

dto_enum! {
    pub enum PersonKind {
        Unknown => "Unknown",
        Actor => "Actor",
        Director => "Director",
        Composer => "Composer",
        Writer => "Writer",
        GuestStar => "GuestStar",
        Producer => "Producer",
        Conductor => "Conductor",
        Lyricist => "Lyricist",
        Arranger => "Arranger",
        Engineer => "Engineer",
        Mixer => "Mixer",
        Remixer => "Remixer",
        Creator => "Creator",
        Artist => "Artist",
        AlbumArtist => "AlbumArtist",
        Author => "Author",
        Illustrator => "Illustrator",
        Penciller => "Penciller",
        Inker => "Inker",
        Colorist => "Colorist",
        Letterer => "Letterer",
        CoverArtist => "CoverArtist",
        Editor => "Editor",
        Translator => "Translator",
    }
}

dto! {
    pub struct ExternalUrl => ExternalUrlBuilder {
        name: String,
        url: String,
    }
}

dto! {
    pub struct MediaUrl => MediaUrlBuilder {
        url: String,
        name: String,
    }
}

dto! {
    pub struct NameGuidPair => NameGuidPairBuilder {
        name: String,
        id: Uuid,
    }
}

dto! {
    /// Blurhash strings keyed by image tag, grouped by image type.
    pub struct ImageBlurHashes => ImageBlurHashesBuilder {
        primary: BTreeMap<String, Option<String>>; insert_nullable insert_primary: String => String,
        art: BTreeMap<String, Option<String>>; insert_nullable insert_art: String => String,
        backdrop: BTreeMap<String, Option<String>>; insert_nullable insert_backdrop: String => String,
        banner: BTreeMap<String, Option<String>>; insert_nullable insert_banner: String => String,
        logo: BTreeMap<String, Option<String>>; insert_nullable insert_logo: String => String,
        thumb: BTreeMap<String, Option<String>>; insert_nullable insert_thumb: String => String,
        disc: BTreeMap<String, Option<String>>; insert_nullable insert_disc: String => String,
        r#box: BTreeMap<String, Option<String>>; insert_nullable insert_box: String => String,
        screenshot: BTreeMap<String, Option<String>>; insert_nullable insert_screenshot: String => String,
        menu: BTreeMap<String, Option<String>>; insert_nullable insert_menu: String => String,
        chapter: BTreeMap<String, Option<String>>; insert_nullable insert_chapter: String => String,
        box_rear: BTreeMap<String, Option<String>>; insert_nullable insert_box_rear: String => String,
        profile: BTreeMap<String, Option<String>>; insert_nullable insert_profile: String => String,
    }
}

dto! {
    pub struct BaseItemPerson => BaseItemPersonBuilder {
        name: String,
        id: Uuid,
        role: String,
        r#type: PersonKind,
        primary_image_tag: String,
        image_blur_hashes: ImageBlurHashes,
    }
}

dto! {
    /// Per-user state of an item: played flag, resume position, rating.
    pub struct UserItemDataDto => UserItemDataDtoBuilder {
        rating: OrderedFloat<f64>,
        played_percentage: OrderedFloat<f64>,
        unplayed_item_count: i32,
        playback_position_ticks: Ticks,
        play_count: i32,
        is_favorite: bool,
        likes: bool,
        last_played_date: DateTime<FixedOffset>,
        played: bool,
        key: String,
        item_id: Uuid,
    }
}

dto! {
    pub struct ChapterInfo => ChapterInfoBuilder {
        start_position_ticks: Ticks,
        name: String,
        image_path: String,
        image_date_modified: DateTime<FixedOffset>,
        image_tag: String,
    }
}

dto! {
    pub struct TrickplayInfoDto => TrickplayInfoDtoBuilder {
        width: i32,
        height: i32,
        tile_width: i32,
        tile_height: i32,
        thumbnail_count: i32,
        interval: i32,
        bandwidth: i32,
    }
}

dto! {
    /// Any library item: movie, episode, channel, program, folder, ...
    ///
    /// Which fields are populated depends on the item kind and on the
    /// `Fields` the query asked for.
    pub struct BaseItemDto => BaseItemDtoBuilder {
        name: String,
        original_title: String,
        server_id: String,
        id: Uuid,
        etag: String,
        source_type: String,
        playlist_item_id: String,
        date_created: DateTime<FixedOffset>,
        date_last_media_added: DateTime<FixedOffset>,
        extra_type: ExtraType,
        airs_before_season_number: i32,
        airs_after_season_number: i32,
        airs_before_episode_number: i32,
        can_delete: bool,
        can_download: bool,
        has_lyrics: bool,
        has_subtitles: bool,
        preferred_metadata_language: String,
        preferred_metadata_country_code: String,
        container: String,
        sort_name: String,
        forced_sort_name: String,
        #[serde(rename = "Video3DFormat")]
        video_3d_format: Video3DFormat,
        premiere_date: DateTime<FixedOffset>,
        external_urls: Vec<ExternalUrl>; push add_external_url: ExternalUrl,
        media_sources: Vec<MediaSourceInfo>; push add_media_source: MediaSourceInfo,
        critic_rating: OrderedFloat<f32>,
        production_locations: Vec<String>; push add_production_location: String,
        path: String,
        enable_media_source_display: bool,
        official_rating: String,
        custom_rating: String,
        channel_id: Uuid,
        channel_name: String,
        overview: String,
        taglines: Vec<String>; push add_tagline: String,
        genres: Vec<String>; push add_genre: String,
        community_rating: OrderedFloat<f32>,
        cumulative_run_time_ticks: Ticks,
        run_time_ticks: Ticks,
        play_access: PlayAccess,
        aspect_ratio: String,
        production_year: i32,
        is_place_holder: bool,
        number: String,
        channel_number: String,
        index_number: i32,
        index_number_end: i32,
        parent_index_number: i32,
        remote_trailers: Vec<MediaUrl>; push add_remote_trailer: MediaUrl,
        provider_ids: BTreeMap<String, Option<String>>; insert_nullable insert_provider_id: String => String,
        #[serde(rename = "IsHD")]
        is_hd: bool,
        is_folder: bool,
        parent_id: Uuid,
        r#type: BaseItemKind,
        people: Vec<BaseItemPerson>; push add_person: BaseItemPerson,
        studios: Vec<NameGuidPair>; push add_studio: NameGuidPair,
        genre_items: Vec<NameGuidPair>; push add_genre_item: NameGuidPair,
        parent_logo_item_id: Uuid,
        parent_backdrop_item_id: Uuid,
        parent_backdrop_image_tags: Vec<String>; push add_parent_backdrop_image_tag: String,
        local_trailer_count: i32,
        user_data: UserItemDataDto,
        recursive_item_count: i32,
        child_count: i32,
        series_name: String,
        series_id: Uuid,
        season_id: Uuid,
        special_feature_count: i32,
        display_preferences_id: String,
        status: String,
        air_time: String,
        air_days: Vec<DayOfWeek>; push add_air_day: DayOfWeek,
        tags: Vec<String>; push add_tag: String,
        primary_image_aspect_ratio: OrderedFloat<f64>,
        artists: Vec<String>; push add_artist: String,
        artist_items: Vec<NameGuidPair>; push add_artist_item: NameGuidPair,
        album: String,
        collection_type: CollectionType,
        display_order: String,
        album_id: Uuid,
        album_primary_image_tag: String,
        series_primary_image_tag: String,
        album_artist: String,
        album_artists: Vec<NameGuidPair>; push add_album_artist: NameGuidPair,
        season_name: String,
        media_streams: Vec<MediaStream>; push add_media_stream: MediaStream,
        video_type: VideoType,
        part_count: i32,
        media_source_count: i32,
        image_tags: BTreeMap<String, Option<String>>; insert_nullable insert_image_tag: String => String,
        backdrop_image_tags: Vec<String>; push add_backdrop_image_tag: String,
        screenshot_image_tags: Vec<String>; push add_screenshot_image_tag: String,
        parent_logo_image_tag: String,
        parent_art_item_id: Uuid,
        parent_art_image_tag: String,
        series_thumb_image_tag: String,
        image_blur_hashes: ImageBlurHashes,
        series_studio: String,
        parent_thumb_item_id: Uuid,
        parent_thumb_image_tag: String,
        parent_primary_image_item_id: Uuid,
        parent_primary_image_tag: String,
        chapters: Vec<ChapterInfo>; push add_chapter: ChapterInfo,
        trickplay: BTreeMap<String, BTreeMap<String, TrickplayInfoDto>>; insert insert_trickplay: String => BTreeMap<String, TrickplayInfoDto>,
        location_type: LocationType,
        iso_type: IsoType,
        media_type: MediaType = MediaType::Unknown,
        end_date: DateTime<FixedOffset>,
        locked_fields: Vec<MetadataField>; push add_locked_field: MetadataField,
        trailer_count: i32,
        movie_count: i32,
        series_count: i32,
        program_count: i32,
        episode_count: i32,
        song_count: i32,
        album_count: i32,
        artist_count: i32,
        music_video_count: i32,
        lock_data: bool,
        width: i32,
        height: i32,
        camera_make: String,
        camera_model: String,
        software: String,
        exposure_time: OrderedFloat<f64>,
        focal_length: OrderedFloat<f64>,
        image_orientation: ImageOrientation,
        aperture: OrderedFloat<f64>,
        shutter_speed: OrderedFloat<f64>,
        latitude: OrderedFloat<f64>,
        longitude: OrderedFloat<f64>,
        altitude: OrderedFloat<f64>,
        iso_speed_rating: i32,
        series_timer_id: String,
        program_id: String,
        channel_primary_image_tag: String,
        start_date: DateTime<FixedOffset>,
        completion_percentage: OrderedFloat<f64>,
        is_repeat: bool,
        episode_title: String,
        channel_type: ChannelType,
        audio: ProgramAudio,
        is_movie: bool,
        is_sports: bool,
        is_series: bool,
        is_live: bool,
        is_news: bool,
        is_kids: bool,
        is_premiere: bool,
        timer_id: String,
        normalization_gain: OrderedFloat<f32>,
        current_program: Box<BaseItemDto>,
    }
}

impl BaseItemDto {
    pub fn run_time(&self) -> Option<TimeDelta> {
        self.run_time_ticks.map(|ticks| ticks.as_duration())
    }

    /// Resume position for the requesting user, if any.
    pub fn resume_position(&self) -> Option<Ticks> {
        self.user_data
            .as_ref()
            .and_then(|data| data.playback_position_ticks)
            .filter(|ticks| ticks.value() > 0)
    }

    pub fn provider_id(&self, provider: &str) -> Option<&str> {
        self.provider_ids
            .as_ref()
            .and_then(|ids| ids.get(provider))
            .and_then(|id| id.as_deref())
    }
}

dto! {
    pub struct BaseItemDtoQueryResult => BaseItemDtoQueryResultBuilder {
        items: Vec<BaseItemDto>; push add_item: BaseItemDto,
        total_record_count: i32,
        start_index: i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Dto;

    #[test]
    fn current_program_nests_recursively() {
        let channel = BaseItemDto::builder()
            .name("BBC One")
            .r#type(BaseItemKind::TvChannel)
            .current_program(
                BaseItemDto::builder()
                    .name("News at Six")
                    .r#type(BaseItemKind::Program)
                    .is_news(true)
                    .build(),
            )
            .build();

        let json = channel.to_json().expect("serialize");
        assert!(json.contains("\"CurrentProgram\":{"));
        let back = BaseItemDto::from_json(&json).expect("deserialize");
        assert_eq!(back, channel);
        assert_eq!(
            back.current_program.and_then(|program| program.name).as_deref(),
            Some("News at Six")
        );
    }

    #[test]
    fn is_hd_and_box_blurhash_use_upstream_names() {
        let item = BaseItemDto::builder()
            .is_hd(true)
            .image_blur_hashes(
                ImageBlurHashes::builder()
                    .insert_box("tag", "LEHV6nWB2yk8")
                    .build(),
            )
            .build();

        let json = item.to_json().expect("serialize");
        assert!(json.contains("\"IsHD\":true"));
        assert!(json.contains("\"Box\":{\"tag\":\"LEHV6nWB2yk8\"}"));
    }

    #[test]
    fn helpers_read_ticks_and_provider_ids() {
        let item = BaseItemDto::builder()
            .run_time_ticks(Ticks::from_seconds(5_400))
            .insert_provider_id("Tmdb", "603")
            .user_data(UserItemDataDto::builder().playback_position_ticks(Ticks::ZERO).build())
            .build();

        assert_eq!(item.run_time(), Some(TimeDelta::minutes(90)));
        assert_eq!(item.provider_id("Tmdb"), Some("603"));
        assert_eq!(item.provider_id("Imdb"), None);
        assert_eq!(item.resume_position(), None);
    }
}
