//! Playback negotiation and the start/progress/stop reports a player sends.

use ordered_float::OrderedFloat;
use uuid::Uuid;

use crate::device_profile::DeviceProfile;
use crate::item::BaseItemDto;
use crate::kinds::MediaType;
use crate::media::MediaSourceInfo;
use crate::ticks::Ticks;

dto_enum! {
    pub enum PlayMethod {
        Transcode => "Transcode",
        DirectStream => "DirectStream",
        DirectPlay => "DirectPlay",
    }
}

dto_enum! {
    pub enum RepeatMode {
        RepeatNone => "RepeatNone",
        RepeatAll => "RepeatAll",
        RepeatOne => "RepeatOne",
    }
}

dto_enum! {
    pub enum PlaybackOrder {
        Default => "Default",
        Shuffle => "Shuffle",
    }
}

dto_enum! {
    pub enum PlaybackErrorCode {
        NotAllowed => "NotAllowed",
        NoCompatibleStream => "NoCompatibleStream",
        RateLimitExceeded => "RateLimitExceeded",
    }
}

dto_enum! {
    /// Encoder backend. Lower case on the wire.
    pub enum HardwareAccelerationType {
        None => "none",
        Amf => "amf",
        Qsv => "qsv",
        Nvenc => "nvenc",
        V4l2m2m => "v4l2m2m",
        Vaapi => "vaapi",
        VideoToolbox => "videotoolbox",
        Rkmpp => "rkmpp",
    }
}

dto_enum! {
    pub enum TranscodeReason {
        ContainerNotSupported => "ContainerNotSupported",
        VideoCodecNotSupported => "VideoCodecNotSupported",
        AudioCodecNotSupported => "AudioCodecNotSupported",
        SubtitleCodecNotSupported => "SubtitleCodecNotSupported",
        AudioIsExternal => "AudioIsExternal",
        SecondaryAudioNotSupported => "SecondaryAudioNotSupported",
        VideoProfileNotSupported => "VideoProfileNotSupported",
        VideoLevelNotSupported => "VideoLevelNotSupported",
        VideoResolutionNotSupported => "VideoResolutionNotSupported",
        VideoBitDepthNotSupported => "VideoBitDepthNotSupported",
        VideoFramerateNotSupported => "VideoFramerateNotSupported",
        RefFramesNotSupported => "RefFramesNotSupported",
        AnamorphicVideoNotSupported => "AnamorphicVideoNotSupported",
        InterlacedVideoNotSupported => "InterlacedVideoNotSupported",
        AudioChannelsNotSupported => "AudioChannelsNotSupported",
        AudioProfileNotSupported => "AudioProfileNotSupported",
        AudioSampleRateNotSupported => "AudioSampleRateNotSupported",
        AudioBitDepthNotSupported => "AudioBitDepthNotSupported",
        ContainerBitrateExceedsLimit => "ContainerBitrateExceedsLimit",
        VideoBitrateNotSupported => "VideoBitrateNotSupported",
        AudioBitrateNotSupported => "AudioBitrateNotSupported",
        UnknownVideoStreamInfo => "UnknownVideoStreamInfo",
        UnknownAudioStreamInfo => "UnknownAudioStreamInfo",
        DirectPlayError => "DirectPlayError",
        VideoRangeTypeNotSupported => "VideoRangeTypeNotSupported",
        VideoCodecTagNotSupported => "VideoCodecTagNotSupported",
        StreamCountExceedsLimit => "StreamCountExceedsLimit",
    }
}

dto! {
    pub struct QueueItem => QueueItemBuilder {
        id: Uuid,
        playlist_item_id: String,
    }
}

dto! {
    /// Player state as seen by the server, embedded in session snapshots.
    pub struct PlayerStateInfo => PlayerStateInfoBuilder {
        position_ticks: Ticks,
        can_seek: bool,
        is_paused: bool,
        is_muted: bool,
        volume_level: i32,
        audio_stream_index: i32,
        subtitle_stream_index: i32,
        media_source_id: String,
        play_method: PlayMethod,
        repeat_mode: RepeatMode,
        playback_order: PlaybackOrder,
        live_stream_id: String,
    }
}

impl PlayerStateInfo {
    /// Paused counts as playing; a state with no position is idle.
    pub fn is_playing(&self) -> bool {
        self.position_ticks.is_some()
    }
}

dto! {
    pub struct TranscodingInfo => TranscodingInfoBuilder {
        audio_codec: String,
        video_codec: String,
        container: String,
        is_video_direct: bool,
        is_audio_direct: bool,
        bitrate: i32,
        framerate: OrderedFloat<f32>,
        completion_percentage: OrderedFloat<f64>,
        width: i32,
        height: i32,
        audio_channels: i32,
        hardware_acceleration_type: HardwareAccelerationType,
        transcode_reasons: Vec<TranscodeReason>; push add_transcode_reason: TranscodeReason,
    }
}

dto! {
    /// Request body of `POST /Items/{id}/PlaybackInfo`.
    pub struct PlaybackInfoDto => PlaybackInfoDtoBuilder {
        user_id: Uuid,
        max_streaming_bitrate: i32,
        start_time_ticks: Ticks,
        audio_stream_index: i32,
        subtitle_stream_index: i32,
        max_audio_channels: i32,
        media_source_id: String,
        live_stream_id: String,
        device_profile: DeviceProfile,
        enable_direct_play: bool,
        enable_direct_stream: bool,
        enable_transcoding: bool,
        allow_video_stream_copy: bool,
        allow_audio_stream_copy: bool,
        auto_open_live_stream: bool,
        always_burn_in_subtitle_when_transcoding: bool,
    }
}

dto! {
    pub struct PlaybackInfoResponse => PlaybackInfoResponseBuilder {
        media_sources: Vec<MediaSourceInfo>; push add_media_source: MediaSourceInfo,
        play_session_id: String,
        error_code: PlaybackErrorCode,
    }
}

dto! {
    pub struct PlaybackStartInfo => PlaybackStartInfoBuilder {
        can_seek: bool,
        item: BaseItemDto,
        item_id: Uuid,
        session_id: String,
        media_source_id: String,
        audio_stream_index: i32,
        subtitle_stream_index: i32,
        is_paused: bool,
        is_muted: bool,
        position_ticks: Ticks,
        playback_start_time_ticks: Ticks,
        volume_level: i32,
        brightness: i32,
        aspect_ratio: String,
        play_method: PlayMethod,
        live_stream_id: String,
        play_session_id: String,
        repeat_mode: RepeatMode,
        playback_order: PlaybackOrder,
        now_playing_queue: Vec<QueueItem>; push add_queue_item: QueueItem,
        playlist_item_id: String,
    }
}

dto! {
    /// Periodic position report for an ongoing playback.
    pub struct PlaybackProgressInfo => PlaybackProgressInfoBuilder {
        can_seek: bool,
        item: BaseItemDto,
        item_id: Uuid,
        session_id: String,
        media_source_id: String,
        audio_stream_index: i32,
        subtitle_stream_index: i32,
        is_paused: bool,
        is_muted: bool,
        position_ticks: Ticks,
        playback_start_time_ticks: Ticks,
        volume_level: i32,
        brightness: i32,
        aspect_ratio: String,
        play_method: PlayMethod,
        live_stream_id: String,
        play_session_id: String,
        repeat_mode: RepeatMode,
        playback_order: PlaybackOrder,
        now_playing_queue: Vec<QueueItem>; push add_queue_item: QueueItem,
        playlist_item_id: String,
    }
}

dto! {
    pub struct PlaybackStopInfo => PlaybackStopInfoBuilder {
        item: BaseItemDto,
        item_id: Uuid,
        session_id: String,
        media_source_id: String,
        position_ticks: Ticks,
        live_stream_id: String,
        play_session_id: String,
        failed: bool,
        next_media_type: MediaType,
        playlist_item_id: String,
        now_playing_queue: Vec<QueueItem>; push add_queue_item: QueueItem,
    }
}

impl From<&PlaybackProgressInfo> for PlaybackStopInfo {
    /// Stop report at the last known position of a progress report.
    fn from(progress: &PlaybackProgressInfo) -> Self {
        PlaybackStopInfo {
            item_id: progress.item_id,
            session_id: progress.session_id.clone(),
            media_source_id: progress.media_source_id.clone(),
            position_ticks: progress.position_ticks,
            live_stream_id: progress.live_stream_id.clone(),
            play_session_id: progress.play_session_id.clone(),
            playlist_item_id: progress.playlist_item_id.clone(),
            ..PlaybackStopInfo::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Dto;

    #[test]
    fn lower_case_accelerator_names() {
        let info = TranscodingInfo::builder()
            .hardware_acceleration_type(HardwareAccelerationType::VideoToolbox)
            .add_transcode_reason(TranscodeReason::ContainerNotSupported)
            .add_transcode_reason(TranscodeReason::AudioCodecNotSupported)
            .build();

        let json = info.to_json().expect("serialize");
        assert!(json.contains("\"HardwareAccelerationType\":\"videotoolbox\""));
        assert!(json.contains(
            "\"TranscodeReasons\":[\"ContainerNotSupported\",\"AudioCodecNotSupported\"]"
        ));
    }

    #[test]
    fn progress_report_query_lists_queue_in_order() {
        let first = Uuid::from_u128(1);
        let second = Uuid::from_u128(2);
        let progress = PlaybackProgressInfo::builder()
            .position_ticks(Ticks::from_seconds(42))
            .is_paused(false)
            .add_queue_item(QueueItem::builder().id(first).build())
            .add_queue_item(QueueItem::builder().id(second).build())
            .build();

        let deep = progress
            .to_url_query_string_with_prefix("report")
            .expect("query");
        assert_eq!(
            deep,
            format!(
                "report[IsPaused]=false&report[PositionTicks]=420000000\
                 &report[NowPlayingQueue][0][Id]={first}\
                 &report[NowPlayingQueue][1][Id]={second}"
            )
        );
    }

    #[test]
    fn stop_report_carries_progress_position() {
        let progress = PlaybackProgressInfo::builder()
            .session_id("s1")
            .play_session_id("p1")
            .position_ticks(Ticks::from_millis(1_500))
            .build();

        let stop = PlaybackStopInfo::from(&progress);
        assert_eq!(stop.session_id.as_deref(), Some("s1"));
        assert_eq!(stop.position_ticks, Some(Ticks::from_millis(1_500)));
        assert_eq!(stop.failed, None);
    }
}
