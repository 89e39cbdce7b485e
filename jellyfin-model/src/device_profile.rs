//! Client device capabilities, sent with playback-info requests.

use uuid::Uuid;

use crate::media::{MediaStreamProtocol, SubtitleDeliveryMethod};

dto_enum! {
    pub enum DlnaProfileType {
        Audio => "Audio",
        Video => "Video",
        Photo => "Photo",
        Subtitle => "Subtitle",
        Lyric => "Lyric",
    }
}

dto_enum! {
    pub enum EncodingContext {
        Streaming => "Streaming",
        Static => "Static",
    }
}

dto_enum! {
    pub enum TranscodeSeekInfo {
        Auto => "Auto",
        Bytes => "Bytes",
    }
}

dto_enum! {
    pub enum ProfileConditionType {
        Equals => "Equals",
        NotEquals => "NotEquals",
        LessThanEqual => "LessThanEqual",
        GreaterThanEqual => "GreaterThanEqual",
        EqualsAny => "EqualsAny",
    }
}

dto_enum! {
    pub enum ProfileConditionValue {
        AudioChannels => "AudioChannels",
        AudioBitrate => "AudioBitrate",
        AudioProfile => "AudioProfile",
        Width => "Width",
        Height => "Height",
        Has64BitOffsets => "Has64BitOffsets",
        PacketLength => "PacketLength",
        VideoBitDepth => "VideoBitDepth",
        VideoProfile => "VideoProfile",
        VideoLevel => "VideoLevel",
        VideoFramerate => "VideoFramerate",
        IsAnamorphic => "IsAnamorphic",
        RefFrames => "RefFrames",
        NumAudioStreams => "NumAudioStreams",
        NumVideoStreams => "NumVideoStreams",
        IsSecondaryAudio => "IsSecondaryAudio",
        VideoCodecTag => "VideoCodecTag",
        IsAvc => "IsAvc",
        IsInterlaced => "IsInterlaced",
        AudioSampleRate => "AudioSampleRate",
        AudioBitDepth => "AudioBitDepth",
        VideoBitrate => "VideoBitrate",
        VideoRangeType => "VideoRangeType",
        NumStreams => "NumStreams",
    }
}

dto_enum! {
    pub enum CodecType {
        Video => "Video",
        VideoAudio => "VideoAudio",
        Audio => "Audio",
    }
}

dto! {
    pub struct ProfileCondition => ProfileConditionBuilder {
        condition: ProfileConditionType,
        property: ProfileConditionValue,
        value: String,
        is_required: bool,
    }
}

dto! {
    pub struct DirectPlayProfile => DirectPlayProfileBuilder {
        container: String,
        audio_codec: String,
        video_codec: String,
        r#type: DlnaProfileType,
    }
}

dto! {
    pub struct TranscodingProfile => TranscodingProfileBuilder {
        container: String,
        r#type: DlnaProfileType,
        video_codec: String,
        audio_codec: String,
        protocol: MediaStreamProtocol,
        estimate_content_length: bool = false,
        enable_mpegts_m2_ts_mode: bool = false,
        transcode_seek_info: TranscodeSeekInfo = TranscodeSeekInfo::Auto,
        copy_timestamps: bool = false,
        context: EncodingContext = EncodingContext::Streaming,
        enable_subtitles_in_manifest: bool = false,
        max_audio_channels: String,
        min_segments: i32 = 0,
        segment_length: i32 = 0,
        break_on_non_key_frames: bool = false,
        conditions: Vec<ProfileCondition> = Vec::new(); push add_condition: ProfileCondition,
        enable_audio_vbr_encoding: bool = true,
    }
}

dto! {
    pub struct ContainerProfile => ContainerProfileBuilder {
        r#type: DlnaProfileType,
        conditions: Vec<ProfileCondition>; push add_condition: ProfileCondition,
        container: String,
        sub_container: String,
    }
}

dto! {
    pub struct CodecProfile => CodecProfileBuilder {
        r#type: CodecType,
        conditions: Vec<ProfileCondition>; push add_condition: ProfileCondition,
        apply_conditions: Vec<ProfileCondition>; push add_apply_condition: ProfileCondition,
        codec: String,
        container: String,
        sub_container: String,
    }
}

dto! {
    pub struct SubtitleProfile => SubtitleProfileBuilder {
        format: String,
        method: SubtitleDeliveryMethod,
        didl_mode: String,
        language: String,
        container: String,
    }
}

dto! {
    /// Which containers and codecs a device plays directly, and what to
    /// transcode to otherwise.
    pub struct DeviceProfile => DeviceProfileBuilder {
        name: String,
        id: Uuid,
        max_streaming_bitrate: i32,
        max_static_bitrate: i32,
        music_streaming_transcoding_bitrate: i32,
        max_static_music_bitrate: i32,
        direct_play_profiles: Vec<DirectPlayProfile> = Vec::new(); push add_direct_play_profile: DirectPlayProfile,
        transcoding_profiles: Vec<TranscodingProfile> = Vec::new(); push add_transcoding_profile: TranscodingProfile,
        container_profiles: Vec<ContainerProfile> = Vec::new(); push add_container_profile: ContainerProfile,
        codec_profiles: Vec<CodecProfile> = Vec::new(); push add_codec_profile: CodecProfile,
        subtitle_profiles: Vec<SubtitleProfile> = Vec::new(); push add_subtitle_profile: SubtitleProfile,
    }
}
