//! Media sources and their elementary streams.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::ticks::Ticks;

dto_enum! {
    pub enum MediaProtocol {
        File => "File",
        Http => "Http",
        Rtmp => "Rtmp",
        Rtsp => "Rtsp",
        Udp => "Udp",
        Rtp => "Rtp",
        Ftp => "Ftp",
    }
}

dto_enum! {
    pub enum MediaSourceType {
        Default => "Default",
        Grouping => "Grouping",
        Placeholder => "Placeholder",
    }
}

dto_enum! {
    pub enum VideoType {
        VideoFile => "VideoFile",
        Iso => "Iso",
        Dvd => "Dvd",
        BluRay => "BluRay",
    }
}

dto_enum! {
    pub enum IsoType {
        Dvd => "Dvd",
        BluRay => "BluRay",
    }
}

dto_enum! {
    pub enum Video3DFormat {
        HalfSideBySide => "HalfSideBySide",
        FullSideBySide => "FullSideBySide",
        FullTopAndBottom => "FullTopAndBottom",
        HalfTopAndBottom => "HalfTopAndBottom",
        Mvc => "MVC",
    }
}

dto_enum! {
    pub enum TransportStreamTimestamp {
        None => "None",
        Zero => "Zero",
        Valid => "Valid",
    }
}

dto_enum! {
    /// Delivery protocol of a transcoded stream. Lower case on the wire.
    pub enum MediaStreamProtocol {
        Http => "http",
        Hls => "hls",
    }
}

dto_enum! {
    pub enum MediaStreamType {
        Audio => "Audio",
        Video => "Video",
        Subtitle => "Subtitle",
        EmbeddedImage => "EmbeddedImage",
        Data => "Data",
        Lyric => "Lyric",
    }
}

dto_enum! {
    pub enum SubtitleDeliveryMethod {
        Encode => "Encode",
        Embed => "Embed",
        External => "External",
        Hls => "Hls",
        Drop => "Drop",
    }
}

dto_enum! {
    pub enum VideoRange {
        Unknown => "Unknown",
        Sdr => "SDR",
        Hdr => "HDR",
    }
}

dto_enum! {
    pub enum VideoRangeType {
        Unknown => "Unknown",
        Sdr => "SDR",
        Hdr10 => "HDR10",
        Hlg => "HLG",
        Dovi => "DOVI",
        DoviWithHdr10 => "DOVIWithHDR10",
        DoviWithHlg => "DOVIWithHLG",
        DoviWithSdr => "DOVIWithSDR",
        DoviWithEl => "DOVIWithEL",
        DoviWithHdr10Plus => "DOVIWithHDR10Plus",
        DoviWithElHdr10Plus => "DOVIWithELHDR10Plus",
        DoviInvalid => "DOVIInvalid",
        Hdr10Plus => "HDR10Plus",
    }
}

dto_enum! {
    pub enum AudioSpatialFormat {
        None => "None",
        DolbyAtmos => "DolbyAtmos",
        Dtsx => "DTSX",
    }
}

dto! {
    pub struct MediaAttachment => MediaAttachmentBuilder {
        codec: String,
        codec_tag: String,
        comment: String,
        index: i32,
        file_name: String,
        mime_type: String,
        delivery_url: String,
    }
}

dto! {
    /// One elementary stream (video, audio, subtitle, ...) of a media source.
    pub struct MediaStream => MediaStreamBuilder {
        codec: String,
        codec_tag: String,
        language: String,
        color_range: String,
        color_space: String,
        color_transfer: String,
        color_primaries: String,
        dv_version_major: i32,
        dv_version_minor: i32,
        dv_profile: i32,
        dv_level: i32,
        rpu_present_flag: i32,
        el_present_flag: i32,
        bl_present_flag: i32,
        dv_bl_signal_compatibility_id: i32,
        rotation: i32,
        comment: String,
        time_base: String,
        codec_time_base: String,
        title: String,
        hdr10_plus_present_flag: bool,
        video_range: VideoRange = VideoRange::Unknown,
        video_range_type: VideoRangeType = VideoRangeType::Unknown,
        video_do_vi_title: String,
        audio_spatial_format: AudioSpatialFormat = AudioSpatialFormat::None,
        localized_undefined: String,
        localized_default: String,
        localized_forced: String,
        localized_external: String,
        localized_hearing_impaired: String,
        display_title: String,
        nal_length_size: String,
        is_interlaced: bool,
        #[serde(rename = "IsAVC")]
        is_avc: bool,
        channel_layout: String,
        bit_rate: i32,
        bit_depth: i32,
        ref_frames: i32,
        packet_length: i32,
        channels: i32,
        sample_rate: i32,
        is_default: bool,
        is_forced: bool,
        is_hearing_impaired: bool,
        height: i32,
        width: i32,
        average_frame_rate: OrderedFloat<f32>,
        real_frame_rate: OrderedFloat<f32>,
        reference_frame_rate: OrderedFloat<f32>,
        profile: String,
        r#type: MediaStreamType,
        aspect_ratio: String,
        index: i32,
        score: i32,
        is_external: bool,
        delivery_method: SubtitleDeliveryMethod,
        delivery_url: String,
        is_external_url: bool,
        is_text_subtitle_stream: bool,
        supports_external_stream: bool,
        path: String,
        pixel_format: String,
        level: OrderedFloat<f64>,
        is_anamorphic: bool,
    }
}

dto! {
    /// A playable representation of an item: a file, a stream URL or a
    /// live stream, with its streams and transcoding hints.
    pub struct MediaSourceInfo => MediaSourceInfoBuilder {
        protocol: MediaProtocol,
        id: String,
        path: String,
        encoder_path: String,
        encoder_protocol: MediaProtocol,
        r#type: MediaSourceType,
        container: String,
        size: i64,
        name: String,
        is_remote: bool,
        #[serde(rename = "ETag")]
        etag: String,
        run_time_ticks: Ticks,
        read_at_native_framerate: bool,
        ignore_dts: bool,
        ignore_index: bool,
        gen_pts_input: bool,
        supports_transcoding: bool,
        supports_direct_stream: bool,
        supports_direct_play: bool,
        is_infinite_stream: bool,
        use_most_compatible_transcoding_profile: bool = false,
        requires_opening: bool,
        open_token: String,
        requires_closing: bool,
        live_stream_id: String,
        buffer_ms: i32,
        requires_looping: bool,
        supports_probing: bool,
        video_type: VideoType,
        iso_type: IsoType,
        #[serde(rename = "Video3DFormat")]
        video_3d_format: Video3DFormat,
        media_streams: Vec<MediaStream>; push add_media_stream: MediaStream,
        media_attachments: Vec<MediaAttachment>; push add_media_attachment: MediaAttachment,
        formats: Vec<String>; push add_format: String,
        bitrate: i32,
        fallback_max_streaming_bitrate: i32,
        timestamp: TransportStreamTimestamp,
        required_http_headers: BTreeMap<String, Option<String>>; insert_nullable insert_required_http_header: String => String,
        transcoding_url: String,
        transcoding_sub_protocol: MediaStreamProtocol,
        transcoding_container: String,
        analyze_duration_ms: i32,
        default_audio_stream_index: i32,
        default_subtitle_stream_index: i32,
        has_segments: bool,
    }
}

impl MediaSourceInfo {
    /// Streams of the given type, in source order.
    pub fn streams_of(&self, kind: MediaStreamType) -> impl Iterator<Item = &MediaStream> {
        self.media_streams
            .iter()
            .flatten()
            .filter(move |stream| stream.r#type == Some(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Dto;

    #[test]
    fn irregular_names_round_trip() {
        let json = r#"{
            "Id": "a1",
            "ETag": "abc",
            "Video3DFormat": "MVC",
            "TranscodingSubProtocol": "hls",
            "RequiredHttpHeaders": {"User-Agent": "vlc"},
            "MediaStreams": [
                {"Type": "Video", "IsAVC": true, "RealFrameRate": 23.976, "VideoRangeType": "DOVIWithHDR10"},
                {"Type": "Audio", "AudioSpatialFormat": "DolbyAtmos", "Channels": 6}
            ]
        }"#;

        let source = MediaSourceInfo::from_json(json).expect("deserialize");
        assert_eq!(source.etag.as_deref(), Some("abc"));
        assert_eq!(source.video_3d_format, Some(Video3DFormat::Mvc));
        assert_eq!(source.transcoding_sub_protocol, Some(MediaStreamProtocol::Hls));

        let video: Vec<_> = source.streams_of(MediaStreamType::Video).collect();
        assert_eq!(video.len(), 1);
        assert_eq!(video[0].is_avc, Some(true));
        assert_eq!(video[0].real_frame_rate, Some(OrderedFloat(23.976)));
        // Present on the wire only when the payload carried them.
        assert_eq!(video[0].video_range, None);

        let again = MediaSourceInfo::from_json(&source.to_json().expect("serialize"))
            .expect("deserialize again");
        assert_eq!(again, source);
    }

    #[test]
    fn stream_defaults_follow_schema() {
        let stream = MediaStream::default();
        assert_eq!(stream.video_range, Some(VideoRange::Unknown));
        assert_eq!(stream.audio_spatial_format, Some(AudioSpatialFormat::None));
        assert_eq!(stream.codec, None);
    }
}
