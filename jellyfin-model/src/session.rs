//! Sessions and the remote-control commands sent to them.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::device_profile::DeviceProfile;
use crate::item::BaseItemDto;
use crate::kinds::MediaType;
use crate::playback::{PlayerStateInfo, QueueItem, TranscodingInfo};

dto_enum! {
    pub enum GeneralCommandType {
        MoveUp => "MoveUp",
        MoveDown => "MoveDown",
        MoveLeft => "MoveLeft",
        MoveRight => "MoveRight",
        PageUp => "PageUp",
        PageDown => "PageDown",
        PreviousLetter => "PreviousLetter",
        NextLetter => "NextLetter",
        ToggleOsd => "ToggleOsd",
        ToggleContextMenu => "ToggleContextMenu",
        Select => "Select",
        Back => "Back",
        TakeScreenshot => "TakeScreenshot",
        SendKey => "SendKey",
        SendString => "SendString",
        GoHome => "GoHome",
        GoToSettings => "GoToSettings",
        VolumeUp => "VolumeUp",
        VolumeDown => "VolumeDown",
        Mute => "Mute",
        Unmute => "Unmute",
        ToggleMute => "ToggleMute",
        SetVolume => "SetVolume",
        SetAudioStreamIndex => "SetAudioStreamIndex",
        SetSubtitleStreamIndex => "SetSubtitleStreamIndex",
        ToggleFullscreen => "ToggleFullscreen",
        DisplayContent => "DisplayContent",
        GoToSearch => "GoToSearch",
        DisplayMessage => "DisplayMessage",
        SetRepeatMode => "SetRepeatMode",
        ChannelUp => "ChannelUp",
        ChannelDown => "ChannelDown",
        Guide => "Guide",
        ToggleStats => "ToggleStats",
        PlayMediaSource => "PlayMediaSource",
        PlayTrailers => "PlayTrailers",
        SetShuffleQueue => "SetShuffleQueue",
        PlayState => "PlayState",
        PlayNext => "PlayNext",
        ToggleOsdMenu => "ToggleOsdMenu",
        Play => "Play",
        SetMaxStreamingBitrate => "SetMaxStreamingBitrate",
        SetPlaybackOrder => "SetPlaybackOrder",
    }
}

dto_enum! {
    /// Transport commands for `/Sessions/{id}/Playing/{command}`.
    pub enum PlaystateCommand {
        Stop => "Stop",
        Pause => "Pause",
        Unpause => "Unpause",
        NextTrack => "NextTrack",
        PreviousTrack => "PreviousTrack",
        Seek => "Seek",
        Rewind => "Rewind",
        FastForward => "FastForward",
        PlayPause => "PlayPause",
    }
}

dto_enum! {
    pub enum PlayCommand {
        PlayNow => "PlayNow",
        PlayNext => "PlayNext",
        PlayLast => "PlayLast",
        PlayInstantMix => "PlayInstantMix",
        PlayShuffle => "PlayShuffle",
    }
}

dto! {
    pub struct SessionUserInfo => SessionUserInfoBuilder {
        user_id: Uuid,
        user_name: String,
    }
}

dto! {
    pub struct ClientCapabilitiesDto => ClientCapabilitiesDtoBuilder {
        playable_media_types: Vec<MediaType> = Vec::new(); push add_playable_media_type: MediaType,
        supported_commands: Vec<GeneralCommandType> = Vec::new(); push add_supported_command: GeneralCommandType,
        supports_media_control: bool = false,
        supports_persistent_identifier: bool = true,
        device_profile: DeviceProfile,
        app_store_url: String,
        icon_url: String,
    }
}

dto! {
    /// Snapshot of one client connection: who, on which device, playing what.
    pub struct SessionInfoDto => SessionInfoDtoBuilder {
        play_state: PlayerStateInfo,
        additional_users: Vec<SessionUserInfo>; push add_additional_user: SessionUserInfo,
        capabilities: ClientCapabilitiesDto,
        remote_end_point: String,
        playable_media_types: Vec<MediaType> = Vec::new(); push add_playable_media_type: MediaType,
        id: String,
        user_id: Uuid,
        user_name: String,
        client: String,
        last_activity_date: DateTime<FixedOffset>,
        last_playback_check_in: DateTime<FixedOffset>,
        last_paused_date: DateTime<FixedOffset>,
        device_name: String,
        device_type: String,
        now_playing_item: BaseItemDto,
        now_viewing_item: BaseItemDto,
        device_id: String,
        application_version: String,
        transcoding_info: TranscodingInfo,
        is_active: bool,
        supports_media_control: bool,
        supports_remote_control: bool,
        now_playing_queue: Vec<QueueItem>; push add_queue_item: QueueItem,
        now_playing_queue_full_items: Vec<BaseItemDto>; push add_queue_full_item: BaseItemDto,
        has_custom_device_name: bool,
        playlist_item_id: String,
        server_id: String,
        user_primary_image_tag: String,
        supported_commands: Vec<GeneralCommandType> = Vec::new(); push add_supported_command: GeneralCommandType,
    }
}

impl SessionInfoDto {
    pub fn is_playing(&self) -> bool {
        self.now_playing_item.is_some()
    }

    pub fn supports(&self, command: GeneralCommandType) -> bool {
        self.supported_commands
            .as_ref()
            .is_some_and(|commands| commands.contains(&command))
    }
}

dto! {
    /// Body of `POST /Sessions/{id}/Command`.
    pub struct GeneralCommand => GeneralCommandBuilder {
        name: GeneralCommandType,
        controlling_user_id: Uuid,
        arguments: BTreeMap<String, Option<String>>; insert_nullable insert_argument: String => String,
    }
}

dto! {
    /// On-screen message for `POST /Sessions/{id}/Message`.
    pub struct MessageCommand => MessageCommandBuilder {
        header: String,
        text: String,
        timeout_ms: i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Dto;

    #[test]
    fn general_command_arguments_nest_under_prefix() {
        let command = GeneralCommand::builder()
            .name(GeneralCommandType::SetVolume)
            .insert_argument("Volume", "35")
            .build();

        assert_eq!(
            command.to_url_query_string().expect("query"),
            "Name=SetVolume&Arguments[Volume]=35"
        );
    }

    #[test]
    fn supported_command_lookup() {
        let session = SessionInfoDto::builder()
            .add_supported_command(GeneralCommandType::DisplayMessage)
            .build();

        assert!(session.supports(GeneralCommandType::DisplayMessage));
        assert!(!session.supports(GeneralCommandType::SetVolume));
        assert!(!session.is_playing());
        assert!(!SessionInfoDto { supported_commands: None, ..session }.supports(
            GeneralCommandType::DisplayMessage
        ));
    }

    #[test]
    fn playstate_commands_parse_from_path_segments() {
        assert_eq!("PlayPause".parse::<PlaystateCommand>().ok(), Some(PlaystateCommand::PlayPause));
        assert!("Resume".parse::<PlaystateCommand>().is_err());
    }
}
