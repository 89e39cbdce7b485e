use async_trait::async_trait;
use uuid::Uuid;

use jellyfin_model::configuration::ServerConfiguration;
use jellyfin_model::item::BaseItemDtoQueryResult;
use jellyfin_model::live_tv::{
    GetProgramsDto, ListingsProviderInfo, SeriesTimerInfoDtoQueryResult,
    TimerInfoDto, TimerInfoDtoQueryResult,
};
use jellyfin_model::playback::{
    PlaybackInfoDto, PlaybackInfoResponse, PlaybackProgressInfo,
    PlaybackStartInfo, PlaybackStopInfo,
};
use jellyfin_model::search::SearchHintResult;
use jellyfin_model::session::{
    GeneralCommand, MessageCommand, PlaystateCommand, SessionInfoDto,
};
use jellyfin_model::system::{PublicSystemInfo, SystemInfo, TaskInfo};
use jellyfin_model::user::{UserConfiguration, UserPolicy};

use crate::error::ClientResult;
use crate::params::{
    PlayParams, PlaystateParams, ScheduledTasksQuery, SearchHintsQuery,
    SessionsQuery, TimersQuery,
};

/// Typed Jellyfin REST operations.
///
/// [`crate::JellyfinClient`] is the HTTP implementation; callers that only
/// need a subset of the API can take `&dyn JellyfinApi` and be tested against
/// a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JellyfinApi: Send + Sync {
    // === System ===

    async fn system_info(&self) -> ClientResult<SystemInfo>;

    /// Works without a token.
    async fn public_system_info(&self) -> ClientResult<PublicSystemInfo>;

    async fn ping(&self) -> ClientResult<()>;

    async fn server_configuration(&self) -> ClientResult<ServerConfiguration>;

    async fn update_server_configuration(
        &self,
        configuration: &ServerConfiguration,
    ) -> ClientResult<()>;

    // === Sessions ===

    async fn sessions(
        &self,
        query: &SessionsQuery,
    ) -> ClientResult<Vec<SessionInfoDto>>;

    async fn send_playstate_command(
        &self,
        session_id: &str,
        command: PlaystateCommand,
        params: &PlaystateParams,
    ) -> ClientResult<()>;

    /// Start playback of items on a remote session.
    async fn play(
        &self,
        session_id: &str,
        params: &PlayParams,
    ) -> ClientResult<()>;

    async fn send_general_command(
        &self,
        session_id: &str,
        command: &GeneralCommand,
    ) -> ClientResult<()>;

    async fn send_message(
        &self,
        session_id: &str,
        message: &MessageCommand,
    ) -> ClientResult<()>;

    // === Playback reporting ===

    async fn report_playback_start(
        &self,
        report: &PlaybackStartInfo,
    ) -> ClientResult<()>;

    async fn report_playback_progress(
        &self,
        report: &PlaybackProgressInfo,
    ) -> ClientResult<()>;

    async fn report_playback_stopped(
        &self,
        report: &PlaybackStopInfo,
    ) -> ClientResult<()>;

    async fn playback_info(
        &self,
        item_id: Uuid,
        request: &PlaybackInfoDto,
    ) -> ClientResult<PlaybackInfoResponse>;

    // === Live TV ===

    /// Guide lookup through the query string (`GET /LiveTv/Programs`).
    async fn programs(
        &self,
        query: &GetProgramsDto,
    ) -> ClientResult<BaseItemDtoQueryResult>;

    /// Guide lookup with the filters in the body (`POST /LiveTv/Programs`).
    async fn query_programs(
        &self,
        query: &GetProgramsDto,
    ) -> ClientResult<BaseItemDtoQueryResult>;

    async fn timers(
        &self,
        query: &TimersQuery,
    ) -> ClientResult<TimerInfoDtoQueryResult>;

    async fn timer(&self, timer_id: &str) -> ClientResult<TimerInfoDto>;

    async fn series_timers(&self)
    -> ClientResult<SeriesTimerInfoDtoQueryResult>;

    async fn default_listing_provider(
        &self,
    ) -> ClientResult<ListingsProviderInfo>;

    async fn add_listing_provider(
        &self,
        provider: &ListingsProviderInfo,
    ) -> ClientResult<ListingsProviderInfo>;

    // === Search ===

    async fn search_hints(
        &self,
        query: &SearchHintsQuery,
    ) -> ClientResult<SearchHintResult>;

    // === Users ===

    async fn update_user_policy(
        &self,
        user_id: Uuid,
        policy: &UserPolicy,
    ) -> ClientResult<()>;

    async fn update_user_configuration(
        &self,
        user_id: Uuid,
        configuration: &UserConfiguration,
    ) -> ClientResult<()>;

    // === Scheduled tasks ===

    async fn scheduled_tasks(
        &self,
        query: &ScheduledTasksQuery,
    ) -> ClientResult<Vec<TaskInfo>>;
}
