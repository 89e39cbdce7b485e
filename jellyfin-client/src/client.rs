use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    Client, Method, RequestBuilder, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use jellyfin_model::Dto;
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

use crate::api::JellyfinApi;
use crate::auth::{AccessToken, ClientIdentity};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::params::{
    self, PlayParams, PlaystateParams, ScheduledTasksQuery, SearchHintsQuery,
    SessionsQuery, TimersQuery, UserConfigurationQuery,
};
use crate::routes::{
    self,
    utils::{replace_param, replace_params, with_query},
};

/// HTTP client for one Jellyfin server.
///
/// Cloning is cheap: clones share the connection pool and the token.
#[derive(Clone)]
pub struct JellyfinClient {
    http: Client,
    base_url: Url,
    identity: ClientIdentity,
    user_id: Option<Uuid>,
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl std::fmt::Debug for JellyfinClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JellyfinClient")
            .field("base_url", &self.base_url.as_str())
            .field("identity", &self.identity)
            .field("user_id", &self.user_id)
            .field(
                "has_token",
                &self.token.try_read().map(|t| t.is_some()).unwrap_or(false),
            )
            .finish()
    }
}

impl JellyfinClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .user_agent(format!(
                "{}/{}",
                config.identity.client, config.identity.version
            ))
            .build()?;

        info!(
            base_url = %config.base_url,
            client = %config.identity.client,
            device = %config.identity.device,
            has_token = config.access_token.is_some(),
            "created Jellyfin client"
        );

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            identity: config.identity.clone(),
            user_id: config.user_id,
            token: Arc::new(RwLock::new(config.access_token.clone())),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    /// User configured for this client, used as the default `userId`.
    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    pub async fn set_token(&self, token: Option<AccessToken>) {
        info!(has_token = token.is_some(), "access token updated");
        *self.token.write().await = token;
    }

    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Join an API path (and an encoded query) onto the base URL, keeping any
    /// path prefix the server is mounted under.
    pub fn build_url(&self, path: &str, query: &str) -> ClientResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = with_query(path.trim_start_matches('/'), query);
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &str,
    ) -> ClientResult<RequestBuilder> {
        let url = self.build_url(path, query)?;
        debug!(%method, path, "sending request");
        let authorization = {
            let token = self.token.read().await;
            self.identity.authorization(token.as_ref())
        };
        Ok(self
            .http
            .request(method, url)
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/json"))
    }

    async fn execute(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await?;
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => {
                warn!(status = %StatusCode::UNAUTHORIZED, "request rejected");
                Err(ClientError::Unauthorized)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                warn!(%status, "request failed");
                Err(ClientError::Status { status, body })
            }
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ClientError::MalformedResponse)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> ClientResult<T> {
        let request = self.request(Method::GET, path, query).await?;
        Self::decode(self.execute(request).await?).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.request(Method::POST, path, query).await?.json(body);
        Self::decode(self.execute(request).await?).await
    }

    /// POST for endpoints answering 204 No Content. `body` is optional since
    /// several commands carry everything in the path and query.
    async fn post_no_content<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &str,
        body: Option<&B>,
    ) -> ClientResult<()> {
        let mut request = self.request(Method::POST, path, query).await?;
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await?;
        Ok(())
    }
}

/// Placeholder body type for bodiless POSTs.
type NoBody = ();

#[async_trait]
impl JellyfinApi for JellyfinClient {
    async fn system_info(&self) -> ClientResult<SystemInfo> {
        self.get_json(routes::system::INFO, "").await
    }

    async fn public_system_info(&self) -> ClientResult<PublicSystemInfo> {
        self.get_json(routes::system::INFO_PUBLIC, "").await
    }

    async fn ping(&self) -> ClientResult<()> {
        let request = self.request(Method::GET, routes::system::PING, "").await?;
        self.execute(request).await?;
        Ok(())
    }

    async fn server_configuration(&self) -> ClientResult<ServerConfiguration> {
        self.get_json(routes::system::CONFIGURATION, "").await
    }

    async fn update_server_configuration(
        &self,
        configuration: &ServerConfiguration,
    ) -> ClientResult<()> {
        self.post_no_content(
            routes::system::CONFIGURATION,
            "",
            Some(configuration),
        )
        .await
    }

    async fn sessions(
        &self,
        query: &SessionsQuery,
    ) -> ClientResult<Vec<SessionInfoDto>> {
        self.get_json(routes::sessions::COLLECTION, &params::encode(query)?)
            .await
    }

    async fn send_playstate_command(
        &self,
        session_id: &str,
        command: PlaystateCommand,
        params: &PlaystateParams,
    ) -> ClientResult<()> {
        let path = replace_params(
            routes::sessions::PLAYSTATE,
            &[("{sessionId}", session_id), ("{command}", command.as_str())],
        );
        self.post_no_content::<NoBody>(&path, &params::encode(params)?, None)
            .await
    }

    async fn play(
        &self,
        session_id: &str,
        params: &PlayParams,
    ) -> ClientResult<()> {
        let path =
            replace_param(routes::sessions::PLAY, "{sessionId}", session_id);
        self.post_no_content::<NoBody>(&path, &params::encode(params)?, None)
            .await
    }

    async fn send_general_command(
        &self,
        session_id: &str,
        command: &GeneralCommand,
    ) -> ClientResult<()> {
        let path =
            replace_param(routes::sessions::COMMAND, "{sessionId}", session_id);
        self.post_no_content(&path, "", Some(command)).await
    }

    async fn send_message(
        &self,
        session_id: &str,
        message: &MessageCommand,
    ) -> ClientResult<()> {
        let path =
            replace_param(routes::sessions::MESSAGE, "{sessionId}", session_id);
        self.post_no_content(&path, "", Some(message)).await
    }

    async fn report_playback_start(
        &self,
        report: &PlaybackStartInfo,
    ) -> ClientResult<()> {
        self.post_no_content(routes::sessions::playing::START, "", Some(report))
            .await
    }

    async fn report_playback_progress(
        &self,
        report: &PlaybackProgressInfo,
    ) -> ClientResult<()> {
        self.post_no_content(
            routes::sessions::playing::PROGRESS,
            "",
            Some(report),
        )
        .await
    }

    async fn report_playback_stopped(
        &self,
        report: &PlaybackStopInfo,
    ) -> ClientResult<()> {
        self.post_no_content(
            routes::sessions::playing::STOPPED,
            "",
            Some(report),
        )
        .await
    }

    async fn playback_info(
        &self,
        item_id: Uuid,
        request: &PlaybackInfoDto,
    ) -> ClientResult<PlaybackInfoResponse> {
        let path = replace_param(
            routes::items::PLAYBACK_INFO,
            "{itemId}",
            item_id.to_string(),
        );
        self.post_json(&path, "", request).await
    }

    async fn programs(
        &self,
        query: &GetProgramsDto,
    ) -> ClientResult<BaseItemDtoQueryResult> {
        // Query binding on the server is case-insensitive.
        self.get_json(routes::live_tv::PROGRAMS, &query.to_url_query_string()?)
            .await
    }

    async fn query_programs(
        &self,
        query: &GetProgramsDto,
    ) -> ClientResult<BaseItemDtoQueryResult> {
        self.post_json(routes::live_tv::PROGRAMS, "", query).await
    }

    async fn timers(
        &self,
        query: &TimersQuery,
    ) -> ClientResult<TimerInfoDtoQueryResult> {
        self.get_json(routes::live_tv::TIMERS, &params::encode(query)?)
            .await
    }

    async fn timer(&self, timer_id: &str) -> ClientResult<TimerInfoDto> {
        let path = replace_param(routes::live_tv::TIMER, "{timerId}", timer_id);
        self.get_json(&path, "").await
    }

    async fn series_timers(
        &self,
    ) -> ClientResult<SeriesTimerInfoDtoQueryResult> {
        self.get_json(routes::live_tv::SERIES_TIMERS, "").await
    }

    async fn default_listing_provider(
        &self,
    ) -> ClientResult<ListingsProviderInfo> {
        self.get_json(routes::live_tv::DEFAULT_LISTING_PROVIDER, "")
            .await
    }

    async fn add_listing_provider(
        &self,
        provider: &ListingsProviderInfo,
    ) -> ClientResult<ListingsProviderInfo> {
        self.post_json(routes::live_tv::LISTING_PROVIDERS, "", provider)
            .await
    }

    async fn search_hints(
        &self,
        query: &SearchHintsQuery,
    ) -> ClientResult<SearchHintResult> {
        self.get_json(routes::search::HINTS, &params::encode(query)?)
            .await
    }

    async fn update_user_policy(
        &self,
        user_id: Uuid,
        policy: &UserPolicy,
    ) -> ClientResult<()> {
        let path = replace_param(
            routes::users::POLICY,
            "{userId}",
            user_id.to_string(),
        );
        self.post_no_content(&path, "", Some(policy)).await
    }

    async fn update_user_configuration(
        &self,
        user_id: Uuid,
        configuration: &UserConfiguration,
    ) -> ClientResult<()> {
        let query = params::encode(&UserConfigurationQuery { user_id })?;
        self.post_no_content(
            routes::users::CONFIGURATION,
            &query,
            Some(configuration),
        )
        .await
    }

    async fn scheduled_tasks(
        &self,
        query: &ScheduledTasksQuery,
    ) -> ClientResult<Vec<TaskInfo>> {
        self.get_json(routes::tasks::COLLECTION, &params::encode(query)?)
            .await
    }
}
