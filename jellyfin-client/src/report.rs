//! Fetch-and-render helpers behind `jellyfinctl`.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset};
use clap::ValueEnum;
use serde::Serialize;
use uuid::Uuid;

use jellyfin_model::prelude::*;

use crate::api::JellyfinApi;
use crate::error::ClientResult;
use crate::params::{ScheduledTasksQuery, SearchHintsQuery, SessionsQuery, TimersQuery};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per entry.
    #[default]
    Summary,
    /// Every field, unset ones included.
    Dump,
    /// Pretty-printed wire JSON.
    Json,
}

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRequest {
    Info,
    PublicInfo,
    Sessions { active_within_seconds: Option<i32> },
    Search { term: String, limit: Option<i32> },
    Timers { active_only: bool },
    Programs {
        channels: Vec<Uuid>,
        limit: Option<i32>,
        airing: bool,
    },
    Tasks { include_hidden: bool },
}

/// A fetched server response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Info(SystemInfo),
    PublicInfo(PublicSystemInfo),
    Sessions(Vec<SessionInfoDto>),
    Search(SearchHintResult),
    Timers(TimerInfoDtoQueryResult),
    Programs(BaseItemDtoQueryResult),
    Tasks(Vec<TaskInfo>),
}

impl ReportRequest {
    /// `user_id` scopes searches and guide lookups when the server needs it.
    pub async fn fetch(
        &self,
        api: &dyn JellyfinApi,
        user_id: Option<Uuid>,
    ) -> ClientResult<Report> {
        let report = match self {
            ReportRequest::Info => Report::Info(api.system_info().await?),
            ReportRequest::PublicInfo => {
                Report::PublicInfo(api.public_system_info().await?)
            }
            ReportRequest::Sessions {
                active_within_seconds,
            } => {
                let query = SessionsQuery {
                    active_within_seconds: *active_within_seconds,
                    ..Default::default()
                };
                Report::Sessions(api.sessions(&query).await?)
            }
            ReportRequest::Search { term, limit } => {
                let query = SearchHintsQuery {
                    limit: *limit,
                    user_id,
                    ..SearchHintsQuery::new(term.clone())
                };
                Report::Search(api.search_hints(&query).await?)
            }
            ReportRequest::Timers { active_only } => {
                let query = TimersQuery {
                    is_active: active_only.then_some(true),
                    ..Default::default()
                };
                Report::Timers(api.timers(&query).await?)
            }
            ReportRequest::Programs {
                channels,
                limit,
                airing,
            } => {
                let mut query = GetProgramsDto::builder()
                    .channel_ids(channels.clone())
                    .add_sort_by(ItemSortBy::StartDate);
                if let Some(limit) = limit {
                    query = query.limit(*limit);
                }
                if *airing {
                    query = query.is_airing(true);
                }
                if let Some(user_id) = user_id {
                    query = query.user_id(user_id);
                }
                Report::Programs(api.programs(&query.build()).await?)
            }
            ReportRequest::Tasks { include_hidden } => {
                let query = ScheduledTasksQuery {
                    is_hidden: (!include_hidden).then_some(false),
                    ..Default::default()
                };
                Report::Tasks(api.scheduled_tasks(&query).await?)
            }
        };
        Ok(report)
    }
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> ClientResult<String> {
        match format {
            OutputFormat::Summary => Ok(self.summary()),
            OutputFormat::Dump => Ok(self.dump()),
            OutputFormat::Json => self.json(),
        }
    }

    fn json(&self) -> ClientResult<String> {
        fn pretty<T: Serialize + ?Sized>(value: &T) -> ClientResult<String> {
            serde_json::to_string_pretty(value)
                .map_err(|err| ModelError::Encode(err).into())
        }
        match self {
            Report::Info(info) => pretty(info),
            Report::PublicInfo(info) => pretty(info),
            Report::Sessions(sessions) => pretty(sessions),
            Report::Search(result) => pretty(result),
            Report::Timers(result) => pretty(result),
            Report::Programs(result) => pretty(result),
            Report::Tasks(tasks) => pretty(tasks),
        }
    }

    fn dump(&self) -> String {
        fn all<T: Dto>(values: &[T]) -> String {
            values.iter().map(Dto::dump).collect::<Vec<_>>().join("\n")
        }
        match self {
            Report::Info(info) => info.dump(),
            Report::PublicInfo(info) => info.dump(),
            Report::Sessions(sessions) => all(sessions),
            Report::Search(result) => result.dump(),
            Report::Timers(result) => result.dump(),
            Report::Programs(result) => result.dump(),
            Report::Tasks(tasks) => all(tasks),
        }
    }

    fn summary(&self) -> String {
        let mut out = String::new();
        match self {
            Report::Info(info) => {
                let _ = writeln!(
                    out,
                    "{} {} on {} (id {})",
                    text(&info.server_name),
                    text(&info.version),
                    text(
                        &info
                            .operating_system_display_name
                            .clone()
                            .or_else(|| info.operating_system.clone())
                    ),
                    text(&info.id),
                );
                if info.has_pending_restart == Some(true) {
                    out.push_str("restart pending\n");
                }
            }
            Report::PublicInfo(info) => {
                let _ = writeln!(
                    out,
                    "{} {} at {}",
                    text(&info.server_name),
                    text(&info.version),
                    text(&info.local_address),
                );
            }
            Report::Sessions(sessions) => {
                if sessions.is_empty() {
                    out.push_str("no sessions\n");
                }
                for session in sessions {
                    let playing = session
                        .now_playing_item
                        .as_ref()
                        .and_then(|item| item.name.as_deref())
                        .unwrap_or("idle");
                    let _ = writeln!(
                        out,
                        "{}  {}  {} on {}  {}",
                        text(&session.id),
                        text(&session.user_name),
                        text(&session.client),
                        text(&session.device_name),
                        playing,
                    );
                }
            }
            Report::Search(result) => {
                let hints = result.search_hints.as_deref().unwrap_or_default();
                let _ = writeln!(
                    out,
                    "{} of {} hits",
                    hints.len(),
                    result.total_record_count.unwrap_or(hints.len() as i32)
                );
                for hint in hints {
                    let _ = write!(
                        out,
                        "{:<12} {}",
                        text(&hint.r#type),
                        text(&hint.name)
                    );
                    if let Some(year) = hint.production_year {
                        let _ = write!(out, " ({year})");
                    }
                    out.push('\n');
                }
            }
            Report::Timers(result) => {
                let timers = result.items.as_deref().unwrap_or_default();
                if timers.is_empty() {
                    out.push_str("no timers\n");
                }
                for timer in timers {
                    let _ = writeln!(
                        out,
                        "{}  {}  {}  [{}]",
                        date(&timer.start_date),
                        text(&timer.channel_name),
                        text(&timer.name),
                        text(&timer.status),
                    );
                }
            }
            Report::Programs(result) => {
                let programs = result.items.as_deref().unwrap_or_default();
                if programs.is_empty() {
                    out.push_str("no programs\n");
                }
                for program in programs {
                    let _ = writeln!(
                        out,
                        "{}  {}  {}",
                        date(&program.start_date),
                        text(&program.channel_name),
                        text(&program.name),
                    );
                }
            }
            Report::Tasks(tasks) => {
                for task in tasks {
                    let last = task
                        .last_execution_result
                        .as_ref()
                        .and_then(|result| result.status.as_ref());
                    let _ = writeln!(
                        out,
                        "{:<10} {}  last: {}",
                        text(&task.state),
                        text(&task.name),
                        text(&last),
                    );
                }
            }
        }
        out
    }
}

fn text<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string)
}

fn date(value: &Option<DateTime<FixedOffset>>) -> String {
    value.map_or_else(
        || "-".to_string(),
        |date| date.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// DTOs accepted by `jellyfinctl query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DtoKind {
    Session,
    GetPrograms,
    GeneralCommand,
    MessageCommand,
    PlaybackInfo,
    PlaybackStart,
    PlaybackProgress,
    PlaybackStop,
    UserPolicy,
    UserConfiguration,
    SystemInfo,
    Timer,
    SeriesTimer,
    SearchHint,
    Task,
    Item,
}

/// Parse `json` as `kind` and encode it, deep-object style under `prefix`
/// when one is given.
pub fn encode_query(
    kind: DtoKind,
    json: &str,
    prefix: Option<&str>,
) -> ClientResult<String> {
    fn encode<T: Dto>(json: &str, prefix: Option<&str>) -> ClientResult<String> {
        let value = T::from_json(json)?;
        let query = match prefix {
            Some(prefix) => value.to_url_query_string_with_prefix(prefix)?,
            None => value.to_url_query_string()?,
        };
        Ok(query)
    }

    match kind {
        DtoKind::Session => encode::<SessionInfoDto>(json, prefix),
        DtoKind::GetPrograms => encode::<GetProgramsDto>(json, prefix),
        DtoKind::GeneralCommand => encode::<GeneralCommand>(json, prefix),
        DtoKind::MessageCommand => encode::<MessageCommand>(json, prefix),
        DtoKind::PlaybackInfo => encode::<PlaybackInfoDto>(json, prefix),
        DtoKind::PlaybackStart => encode::<PlaybackStartInfo>(json, prefix),
        DtoKind::PlaybackProgress => {
            encode::<PlaybackProgressInfo>(json, prefix)
        }
        DtoKind::PlaybackStop => encode::<PlaybackStopInfo>(json, prefix),
        DtoKind::UserPolicy => encode::<UserPolicy>(json, prefix),
        DtoKind::UserConfiguration => encode::<UserConfiguration>(json, prefix),
        DtoKind::SystemInfo => encode::<SystemInfo>(json, prefix),
        DtoKind::Timer => encode::<TimerInfoDto>(json, prefix),
        DtoKind::SeriesTimer => encode::<SeriesTimerInfoDto>(json, prefix),
        DtoKind::SearchHint => encode::<SearchHint>(json, prefix),
        DtoKind::Task => encode::<TaskInfo>(json, prefix),
        DtoKind::Item => encode::<BaseItemDto>(json, prefix),
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::*;

    use super::*;
    use crate::api::MockJellyfinApi;
    use crate::error::ClientError;

    #[tokio::test]
    async fn sessions_summary_marks_idle_clients() {
        let mut api = MockJellyfinApi::new();
        api.expect_sessions()
            .with(eq(SessionsQuery {
                active_within_seconds: Some(960),
                ..Default::default()
            }))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    SessionInfoDto::builder()
                        .id("s1")
                        .user_name("alice")
                        .client("Jellyfin Web")
                        .device_name("Firefox")
                        .now_playing_item(
                            BaseItemDto::builder().name("Heat").build(),
                        )
                        .build(),
                    SessionInfoDto::builder()
                        .id("s2")
                        .user_name("bob")
                        .client("Kodi")
                        .device_name("Den")
                        .build(),
                ])
            });

        let report = ReportRequest::Sessions {
            active_within_seconds: Some(960),
        }
        .fetch(&api, None)
        .await
        .expect("fetch");

        assert_eq!(
            report.render(OutputFormat::Summary).expect("render"),
            "s1  alice  Jellyfin Web on Firefox  Heat\n\
             s2  bob  Kodi on Den  idle\n"
        );
    }

    #[tokio::test]
    async fn search_passes_term_limit_and_user() {
        let user = Uuid::from_u128(7);
        let mut api = MockJellyfinApi::new();
        api.expect_search_hints()
            .withf(move |query| {
                query.search_term == "heat"
                    && query.limit == Some(3)
                    && query.user_id == Some(user)
            })
            .returning(|_| {
                Ok(SearchHintResult::builder()
                    .add_search_hint(
                        SearchHint::builder()
                            .name("Heat")
                            .r#type(BaseItemKind::Movie)
                            .production_year(1995)
                            .build(),
                    )
                    .total_record_count(4)
                    .build())
            });

        let report = ReportRequest::Search {
            term: "heat".into(),
            limit: Some(3),
        }
        .fetch(&api, Some(user))
        .await
        .expect("fetch");

        assert_eq!(
            report.render(OutputFormat::Summary).expect("render"),
            "1 of 4 hits\nMovie        Heat (1995)\n"
        );
    }

    #[tokio::test]
    async fn programs_request_builds_guide_query() {
        let channel = Uuid::from_u128(0xc);
        let mut api = MockJellyfinApi::new();
        api.expect_programs()
            .withf(move |query| {
                query.channel_ids.as_deref() == Some(&[channel][..])
                    && query.is_airing == Some(true)
                    && query.limit == Some(5)
                    && query.enable_total_record_count == Some(true)
            })
            .returning(|_| Ok(BaseItemDtoQueryResult::default()));

        let report = ReportRequest::Programs {
            channels: vec![channel],
            limit: Some(5),
            airing: true,
        }
        .fetch(&api, None)
        .await
        .expect("fetch");

        assert_eq!(
            report.render(OutputFormat::Summary).expect("render"),
            "no programs\n"
        );
    }

    #[tokio::test]
    async fn errors_pass_through() {
        let mut api = MockJellyfinApi::new();
        api.expect_system_info()
            .returning(|| Err(ClientError::Unauthorized));

        let err = ReportRequest::Info
            .fetch(&api, None)
            .await
            .expect_err("unauthorized");
        assert!(matches!(err, ClientError::Unauthorized));
    }

    #[test]
    fn json_output_uses_wire_names() {
        let report = Report::Info(
            SystemInfo::builder()
                .server_name("den")
                .version("10.10.3")
                .build(),
        );
        let json = report.render(OutputFormat::Json).expect("render");
        assert!(json.contains("\"ServerName\": \"den\""));
        assert!(json.contains("\"CanSelfRestart\": true"));
    }

    #[test]
    fn info_summary_falls_back_to_operating_system() {
        let report = Report::Info(
            SystemInfo::builder()
                .server_name("den")
                .version("10.10.3")
                .operating_system("Linux")
                .id("abc")
                .build(),
        );
        assert_eq!(
            report.render(OutputFormat::Summary).expect("render"),
            "den 10.10.3 on Linux (id abc)\n"
        );
    }

    #[test]
    fn dump_lists_every_task() {
        let report = Report::Tasks(vec![
            TaskInfo::builder().name("Scan").build(),
            TaskInfo::builder().name("Clean").build(),
        ]);
        let dump = report.render(OutputFormat::Dump).expect("render");
        assert!(dump.contains("\"Scan\""));
        assert!(dump.contains("\"Clean\""));
        assert!(dump.contains("state: None"));
    }

    #[test]
    fn encode_query_for_message_command() {
        let query = encode_query(
            DtoKind::MessageCommand,
            r#"{"Header":"Hi","Text":"a b","TimeoutMs":5000}"#,
            None,
        )
        .expect("encode");
        assert_eq!(query, "Header=Hi&Text=a%20b&TimeoutMs=5000");

        let deep = encode_query(
            DtoKind::MessageCommand,
            r#"{"Header":"Hi"}"#,
            Some("msg"),
        )
        .expect("encode");
        assert_eq!(deep, "msg[Header]=Hi");
    }

    #[test]
    fn encode_query_rejects_malformed_json() {
        let err = encode_query(DtoKind::GetPrograms, "{", None)
            .expect_err("malformed");
        assert!(matches!(
            err,
            ClientError::Model(ModelError::MalformedResponse(_))
        ));
    }
}
