//! camelCase query parameters of the endpoints that take no DTO.

use serde::Serialize;
use uuid::Uuid;

use jellyfin_model::kinds::{BaseItemKind, MediaType};
use jellyfin_model::query;
use jellyfin_model::session::PlayCommand;
use jellyfin_model::ticks::Ticks;

use crate::error::ClientResult;

/// Flat-encode a parameter struct.
pub(crate) fn encode<T: Serialize>(params: &T) -> ClientResult<String> {
    Ok(query::to_query_string(params, None)?)
}

/// `GET /Sessions`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controllable_by_user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_within_seconds: Option<i32>,
}

/// `POST /Sessions/{sessionId}/Playing/{command}`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaystateParams {
    /// Only meaningful for `Seek`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seek_position_ticks: Option<Ticks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controlling_user_id: Option<Uuid>,
}

/// `POST /Sessions/{sessionId}/Playing`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayParams {
    pub play_command: PlayCommand,
    pub item_ids: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_position_ticks: Option<Ticks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_stream_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_stream_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i32>,
}

impl PlayParams {
    pub fn new(
        play_command: PlayCommand,
        item_ids: impl IntoIterator<Item = Uuid>,
    ) -> Self {
        Self {
            play_command,
            item_ids: item_ids.into_iter().collect(),
            start_position_ticks: None,
            media_source_id: None,
            audio_stream_index: None,
            subtitle_stream_index: None,
            start_index: None,
        }
    }
}

/// `GET /LiveTv/Timers`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_timer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_scheduled: Option<bool>,
}

/// `GET /Search/Hints`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHintsQuery {
    pub search_term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_item_types: Vec<BaseItemKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_item_types: Vec<BaseItemKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media_types: Vec<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_movie: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_series: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_news: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_kids: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sports: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_people: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_genres: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_studios: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_artists: Option<bool>,
}

impl SearchHintsQuery {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..Self::default()
        }
    }

    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn include_item_type(mut self, kind: BaseItemKind) -> Self {
        self.include_item_types.push(kind);
        self
    }
}

/// `GET /ScheduledTasks`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTasksQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

/// `POST /Users/Configuration`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserConfigurationQuery {
    pub user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_encode_to_nothing() {
        assert_eq!(encode(&SessionsQuery::default()).expect("encode"), "");
        assert_eq!(encode(&TimersQuery::default()).expect("encode"), "");
    }

    #[test]
    fn names_are_camel_case() {
        let query = SessionsQuery {
            device_id: Some("tv-1".into()),
            active_within_seconds: Some(960),
            ..Default::default()
        };
        assert_eq!(
            encode(&query).expect("encode"),
            "deviceId=tv-1&activeWithinSeconds=960"
        );
    }

    #[test]
    fn play_params_repeat_item_ids() {
        let first = Uuid::from_u128(1);
        let second = Uuid::from_u128(2);
        let mut params = PlayParams::new(PlayCommand::PlayNow, [first, second]);
        params.start_position_ticks = Some(Ticks::from_seconds(5));

        assert_eq!(
            encode(&params).expect("encode"),
            format!(
                "playCommand=PlayNow&itemIds={first}&itemIds={second}\
                 &startPositionTicks=50000000"
            )
        );
    }

    #[test]
    fn search_term_is_percent_encoded() {
        let query = SearchHintsQuery::new("Tom & Jerry")
            .limit(5)
            .include_item_type(BaseItemKind::Movie);
        assert_eq!(
            encode(&query).expect("encode"),
            "searchTerm=Tom%20%26%20Jerry&limit=5&includeItemTypes=Movie"
        );
    }
}
