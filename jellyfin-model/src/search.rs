//! `/Search/Hints` results.

use chrono::{DateTime, FixedOffset};
use ordered_float::OrderedFloat;
use uuid::Uuid;

use crate::kinds::{BaseItemKind, MediaType};
use crate::ticks::Ticks;

dto! {
    /// A lightweight search match, enough to render a result row.
    pub struct SearchHint => SearchHintBuilder {
        /// Deprecated upstream in favor of `Id`; still sent by servers.
        item_id: Uuid,
        id: Uuid,
        name: String,
        matched_term: String,
        index_number: i32,
        production_year: i32,
        parent_index_number: i32,
        primary_image_tag: String,
        thumb_image_tag: String,
        thumb_image_item_id: String,
        backdrop_image_tag: String,
        backdrop_image_item_id: String,
        r#type: BaseItemKind,
        is_folder: bool,
        run_time_ticks: Ticks,
        media_type: MediaType = MediaType::Unknown,
        start_date: DateTime<FixedOffset>,
        end_date: DateTime<FixedOffset>,
        series: String,
        status: String,
        album: String,
        album_id: Uuid,
        album_artist: String,
        artists: Vec<String> = Vec::new(); push add_artist: String,
        song_count: i32,
        episode_count: i32,
        channel_id: Uuid,
        channel_name: String,
        primary_image_aspect_ratio: OrderedFloat<f64>,
    }
}

impl SearchHint {
    /// `Id`, falling back to the legacy `ItemId`.
    pub fn effective_id(&self) -> Option<Uuid> {
        self.id.or(self.item_id)
    }
}

dto! {
    pub struct SearchHintResult => SearchHintResultBuilder {
        search_hints: Vec<SearchHint>; push add_search_hint: SearchHint,
        total_record_count: i32,
    }
}
