//! Typed data-transfer objects for the Jellyfin REST API.
//!
//! Every DTO is a struct of optional PascalCase fields generated by an
//! internal macro, with a consuming builder, structural `Eq`/`Hash`, JSON
//! conversion and URL query-string encoding through the [`Dto`] trait.
#![allow(missing_docs)]

#[macro_use]
mod macros;

pub use ::chrono;
pub use ::ordered_float;
pub use ::uuid;

pub mod configuration;
pub mod device_profile;
pub mod dto;
pub mod error;
mod finite;
pub mod item;
pub mod kinds;
pub mod live_tv;
pub mod media;
pub mod playback;
pub mod prelude;
pub mod query;
pub mod search;
pub mod session;
pub mod system;
pub mod ticks;
pub mod user;

pub use dto::Dto;
pub use error::{ModelError, Result as ModelResult};
pub use item::{BaseItemDto, BaseItemDtoQueryResult};
pub use kinds::{BaseItemKind, ImageType, ItemFields, ItemSortBy, MediaType, SortOrder};
pub use live_tv::{
    GetProgramsDto, ListingsProviderInfo, LiveTvOptions, SeriesTimerInfoDto,
    TimerInfoDto,
};
pub use playback::{
    PlaybackInfoDto, PlaybackInfoResponse, PlaybackProgressInfo,
    PlaybackStartInfo, PlaybackStopInfo,
};
pub use query::{AddressingStyle, KeyPath, QueryPair, Segment};
pub use search::{SearchHint, SearchHintResult};
pub use session::{GeneralCommand, MessageCommand, SessionInfoDto};
pub use system::{SystemInfo, TaskInfo, TaskResult};
pub use ticks::Ticks;
pub use user::{UserConfiguration, UserPolicy};
