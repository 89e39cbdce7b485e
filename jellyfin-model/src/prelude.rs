//! Glob-importable surface for API consumers: the `Dto` trait, every DTO
//! and builder, and the wire enums.

pub use super::configuration::*;
pub use super::device_profile::*;
pub use super::dto::Dto;
pub use super::error::{ModelError, Result as ModelResult};
pub use super::item::*;
pub use super::kinds::*;
pub use super::live_tv::*;
pub use super::media::*;
pub use super::playback::*;
pub use super::query::{AddressingStyle, KeyPath, QueryPair};
pub use super::search::*;
pub use super::session::*;
pub use super::system::*;
pub use super::ticks::Ticks;
pub use super::user::*;
