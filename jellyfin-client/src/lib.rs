//! Async client for the Jellyfin REST API.
//!
//! [`JellyfinClient`] implements [`JellyfinApi`] over `reqwest`, speaking the
//! DTOs from [`jellyfin_model`]. Settings come from [`ClientConfig`], layered
//! from defaults, a TOML file and `JELLYFIN_*` environment variables.
#![allow(missing_docs)]

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod report;
pub mod routes;

pub use jellyfin_model as model;

pub use api::JellyfinApi;
pub use auth::{AccessToken, ClientIdentity};
pub use client::JellyfinClient;
pub use config::{ClientConfig, ConfigError, EnvClientConfig, FileClientConfig};
pub use error::{ClientError, ClientResult};
pub use params::{
    PlayParams, PlaystateParams, ScheduledTasksQuery, SearchHintsQuery,
    SessionsQuery, TimersQuery,
};
