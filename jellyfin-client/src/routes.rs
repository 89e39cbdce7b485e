//! Jellyfin REST paths.
//!
//! Path parameters are written as `{name}` placeholders and filled in with
//! [`utils::replace_param`].

pub mod system {
    pub const INFO: &str = "/System/Info";
    pub const INFO_PUBLIC: &str = "/System/Info/Public";
    pub const PING: &str = "/System/Ping";
    pub const CONFIGURATION: &str = "/System/Configuration";
}

pub mod sessions {
    pub const COLLECTION: &str = "/Sessions";
    pub const PLAYSTATE: &str = "/Sessions/{sessionId}/Playing/{command}";
    pub const PLAY: &str = "/Sessions/{sessionId}/Playing";
    pub const COMMAND: &str = "/Sessions/{sessionId}/Command";
    pub const MESSAGE: &str = "/Sessions/{sessionId}/Message";

    pub mod playing {
        pub const START: &str = "/Sessions/Playing";
        pub const PROGRESS: &str = "/Sessions/Playing/Progress";
        pub const STOPPED: &str = "/Sessions/Playing/Stopped";
    }
}

pub mod items {
    pub const PLAYBACK_INFO: &str = "/Items/{itemId}/PlaybackInfo";
}

pub mod live_tv {
    pub const PROGRAMS: &str = "/LiveTv/Programs";
    pub const TIMERS: &str = "/LiveTv/Timers";
    pub const TIMER: &str = "/LiveTv/Timers/{timerId}";
    pub const SERIES_TIMERS: &str = "/LiveTv/SeriesTimers";
    pub const LISTING_PROVIDERS: &str = "/LiveTv/ListingProviders";
    pub const DEFAULT_LISTING_PROVIDER: &str =
        "/LiveTv/ListingProviders/Default";
}

pub mod search {
    pub const HINTS: &str = "/Search/Hints";
}

pub mod users {
    pub const POLICY: &str = "/Users/{userId}/Policy";
    pub const CONFIGURATION: &str = "/Users/Configuration";
}

pub mod tasks {
    pub const COLLECTION: &str = "/ScheduledTasks";
}

pub mod utils {
    /// Replace a single path parameter (e.g. `"{sessionId}"`) with the
    /// percent-encoded value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, &urlencoding::encode(value.as_ref()))
    }

    /// Replace multiple path parameters in order.
    pub fn replace_params(
        route: &str,
        params: &[(impl AsRef<str>, impl AsRef<str>)],
    ) -> String {
        let mut path = route.to_string();
        for (param, value) in params {
            path = replace_param(&path, param.as_ref(), value);
        }
        path
    }

    /// Append an already encoded query string, if it is not empty.
    pub fn with_query(route: &str, query: &str) -> String {
        if query.is_empty() {
            return route.to_string();
        }
        format!("{route}?{query}")
    }
}
