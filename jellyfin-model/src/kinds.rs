//! Enumerations shared across several API objects.

dto_enum! {
    /// Broad media classification used by items, sessions and search hints.
    pub enum MediaType {
        Unknown => "Unknown",
        Video => "Video",
        Audio => "Audio",
        Photo => "Photo",
        Book => "Book",
    }
}

dto_enum! {
    /// Concrete server-side type of a library item.
    pub enum BaseItemKind {
        AggregateFolder => "AggregateFolder",
        Audio => "Audio",
        AudioBook => "AudioBook",
        BasePluginFolder => "BasePluginFolder",
        Book => "Book",
        BoxSet => "BoxSet",
        Channel => "Channel",
        ChannelFolderItem => "ChannelFolderItem",
        CollectionFolder => "CollectionFolder",
        Episode => "Episode",
        Folder => "Folder",
        Genre => "Genre",
        ManualPlaylistsFolder => "ManualPlaylistsFolder",
        Movie => "Movie",
        LiveTvChannel => "LiveTvChannel",
        LiveTvProgram => "LiveTvProgram",
        MusicAlbum => "MusicAlbum",
        MusicArtist => "MusicArtist",
        MusicGenre => "MusicGenre",
        MusicVideo => "MusicVideo",
        Person => "Person",
        Photo => "Photo",
        PhotoAlbum => "PhotoAlbum",
        Playlist => "Playlist",
        PlaylistsFolder => "PlaylistsFolder",
        Program => "Program",
        Recording => "Recording",
        Season => "Season",
        Series => "Series",
        Studio => "Studio",
        Trailer => "Trailer",
        TvChannel => "TvChannel",
        TvProgram => "TvProgram",
        UserRootFolder => "UserRootFolder",
        UserView => "UserView",
        Video => "Video",
        Year => "Year",
    }
}

dto_enum! {
    pub enum ImageType {
        Primary => "Primary",
        Art => "Art",
        Backdrop => "Backdrop",
        Banner => "Banner",
        Logo => "Logo",
        Thumb => "Thumb",
        Disc => "Disc",
        Box => "Box",
        Screenshot => "Screenshot",
        Menu => "Menu",
        Chapter => "Chapter",
        BoxRear => "BoxRear",
        Profile => "Profile",
    }
}

dto_enum! {
    /// Optional item fields a query can ask the server to populate.
    pub enum ItemFields {
        AirTime => "AirTime",
        CanDelete => "CanDelete",
        CanDownload => "CanDownload",
        ChannelInfo => "ChannelInfo",
        Chapters => "Chapters",
        Trickplay => "Trickplay",
        ChildCount => "ChildCount",
        CumulativeRunTimeTicks => "CumulativeRunTimeTicks",
        CustomRating => "CustomRating",
        DateCreated => "DateCreated",
        DateLastMediaAdded => "DateLastMediaAdded",
        DisplayPreferencesId => "DisplayPreferencesId",
        Etag => "Etag",
        ExternalUrls => "ExternalUrls",
        Genres => "Genres",
        HomePageUrl => "HomePageUrl",
        ItemCounts => "ItemCounts",
        MediaSourceCount => "MediaSourceCount",
        MediaSources => "MediaSources",
        OriginalTitle => "OriginalTitle",
        Overview => "Overview",
        ParentId => "ParentId",
        Path => "Path",
        People => "People",
        PlayAccess => "PlayAccess",
        ProductionLocations => "ProductionLocations",
        ProviderIds => "ProviderIds",
        PrimaryImageAspectRatio => "PrimaryImageAspectRatio",
        RecursiveItemCount => "RecursiveItemCount",
        Settings => "Settings",
        SeriesStudio => "SeriesStudio",
        SortName => "SortName",
        SpecialEpisodeNumbers => "SpecialEpisodeNumbers",
        Studios => "Studios",
        Taglines => "Taglines",
        Tags => "Tags",
        RemoteTrailers => "RemoteTrailers",
        MediaStreams => "MediaStreams",
        SeasonUserData => "SeasonUserData",
        DateLastRefreshed => "DateLastRefreshed",
        DateLastSaved => "DateLastSaved",
        RefreshState => "RefreshState",
        ChannelImage => "ChannelImage",
        EnableMediaSourceDisplay => "EnableMediaSourceDisplay",
        Width => "Width",
        Height => "Height",
        ExtraIds => "ExtraIds",
        LocalTrailerCount => "LocalTrailerCount",
        IsHd => "IsHD",
        SpecialFeatureCount => "SpecialFeatureCount",
    }
}

dto_enum! {
    pub enum ItemSortBy {
        Default => "Default",
        AiredEpisodeOrder => "AiredEpisodeOrder",
        Album => "Album",
        AlbumArtist => "AlbumArtist",
        Artist => "Artist",
        DateCreated => "DateCreated",
        OfficialRating => "OfficialRating",
        DatePlayed => "DatePlayed",
        PremiereDate => "PremiereDate",
        StartDate => "StartDate",
        SortName => "SortName",
        Name => "Name",
        Random => "Random",
        Runtime => "Runtime",
        CommunityRating => "CommunityRating",
        ProductionYear => "ProductionYear",
        PlayCount => "PlayCount",
        CriticRating => "CriticRating",
        IsFolder => "IsFolder",
        IsUnplayed => "IsUnplayed",
        IsPlayed => "IsPlayed",
        SeriesSortName => "SeriesSortName",
        VideoBitRate => "VideoBitRate",
        AirTime => "AirTime",
        Studio => "Studio",
        IsFavoriteOrLiked => "IsFavoriteOrLiked",
        DateLastContentAdded => "DateLastContentAdded",
        SeriesDatePlayed => "SeriesDatePlayed",
        ParentIndexNumber => "ParentIndexNumber",
        IndexNumber => "IndexNumber",
        SimilarityScore => "SimilarityScore",
        SearchScore => "SearchScore",
    }
}

dto_enum! {
    pub enum SortOrder {
        Ascending => "Ascending",
        Descending => "Descending",
    }
}

dto_enum! {
    pub enum DayOfWeek {
        Sunday => "Sunday",
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::error::ModelError;

    #[test]
    fn wire_names_agree_across_serde_display_and_from_str() {
        for kind in ItemFields::all() {
            let json = serde_json::to_string(kind).expect("serialize");
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(ItemFields::from_str(&kind.to_string()).expect("parse"), *kind);
        }
    }

    #[test]
    fn irregular_constant_is_kept() {
        assert_eq!(ItemFields::IsHd.as_str(), "IsHD");
        let parsed: ItemFields = serde_json::from_str("\"IsHD\"").expect("deserialize");
        assert_eq!(parsed, ItemFields::IsHd);
    }

    #[test]
    fn unknown_constant_is_rejected() {
        let err = SortOrder::from_str("Sideways").expect_err("unknown value");
        assert!(matches!(err, ModelError::UnknownVariant { kind: "SortOrder", .. }));
        assert!(serde_json::from_str::<MediaType>("\"Hologram\"").is_err());
    }
}
