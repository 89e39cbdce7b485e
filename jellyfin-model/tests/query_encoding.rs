//! Query-string encoding across the two addressing styles.

use jellyfin_model::prelude::*;
use jellyfin_model::uuid::Uuid;

const USER: &str = "11111111-1111-1111-1111-111111111111";

fn user() -> Uuid {
    USER.parse().expect("valid uuid")
}

#[test]
fn active_session_encodes_user_and_flag() {
    let session = SessionInfoDto::builder()
        .user_id(user())
        .is_active(true)
        .now_playing_queue(Vec::<QueueItem>::new())
        .build();

    let query = session.to_url_query_string().expect("query");
    assert!(query.contains(&format!("UserId={USER}&IsActive=true")));
    assert_eq!(query, format!("UserId={USER}&IsActive=true"));
    assert!(!query.contains("NowPlayingQueue"));
}

#[test]
fn flat_and_deep_styles_differ_only_by_brackets() {
    let session = SessionInfoDto::builder()
        .play_state(PlayerStateInfo::builder().position_ticks(Ticks::new(100)).build())
        .user_id(user())
        .is_active(true)
        .add_supported_command(GeneralCommandType::DisplayMessage)
        .add_supported_command(GeneralCommandType::SetVolume)
        .build();

    let flat = session.to_url_query_string().expect("flat");
    assert_eq!(
        flat,
        format!(
            "PlayState[PositionTicks]=100&UserId={USER}&IsActive=true\
             &SupportedCommands=DisplayMessage&SupportedCommands=SetVolume"
        )
    );

    let deep = session
        .to_url_query_string_with_prefix("session")
        .expect("deep");
    assert_eq!(
        deep,
        format!(
            "session[PlayState][PositionTicks]=100&session[UserId]={USER}\
             &session[IsActive]=true&session[SupportedCommands][0]=DisplayMessage\
             &session[SupportedCommands][1]=SetVolume"
        )
    );
}

#[test]
fn explicit_style_without_prefix_indexes_lists() {
    let query = GetProgramsDto::builder()
        .add_genre("News")
        .add_genre("Sports")
        .enable_total_record_count(false)
        .build();

    let pairs = query
        .query_pairs(AddressingStyle::DeepObject, None)
        .expect("pairs");
    let rendered: Vec<String> = pairs.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        ["Genres[0]=News", "Genres[1]=Sports", "EnableTotalRecordCount=false"]
    );
}

#[test]
fn none_is_omitted_but_wire_defaults_are_kept() {
    let policy = UserPolicy {
        is_administrator: Some(false),
        blocked_tags: Some(Vec::new()),
        max_parental_rating: Some(0),
        ..UserPolicy::default()
    };

    let query = policy.to_url_query_string().expect("query");
    assert!(query.starts_with("IsAdministrator=false"));
    assert!(query.contains("MaxParentalRating=0"));
    assert!(!query.contains("IsHidden"));
    // An empty list contributes no pairs.
    assert!(!query.contains("BlockedTags"));

    // The schema defaults of a fresh policy are present.
    assert!(query.contains("EnableCollectionManagement=false"));
}

#[test]
fn values_are_percent_encoded_and_keys_are_not() {
    let command = MessageCommand::builder()
        .header("Doorbell")
        .text("Someone is at the door & waiting")
        .timeout_ms(5_000)
        .build();

    assert_eq!(
        command.to_url_query_string_with_prefix("msg").expect("query"),
        "msg[Header]=Doorbell&msg[Text]=Someone%20is%20at%20the%20door%20%26%20waiting\
         &msg[TimeoutMs]=5000"
    );
}

#[test]
fn dates_keep_their_offset_in_query_values() {
    let start: jellyfin_model::chrono::DateTime<jellyfin_model::chrono::FixedOffset> =
        "2026-03-01T20:15:00+01:00".parse().expect("date");
    let query = GetProgramsDto {
        min_start_date: Some(start),
        enable_total_record_count: None,
        ..GetProgramsDto::default()
    };

    assert_eq!(
        query.to_url_query_string().expect("query"),
        "MinStartDate=2026-03-01T20%3A15%3A00%2B01%3A00"
    );
}

#[test]
fn list_of_objects_recurses_per_element() {
    let options = LiveTvOptions::builder()
        .add_tuner_host(TunerHostInfo::builder().url("http://hdhr.local").build())
        .add_tuner_host(
            TunerHostInfo::builder()
                .r#type("m3u")
                .allow_hw_transcoding(true)
                .build(),
        )
        .build();

    // Flat addressing repeats the list key without an index.
    assert_eq!(
        options.to_url_query_string().expect("flat"),
        "TunerHosts[Url]=http%3A%2F%2Fhdhr.local&TunerHosts[Type]=m3u\
         &TunerHosts[AllowHWTranscoding]=true"
    );
    assert_eq!(
        options.to_url_query_string_with_prefix("tv").expect("deep"),
        "tv[TunerHosts][0][Url]=http%3A%2F%2Fhdhr.local&tv[TunerHosts][1][Type]=m3u\
         &tv[TunerHosts][1][AllowHWTranscoding]=true"
    );
}
