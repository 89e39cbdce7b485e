//! Structural equality, hashing, builders and the debug dump.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use jellyfin_model::ordered_float::OrderedFloat;
use jellyfin_model::prelude::*;
use jellyfin_model::uuid::Uuid;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_values_hash_equal() {
    let a = TimerInfoDto::builder()
        .id("t1")
        .channel_name("BBC One")
        .add_parent_backdrop_image_tag("x")
        .build();
    let b = TimerInfoDto::from_json(&a.to_json().expect("serialize")).expect("deserialize");

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(TimerInfoDto::default(), TimerInfoDto::default());
}

#[test]
fn list_order_is_significant() {
    let forward = GetProgramsDto::builder()
        .add_genre("News")
        .add_genre("Sports")
        .build();
    let reversed = GetProgramsDto::builder()
        .add_genre("Sports")
        .add_genre("News")
        .build();

    assert_ne!(forward, reversed);
    let set: HashSet<_> = [forward.clone(), reversed, forward].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn unset_and_empty_are_different_values() {
    let unset = UserPolicy {
        blocked_tags: None,
        ..UserPolicy::default()
    };
    let empty = UserPolicy {
        blocked_tags: Some(Vec::new()),
        ..UserPolicy::default()
    };

    assert_ne!(unset, empty);
    assert!(!unset.to_json().expect("json").contains("BlockedTags"));
    assert!(empty.to_json().expect("json").contains("\"BlockedTags\":[]"));
}

#[test]
fn each_build_yields_an_independent_value() {
    let builder = SessionInfoDto::builder().user_name("alice");
    let first = builder.clone().build();
    let second = builder.is_active(true).build();

    assert_eq!(first.is_active, None);
    assert_eq!(second.is_active, Some(true));
    assert_eq!(first.user_name, second.user_name);
}

#[test]
fn to_builder_copies_and_leaves_the_source_untouched() {
    let original = MessageCommand::builder().header("Hi").text("there").build();
    let edited = original.to_builder().text("everyone").timeout_ms(3_000).build();

    assert_eq!(original.text.as_deref(), Some("there"));
    assert_eq!(original.timeout_ms, None);
    assert_eq!(edited.header.as_deref(), Some("Hi"));
    assert_eq!(edited.text.as_deref(), Some("everyone"));
}

#[test]
fn adders_create_lists_lazily_and_keep_order() {
    let first = Uuid::from_u128(1);
    let second = Uuid::from_u128(2);
    let config = UserConfiguration {
        ordered_views: None,
        ..UserConfiguration::default()
    }
    .to_builder()
    .add_ordered_view(first)
    .add_ordered_view(second)
    .build();

    assert_eq!(config.ordered_views, Some(vec![first, second]));
}

#[test]
fn builder_defaults_follow_the_schema() {
    let query = GetProgramsDto::builder().build();
    assert_eq!(query.enable_total_record_count, Some(true));
    assert_eq!(query, GetProgramsDto::default());

    let info = SystemInfo::default();
    assert_eq!(info.can_self_restart, Some(true));
    assert_eq!(info.can_launch_web_browser, Some(false));
    assert_eq!(info.encoder_location.as_deref(), Some("System"));
}

#[test]
fn dump_labels_every_field() {
    let session = SessionInfoDto::builder()
        .user_id(Uuid::from_u128(0x11))
        .is_active(true)
        .build();

    let dump = session.dump();
    assert!(dump.starts_with("SessionInfoDto {"));
    assert!(dump.contains("user_id: Some("));
    assert!(dump.contains("is_active: Some(\n        true,\n    ),"));
    assert!(dump.contains("device_name: None,"));
    assert!(dump.contains("supported_commands: Some(\n        [],\n    ),"));
}

#[test]
fn malformed_json_is_reported_as_malformed_response() {
    let err = SessionInfoDto::from_json(r#"{"IsActive": "yes"}"#).expect_err("bad bool");
    assert!(matches!(err, ModelError::MalformedResponse(_)));

    let err = SessionInfoDto::from_json(r#"{"SupportedCommands": ["Teleport"]}"#)
        .expect_err("unknown command");
    assert!(err.to_string().starts_with("malformed response"));
}

#[test]
fn unknown_properties_are_ignored() {
    let session = SessionInfoDto::from_json(r#"{"Id":"abc","SomeFutureField":{"x":1}}"#)
        .expect("deserialize");
    assert_eq!(session.id.as_deref(), Some("abc"));
}

#[test]
fn null_map_values_survive_parsing_and_encoding() {
    let json = r#"{"Name":"Blade Runner","ProviderIds":{"Tmdb":null,"Imdb":"tt0083658"},"ImageTags":{"Primary":null}}"#;
    let item = BaseItemDto::from_json(json).expect("deserialize");

    assert_eq!(item.provider_id("Imdb"), Some("tt0083658"));
    assert_eq!(item.provider_id("Tmdb"), None);
    let ids = item.provider_ids.as_ref().expect("provider ids");
    assert_eq!(ids.get("Tmdb"), Some(&None));

    let back = BaseItemDto::from_json(&item.to_json().expect("serialize")).expect("reparse");
    assert_eq!(back, item);
    assert_eq!(hash_of(&back), hash_of(&item));

    let query = item.to_url_query_string().expect("query");
    assert!(query.contains("ProviderIds[Imdb]=tt0083658"), "{query}");
    assert!(!query.contains("Tmdb"), "{query}");
    assert!(!query.contains("Primary"), "{query}");
}

#[test]
fn null_command_arguments_are_kept() {
    let json = r#"{"Name":"DisplayMessage","Arguments":{"Header":"Hi","TimeoutMs":null}}"#;
    let command = GeneralCommand::from_json(json).expect("deserialize");
    let arguments = command.arguments.as_ref().expect("arguments");

    assert_eq!(arguments.get("Header"), Some(&Some("Hi".to_owned())));
    assert_eq!(arguments.get("TimeoutMs"), Some(&None));
    assert!(command.to_json().expect("serialize").contains(r#""TimeoutMs":null"#));
}

#[test]
fn non_finite_floats_are_refused_by_json_encoding() {
    let schedule = AccessSchedule {
        start_hour: Some(OrderedFloat(f64::NAN)),
        end_hour: Some(OrderedFloat(6.5)),
        ..AccessSchedule::default()
    };
    assert!(matches!(schedule.to_json(), Err(ModelError::Encode(_))));
    assert!(matches!(schedule.to_json_pretty(), Err(ModelError::Encode(_))));

    let policy = UserPolicy::builder()
        .add_access_schedule(AccessSchedule {
            end_hour: Some(OrderedFloat(f64::INFINITY)),
            ..AccessSchedule::default()
        })
        .build();
    assert!(matches!(policy.to_json(), Err(ModelError::Encode(_))));

    let hint = SearchHint {
        primary_image_aspect_ratio: Some(OrderedFloat(1.5)),
        ..SearchHint::default()
    };
    assert!(hint.to_json().expect("finite").contains("1.5"));
}
