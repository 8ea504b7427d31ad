mod common;

use common::{fixture_db, fixture_db_with, missing_db_config};
use zefram_core::{
    framework, get_framework, FrameworkCode, FrameworkLookup, FrameworkQuery, ZeframError,
};

#[test]
fn single_code_returns_matching_framework() {
    let db = fixture_db();

    let lookup = framework(&db.config, "LTA").unwrap();
    let lta = lookup.into_single().expect("single query yields one record");
    assert_eq!(lta.code, "LTA");
    assert_eq!(lta.name.as_deref(), Some("Linde Type A"));
    assert_eq!(lta.a, Some(23.8));
    assert_eq!(lta.tpv_abs, Some(0.31));
    assert_eq!(lta.tpv_rel, Some(47.2));
    assert_eq!(lta.isinterrupted, Some(false));
    assert_eq!(lta.spacegroup_id, Some(1));
}

#[test]
fn normalized_code_matches_stored_upper_case() {
    let db = fixture_db();

    let code = FrameworkCode::parse_normalized("mfi").unwrap();
    let mfi = get_framework(&db.config, code.as_str()).unwrap();
    assert_eq!(mfi.code, code.as_str());
}

#[test]
fn lookup_is_case_sensitive() {
    let db = fixture_db();

    let err = get_framework(&db.config, "lta").unwrap_err();
    assert!(matches!(err, ZeframError::RecordNotFound { ref code } if code == "lta"));
}

#[test]
fn list_query_preserves_input_order() {
    let db = fixture_db();

    let lookup = framework(&db.config, ["MFI", "LTA", "ABC", "LTA"]).unwrap();
    let codes: Vec<_> = match lookup {
        FrameworkLookup::Many(frameworks) => {
            frameworks.into_iter().map(|item| item.code).collect()
        }
        FrameworkLookup::One(_) => panic!("list query must yield a list"),
    };
    assert_eq!(codes, vec!["MFI", "LTA", "ABC", "LTA"]);
}

#[test]
fn owned_list_query_is_accepted() {
    let db = fixture_db();

    let query = FrameworkQuery::from(vec!["ABC".to_string(), "MFI".to_string()]);
    let frameworks = framework(&db.config, query).unwrap().into_vec();
    assert_eq!(frameworks.len(), 2);
    assert_eq!(frameworks[0].code, "ABC");
    assert_eq!(frameworks[1].code, "MFI");
}

#[test]
fn wrong_length_code_fails_before_storage_access() {
    let (_dir, config) = missing_db_config();

    for code in ["", "LT", "LTAX", "abcdef"] {
        let err = framework(&config, code).unwrap_err();
        assert!(
            matches!(err, ZeframError::InvalidCode { .. }),
            "unexpected error for `{code}`: {err}"
        );
    }
}

#[test]
fn one_invalid_list_element_fails_whole_query_before_storage_access() {
    let (_dir, config) = missing_db_config();

    let err = framework(&config, vec!["LTA", "TOOLONG"]).unwrap_err();
    assert!(matches!(err, ZeframError::InvalidCode { ref code } if code == "TOOLONG"));
}

#[test]
fn empty_list_yields_empty_list_without_storage_access() {
    let (_dir, config) = missing_db_config();

    let lookup = framework(&config, Vec::<String>::new()).unwrap();
    assert_eq!(lookup, FrameworkLookup::Many(Vec::new()));
}

#[test]
fn unknown_code_is_not_found() {
    let db = fixture_db();

    let err = framework(&db.config, "QQQ").unwrap_err();
    assert!(matches!(err, ZeframError::RecordNotFound { ref code } if code == "QQQ"));
}

#[test]
fn unknown_code_in_list_is_not_found() {
    let db = fixture_db();

    let err = framework(&db.config, ["LTA", "QQQ"]).unwrap_err();
    assert!(matches!(err, ZeframError::RecordNotFound { ref code } if code == "QQQ"));
}

#[test]
fn duplicated_code_reports_multiple_records() {
    let db = fixture_db_with("INSERT INTO frameworks (id, code, name) VALUES (10, 'LTA', 'copy');");

    let err = framework(&db.config, "LTA").unwrap_err();
    assert!(matches!(
        err,
        ZeframError::MultipleRecords { ref code, count: 2 } if code == "LTA"
    ));
}

#[test]
fn missing_database_is_storage_unavailable() {
    let (_dir, config) = missing_db_config();

    let err = framework(&config, "LTA").unwrap_err();
    assert!(matches!(err, ZeframError::StorageUnavailable { .. }));
}

#[test]
fn framework_serializes_with_field_names() {
    let db = fixture_db();

    let lta = get_framework(&db.config, "LTA").unwrap();
    let json = serde_json::to_value(&lta).unwrap();
    assert_eq!(json["code"], "LTA");
    assert_eq!(json["channel_dim"], 3);
    assert!(json["maxdsi"].is_null());
}
