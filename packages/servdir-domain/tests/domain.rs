use servdir_domain::{SortMode, is_valid_identifier, is_valid_timestamp};

#[test]
fn accepts_generated_identifiers() {
	for _ in 0..16 {
		let id = uuid::Uuid::new_v4().to_string();

		assert!(is_valid_identifier(&id), "Rejected {id}.");
		assert!(is_valid_identifier(&id.to_ascii_uppercase()), "Rejected uppercase {id}.");
	}
}

#[test]
fn rejects_identifiers_that_are_not_hyphenated_uuids() {
	for raw in [
		"",
		"not-a-uuid",
		"550e8400e29b41d4a716446655440000",
		"{550e8400-e29b-41d4-a716-446655440000}",
		"550e8400-e29b-41d4-a716-44665544000g",
		"550e8400-e29b-41d4-a716-4466554400000",
		" 550e8400-e29b-41d4-a716-446655440000",
		"urn:uuid:550e8400-e29b-41d4-a716-446655440000",
	] {
		assert!(!is_valid_identifier(raw), "Accepted {raw:?}.");
	}
}

#[test]
fn accepts_rfc3339_timestamps() {
	for raw in [
		"2026-02-06T12:00:00.000Z",
		"2026-02-06T12:00:00Z",
		"2026-02-06T12:00:00.123456+00:00",
		"2026-02-06T07:00:00-05:00",
	] {
		assert!(is_valid_timestamp(raw), "Rejected {raw:?}.");
	}
}

#[test]
fn rejects_malformed_timestamps() {
	for raw in ["", "yesterday", "2026-02-30T12:00:00Z", "2026-02-06", "2026-02-06 12:00"] {
		assert!(!is_valid_timestamp(raw), "Accepted {raw:?}.");
	}
}

#[test]
fn sort_mode_serializes_as_wire_name() {
	assert_eq!(serde_json::to_string(&SortMode::Newest).expect("Serialize."), "\"newest\"");
	assert_eq!(
		serde_json::from_str::<SortMode>("\"verified\"").expect("Deserialize."),
		SortMode::Verified
	);
	assert!(serde_json::from_str::<SortMode>("\"popular\"").is_err());
	assert_eq!(SortMode::default(), SortMode::Verified);
}
