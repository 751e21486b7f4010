use fieldwrap::wrap::{Fallback, Field};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SampleRate(u32);

impl Fallback for SampleRate {
	fn fallback() -> Self {
		SampleRate(48_000)
	}
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Clip {
	name: Field<String>,
	#[serde(default = "Field::absent", skip_serializing_if = "Field::is_absent")]
	markers: Field<Option<Vec<String>>>,
	#[serde(default = "Field::absent", skip_serializing_if = "Field::is_absent")]
	tags: Field<Vec<String>>,
	#[serde(default = "Field::fallback")]
	rate: Field<SampleRate>,
}

fn minimal_clip() -> Clip {
	Clip {
		name: Field::new("take1".to_owned()),
		markers: Field::absent(),
		tags: Field::absent(),
		rate: Field::new(SampleRate(44_100)),
	}
}

#[test]
fn missing_policy_keys_decode_to_their_absent_states() {
	let clip: Clip = serde_json::from_str(r#"{ "name": "take1", "rate": 44100 }"#).expect("missing keys tolerated");
	assert!(clip.markers.is_absent());
	assert!(clip.tags.is_absent());
}

#[test]
fn explicit_null_decodes_to_the_absent_state() {
	let clip: Clip = serde_json::from_str(r#"{ "name": "take1", "markers": null, "rate": 44100 }"#).expect("null tolerated");
	assert!(clip.markers.is_absent());
}

#[test]
fn absent_fields_are_omitted_from_the_encoding() {
	let text = serde_json::to_string(&minimal_clip()).expect("clip encodes");
	assert_eq!(text, r#"{"name":"take1","rate":44100}"#);
}

#[test]
fn non_empty_policy_fields_are_encoded_normally() {
	let clip = Clip {
		markers: Field::new(Some(vec!["intro".to_owned()])),
		tags: Field::new(vec!["raw".to_owned()]),
		..minimal_clip()
	};

	let text = serde_json::to_string(&clip).expect("clip encodes");
	assert_eq!(text, r#"{"name":"take1","markers":["intro"],"tags":["raw"],"rate":44100}"#);
}

#[test]
fn policy_record_round_trips_through_its_compact_form() {
	let clip = minimal_clip();
	let text = serde_json::to_string(&clip).expect("clip encodes");
	let back: Clip = serde_json::from_str(&text).expect("clip decodes");
	assert_eq!(back, clip);
	assert_eq!(*back.rate.get(), SampleRate(44_100));
}

#[test]
fn missing_fallback_key_substitutes_the_declared_value() {
	let clip: Clip = serde_json::from_str(r#"{ "name": "take1" }"#).expect("missing rate tolerated");
	assert_eq!(*clip.rate.get(), SampleRate(48_000));
}

#[test]
fn present_fallback_key_is_never_overridden() {
	let clip: Clip = serde_json::from_str(r#"{ "name": "take1", "rate": 22050 }"#).expect("rate decodes");
	assert_eq!(*clip.rate.get(), SampleRate(22_050));
}

#[test]
fn unpoliced_fields_keep_strict_missing_key_behavior() {
	let err = serde_json::from_str::<Clip>(r#"{ "rate": 44100 }"#).expect_err("missing name must fail");
	assert!(err.to_string().contains("missing field `name`"));
}

#[test]
fn type_mismatch_at_a_present_key_is_not_masked_as_absence() {
	let err = serde_json::from_str::<Clip>(r#"{ "name": "take1", "markers": 7 }"#).expect_err("mismatch must fail");
	assert!(err.to_string().contains("invalid type"));
}
