use super::*;
use crate::{Kind, ValidateContextExt};
use assert_matches::assert_matches;
use presence_value::{Mapping, Opaque, Record};
use std::collections::{BTreeMap, HashMap};

struct Case {
	policy: EmptinessPolicy,
	value: Value,
	expected: bool,
}

fn case(value: impl Into<Value>, expected: bool) -> Case {
	Case {
		policy: EmptinessPolicy::default(),
		value: value.into(),
		expected,
	}
}

fn case_with(policy: EmptinessPolicy, value: impl Into<Value>, expected: bool) -> Case {
	Case {
		policy,
		value: value.into(),
		expected,
	}
}

fn empty_array() -> Value {
	let empty: [Value; 0] = [];
	Value::from(empty)
}

fn cases() -> Vec<Case> {
	let deny = EmptinessPolicy::new();

	vec![
		case("", false),
		case_with(deny.allow_empty_string(true), "", true),
		case(Record::anonymous(), true),
		case(Value::Null, false),
		case("    ", false),
		case_with(deny.allow_empty_string(true), "    ", true),
		case("testing   ", true),
		case(false, true),
		case(true, true),
		case(392323, true),
		case(392323.9324, true),
		case(Record::new("Person").field("Name", "Yes"), true),
		case(empty_array(), false),
		case_with(deny.allow_empty_array(true), empty_array(), true),
		case(
			[Record::anonymous(), Record::anonymous(), Record::anonymous()],
			true,
		),
		case(
			[
				Record::new("Person").field("Name", "Yes"),
				Record::new("Person").field("Name", "No"),
			],
			true,
		),
		case(Vec::<Value>::new(), false),
		case_with(deny.allow_empty_slice(true), Vec::<Value>::new(), true),
		case(vec![1u32, 3, 4, 63434], true),
		case(HashMap::<i32, bool>::new(), false),
		case_with(deny.allow_empty_map(true), HashMap::<i32, bool>::new(), true),
		case(HashMap::from([(1, true), (2, false)]), true),
	]
}

#[test]
fn required_cases() {
	for Case {
		policy,
		value,
		expected,
	} in cases()
	{
		let verdict = Required::with_policy(policy).is_valid(&value);
		assert_eq!(
			verdict.is_valid(),
			expected,
			"Required::is_valid({value:?}) with {policy:?} returned an unexpected answer"
		);

		let diagnostics = verdict.diagnostics().len();
		assert_eq!(diagnostics, usize::from(!expected), "{value:?}");
	}
}

#[test]
fn null_is_never_valid() {
	for policy in [EmptinessPolicy::new(), EmptinessPolicy::uniform(true)] {
		assert_eq!(
			is_valid(&Value::Null, &policy).invalidity(),
			Some(RequiredInvalidity::Null)
		);
		assert!(!is_valid(&Value::from(None::<String>), &policy).is_valid());
	}
}

#[test]
fn scalars_and_records_ignore_the_policy() {
	let values = [
		Value::from(false),
		Value::from(0),
		Value::from(0u64),
		Value::from(0.0),
		Value::from(f64::NAN),
		Value::from(Record::anonymous()),
	];

	for value in &values {
		for policy in [EmptinessPolicy::new(), EmptinessPolicy::uniform(true)] {
			assert!(is_valid(value, &policy).is_valid(), "{value:?}");
		}
	}
}

#[test]
fn blank_strings_report_their_raw_length() {
	let required = Required::new();

	assert_eq!(
		required.invalidity(&Value::from("")),
		Some(RequiredInvalidity::EmptyString { len: 0 })
	);
	assert_eq!(
		required.invalidity(&Value::from(" \t\n ")),
		Some(RequiredInvalidity::EmptyString { len: 4 })
	);
	assert_eq!(required.invalidity(&Value::from("hi ")), None);
}

#[test]
fn unicode_whitespace_is_trimmed() {
	let required = Required::new();
	assert!(!required.is_valid(&Value::from("\u{3000}\u{00a0}")).is_valid());
}

#[test]
fn empty_collections_name_their_kind() {
	let required = Required::new();

	assert_eq!(
		required.invalidity(&empty_array()),
		Some(RequiredInvalidity::EmptyArray)
	);
	assert_eq!(
		required.invalidity(&Value::Slice(Vec::new())),
		Some(RequiredInvalidity::EmptySlice)
	);
	assert_eq!(
		required.invalidity(&Value::Map(Mapping::new())),
		Some(RequiredInvalidity::EmptyMap)
	);
	assert_eq!(
		required.invalidity(&Value::from(BTreeMap::<String, i32>::new())),
		Some(RequiredInvalidity::EmptyMap)
	);
}

#[test]
fn contents_of_collections_are_not_inspected() {
	let required = Required::new();

	assert!(required.is_valid(&Value::slice([""])).is_valid());
	assert!(required.is_valid(&Value::array([Value::Null])).is_valid());

	let mut map = Mapping::new();
	map.insert(Value::Null, Value::Null);
	assert!(required.is_valid(&Value::Map(map)).is_valid());
}

#[test]
fn unknown_kinds_are_reported_not_panicked() {
	struct Handle;

	let verdict = Required::new().is_valid(&Value::from(Opaque::of::<Handle>()));
	assert_matches!(
		verdict.invalidity(),
		Some(RequiredInvalidity::UnknownKind { type_name }) if type_name.ends_with("Handle")
	);
	assert_eq!(verdict.diagnostics().len(), 1);

	let lenient = Required::with_policy(EmptinessPolicy::uniform(true));
	assert!(!lenient.is_valid(&Value::from(Opaque::named("chan int"))).is_valid());
}

#[test]
fn verdicts_are_idempotent() {
	let required = Required::new();

	for Case { value, .. } in cases() {
		let first = required.is_valid(&value).invalidity();
		let second = required.is_valid(&value).invalidity();
		assert_eq!(first, second, "{value:?}");
	}
}

#[test]
fn overrides_only_affect_their_own_kind() {
	let empties = [
		(Kind::String, Value::from("")),
		(Kind::Array, empty_array()),
		(Kind::Slice, Value::Slice(Vec::new())),
		(Kind::Map, Value::Map(Mapping::new())),
	];
	let overrides = [
		(Kind::String, EmptinessPolicy::new().allow_empty_string(true)),
		(Kind::Array, EmptinessPolicy::new().allow_empty_array(true)),
		(Kind::Slice, EmptinessPolicy::new().allow_empty_slice(true)),
		(Kind::Map, EmptinessPolicy::new().allow_empty_map(true)),
	];

	for (allowed, policy) in overrides {
		for (kind, value) in &empties {
			assert_eq!(
				is_valid(value, &policy).is_valid(),
				*kind == allowed,
				"{kind} with {allowed} allowed"
			);
		}
	}
}

#[test]
fn non_empty_collections_are_valid_under_any_policy() {
	let values = [
		Value::from("x"),
		Value::array([1]),
		Value::slice([1]),
		Value::from(HashMap::from([("k", "v")])),
	];

	for value in &values {
		for policy in [EmptinessPolicy::new(), EmptinessPolicy::uniform(true)] {
			assert!(is_valid(value, &policy).is_valid(), "{value:?}");
		}
	}
}

#[test]
fn check_returns_the_diagnostic() {
	let required = Required::new();

	assert_matches!(required.check(&Value::from(1)), Ok(()));
	assert_matches!(
		required.check(&Value::from("")),
		Err(e) if *e.invalidity() == RequiredInvalidity::EmptyString { len: 0 }
	);
}

#[test]
fn check_does_not_mutate_the_value() {
	let value = Value::from(vec!["  ", ""]);
	let before = value.clone();

	let _ = Required::new().check(&value);
	assert_eq!(value, before);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldInvalidity {
	Missing(&'static str, RequiredInvalidity),
}

#[test]
fn validator_merges_field_verdicts() {
	let required = Required::new();
	let name = Value::from("   ");
	let tags = Value::Slice(Vec::new());
	let age = Value::from(0);

	let errors: Vec<_> = Context::new()
		.validate_using_with(&required, &name, |i| FieldInvalidity::Missing("name", i))
		.validate_using_with(&required, &tags, |i| FieldInvalidity::Missing("tags", i))
		.validate_using_with(&required, &age, |i| FieldInvalidity::Missing("age", i))
		.into_result()
		.expect_err("should be invalid")
		.into_iter()
		.collect();

	assert_eq!(
		&*errors,
		&[
			FieldInvalidity::Missing("name", RequiredInvalidity::EmptyString { len: 3 }),
			FieldInvalidity::Missing("tags", RequiredInvalidity::EmptySlice),
		]
	);
}

#[test]
fn validator_leaves_valid_contexts_untouched() {
	let context: Context<RequiredInvalidity> = Context::new();
	let context = Required::new().validate_value(&Value::from(true), context);

	assert!(context.into_result().is_ok());
}

#[cfg(feature = "json")]
#[test]
fn json_fields() {
	use serde_json::json;

	let required = Required::with_policy(EmptinessPolicy::new().allow_empty_map(true));
	let doc = json!({
		"name": "  ",
		"tags": [],
		"meta": {},
		"age": 0,
		"nickname": null,
	});

	let Some(fields) = doc.as_object() else {
		panic!("expected an object");
	};
	let invalid: Vec<_> = fields
		.iter()
		.filter(|(_, v)| !required.is_valid(&Value::from(*v)).is_valid())
		.map(|(k, _)| k.as_str())
		.collect();

	assert_eq!(&*invalid, &["name", "nickname", "tags"]);
}
