use error_stack::{Report, ResultExt};
use presence_required::{EmptinessPolicy, Required, RequiredInvalidity, ValidateContextExt};
use presence_value::Value;
use semval::{ValidationResult, context::Context};
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::PathBuf};
use thiserror::Error;
use tracing::{Level, instrument};
use tracing_subscriber::{EnvFilter, prelude::*};

const SAMPLE_DOCUMENT: &str = include_str!("../sample.json");

#[derive(Debug, Error)]
enum ApplicationError {
	#[error("read form document")]
	ReadDocument,

	#[error("parse form document")]
	ParseDocument,

	#[error("form has missing fields")]
	MissingFields,
}

/// A form submission: the emptiness policy and every field that is required.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FormDocument {
	#[serde(default)]
	policy: EmptinessPolicy,
	fields: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MissingField {
	field: String,
	invalidity: RequiredInvalidity,
}

#[instrument(level = Level::DEBUG, skip_all, fields(field_count = fields.len()))]
fn validate_fields(
	required: &Required,
	fields: &BTreeMap<String, Value>,
) -> ValidationResult<MissingField> {
	fields
		.iter()
		.fold(Context::new(), |context, (name, value)| {
			context.validate_using_with(required, value, |invalidity| MissingField {
				field: name.clone(),
				invalidity,
			})
		})
		.into_result()
}

/// Every missing field, in field order.
fn missing_fields(required: &Required, fields: &BTreeMap<String, Value>) -> Vec<MissingField> {
	match validate_fields(required, fields) {
		Ok(()) => Vec::new(),
		Err(context) => context.into_iter().collect(),
	}
}

fn read_document() -> error_stack::Result<String, ApplicationError> {
	match std::env::args_os().nth(1) {
		None => Ok(SAMPLE_DOCUMENT.to_owned()),
		Some(path) => {
			let path = PathBuf::from(path);
			fs::read_to_string(&path)
				.change_context(ApplicationError::ReadDocument)
				.attach_printable_lazy(|| format!("path: {}", path.display()))
		}
	}
}

fn main() -> error_stack::Result<(), ApplicationError> {
	tracing_subscriber::registry()
		.with(tracing_subscriber::fmt::layer())
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with(tracing_error::ErrorLayer::default())
		.init();

	let document = read_document()?;
	let document: FormDocument =
		serde_json::from_str(&document).change_context(ApplicationError::ParseDocument)?;

	let required = Required::with_policy(document.policy);
	tracing::info!(policy = ?required.policy(), "validating {} fields", document.fields.len());

	let missing = missing_fields(&required, &document.fields);

	// Both are ordered by field name.
	let mut pending = missing.iter().peekable();
	for (name, value) in &document.fields {
		match pending.next_if(|m| &m.field == name) {
			None => println!("{name}: present ({})", value.kind()),
			Some(m) => println!("{name}: missing, {}", m.invalidity),
		}
	}

	if missing.is_empty() {
		return Ok(());
	}

	let report = missing
		.into_iter()
		.fold(Report::new(ApplicationError::MissingFields), |report, m| {
			report.attach_printable(format!("{}: {}", m.field, m.invalidity))
		});

	Err(report)
}
