use crate::{Mapping, Value};
use serde_json::{Number, Value as Json};

// `serde_json::Map` keys are unique, so entries are appended without a lookup.
fn object<I, K, V>(fields: I) -> Value
where
	I: ExactSizeIterator<Item = (K, V)>,
	K: Into<Value>,
	V: Into<Value>,
{
	let mut map = Mapping::with_capacity(fields.len());
	for (key, value) in fields {
		map.push(key.into(), value.into());
	}

	Value::Map(map)
}

fn number(n: &Number) -> Value {
	if let Some(i) = n.as_i64() {
		Value::Int(i)
	} else if let Some(u) = n.as_u64() {
		Value::UInt(u)
	} else {
		// Every finite JSON number fits one of the three representations.
		Value::Float(n.as_f64().unwrap_or(f64::NAN))
	}
}

impl From<Json> for Value {
	fn from(value: Json) -> Self {
		match value {
			Json::Null => Value::Null,
			Json::Bool(b) => Value::Bool(b),
			Json::Number(n) => number(&n),
			Json::String(s) => Value::String(s),
			Json::Array(items) => Value::slice(items),
			Json::Object(fields) => object(fields.into_iter()),
		}
	}
}

impl From<&Json> for Value {
	fn from(value: &Json) -> Self {
		match value {
			Json::Null => Value::Null,
			Json::Bool(b) => Value::Bool(*b),
			Json::Number(n) => number(n),
			Json::String(s) => Value::String(s.clone()),
			Json::Array(items) => Value::slice(items),
			Json::Object(fields) => object(fields.iter().map(|(k, v)| (k.as_str(), v))),
		}
	}
}
