use crate::Value;

/// A structured record: a type name and its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
	name: Box<str>,
	fields: Vec<Field>,
}

/// A named field of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
	pub name: Box<str>,
	pub value: Value,
}

impl Record {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			fields: Vec::new(),
		}
	}

	/// A record without a type name or fields.
	pub fn anonymous() -> Self {
		Self::default()
	}

	/// Append a field.
	pub fn field(mut self, name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		self.fields.push(Field {
			name: name.into(),
			value: value.into(),
		});
		self
	}

	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[inline]
	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	/// Value of the first field called `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self
			.fields
			.iter()
			.find(|f| &*f.name == name)
			.map(|f| &f.value)
	}
}
