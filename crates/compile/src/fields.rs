use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{ConstValue, TypeSpec};

/// One compiled field of a record spec.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub id: i16,
    pub name: String,
    pub spec: TypeSpec,
    /// Compiled default constant, if the IDL declared one. Applied by the
    /// codec whenever the field is absent from the wire.
    pub default: Option<ConstValue>,
}

impl FieldSpec {
    pub fn new(id: i16, name: impl Into<String>, spec: TypeSpec) -> FieldSpec {
        FieldSpec {
            id,
            name: name.into(),
            spec,
            default: None,
        }
    }

    pub fn with_default(mut self, default: ConstValue) -> FieldSpec {
        self.default = Some(default);
        self
    }
}

/// The fields of a record spec.
///
/// Iterates in declaration order (the order defaults are applied in) and
/// resolves incoming wire field ids in O(1) through an auxiliary id index.
/// The compiler guarantees names and ids are unique within one record; a
/// duplicate insert replaces the previous entry.
#[derive(Debug, Clone, Default)]
pub struct FieldGroup {
    fields: IndexMap<String, FieldSpec>,
    by_id: HashMap<i16, String>,
}

impl FieldGroup {
    pub fn new() -> FieldGroup {
        FieldGroup::default()
    }

    pub fn insert(&mut self, field: FieldSpec) {
        self.by_id.insert(field.id, field.name.clone());
        self.fields.insert(field.name.clone(), field);
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    pub fn get_by_id(&self, id: i16) -> Option<&FieldSpec> {
        self.by_id.get(&id).and_then(|name| self.fields.get(name))
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl PartialEq for FieldGroup {
    fn eq(&self, other: &FieldGroup) -> bool {
        self.fields == other.fields
    }
}

impl FromIterator<FieldSpec> for FieldGroup {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> FieldGroup {
        let mut group = FieldGroup::new();
        for field in iter {
            group.insert(field);
        }
        group
    }
}
