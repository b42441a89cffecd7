//! Recursive schema inference over a decoded JSON value.
//!
//! One pass, leaf-first: every key gets the most specific structural type
//! defensible from a single document (scalar, nested struct, homogeneous
//! array, or the `Unknown` fallback). Keys are walked in sorted order so the
//! same input always renders the same text, regardless of map iteration
//! order at the decode boundary.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tracing::debug;

use crate::ident;
use crate::ir::{Field, ScalarKind, StructDecl, Ty};

// ------------------------------- Kinds ------------------------------------ //

/// Runtime kind of a decoded value. Used for array-uniformity checks and
/// shape diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind { Null, Bool, Num, Str, Arr, Obj }

pub fn kind_of(v: &Value) -> Kind {
    match v {
        Value::Null      => Kind::Null,
        Value::Bool(_)   => Kind::Bool,
        Value::Number(_) => Kind::Num,
        Value::String(_) => Kind::Str,
        Value::Array(_)  => Kind::Arr,
        Value::Object(_) => Kind::Obj,
    }
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Num => "number",
            Kind::Str => "string",
            Kind::Arr => "array",
            Kind::Obj => "object",
        }
    }
}

// ------------------------------- Walk ------------------------------------- //

/// Infer a struct declaration for one JSON object.
///
/// Field order is the lexicographic sort of the raw keys; this is the sole
/// ordering guarantee.
pub fn infer_struct(name: &str, object: &Map<String, Value>) -> StructDecl {
    let mut fields: Vec<Field> = object
        .iter()
        .map(|(key, value)| Field {
            source_key: key.clone(),
            ident: ident::format_field_name(key),
            ty: infer_value(key, value),
        })
        .collect();
    fields.sort_by(|a, b| a.source_key.cmp(&b.source_key));

    StructDecl { name: name.to_string(), fields }
}

/// Most specific type for one key's value. Total: ambiguous shapes fall back
/// to `Unknown` instead of failing.
fn infer_value(key: &str, value: &Value) -> Ty {
    match value {
        Value::Null => Ty::Unknown,
        Value::Bool(_) => Ty::Scalar(ScalarKind::Bool),
        Value::Number(n) => Ty::Scalar(number_kind(n)),
        Value::String(_) => Ty::Scalar(ScalarKind::String),
        Value::Array(items) => infer_array(key, items),
        Value::Object(map) => Ty::Struct(infer_struct(key, map)),
    }
}

/// `serde_json` keeps the source-level integer/float split: `2` decodes as
/// an integer, `2.0` as a float. Integers above `i64::MAX` still count as
/// 64-bit here; the rendering is best-effort.
fn number_kind(n: &serde_json::Number) -> ScalarKind {
    if n.is_i64() || n.is_u64() {
        ScalarKind::Int64
    } else {
        ScalarKind::Float
    }
}

/// Arrays must be uniform in runtime kind to get an element type, and the
/// element shape is sampled from the first element only. Empty and
/// mixed-kind arrays collapse to an array of `Unknown`.
fn infer_array(key: &str, items: &[Value]) -> Ty {
    let kinds: BTreeSet<Kind> = items.iter().map(kind_of).collect();
    match (kinds.len(), items.first()) {
        (1, Some(first)) => {
            if items.len() > 1 && matches!(first, Value::Object(_)) {
                debug!(key, total = items.len(), "array of objects, first element is the representative shape");
            }
            Ty::Array(Box::new(infer_value(key, first)))
        }
        _ => {
            debug!(key, distinct_kinds = kinds.len(), "empty or mixed array, inferring any-array");
            Ty::Array(Box::new(Ty::Unknown))
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
