//! Pipeline entry: decode one JSON document, check the top-level shape,
//! infer, render.

use std::io::Read;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::codegen::Codegen;
use crate::decode;
use crate::inference::{self, kind_of};

/// Everything that can abort a run. Past the top-level shape check,
/// inference and rendering are total.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The input stream was not parseable JSON.
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_path_to_error::Error<serde_json::Error>),

    /// The top-level value is not an object or a non-empty array of objects.
    #[error("unsupported top-level shape: {found}, expected an object or a non-empty array of objects")]
    UnsupportedShape { found: String },
}

/// Generate a C++ struct declaration named `struct_name` from one JSON
/// document read off `input`. Bytes after the first document are ignored.
pub fn generate(input: impl Read, struct_name: &str) -> Result<String, GenerateError> {
    let value: Value = decode::from_reader_with_path(input)?;

    let root = root_object(&value)?;
    let decl = inference::infer_struct(struct_name, root);
    debug!(name = struct_name, fields = decl.fields.len(), "inferred root struct");

    let mut cg = Codegen::new();
    cg.emit(&decl);
    Ok(cg.into_string())
}

/// The root must be an object, or an array whose first element (the only
/// one the representative-shape rule ever reads) is an object.
fn root_object(value: &Value) -> Result<&Map<String, Value>, GenerateError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Array(items) => match items.first() {
            Some(Value::Object(map)) => Ok(map),
            Some(other) => Err(unsupported(format!("array of {}", kind_of(other).name()))),
            None => Err(unsupported("empty array")),
        },
        other => Err(unsupported(kind_of(other).name())),
    }
}

fn unsupported(found: impl Into<String>) -> GenerateError {
    GenerateError::UnsupportedShape { found: found.into() }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn generate_str(src: &str, name: &str) -> Result<String, GenerateError> {
        generate(src.as_bytes(), name)
    }

    #[test]
    fn end_to_end_nested_document() {
        let src = r#"{
            "quest_id": 7,
            "FloorCount": 3,
            "meta": {"done": true},
            "rooms": [{"w": 1.5}, {"w": 2.0}]
        }"#;
        let expected = "\
struct Dungeon {
    int64_t floorCount;
    struct meta {
        bool done;
    };
    meta meta;
    int64_t questID;
    struct rooms {
        float w;
    };
    std::vector<rooms> rooms;
};
";
        assert_eq!(generate_str(src, "Dungeon").expect("generates"), expected);
    }

    #[test]
    fn one_declaration_per_distinct_object() {
        let src = r#"{"a": {"b": {"c": 1}}, "list": [{"d": 2}]}"#;
        let out = generate_str(src, "Root").expect("generates");
        // Root, a, b, and the representative for "list".
        assert_eq!(out.matches("struct ").count(), 4);
    }

    #[test]
    fn top_level_array_of_objects_uses_first_element() {
        let from_array = generate_str(r#"[{"q": 1}, {"q": 2}]"#, "Foo").expect("generates");
        let from_object = generate_str(r#"{"q": 1}"#, "Foo").expect("generates");
        assert_eq!(from_array, from_object);
    }

    #[test]
    fn empty_array_is_refused() {
        let err = generate_str("[]", "Foo").expect_err("refused");
        assert!(matches!(err, GenerateError::UnsupportedShape { .. }));
    }

    #[test]
    fn scalar_roots_are_refused() {
        for src in ["42", r#""hello""#, "true", "null"] {
            let err = generate_str(src, "Foo").expect_err("refused");
            assert!(matches!(err, GenerateError::UnsupportedShape { .. }), "src = {src}");
        }
    }

    #[test]
    fn array_of_scalars_is_refused() {
        let err = generate_str("[1, 2]", "Foo").expect_err("refused");
        assert!(matches!(err, GenerateError::UnsupportedShape { .. }));
    }

    #[test]
    fn malformed_input_is_a_decode_error() {
        let err = generate_str("{not json", "Foo").expect_err("refused");
        assert!(matches!(err, GenerateError::Decode(_)));
    }

    #[test]
    fn trailing_bytes_after_the_document_are_ignored() {
        let out = generate_str(r#"{"q": 1} trailing garbage"#, "Foo").expect("generates");
        assert!(out.starts_with("struct Foo {"));
    }

    #[test]
    fn output_ends_with_closing_brace_and_newline() {
        let out = generate_str(r#"{"q": 1}"#, "Foo").expect("generates");
        assert!(out.ends_with("};\n"));
    }
}
