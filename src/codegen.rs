//! C++ declaration emitter.
//!
//! Renders a `StructDecl` tree as nested `struct` declarations. A struct
//! reached through a field type (directly or behind array wrappers) is
//! declared immediately before the field line that uses it, so every type
//! name is in scope where the field needs it and sibling declarations can
//! never collide.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::ir::{Field, ScalarKind, StructDecl, Ty};

/// C++ spelling for each scalar kind.
static CPP_SCALAR_TYPES: Lazy<BTreeMap<ScalarKind, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (ScalarKind::String, "std::string"),
        (ScalarKind::Float, "float"),
        (ScalarKind::Int64, "int64_t"),
        (ScalarKind::Bool, "bool"),
    ])
});

/// Placeholder for values with no usable type evidence.
const CPP_ANY_TYPE: &str = "std::any";

const INDENT: &str = "    ";

pub struct Codegen {
    out: String,
    depth: usize,
}

impl Codegen {
    pub fn new() -> Self {
        Self { out: String::new(), depth: 0 }
    }

    /// Emit the full declaration tree for `decl`, trailing newline included.
    pub fn emit(&mut self, decl: &StructDecl) {
        self.emit_struct(decl);
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn emit_struct(&mut self, decl: &StructDecl) {
        self.line(&format!("struct {} {{", decl.name));
        self.depth += 1;
        for field in &decl.fields {
            self.emit_field(field);
        }
        self.depth -= 1;
        self.line("};");
    }

    fn emit_field(&mut self, field: &Field) {
        if let Some(nested) = contained_struct(&field.ty) {
            self.emit_struct(nested);
        }
        self.line(&format!("{} {};", type_name(&field.ty), field.ident));
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

/// The struct declaration a field type depends on, if any.
fn contained_struct(ty: &Ty) -> Option<&StructDecl> {
    match ty {
        Ty::Struct(decl) => Some(decl),
        Ty::Array(elem) => contained_struct(elem),
        Ty::Unknown | Ty::Scalar(_) => None,
    }
}

fn type_name(ty: &Ty) -> String {
    match ty {
        Ty::Unknown => CPP_ANY_TYPE.to_string(),
        Ty::Scalar(kind) => CPP_SCALAR_TYPES[kind].to_string(),
        Ty::Array(elem) => format!("std::vector<{}>", type_name(elem)),
        Ty::Struct(decl) => decl.name.clone(),
    }
}

// ------------------------------- Tests ------------------------------------ //
