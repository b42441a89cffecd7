// Strongly-typed declaration tree for codegen. No serde_json::Value here.

/// Leaf JSON value types, with their place in the C++ spelling table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScalarKind {
    String,
    Float,
    Int64,
    Bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Ty {
    Unknown,                // no usable type evidence; rendered as the generic placeholder
    Scalar(ScalarKind),
    Array(Box<Ty>),         // homogeneous element type; Array(Unknown) = empty or mixed
    Struct(StructDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: String,       // raw JSON key for nested structs, caller-chosen at the root
    pub fields: Vec<Field>, // sorted by source_key for deterministic output
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub source_key: String,
    pub ident: String,
    pub ty: Ty,
}
