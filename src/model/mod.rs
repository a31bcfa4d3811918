//! Typed records produced by extraction and indexing
//!
//! All entities here are immutable value records: none is mutated after
//! creation except by being replaced wholesale on re-extraction.
//!
//! # Components
//!
//! - `entities`: classes, members, modules, files, functions, navigation
//! - `index`: the bounded search index and its page records
//! - `partial`: a result carrier for operations that absorb sub-failures

mod entities;
mod index;
mod partial;

pub use entities::{
    ClassDetails, ClassInfo, FileInfo, FunctionInfo, Inheritance, MethodInfo, ModuleInfo,
    NavigationStructure, PropertyInfo, SearchResult, Visibility,
};
pub use index::{PageKind, PageRecord, SearchIndex, BODY_CAP};
pub use partial::Partial;
