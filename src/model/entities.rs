//! Entity records extracted from documentation markup

use serde::Serialize;

/// Member visibility, as stated in a prototype or declaration
///
/// Documentation styles that never annotate visibility produce `Public`,
/// the optimistic default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
}

impl Visibility {
    /// Derives visibility from declaration text by literal-word scan
    ///
    /// "private" wins over "protected"; anything else is public.
    pub fn from_declaration(text: &str) -> Self {
        if text.contains("private") {
            Self::Private
        } else if text.contains("protected") {
            Self::Protected
        } else {
            Self::Public
        }
    }
}

/// A class found on a listing page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassInfo {
    /// Class name as shown in the listing link
    pub name: String,

    /// Absolute URL of the class detail page
    pub url: String,

    /// Short description, when the listing carries one
    pub description: String,

    /// Enclosing namespace, when one could be derived
    pub namespace: Option<String>,

    /// Which listing page this class was found on
    pub section: String,
}

/// Base and derived class names collected from a detail page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Inheritance {
    pub base_classes: Vec<String>,
    pub derived_classes: Vec<String>,
}

/// A documented method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodInfo {
    pub name: String,
    pub description: String,

    /// Raw parameter-list text between the prototype's parentheses
    pub parameters: String,

    pub return_type: String,
    pub visibility: Visibility,
}

/// A documented property or data member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyInfo {
    pub name: String,

    /// Declared type text; "unknown" when the declaration has no type tokens
    pub type_name: String,

    pub description: String,
    pub visibility: Visibility,
}

/// Full detail for one class: listing info plus members and inheritance
///
/// Members appear in markup order. The primary detail-block scan and the
/// secondary member-list scan are not deduplicated against each other, so
/// a member documented in both places appears twice.
#[derive(Debug, Clone, Serialize)]
pub struct ClassDetails {
    pub class: ClassInfo,
    pub methods: Vec<MethodInfo>,
    pub properties: Vec<PropertyInfo>,
    pub inheritance: Inheritance,
}

/// A free function found from the main page's function listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionInfo {
    pub name: String,
    pub url: String,
    pub description: String,
    pub parameters: String,
    pub return_type: String,
}

/// A module (topic group) found on the module listing page
///
/// The nested class and function lists are placeholders for future
/// enrichment and are currently left empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleInfo {
    pub name: String,
    pub url: String,
    pub description: String,
    pub classes: Vec<String>,
    pub functions: Vec<String>,
}

/// A source file found on the file listing page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    pub name: String,
    pub url: String,
    pub description: String,
    pub classes: Vec<String>,
    pub functions: Vec<String>,
}

/// Consolidated description of a documentation site
///
/// Built fresh on every navigation request; the fetch cache underneath is
/// the only short-circuit.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationStructure {
    /// URL of the site's main index page
    pub main_page: String,

    /// URLs of related/overview pages linked from the navigation
    pub related_pages: Vec<String>,

    pub modules: Vec<ModuleInfo>,
    pub classes: Vec<ClassInfo>,
    pub files: Vec<FileInfo>,
}

/// One ranked search hit
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub url: String,
    pub title: String,

    /// Bounded context excerpt around the first query occurrence
    pub snippet: String,

    pub kind: super::PageKind,
    pub section: String,
}
