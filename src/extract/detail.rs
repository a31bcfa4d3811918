//! Class detail extraction: members and inheritance
//!
//! A detail page is scanned twice. The primary pass walks member
//! documentation blocks (prototype plus prose); the secondary pass walks
//! the shorter member-list table near the top of the page. The two passes
//! are NOT deduplicated against each other: a member documented in both
//! places appears twice, and downstream consumers tolerate that. Both
//! passes are capped for cost control.

use crate::extract::tokenize::{parse_method_prototype, parse_property_declaration};
use crate::model::{ClassDetails, ClassInfo, Inheritance, MethodInfo, PropertyInfo, Visibility};
use scraper::{Html, Selector};

/// Maximum member documentation blocks examined per page
pub const MAX_DETAIL_BLOCKS: usize = 15;

/// Maximum member-list rows examined per page
pub const MAX_MEMBER_ROWS: usize = 10;

/// Extracts full class details from a parsed detail page
///
/// # Arguments
///
/// * `document` - The parsed class detail page
/// * `class` - The listing entry the page was located from
pub fn extract_class_details(document: &Html, class: ClassInfo) -> ClassDetails {
    let mut methods = Vec::new();
    let mut properties = Vec::new();

    scan_detail_blocks(document, &mut methods, &mut properties);
    scan_member_rows(document, &mut methods, &mut properties);

    ClassDetails {
        class,
        methods,
        properties,
        inheritance: extract_inheritance(document),
    }
}

/// Primary pass: member documentation blocks
///
/// A block is a method if its prototype text contains a parenthesized
/// argument list, otherwise a property.
fn scan_detail_blocks(
    document: &Html,
    methods: &mut Vec<MethodInfo>,
    properties: &mut Vec<PropertyInfo>,
) {
    let proto_selector = Selector::parse(".memproto").ok();
    let doc_selector = Selector::parse(".memdoc").ok();

    for block in super::select_all(document, "div.memitem")
        .into_iter()
        .take(MAX_DETAIL_BLOCKS)
    {
        let prototype = proto_selector
            .as_ref()
            .and_then(|sel| block.select(sel).next())
            .map(super::element_text)
            .unwrap_or_else(|| super::element_text(block));

        if prototype.is_empty() {
            continue;
        }

        let description = doc_selector
            .as_ref()
            .and_then(|sel| block.select(sel).next())
            .map(super::element_text)
            .unwrap_or_default();

        classify_member(&prototype, description, methods, properties);
    }
}

/// Secondary pass: the member-list table rows
///
/// Rows carry no prose description; the declaration text alone is
/// tokenized the same way as a detail-block prototype.
fn scan_member_rows(
    document: &Html,
    methods: &mut Vec<MethodInfo>,
    properties: &mut Vec<PropertyInfo>,
) {
    for row in super::select_all(document, "table.memberdecls tr")
        .into_iter()
        .take(MAX_MEMBER_ROWS)
    {
        let declaration = super::element_text(row);
        if declaration.is_empty() {
            continue;
        }

        classify_member(&declaration, String::new(), methods, properties);
    }
}

fn classify_member(
    declaration: &str,
    description: String,
    methods: &mut Vec<MethodInfo>,
    properties: &mut Vec<PropertyInfo>,
) {
    let visibility = Visibility::from_declaration(declaration);

    if declaration.contains('(') {
        if let Some(parts) = parse_method_prototype(declaration) {
            methods.push(MethodInfo {
                name: parts.name,
                description,
                parameters: parts.parameters,
                return_type: parts.return_type,
                visibility,
            });
        }
    } else if let Some(parts) = parse_property_declaration(declaration) {
        properties.push(PropertyInfo {
            name: parts.name,
            type_name: parts.type_name,
            description,
            visibility,
        });
    }
}

/// Collects base and derived class names from inheritance lines
///
/// Lines containing "Inherited by" yield derived classes; lines
/// containing "Inherits" yield base classes.
fn extract_inheritance(document: &Html) -> Inheritance {
    let mut inheritance = Inheritance::default();

    for paragraph in super::select_all(document, "p") {
        let line = super::element_text(paragraph);
        record_inheritance_line(&line, &mut inheritance);
    }

    inheritance
}

fn record_inheritance_line(line: &str, inheritance: &mut Inheritance) {
    use crate::extract::tokenize::parse_inheritance_names;

    if let Some(rest) = remainder_after(line, "Inherited by") {
        inheritance
            .derived_classes
            .extend(parse_inheritance_names(rest));
    } else if let Some(rest) = remainder_after(line, "Inherits") {
        inheritance.base_classes.extend(parse_inheritance_names(rest));
    }
}

fn remainder_after<'a>(line: &'a str, phrase: &str) -> Option<&'a str> {
    line.find(phrase).map(|at| &line[at + phrase.len()..])
}

/// Locates a class in a listing by name
///
/// Preference order: exact match, case-insensitive exact match, then
/// substring containment. Returns None when nothing matches.
pub fn find_class<'a>(classes: &'a [ClassInfo], name: &str) -> Option<&'a ClassInfo> {
    if let Some(exact) = classes.iter().find(|c| c.name == name) {
        return Some(exact);
    }

    let lowered = name.to_lowercase();
    if let Some(case_insensitive) = classes
        .iter()
        .find(|c| c.name.to_lowercase() == lowered)
    {
        return Some(case_insensitive);
    }

    classes
        .iter()
        .find(|c| c.name.to_lowercase().contains(&lowered))
}
