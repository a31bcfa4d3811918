//! Tokenization of member prototypes and declarations
//!
//! Member documentation arrives as free text in many documentation styles,
//! so these rules are lightweight token splits, not a grammar:
//!
//! - Method name: the last token before the first opening parenthesis
//! - Return type: the tokens preceding the name; empty yields "void"
//! - Parameters: the raw substring inside the first matching paren pair
//! - Property name: the last whitespace-delimited token
//! - Property type: the tokens preceding the name; empty yields "unknown"
//! - Inheritance: comma-split names from the remainder of an
//!   "Inherits" / "Inherited by" line

/// Parts split out of a method prototype
#[derive(Debug, Clone, PartialEq)]
pub struct MethodParts {
    pub name: String,
    pub return_type: String,
    pub parameters: String,
}

/// Parts split out of a property declaration
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyParts {
    pub name: String,
    pub type_name: String,
}

/// Splits a method prototype into name, return type and raw parameters
///
/// Returns None when no name token precedes the parenthesis, in which
/// case the caller skips the block.
pub fn parse_method_prototype(prototype: &str) -> Option<MethodParts> {
    let open = prototype.find('(')?;
    let before = &prototype[..open];

    let mut tokens: Vec<&str> = before.split_whitespace().collect();
    let name = tokens.pop()?.trim_matches(|c: char| c == '*' || c == '&');
    if name.is_empty() {
        return None;
    }

    let return_type = if tokens.is_empty() {
        "void".to_string()
    } else {
        tokens.join(" ")
    };

    Some(MethodParts {
        name: name.to_string(),
        return_type,
        parameters: parameter_list(&prototype[open..]),
    })
}

/// Extracts the raw text between the first matching parenthesis pair
///
/// `from_open` must start at the opening parenthesis. An unterminated
/// list runs to the end of the text.
fn parameter_list(from_open: &str) -> String {
    let mut depth = 0usize;
    for (i, c) in from_open.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return from_open[1..i].trim().to_string();
                }
            }
            _ => {}
        }
    }
    from_open[1..].trim().to_string()
}

/// Splits a property declaration into name and type text
///
/// Returns None for declarations with no tokens at all.
pub fn parse_property_declaration(declaration: &str) -> Option<PropertyParts> {
    let declaration = declaration.trim().trim_end_matches(';').trim();

    let mut tokens: Vec<&str> = declaration.split_whitespace().collect();
    let name = tokens.pop()?;

    let type_name = if tokens.is_empty() {
        "unknown".to_string()
    } else {
        tokens.join(" ")
    };

    Some(PropertyParts {
        name: name.to_string(),
        type_name,
    })
}

/// Splits the remainder of an inheritance line into class names
///
/// Names are comma-split and trimmed; connective "and" and a trailing
/// period are shed along the way.
pub fn parse_inheritance_names(remainder: &str) -> Vec<String> {
    remainder
        .split(',')
        .map(|name| {
            name.trim()
                .trim_start_matches("and ")
                .trim_end_matches('.')
                .trim()
        })
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}
