//! Shared declaration and identifier extraction.
//!
//! The TypeScript and JavaScript grammars use identical node kinds and field
//! names for every construct read here, so both language extractors delegate
//! to this module after parsing with their own grammar.

use std::collections::BTreeSet;
use std::path::Path;
use tree_sitter::Node as TSNode;

use super::common::{extract_text, find_child_by_kind, node_span};
use super::{FileAnalysis, ImportRecord};
use crate::core::symbols::{Declaration, SymbolKind};

/// Node kinds that count as identifier references when collecting a
/// declaration's dependency set.
const IDENTIFIER_KINDS: [&str; 3] = [
    "identifier",
    "type_identifier",
    "shorthand_property_identifier",
];

/// Walk the top-level statements of a parsed file and collect one record per
/// named function, class, or bound variable, plus every literal import.
pub(crate) fn extract_file(root: &TSNode, source: &str, file_path: &Path) -> FileAnalysis {
    let bytes = source.as_bytes();
    let mut analysis = FileAnalysis::default();

    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        extract_statement(&child, bytes, file_path, &mut analysis);
    }
    analysis
}

fn extract_statement(node: &TSNode, source: &[u8], file_path: &Path, out: &mut FileAnalysis) {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" => {
            process_function(node, source, file_path, out);
        }
        "class_declaration" | "abstract_class_declaration" => {
            process_class(node, source, file_path, out);
        }
        "lexical_declaration" | "variable_declaration" => {
            process_variable_statement(node, source, file_path, out);
        }
        "import_statement" => {
            process_import(node, source, out);
        }
        // `export function f…`, `export default class C…` and friends wrap
        // the underlying declaration in the `declaration` field.
        "export_statement" => {
            if let Some(declaration) = node.child_by_field_name("declaration") {
                extract_statement(&declaration, source, file_path, out);
            }
        }
        _ => {}
    }
}

fn process_function(node: &TSNode, source: &[u8], file_path: &Path, out: &mut FileAnalysis) {
    // Anonymous functions carry no name field and are skipped.
    let Some(name_node) = node.child_by_field_name("name") else {
        return;
    };
    let name = extract_text(&name_node, source);
    let params = parameter_names(node, source);
    let dependencies = free_identifiers(node, source, Some(name), &params);

    out.declarations.push(
        Declaration::new(
            name.to_string(),
            SymbolKind::Function,
            extract_text(node, source).to_string(),
            file_path.to_path_buf(),
            node_span(node),
        )
        .with_dependencies(dependencies),
    );
}

fn process_class(node: &TSNode, source: &[u8], file_path: &Path, out: &mut FileAnalysis) {
    let Some(name_node) = node.child_by_field_name("name") else {
        return;
    };
    let name = extract_text(&name_node, source);
    let dependencies = free_identifiers(node, source, Some(name), &BTreeSet::new());

    out.declarations.push(
        Declaration::new(
            name.to_string(),
            SymbolKind::Class,
            extract_text(node, source).to_string(),
            file_path.to_path_buf(),
            node_span(node),
        )
        .with_dependencies(dependencies),
    );
}

/// One record per bound identifier in the statement; all records share the
/// enclosing statement's span but slice only their own declarator.
fn process_variable_statement(
    stmt: &TSNode,
    source: &[u8],
    file_path: &Path,
    out: &mut FileAnalysis,
) {
    let span = node_span(stmt);
    let no_params = BTreeSet::new();

    let mut cursor = stmt.walk();
    for child in stmt.children(&mut cursor) {
        if child.kind() != "variable_declarator" {
            continue;
        }
        let Some(name_node) = child.child_by_field_name("name") else {
            continue;
        };
        // Destructuring patterns bind no single statically-visible name.
        if name_node.kind() != "identifier" {
            continue;
        }
        let name = extract_text(&name_node, source);
        let dependencies = free_identifiers(&child, source, None, &no_params);

        out.declarations.push(
            Declaration::new(
                name.to_string(),
                SymbolKind::Variable,
                extract_text(&child, source).to_string(),
                file_path.to_path_buf(),
                span,
            )
            .with_dependencies(dependencies),
        );
    }
}

fn process_import(stmt: &TSNode, source: &[u8], out: &mut FileAnalysis) {
    let Some(source_node) = stmt.child_by_field_name("source") else {
        return;
    };
    let specifier = extract_text(&source_node, source)
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();

    let mut local_names = Vec::new();
    if let Some(clause) = find_child_by_kind(stmt, "import_clause") {
        collect_import_bindings(&clause, source, &mut local_names);
    }

    out.imports.push(ImportRecord {
        specifier,
        local_names,
        statement_text: extract_text(stmt, source).to_string(),
        span: node_span(stmt),
    });
}

fn collect_import_bindings(clause: &TSNode, source: &[u8], out: &mut Vec<String>) {
    let mut cursor = clause.walk();
    for child in clause.children(&mut cursor) {
        match child.kind() {
            // default import: `import foo from '…'`
            "identifier" => out.push(extract_text(&child, source).to_string()),
            // `import * as ns from '…'`
            "namespace_import" => {
                if let Some(name) = find_child_by_kind(&child, "identifier") {
                    out.push(extract_text(&name, source).to_string());
                }
            }
            // `import { a, b as c } from '…'` binds `a` and `c`
            "named_imports" => {
                let mut inner = child.walk();
                for spec in child.children(&mut inner) {
                    if spec.kind() != "import_specifier" {
                        continue;
                    }
                    let local = spec
                        .child_by_field_name("alias")
                        .or_else(|| spec.child_by_field_name("name"));
                    if let Some(local) = local {
                        out.push(extract_text(&local, source).to_string());
                    }
                }
            }
            _ => {}
        }
    }
}

/// Collect the identifiers a declaration's subtree references, excluding the
/// declaration's own name, its own simple parameter names, and any identifier
/// that is the binding side of a variable declarator.
///
/// Purely syntactic: property-access targets, type names, and shadowed locals
/// are not distinguished; over-approximation is accepted.
fn free_identifiers(
    node: &TSNode,
    source: &[u8],
    own_name: Option<&str>,
    params: &BTreeSet<String>,
) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![*node];

    while let Some(current) = stack.pop() {
        let mut cursor = current.walk();
        for child in current.children(&mut cursor) {
            stack.push(child);
            if !IDENTIFIER_KINDS.contains(&child.kind()) {
                continue;
            }
            if is_declarator_binding(&child) {
                continue;
            }
            let text = extract_text(&child, source);
            if own_name == Some(text) || params.contains(text) {
                continue;
            }
            found.insert(text.to_string());
        }
    }
    found
}

/// Whether this identifier is the left-hand binding name of a variable
/// declarator (those declare rather than reference).
fn is_declarator_binding(node: &TSNode) -> bool {
    node.parent().map_or(false, |parent| {
        parent.kind() == "variable_declarator"
            && parent.child_by_field_name("name").map(|n| n.id()) == Some(node.id())
    })
}

/// Simple (identifier) parameters of a function declaration. Destructured or
/// defaulted parameters are left in the dependency over-approximation.
fn parameter_names(func: &TSNode, source: &[u8]) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let Some(params) = func.child_by_field_name("parameters") else {
        return names;
    };

    let mut cursor = params.walk();
    for child in params.children(&mut cursor) {
        match child.kind() {
            "identifier" => {
                names.insert(extract_text(&child, source).to_string());
            }
            // TypeScript wraps each parameter; the bound name sits in the
            // `pattern` field.
            "required_parameter" | "optional_parameter" => {
                if let Some(pattern) = child.child_by_field_name("pattern") {
                    if pattern.kind() == "identifier" {
                        names.insert(extract_text(&pattern, source).to_string());
                    }
                }
            }
            _ => {}
        }
    }
    names
}
