use std::path::Path;

use symtrace::core::SymbolKind;
use symtrace::parsers::javascript::JavaScriptExtractor;
use symtrace::parsers::typescript::TypeScriptExtractor;
use symtrace::parsers::SymbolExtractor;
use symtrace::AnalyzerError;

#[test]
fn typescript_extracts_functions_classes_and_variables() {
    let code = r#"
import { helper } from './helper';

export function compute(n: number): number { return helper(n); }

class Widget {
  label: string = '';
  render() { return this.label; }
}

const limit = 10;
"#;
    let mut extractor = TypeScriptExtractor::new().unwrap();
    let analysis = extractor.extract(code, Path::new("/proj/widget.ts")).unwrap();

    let compute = analysis
        .declarations
        .iter()
        .find(|d| d.id == "compute")
        .unwrap();
    assert_eq!(compute.kind, SymbolKind::Function);
    assert!(compute.source_text.starts_with("function compute"));
    assert!(compute.dependencies.contains("helper"));

    let widget = analysis
        .declarations
        .iter()
        .find(|d| d.id == "Widget")
        .unwrap();
    assert_eq!(widget.kind, SymbolKind::Class);

    let limit = analysis
        .declarations
        .iter()
        .find(|d| d.id == "limit")
        .unwrap();
    assert_eq!(limit.kind, SymbolKind::Variable);
    assert_eq!(limit.source_text, "limit = 10");

    assert_eq!(analysis.imports.len(), 1);
    assert_eq!(analysis.imports[0].specifier, "./helper");
    assert_eq!(analysis.imports[0].local_names, vec!["helper"]);
}

#[test]
fn multi_binding_statement_yields_one_record_per_name() {
    let code = "const x = base + 1, y = x * 2;\n";
    let mut extractor = TypeScriptExtractor::new().unwrap();
    let analysis = extractor.extract(code, Path::new("/proj/multi.ts")).unwrap();

    let x = analysis.declarations.iter().find(|d| d.id == "x").unwrap();
    let y = analysis.declarations.iter().find(|d| d.id == "y").unwrap();

    // Individual source slices, shared statement span.
    assert_eq!(x.source_text, "x = base + 1");
    assert_eq!(y.source_text, "y = x * 2");
    assert_eq!(x.span, y.span);
    assert_eq!(x.span.start.line, 1);

    assert!(x.dependencies.contains("base"));
    assert!(!x.dependencies.contains("x"));
    assert!(y.dependencies.contains("x"));
}

#[test]
fn function_dependencies_exclude_own_name_and_parameters() {
    let code = "function foo(a, b) { return bar(a) + foo(b) + baz; }\n";
    let mut extractor = JavaScriptExtractor::new().unwrap();
    let analysis = extractor.extract(code, Path::new("/proj/foo.js")).unwrap();

    let foo = analysis.declarations.iter().find(|d| d.id == "foo").unwrap();
    assert!(foo.dependencies.contains("bar"));
    assert!(foo.dependencies.contains("baz"));
    assert!(!foo.dependencies.contains("foo"));
    assert!(!foo.dependencies.contains("a"));
    assert!(!foo.dependencies.contains("b"));
}

#[test]
fn nested_declarator_bindings_are_not_dependencies() {
    let code = "function calc() { const temp = scale * 2; return temp; }\n";
    let mut extractor = JavaScriptExtractor::new().unwrap();
    let analysis = extractor.extract(code, Path::new("/proj/calc.js")).unwrap();

    let calc = analysis.declarations.iter().find(|d| d.id == "calc").unwrap();
    assert!(calc.dependencies.contains("scale"));
    // The binding occurrence of `temp` is excluded; the later reference is
    // still collected, since shadowed locals are over-approximated.
    assert!(calc.dependencies.contains("temp"));
}

#[test]
fn anonymous_declarations_are_skipped() {
    let code = "export default function () { return 1; }\nexport default class {}\n";
    let mut extractor = JavaScriptExtractor::new().unwrap();
    let analysis = extractor.extract(code, Path::new("/proj/anon.js")).unwrap();
    assert!(analysis.declarations.is_empty());
}

#[test]
fn exported_declarations_are_unwrapped() {
    let code = r#"
export function visible() { return 1; }
export const flag = true;
export default class Root {}
"#;
    let mut extractor = TypeScriptExtractor::new().unwrap();
    let analysis = extractor.extract(code, Path::new("/proj/exp.ts")).unwrap();

    assert!(analysis.declarations.iter().any(|d| d.id == "visible"));
    assert!(analysis.declarations.iter().any(|d| d.id == "flag"));
    assert!(analysis.declarations.iter().any(|d| d.id == "Root"));
}

#[test]
fn import_bindings_cover_default_named_alias_and_namespace() {
    let code = r#"
import React from 'react';
import { join as j, dirname } from './paths';
import * as ns from './ns';
import './side-effect';
"#;
    let mut extractor = TypeScriptExtractor::new().unwrap();
    let analysis = extractor.extract(code, Path::new("/proj/imp.ts")).unwrap();

    assert_eq!(analysis.imports.len(), 4);
    assert_eq!(analysis.imports[0].local_names, vec!["React"]);
    assert_eq!(analysis.imports[1].local_names, vec!["j", "dirname"]);
    assert_eq!(analysis.imports[2].local_names, vec!["ns"]);
    assert!(analysis.imports[3].local_names.is_empty());
    assert_eq!(analysis.imports[3].specifier, "./side-effect");
}

#[test]
fn tsx_components_parse_with_the_jsx_grammar() {
    let code = "export const App = () => <div>{title}</div>;\n";
    let mut extractor = TypeScriptExtractor::tsx().unwrap();
    let analysis = extractor.extract(code, Path::new("/proj/App.tsx")).unwrap();

    let app = analysis.declarations.iter().find(|d| d.id == "App").unwrap();
    assert_eq!(app.kind, SymbolKind::Variable);
    assert!(app.dependencies.contains("title"));
}

#[test]
fn malformed_source_is_a_parse_error() {
    let code = "function ((( {\n";
    let mut extractor = TypeScriptExtractor::new().unwrap();
    let err = extractor
        .extract(code, Path::new("/proj/broken.ts"))
        .unwrap_err();
    assert!(matches!(err, AnalyzerError::Parse { .. }));
}

#[test]
fn spans_are_one_based_lines_with_zero_based_columns() {
    let code = "\nfunction f() {\n  return 1;\n}\n";
    let mut extractor = JavaScriptExtractor::new().unwrap();
    let analysis = extractor.extract(code, Path::new("/proj/span.js")).unwrap();

    let f = analysis.declarations.iter().find(|d| d.id == "f").unwrap();
    assert_eq!(f.span.start.line, 2);
    assert_eq!(f.span.start.column, 0);
    assert_eq!(f.span.end.line, 4);
}
