use std::path::Path;
use tree_sitter::{Language, Node as TSNode, Parser, Point, Tree};

use crate::core::symbols::{Position, Span};
use crate::core::AnalyzerError;

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Result<Self, AnalyzerError> {
        let mut parser = Parser::new();
        parser.set_language(language)?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str, file_path: &Path) -> Result<Tree, AnalyzerError> {
        self.parser.parse(source, None).ok_or_else(|| AnalyzerError::Parse {
            path: file_path.to_path_buf(),
        })
    }
}

pub fn extract_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}

pub fn find_child_by_kind<'a>(node: &'a TSNode, kind: &str) -> Option<TSNode<'a>> {
    for child in node.children(&mut node.walk()) {
        if child.kind() == kind {
            return Some(child);
        }
    }
    None
}

/// Span of a node, inclusive of the whole construct.
pub fn node_span(node: &TSNode) -> Span {
    Span {
        start: point_position(node.start_position()),
        end: point_position(node.end_position()),
    }
}

fn point_position(point: Point) -> Position {
    // tree-sitter rows are 0-based; reported lines are 1-based.
    Position {
        line: point.row + 1,
        column: point.column,
    }
}
