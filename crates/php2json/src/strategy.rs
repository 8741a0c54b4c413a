use tree_sitter::{Language, Node, Parser, Point, Tree};

use crate::diagnostics::StrategyFailure;

/// A named parse mode. Strategies are attempted in the order returned by
/// [`ParseStrategy::all`]; the first one that produces an error-free tree
/// wins, and later strategies are never consulted for the same input.
#[derive(Clone, Copy)]
pub struct ParseStrategy {
    name: &'static str,
    grammar: fn() -> Language,
}

impl ParseStrategy {
    /// Eval-style parse: pure PHP source with an optional opening tag and
    /// no inline HTML sections.
    pub fn expression() -> Self {
        Self {
            name: "expression",
            grammar: || tree_sitter_php::LANGUAGE_PHP_ONLY.into(),
        }
    }

    /// Full-file parse: a complete PHP file, inline HTML allowed.
    pub fn file() -> Self {
        Self {
            name: "file",
            grammar: || tree_sitter_php::LANGUAGE_PHP.into(),
        }
    }

    /// Fallback order: expression first, then full file.
    pub fn all() -> [Self; 2] {
        [Self::expression(), Self::file()]
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parses `source` under this strategy's grammar. tree-sitter never
    /// raises on malformed input, so a tree whose root contains an ERROR or
    /// MISSING node counts as a rejection here.
    pub fn parse(&self, source: &str) -> Result<Tree, StrategyFailure> {
        let mut parser = Parser::new();
        parser
            .set_language(&(self.grammar)())
            .map_err(|e| StrategyFailure::grammar(self.name, e))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| StrategyFailure::bailed(self.name))?;

        let root = tree.root_node();
        if root.has_error() {
            let point = first_error(root).unwrap_or_else(|| root.start_position());
            return Err(StrategyFailure::syntax(self.name, point));
        }
        Ok(tree)
    }
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(node: Node) -> Option<Point> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position());
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(point) = first_error(child) {
            return Some(point);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::FailureKind;

    #[test]
    fn expression_accepts_bare_snippet() {
        let tree = ParseStrategy::expression()
            .parse("$a = 1 + 2;")
            .expect("bare snippet should parse in expression mode");
        assert_eq!(tree.root_node().kind(), "program");
    }

    #[test]
    fn expression_accepts_tagged_source() {
        ParseStrategy::expression()
            .parse("<?php $a = 1;")
            .expect("opening tag is optional in expression mode");
    }

    #[test]
    fn expression_rejects_inline_html() {
        let failure = ParseStrategy::expression()
            .parse("<html><?php echo 1; ?></html>")
            .expect_err("inline HTML should be rejected in expression mode");
        assert_eq!(failure.strategy, "expression");
        assert!(matches!(failure.kind, FailureKind::Syntax { .. }));
    }

    #[test]
    fn file_accepts_inline_html() {
        let tree = ParseStrategy::file()
            .parse("<html><?php echo 1; ?></html>")
            .expect("file mode should accept inline HTML");
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn both_reject_broken_source() {
        for strategy in ParseStrategy::all() {
            let failure = strategy
                .parse("<?php function (((")
                .expect_err("unbalanced source should be rejected");
            assert!(matches!(failure.kind, FailureKind::Syntax { .. }));
        }
    }

    #[test]
    fn syntax_failure_reports_one_based_position() {
        let failure = ParseStrategy::expression()
            .parse("$a = ;")
            .expect_err("dangling assignment should be rejected");
        match failure.kind {
            FailureKind::Syntax { line, column } => {
                assert!(line >= 1);
                assert!(column >= 1);
            }
            other => panic!("expected syntax failure, got {other:?}"),
        }
    }
}
