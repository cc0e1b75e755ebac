//! Opt-in structural validation.
//!
//! Conversion and rendering never call into this module; callers that want
//! a softer failure mode than an engine construction error run it first.

use std::fmt;

use super::{DocNode, MarkType, NodeType};
use crate::error::{format_path, Error, Result};

/// Check a type name against the public node vocabulary.
pub fn is_known_node_type(name: &str) -> bool {
    NodeType::from_name(name).is_public()
}

/// Check a mark name against the known mark vocabulary.
pub fn is_known_mark_type(name: &str) -> bool {
    !matches!(MarkType::from_name(name), MarkType::Other(_))
}

/// A problem found in a document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Child indices from the root to the offending node
    pub path: Vec<usize>,

    /// What is wrong
    pub kind: IssueKind,
}

/// Kinds of validation issues.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// Node type outside the public vocabulary
    UnknownNodeType(String),
    /// Mark type outside the known vocabulary
    UnknownMarkType(String),
    /// A text node carries `content`
    TextWithContent,
    /// A text node has no `text`
    MissingText,
    /// A non-text node carries `text`
    TextOnContainer,
    /// A non-text node carries `marks`
    MarksOnNonText,
    /// A heading has no integer `level`
    MissingHeadingLevel,
    /// A heading level outside 1..=6
    HeadingLevelOutOfRange(i64),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = format_path(&self.path);
        match &self.kind {
            IssueKind::UnknownNodeType(t) => write!(f, "{}: unknown node type '{}'", path, t),
            IssueKind::UnknownMarkType(t) => write!(f, "{}: unknown mark type '{}'", path, t),
            IssueKind::TextWithContent => write!(f, "{}: text node has content", path),
            IssueKind::MissingText => write!(f, "{}: text node has no text", path),
            IssueKind::TextOnContainer => write!(f, "{}: non-text node has text", path),
            IssueKind::MarksOnNonText => write!(f, "{}: marks on a non-text node", path),
            IssueKind::MissingHeadingLevel => write!(f, "{}: heading without level", path),
            IssueKind::HeadingLevelOutOfRange(l) => {
                write!(f, "{}: heading level {} outside 1-6", path, l)
            }
        }
    }
}

/// Collect every issue in the tree, depth-first.
pub fn validate(root: &DocNode) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut path = Vec::new();
    check_node(root, &mut path, &mut issues);
    issues
}

/// Validate and fail on the first batch of issues.
pub fn validate_strict(root: &DocNode) -> Result<()> {
    let issues = validate(root);
    if issues.is_empty() {
        return Ok(());
    }
    let summary = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(Error::Invalid(summary))
}

fn check_node(node: &DocNode, path: &mut Vec<usize>, issues: &mut Vec<ValidationIssue>) {
    let mut report = |kind| {
        issues.push(ValidationIssue {
            path: path.clone(),
            kind,
        })
    };

    if !node.node_type.is_public() {
        report(IssueKind::UnknownNodeType(node.node_type.to_string()));
    }

    if node.is_text() {
        if node.content.is_some() {
            report(IssueKind::TextWithContent);
        }
        if node.text.is_none() {
            report(IssueKind::MissingText);
        }
        for mark in node.mark_list() {
            if let MarkType::Other(ref name) = mark.mark_type {
                report(IssueKind::UnknownMarkType(name.clone()));
            }
        }
    } else {
        if node.text.is_some() {
            report(IssueKind::TextOnContainer);
        }
        if node.marks.is_some() {
            report(IssueKind::MarksOnNonText);
        }
    }

    if node.node_type == NodeType::Heading {
        match node.level() {
            None => report(IssueKind::MissingHeadingLevel),
            Some(level) if !(1..=6).contains(&level) => {
                report(IssueKind::HeadingLevelOutOfRange(level))
            }
            Some(_) => {}
        }
    }

    for (i, child) in node.children().iter().enumerate() {
        path.push(i);
        check_node(child, path, issues);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mark;
    use serde_json::json;

    #[test]
    fn test_known_type_predicates() {
        assert!(is_known_node_type("paragraph"));
        assert!(is_known_node_type("link"));
        assert!(!is_known_node_type("link_node"));
        assert!(!is_known_node_type("table"));
        assert!(is_known_mark_type("bold"));
        assert!(is_known_mark_type("font"));
        assert!(!is_known_mark_type("strike"));
    }

    #[test]
    fn test_valid_document() {
        let doc = DocNode::doc(vec![
            DocNode::heading(2, vec![DocNode::text("Title")]),
            DocNode::paragraph(vec![DocNode::text("body").with_mark(Mark::bold())]),
        ]);
        assert!(validate(&doc).is_empty());
        assert!(validate_strict(&doc).is_ok());
    }

    #[test]
    fn test_issue_paths() {
        let doc: DocNode = serde_json::from_value(json!({
            "type": "doc",
            "content": [
                {"type": "paragraph"},
                {"type": "heading", "content": [
                    {"type": "text", "text": "x", "content": []}
                ]}
            ]
        }))
        .unwrap();

        let issues = validate(&doc);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].path, vec![1]);
        assert_eq!(issues[0].kind, IssueKind::MissingHeadingLevel);
        assert_eq!(issues[1].path, vec![1, 0]);
        assert_eq!(issues[1].kind, IssueKind::TextWithContent);
    }

    #[test]
    fn test_heading_level_reported_not_clamped() {
        let doc = DocNode::doc(vec![DocNode::heading(27, vec![])]);
        let issues = validate(&doc);
        assert_eq!(issues[0].kind, IssueKind::HeadingLevelOutOfRange(27));
        assert_eq!(doc.children()[0].level(), Some(27));
    }

    #[test]
    fn test_unknown_types_and_marks() {
        let doc = DocNode::doc(vec![
            DocNode::new(NodeType::Other("table".into())),
            DocNode::paragraph(vec![DocNode::text("s").with_mark(Mark::new(
                crate::model::MarkType::Other("strike".into()),
            ))]),
        ]);
        let kinds: Vec<_> = validate(&doc).into_iter().map(|i| i.kind).collect();
        assert!(kinds.contains(&IssueKind::UnknownNodeType("table".into())));
        assert!(kinds.contains(&IssueKind::UnknownMarkType("strike".into())));
    }

    #[test]
    fn test_validate_strict_message() {
        let doc = DocNode::doc(vec![DocNode::new(NodeType::Text)]);
        let err = validate_strict(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid document: /0: text node has no text"
        );
    }
}
