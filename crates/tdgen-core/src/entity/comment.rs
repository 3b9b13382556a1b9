//! Leading documentation comments

use crate::config::Indent;

/// Comment text accepted by [`EntityBase::add_comment`](super::EntityBase::add_comment)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentInput {
    /// One comment line, kept as-is even if it contains newlines
    Line(String),
    /// Several comment lines, appended in order
    Lines(Vec<String>),
}

impl CommentInput {
    /// Append this input to `comments`
    pub(crate) fn append_to(self, comments: &mut Vec<String>) {
        match self {
            CommentInput::Line(line) => comments.push(line),
            CommentInput::Lines(lines) => comments.extend(lines),
        }
    }
}

impl From<&str> for CommentInput {
    fn from(line: &str) -> Self {
        CommentInput::Line(line.to_string())
    }
}

impl From<String> for CommentInput {
    fn from(line: String) -> Self {
        CommentInput::Line(line)
    }
}

impl From<&String> for CommentInput {
    fn from(line: &String) -> Self {
        CommentInput::Line(line.clone())
    }
}

impl From<Vec<String>> for CommentInput {
    fn from(lines: Vec<String>) -> Self {
        CommentInput::Lines(lines)
    }
}

impl From<Vec<&str>> for CommentInput {
    fn from(lines: Vec<&str>) -> Self {
        CommentInput::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for CommentInput {
    fn from(lines: &[&str]) -> Self {
        CommentInput::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

impl From<&[String]> for CommentInput {
    fn from(lines: &[String]) -> Self {
        CommentInput::Lines(lines.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for CommentInput {
    fn from(lines: [&str; N]) -> Self {
        CommentInput::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

/// Render each comment as `# <comment>` at the given nesting depth
pub fn render_comment_lines(comments: &[String], level: usize, indent: &dyn Indent) -> Vec<String> {
    comments
        .iter()
        .map(|comment| indent.indent(level, &format!("# {}", comment)))
        .collect()
}
