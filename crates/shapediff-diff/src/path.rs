//! Locations inside a comparison tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step from a node to one of its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSegment {
    /// A sequence element.
    Index(usize),
    /// A record field.
    Field(String),
}

/// Route from the root of a comparison to one of its nodes.
///
/// Displays as `$` for the root, `$[2]` for a sequence element and
/// `$.address.city` for nested fields. A field name that is empty or holds
/// `.`, `[`, `]`, `"` or `\` is written quoted, as in `$["a.b"]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path extended by one segment.
    pub fn join(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// The segments from the root.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Index(i) => write!(f, "[{i}]")?,
                PathSegment::Field(name) if is_plain(name) => write!(f, ".{name}")?,
                PathSegment::Field(name) => {
                    f.write_str("[\"")?;
                    for c in name.chars() {
                        if matches!(c, '"' | '\\') {
                            f.write_str("\\")?;
                        }
                        write!(f, "{c}")?;
                    }
                    f.write_str("\"]")?;
                }
            }
        }
        Ok(())
    }
}

/// Names that read back unambiguously after a `.`; anything else is quoted.
fn is_plain(name: &str) -> bool {
    !name.is_empty() && !name.contains(|c: char| matches!(c, '.' | '[' | ']' | '"' | '\\'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_display() {
        assert_eq!(Path::root().to_string(), "$");
        assert!(Path::root().is_root());
    }

    #[test]
    fn mixed_segments_display() {
        let path = Path::root()
            .join(PathSegment::Field("orders".into()))
            .join(PathSegment::Index(3))
            .join(PathSegment::Field("sku".into()));
        assert_eq!(path.to_string(), "$.orders[3].sku");
        assert_eq!(path.segments().len(), 3);
    }

    #[test]
    fn join_does_not_mutate_parent() {
        let parent = Path::root().join(PathSegment::Index(0));
        let child = parent.join(PathSegment::Index(1));
        assert_eq!(parent.segments().len(), 1);
        assert_eq!(child.to_string(), "$[0][1]");
    }

    #[test]
    fn ambiguous_field_names_are_quoted() {
        let dotted = Path::root().join(PathSegment::Field("a.b".into()));
        let nested = Path::root()
            .join(PathSegment::Field("a".into()))
            .join(PathSegment::Field("b".into()));
        assert_eq!(dotted.to_string(), r#"$["a.b"]"#);
        assert_eq!(nested.to_string(), "$.a.b");

        let bracketed = Path::root().join(PathSegment::Field("x[0]".into()));
        assert_eq!(bracketed.to_string(), r#"$["x[0]"]"#);
        let indexed = Path::root()
            .join(PathSegment::Field("x".into()))
            .join(PathSegment::Index(0));
        assert_ne!(bracketed.to_string(), indexed.to_string());

        let quoted = Path::root().join(PathSegment::Field(r#"say "hi"\"#.into()));
        assert_eq!(quoted.to_string(), r#"$["say \"hi\"\\"]"#);
        assert_eq!(Path::root().join(PathSegment::Field(String::new())).to_string(), r#"$[""]"#);
    }

    #[test]
    fn collect_from_segments() {
        let path: Path = vec![PathSegment::Index(1), PathSegment::Field("a".into())]
            .into_iter()
            .collect();
        assert_eq!(path.to_string(), "$[1].a");
    }
}
