use std::fmt;

/// One dotted component of a path expression, e.g. `developers[1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub index: Option<usize>,
}

impl Segment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
        }
    }

    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index: Some(index),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}]", self.name, i),
            None => f.write_str(&self.name),
        }
    }
}

/// A parsed path expression such as `project.developers[0].name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

/// Split an expression into segments.
///
/// Parsing never fails. Empty tokens (from `a..b`, `.a` or `a.`) are kept and simply
/// won't resolve; a bracket suffix that is not a non-negative integer is dropped and
/// the segment carries no index.
pub fn parse_path(expression: &str) -> Path {
    let segments = expression.split('.').map(parse_segment).collect();
    Path { segments }
}

fn parse_segment(token: &str) -> Segment {
    let Some((name, rest)) = token.split_once('[') else {
        return Segment::new(token);
    };

    let index = rest
        .strip_suffix(']')
        .and_then(|inner| inner.trim().parse::<usize>().ok());

    Segment {
        name: name.to_string(),
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dotted_path() {
        let path = parse_path("project.name");
        assert_eq!(
            path.segments(),
            &[Segment::new("project"), Segment::new("name")]
        );
    }

    #[test]
    fn index_suffix_is_split_off() {
        let path = parse_path("developers[12].name");
        assert_eq!(path.segments()[0], Segment::indexed("developers", 12));
        assert_eq!(path.segments()[1], Segment::new("name"));
    }

    #[test]
    fn non_numeric_index_is_ignored() {
        let path = parse_path("licenses[first]");
        assert_eq!(path.segments(), &[Segment::new("licenses")]);

        let path = parse_path("licenses[-1]");
        assert_eq!(path.segments(), &[Segment::new("licenses")]);

        let path = parse_path("licenses[]");
        assert_eq!(path.segments(), &[Segment::new("licenses")]);
    }

    #[test]
    fn empty_tokens_are_kept() {
        let path = parse_path("a..b.");
        let names: Vec<_> = path.segments().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "", "b", ""]);
    }

    #[test]
    fn display_round_trips_indexes() {
        assert_eq!(
            parse_path("developers[1].name").to_string(),
            "developers[1].name"
        );
    }
}
