//! # Records
//!
//! One line of model source is one record. Blank lines, `#` comments and
//! unrecognised record types are ignored. A record whose numbers do not
//! parse is dropped whole.

use glam::{Vec2, Vec3};

/// A recognised record.
#[derive(Clone, Debug, PartialEq)]
pub enum Record<'a> {
    /// `v x y z`
    Position(Vec3),
    /// `vt u v`
    TexCoord(Vec2),
    /// `vn x y z`
    Normal(Vec3),
    /// `f a b c ...`, slots still unresolved.
    Face(Vec<&'a str>),
    /// `g name`
    Group(&'a str),
}

impl<'a> Record<'a> {
    /// Tokenizes one line.
    ///
    /// Returns `None` for anything that does not produce model data.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(k, r)| (k, r.trim_start()));
        let mut tokens = rest.split_whitespace();

        let record = match keyword {
            "v" => floats::<3>(&mut tokens).map(|[x, y, z]| Self::Position(Vec3::new(x, y, z))),
            "vt" => floats::<2>(&mut tokens).map(|[u, v]| Self::TexCoord(Vec2::new(u, v))),
            "vn" => floats::<3>(&mut tokens).map(|[x, y, z]| Self::Normal(Vec3::new(x, y, z))),
            "f" => Some(Self::Face(tokens.collect())),
            "g" => Some(Self::Group(rest.trim_end())),
            _ => {
                tracing::trace!(keyword, "Skipping unsupported record");
                return None;
            }
        };

        if record.is_none() {
            tracing::trace!(line, "Skipping malformed record");
        }
        record
    }
}

/// Parses the first `N` tokens as floats; extra tokens (such as `w`) are ignored.
fn floats<'t, const N: usize>(tokens: &mut impl Iterator<Item = &'t str>) -> Option<[f32; N]> {
    let mut out = [0.0; N];
    for slot in &mut out {
        *slot = tokens.next()?.parse().ok()?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_records() {
        assert_eq!(Record::parse("v 1 2 3"), Some(Record::Position(Vec3::new(1.0, 2.0, 3.0))));
        assert_eq!(Record::parse("vt 0.5 1"), Some(Record::TexCoord(Vec2::new(0.5, 1.0))));
        assert_eq!(
            Record::parse("  vn 0 1 0  "),
            Some(Record::Normal(Vec3::new(0.0, 1.0, 0.0)))
        );
    }

    #[test]
    fn test_extra_components_ignored() {
        assert_eq!(
            Record::parse("v 1 2 3 1.0"),
            Some(Record::Position(Vec3::new(1.0, 2.0, 3.0)))
        );
        assert_eq!(Record::parse("vt 0.25 0.75 0"), Some(Record::TexCoord(Vec2::new(0.25, 0.75))));
    }

    #[test]
    fn test_face_and_group() {
        assert_eq!(Record::parse("f 1/1/1 2//2 3"), Some(Record::Face(vec!["1/1/1", "2//2", "3"])));
        assert_eq!(Record::parse("g spot"), Some(Record::Group("spot")));
        assert_eq!(Record::parse("g\tleft ear "), Some(Record::Group("left ear")));
        assert_eq!(Record::parse("g"), Some(Record::Group("")));
    }

    #[test]
    fn test_ignored_lines() {
        assert_eq!(Record::parse(""), None);
        assert_eq!(Record::parse("   "), None);
        assert_eq!(Record::parse("# v 1 2 3"), None);
        assert_eq!(Record::parse("mtllib cow.mtl"), None);
        assert_eq!(Record::parse("s off"), None);
    }

    #[test]
    fn test_malformed_numbers_drop_record() {
        assert_eq!(Record::parse("v 1 two 3"), None);
        assert_eq!(Record::parse("v 1 2"), None);
        assert_eq!(Record::parse("vn"), None);
    }
}
