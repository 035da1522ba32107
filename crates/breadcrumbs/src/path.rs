/// One piece of a slash-separated path together with the link it receives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathSegment<'a> {
    pub segment: &'a str,
    /// Accumulated prefix up to and including this segment; `None` for the
    /// last segment.
    pub link: Option<String>,
}

/// Splits `path` into segments after trimming surrounding slashes.
///
/// Consecutive slashes produce empty segments, and an empty or all-slash path
/// yields a single empty segment.
pub fn decompose_path(path: &str) -> Vec<PathSegment<'_>> {
    let parts: Vec<&str> = path.trim_matches('/').split('/').collect();
    let last = parts.len() - 1;

    let mut cursor = String::from("/");
    parts
        .into_iter()
        .enumerate()
        .map(|(idx, segment)| {
            cursor.push_str(segment);
            cursor.push('/');
            PathSegment {
                segment,
                link: (idx != last).then(|| cursor.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(path: &str) -> Vec<(&str, Option<String>)> {
        decompose_path(path)
            .into_iter()
            .map(|part| (part.segment, part.link))
            .collect()
    }

    #[test]
    fn accumulates_links_and_leaves_last_unlinked() {
        assert_eq!(
            links("/shoes/mens/casual/vans/"),
            vec![
                ("shoes", Some("/shoes/".to_string())),
                ("mens", Some("/shoes/mens/".to_string())),
                ("casual", Some("/shoes/mens/casual/".to_string())),
                ("vans", None),
            ]
        );
    }

    #[test]
    fn surrounding_slashes_are_optional() {
        assert_eq!(links("a/b"), links("///a/b//"));
    }

    #[test]
    fn consecutive_slashes_keep_empty_segments() {
        assert_eq!(
            links("/a//b/"),
            vec![
                ("a", Some("/a/".to_string())),
                ("", Some("/a//".to_string())),
                ("b", None),
            ]
        );
    }

    #[test]
    fn root_path_yields_one_empty_segment() {
        assert_eq!(links("/"), vec![("", None)]);
        assert_eq!(links(""), vec![("", None)]);
    }
}
