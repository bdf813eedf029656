//! Duplicate label resolution.
//!
//! Same-named documents are disambiguated by rewriting their descriptions to
//! the shortest distinguishing trailing path segments. Documents without a
//! path-like description never participate in grouping and always end with
//! an empty description; that is a deliberate simplification, not an error.

use std::collections::HashMap;
use std::rc::Rc;

use super::{TabLabel, Verbosity};
use crate::group::Document;

/// Marker prepended to a description whose leading segments were dropped.
pub const ELLIPSIS: &str = "…";

/// Rewrite `description` fields so no two same-named documents show
/// identical descriptions.
///
/// Steps, per name collision group:
/// 1. singletons lose their description entirely (no ambiguity to resolve);
/// 2. members are sub-partitioned by their medium-verbosity description;
/// 3. colliding sub-partitions escalate to long-verbosity descriptions when
///    those actually differ, then re-partition;
/// 4. a single remaining distinct value means the documents are
///    indistinguishable by path and every description is cleared;
/// 5. otherwise each distinct value is shortened to its minimal unique
///    trailing segments and assigned back to every label sharing it.
pub fn resolve_duplicates(labels: &mut [TabLabel], docs: &[Rc<dyn Document>]) {
    debug_assert_eq!(labels.len(), docs.len());

    // Partition label indices by name, preserving first-seen order. Labels
    // without a medium description are excluded up front.
    let mut order: Vec<String> = Vec::new();
    let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, label) in labels.iter_mut().enumerate() {
        match docs[i].description(Verbosity::Medium) {
            Some(desc) => {
                label.description = desc;
                if let Some(members) = by_name.get_mut(&label.name) {
                    members.push(i);
                } else {
                    order.push(label.name.clone());
                    by_name.insert(label.name.clone(), vec![i]);
                }
            }
            None => label.description.clear(),
        }
    }

    for name in order {
        let members = &by_name[&name];
        if members.len() == 1 {
            labels[members[0]].description.clear();
            continue;
        }

        if has_collisions(labels, members) {
            // Medium descriptions collide within the name group; escalate to
            // long verbosity when the long forms actually differ.
            let longs: Vec<String> = members
                .iter()
                .map(|&i| docs[i].description(Verbosity::Long).unwrap_or_default())
                .collect();
            let mut distinct_longs = longs.clone();
            distinct_longs.sort();
            distinct_longs.dedup();
            if distinct_longs.len() > 1 {
                log::debug!(
                    "Escalating {} '{}' tabs to long descriptions",
                    members.len(),
                    name
                );
                for (&i, long) in members.iter().zip(&longs) {
                    labels[i].description = long.clone();
                }
            }
        }

        // Distinct description values, in member order.
        let mut values: Vec<String> = Vec::new();
        for &i in members {
            if !values.contains(&labels[i].description) {
                values.push(labels[i].description.clone());
            }
        }

        if values.len() == 1 {
            // Not resolvable by shortening; the documents are
            // indistinguishable by path.
            for &i in members {
                labels[i].description.clear();
            }
            continue;
        }

        let shortened = shorten_paths(&values);
        let map: HashMap<&String, &String> = values.iter().zip(shortened.iter()).collect();
        for &i in members {
            if let Some(short) = map.get(&labels[i].description) {
                labels[i].description = (*short).clone();
            }
        }
    }
}

/// Whether any two of the given labels currently share a description.
fn has_collisions(labels: &[TabLabel], members: &[usize]) -> bool {
    let mut seen: Vec<&str> = Vec::with_capacity(members.len());
    for &i in members {
        let desc = labels[i].description.as_str();
        if seen.contains(&desc) {
            return true;
        }
        seen.push(desc);
    }
    false
}

/// Shorten each path-like value to the minimal trailing-segment suffix
/// unique among all inputs, marked with a leading `…/`.
///
/// A suffix collides with another value when their equal-length trailing
/// segments match, so a value that is a segment-suffix of another is kept as
/// the full original string (separators and all) rather than marked.
pub fn shorten_paths(values: &[String]) -> Vec<String> {
    let segmented: Vec<Vec<&str>> = values
        .iter()
        .map(|v| v.split(['/', '\\']).filter(|s| !s.is_empty()).collect())
        .collect();

    values
        .iter()
        .enumerate()
        .map(|(i, original)| {
            let segs = &segmented[i];
            // Grow the suffix until it matches no other value's trailing
            // segments; needing every segment means the original stands.
            for k in 1..segs.len() {
                let candidate = &segs[segs.len() - k..];
                let unique = segmented.iter().enumerate().all(|(j, other)| {
                    if j == i {
                        return true;
                    }
                    let take = k.min(other.len());
                    candidate[k - take..] != other[other.len() - take..]
                });
                if unique {
                    return format!("{ELLIPSIS}/{}", candidate.join("/"));
                }
            }
            original.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn shorten_paths_keeps_distinct_tails_minimal() {
        let out = shorten_paths(&s(&["/proj/alpha/src", "/proj/beta/src"]));
        assert_eq!(out, s(&["…/alpha/src", "…/beta/src"]));
    }

    #[test]
    fn shorten_paths_single_segment_is_unchanged() {
        let out = shorten_paths(&s(&["readme", "/docs/readme2"]));
        assert_eq!(out[0], "readme");
        assert_eq!(out[1], "…/readme2");
    }

    #[test]
    fn shorten_paths_suffix_relationship_keeps_full_paths() {
        let out = shorten_paths(&s(&["a/b", "x/a/b"]));
        assert_eq!(out, s(&["a/b", "x/a/b"]));
    }

    #[test]
    fn shorten_paths_handles_windows_separators() {
        let out = shorten_paths(&s(&["C:\\proj\\one\\src", "C:\\proj\\two\\src"]));
        assert_eq!(out, s(&["…/one/src", "…/two/src"]));
    }

    #[test]
    fn shorten_paths_needs_deeper_suffix_when_tails_collide() {
        let out = shorten_paths(&s(&["/r/a/x/t", "/r/b/x/t", "/r/b/y/t"]));
        assert_eq!(out, s(&["…/a/x/t", "…/b/x/t", "…/y/t"]));
    }
}
