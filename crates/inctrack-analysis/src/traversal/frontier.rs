//! Round-based BFS engine.

use std::collections::BTreeSet;
use std::mem;
use std::path::Path;

use inctrack_core::Depth;

use crate::extractor::{extract_includes, IncludeScan};
use crate::index::{bare_filename, HeaderIndex};

use super::types::{IncludeClosure, TraversalStats};

/// Compute the include closure of `root` against `index`.
///
/// `root` is the caller-supplied path of the starting header. Like every
/// later frontier entry it is resolved through the index by bare filename,
/// so a root outside the indexed tree yields an empty closure.
pub fn trace_includes(index: &HeaderIndex, root: &Path, depth: Depth) -> IncludeClosure {
    trace_includes_with(index, root, depth, extract_includes)
}

/// [`trace_includes`] with a custom include source, used to drive the
/// engine without touching the filesystem.
pub fn trace_includes_with<F>(
    index: &HeaderIndex,
    root: &Path,
    depth: Depth,
    mut scan: F,
) -> IncludeClosure
where
    F: FnMut(&Path) -> IncludeScan,
{
    let root_name = bare_filename(root).unwrap_or_default();
    let mut discovered: BTreeSet<String> = BTreeSet::new();
    let mut stats = TraversalStats::default();

    let mut frontier: Vec<String> = vec![root_name.clone()];
    let mut next: Vec<String> = Vec::new();
    let mut budget = depth.rounds();

    while budget != Some(0) && !frontier.is_empty() {
        stats.rounds += 1;
        let span = tracing::debug_span!("round", round = stats.rounds, frontier = frontier.len());
        let _guard = span.enter();

        for name in frontier.drain(..) {
            let Some(path) = index.resolve(&name) else {
                tracing::trace!(header = %name, "unresolved, not expanded");
                stats.unresolved += 1;
                continue;
            };

            stats.expanded += 1;
            let scan_result = scan(path);
            if scan_result.is_unreadable() {
                stats.unreadable += 1;
            }

            for included in scan_result {
                // insert() is the membership test: a name is scheduled once.
                if discovered.insert(included.clone()) {
                    next.push(included);
                }
            }
        }

        mem::swap(&mut frontier, &mut next);
        budget = budget.map(|b| b - 1);
    }

    tracing::debug!(
        root = %root_name,
        %depth,
        discovered = discovered.len(),
        rounds = stats.rounds,
        unresolved = stats.unresolved,
        unreadable = stats.unreadable,
        "traversal finished"
    );

    IncludeClosure {
        root: root_name,
        depth,
        discovered,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    use inctrack_core::types::FxHashMap;

    use crate::extractor::IncludeIter;

    /// Fake header body containing one quoted include per name.
    fn scan_of(path: &Path, names: &[String]) -> IncludeScan {
        let body: String = names.iter().map(|n| format!("#include \"{n}\"\n")).collect();
        IncludeScan::Lines(IncludeIter::from_reader(path, Cursor::new(body)))
    }

    /// In-memory include graph keyed by path.
    fn graph(edges: &[(&str, &[&str])]) -> (HeaderIndex, FxHashMap<PathBuf, Vec<String>>) {
        let index = HeaderIndex::from_paths(edges.iter().map(|(name, _)| format!("inc/{name}")));
        let includes = edges
            .iter()
            .map(|(name, deps)| {
                (
                    PathBuf::from(format!("inc/{name}")),
                    deps.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();
        (index, includes)
    }

    fn run(edges: &[(&str, &[&str])], root: &str, depth: Depth) -> IncludeClosure {
        let (index, includes) = graph(edges);
        trace_includes_with(&index, Path::new(root), depth, |path| {
            let names = includes.get(path).cloned().unwrap_or_default();
            scan_of(path, &names)
        })
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_cycle_depth_one() {
        let edges: &[(&str, &[&str])] = &[("A.h", &["B.h"]), ("B.h", &["A.h"])];
        let closure = run(edges, "A.h", Depth::from_signed(1));
        assert_eq!(closure.discovered, set(&["B.h"]));
        assert_eq!(closure.stats.rounds, 1);
    }

    #[test]
    fn test_cycle_depth_two_and_beyond() {
        let edges: &[(&str, &[&str])] = &[("A.h", &["B.h"]), ("B.h", &["A.h"])];
        for depth in [2, 3, 10, 0] {
            let closure = run(edges, "A.h", Depth::from_signed(depth));
            assert_eq!(closure.discovered, set(&["A.h", "B.h"]), "depth {depth}");
        }
    }

    #[test]
    fn test_unbounded_cycle_terminates() {
        let edges: &[(&str, &[&str])] = &[("A.h", &["B.h"]), ("B.h", &["A.h"])];
        let closure = run(edges, "A.h", Depth::Unbounded);
        // Round 3 re-expands A.h and finds nothing new.
        assert_eq!(closure.stats.rounds, 3);
    }

    #[test]
    fn test_root_is_reduced_to_bare_name() {
        let edges: &[(&str, &[&str])] = &[("A.h", &["B.h"]), ("B.h", &[])];
        let closure = run(edges, "/some/other/place/A.h", Depth::from_signed(3));
        assert_eq!(closure.root, "A.h");
        assert_eq!(closure.discovered, set(&["B.h"]));
    }

    #[test]
    fn test_unresolved_names_are_counted_not_expanded() {
        let edges: &[(&str, &[&str])] = &[("A.h", &["Ghost.h", "B.h"]), ("B.h", &[])];
        let closure = run(edges, "A.h", Depth::Unbounded);
        assert_eq!(closure.discovered, set(&["B.h", "Ghost.h"]));
        assert_eq!(closure.stats.unresolved, 1);
        assert_eq!(closure.stats.expanded, 2);
    }

    #[test]
    fn test_root_outside_index_yields_empty() {
        let edges: &[(&str, &[&str])] = &[("A.h", &["B.h"])];
        let closure = run(edges, "Elsewhere.h", Depth::Unbounded);
        assert!(closure.discovered.is_empty());
        assert_eq!(closure.stats.unresolved, 1);
        assert_eq!(closure.stats.rounds, 1);
    }

    #[test]
    fn test_depth_limits_rounds() {
        let edges: &[(&str, &[&str])] = &[
            ("A.h", &["B.h"]),
            ("B.h", &["C.h"]),
            ("C.h", &["D.h"]),
            ("D.h", &[]),
        ];
        assert_eq!(run(edges, "A.h", Depth::from_signed(1)).discovered, set(&["B.h"]));
        assert_eq!(run(edges, "A.h", Depth::from_signed(2)).discovered, set(&["B.h", "C.h"]));
        assert_eq!(
            run(edges, "A.h", Depth::from_signed(3)).discovered,
            set(&["B.h", "C.h", "D.h"])
        );
    }

    #[test]
    fn test_diamond_counts_shared_header_once() {
        let edges: &[(&str, &[&str])] = &[
            ("A.h", &["B.h", "C.h"]),
            ("B.h", &["D.h"]),
            ("C.h", &["D.h"]),
            ("D.h", &[]),
        ];
        let closure = run(edges, "A.h", Depth::Unbounded);
        assert_eq!(closure.discovered, set(&["B.h", "C.h", "D.h"]));
        assert_eq!(closure.count(), 3);
    }

    #[test]
    fn test_unreadable_header_is_discovered_but_inert() {
        let index = HeaderIndex::from_paths(["inc/A.h", "inc/B.h"]);
        let closure = trace_includes_with(&index, Path::new("A.h"), Depth::Unbounded, |path| {
            if path.ends_with("A.h") {
                scan_of(path, &["B.h".to_string()])
            } else {
                IncludeScan::Unreadable {
                    path: path.to_path_buf(),
                    kind: std::io::ErrorKind::PermissionDenied,
                }
            }
        });
        assert_eq!(closure.discovered, set(&["B.h"]));
        assert_eq!(closure.stats.unreadable, 1);
    }
}
