use crate::graph::bfs::*;
use crate::graph::DirGraph;
use crate::path::NodePath;

fn p(s: &str) -> NodePath {
    NodePath::from(s)
}

/// /r -> /r/a -> /r/a/x and /r -> /r/b
fn sample_tree() -> DirGraph {
    let mut g = DirGraph::new();
    g.add_edge(p("/r"), p("/r/a"));
    g.add_edge(p("/r"), p("/r/b"));
    g.add_edge(p("/r/a"), p("/r/a/x"));
    g
}

fn assert_valid_path(g: &DirGraph, path: &[NodePath], from: &NodePath, to: &NodePath) {
    assert_eq!(path.first(), Some(from));
    assert_eq!(path.last(), Some(to));
    for pair in path.windows(2) {
        assert!(
            g.neighbors(&pair[0]).contains(&pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_shortest_path_down_the_tree() {
    let g = sample_tree();
    let path = shortest_path(&g, &p("/r"), &p("/r/a/x"));
    assert_eq!(path, vec![p("/r"), p("/r/a"), p("/r/a/x")]);
}

#[test]
fn test_no_directed_path() {
    let g = sample_tree();
    assert!(shortest_path(&g, &p("/r/b"), &p("/r/a/x")).is_empty());
    // Edges are not traversed backwards
    assert!(shortest_path(&g, &p("/r/a/x"), &p("/r")).is_empty());
}

#[test]
fn test_source_equals_destination() {
    let g = sample_tree();
    assert_eq!(shortest_path(&g, &p("/r"), &p("/r")), vec![p("/r")]);
}

#[test]
fn test_missing_endpoints() {
    let g = sample_tree();
    assert!(shortest_path(&g, &p("/nope"), &p("/r")).is_empty());
    assert!(shortest_path(&g, &p("/r"), &p("/nope")).is_empty());
    assert!(shortest_path(&g, &p("/nope"), &p("/nope")).is_empty());
    assert!(shortest_path(&DirGraph::new(), &p("/r"), &p("/r")).is_empty());
}

#[test]
fn test_prefers_fewer_hops() {
    // /s -> /long1 -> /long2 -> /t and /s -> /t
    let mut g = DirGraph::new();
    g.add_edge(p("/s"), p("/long1"));
    g.add_edge(p("/long1"), p("/long2"));
    g.add_edge(p("/long2"), p("/t"));
    g.add_edge(p("/s"), p("/t"));

    assert_eq!(shortest_path(&g, &p("/s"), &p("/t")), vec![p("/s"), p("/t")]);
}

#[test]
fn test_tie_broken_by_insertion_order() {
    // Two 2-hop routes; /s lists /z before /a, so the /z route wins
    let mut g = DirGraph::new();
    g.add_edge(p("/s"), p("/z"));
    g.add_edge(p("/s"), p("/a"));
    g.add_edge(p("/a"), p("/t"));
    g.add_edge(p("/z"), p("/t"));

    let path = shortest_path(&g, &p("/s"), &p("/t"));
    assert_eq!(path, vec![p("/s"), p("/z"), p("/t")]);

    // Deterministic across repeated calls
    for _ in 0..5 {
        assert_eq!(shortest_path(&g, &p("/s"), &p("/t")), path);
    }
}

#[test]
fn test_self_loops_and_multi_edges_do_not_change_result() {
    let mut g = sample_tree();
    g.add_edge(p("/r"), p("/r"));
    g.add_edge(p("/r"), p("/r/a"));
    g.add_edge(p("/r/a"), p("/r/a"));

    let path = shortest_path(&g, &p("/r"), &p("/r/a/x"));
    assert_eq!(path, vec![p("/r"), p("/r/a"), p("/r/a/x")]);
    assert_eq!(shortest_path(&g, &p("/r"), &p("/r")), vec![p("/r")]);
}

#[test]
fn test_handles_cycles() {
    let mut g = DirGraph::new();
    g.add_edge(p("/a"), p("/b"));
    g.add_edge(p("/b"), p("/c"));
    g.add_edge(p("/c"), p("/a"));
    g.add_edge(p("/c"), p("/d"));

    let path = shortest_path(&g, &p("/b"), &p("/a"));
    assert_eq!(path, vec![p("/b"), p("/c"), p("/a")]);
    assert!(shortest_path(&g, &p("/d"), &p("/a")).is_empty());
}

#[test]
fn test_length_matches_bfs_distance() {
    // A small lattice with several alternative routes
    let mut g = DirGraph::new();
    let edges = [
        ("/0", "/1"),
        ("/0", "/2"),
        ("/1", "/3"),
        ("/2", "/3"),
        ("/3", "/4"),
        ("/1", "/5"),
        ("/5", "/6"),
        ("/6", "/4"),
        ("/2", "/6"),
        ("/4", "/0"),
    ];
    for (s, d) in edges {
        g.add_edge(p(s), p(d));
    }

    let vertices: Vec<NodePath> = g.vertices().cloned().collect();
    for from in &vertices {
        let distances = bfs_distances(&g, from);
        for to in &vertices {
            let path = shortest_path(&g, from, to);
            match distances.get(to) {
                Some(hops) => {
                    assert_eq!(path.len(), hops + 1, "{} -> {}", from, to);
                    assert_valid_path(&g, &path, from, to);
                }
                None => assert!(path.is_empty(), "{} -> {}", from, to),
            }
        }
    }
}

#[test]
fn test_bfs_distances() {
    let g = sample_tree();
    let distances = bfs_distances(&g, &p("/r"));
    assert_eq!(distances.len(), 4);
    assert_eq!(distances[&p("/r")], 0);
    assert_eq!(distances[&p("/r/a")], 1);
    assert_eq!(distances[&p("/r/b")], 1);
    assert_eq!(distances[&p("/r/a/x")], 2);

    assert!(bfs_distances(&g, &p("/nope")).is_empty());
}
