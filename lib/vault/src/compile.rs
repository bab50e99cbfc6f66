use std::collections::{HashSet, VecDeque};

use log::{debug, info, log_enabled};

use crate::{
    KeySet,
    graph::{Edge, Graph},
    grid::{Grid, Pos, Tile},
    poi::PointsOfInterest,
};

/// Runs a door-aware BFS from every point of interest and collects the
/// resulting edges into a [`Graph`].
pub fn compile(grid: &Grid, poi: &PointsOfInterest) -> Graph {
    let edges = poi
        .positions()
        .enumerate()
        .map(|(node, start)| search_keys(grid, poi, node, start))
        .collect();
    let graph = Graph::new(poi.agent_count(), poi.key_count(), edges);

    if log_enabled!(log::Level::Debug) {
        for node in 0..graph.node_count() {
            for edge in graph.edges(node) {
                debug!(
                    "{}-{}: {} {:?}",
                    poi.label(node),
                    poi.label(edge.to),
                    edge.dist,
                    edge.doors
                );
            }
        }
    }
    info!(
        "compiled {} agent(s), {} key(s) into {} edges",
        graph.agent_count(),
        graph.key_count(),
        graph.edge_count()
    );

    graph
}

// Search paths from `start` to every key. A cell is revisited when it is
// reached behind a different set of doors, since the longer path may need
// fewer keys.
fn search_keys(grid: &Grid, poi: &PointsOfInterest, node: usize, start: Pos) -> Vec<Edge> {
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    let mut edges = Vec::new();

    queue.push_back((start, KeySet::new(), 0));
    visited.insert((start, KeySet::new()));

    while let Some((p0, doors0, d0)) = queue.pop_front() {
        for p1 in grid.neighbors(p0) {
            let tile = grid.tile(p1);
            let mut doors = doors0;
            match tile {
                Tile::Wall => continue,
                Tile::Door(d) => match poi.key_bit(d) {
                    Some(bit) => doors.insert(bit),
                    // No key in the maze opens this door
                    None => continue,
                },
                _ => (),
            }
            if !visited.insert((p1, doors)) {
                continue;
            }

            if let Tile::Key(k) = tile {
                if let (Some(to), Some(bit)) = (poi.key_node(k), poi.key_bit(k)) {
                    // A path through the key's own door can never be taken
                    if to != node && !doors.contains(bit) {
                        edges.push(Edge {
                            to,
                            dist: d0 + 1,
                            doors,
                        });
                    }
                }
            }
            queue.push_back((p1, doors, d0 + 1));
        }
    }

    prune(edges)
}

// Keep only edges not dominated by another edge to the same key
fn prune(mut edges: Vec<Edge>) -> Vec<Edge> {
    edges.sort();
    let mut kept: Vec<Edge> = Vec::with_capacity(edges.len());
    for edge in edges {
        let dominated = kept
            .iter()
            .rev()
            .take_while(|k| k.to == edge.to)
            .any(|k| k.dominates(&edge));
        if !dominated {
            kept.push(edge);
        }
    }
    kept
}
