use petgraph::algo::connected_components;
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};

use crate::grid::MazeGrid;
use crate::tiles::{Coordinate, Direction, TileDesignation};
use crate::utils;

/// The passage structure of a finished grid as an undirected graph: a node
/// per `Path` tile, an edge per orthogonally adjacent pair of `Path` tiles.
/// Scanning east and south from every tile covers each adjacency exactly
/// once.
pub fn passage_graph(grid: &MazeGrid) -> Graph<Coordinate, (), Undirected> {
    let mut graph = Graph::new_undirected();
    let mut tile_nodes = utils::fnv_hashmap::<Coordinate, NodeIndex>(grid.size());

    for coord in grid.iter() {
        if grid.designation_at(coord) == TileDesignation::Path {
            tile_nodes.insert(coord, graph.add_node(coord));
        }
    }

    for coord in grid.iter() {
        if let Some(&node) = tile_nodes.get(&coord) {
            for &direction in &[Direction::East, Direction::South] {
                if let Some(adjacent) = coord.offset(direction) {
                    if let Some(&adjacent_node) = tile_nodes.get(&adjacent) {
                        let _ = graph.add_edge(node, adjacent_node, ());
                    }
                }
            }
        }
    }

    graph
}

/// Spanning tree test for a generated maze: all path tiles form one
/// connected component holding exactly (path tile count - 1) passage links,
/// which leaves exactly one route between any two path tiles and no cycles.
pub fn is_perfect_maze(grid: &MazeGrid) -> bool {
    let graph = passage_graph(grid);
    let path_tiles = graph.node_count();

    path_tiles > 0
        && connected_components(&graph) == 1
        && graph.edge_count() == path_tiles - 1
}
