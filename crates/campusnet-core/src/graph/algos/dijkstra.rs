use crate::error::Result;
use crate::graph::types::{Distance, ShortestPaths, Weight};
use crate::graph::Graph;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry<W> {
    pub vertex: usize,
    pub distance: W,
}

impl<W: Weight> PartialEq for HeapEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for HeapEntry<W> {}

impl<W: Weight> PartialOrd for HeapEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for HeapEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .weight_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// State tracked during one Dijkstra run
struct DijkstraState<W> {
    dist: Vec<Option<W>>,
    heap: BinaryHeap<Reverse<HeapEntry<W>>>,
    stale_pops: usize,
    relaxations: usize,
}

impl<W: Weight> DijkstraState<W> {
    fn new(vertex_count: usize, source: usize) -> Self {
        let mut dist = vec![None; vertex_count];
        dist[source] = Some(W::ZERO);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            vertex: source,
            distance: W::ZERO,
        }));

        Self {
            dist,
            heap,
            stale_pops: 0,
            relaxations: 0,
        }
    }

    /// An entry is stale when a shorter distance was committed after it was pushed
    fn is_stale(&self, entry: &HeapEntry<W>) -> bool {
        self.dist[entry.vertex]
            .is_some_and(|best| entry.distance.weight_cmp(&best) == Ordering::Greater)
    }

    fn relax(&mut self, vertex: usize, candidate: W) {
        let improves = match self.dist[vertex] {
            Some(current) => candidate.weight_cmp(&current) == Ordering::Less,
            None => true,
        };

        if improves {
            self.dist[vertex] = Some(candidate);
            self.heap.push(Reverse(HeapEntry {
                vertex,
                distance: candidate,
            }));
            self.relaxations += 1;
        }
    }
}

/// Shortest distances from `source` to every vertex of `graph`.
///
/// Uses a binary heap with lazy deletion: outdated entries stay in the heap
/// and are skipped when popped. A graph with any negative edge (self-loops
/// included) is rejected with `NegativeWeight` before the search starts, since
/// the relaxation loop would never settle on it. Unreachable vertices come
/// back as [`Distance::Unreachable`].
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn shortest_paths_from<W: Weight>(graph: &Graph<W>, source: usize) -> Result<ShortestPaths<W>> {
    graph.check_vertex(source)?;
    graph.ensure_non_negative()?;

    let mut state = DijkstraState::<W>::new(graph.vertex_count(), source);

    while let Some(Reverse(entry)) = state.heap.pop() {
        if state.is_stale(&entry) {
            trace!(vertex = entry.vertex, distance = %entry.distance, "skipping stale entry");
            state.stale_pops += 1;
            continue;
        }

        for neighbor in graph.neighbors(entry.vertex)? {
            state.relax(neighbor.vertex, entry.distance.plus(neighbor.weight));
        }
    }

    let result = ShortestPaths {
        source,
        distances: state.dist.into_iter().map(Distance::from).collect(),
    };

    debug!(
        reachable = result.reachable_count(),
        relaxations = state.relaxations,
        stale_pops = state.stale_pops,
        "shortest_paths_from"
    );

    Ok(result)
}
