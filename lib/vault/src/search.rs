use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    fmt,
};

use log::{info, trace};

use crate::{Error, KeySet, MAX_AGENTS, graph::Graph};

// Node index of an agent slot with no agent in it
const ABSENT: usize = usize::MAX;

/// Where every agent stands, plus the keys collected so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    pub pos: [usize; MAX_AGENTS],
    pub keys: KeySet,
}

impl State {
    pub fn start(agents: usize) -> Self {
        assert!(agents <= MAX_AGENTS, "{} agents", agents);
        Self {
            pos: core::array::from_fn(|i| if i < agents { i } else { ABSENT }),
            keys: KeySet::new(),
        }
    }

    /// `(slot, node)` for every occupied agent slot.
    pub fn agents(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        self.pos
            .into_iter()
            .enumerate()
            .filter(|&(_, node)| node != ABSENT)
    }

    fn advance(&self, slot: usize, node: usize, bit: usize) -> Self {
        let mut pos = self.pos;
        pos[slot] = node;
        Self {
            pos,
            keys: self.keys.with(bit),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Give up once this many states have been expanded.
    pub max_states: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved(usize),
    Unsolvable,
}

impl Outcome {
    pub fn steps(&self) -> Option<usize> {
        match *self {
            Outcome::Solved(n) => Some(n),
            Outcome::Unsolvable => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Solved(n) => write!(f, "{}", n),
            Outcome::Unsolvable => write!(f, "No solution found"),
        }
    }
}

// Every state one agent move away, along with the move's length
fn successors(graph: &Graph, state: State) -> impl Iterator<Item = (State, usize)> + '_ {
    state.agents().flat_map(move |(slot, node)| {
        assert!(
            node < graph.node_count(),
            "agent {} at unknown node {}",
            slot,
            node
        );
        graph.edges(node).iter().filter_map(move |edge| {
            if !state.keys.can_open(&edge.doors) {
                return None;
            }
            let Some(bit) = graph.key_bit(edge.to) else {
                panic!("edge {} -> {} does not lead to a key", node, edge.to);
            };
            if state.keys.contains(bit) {
                return None;
            }
            Some((state.advance(slot, edge.to, bit), edge.dist))
        })
    })
}

/// Dijkstra over `(agent nodes, keys)` until every key is collected.
pub fn search(graph: &Graph, limits: Limits) -> Result<Outcome, Error> {
    #[derive(PartialEq, Eq, PartialOrd, Ord)]
    struct Node {
        dist: Reverse<usize>,
        state: State,
    }

    if graph.key_count() == 0 {
        return Ok(Outcome::Solved(0));
    }

    let all_keys = graph.all_keys();
    let start = State::start(graph.agent_count());
    let mut queue = BinaryHeap::new();
    let mut dist = HashMap::new();
    queue.push(Node {
        dist: Reverse(0),
        state: start,
    });
    dist.insert(start, 0);
    let mut expanded = 0;

    while let Some(Node {
        dist: Reverse(d0),
        state,
    }) = queue.pop()
    {
        if dist.get(&state).is_some_and(|&best| best < d0) {
            // Superseded by a shorter path pushed later
            continue;
        }
        if state.keys == all_keys {
            info!("collected all keys in {} steps, {} states expanded", d0, expanded);
            return Ok(Outcome::Solved(d0));
        }
        if limits.max_states.is_some_and(|max| expanded >= max) {
            return Err(Error::BudgetExhausted(expanded));
        }
        expanded += 1;
        trace!("{:?} {:?} at {}", state.pos, state.keys, d0);

        for (next, step) in successors(graph, state) {
            let d1 = dist.get(&next).copied().unwrap_or(usize::MAX);
            if d0 + step < d1 {
                let d1 = d0 + step;
                dist.insert(next, d1);
                queue.push(Node {
                    dist: Reverse(d1),
                    state: next,
                });
            }
        }
    }

    info!("no way to collect all keys, {} states expanded", expanded);
    Ok(Outcome::Unsolvable)
}
