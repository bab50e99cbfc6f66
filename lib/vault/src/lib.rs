//! Shortest way for up to four agents to collect every key in a vault.
//!
//! The grid is first compressed into a small graph over agent starts and
//! keys, each edge remembering which doors it passes. A uniform-cost search
//! over `(agent nodes, collected keys)` then finds the minimum total number
//! of steps.

pub use compile::compile;
pub use error::Error;
pub use graph::{Edge, Graph};
pub use grid::{Grid, Pos, Tile};
pub use keyset::KeySet;
pub use poi::PointsOfInterest;
pub use search::{Limits, Outcome, State, search};

mod compile;
mod error;
mod graph;
mod grid;
mod keyset;
mod poi;
mod search;

pub const MAX_AGENTS: usize = 4;

/// A maze compiled once and ready to be searched.
pub struct Solver {
    poi: PointsOfInterest,
    graph: Graph,
    limits: Limits,
}

impl Solver {
    pub fn new(grid: &Grid) -> Result<Self, Error> {
        let poi = PointsOfInterest::extract(grid)?;
        let graph = compile(grid, &poi);
        Ok(Self {
            poi,
            graph,
            limits: Limits::default(),
        })
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn points(&self) -> &PointsOfInterest {
        &self.poi
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn solve(&self) -> Result<Outcome, Error> {
        search(&self.graph, self.limits)
    }
}

pub fn solve(grid: &Grid) -> Result<Outcome, Error> {
    Solver::new(grid)?.solve()
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test_case(include_str!("testdata/single0.txt") => Outcome::Solved(8); "single0")]
    #[test_case(include_str!("testdata/single1.txt") => Outcome::Solved(86); "single1")]
    #[test_case(include_str!("testdata/single2.txt") => Outcome::Solved(132); "single2")]
    #[test_case(include_str!("testdata/single3.txt") => Outcome::Solved(136); "single3")]
    #[test_case(include_str!("testdata/single4.txt") => Outcome::Solved(81); "single4")]
    #[test_case(include_str!("testdata/quad0.txt") => Outcome::Solved(8); "quad0")]
    #[test_case(include_str!("testdata/quad1.txt") => Outcome::Solved(24); "quad1")]
    #[test_case(include_str!("testdata/quad2.txt") => Outcome::Solved(32); "quad2")]
    #[test_case(include_str!("testdata/quad3.txt") => Outcome::Solved(72); "quad3")]
    fn test_solve(input: &str) -> Outcome {
        init();

        let grid = Grid::parse(input).unwrap();
        solve(&grid).unwrap()
    }

    #[test]
    fn test_split() {
        init();

        let grid = Grid::parse(include_str!("testdata/split0.txt")).unwrap();
        // One agent has to walk a, b, c, d in turn
        assert_eq!(solve(&grid), Ok(Outcome::Solved(26)));
        assert_eq!(solve(&grid.split_entrance().unwrap()), Ok(Outcome::Solved(8)));
    }

    #[test]
    fn test_malformed_input_before_search() {
        let grid = Grid::parse("#a.b#\n").unwrap();
        assert_eq!(solve(&grid), Err(Error::NoAgents));

        let grid = Grid::parse("@@@@@\n").unwrap();
        assert_eq!(solve(&grid).unwrap_err(), Error::TooManyAgents(5));
    }

    #[test]
    fn test_solver_limits() {
        init();

        let grid = Grid::parse(include_str!("testdata/single3.txt")).unwrap();
        let solver = Solver::new(&grid)
            .unwrap()
            .with_limits(Limits { max_states: Some(10) });
        assert_eq!(solver.graph().key_count(), 16);
        assert_eq!(solver.points().agent_count(), 1);
        assert_eq!(solver.solve(), Err(Error::BudgetExhausted(10)));
    }
}
