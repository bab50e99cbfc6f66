use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("row {row} has {len} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("invalid symbol {symbol:?} at ({row}, {col})")]
    InvalidSymbol { symbol: char, row: usize, col: usize },
    #[error("no entrance in maze")]
    NoAgents,
    #[error("{0} entrances in maze, at most 4 supported")]
    TooManyAgents(usize),
    #[error("key {0:?} appears more than once")]
    DuplicateKey(char),
    #[error("splitting needs exactly one entrance, found {0}")]
    SplitNeedsOneEntrance(usize),
    #[error("entrance at {0:?} cannot be split into four")]
    UnsplittableEntrance((usize, usize)),
    #[error("search gave up after expanding {0} states")]
    BudgetExhausted(usize),
}
