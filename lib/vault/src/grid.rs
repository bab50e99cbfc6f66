use std::{fmt, str::FromStr};

use ndarray::Array2;

use crate::Error;

pub type Pos = (usize, usize);

/// A single maze cell. Key and door letters are stored as offsets from
/// `a`/`A`, so `Key(0)` is `a` and `Door(0)` is `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Entrance,
    Key(u8),
    Door(u8),
}

impl Tile {
    fn parse(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Open),
            '@' => Some(Tile::Entrance),
            'a'..='z' => Some(Tile::Key(ch as u8 - b'a')),
            'A'..='Z' => Some(Tile::Door(ch as u8 - b'A')),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match *self {
            Tile::Wall => '#',
            Tile::Open => '.',
            Tile::Entrance => '@',
            Tile::Key(k) => (b'a' + k) as char,
            Tile::Door(d) => (b'A' + d) as char,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Array2<Tile>,
}

impl Grid {
    /// Reads rows until the first blank line or the end of input.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        for (r, line) in input.lines().take_while(|line| !line.is_empty()).enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(c, ch)| {
                    Tile::parse(ch).ok_or(Error::InvalidSymbol {
                        symbol: ch,
                        row: r,
                        col: c,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(Error::RaggedRow {
                        row: r,
                        len: row.len(),
                        expected: first.len(),
                    });
                }
            }
            rows.push(row);
        }

        let h = rows.len();
        let w = rows.first().map_or(0, |row| row.len());
        let tiles = Array2::from_shape_fn((h, w), |(r, c)| rows[r][c]);
        Ok(Self { tiles })
    }

    pub fn dim(&self) -> (usize, usize) {
        self.tiles.dim()
    }

    pub fn tile(&self, pos: Pos) -> Tile {
        self.tiles[pos]
    }

    pub fn neighbors(&self, (r, c): Pos) -> impl Iterator<Item = Pos> {
        let (h, w) = self.tiles.dim();
        [
            r.checked_sub(1).map(|r| (r, c)),
            Some((r + 1, c)),
            c.checked_sub(1).map(|c| (r, c)),
            Some((r, c + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(move |&(r, c)| r < h && c < w)
    }

    /// Every non-wall tile in row-major order, along with its position.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        self.tiles
            .indexed_iter()
            .filter(|(_, tile)| **tile != Tile::Wall)
            .map(|(pos, &tile)| (pos, tile))
    }

    pub fn entrances(&self) -> Vec<Pos> {
        self.cells()
            .filter(|(_, tile)| *tile == Tile::Entrance)
            .map(|(pos, _)| pos)
            .collect()
    }

    // Wall off the entrance and its orthogonal neighbours, and put a new
    // entrance on each diagonal
    pub fn split_entrance(&self) -> Result<Self, Error> {
        let entrances = self.entrances();
        let &[(r0, c0)] = &entrances[..] else {
            return Err(Error::SplitNeedsOneEntrance(entrances.len()));
        };

        let (h, w) = self.dim();
        if r0 == 0 || c0 == 0 || r0 + 1 >= h || c0 + 1 >= w {
            return Err(Error::UnsplittableEntrance((r0, c0)));
        }
        for r in r0 - 1..=r0 + 1 {
            for c in c0 - 1..=c0 + 1 {
                if (r, c) != (r0, c0) && self.tiles[(r, c)] != Tile::Open {
                    return Err(Error::UnsplittableEntrance((r0, c0)));
                }
            }
        }

        let mut tiles = self.tiles.clone();
        for pos in [(r0, c0), (r0 - 1, c0), (r0 + 1, c0), (r0, c0 - 1), (r0, c0 + 1)] {
            tiles[pos] = Tile::Wall;
        }
        for pos in [
            (r0 - 1, c0 - 1),
            (r0 - 1, c0 + 1),
            (r0 + 1, c0 - 1),
            (r0 + 1, c0 + 1),
        ] {
            tiles[pos] = Tile::Entrance;
        }
        Ok(Self { tiles })
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.tiles.rows() {
            for tile in row {
                write!(f, "{}", tile.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid {:?}\n{}", self.dim(), self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        let grid = Grid::parse("#####\n#@aA#\n#####\n").unwrap();
        assert_eq!(grid.dim(), (3, 5));
        assert_eq!(grid.tile((1, 1)), Tile::Entrance);
        assert_eq!(grid.tile((1, 2)), Tile::Key(0));
        assert_eq!(grid.tile((1, 3)), Tile::Door(0));
        assert_eq!(grid.tile((0, 0)), Tile::Wall);
        assert_eq!(grid.entrances(), vec![(1, 1)]);
    }

    #[test]
    fn test_parse_stops_at_blank_line() {
        let grid = Grid::parse("#@a#\n\n!!!\n").unwrap();
        assert_eq!(grid.dim(), (1, 4));
    }

    #[test]
    fn test_ragged_row() {
        assert_eq!(
            Grid::parse("####\n#@a\n####\n"),
            Err(Error::RaggedRow {
                row: 1,
                len: 3,
                expected: 4
            })
        );
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            Grid::parse("#@?#\n"),
            Err(Error::InvalidSymbol {
                symbol: '?',
                row: 0,
                col: 2
            })
        );
    }

    #[test]
    fn test_display_roundtrip() {
        let input = "#########\n#b.A.@.a#\n#########\n";
        let grid: Grid = input.parse().unwrap();
        assert_eq!(grid.to_string(), input);
    }

    #[test]
    fn test_neighbors_clipped() {
        let grid = Grid::parse("@.\n..\n").unwrap();
        let mut ns = grid.neighbors((0, 0)).collect::<Vec<_>>();
        ns.sort();
        assert_eq!(ns, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_split_entrance() {
        let grid = Grid::parse(include_str!("testdata/split0.txt")).unwrap();
        let split = grid.split_entrance().unwrap();
        let expected = Grid::parse(include_str!("testdata/quad0.txt")).unwrap();
        assert_eq!(split, expected);
        assert_eq!(split.entrances().len(), 4);
    }

    #[test]
    fn test_split_entrance_blocked() {
        let grid = Grid::parse("#####\n#a..#\n#.@.#\n#...#\n#####\n").unwrap();
        assert_eq!(
            grid.split_entrance(),
            Err(Error::UnsplittableEntrance((2, 2)))
        );

        let grid = Grid::parse("#@.@#\n").unwrap();
        assert_eq!(grid.split_entrance(), Err(Error::SplitNeedsOneEntrance(2)));
    }
}
