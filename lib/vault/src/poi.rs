use std::collections::BTreeMap;

use crate::{
    Error, MAX_AGENTS,
    grid::{Grid, Pos, Tile},
};

/// Agent starts and keys of a maze, with the node index each one gets in
/// the compressed graph.
///
/// Agent `i` is node `i`. The key ranked `k` among the present key letters
/// is node `agents + k`, and owns bit `k` of every [`KeySet`](crate::KeySet).
#[derive(Debug, Clone)]
pub struct PointsOfInterest {
    entrances: Vec<Pos>,
    keys: BTreeMap<u8, Pos>,
    rank: [Option<usize>; 26],
}

impl PointsOfInterest {
    pub fn extract(grid: &Grid) -> Result<Self, Error> {
        let mut entrances = Vec::new();
        let mut keys = BTreeMap::new();
        for (pos, tile) in grid.cells() {
            match tile {
                Tile::Entrance => entrances.push(pos),
                Tile::Key(k) => {
                    if keys.insert(k, pos).is_some() {
                        return Err(Error::DuplicateKey((b'a' + k) as char));
                    }
                }
                _ => (),
            }
        }

        if entrances.is_empty() {
            return Err(Error::NoAgents);
        }
        if entrances.len() > MAX_AGENTS {
            return Err(Error::TooManyAgents(entrances.len()));
        }

        let mut rank = [None; 26];
        for (i, &k) in keys.keys().enumerate() {
            rank[k as usize] = Some(i);
        }

        Ok(Self {
            entrances,
            keys,
            rank,
        })
    }

    pub fn agent_count(&self) -> usize {
        self.entrances.len()
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn node_count(&self) -> usize {
        self.agent_count() + self.key_count()
    }

    /// Bit of the key with the given letter offset, if that key is present.
    pub fn key_bit(&self, letter: u8) -> Option<usize> {
        self.rank.get(letter as usize).copied().flatten()
    }

    pub fn key_node(&self, letter: u8) -> Option<usize> {
        self.key_bit(letter).map(|bit| self.agent_count() + bit)
    }

    pub fn entrances(&self) -> &[Pos] {
        &self.entrances
    }

    /// Positions of every node, in node index order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.entrances
            .iter()
            .copied()
            .chain(self.keys.values().copied())
    }

    /// Printable label of a node, `@0`..`@3` for agents and the letter for keys.
    pub fn label(&self, node: usize) -> String {
        if node < self.agent_count() {
            format!("@{}", node)
        } else {
            self.keys
                .keys()
                .nth(node - self.agent_count())
                .map(|&k| ((b'a' + k) as char).to_string())
                .unwrap_or_else(|| format!("?{}", node))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn extract(input: &str) -> Result<PointsOfInterest, Error> {
        PointsOfInterest::extract(&Grid::parse(input).unwrap())
    }

    #[test]
    fn test_indices() {
        let poi = extract("#d.@.b#\n#@#a###\n").unwrap();
        assert_eq!(poi.agent_count(), 2);
        assert_eq!(poi.key_count(), 3);
        assert_eq!(poi.entrances(), &[(0, 3), (1, 1)]);

        // a < b < d regardless of scan order
        assert_eq!(poi.key_node(0), Some(2));
        assert_eq!(poi.key_node(1), Some(3));
        assert_eq!(poi.key_node(3), Some(4));
        assert_eq!(poi.key_node(2), None);
        assert_eq!(poi.key_bit(3), Some(2));

        assert_eq!(
            poi.positions().collect::<Vec<_>>(),
            vec![(0, 3), (1, 1), (1, 3), (0, 5), (0, 1)]
        );
        assert_eq!(poi.label(1), "@1");
        assert_eq!(poi.label(4), "d");
    }

    #[test]
    fn test_no_agents() {
        assert_eq!(extract("#a.b#\n").unwrap_err(), Error::NoAgents);
        assert_eq!(extract("").unwrap_err(), Error::NoAgents);
    }

    #[test]
    fn test_too_many_agents() {
        assert_eq!(
            extract("@.@.@\n.@.@.\n").unwrap_err(),
            Error::TooManyAgents(5)
        );
    }

    #[test]
    fn test_duplicate_key() {
        assert_eq!(extract("a.@.a\n").unwrap_err(), Error::DuplicateKey('a'));
    }
}
