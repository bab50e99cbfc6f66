use std::fmt;

// Represents a set of keys by rank
// Using u32 because there are only 26 keys max
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeySet(u32);

impl KeySet {
    pub fn new() -> Self {
        Self(0)
    }

    /// The set holding exactly the keys ranked `0..count`.
    pub fn full(count: usize) -> Self {
        assert!(count <= 26, "{} keys do not fit in a key set", count);
        Self((1u32 << count) - 1)
    }

    pub fn insert(&mut self, bit: usize) {
        self.0 |= 1 << bit;
    }

    pub fn with(mut self, bit: usize) -> Self {
        self.insert(bit);
        self
    }

    pub fn contains(&self, bit: usize) -> bool {
        (self.0 & (1 << bit)) != 0
    }

    // This keyset can open all doors in the set
    pub fn can_open(&self, doors: &Self) -> bool {
        ((!self.0) & doors.0) == 0
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        self.can_open(other)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + use<> {
        let bits = self.0;
        (0..26).filter(move |&i| (bits & (1 << i)) != 0)
    }
}

impl fmt::Debug for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, bit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", bit)?;
        }
        write!(f, "]")
    }
}
