use crate::bits::BitReader;
use crate::error::{Corruption, Result};

/// One entry of a [`PrefixTree`]. Internal nodes refer to other entries of
/// the same tree by absolute index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf(u8),
    Internal { on_zero: u8, on_one: u8 },
}

/// A static prefix code stored as a flat node array, root at index 0.
#[derive(Debug)]
pub struct PrefixTree {
    nodes: &'static [Node],
}

impl PrefixTree {
    pub const fn new(nodes: &'static [Node]) -> Self {
        PrefixTree { nodes }
    }

    pub fn nodes(&self) -> &'static [Node] {
        self.nodes
    }

    /// Walks from the root, one bit per step, until a leaf is reached.
    pub fn decode(&self, bits: &mut BitReader<'_>) -> Result<u8> {
        let mut node = self.root()?;
        loop {
            let Node::Internal { on_zero, on_one } = node else {
                // A leaf at the root would decode without reading a bit.
                return Err(Corruption::MissingBranch { bit: false }.into());
            };

            let bit = bits.next_bit()?;
            let next = if bit { on_one } else { on_zero };
            node = *self
                .nodes
                .get(usize::from(next))
                .ok_or(Corruption::MissingBranch { bit })?;

            if let Node::Leaf(value) = node {
                return Ok(value);
            }
        }
    }

    fn root(&self) -> Result<Node> {
        self.nodes
            .first()
            .copied()
            .ok_or_else(|| Corruption::MissingBranch { bit: false }.into())
    }

    /// The bit path to every leaf, in tree order.
    pub fn codes(&self) -> Vec<(u8, Vec<bool>)> {
        let mut codes = Vec::new();
        let mut stack = vec![(0usize, Vec::new())];

        while let Some((index, path)) = stack.pop() {
            match self.nodes.get(index) {
                Some(Node::Leaf(value)) => codes.push((*value, path)),
                Some(Node::Internal { on_zero, on_one }) => {
                    let mut one = path.clone();
                    one.push(true);
                    stack.push((usize::from(*on_one), one));
                    let mut zero = path;
                    zero.push(false);
                    stack.push((usize::from(*on_zero), zero));
                }
                None => {}
            }
        }

        codes
    }

    /// The bits that decode to `value`, if any leaf holds it.
    pub fn code_for(&self, value: u8) -> Option<Vec<bool>> {
        self.codes()
            .into_iter()
            .find(|(leaf, _)| *leaf == value)
            .map(|(_, path)| path)
    }
}
