//! The two fixed code tables of the PKLITE format.
//!
//! Node 0 of each table is the root. Its bit-1 child is the node right
//! after it, while every other internal node has its bit-0 child there.

use crate::tree::{Node, PrefixTree};

/// Length of the sentinel code `011100`, resolved with one extra raw byte.
pub const SENTINEL_LENGTH: u8 = 25;

/// Copy lengths. Codes run from `10` (2) and `11` (3) through `011111111`
/// (24), with `011100` reserved for [`SENTINEL_LENGTH`].
pub static LENGTH_TREE: PrefixTree = PrefixTree::new(&[
    Node::Internal { on_zero: 4, on_one: 1 },
    Node::Internal { on_zero: 2, on_one: 3 },
    Node::Leaf(2),
    Node::Leaf(3),
    Node::Internal { on_zero: 5, on_one: 10 },
    Node::Internal { on_zero: 6, on_one: 7 },
    Node::Leaf(4),
    Node::Internal { on_zero: 8, on_one: 9 },
    Node::Leaf(5),
    Node::Leaf(6),
    Node::Internal { on_zero: 11, on_one: 16 },
    Node::Internal { on_zero: 12, on_one: 13 },
    Node::Leaf(7),
    Node::Internal { on_zero: 14, on_one: 15 },
    Node::Leaf(8),
    Node::Leaf(9),
    Node::Internal { on_zero: 17, on_one: 22 },
    Node::Internal { on_zero: 18, on_one: 19 },
    Node::Leaf(10),
    Node::Internal { on_zero: 20, on_one: 21 },
    Node::Leaf(11),
    Node::Leaf(12),
    Node::Internal { on_zero: 23, on_one: 28 },
    Node::Internal { on_zero: 24, on_one: 25 },
    Node::Leaf(25),
    Node::Internal { on_zero: 26, on_one: 27 },
    Node::Leaf(13),
    Node::Leaf(14),
    Node::Internal { on_zero: 29, on_one: 34 },
    Node::Internal { on_zero: 30, on_one: 31 },
    Node::Leaf(15),
    Node::Internal { on_zero: 32, on_one: 33 },
    Node::Leaf(16),
    Node::Leaf(17),
    Node::Internal { on_zero: 35, on_one: 40 },
    Node::Internal { on_zero: 36, on_one: 37 },
    Node::Leaf(18),
    Node::Internal { on_zero: 38, on_one: 39 },
    Node::Leaf(19),
    Node::Leaf(20),
    Node::Internal { on_zero: 41, on_one: 44 },
    Node::Internal { on_zero: 42, on_one: 43 },
    Node::Leaf(21),
    Node::Leaf(22),
    Node::Internal { on_zero: 45, on_one: 46 },
    Node::Leaf(23),
    Node::Leaf(24),
]);

/// High byte of a back-reference offset. `1` decodes to 0, the remaining
/// values 1 through 31 take four to seven bits.
pub static OFFSET_TREE: PrefixTree = PrefixTree::new(&[
    Node::Internal { on_zero: 2, on_one: 1 },
    Node::Leaf(0),
    Node::Internal { on_zero: 3, on_one: 14 },
    Node::Internal { on_zero: 4, on_one: 7 },
    Node::Internal { on_zero: 5, on_one: 6 },
    Node::Leaf(1),
    Node::Leaf(2),
    Node::Internal { on_zero: 8, on_one: 11 },
    Node::Internal { on_zero: 9, on_one: 10 },
    Node::Leaf(3),
    Node::Leaf(4),
    Node::Internal { on_zero: 12, on_one: 13 },
    Node::Leaf(5),
    Node::Leaf(6),
    Node::Internal { on_zero: 15, on_one: 32 },
    Node::Internal { on_zero: 16, on_one: 23 },
    Node::Internal { on_zero: 17, on_one: 20 },
    Node::Internal { on_zero: 18, on_one: 19 },
    Node::Leaf(7),
    Node::Leaf(8),
    Node::Internal { on_zero: 21, on_one: 22 },
    Node::Leaf(9),
    Node::Leaf(10),
    Node::Internal { on_zero: 24, on_one: 27 },
    Node::Internal { on_zero: 25, on_one: 26 },
    Node::Leaf(11),
    Node::Leaf(12),
    Node::Internal { on_zero: 28, on_one: 29 },
    Node::Leaf(13),
    Node::Internal { on_zero: 30, on_one: 31 },
    Node::Leaf(14),
    Node::Leaf(15),
    Node::Internal { on_zero: 33, on_one: 48 },
    Node::Internal { on_zero: 34, on_one: 41 },
    Node::Internal { on_zero: 35, on_one: 38 },
    Node::Internal { on_zero: 36, on_one: 37 },
    Node::Leaf(16),
    Node::Leaf(17),
    Node::Internal { on_zero: 39, on_one: 40 },
    Node::Leaf(18),
    Node::Leaf(19),
    Node::Internal { on_zero: 42, on_one: 45 },
    Node::Internal { on_zero: 43, on_one: 44 },
    Node::Leaf(20),
    Node::Leaf(21),
    Node::Internal { on_zero: 46, on_one: 47 },
    Node::Leaf(22),
    Node::Leaf(23),
    Node::Internal { on_zero: 49, on_one: 56 },
    Node::Internal { on_zero: 50, on_one: 53 },
    Node::Internal { on_zero: 51, on_one: 52 },
    Node::Leaf(24),
    Node::Leaf(25),
    Node::Internal { on_zero: 54, on_one: 55 },
    Node::Leaf(26),
    Node::Leaf(27),
    Node::Internal { on_zero: 57, on_one: 60 },
    Node::Internal { on_zero: 58, on_one: 59 },
    Node::Leaf(28),
    Node::Leaf(29),
    Node::Internal { on_zero: 61, on_one: 62 },
    Node::Leaf(30),
    Node::Leaf(31),
]);
