//! Enumeration of complete contractions.
//!
//! A pairing matches every operator position with exactly one other, each pair
//! being an annihilator followed (later in the product) by a creator.

use crate::op::{Action, Op};

/// Action the pivot of every recursion step must have.
///
/// The pivot is always the lowest free position. It can only be paired with a
/// later operator, so if it is a creator no pairing of the remaining positions
/// exists (a leading creator annihilates the vacuum bra). This fixes the order
/// in which pairings, and therefore output terms, are produced.
pub const PIVOT_ACTION: Action = Action::Annihilate;

/// One contraction: positions in the original operator product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Contraction {
    /// Position of the annihilation operator
    pub annihilator: usize,
    /// Position of the creation operator
    pub creator: usize,
}

impl Contraction {
    pub fn new(annihilator: usize, creator: usize) -> Self {
        Contraction {
            annihilator,
            creator,
        }
    }

    /// The two positions, smallest first.
    pub fn span(&self) -> (usize, usize) {
        if self.annihilator < self.creator {
            (self.annihilator, self.creator)
        } else {
            (self.creator, self.annihilator)
        }
    }
}

/// A complete set of contractions.
pub type Pairing = Vec<Contraction>;

/// Whether `a` may be contracted with a later `b`.
pub fn can_contract(a: &Op, b: &Op) -> bool {
    a.action == Action::Annihilate && b.action == Action::Create
}

/// All pairings of the positions in `free`.
///
/// The pivot is the smallest free position, whatever order `free` is given
/// in. Its partners are tried in the order they appear in `free`. No free
/// positions yields exactly one (empty) pairing, an unpairable state yields
/// none.
pub fn generate_pairings(ops: &[Op], free: &[usize]) -> Vec<Pairing> {
    let Some((at, &pivot)) = free.iter().enumerate().min_by_key(|&(_, &pos)| pos) else {
        return vec![vec![]];
    };
    if ops[pivot].action != PIVOT_ACTION {
        return vec![];
    }
    let rest: Vec<usize> = free
        .iter()
        .enumerate()
        .filter_map(|(t, &pos)| (t != at).then_some(pos))
        .collect();
    rest.iter()
        .enumerate()
        .filter(|&(_, &partner)| can_contract(&ops[pivot], &ops[partner]))
        .flat_map(|(k, &partner)| {
            let remaining: Vec<usize> = rest
                .iter()
                .enumerate()
                .filter_map(|(t, &pos)| (t != k).then_some(pos))
                .collect();
            generate_pairings(ops, &remaining)
                .into_iter()
                .map(move |sub| {
                    let mut pairing = Vec::with_capacity(sub.len() + 1);
                    pairing.push(Contraction::new(pivot, partner));
                    pairing.extend(sub);
                    pairing
                })
        })
        .collect()
}

/// All pairings of the whole product `ops`.
pub fn all_pairings(ops: &[Op]) -> Vec<Pairing> {
    let free: Vec<usize> = (0..ops.len()).collect();
    generate_pairings(ops, &free)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{fannx, fcrex};

    fn c(a: usize, b: usize) -> Contraction {
        Contraction::new(a, b)
    }

    #[test]
    fn empty_product_has_one_empty_pairing() {
        assert_eq!(all_pairings(&[]), vec![Vec::<Contraction>::new()]);
    }

    #[test]
    fn leading_creator_has_none() {
        assert!(all_pairings(&[fcrex("q"), fannx("p")]).is_empty());
    }

    #[test]
    fn two_by_two_in_generation_order() {
        let ops = [fannx("p3"), fannx("p4"), fcrex("p1"), fcrex("p2")];
        assert_eq!(
            all_pairings(&ops),
            vec![vec![c(0, 2), c(1, 3)], vec![c(0, 3), c(1, 2)]]
        );
    }

    #[test]
    fn pivot_is_smallest_free_position_in_any_order() {
        let ops = [fannx("p3"), fannx("p4"), fcrex("p1"), fcrex("p2")];
        let sort = |mut pairings: Vec<Pairing>| {
            pairings.iter_mut().for_each(|p| p.sort());
            pairings.sort();
            pairings
        };
        let shuffled = generate_pairings(&ops, &[2, 0, 1, 3]);
        assert_eq!(shuffled.len(), 2);
        assert_eq!(sort(shuffled), sort(all_pairings(&ops)));
        assert_eq!(generate_pairings(&ops, &[3, 1, 2, 0]).len(), 2);
    }

    #[test]
    fn alternating_product_has_single_pairing() {
        let ops = [fannx("1"), fcrex("2"), fannx("3"), fcrex("4")];
        assert_eq!(all_pairings(&ops), vec![vec![c(0, 1), c(2, 3)]]);
    }

    #[test]
    fn pairs_are_annihilator_then_creator() {
        let ops = [
            fannx("a"),
            fannx("b"),
            fcrex("c"),
            fannx("d"),
            fcrex("e"),
            fcrex("f"),
        ];
        for pairing in all_pairings(&ops) {
            assert_eq!(pairing.len(), 3);
            for pair in pairing {
                assert!(pair.annihilator < pair.creator);
                assert!(can_contract(&ops[pair.annihilator], &ops[pair.creator]));
            }
        }
    }
}
