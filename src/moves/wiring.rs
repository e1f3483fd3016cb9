//! Strip wiring for every quarter turn.
//!
//! A clockwise quarter turn moves four boundary strips around a 4-cycle.
//! Each [`Handoff`] says which strip feeds which; `reversed` marks the
//! hand-offs where the two faces' row/column axes run in opposite
//! directions, so element `k` of the destination takes element `n-1-k`
//! of the source.
//!
//! Every ring has an even number of reversed hand-offs, otherwise four
//! quarter turns would not restore the cube.
//!
//! The outer-face rings (`U D F B L R`) are fixed tables. The middle
//! slices (`M E S`) address index `n/2` on every face they touch, for
//! any `n`. Inner layers of arbitrary depth reuse the `L`, `U` and `F`
//! patterns shifted inwards.

use crate::core::Face::{self, Back, Down, Front, Left, Right, Up};
use crate::core::Line;

use super::layer::Axis;
use super::notation::MoveKind;
use Slot::{First, Last, Mid};

/// Row or column index, resolved against the cube size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    First,
    Mid,
    Last,
    /// `k` from the first edge.
    At(usize),
    /// `k` from the last edge.
    FromLast(usize),
}

impl Slot {
    /// Concrete index for an `n×n` face. `At`/`FromLast` depths must
    /// already be checked against `n`.
    pub(crate) fn resolve(self, n: usize) -> usize {
        match self {
            Slot::First => 0,
            Slot::Mid => n / 2,
            Slot::Last => n - 1,
            Slot::At(k) => k,
            Slot::FromLast(k) => n - 1 - k,
        }
    }
}

/// One strip of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct StripRef {
    pub face: Face,
    pub row: bool,
    pub slot: Slot,
}

impl StripRef {
    pub(crate) fn line(self, n: usize) -> Line {
        let index = self.slot.resolve(n);
        if self.row {
            Line::Row(index)
        } else {
            Line::Col(index)
        }
    }
}

const fn row(face: Face, slot: Slot) -> StripRef {
    StripRef { face, row: true, slot }
}

const fn col(face: Face, slot: Slot) -> StripRef {
    StripRef { face, row: false, slot }
}

/// Strip `from` moves onto strip `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Handoff {
    pub from: StripRef,
    pub to: StripRef,
    pub reversed: bool,
}

const fn keep(from: StripRef, to: StripRef) -> Handoff {
    Handoff { from, to, reversed: false }
}

const fn flip(from: StripRef, to: StripRef) -> Handoff {
    Handoff { from, to, reversed: true }
}

/// A 4-cycle of hand-offs for one clockwise quarter turn.
pub(crate) type Ring = [Handoff; 4];

/// Ring moved by a clockwise quarter turn of `kind`.
pub(crate) const fn ring(kind: MoveKind) -> Ring {
    match kind {
        MoveKind::U => [
            keep(row(Front, First), row(Left, First)),
            keep(row(Left, First), row(Back, First)),
            keep(row(Back, First), row(Right, First)),
            keep(row(Right, First), row(Front, First)),
        ],
        MoveKind::D => [
            keep(row(Front, Last), row(Right, Last)),
            keep(row(Right, Last), row(Back, Last)),
            keep(row(Back, Last), row(Left, Last)),
            keep(row(Left, Last), row(Front, Last)),
        ],
        MoveKind::F => [
            keep(row(Up, Last), col(Right, First)),
            flip(col(Right, First), row(Down, First)),
            flip(row(Down, First), col(Left, Last)),
            keep(col(Left, Last), row(Up, Last)),
        ],
        MoveKind::B => [
            flip(row(Up, First), col(Left, First)),
            flip(col(Left, First), row(Down, Last)),
            keep(row(Down, Last), col(Right, Last)),
            keep(col(Right, Last), row(Up, First)),
        ],
        MoveKind::L => [
            keep(col(Up, First), col(Front, First)),
            keep(col(Front, First), col(Down, First)),
            flip(col(Down, First), col(Back, Last)),
            flip(col(Back, Last), col(Up, First)),
        ],
        MoveKind::R => [
            flip(col(Up, Last), col(Back, First)),
            flip(col(Back, First), col(Down, Last)),
            keep(col(Down, Last), col(Front, Last)),
            keep(col(Front, Last), col(Up, Last)),
        ],
        // Follows L.
        MoveKind::M => [
            keep(col(Up, Mid), col(Front, Mid)),
            keep(col(Front, Mid), col(Down, Mid)),
            flip(col(Down, Mid), col(Back, Mid)),
            flip(col(Back, Mid), col(Up, Mid)),
        ],
        // Follows D.
        MoveKind::E => [
            keep(row(Front, Mid), row(Right, Mid)),
            keep(row(Right, Mid), row(Back, Mid)),
            keep(row(Back, Mid), row(Left, Mid)),
            keep(row(Left, Mid), row(Front, Mid)),
        ],
        // Follows F.
        MoveKind::S => [
            keep(row(Up, Mid), col(Right, Mid)),
            flip(col(Right, Mid), row(Down, Mid)),
            flip(row(Down, Mid), col(Left, Mid)),
            keep(col(Left, Mid), row(Up, Mid)),
        ],
    }
}

/// Ring moved by a clockwise quarter turn of inner layer `depth` along
/// `axis`. Caller guarantees `0 < depth < n - 1`.
pub(crate) const fn layer_ring(axis: Axis, depth: usize) -> Ring {
    let near = Slot::At(depth);
    let far = Slot::FromLast(depth);
    match axis {
        // L pattern, `depth` columns in from Left.
        Axis::X => [
            keep(col(Up, near), col(Front, near)),
            keep(col(Front, near), col(Down, near)),
            flip(col(Down, near), col(Back, far)),
            flip(col(Back, far), col(Up, near)),
        ],
        // U pattern, `depth` rows down from Up.
        Axis::Y => [
            keep(row(Front, near), row(Left, near)),
            keep(row(Left, near), row(Back, near)),
            keep(row(Back, near), row(Right, near)),
            keep(row(Right, near), row(Front, near)),
        ],
        // F pattern, `depth` layers back from Front.
        Axis::Z => [
            keep(row(Up, far), col(Right, near)),
            flip(col(Right, near), row(Down, near)),
            flip(row(Down, near), col(Left, far)),
            keep(col(Left, far), row(Up, far)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rings() -> Vec<Ring> {
        let mut all: Vec<Ring> = MoveKind::ALL.iter().map(|&k| ring(k)).collect();
        for axis in Axis::ALL {
            all.push(layer_ring(axis, 1));
            all.push(layer_ring(axis, 2));
        }
        all
    }

    #[test]
    fn test_rings_are_closed_cycles() {
        for ring in rings() {
            for i in 0..4 {
                assert_eq!(ring[i].to, ring[(i + 1) % 4].from, "{ring:?}");
            }
        }
    }

    #[test]
    fn test_rings_have_even_reversals() {
        for ring in rings() {
            let flips = ring.iter().filter(|h| h.reversed).count();
            assert_eq!(flips % 2, 0, "{ring:?}");
        }
    }

    #[test]
    fn test_rings_touch_four_distinct_faces() {
        for ring in rings() {
            let mut faces: Vec<_> = ring.iter().map(|h| h.from.face).collect();
            faces.sort();
            faces.dedup();
            assert_eq!(faces.len(), 4);
        }
    }

    #[test]
    fn test_face_rings_skip_own_face() {
        for kind in MoveKind::FACE_TURNS {
            let own = kind.face().unwrap();
            for handoff in ring(kind) {
                assert_ne!(handoff.from.face, own);
                assert_ne!(handoff.from.face, own.opposite());
            }
        }
    }

    #[test]
    fn test_slot_resolution() {
        assert_eq!(Slot::First.resolve(4), 0);
        assert_eq!(Slot::Mid.resolve(4), 2);
        assert_eq!(Slot::Mid.resolve(5), 2);
        assert_eq!(Slot::Last.resolve(4), 3);
        assert_eq!(Slot::At(1).resolve(4), 1);
        assert_eq!(Slot::FromLast(1).resolve(4), 2);
    }
}
