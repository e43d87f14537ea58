use bitflags::Flags;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
    Unchanged,
}

impl Edge {
    /// The new digital value, if there was a transition.
    pub fn value(self) -> Option<bool> {
        match self {
            Edge::Pressed => Some(true),
            Edge::Released => Some(false),
            Edge::Unchanged => None,
        }
    }
}

/// Compares `bit` between two consecutive masks.
///
/// The release check runs before the press check and the press check has the last word.
pub fn detect_edge<F: Flags + Copy>(previous: F, current: F, bit: F) -> Edge {
    let was_set = previous.intersects(bit);
    let is_set = current.intersects(bit);

    let mut edge = Edge::Unchanged;
    if !is_set && was_set {
        edge = Edge::Released;
    }
    if is_set && !was_set {
        edge = Edge::Pressed;
    }
    edge
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovr::{RawButton, RawNearTouch, RawTouch};

    #[test]
    fn exhaustive_single_bit() {
        let bit = RawButton::A;
        let other = RawButton::B;
        for prev in [RawButton::empty(), bit, other, bit | other] {
            for curr in [RawButton::empty(), bit, other, bit | other] {
                let expected = match (prev.contains(bit), curr.contains(bit)) {
                    (false, true) => Edge::Pressed,
                    (true, false) => Edge::Released,
                    _ => Edge::Unchanged,
                };
                assert_eq!(
                    detect_edge(prev, curr, bit),
                    expected,
                    "prev: {prev:?} curr: {curr:?}"
                );
            }
        }
    }

    #[test]
    fn unrelated_bits_are_ignored() {
        assert_eq!(
            detect_edge(RawTouch::empty(), RawTouch::X | RawTouch::Y, RawTouch::A),
            Edge::Unchanged
        );
        assert_eq!(
            detect_edge(
                RawNearTouch::all(),
                RawNearTouch::L_INDEX_TRIGGER,
                RawNearTouch::L_INDEX_TRIGGER
            ),
            Edge::Unchanged
        );
    }

    #[test]
    fn edge_values() {
        assert_eq!(Edge::Pressed.value(), Some(true));
        assert_eq!(Edge::Released.value(), Some(false));
        assert_eq!(Edge::Unchanged.value(), None);
    }
}
