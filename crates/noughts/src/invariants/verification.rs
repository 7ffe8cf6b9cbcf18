//! Formal verification of invariants using the Kani model checker.
//!
//! These proof harnesses verify that the invariant set holds for all
//! bounded move sequences, not just the ones the tests happen to pick.

#[cfg(kani)]
mod proofs {
    use crate::engine::{GameInProgress, GameTransition};
    use crate::invariants::{EngineInvariants, InvariantSet};
    use crate::position::Position;

    /// Any sequence of four legal moves preserves the invariant set.
    #[kani::proof]
    #[kani::unwind(6)]
    fn invariants_hold_after_arbitrary_moves() {
        let mut game = GameInProgress::new();

        for _ in 0..4 {
            let number: u8 = kani::any();
            kani::assume((1..=9).contains(&number));

            let pos = match Position::from_number(number) {
                Some(pos) => pos,
                None => return,
            };

            match game.make_move(pos) {
                Ok(GameTransition::InProgress(next)) => game = next,
                Ok(GameTransition::Finished(_)) => return,
                Err(_) => return,
            }
        }

        assert!(
            EngineInvariants::check_all(&game).is_ok(),
            "invariant set violated by a legal move sequence"
        );
    }
}
