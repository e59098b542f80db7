//! Property tests for chapter navigation.

use proptest::prelude::*;
use simplify_reader::error::ReaderError;
use simplify_reader::reader::{Chapter, Document};
use simplify_reader::state::{Move, ReaderState};

fn book(n: usize) -> Document {
    Document::new(
        (0..n)
            .map(|i| Chapter::new(format!("Chapter {}", i + 1), format!("body {i}")))
            .collect(),
    )
}

proptest! {
    #[test]
    fn load_always_starts_at_zero(n in 1usize..50) {
        let mut state = ReaderState::default();
        state.load(book(n)).unwrap();
        prop_assert_eq!(state.position(), Some((0, n)));
    }

    #[test]
    fn affordances_follow_index(n in 1usize..20, moves in prop::collection::vec(any::<bool>(), 0..60)) {
        let mut state = ReaderState::default();
        state.load(book(n)).unwrap();
        let mut expected = 0usize;

        for forward in moves {
            if forward {
                let outcome = state.advance().unwrap();
                if expected + 1 < n {
                    expected += 1;
                    prop_assert!(matches!(outcome, Move::Moved(_)));
                } else {
                    prop_assert_eq!(outcome, Move::AtLastChapter);
                }
            } else {
                let outcome = state.retreat().unwrap();
                if expected > 0 {
                    expected -= 1;
                    prop_assert!(matches!(outcome, Move::Moved(_)));
                } else {
                    prop_assert_eq!(outcome, Move::AtFirstChapter);
                }
            }

            let (index, len) = state.position().unwrap();
            prop_assert_eq!(index, expected);
            prop_assert_eq!(state.can_advance(), index < len - 1);
            prop_assert_eq!(state.can_retreat(), index > 0);
            prop_assert_eq!(&state.current_chapter().unwrap().body, &format!("body {index}"));
        }
    }
}

#[test]
fn empty_document_keeps_reader_empty() {
    let mut state = ReaderState::default();
    assert_eq!(state.load(book(0)), Err(ReaderError::EmptyDocument));
    assert!(!state.is_loaded());
    assert!(!state.can_advance());
    assert!(!state.can_retreat());
}
