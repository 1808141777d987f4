use super::*;

// ==================== PROMOTION TESTS ====================

#[test]
fn test_pawn_promotes_to_queen() {
    let pos = fen("4k3/P7/8/8/8/8/8/4K3 w - -");
    let next = pos.make_move(mv("a7a8"));

    assert_eq!(white_view(&next, "a8"), Cell::Occupied(Piece::ours(Type::Queen)));
    assert!(white_view(&next, "a7").is_empty());
}

#[test]
fn test_promotion_gains_material() {
    let pos = fen("4k3/P7/8/8/8/8/8/4K3 w - -");
    let gain = pos.move_value(mv("a7a8"));
    assert!(
        gain > Type::Queen.value() - 2 * Type::Pawn.value(),
        "Promotion should be worth roughly a queen, got {}",
        gain
    );
}

#[test]
fn test_capture_promotion() {
    let pos = fen("1r2k3/P7/8/8/8/8/8/4K3 w - -");
    assert!(has_move(&pos, mv("a7b8")));

    let next = pos.make_move(mv("a7b8"));
    assert_eq!(white_view(&next, "b8"), Cell::Occupied(Piece::ours(Type::Queen)));
}

#[test]
fn test_black_promotes_on_first_rank() {
    let pos = fen("4k3/8/8/8/8/8/p7/4K3 b - -");
    let next = pos.make_move(black_mv("a2a1"));

    // White to move again: Black's new queen is a lower case piece on a1
    assert_eq!(next.board()[sq("a1")], Cell::Occupied(Piece::theirs(Type::Queen)));
}
