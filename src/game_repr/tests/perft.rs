use super::*;

// ==================== PERFT TESTS ====================
// Pseudo-legal counts agree with the published legal counts while no side
// can be in check or castle through an attacked square.

#[test]
fn test_perft_starting_position_depth_1() {
    let pos = Position::default();
    assert_eq!(pos.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let pos = Position::default();
    assert_eq!(pos.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let pos = Position::default();
    assert_eq!(pos.perft(3), 8902);
}

#[test]
fn test_perft_kiwipete_depth_1() {
    let pos = fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    assert_eq!(pos.perft(1), 48);
}

#[test]
fn test_perft_zero_is_one() {
    assert_eq!(Position::fischer().perft(0), 1);
}
