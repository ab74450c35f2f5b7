//! NoGo self-play example
//!
//! An MCTS agent (black) plays a random agent (white) on a 9x9 board.
//!
//! Usage: `cargo run --example nogo_selfplay -- [seed] [iterations]`
//! Set `RUST_LOG=debug` to see per-search summaries.

use std::env;

use nogo_mcts::{
    agent::{Agent, MctsAgent, RandomAgent},
    nogo::NoGoBoard,
    AgentConfig, GameState, PlayerId,
};

fn main() {
    // Initialize logging
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2024);
    let iterations: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(1_000);

    println!("MCTS NoGo Example");
    println!("=================");
    println!("seed {}, {} iterations per move", seed, iterations);
    println!();

    let mut black = MctsAgent::new(
        AgentConfig::new(PlayerId::First)
            .with_seed(seed)
            .with_iterations(iterations),
    )
    .expect("valid agent config");
    let mut white = RandomAgent::new(
        AgentConfig::new(PlayerId::Second)
            .with_name("random")
            .with_seed(seed.wrapping_add(1)),
    )
    .expect("valid agent config");

    let mut board = NoGoBoard::standard();
    let mut moves = 0;

    loop {
        println!("{}\n", board);

        let to_move = board.current_player();
        let (name, action) = match to_move {
            PlayerId::First => (
                Agent::<NoGoBoard>::name(&black).to_string(),
                black.take_action(&board),
            ),
            PlayerId::Second => (
                Agent::<NoGoBoard>::name(&white).to_string(),
                white.take_action(&board),
            ),
        };

        let Some(mv) = action else {
            println!("{} ({}) has no legal move after {} moves", name, to_move, moves);
            println!("{} wins!", to_move.opponent());
            break;
        };

        let label = board.coord(mv.index).unwrap_or_else(|| mv.index.to_string());
        println!("{} ({}) plays {}", name, to_move, label);
        board = board.apply(mv.index).expect("agents only return legal moves");
        moves += 1;
    }
}
