use nogo_mcts::{
    agent::{Agent, MctsAgent, RandomAgent},
    nogo::NoGoBoard,
    AgentConfig, GameState, MCTSError, PlayerId,
};

fn mcts_agent(role: PlayerId, seed: u64, iterations: usize) -> MctsAgent {
    MctsAgent::new(
        AgentConfig::new(role)
            .with_seed(seed)
            .with_iterations(iterations),
    )
    .unwrap()
}

#[test]
fn test_same_seed_same_moves() {
    let board = NoGoBoard::new(5, 5).unwrap();
    let mut first = mcts_agent(PlayerId::First, 42, 100);
    let mut second = mcts_agent(PlayerId::First, 42, 100);

    let mut position = board;
    for _ in 0..3 {
        let a = first.take_action(&position);
        let b = second.take_action(&position);
        assert_eq!(a, b);

        let mv = a.unwrap();
        position = position.apply(mv.index).unwrap();
    }
}

#[test]
fn test_random_agent_plays_legal_moves() {
    let mut agent = RandomAgent::new(AgentConfig::new(PlayerId::First).with_seed(7)).unwrap();
    let board = NoGoBoard::from_rows(&["X..", "...", "..O"], PlayerId::First).unwrap();

    for _ in 0..20 {
        let mv = agent.take_action(&board).unwrap();
        assert_eq!(mv.player, PlayerId::First);
        assert!(board.apply(mv.index).is_ok());
    }
}

#[test]
fn test_agents_return_none_without_moves() {
    let board = NoGoBoard::from_rows(&["X."], PlayerId::Second).unwrap();

    let mut random = RandomAgent::new(AgentConfig::new(PlayerId::Second).with_seed(1)).unwrap();
    assert_eq!(random.take_action(&board), None);

    let mut mcts = mcts_agent(PlayerId::Second, 1, 50);
    assert_eq!(mcts.take_action(&board), None);
}

#[test]
fn test_role_mismatch_still_moves() {
    // A white agent asked about a black-to-move position answers for black
    let mut agent = mcts_agent(PlayerId::Second, 3, 30);
    let board = NoGoBoard::new(3, 3).unwrap();

    let mv = agent.take_action(&board).unwrap();
    assert_eq!(mv.player, PlayerId::First);
}

#[test]
fn test_full_game_between_agents() {
    let mut black = mcts_agent(PlayerId::First, 11, 60);
    let mut white =
        RandomAgent::new(AgentConfig::new(PlayerId::Second).with_name("rand").with_seed(12))
            .unwrap();
    let mut board = NoGoBoard::new(4, 4).unwrap();

    let loser = loop {
        let action = match board.current_player() {
            PlayerId::First => black.take_action(&board),
            PlayerId::Second => white.take_action(&board),
        };
        match action {
            Some(mv) => board = board.apply(mv.index).unwrap(),
            None => break board.current_player(),
        }
        assert!(board.stone_count() <= 16);
    };

    assert_eq!(board.legal_move_count(), 0);
    assert_eq!(loser, board.current_player());
    assert_eq!(Agent::<NoGoBoard>::name(&white), "rand");
}

#[test]
fn test_from_args() {
    let agent = MctsAgent::from_args("name=bot role=black seed=9 N=25").unwrap();
    assert_eq!(agent.config().name, "bot");
    assert_eq!(agent.config().iterations, 25);
    assert_eq!(Agent::<NoGoBoard>::role(&agent), PlayerId::First);

    assert!(matches!(
        MctsAgent::from_args("name=bot"),
        Err(MCTSError::InvalidRole(_))
    ));
    assert!(matches!(
        MctsAgent::from_args("role=black N=many"),
        Err(MCTSError::InvalidArgument { .. })
    ));
    assert!(matches!(
        MctsAgent::from_args("name=a;b role=white"),
        Err(MCTSError::InvalidName(_))
    ));
}

#[test]
fn test_invalid_search_config_is_rejected() {
    let config = AgentConfig::new(PlayerId::First);
    let search = nogo_mcts::MCTSConfig::default().with_exploration_constant(f64::NAN);

    assert!(matches!(
        MctsAgent::with_search_config(config, search),
        Err(MCTSError::InvalidConfiguration(_))
    ));
}
