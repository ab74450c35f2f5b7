use nogo_mcts::{
    nogo::NoGoBoard,
    policy::selection::{SelectionPolicy, UCB1Policy},
    GameState, PlayerId, SearchTree,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// Black has two moves on a 1x2 board and either one leaves white stuck.
fn two_move_tree(rng: &mut ChaCha20Rng) -> SearchTree<NoGoBoard> {
    let board = NoGoBoard::new(2, 1).unwrap();
    let mut tree = SearchTree::new(board);
    let root = tree.root();

    let first = tree.expand(root, rng);
    let second = tree.expand(root, rng);
    assert_ne!(first, root);
    assert_ne!(second, root);
    assert_ne!(first, second);

    tree
}

#[test]
fn test_new_tree_has_only_root() {
    let tree = SearchTree::new(NoGoBoard::new(3, 3).unwrap());
    let root = tree.get(tree.root());

    assert_eq!(tree.len(), 1);
    assert!(root.parent.is_none());
    assert!(root.incoming.is_none());
    assert_eq!(root.legal_moves(), 9);
    assert_eq!(root.visits(), 0);
    assert_eq!(root.mover, PlayerId::Second);
    assert!(!root.is_terminal());
    assert!(!root.is_fully_expanded());
}

#[test]
fn test_select_stops_at_unexpanded_root() {
    let tree = SearchTree::new(NoGoBoard::new(3, 3).unwrap());
    let path = tree.select(&UCB1Policy::default());

    assert_eq!(path, vec![tree.root()]);
}

#[test]
fn test_expand_until_fully_expanded() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let mut tree = SearchTree::new(NoGoBoard::new(3, 3).unwrap());
    let root = tree.root();

    for _ in 0..9 {
        let child = tree.expand(root, &mut rng);
        assert_ne!(child, root);
        assert_eq!(tree.get(child).parent, Some(root));
    }

    assert_eq!(tree.len(), 10);
    assert!(tree.get(root).is_fully_expanded());
    for index in 0..9 {
        assert!(tree.child_by_move(root, index).is_some());
    }

    // Nothing is left to expand, so the leaf comes back unchanged.
    assert_eq!(tree.expand(root, &mut rng), root);
    assert_eq!(tree.len(), 10);
}

#[test]
fn test_expand_terminal_leaf_is_noop() {
    let board = NoGoBoard::from_rows(&["X."], PlayerId::Second).unwrap();
    let mut tree = SearchTree::new(board);
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    assert!(tree.get(tree.root()).is_terminal());
    assert_eq!(tree.expand(tree.root(), &mut rng), tree.root());
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.select(&UCB1Policy::default()), vec![tree.root()]);
}

#[test]
fn test_expanded_child_records_move_and_position() {
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    let board = NoGoBoard::new(3, 3).unwrap();
    let mut tree = SearchTree::new(board.clone());

    let child = tree.expand(tree.root(), &mut rng);
    let node = tree.get(child);
    let mv = node.incoming.unwrap();

    assert_eq!(mv.player, PlayerId::First);
    assert_eq!(node.mover, PlayerId::First);
    assert_eq!(node.depth, 1);
    assert_eq!(node.state, board.apply(mv.index).unwrap());
    assert_eq!(node.state.current_player(), PlayerId::Second);
}

#[test]
fn test_backpropagate_credits_the_mover() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let mut tree = SearchTree::new(NoGoBoard::new(3, 1).unwrap());
    let root = tree.root();
    let child = tree.expand(root, &mut rng);
    let path = [root, child];

    tree.backpropagate(&path, PlayerId::First);
    assert_eq!(tree.get(root).visits(), 1);
    assert_eq!(tree.get(root).wins(), 0);
    assert_eq!(tree.get(child).visits(), 1);
    assert_eq!(tree.get(child).wins(), 1);

    tree.backpropagate(&path, PlayerId::Second);
    assert_eq!(tree.get(root).visits(), 2);
    assert_eq!(tree.get(root).wins(), 1);
    assert_eq!(tree.get(child).visits(), 2);
    assert_eq!(tree.get(child).wins(), 1);
}

#[test]
fn test_unvisited_child_is_always_selected() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let mut tree = two_move_tree(&mut rng);
    let root = tree.root();
    let children = tree.get(root).children.clone();
    let (visited, unvisited) = (children[0], children[1]);
    let mover = tree.get(visited).mover;

    // visits = 10, wins = 5 on one child, nothing on the other
    for i in 0..10 {
        let winner = if i % 2 == 0 { mover } else { mover.opponent() };
        tree.backpropagate(&[root, visited], winner);
    }
    assert_eq!(tree.get(visited).visits(), 10);
    assert_eq!(tree.get(visited).wins(), 5);

    let policy = UCB1Policy::default();
    for _ in 0..5 {
        assert_eq!(policy.select_child(&tree, root), Some(unvisited));
        assert_eq!(tree.select(&policy), vec![root, unvisited]);
    }
}

#[test]
fn test_ties_go_to_first_child() {
    let mut rng = ChaCha20Rng::seed_from_u64(10);
    let mut tree = two_move_tree(&mut rng);
    let root = tree.root();
    let children = tree.get(root).children.clone();

    // Both children lose once, so their scores are identical.
    for &child in &children {
        let loser = tree.get(child).mover;
        tree.backpropagate(&[root, child], loser.opponent());
    }

    let policy = UCB1Policy::default();
    assert_eq!(policy.select_child(&tree, root), Some(children[0]));
}

#[test]
fn test_select_descends_into_terminal_child() {
    let mut rng = ChaCha20Rng::seed_from_u64(6);
    let mut tree = two_move_tree(&mut rng);
    let root = tree.root();
    let children = tree.get(root).children.clone();

    for &child in &children {
        tree.backpropagate(&[root, child], PlayerId::First);
    }

    let path = tree.select(&UCB1Policy::default());
    assert_eq!(path.len(), 2);
    assert!(tree.get(path[1]).is_terminal());
}

#[test]
fn test_handles_survive_arena_growth() {
    let mut rng = ChaCha20Rng::seed_from_u64(21);
    let mut tree = SearchTree::new(NoGoBoard::new(4, 4).unwrap());
    let root = tree.root();
    let first = tree.expand(root, &mut rng);
    let first_move = tree.get(first).incoming;

    // Grow the arena well past its initial capacity.
    let mut frontier = vec![first];
    let mut step = 0;
    while tree.len() < 200 && step < 10_000 {
        let parent = frontier[step % frontier.len()];
        step += 1;
        let child = tree.expand(parent, &mut rng);
        if child != parent {
            frontier.push(child);
        }
    }
    assert!(tree.len() >= 200);

    assert_eq!(tree.get(first).incoming, first_move);
    assert_eq!(tree.get(first).parent, Some(root));
    for &id in &frontier[1..] {
        let parent = tree.get(id).parent.unwrap();
        assert!(tree.get(parent).children.contains(&id));
    }
}
