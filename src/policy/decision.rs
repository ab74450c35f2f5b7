//! Final move decision
//!
//! Once the iteration budget is spent, the move to play is read off the root's
//! children. Ties always go to the child created first.

use crate::{
    config::BestChildCriteria,
    game_state::{GameState, Move},
    tree::{NodeId, SearchTree},
};

/// Picks the best child of `node` under the given criteria
///
/// Returns None when the node has no children.
pub fn best_child<S: GameState>(
    tree: &SearchTree<S>,
    node: NodeId,
    criteria: BestChildCriteria,
) -> Option<NodeId> {
    let children = &tree.get(node).children;

    match criteria {
        BestChildCriteria::MostVisits => first_max_by(children, |child| {
            tree.get(child).visits() as f64
        }),
        BestChildCriteria::HighestWinRate => first_max_by(children, |child| {
            tree.get(child).stats().win_rate()
        }),
    }
}

/// Returns the move leading to the root's best child
///
/// None is the "no move" result: the root was never expanded, either because
/// the budget was zero or because the position has no legal move.
pub fn best_move<S: GameState>(tree: &SearchTree<S>, criteria: BestChildCriteria) -> Option<Move> {
    best_child(tree, tree.root(), criteria).and_then(|child| tree.get(child).incoming)
}

fn first_max_by<F>(children: &[NodeId], score: F) -> Option<NodeId>
where
    F: Fn(NodeId) -> f64,
{
    let mut best: Option<(NodeId, f64)> = None;

    for &child in children {
        let value = score(child);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((child, value)),
        }
    }

    best.map(|(child, _)| child)
}
