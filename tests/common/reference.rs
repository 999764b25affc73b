use gambit::prelude::*;

/// Plain negamax with no pruning and no table, bottoming out in the same quiescence search.
pub fn negamax<R: Rules>(rules: &mut R, depth: u8) -> i32
{
    if rules.is_game_over()
    {
        return evaluate(&*rules, rules.side_to_move());
    }

    if depth == 0
    {
        let mut searcher = Searcher::new(&SearchConfig::default());
        return searcher.quiesce(rules, -INF, INF, 0).unwrap();
    }

    let moves = rules.legal_moves(None);
    if moves.is_empty()
    {
        return evaluate(&*rules, rules.side_to_move());
    }

    let mut best = -INF;
    for mv in moves
    {
        rules.apply(&mv).unwrap();
        let score = -negamax(rules, depth - 1);
        rules.undo().unwrap();
        best = best.max(score);
    }
    best
}

/// Scores every root move the way the agent does, but with `negamax`.
pub fn root_scores<R: Rules>(rules: &mut R, depth: u8) -> Vec<(Move, i32)>
{
    let mut scores = Vec::new();
    for mv in rules.legal_moves(None)
    {
        rules.apply(&mv).unwrap();
        let score = -negamax(rules, depth - 1);
        rules.undo().unwrap();
        scores.push((mv, score));
    }
    scores
}
