//! Perfect play, the mixed-strategy session and the learning agent together

use mindgames::{
    config::{AgentConfig, MatchConfig},
    ports::MoveStrategy,
    q_learning::{Credit, LearningAgent},
    tictactoe::{
        Board, GameOutcome, MatchSession, MinimaxStrategy, Player, RandomStrategy, best_move_for,
        evaluate, minimax,
    },
};

fn play(x: &mut dyn MoveStrategy, o: &mut dyn MoveStrategy) -> GameOutcome {
    let mut board = Board::new();
    let mut to_move = Player::X;
    loop {
        let strategy: &mut dyn MoveStrategy = match to_move {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let pos = strategy.select_move(&board, to_move).unwrap();
        board.place(pos, to_move).unwrap();
        if let Some(outcome) = GameOutcome::from_board(&board) {
            return outcome;
        }
        to_move = to_move.opponent();
    }
}

#[test]
fn empty_board_is_a_draw_under_perfect_play() {
    let mut board = Board::new();
    assert_eq!(minimax(&mut board, Player::X), 0);
    assert_eq!(minimax(&mut board, Player::O), 0);
    assert_eq!(board, Board::new());
    assert_eq!(evaluate(&board), None);
}

#[test]
fn minimax_against_itself_draws() {
    let outcome = play(&mut MinimaxStrategy::new(), &mut MinimaxStrategy::new());
    assert_eq!(outcome, GameOutcome::Draw);
}

#[test]
fn minimax_never_loses_to_random_play() {
    for seed in 0..15 {
        let mut random = RandomStrategy::with_seed(seed);
        let as_x = play(&mut MinimaxStrategy::new(), &mut random);
        assert_ne!(as_x, GameOutcome::Win(Player::O), "seed {seed}");

        let as_o = play(&mut random, &mut MinimaxStrategy::new());
        assert_ne!(as_o, GameOutcome::Win(Player::X), "seed {seed}");
    }
}

#[test]
fn o_takes_the_win_over_the_block() {
    // X threatens 0-1-2, O can complete 3-4-5.
    let board = Board::from_string("XX. OO. X..").unwrap();
    assert_eq!(best_move_for(&board, Player::O), Some(5));
    assert_eq!(best_move_for(&board, Player::X), Some(2));
}

#[test]
fn fresh_update_moves_a_tenth_of_the_reward() {
    let mut agent = LearningAgent::new(&AgentConfig::default().with_seed(0));
    let state = Board::new();
    let mut next = state;
    next.place(4, Player::X).unwrap();
    let value = agent.update(&state, 4, 1.0, &next, 0.1, 0.9).unwrap();
    assert!((value - 0.1).abs() < 1e-12);
    assert_eq!(agent.q_table().get(&next), [0.0; 9]);
    assert!((agent.q_table().get(&state)[4] - 0.1).abs() < 1e-12);
}

#[test]
fn agent_learns_from_a_lost_game() {
    let mut agent = LearningAgent::new(&AgentConfig::default().with_seed(2));
    let mut board = Board::new();
    agent.begin_game(board);
    // X at 0,1,2 wins; O (the agent's side) played 3 and 4.
    for (pos, player) in [
        (0, Player::X),
        (3, Player::O),
        (1, Player::X),
        (4, Player::O),
        (2, Player::X),
    ] {
        board.place(pos, player).unwrap();
        agent.observe(player, board);
    }
    let updates = agent
        .learn(GameOutcome::Win(Player::X), Credit::Side(Player::O))
        .unwrap();
    assert_eq!(updates, 2);
    assert!(agent.trajectory().is_empty());

    let after_x = Board::from_string("X.. ... ...").unwrap();
    assert!(agent.q_table().get(&after_x)[3] < 0.0);

    // A second call has nothing left to replay.
    let again = agent
        .learn(GameOutcome::Win(Player::X), Credit::Side(Player::O))
        .unwrap();
    assert_eq!(again, 0);
}

#[test]
fn match_session_with_pure_minimax_never_loses() {
    for seed in 0..5 {
        let config = MatchConfig::default()
            .with_ai_player(Player::O)
            .with_minimax_probability(1.0)
            .with_seed(seed);
        let mut session = MatchSession::new(&config).unwrap();
        let mut human = RandomStrategy::with_seed(seed + 100);

        while session.outcome().is_none() {
            if session.is_ai_turn() {
                session.play_ai().unwrap();
            } else {
                let pos = human
                    .select_move(session.board(), session.human_player())
                    .unwrap();
                session.play_human(pos).unwrap();
            }
        }
        assert_ne!(session.outcome(), Some(GameOutcome::Win(Player::X)));
        assert!(session.agent().trajectory().is_empty());
        assert!(!session.agent().q_table().is_empty());
    }
}

#[test]
fn learned_only_session_keeps_its_table_across_games() {
    let config = MatchConfig::default()
        .with_minimax_probability(0.0)
        .with_agent(AgentConfig::default().with_seed(8))
        .with_seed(8);
    let mut session = MatchSession::new(&config).unwrap();
    let mut human = RandomStrategy::with_seed(9);

    let mut sizes = Vec::new();
    for _ in 0..3 {
        while session.outcome().is_none() {
            if session.is_ai_turn() {
                session.play_ai().unwrap();
            } else {
                let pos = human
                    .select_move(session.board(), session.human_player())
                    .unwrap();
                session.play_human(pos).unwrap();
            }
        }
        sizes.push(session.agent().q_table().len());
        session.new_game();
        assert_eq!(session.board(), &Board::new());
    }
    assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
}
