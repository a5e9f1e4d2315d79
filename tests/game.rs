//! Game integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use quizboard::{
    Cue, EditError, Game, GameOptions, GameState, ParseError, PlayerError, PlayerField,
    QuestionField, QuestionRef, RoundError, RoundLabel, TurnError, Verdict,
};

const BOARD: &str = "1

Тема 1. Наука
100. Q1
Ответ: A1
200. Q2
Ответ: A2

Тема 2. История
300. Q3
Ответ: A3

2

Тема 1. Финал
500. Q5
Ответ: A5
";

fn game_with_players(players: u8) -> Game {
    let options = GameOptions::default().with_initial_players(players);
    let mut game = Game::new(options, 7);
    game.load_text(BOARD).unwrap();
    game
}

fn record_cues(game: &mut Game) -> Rc<RefCell<Vec<Cue>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    game.set_cue_sink(move |cue| sink.borrow_mut().push(cue));
    log
}

#[test]
fn new_game_has_placeholder_board_and_default_players() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.round_count(), 1);
    assert_eq!(game.current_round_index(), 0);
    assert_eq!(game.state(), GameState::Idle);

    let placeholder = &game.current_round().categories[0];
    assert_eq!(placeholder.title, "Загрузка...");
    let points: Vec<u32> = placeholder.questions.iter().map(|q| q.points).collect();
    assert_eq!(points, [100, 200, 300, 400, 500]);

    let players = game.players();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name(), "Игрок 1");
    assert_eq!(players[1].name(), "Игрок 2");
    assert_ne!(players[0].id(), players[1].id());
    assert!(!players[0].avatar_seed().is_empty());
    assert_eq!(players[0].score(), 0);
}

#[test]
fn load_text_replaces_board_and_failure_keeps_it() {
    let mut game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.load_text(BOARD), Ok(2));
    assert_eq!(game.current_round().categories[0].title, "Наука");

    game.switch_round(1).unwrap();
    assert_eq!(
        game.load_text("nothing useful here"),
        Err(ParseError::NoRoundsFound)
    );
    assert_eq!(game.round_count(), 2);
    assert_eq!(game.current_round_index(), 1);

    game.load_text(BOARD).unwrap();
    assert_eq!(game.current_round_index(), 0);
}

#[test]
fn correct_answer_awards_points_and_takes_the_turn() {
    let mut game = game_with_players(3);

    game.open_question(0, 1).unwrap();
    assert_eq!(game.state(), GameState::Deciding);
    assert_eq!(game.turn().answering, 0);

    let next = game.pass().unwrap();
    assert_eq!(next, game.players()[1].id());

    game.reveal().unwrap();
    assert_eq!(game.state(), GameState::Revealed);

    let result = game.score(true).unwrap();
    assert_eq!(result.verdict, Verdict::Correct);
    assert_eq!(result.points, 200);
    assert_eq!(result.delta, 200);
    assert_eq!(result.score, 200);
    assert_eq!(result.player_index, 1);
    assert!(result.turn_passed);

    let scorer = &game.players()[1];
    assert_eq!(scorer.score(), 200);
    assert_eq!(scorer.earned(), 200);
    assert_eq!(scorer.lost(), 0);
    assert_eq!(scorer.correct_count(), 1);
    assert_eq!(scorer.wrong_count(), 0);

    assert_eq!(game.turn().active, 1);
    assert_eq!(game.state(), GameState::Idle);
    assert!(game.current_question().is_none());
    assert!(game.current_round().categories[0].questions[1].answered);
}

#[test]
fn wrong_answer_deducts_points_and_keeps_the_turn() {
    let mut game = game_with_players(2);

    game.open_question(0, 1).unwrap();
    game.reveal().unwrap();
    let result = game.score(false).unwrap();

    assert_eq!(result.verdict, Verdict::Wrong);
    assert_eq!(result.delta, -200);
    assert!(!result.turn_passed);

    let player = &game.players()[0];
    assert_eq!(player.score(), -200);
    assert_eq!(player.lost(), -200);
    assert_eq!(player.earned(), 0);
    assert_eq!(player.wrong_count(), 1);
    assert_eq!(player.correct_count(), 0);

    assert_eq!(game.turn().active, 0);
    assert!(game.current_round().categories[0].questions[1].answered);
}

#[test]
fn correct_answer_by_active_player_does_not_pass_turn() {
    let mut game = game_with_players(2);
    game.set_active_player(1).unwrap();

    game.open_question(0, 0).unwrap();
    game.reveal().unwrap();
    let result = game.score(true).unwrap();

    assert!(!result.turn_passed);
    assert_eq!(game.turn().active, 1);
}

#[test]
fn pass_wraps_around_the_table() {
    let mut game = game_with_players(3);
    game.set_active_player(2).unwrap();

    game.open_question(0, 0).unwrap();
    assert_eq!(game.turn().answering, 2);
    assert_eq!(game.answering_player().unwrap().name(), "Игрок 3");

    game.pass().unwrap();
    assert_eq!(game.turn().answering, 0);
    assert_eq!(game.turn().active, 2);
    assert_eq!(game.state(), GameState::Deciding);
}

#[test]
fn dismiss_consumes_question_without_scoring() {
    let mut game = game_with_players(2);

    game.open_question(0, 0).unwrap();
    let at = game.dismiss().unwrap();
    assert_eq!(
        at,
        QuestionRef {
            round: 0,
            category: 0,
            question: 0
        }
    );

    game.open_question(1, 0).unwrap();
    game.reveal().unwrap();
    game.dismiss().unwrap();

    let round = game.current_round();
    assert!(round.categories[0].questions[0].answered);
    assert!(round.categories[1].questions[0].answered);
    assert!(game.players().iter().all(|p| p.score() == 0));
    assert_eq!(game.state(), GameState::Idle);

    assert_eq!(game.dismiss().unwrap_err(), TurnError::InvalidState);
}

#[test]
fn played_question_cannot_be_reopened() {
    let mut game = game_with_players(2);

    game.open_question(0, 0).unwrap();
    game.dismiss().unwrap();

    assert_eq!(
        game.open_question(0, 0).unwrap_err(),
        TurnError::AlreadyAnswered
    );
    assert_eq!(game.state(), GameState::Idle);
}

#[test]
fn commands_rejected_in_wrong_state() {
    let mut game = game_with_players(2);

    assert_eq!(game.reveal().unwrap_err(), TurnError::InvalidState);
    assert_eq!(game.pass().unwrap_err(), TurnError::InvalidState);
    assert_eq!(game.score(true).unwrap_err(), TurnError::InvalidState);

    game.open_question(0, 0).unwrap();
    assert_eq!(game.score(true).unwrap_err(), TurnError::InvalidState);
    assert_eq!(game.open_question(0, 1).unwrap_err(), TurnError::InvalidState);

    game.reveal().unwrap();
    assert_eq!(game.reveal().unwrap_err(), TurnError::InvalidState);
    assert_eq!(game.pass().unwrap_err(), TurnError::InvalidState);

    assert!(game.players().iter().all(|p| p.score() == 0));
}

#[test]
fn unknown_cells_are_rejected() {
    let mut game = game_with_players(2);

    assert_eq!(
        game.open_question(5, 0).unwrap_err(),
        TurnError::CategoryNotFound
    );
    assert_eq!(
        game.open_question(1, 3).unwrap_err(),
        TurnError::QuestionNotFound
    );
    assert_eq!(game.state(), GameState::Idle);
}

#[test]
fn commands_without_players_are_no_ops() {
    let mut game = game_with_players(0);
    assert_eq!(game.player_count(), 0);

    game.open_question(0, 0).unwrap();
    assert!(game.answering_player().is_none());
    assert_eq!(game.pass().unwrap_err(), TurnError::NoPlayers);

    game.reveal().unwrap();
    assert_eq!(game.score(true).unwrap_err(), TurnError::NoPlayers);
    assert_eq!(game.state(), GameState::Revealed);
    assert!(!game.current_round().categories[0].questions[0].answered);

    game.dismiss().unwrap();
    assert!(game.current_round().categories[0].questions[0].answered);
}

#[test]
fn switch_round_discards_open_question() {
    let mut game = game_with_players(2);

    game.open_question(0, 0).unwrap();
    game.switch_round(1).unwrap();

    assert_eq!(game.state(), GameState::Idle);
    assert!(game.open_question_ref().is_none());
    assert_eq!(game.current_round_index(), 1);

    game.switch_round(0).unwrap();
    assert!(!game.current_round().categories[0].questions[0].answered);

    assert_eq!(game.switch_round(2).unwrap_err(), RoundError::RoundNotFound);
    assert_eq!(game.current_round_index(), 0);
}

#[test]
fn open_question_is_scoped_to_current_round() {
    let mut game = game_with_players(2);
    game.switch_round(1).unwrap();

    let stale = QuestionRef {
        round: 0,
        category: 0,
        question: 0,
    };
    assert_eq!(
        game.open_question_at(stale).unwrap_err(),
        TurnError::WrongRound
    );
    assert_eq!(
        game.open_question(1, 0).unwrap_err(),
        TurnError::CategoryNotFound
    );

    game.open_question(0, 0).unwrap();
    assert_eq!(game.current_question().unwrap().prompt, "Q5");
    assert_eq!(game.open_category_title(), Some("Финал"));
    game.reveal().unwrap();
    assert_eq!(game.score(true).unwrap().points, 500);

    assert!(game.rounds()[1].categories[0].questions[0].answered);
    assert!(game.rounds()[0].questions().all(|q| !q.answered));
}

#[test]
fn player_state_survives_round_switch() {
    let mut game = game_with_players(2);
    game.open_question(0, 0).unwrap();
    game.pass().unwrap();
    game.reveal().unwrap();
    game.score(true).unwrap();

    game.switch_round(1).unwrap();
    assert_eq!(game.turn().active, 1);
    assert_eq!(game.players()[1].score(), 100);
}

#[test]
fn removing_players_keeps_turn_indices_consistent() {
    let mut game = game_with_players(3);
    let ids: Vec<_> = game.players().iter().map(|p| p.id()).collect();

    game.set_active_player(2).unwrap();
    game.remove_player(ids[0]).unwrap();
    assert_eq!(game.turn().active, 1);
    assert_eq!(game.active_player().unwrap().id(), ids[2]);

    game.remove_player(ids[2]).unwrap();
    assert_eq!(game.turn().active, 0);
    assert_eq!(game.active_player().unwrap().id(), ids[1]);

    assert_eq!(
        game.remove_player(ids[0]).unwrap_err(),
        PlayerError::PlayerNotFound
    );
}

#[test]
fn removing_active_player_resets_to_first_seat() {
    let mut game = game_with_players(3);
    game.set_active_player(1).unwrap();
    let active = game.active_player().unwrap().id();

    game.remove_player(active).unwrap();
    assert_eq!(game.turn().active, 0);
    assert_eq!(game.player_count(), 2);
}

#[test]
fn removing_answering_player_mid_question() {
    let mut game = game_with_players(3);
    game.open_question(0, 0).unwrap();
    game.pass().unwrap();
    game.pass().unwrap();
    let answering = game.answering_player().unwrap().id();

    game.remove_player(answering).unwrap();
    assert_eq!(game.turn().answering, 0);

    game.reveal().unwrap();
    let result = game.score(true).unwrap();
    assert_eq!(result.player_index, 0);
}

#[test]
fn add_player_and_edit_fields() {
    let mut game = game_with_players(2);
    let id = game.add_player();

    let player = game.player(id).unwrap();
    assert_eq!(player.name(), "Игрок 3");
    let old_seed = player.avatar_seed().to_owned();

    game.set_player_field(id, PlayerField::Name("Alice")).unwrap();
    game.set_player_field(id, PlayerField::Score(-50)).unwrap();
    let new_seed = game.change_avatar(id).unwrap().to_owned();

    let player = game.player(id).unwrap();
    assert_eq!(player.name(), "Alice");
    assert_eq!(player.score(), -50);
    assert_eq!(player.earned(), 0);
    assert_eq!(player.avatar_seed(), new_seed);
    assert_ne!(new_seed, old_seed);

    game.remove_player(id).unwrap();
    assert_eq!(
        game.set_player_field(id, PlayerField::Score(1)).unwrap_err(),
        PlayerError::PlayerNotFound
    );
    assert_eq!(
        game.change_avatar(id).unwrap_err(),
        PlayerError::PlayerNotFound
    );
    assert_eq!(
        game.set_active_player(5).unwrap_err(),
        PlayerError::PlayerNotFound
    );
}

#[test]
fn same_seed_gives_same_avatars() {
    let a = Game::new(GameOptions::default(), 99);
    let b = Game::new(GameOptions::default(), 99);
    assert_eq!(a.players()[0].avatar_seed(), b.players()[0].avatar_seed());
    assert_ne!(a.players()[0].avatar_seed(), a.players()[1].avatar_seed());
}

#[test]
fn cues_follow_transitions() {
    let mut game = game_with_players(2);
    let cues = record_cues(&mut game);

    game.open_question(0, 0).unwrap();
    game.reveal().unwrap();
    game.score(true).unwrap();
    assert_eq!(
        *cues.borrow(),
        [Cue::ThinkingStart, Cue::ThinkingStop, Cue::Correct, Cue::Celebrate]
    );

    cues.borrow_mut().clear();
    game.open_question(0, 1).unwrap();
    game.reveal().unwrap();
    game.score(false).unwrap();
    assert_eq!(
        *cues.borrow(),
        [Cue::ThinkingStart, Cue::ThinkingStop, Cue::Wrong]
    );

    cues.borrow_mut().clear();
    game.open_question(1, 0).unwrap();
    game.dismiss().unwrap();
    assert_eq!(*cues.borrow(), [Cue::ThinkingStart, Cue::ThinkingStop]);

    cues.borrow_mut().clear();
    game.switch_round(1).unwrap();
    game.open_question(0, 0).unwrap();
    game.switch_round(0).unwrap();
    assert_eq!(*cues.borrow(), [Cue::ThinkingStart, Cue::ThinkingStop]);

    cues.borrow_mut().clear();
    assert!(game.reveal().is_err());
    assert!(cues.borrow().is_empty());

    game.clear_cue_sink();
    game.switch_round(1).unwrap();
    game.open_question(0, 0).unwrap();
    assert!(cues.borrow().is_empty());
}

#[test]
fn editor_updates_current_round() {
    let mut game = game_with_players(2);

    game.set_question_field(0, 0, QuestionField::Points("abc")).unwrap();
    assert_eq!(game.current_round().categories[0].questions[0].points, 0);

    game.set_question_field(0, 0, QuestionField::Points(" 250 points")).unwrap();
    game.set_question_field(0, 0, QuestionField::Prompt("New prompt")).unwrap();
    game.set_question_field(0, 0, QuestionField::Answer("New answer")).unwrap();
    game.set_category_title(0, "Физика").unwrap();

    let category = &game.current_round().categories[0];
    assert_eq!(category.title, "Физика");
    assert_eq!(category.questions[0].points, 250);
    assert_eq!(category.questions[0].prompt, "New prompt");
    assert_eq!(category.questions[0].answer, "New answer");

    assert_eq!(
        game.set_question_field(0, 9, QuestionField::Prompt("x")).unwrap_err(),
        EditError::QuestionNotFound
    );
    assert_eq!(
        game.set_category_title(9, "x").unwrap_err(),
        EditError::CategoryNotFound
    );
}

#[test]
fn edited_points_are_used_when_scoring() {
    let mut game = game_with_players(1);
    game.set_question_field(0, 0, QuestionField::Points("750")).unwrap();

    game.open_question(0, 0).unwrap();
    game.reveal().unwrap();
    assert_eq!(game.score(true).unwrap().score, 750);
}

#[test]
fn add_and_delete_categories() {
    let mut game = game_with_players(2);

    let index = game.add_category();
    assert_eq!(index, 2);
    let added = &game.current_round().categories[index];
    assert_eq!(added.title, "Новая тема");
    let points: Vec<u32> = added.questions.iter().map(|q| q.points).collect();
    assert_eq!(points, [100, 200, 300, 400, 500]);
    assert!(added.questions.iter().all(|q| q.prompt.is_empty()));

    game.open_question(0, 0).unwrap();
    assert_eq!(
        game.delete_category(1).unwrap_err(),
        EditError::QuestionOpen
    );
    game.dismiss().unwrap();

    let removed = game.delete_category(1).unwrap();
    assert_eq!(removed.title, "История");
    assert_eq!(game.current_round().categories.len(), 2);
    assert_eq!(
        game.delete_category(5).unwrap_err(),
        EditError::CategoryNotFound
    );

    assert_eq!(game.rounds()[1].categories.len(), 1);
}

#[test]
fn reset_restores_board_and_scores() {
    let mut game = game_with_players(2);

    game.open_question(0, 0).unwrap();
    game.pass().unwrap();
    game.reveal().unwrap();
    game.score(true).unwrap();
    game.switch_round(1).unwrap();
    game.open_question(0, 0).unwrap();

    game.reset();

    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(game.current_round_index(), 0);
    assert_eq!(game.turn().active, 0);
    assert!(game.rounds().iter().all(|r| !r.is_cleared()));
    assert!(game.rounds().iter().flat_map(|r| r.questions()).all(|q| !q.answered));

    let player = &game.players()[1];
    assert_eq!(player.score(), 0);
    assert_eq!(player.earned(), 0);
    assert_eq!(player.correct_count(), 0);
    assert_eq!(player.name(), "Игрок 2");
}

#[test]
fn round_is_cleared_after_every_question_is_played() {
    let mut game = game_with_players(2);
    game.switch_round(1).unwrap();
    assert!(!game.current_round().is_cleared());

    game.open_question(0, 0).unwrap();
    game.dismiss().unwrap();
    assert!(game.current_round().is_cleared());
}

#[test]
fn round_labels_are_positional() {
    let game = game_with_players(2);
    let labels: Vec<_> = game.round_labels().collect();
    assert_eq!(labels, [RoundLabel::Part(1), RoundLabel::Final]);

    let mut game = game_with_players(2);
    game.load_text("Тема A\n1. a\n1\nТема B\n1. b\n2\nТема C\n1. c").unwrap();
    let labels: Vec<String> = game.round_labels().map(|l| l.to_string()).collect();
    assert_eq!(labels, ["Part 1", "Part 2", "Final"]);

    let single = Game::new(GameOptions::default(), 3);
    let labels: Vec<_> = single.round_labels().collect();
    assert_eq!(labels, [RoundLabel::Part(1)]);
}

#[test]
fn export_text_round_trips_through_load() {
    let mut game = game_with_players(2);
    game.set_category_title(1, "Новая история").unwrap();
    let exported = game.export_text();

    let mut other = Game::new(GameOptions::default(), 5);
    assert_eq!(other.load_text(&exported), Ok(2));
    assert_eq!(other.rounds(), game.rounds());
}

#[test]
fn scoring_saturates_at_score_bounds() {
    let mut game = game_with_players(1);
    let id = game.players()[0].id();

    game.set_player_field(id, PlayerField::Score(i64::MAX)).unwrap();
    game.open_question(0, 0).unwrap();
    game.reveal().unwrap();
    let result = game.score(true).unwrap();
    assert_eq!(result.score, i64::MAX);
    assert_eq!(game.players()[0].earned(), 100);

    game.set_player_field(id, PlayerField::Score(i64::MIN)).unwrap();
    game.open_question(0, 1).unwrap();
    game.reveal().unwrap();
    let result = game.score(false).unwrap();
    assert_eq!(result.score, i64::MIN);
    assert_eq!(game.players()[0].lost(), -200);
    assert_eq!(game.players()[0].wrong_count(), 1);
}
