use std::cell::RefCell;
use std::rc::Rc;

use quizboard::{
    Category, Cue, Game, GameOptions, GameState, Player, PlayerField, PlayerId, Question,
    QuestionField, ScoreResult, Verdict,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

const AVATAR_URL: &str = "https://api.dicebear.com/9.x/adventurer/svg";

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    cues: Rc<RefCell<Vec<Cue>>>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        let mut game = Game::new(GameOptions::default(), seed as u64);
        let cues = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&cues);
        game.set_cue_sink(move |cue| sink.borrow_mut().push(cue));
        Self { game, cues }
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn load_text(&mut self, text: &str) -> Result<u32, JsValue> {
        self.game
            .load_text(text)
            .map(|rounds| rounds as u32)
            .map_err(js_err)
    }

    pub fn export_text(&self) -> String {
        self.game.export_text()
    }

    pub fn switch_round(&mut self, index: u32) -> Result<(), JsValue> {
        self.game.switch_round(index as usize).map_err(js_err)
    }

    pub fn open_question(&mut self, category: u32, question: u32) -> Result<(), JsValue> {
        self.game
            .open_question(category as usize, question as usize)
            .map_err(js_err)
    }

    pub fn reveal(&mut self) -> Result<(), JsValue> {
        self.game.reveal().map_err(js_err)
    }

    pub fn pass(&mut self) -> Result<u32, JsValue> {
        self.game.pass().map(PlayerId::get).map_err(js_err)
    }

    pub fn score(&mut self, correct: bool) -> Result<JsValue, JsValue> {
        let result = self.game.score(correct).map_err(js_err)?;
        to_js_value(&JsScoreResult::from(result))
    }

    pub fn dismiss(&mut self) -> Result<(), JsValue> {
        self.game.dismiss().map(|_| ()).map_err(js_err)
    }

    pub fn add_player(&mut self) -> u32 {
        self.game.add_player().get()
    }

    pub fn remove_player(&mut self, id: u32) -> Result<(), JsValue> {
        let id = self.require_player(id)?;
        self.game.remove_player(id).map(|_| ()).map_err(js_err)
    }

    pub fn set_active_player(&mut self, index: u32) -> Result<(), JsValue> {
        self.game
            .set_active_player(index as usize)
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn rename_player(&mut self, id: u32, name: &str) -> Result<(), JsValue> {
        let id = self.require_player(id)?;
        self.game
            .set_player_field(id, PlayerField::Name(name))
            .map_err(js_err)
    }

    pub fn set_score(&mut self, id: u32, score: i32) -> Result<(), JsValue> {
        let id = self.require_player(id)?;
        self.game
            .set_player_field(id, PlayerField::Score(i64::from(score)))
            .map_err(js_err)
    }

    pub fn change_avatar(&mut self, id: u32) -> Result<String, JsValue> {
        let id = self.require_player(id)?;
        self.game
            .change_avatar(id)
            .map(avatar_url)
            .map_err(js_err)
    }

    pub fn set_category_title(&mut self, category: u32, title: &str) -> Result<(), JsValue> {
        self.game
            .set_category_title(category as usize, title)
            .map_err(js_err)
    }

    pub fn set_question_field(
        &mut self,
        category: u32,
        question: u32,
        field: &str,
        value: &str,
    ) -> Result<(), JsValue> {
        let field = match field {
            "points" | "p" => QuestionField::Points(value),
            "prompt" | "q" => QuestionField::Prompt(value),
            "answer" | "a" => QuestionField::Answer(value),
            other => return Err(JsValue::from_str(&format!("unknown field: {other}"))),
        };
        self.game
            .set_question_field(category as usize, question as usize, field)
            .map_err(js_err)
    }

    pub fn add_category(&mut self) -> u32 {
        self.game.add_category() as u32
    }

    pub fn delete_category(&mut self, category: u32) -> Result<(), JsValue> {
        self.game
            .delete_category(category as usize)
            .map(|_| ())
            .map_err(js_err)
    }

    /// Drains the cues raised since the last call, oldest first.
    pub fn take_cues(&self) -> Result<JsValue, JsValue> {
        let cues: Vec<&'static str> = self.cues.borrow_mut().drain(..).map(Cue::as_str).collect();
        to_js_value(&cues)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let game = &self.game;
        let turn = game.turn();
        let current_round = game.current_round_index();

        let rounds = game
            .round_labels()
            .zip(game.rounds())
            .enumerate()
            .map(|(index, (label, round))| JsRoundTab {
                label: label.to_string(),
                active: index == current_round,
                cleared: round.is_cleared(),
            })
            .collect();

        let board = game
            .current_round()
            .categories
            .iter()
            .map(JsCategory::from)
            .collect();

        let players = game
            .players()
            .iter()
            .enumerate()
            .map(|(index, player)| JsPlayer::from_player(player, index == turn.active))
            .collect();

        let open_question = game.current_question().map(|question| JsOpenQuestion {
            category: game.open_category_title().unwrap_or_default().to_string(),
            points: question.points,
            prompt: question.prompt.clone(),
            answer: (game.state() == GameState::Revealed).then(|| question.answer.clone()),
            answering_player: game.answering_player().map(|p| p.id().get()),
        });

        let snapshot = Snapshot {
            state: state_to_str(game.state()),
            rounds,
            current_round: current_round as u32,
            board,
            players,
            active_player: game.active_player().map(|p| p.id().get()),
            open_question,
        };

        to_js_value(&snapshot)
    }
}

impl WasmGame {
    fn require_player(&self, id: u32) -> Result<PlayerId, JsValue> {
        self.game
            .players()
            .iter()
            .map(Player::id)
            .find(|player_id| player_id.get() == id)
            .ok_or_else(|| JsValue::from_str("player not found"))
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    rounds: Vec<JsRoundTab>,
    current_round: u32,
    board: Vec<JsCategory>,
    players: Vec<JsPlayer>,
    active_player: Option<u32>,
    open_question: Option<JsOpenQuestion>,
}

#[derive(Serialize)]
struct JsRoundTab {
    label: String,
    active: bool,
    cleared: bool,
}

#[derive(Serialize)]
struct JsCategory {
    title: String,
    /// Board cells; `None` for an empty or played cell.
    cells: Vec<Option<u32>>,
    /// Full question list for the editor.
    questions: Vec<JsQuestion>,
}

impl From<&Category> for JsCategory {
    fn from(category: &Category) -> Self {
        Self {
            title: category.title.clone(),
            cells: category
                .cells()
                .map(|cell| cell.filter(|q| !q.answered).map(|q| q.points))
                .collect(),
            questions: category.questions.iter().map(JsQuestion::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsQuestion {
    points: u32,
    prompt: String,
    answer: String,
    answered: bool,
}

impl From<&Question> for JsQuestion {
    fn from(question: &Question) -> Self {
        Self {
            points: question.points,
            prompt: question.prompt.clone(),
            answer: question.answer.clone(),
            answered: question.answered,
        }
    }
}

#[derive(Serialize)]
struct JsPlayer {
    id: u32,
    name: String,
    score: i64,
    earned: i64,
    lost: i64,
    correct: u32,
    wrong: u32,
    avatar_url: String,
    active: bool,
}

impl JsPlayer {
    fn from_player(player: &Player, active: bool) -> Self {
        Self {
            id: player.id().get(),
            name: player.name().to_string(),
            score: player.score(),
            earned: player.earned(),
            lost: player.lost(),
            correct: player.correct_count(),
            wrong: player.wrong_count(),
            avatar_url: avatar_url(player.avatar_seed()),
            active,
        }
    }
}

#[derive(Serialize)]
struct JsOpenQuestion {
    category: String,
    points: u32,
    prompt: String,
    /// Hidden until the answer is revealed.
    answer: Option<String>,
    answering_player: Option<u32>,
}

#[derive(Serialize)]
struct JsScoreResult {
    player_id: u32,
    verdict: &'static str,
    points: u32,
    delta: i64,
    score: i64,
    turn_passed: bool,
}

impl From<ScoreResult> for JsScoreResult {
    fn from(result: ScoreResult) -> Self {
        Self {
            player_id: result.player_id.get(),
            verdict: verdict_to_str(result.verdict),
            points: result.points,
            delta: result.delta,
            score: result.score,
            turn_passed: result.turn_passed,
        }
    }
}

fn avatar_url(seed: &str) -> String {
    format!("{AVATAR_URL}?seed={seed}&backgroundColor=b6e3f4")
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Idle => "Idle",
        GameState::Deciding => "Deciding",
        GameState::Revealed => "Revealed",
    }
}

fn verdict_to_str(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "Correct",
        Verdict::Wrong => "Wrong",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
