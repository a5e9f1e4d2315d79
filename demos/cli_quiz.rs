//! CLI quiz board example.
//!
//! Run with an optional question file:
//! `RUST_LOG=debug cargo run --example cli_quiz -- questions.txt`

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};
use std::{env, fs};

use quizboard::{Cue, Game, GameOptions, GameState, PlayerField, Verdict};

const SAMPLE: &str = "1

Тема 1. Наука
100. Сколько планет в Солнечной системе?
Ответ: Восемь
200. Какой газ преобладает в атмосфере Земли?
Ответ: Азот

Тема 2. История
100. В каком году пала Римская империя?
Ответ: 476

2

Тема 1. Финал
500. Столица Австралии?
Ответ: Канберра
";

fn main() {
    pretty_env_logger::init();
    println!("Quiz board CLI example (type 'q' to quit, 'help' for commands)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    game.set_cue_sink(|cue: Cue| println!("{}", colorize(&format!("~ {}", cue.as_str()), "90")));

    let text = env::args()
        .nth(1)
        .and_then(|path| match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) => {
                println!("Cannot read {path}: {err}. Using the built-in board.");
                None
            }
        })
        .unwrap_or_else(|| SAMPLE.to_string());

    match game.load_text(&text) {
        Ok(rounds) => println!("Loaded {rounds} round(s)."),
        Err(err) => println!("Load error: {err}. Using the placeholder board."),
    }

    loop {
        print_board(&game);
        print_players(&game);

        let Some(input) = prompt_line(&format!("[{:?}] > ", game.state())) else {
            println!("Goodbye.");
            break;
        };
        let words: Vec<&str> = input.split_whitespace().collect();

        let result: Result<(), String> = match words.as_slice() {
            [] => continue,
            ["q" | "quit"] => {
                println!("Goodbye.");
                break;
            }
            ["help"] => {
                print_help();
                Ok(())
            }
            ["o" | "open", category, question] => parse_pair(category, question)
                .and_then(|(c, q)| game.open_question(c, q).map_err(|e| e.to_string()))
                .map(|()| print_open_question(&game)),
            ["r" | "reveal"] => game
                .reveal()
                .map(|()| print_open_question(&game))
                .map_err(|e| e.to_string()),
            ["p" | "pass"] => game
                .pass()
                .map(|_| print_open_question(&game))
                .map_err(|e| e.to_string()),
            ["y" | "yes"] | ["n" | "no"] => {
                let correct = matches!(words[0], "y" | "yes");
                game.score(correct)
                    .map(|result| {
                        let verdict = match result.verdict {
                            Verdict::Correct => colorize("correct", "32"),
                            Verdict::Wrong => colorize("wrong", "31"),
                        };
                        println!(
                            "Player {} was {verdict}: {:+} (score {})",
                            result.player_id, result.delta, result.score
                        );
                    })
                    .map_err(|e| e.to_string())
            }
            ["x" | "dismiss"] => game.dismiss().map(|_| ()).map_err(|e| e.to_string()),
            ["round", index] => index
                .parse::<usize>()
                .map_err(|e| e.to_string())
                .and_then(|i| game.switch_round(i).map_err(|e| e.to_string())),
            ["add"] => {
                let id = game.add_player();
                println!("Added player {id}.");
                Ok(())
            }
            ["turn", index] => index
                .parse::<usize>()
                .map_err(|e| e.to_string())
                .and_then(|i| game.set_active_player(i).map(|_| ()).map_err(|e| e.to_string())),
            ["set", index, score] => {
                let player = index.parse::<usize>().ok().and_then(|i| game.players().get(i));
                match (player.map(|p| p.id()), score.parse::<i64>()) {
                    (Some(id), Ok(score)) => game
                        .set_player_field(id, PlayerField::Score(score))
                        .map_err(|e| e.to_string()),
                    _ => Err("usage: set <player index> <score>".to_string()),
                }
            }
            ["reset"] => {
                game.reset();
                Ok(())
            }
            ["export"] => {
                println!("{}", game.export_text());
                Ok(())
            }
            _ => Err("unknown command, type 'help'".to_string()),
        };

        if let Err(err) = result {
            println!("Error: {err}");
        }
    }
}

fn print_help() {
    println!("  open <c> <q>   open question q of category c");
    println!("  reveal         show the answer");
    println!("  pass           pass the question to the next player");
    println!("  yes / no       judge the revealed answer");
    println!("  dismiss        close the question without scoring");
    println!("  round <n>      switch to round n");
    println!("  add            add a player");
    println!("  turn <i>       give the turn to player i");
    println!("  set <i> <n>    set the score of player i");
    println!("  reset          restart the session");
    println!("  export         print the board as text");
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    read_command(&mut io::stdin().lock())
}

/// Reads one command line; `None` at end of input.
fn read_command(reader: &mut impl BufRead) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn parse_pair(category: &str, question: &str) -> Result<(usize, usize), String> {
    match (category.parse(), question.parse()) {
        (Ok(c), Ok(q)) => Ok((c, q)),
        _ => Err("usage: open <category> <question>".to_string()),
    }
}

fn print_board(game: &Game) {
    let tabs: Vec<String> = game
        .round_labels()
        .enumerate()
        .map(|(index, label)| {
            if index == game.current_round_index() {
                colorize(&format!("[{label}]"), "33")
            } else {
                format!(" {label} ")
            }
        })
        .collect();
    println!("\n{}", tabs.join(" "));

    for (index, category) in game.current_round().categories.iter().enumerate() {
        let cells: Vec<String> = category
            .cells()
            .map(|cell| match cell {
                Some(q) if !q.answered => format!("{:>5}", q.points),
                _ => "    .".to_string(),
            })
            .collect();
        println!("{index:>2} {:<20} {}", category.title, cells.join(" "));
    }

    if game.current_round().is_cleared() {
        println!("{}", colorize("Round cleared.", "32"));
    }
}

fn print_players(game: &Game) {
    let turn = game.turn();
    for (index, player) in game.players().iter().enumerate() {
        let marker = if index == turn.active { "*" } else { " " };
        println!(
            "{marker} {index}: {} | score {} | +{} / {} | {} right, {} wrong",
            player.name(),
            player.score(),
            player.earned(),
            player.lost(),
            player.correct_count(),
            player.wrong_count()
        );
    }
}

fn print_open_question(game: &Game) {
    let Some(question) = game.current_question() else {
        return;
    };

    println!(
        "\n{} for {}: {}",
        game.open_category_title().unwrap_or_default(),
        question.points,
        question.prompt
    );
    if let Some(player) = game.answering_player() {
        println!("Answering: {}", colorize(player.name(), "36"));
    }
    if game.state() == GameState::Revealed {
        println!("Answer: {}", colorize(&question.answer, "32"));
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
