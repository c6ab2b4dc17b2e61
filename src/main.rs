//! # Board Game Arena
//!
//! Terminal entry point for the game collection. Picks a game from the
//! command line (or an interactive prompt), then runs a read-render loop
//! against the session controller: human moves are typed and validated,
//! AI moves are selected after a short cosmetic "thinking" delay.
//!
//! ## Usage
//! `play tictactoe --difficulty hard`, `play checkers --seed 7`,
//! `play reversi`, `play connect4 --ai-only`, `play 2048`.

use std::io::{self, Write};
use std::time::Duration;

use arena::ai::{self, Difficulty};
use arena::game_controller::{GameController, MoveResult};
use arena::game_wrapper::{GameWrapper, MoveWrapper};
use arena::games::checkers::{CheckersMove, CheckersState};
use arena::games::connect4::Connect4State;
use arena::games::game2048::{Game2048, SlideDirection};
use arena::games::reversi::ReversiState;
use arena::games::tictactoe::TicTacToeState;
use arena::{GameResult, Player};
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Game to play: tictactoe, checkers, reversi, connect4 or 2048
    game: Option<String>,

    /// Tic-tac-toe AI strength: easy or hard
    #[clap(short, long, default_value = "hard")]
    difficulty: String,

    /// Two humans at one keyboard (tic-tac-toe)
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pvp: bool,

    /// Let the AI play both sides
    #[clap(long, action = clap::ArgAction::SetTrue)]
    ai_only: bool,

    /// Seed for the move-selection RNG; omit for a random session
    #[clap(long)]
    seed: Option<u64>,

    /// Suppress suggested-move hints
    #[clap(long, action = clap::ArgAction::SetTrue)]
    no_hints: bool,

    /// Cosmetic delay before an AI move fires, in milliseconds
    #[clap(long, default_value_t = 400)]
    ai_delay_ms: u64,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_os_rng(),
    };

    let game = match &args.game {
        Some(name) => name.clone(),
        None => read_line("Pick a game (tictactoe, checkers, reversi, connect4, 2048): ")?,
    };

    match game.to_ascii_lowercase().as_str() {
        "tictactoe" | "ttt" => play_tictactoe(&args, &mut rng).await,
        "checkers" => play_checkers(&args, &mut rng).await,
        "reversi" | "othello" => play_reversi(&args).await,
        "connect4" | "connect-four" => play_connect4(&args, &mut rng).await,
        "2048" => play_2048(&mut rng),
        other => {
            eprintln!("{} unknown game: {}", "error:".red().bold(), other);
            std::process::exit(2);
        }
    }
}

/// What a typed line asks the session to do.
enum Command {
    Quit,
    New,
    History,
    Move(String),
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "n" | "new" => Command::New,
        "h" | "history" => Command::History,
        _ => Command::Move(line.trim().to_string()),
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        // EOF behaves like quit.
        line.push_str("quit");
    }
    Ok(line.trim().to_string())
}

fn render(controller: &GameController) {
    let state = controller.render_state();
    println!();
    println!("{}", state);
    if !controller.is_game_over() {
        println!(
            "Turn: {}",
            state.player_name(controller.current_player()).bold()
        );
    }
}

fn announce(controller: &GameController) {
    match controller.result() {
        GameResult::Win(winner) => println!(
            "{}",
            format!("{} wins!", controller.render_state().player_name(winner))
                .green()
                .bold()
        ),
        GameResult::Draw => println!("{}", "It's a draw!".yellow().bold()),
        GameResult::InProgress => {}
    }
}

async fn ai_pause(label: &str, delay_ms: u64) {
    println!("{}", format!("{} thinking...", label).yellow());
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
}

/// Submits a move and reports whether it was applied. Rejected moves leave
/// the session untouched, matching the click-on-an-illegal-cell no-op.
fn submit(controller: &mut GameController, mv: MoveWrapper) -> bool {
    match controller.try_make_move(mv) {
        MoveResult::Applied { .. } => true,
        MoveResult::Rejected { reason } => {
            println!("{} {}", "Ignored:".red(), reason);
            false
        }
        MoveResult::GameOver => {
            println!("{}", "The game is over; start a new one.".red());
            false
        }
    }
}

async fn play_tictactoe(args: &Args, rng: &mut Xoshiro256PlusPlus) -> io::Result<()> {
    let difficulty = match args.difficulty.to_ascii_lowercase().as_str() {
        "easy" => Difficulty::Easy,
        _ => Difficulty::Hard,
    };
    let mut controller = GameController::new(GameWrapper::TicTacToe(TicTacToeState::new()));
    let mut score = (0u32, 0u32, 0u32); // X wins, O wins, draws
    println!("{}", "Tic-tac-toe".bold());
    println!("Cells are numbered 0-8, left to right, top to bottom.");

    loop {
        render(&controller);
        if controller.is_game_over() {
            announce(&controller);
            match controller.result() {
                GameResult::Win(Player::One) => score.0 += 1,
                GameResult::Win(Player::Two) => score.1 += 1,
                GameResult::Draw => score.2 += 1,
                GameResult::InProgress => {}
            }
            println!("Score: X {} / O {} / draws {}", score.0, score.1, score.2);
            if read_line("Play again? (y/n): ")? != "y" {
                return Ok(());
            }
            controller.reset(GameWrapper::TicTacToe(TicTacToeState::new()));
            continue;
        }

        let ai_turn = args.ai_only || (!args.pvp && controller.current_player() == Player::Two);
        if ai_turn {
            ai_pause("AI", args.ai_delay_ms).await;
            let mv = match controller.render_state() {
                GameWrapper::TicTacToe(state) => ai::select_tictactoe_move(state, difficulty, rng),
                _ => None,
            };
            if let Some(mv) = mv {
                submit(&mut controller, MoveWrapper::TicTacToe(mv));
            }
            continue;
        }

        match parse_command(&read_line("Cell (0-8), or quit/new/history: ")?) {
            Command::Quit => return Ok(()),
            Command::New => controller.reset(GameWrapper::TicTacToe(TicTacToeState::new())),
            Command::History => println!("{}", controller.format_history()),
            Command::Move(text) => match text.parse() {
                Ok(mv) => {
                    submit(&mut controller, MoveWrapper::TicTacToe(mv));
                }
                Err(_) => println!("{}", "Enter a cell index between 0 and 8.".red()),
            },
        }
    }
}

async fn play_checkers(args: &Args, rng: &mut Xoshiro256PlusPlus) -> io::Result<()> {
    let mut controller = GameController::new(GameWrapper::Checkers(CheckersState::new()));
    println!("{}", "Checkers".bold());
    println!("You are Red (top, moving down). Moves look like 2,1->3,2.");

    loop {
        render(&controller);
        if controller.is_game_over() {
            announce(&controller);
            if read_line("Play again? (y/n): ")? != "y" {
                return Ok(());
            }
            controller.reset(GameWrapper::Checkers(CheckersState::new()));
            continue;
        }

        let ai_turn = args.ai_only || controller.current_player() == Player::Two;
        if ai_turn {
            ai_pause("Black", args.ai_delay_ms).await;
            let mv = match controller.render_state() {
                GameWrapper::Checkers(state) => ai::select_checkers_move(state, rng),
                _ => None,
            };
            if let Some(mv) = mv {
                submit(&mut controller, MoveWrapper::Checkers(mv));
            }
            continue;
        }

        if !args.no_hints {
            if let GameWrapper::Checkers(state) = controller.render_state() {
                if let Some(hint) = ai::suggest_checkers_move(state) {
                    println!(
                        "Suggested: {},{} -> {},{}",
                        hint.from.0, hint.from.1, hint.to.0, hint.to.1
                    );
                }
            }
        }

        match parse_command(&read_line("Move (r,c->r,c), or quit/new/history: ")?) {
            Command::Quit => return Ok(()),
            Command::New => controller.reset(GameWrapper::Checkers(CheckersState::new())),
            Command::History => println!("{}", controller.format_history()),
            Command::Move(text) => match text.parse::<CheckersMove>() {
                Ok(requested) => {
                    // Resolve the typed endpoints against the legal set so
                    // the capture list is filled in.
                    let resolved = controller.legal_moves().into_iter().find(|mv| {
                        matches!(mv, MoveWrapper::Checkers(m)
                            if m.from == requested.from && m.to == requested.to)
                    });
                    match resolved {
                        Some(mv) => {
                            submit(&mut controller, mv);
                        }
                        None => println!("{}", "Ignored: move is not legal in this position (captures are mandatory).".red()),
                    }
                }
                Err(err) => println!("{} {}", "Ignored:".red(), err),
            },
        }
    }
}

async fn play_reversi(args: &Args) -> io::Result<()> {
    let mut controller = GameController::new(GameWrapper::Reversi(ReversiState::new()));
    println!("{}", "Reversi".bold());
    println!("Both colors play at this keyboard; moves look like 2,3.");

    loop {
        render(&controller);
        if controller.is_game_over() {
            if let GameWrapper::Reversi(state) = controller.render_state() {
                let (black, white) = state.disc_counts();
                println!("Final count: Black {} / White {}", black, white);
            }
            announce(&controller);
            if read_line("Play again? (y/n): ")? != "y" {
                return Ok(());
            }
            controller.reset(GameWrapper::Reversi(ReversiState::new()));
            continue;
        }

        if args.ai_only {
            let name = controller
                .render_state()
                .player_name(controller.current_player());
            ai_pause(name, args.ai_delay_ms).await;
            let mv = match controller.render_state() {
                GameWrapper::Reversi(state) => ai::select_reversi_move(state),
                _ => None,
            };
            if let Some(mv) = mv {
                submit(&mut controller, MoveWrapper::Reversi(mv));
            }
            continue;
        }

        if !args.no_hints {
            if let GameWrapper::Reversi(state) = controller.render_state() {
                if let Some(hint) = ai::select_reversi_move(state) {
                    println!("Suggested: {},{}", hint.0, hint.1);
                }
            }
        }

        match parse_command(&read_line("Place (r,c), or quit/new/history: ")?) {
            Command::Quit => return Ok(()),
            Command::New => controller.reset(GameWrapper::Reversi(ReversiState::new())),
            Command::History => println!("{}", controller.format_history()),
            Command::Move(text) => match text.parse() {
                Ok(mv) => {
                    submit(&mut controller, MoveWrapper::Reversi(mv));
                }
                Err(err) => println!("{} {}", "Ignored:".red(), err),
            },
        }
    }
}

async fn play_connect4(args: &Args, rng: &mut Xoshiro256PlusPlus) -> io::Result<()> {
    let mut controller = GameController::new(GameWrapper::Connect4(Connect4State::new()));
    println!("{}", "Connect Four".bold());
    println!("Both colors play at this keyboard; pick a column 0-6.");

    loop {
        render(&controller);
        if controller.is_game_over() {
            announce(&controller);
            if read_line("Play again? (y/n): ")? != "y" {
                return Ok(());
            }
            controller.reset(GameWrapper::Connect4(Connect4State::new()));
            continue;
        }

        if args.ai_only {
            let name = controller
                .render_state()
                .player_name(controller.current_player());
            ai_pause(name, args.ai_delay_ms).await;
            let mv = ai::random_move(controller.render_state(), rng);
            if let Some(mv) = mv {
                submit(&mut controller, mv);
            }
            continue;
        }

        match parse_command(&read_line("Column (0-6), or quit/new/history: ")?) {
            Command::Quit => return Ok(()),
            Command::New => controller.reset(GameWrapper::Connect4(Connect4State::new())),
            Command::History => println!("{}", controller.format_history()),
            Command::Move(text) => match text.parse() {
                Ok(mv) => {
                    submit(&mut controller, MoveWrapper::Connect4(mv));
                }
                Err(_) => println!("{}", "Enter a column between 0 and 6.".red()),
            },
        }
    }
}

fn play_2048(rng: &mut Xoshiro256PlusPlus) -> io::Result<()> {
    let mut game = Game2048::new(rng);
    println!("{}", "2048".bold());
    println!("Slide with w/a/s/d (or up/down/left/right).");

    loop {
        println!();
        println!("{}", game);
        println!("Score: {}", game.score().to_string().bold());

        if game.is_over() {
            println!("{}", "Game over".red().bold());
            if read_line("Play again? (y/n): ")? != "y" {
                return Ok(());
            }
            game = Game2048::new(rng);
            continue;
        }

        match parse_command(&read_line("Direction, or quit/new: ")?) {
            Command::Quit => return Ok(()),
            Command::New => game = Game2048::new(rng),
            Command::History => {}
            Command::Move(text) => match text.parse::<SlideDirection>() {
                Ok(direction) => match game.step(direction, rng) {
                    Some(next) => game = next,
                    None => println!("Nothing moved."),
                },
                Err(err) => println!("{} {}", "Ignored:".red(), err),
            },
        }
    }
}
