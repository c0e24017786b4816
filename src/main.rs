//! Terminal front end for the timeline game.
//!
//! Loads the catalog, then reads one command per line from stdin: an
//! insertion index places the current question, `flip`/`link` act on table
//! cards, `quit` leaves. When a game ends the player is offered a replay.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_timeline::render::input::is_yes;
use rust_timeline::{
    Catalog, Command, GameConfig, InputError, Renderer, RulesEngine, TerminalRenderer, TimelineGame,
};

#[derive(Parser)]
#[command(version, about = "Place historical events on a timeline")]
struct Cli {
    /// Event catalog (JSON)
    #[arg(short, long, default_value = "data/dates.json")]
    catalog: PathBuf,

    /// RNG seed, for reproducible games
    #[arg(short, long)]
    seed: Option<u64>,

    /// Strikes before the game ends
    #[arg(short, long)]
    max_strikes: Option<u32>,

    /// Directory event images are resolved under
    #[arg(short, long)]
    image_dir: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::from_env().context("reading configuration from environment")?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(max_strikes) = cli.max_strikes {
        config = config.with_max_strikes(max_strikes);
    }
    if let Some(dir) = cli.image_dir {
        config = config.with_image_dir(dir);
    }
    info!(?config, catalog = %cli.catalog.display(), "rust-timeline starting");

    let catalog = Catalog::load(&cli.catalog)
        .with_context(|| format!("could not load events from {}", cli.catalog.display()))?;
    let game = TimelineGame::new(catalog, config)?;

    let mut renderer = TerminalRenderer::new(io::stdout().lock());
    play(&game, &mut renderer, io::stdin().lock())
}

fn play<R, W>(game: &TimelineGame, renderer: &mut TerminalRenderer<W>, input: R) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let mut state = game.start();
    renderer.render(&game.snapshot(&state))?;

    loop {
        if game.is_terminal(&state).is_some() {
            let Some(answer) = lines.next().transpose()? else {
                break;
            };
            if !is_yes(&answer) {
                break;
            }
            state = game.replay(state);
            renderer.reset();
            renderer.render(&game.snapshot(&state))?;
            continue;
        }

        renderer.message("Your move (help for commands):")?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => renderer.help()?,
            Ok(Command::Place(position)) => match game.insert_at(&mut state, position) {
                Ok(outcome) => {
                    renderer.render_outcome(&outcome, game.max_strikes())?;
                    renderer.render(&game.snapshot(&state))?;
                }
                Err(err) => renderer.message(&err.to_string())?,
            },
            Ok(Command::Flip(index)) => {
                let snapshot = game.snapshot(&state);
                match snapshot.table.get(index) {
                    Some(card) => {
                        renderer.toggle_flip(card.event);
                        renderer.render_table(&snapshot.table, true)?;
                    }
                    None => renderer.message(&format!("no card at {index}"))?,
                }
            }
            Ok(Command::Link(index)) => {
                let snapshot = game.snapshot(&state);
                match snapshot.table.get(index) {
                    Some(card) => renderer.render_link(card)?,
                    None => renderer.message(&format!("no card at {index}"))?,
                }
            }
            Err(InputError::Empty) => {}
            Err(err) => renderer.message(&err.to_string())?,
        }
    }

    renderer.message("Bye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_timeline::{Event, EventDate, GameState};

    fn game(events: &[(i32, &str)], config: GameConfig) -> TimelineGame {
        let events = events
            .iter()
            .map(|&(year, label)| {
                Event::new(EventDate::from_year(year), label).with_info("", format!("back of {label}"))
            })
            .collect();
        TimelineGame::new(Catalog::from_events(events).unwrap(), config).unwrap()
    }

    /// Run a session on scripted input and return everything printed.
    fn session(game: &TimelineGame, script: &str) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new());
        play(game, &mut renderer, script.as_bytes()).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    /// Slot that breaks the order of a one-card table.
    fn wrong_slot(game: &TimelineGame, state: &GameState) -> usize {
        let question = game.catalog().get(state.pending().unwrap()).unwrap().date_key();
        if question > state.table().get(0).unwrap().date {
            0
        } else {
            1
        }
    }

    #[test]
    fn test_bad_positions_then_replay_twice() {
        let game = game(&[(1900, "A"), (1950, "B")], GameConfig::new().with_seed(4));
        let opening = game.new_game(4).table().get(0).unwrap().event;
        let label = &game.catalog().get(opening).unwrap().label;

        let out = session(&game, "-1\n9\nlink 0\n0\ny\n1\nn\n");

        assert!(out.contains("position -1 is out of range"));
        assert!(out.contains("position 9 is out of range for a table of 1 cards"));
        assert!(out.contains(&format!("{label}: https://www.google.com/search?q={label}%20wikipedia")));
        assert_eq!(out.matches("You've placed all events!").count(), 2);
        assert_eq!(out.matches("Replay? [y/N]").count(), 2);
        assert!(out.trim_end().ends_with("Bye!"));
    }

    #[test]
    fn test_strike_out_offers_replay() {
        let config = GameConfig::new().with_seed(5).with_max_strikes(1);
        let game = game(&[(1900, "A"), (1950, "B"), (1920, "C")], config);
        let wrong = wrong_slot(&game, &game.new_game(5));

        let out = session(&game, &format!("{wrong}\nnope\n"));

        assert!(out.contains("Wrong! Strike 1 of 1."));
        assert!(out.contains("Game Over! Final Score: 0"));
        assert!(out.contains("Replay? [y/N]"));
        // Declining ends the session without another move prompt
        let after = out.rsplit("Replay?").next().unwrap();
        assert!(!after.contains("Your move"));
        assert!(after.trim_end().ends_with("Bye!"));
    }

    #[test]
    fn test_flip_and_unknown_cards() {
        let game = game(&[(1900, "A"), (1950, "B"), (1920, "C")], GameConfig::new().with_seed(6));
        let opening = game.new_game(6).table().get(0).unwrap().event;
        let back = &game.catalog().get(opening).unwrap().info2;

        let out = session(&game, "flip 0\nflip 3\nlink 2\nquit\n");

        assert!(out.contains(back.as_str()));
        assert!(out.contains("no card at 3"));
        assert!(out.contains("no card at 2"));
        assert!(!out.contains("Replay?"));
        assert!(out.trim_end().ends_with("Bye!"));
    }

    #[test]
    fn test_help_and_unknown_commands() {
        let game = game(&[(1900, "A"), (1950, "B")], GameConfig::new().with_seed(1));

        let out = session(&game, "help\n\ndance\n");

        assert!(out.contains("Commands:"));
        assert!(out.contains("unknown command: \"dance\""));
        // Input ran out before a placement
        assert!(!out.contains("Replay?"));
        assert!(out.trim_end().ends_with("Bye!"));
    }
}
