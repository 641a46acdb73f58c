use std::{
    io::{self, Read, Write},
    os::fd::AsRawFd,
};

use clap::Parser;
use core_2048::{Direction, GameController};
use log::{debug, info};
use rand::{seq::IteratorRandom, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod args;
mod input;
mod render;

use args::Args;
use input::{Command, KeyDecoder};

fn play_interactive(
    out: &mut (impl AsRawFd + Write),
    input: &mut impl Read,
    rng: impl Rng,
) -> io::Result<()> {
    let mut controller: GameController<_> = GameController::new(rng);
    let mut decoder = KeyDecoder::new()?;

    let _guard = render::setup_terminal(out)?;
    render::draw_board(out, &controller.grid())?;

    loop {
        for command in decoder.read_commands(input)? {
            let old_grid = controller.grid();

            match command {
                Command::Move(direction) if !controller.is_over() => {
                    let state = controller.apply_direction(direction);

                    render::redraw_board(out, &old_grid, &state.grid())?;

                    if state.is_over() {
                        out.write_all(b"Game over, r to play again, q to quit\n")?;
                    }
                }
                Command::Move(_) => {}
                Command::Reset if controller.is_over() => {
                    let state = controller.reset();

                    render::draw_board(out, &state.grid())?;
                }
                Command::Reset => {
                    let state = controller.reset();

                    render::redraw_board(out, &old_grid, &state.grid())?;
                }
                Command::Quit => return out.write_all(b"\n"),
            }
        }
    }
}

fn play_autoplay(out: &mut impl Write, rng: ChaCha8Rng, max_moves: u32) -> io::Result<()> {
    // Directions come from a separate stream so spawns stay reproducible.
    let mut picker = rng.clone();
    picker.set_stream(1);

    let mut controller: GameController<_> = GameController::new(rng);

    let mut accepted = 0;

    for _ in 0..max_moves {
        if controller.is_over() {
            break;
        }

        let old_grid = controller.grid();
        let Some(direction) = Direction::iter().choose(&mut picker) else {
            break;
        };

        if controller.apply_direction(direction).grid() != old_grid {
            accepted += 1;
        }
    }

    let state = controller.state();
    info!(
        "autoplay finished after {accepted} moves, highest tile {}",
        state.grid().max_tile()
    );

    write!(out, "{}", state.grid())?;

    if state.is_over() {
        writeln!(out, "Game over after {accepted} moves")
    } else {
        writeln!(out, "Stopped after {accepted} moves")
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| ChaCha8Rng::from_entropy().next_u64());
    debug!("seed {seed}");

    let rng = ChaCha8Rng::seed_from_u64(seed);

    let mut stdout = io::stdout().lock();

    if args.autoplay {
        play_autoplay(&mut stdout, rng, args.max_moves)
    } else {
        let mut stdin = io::stdin().lock();

        play_interactive(&mut stdout, &mut stdin, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn autoplay_output(seed: u64, max_moves: u32) -> String {
        let mut out = Vec::new();

        play_autoplay(&mut out, ChaCha8Rng::seed_from_u64(seed), max_moves).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn autoplay_is_reproducible() {
        assert_eq!(autoplay_output(5, 300), autoplay_output(5, 300));
    }

    #[test]
    fn autoplay_runs_to_game_over() {
        let output = autoplay_output(21, 1_000_000);

        assert!(output.contains("Game over after"), "{output}");
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn autoplay_respects_move_limit() {
        let output = autoplay_output(21, 0);

        assert!(output.ends_with("Stopped after 0 moves\n"), "{output}");
    }
}
