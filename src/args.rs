use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "slide-2048", about = "Sliding-tile puzzle in the terminal")]
pub struct Args {
    /// Seed for tile spawning; a random seed is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Play random moves without a terminal UI and print the final grid.
    #[arg(long)]
    pub autoplay: bool,
    /// Upper bound on moves attempted by --autoplay.
    #[arg(long, default_value_t = 10_000, requires = "autoplay")]
    pub max_moves: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["slide-2048"]).unwrap();

        assert_eq!(args.seed, None);
        assert!(!args.autoplay);
        assert_eq!(args.max_moves, 10_000);
    }

    #[test]
    fn max_moves_needs_autoplay() {
        assert!(Args::try_parse_from(["slide-2048", "--max-moves", "5"]).is_err());

        let args =
            Args::try_parse_from(["slide-2048", "--autoplay", "--seed", "9", "--max-moves", "5"])
                .unwrap();
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.max_moves, 5);
    }
}
