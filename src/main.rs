use anyhow::{Context, Result, bail};
use clap::Parser;
use regicide_core::{Game, Rules};
use tracing::info;

/// Play coordinate-notation moves and print the resulting position.
#[derive(Debug, Parser)]
#[command(name = "regicide", version)]
struct Options {
    /// Start from this FEN instead of the opening position.
    #[arg(long, value_name = "FEN")]
    fen: Option<String>,

    /// Allow the kings to stand on touching squares when otherwise legal.
    #[arg(long)]
    standard: bool,

    /// Moves to play in order, e.g. `e2e4 e7e5 g1f3`.
    #[arg(value_name = "MOVE")]
    moves: Vec<String>,
}

impl Options {
    fn rules(&self) -> Rules {
        if self.standard { Rules::STANDARD } else { Rules::HOUSE }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let options = Options::parse();

    let game = match &options.fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("bad FEN: {fen}"))?,
        None => Game::new(),
    };
    let mut game = game.with_rules(options.rules());
    info!(fen = %game.to_fen(), rules = ?game.rules(), "regicide starting");

    for notation in &options.moves {
        let status = game.status();
        if status.is_terminal() {
            bail!("game is over ({status}); cannot play {notation}");
        }
        let mv = game.parse_move(notation)?;
        game.make_move(mv)?;
        info!(mv = %mv, "played");
    }

    println!("{}", game.board().pretty());
    println!();
    println!("{} to move: {}", game.turn(), game.status());
    Ok(())
}
