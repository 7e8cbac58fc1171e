//! Tournament runner.
//!
//! Plays every strategy pairing over N rounds and prints a markdown
//! results table, optionally spreading rounds across worker threads.

use clap::Parser;
use colored::Colorize;

use hearthsim::cards::deck_legal_cards;
use hearthsim::driver::{run_rounds, run_rounds_parallel, SearchBudget, TournamentConfig};

#[derive(Parser, Debug)]
#[command(name = "tournament", about = "Play AI-vs-AI card game tournaments")]
struct Args {
    /// Rounds to play; each round runs the full 4x4 pairing grid.
    #[arg(long, default_value_t = 10)]
    rounds: u32,

    /// Spread rounds across worker threads.
    #[arg(long)]
    parallel: bool,

    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Iterations for CheatingMCTS and SO-IS-MCTS.
    #[arg(long, default_value_t = 1000)]
    iterations: u32,

    /// Determinization count for DetMCTS.
    #[arg(long, default_value_t = 10)]
    determinizations: u32,

    /// Iterations per determinization for DetMCTS.
    #[arg(long, default_value_t = 100)]
    det_iterations: u32,

    /// Print the deck-legal card list and exit.
    #[arg(long)]
    list_cards: bool,
}

fn main() {
    let args = Args::parse();

    if args.list_cards {
        list_cards();
        return;
    }

    let config = TournamentConfig {
        rounds: args.rounds,
        seed: args.seed.unwrap_or_else(rand::random),
        budget: SearchBudget {
            iterations: args.iterations,
            determinizations: args.determinizations,
            determinized_iterations: args.det_iterations,
        },
    };

    println!(
        "{} {} rounds, seed {}",
        "tournament:".bold(),
        config.rounds,
        config.seed
    );

    let results = if args.parallel {
        run_rounds_parallel(config)
    } else {
        run_rounds(config)
    };

    println!();
    println!("| Matchup | Player One Wins | Player Two Wins | Draws |");
    println!("| ------- | --------------- | --------------- | ----- |");
    for (one, two, cell) in results.played_pairings() {
        println!(
            "| {} vs {} | {} | {} | {} |",
            one.name(),
            two.name(),
            cell.player_one_wins,
            cell.player_two_wins,
            cell.draws
        );
    }
    println!();
    println!("{} {}", "games played:".bold(), results.total_games());
}

fn list_cards() {
    println!("{}", "deck-legal cards:".bold());
    for card in deck_legal_cards() {
        let data = card.data();
        println!(
            "  {:2} mana  {}/{}  {}",
            data.cost, data.attack, data.health, data.name
        );
    }
}
