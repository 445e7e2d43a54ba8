//! Display functions for command results and the text duel

use super::formatters::{attempts_label, empty_row, entropy_bar, tile, verdict_row, verdicts_to_emoji};
use super::keyboard::{KeyboardState, ROWS};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Word;
use crate::game::{GameSession, MAX_ATTEMPTS, Outcome, SubGame, Winner};
use crate::solver::GuessSource;
use colored::Colorize;

fn banner(title: &str, subject: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        title.bright_cyan().bold(),
        subject.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

const fn source_label(source: GuessSource) -> &'static str {
    match source {
        GuessSource::Opener => "opener",
        GuessSource::Random => "random pick",
        GuessSource::Search => "search",
        GuessSource::Fallback => "fallback",
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    banner(
        &format!("SOLVING ({}):", result.difficulty),
        result.target.text(),
    );

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            verdict_row(&step.word, &step.verdicts),
            verdicts_to_emoji(&step.verdicts)
        );

        if verbose {
            println!(
                "  Candidates:  {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Chosen by:   {}", source_label(step.source));
            if let Some(entropy) = step.entropy {
                println!("  Entropy:     {entropy:.3} bits");
            }
            if step.stats.nodes > 0 {
                println!(
                    "  Search:      {} nodes, {} leaves, {} cutoffs",
                    step.stats.nodes, step.stats.leaves, step.stats.cutoffs
                );
            }
            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Info gained: {:.3} bits ({ratio:.1}x reduction)", ratio.log2());
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {}!", attempts_label(result.guesses.len()))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {}", attempts_label(result.guesses.len()))
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    banner("ANALYSIS:", result.word.text());

    let max_bits = (result.total_candidates as f64).log2();
    let bar = entropy_bar(result.metrics.entropy, max_bits, 30);

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!(
        "   Entropy:        [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!("   Info gain:      {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:       {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:     {} candidates remain",
        result.metrics.max_partition
    );

    println!("\n🧮 {}", "Score:".bright_cyan().bold());
    println!("   Information:    {:.3}", result.score.information_gain);
    println!("   Membership:     {:.3}", result.score.membership);
    println!("   Diversity:      {:.3}", result.score.diversity);
    println!(
        "   Total:          {}",
        format!("{:.4}", result.score.total).bright_yellow().bold()
    );
    println!("   Letter freq:    {}", result.frequency_score);

    println!("\n🔍 {}", "Search values:".bright_cyan().bold());
    for entry in &result.search_values {
        println!(
            "   {:<8} {:.4}  ({} nodes, {} cutoffs)",
            entry.difficulty.name(),
            entry.value,
            entry.stats.nodes,
            entry.stats.cutoffs
        );
    }
}

/// Print benchmark results, one block per difficulty
pub fn print_benchmark_results(results: &[BenchmarkResult]) {
    banner("BENCHMARK RESULTS", "");

    for result in results {
        println!(
            "\n📊 {}",
            result.difficulty.name().bright_cyan().bold()
        );
        println!("   Words tested:     {}", result.total_words);
        println!(
            "   Solved:           {} ({:.1}%)",
            result.solved.to_string().green(),
            result.success_rate() * 100.0
        );
        if result.failed > 0 {
            println!("   Failed:           {}", result.failed.to_string().red());
        }
        println!(
            "   Average guesses:  {}",
            format!("{:.2}", result.average_guesses).bright_yellow().bold()
        );
        println!(
            "   Best / worst:     {} / {}",
            result.min_guesses.to_string().green(),
            result.max_guesses.to_string().yellow()
        );
        if result.searches > 0 {
            println!(
                "   Search nodes:     {} over {} searches ({} cutoffs)",
                result.nodes, result.searches, result.cutoffs
            );
        }
        println!(
            "   Time taken:       {:.2}s ({:.1} words/s)",
            result.duration.as_secs_f64(),
            result.words_per_second()
        );

        println!("   {}", "Distribution:".bright_cyan());
        for guess_count in 1..=MAX_ATTEMPTS {
            let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
            if count == 0 || result.total_words == 0 {
                continue;
            }
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }

        if !result.hardest.is_empty() {
            let hardest: Vec<String> = result
                .hardest
                .iter()
                .map(|(word, guesses)| match guesses {
                    Some(n) => format!("{word} ({n})"),
                    None => format!("{word} (✗)"),
                })
                .collect();
            println!("   Hardest:          {}", hardest.join(", "));
        }
    }
}

fn board_row(game: &SubGame, row: usize) -> String {
    game.guesses()
        .get(row)
        .map_or_else(empty_row, |(word, verdicts)| verdict_row(word, verdicts))
}

/// Print both grids side by side
pub fn print_board(session: &GameSession) {
    let human = session.human();
    let opponent = session.opponent().sub_game();

    println!(
        "\n  {:<17}    {:<17}",
        "YOU".bright_cyan().bold(),
        format!("OPPONENT ({})", session.difficulty()).bright_magenta().bold()
    );
    for row in 0..MAX_ATTEMPTS {
        println!("  {}    {}", board_row(human, row), board_row(opponent, row));
    }
    println!(
        "  {:<17}    {} candidates left",
        format!("{}/{MAX_ATTEMPTS}", human.attempts()),
        session.opponent().pool().len()
    );
}

/// Print the keyboard coloured by the human's feedback
pub fn print_keyboard(keyboard: &KeyboardState) {
    println!();
    for (indent, row) in ROWS.iter().enumerate() {
        let keys: String = row
            .chars()
            .map(|letter| tile(letter, keyboard.get(letter as u8)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
}

/// Print the end-of-game banner
pub fn print_outcome(outcome: &Outcome) {
    let summary = outcome.summary();
    let line = match outcome.winner {
        Winner::Human => summary.green().bold(),
        Winner::Opponent => summary.red().bold(),
        Winner::Draw => summary.yellow().bold(),
    };

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {line}");
    println!(
        " Your word was {}, the opponent's was {}.",
        outcome.human_target.text().bright_yellow().bold(),
        outcome.opponent_target.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

/// Print the vocabulary in columns
pub fn print_word_bank(words: &[Word]) {
    println!("\n📖 {} ({} words)", "Word bank".bright_cyan().bold(), words.len());
    for chunk in words.chunks(10) {
        let line: Vec<&str> = chunk.iter().map(Word::text).collect();
        println!("   {}", line.join(" "));
    }
}
