//! Terminal rendering for played and simulated games.

use std::fmt::Write as _;
use std::time::Duration;

use scoreboard::{format_points, ScoreSheet, Standing};

use crate::simulator::GameResult;

/// Leaderboard followed by the per-round sheet.
pub fn render_game(standings: &[Standing], sheet: &ScoreSheet) -> String {
    let mut out = String::new();
    let status = match sheet.header.current_round {
        Some(n) => format!("Round {n} of {}", sheet.header.round_limit),
        None => "Final".to_string(),
    };
    let _ = writeln!(
        out,
        "=== Standings ({status}{}) ===",
        if sheet.header.blind { ", blind" } else { "" }
    );
    for row in standings {
        let _ = writeln!(
            out,
            "{:>2}. {:<16} {:>8}",
            row.rank,
            row.player.name,
            format_points(row.total_score)
        );
    }

    if sheet.rows.is_empty() {
        return out;
    }

    let _ = writeln!(out, "\n=== Rounds ===");
    let _ = write!(out, "{:<6}", "Round");
    for player in &sheet.players {
        let _ = write!(out, " {:>16}", player.name);
    }
    let _ = writeln!(out);
    for row in &sheet.rows {
        let _ = write!(out, "{:<6}", row.round_no);
        for line in &row.lines {
            let cell = format!("{}/{} {}", line.call, line.made, format_points(line.score));
            let _ = write!(out, " {cell:>16}");
        }
        let _ = writeln!(out);
    }
    let _ = write!(out, "{:<6}", "Total");
    for total in &sheet.totals {
        let _ = write!(out, " {:>16}", format_points(*total));
    }
    let _ = writeln!(out);
    out
}

pub fn print_summary(results: &[GameResult], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);

    let Some(first) = results.first() else {
        return;
    };
    let seats = first.final_scores.len();

    let mut wins = vec![0u32; seats];
    let mut total_scores = vec![0i64; seats];
    let mut max_scores = vec![i32::MIN; seats];
    let mut min_scores = vec![i32::MAX; seats];

    for result in results {
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += i64::from(score);
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
        }
        // Shared first place counts as a win for each tied seat
        for &seat in &result.winners {
            wins[seat] += 1;
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..seats {
        let avg_score = total_scores[seat] as f64 / results.len() as f64 / 10.0;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {}: avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat,
            avg_score,
            format_points(min_scores[seat]),
            format_points(max_scores[seat]),
            wins[seat],
            win_rate
        );
    }
}
