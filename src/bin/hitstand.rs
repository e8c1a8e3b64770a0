//! Console blackjack: one hand against the dealer.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use hitstand::{GameOptions, GameState, HandSummary, Phase, PlayerAction};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hitstand=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    info!(seed, "starting hand");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match play_hand(seed, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(summary) => {
            info!(outcome = ?summary.outcome, "hand finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "hand aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Plays one hand, reading the player's choices from `input` and writing the
/// table to `output`.
fn play_hand(
    seed: u64,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<HandSummary, Box<dyn core::error::Error>> {
    let mut game = GameState::new(GameOptions::default(), seed)
        .shuffle()
        .deal()?;

    while game.phase() == Phase::PlayerTurn {
        writeln!(output, "Player: {}", game.player())?;
        writeln!(output, "Dealer: {}", game.dealer().dealer_view())?;

        let Some(line) = prompt_line(input, output, "What will you do?\n[hit/stand]")? else {
            // stdin closed; nothing more can be asked of the player.
            game = game.stand()?;
            break;
        };

        match line.parse::<PlayerAction>() {
            Ok(action) => game = game.apply(action)?,
            Err(err) => writeln!(output, "{err}")?,
        }
    }

    if game.phase() == Phase::DealerTurn {
        game = game.play_dealer()?;
    }

    let (_, summary) = game.end_hand();
    write!(output, "{summary}")?;
    output.flush()?;
    Ok(summary)
}

/// Writes `prompt` and reads one trimmed line. Returns `None` at end of input.
fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    writeln!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const USAGE: &str = "Options are 'hit' or 'stand'\nPlease pick one of those two options";

    fn run(seed: u64, input: &str) -> (HandSummary, String) {
        let mut output = Vec::new();
        let summary = play_hand(seed, &mut input.as_bytes(), &mut output).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn invalid_input_reprompts_without_drawing() {
        let dealt = GameState::new(GameOptions::default(), 5)
            .shuffle()
            .deal()
            .unwrap();
        let (summary, output) = run(5, "HIT\nstand\n");

        assert!(output.contains(USAGE));
        assert_eq!(output.matches("What will you do?").count(), 2);
        assert_eq!(output.matches("Player: ").count(), 3);
        assert_eq!(summary.player, *dealt.player());
        assert!(output.ends_with(&summary.to_string()));
    }

    #[test]
    fn end_of_input_stands() {
        let dealt = GameState::new(GameOptions::default(), 11)
            .shuffle()
            .deal()
            .unwrap();
        let (summary, output) = run(11, "");

        assert!(!output.contains(USAGE));
        assert_eq!(output.matches("What will you do?").count(), 1);
        assert_eq!(summary.player, *dealt.player());
        assert!(output.contains("\n=====FINAL HANDS=====\n"));
        assert!(output.ends_with(&summary.to_string()));
    }
}
