// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Context, Result, bail};
use log::debug;
use std::io::{BufRead, Write};

use showdown_eval::{Card, evaluate_best};
use showdown_game::{Config, Player, Round};

/// Runs the play loop.
///
/// If `hands` is `None` asks the user to play another hand after each hand.
pub fn play<R, W>(config: &Config, hands: Option<usize>, input: &mut R, w: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut round = Round::new(config)?;
    let mut rng = config.rng();

    writeln!(w, "\n=== Texas Hold 'Em ===")?;

    let mut played = 0;
    loop {
        let winners = round.play(&mut rng)?;
        let winners = winners.iter().map(|p| p.name.clone()).collect::<Vec<_>>();
        print_round(w, &round, &winners)?;

        played += 1;
        debug!("Played hand {played}");

        let again = match hands {
            Some(hands) => played < hands,
            None => ask_play_again(input, w)?,
        };

        if !again {
            break;
        }
    }

    writeln!(w, "Thanks for playing, goodbye!")?;
    Ok(())
}

/// Asks the number of players until a valid number is entered.
pub fn ask_players<R, W>(input: &mut R, w: &mut W) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt(input, w, "How many players? (2-6) ➜ ")?;
        let Some(line) = line else {
            bail!("No number of players given");
        };

        match line.parse::<usize>() {
            Ok(n) if (Round::MIN_PLAYERS..=Round::MAX_PLAYERS).contains(&n) => return Ok(n),
            _ => writeln!(w, "Please enter a number from 2 to 6.")?,
        }
    }
}

/// Asks to play another hand, an empty line means yes.
fn ask_play_again<R, W>(input: &mut R, w: &mut W) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    let line = prompt(input, w, "\nPlay another hand? [Y/n] ➜ ")?;
    Ok(line.is_some_and(|l| matches!(l.to_lowercase().as_str(), "" | "y" | "yes")))
}

/// Prints a prompt and reads a trimmed line, returns `None` at end of input.
fn prompt<R, W>(input: &mut R, w: &mut W, text: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(w, "{text}")?;
    w.flush()?;

    let mut line = String::new();
    let n = input.read_line(&mut line).context("Failed to read input")?;
    Ok((n > 0).then(|| line.trim().to_string()))
}

/// Evaluates 5 to 7 cards given as text.
pub fn eval<W: Write>(cards: &[String], w: &mut W) -> Result<()> {
    let cards = cards
        .iter()
        .map(|c| c.parse::<Card>().with_context(|| format!("Cannot parse card '{c}'")))
        .collect::<Result<Vec<_>>>()?;

    if let Some(dup) = cards
        .iter()
        .enumerate()
        .find_map(|(idx, c)| cards[..idx].contains(c).then_some(c))
    {
        bail!("Duplicate card {dup}");
    }

    let Some(hand) = evaluate_best(&cards) else {
        bail!("Expected 5 to 7 cards, got {}", cards.len());
    };

    writeln!(w, "{:<15} | best 5: {}", hand.category(), format_cards(hand.best_five()))?;
    Ok(())
}

fn print_round<W: Write>(w: &mut W, round: &Round, winners: &[String]) -> Result<()> {
    writeln!(w, "\n--- Hole cards ---")?;
    for player in round.players() {
        writeln!(w, "{}: {}", player.name, format_cards(&player.hole_cards))?;
    }

    let board = round.board();
    writeln!(w, "\n--- Board ---")?;
    writeln!(w, "Flop:  {}", format_cards(&board[..3.min(board.len())]))?;
    writeln!(w, "Turn:  {}", format_cards(&board[..4.min(board.len())]))?;
    writeln!(w, "River: {}", format_cards(board))?;

    writeln!(w, "\n--- Showdown ---")?;
    for player in round.players() {
        print_player(w, player)?;
    }

    let category = round
        .players()
        .iter()
        .find(|p| winners.first() == Some(&p.name))
        .and_then(|p| p.best_hand)
        .map(|h| h.category())
        .unwrap_or_default();

    if winners.len() == 1 {
        writeln!(w, "\nWinner: {} ({category})", winners[0])?;
    } else {
        writeln!(w, "\nSplit pot between: {} ({category})", winners.join(", "))?;
    }

    Ok(())
}

fn print_player<W: Write>(w: &mut W, player: &Player) -> Result<()> {
    if let Some(hand) = player.best_hand {
        writeln!(
            w,
            "{} → {:<15} | best 5: {}",
            player.name,
            hand.category(),
            format_cards(hand.best_five())
        )?;
    }

    Ok(())
}

/// Formats cards sorted by descending rank.
fn format_cards(cards: &[Card]) -> String {
    let mut cards = cards.to_vec();
    Card::sort_desc(&mut cards);
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
