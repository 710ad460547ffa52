//! Verbose per-turn console trace for single-stepping through trials
use std::fmt::Write as _;
use std::io::{self, Write as _};

use cantstop_game::{Column, TurnObserver, TurnRecord};

/// Prints every derivation stage of a turn and, in stepping mode, waits for
/// Enter before the next roll. Purely observational; outcomes are decided
/// before the printer sees the record.
pub struct TurnPrinter {
    step: bool,
}

impl TurnPrinter {
    #[must_use]
    pub const fn new(step: bool) -> Self {
        Self { step }
    }
}

impl TurnObserver for TurnPrinter {
    fn turn_played(&mut self, record: &TurnRecord) {
        println!("Dice:\n {}", record.dice);
        println!("Raw options:\n {}", join_bracketed(&record.raw_options.map(|[x, y]| format!("[{x}, {y}]"))));
        println!("Options:\n {}", join_bracketed(&record.options.iter().map(ToString::to_string).collect::<Vec<_>>()));

        if let Some(chosen) = record.chosen {
            println!("Filtered options\n {}", join_bracketed(&record.cap_moves.iter().map(ToString::to_string).collect::<Vec<_>>()));
            println!("Best option:\n {chosen}");
            for column in Column::ALL {
                println!("{:20}{}", "", ladder(column, record.position.step_count(column)));
            }
        }

        if self.step && record.terminal.is_none() {
            pause("");
        }
    }
}

fn join_bracketed(items: &[String]) -> String {
    let mut s = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        let _ = write!(s, "{item}");
    }
    s.push(']');
    s
}

/// One column's progress bar, e.g. `7|**3`: the column number, a bar as wide
/// as the step count, the count itself as the last one or two characters.
#[must_use]
pub fn ladder(column: Column, steps: u8) -> String {
    let mut s = format!("{column}|");
    if steps == 0 {
        return s;
    }
    let digits = if steps < 10 { 1 } else { 2 };
    s.push_str(&"*".repeat(usize::from(steps) - digits));
    let _ = write!(s, "{steps}");
    s
}

/// Print a prompt and block until the user hits Enter. Read errors end the
/// pause rather than the run.
pub fn pause(prompt: &str) {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
}
