use anyhow::Result;
use askmom_core::{AsyncStyle, DecisionFlag};
use orchestrator::TriggerBoard;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::Renderer;

const HELP: &str = "\
Commands:
  run1 | run2 | run3 | run4   fire one trigger (style names work too)
  all                          fire every trigger in order
  clear                        empty the output
  lines                        show the current output
  mood happy|unhappy           choose the mood for the next rebuild
  rebuild                      build fresh phone requests with the chosen mood
  help                         show this help
  quit                         leave the shell";

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Fire(AsyncStyle),
    FireAll,
    Clear,
    Lines,
    Mood(DecisionFlag),
    Rebuild,
    Help,
    Quit,
    Empty,
}

fn parse(input: &str) -> std::result::Result<ShellCommand, String> {
    let mut words = input.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(ShellCommand::Empty);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "all" => ShellCommand::FireAll,
        "clear" => ShellCommand::Clear,
        "lines" => ShellCommand::Lines,
        "rebuild" => ShellCommand::Rebuild,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        "mood" => {
            let value = words.next().ok_or("usage: mood happy|unhappy")?;
            ShellCommand::Mood(value.parse::<DecisionFlag>().map_err(|e| format!("{e}"))?)
        }
        other => AsyncStyle::parse(other)
            .map(ShellCommand::Fire)
            .ok_or_else(|| format!("unknown command '{other}', try 'help'"))?,
    };
    Ok(command)
}

/// Line-oriented trigger surface reading from stdin.
pub async fn run(mut board: TriggerBoard, mut renderer: Renderer) -> Result<()> {
    let mut pending_mood = board.mood();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("ask-mom shell - mom is {}. Type 'help'.", board.mood().as_str());
    loop {
        print!("ask-mom> ");
        std::io::stdout().flush()?;

        let Some(line) = input.next_line().await? else {
            break;
        };

        let command = match parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            ShellCommand::Fire(style) => {
                let report = board.fire(style).await?;
                renderer.report(&report)?;
            }
            ShellCommand::FireAll => {
                for report in board.fire_all().await? {
                    renderer.report(&report)?;
                }
            }
            ShellCommand::Clear => board.sink().clear(),
            ShellCommand::Lines => renderer.lines(&board.sink().lines()),
            ShellCommand::Mood(mood) => {
                pending_mood = mood;
                println!(
                    "mom will be {} once you 'rebuild'; existing requests keep their answer",
                    mood.as_str()
                );
            }
            ShellCommand::Rebuild => {
                board.rebuild(pending_mood);
                println!("rebuilt phone requests, mom is {}", board.mood().as_str());
            }
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => break,
            ShellCommand::Empty => {}
        }
    }

    Ok(())
}
