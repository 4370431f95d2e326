use anyhow::{bail, Result};
use calcflow::shell::{keypad, parse_press_args, Session, Snapshot};
use calcflow::State;
use clap::Parser;
use stillwater::validation::Validation;
use tracing::warn;

#[derive(Parser)]
#[command(name = "calcflow")]
#[command(about = "Four-function calculator driven by a state machine")]
#[command(long_about = "Presses calculator buttons in order and prints the display after each press. \
                       Labels are 0-9, + - * /, C (clear) and = (equals); whitespace is ignored. \
                       Unknown labels are reported by argument number and character position.")]
struct Cli {
    /// Button labels to press, e.g. `12+3=`
    presses: Vec<String>,

    /// Print each snapshot and the session summary as JSON lines
    #[arg(long)]
    json: bool,

    /// Print the keypad layout and exit
    #[arg(long)]
    keypad: bool,

    /// Print the visited state path after the presses
    #[arg(long)]
    history: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    calcflow::telemetry::init_logging(&cli.log_level);

    if cli.keypad {
        print_keypad();
        return Ok(());
    }

    let buttons = match parse_press_args(&cli.presses) {
        Validation::Success(buttons) => buttons,
        Validation::Failure(errors) => {
            for error in errors.iter() {
                warn!(
                    argument = error.argument + 1,
                    position = error.position,
                    label = %error.label,
                    "Unknown button"
                );
                eprintln!("error: {}", error);
            }
            bail!("{} unknown button label(s) in input", errors.len());
        }
    };

    let mut session = Session::start()?;

    if buttons.is_empty() {
        render(&session.snapshot(), None, cli.json)?;
    }
    for button in buttons {
        let snapshot = session.press(button);
        render(&snapshot, Some(button.label()), cli.json)?;
    }

    if cli.history {
        let path: Vec<&str> = session
            .history()
            .get_path()
            .into_iter()
            .map(|state| state.name())
            .collect();
        if cli.json {
            println!("{}", serde_json::json!({ "path": path }));
        } else if path.is_empty() {
            println!("path: {}", session.state().name());
        } else {
            println!("path: {}", path.join(" -> "));
        }
    }

    let summary = session.stop();
    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}

fn render(snapshot: &Snapshot, label: Option<char>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
    } else {
        let label = label.map(String::from).unwrap_or_default();
        let marker = if snapshot.changed { "" } else { "  (ignored)" };
        println!("{:>2}  {}{}", label, snapshot.display, marker);
    }
    Ok(())
}

fn print_keypad() {
    for row in keypad() {
        let labels: Vec<String> = row.iter().map(|button| button.to_string()).collect();
        println!("{}", labels.join(" "));
    }
}
