// listty: step-through doubly linked list visualizer for the terminal

mod engine;
mod list;
mod playback;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use list::DoublyLinkedList;
use ui::App;

/// Seed used when no values are given on the command line.
const DEFAULT_SEED: [i64; 4] = [10, 20, 30, 40];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("listty");

    // Optional seed values as positional arguments
    let mut seed = Vec::new();
    for arg in &args[1..] {
        if arg == "-h" || arg == "--help" {
            print_usage(program_name);
            return Ok(());
        }
        match arg.parse::<i64>() {
            Ok(value) => seed.push(value),
            Err(_) => {
                eprintln!("Error: '{}' is not an integer seed value", arg);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
        }
    }
    if seed.is_empty() {
        seed.extend(DEFAULT_SEED);
    }

    let list = DoublyLinkedList::from_values(&seed);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(list);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [seed values...]", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {}                # seed the list with 10 20 30 40", program_name);
    eprintln!("  {} 20 30 40       # seed the list with your own values", program_name);
    eprintln!();
    eprintln!("Inside the TUI: b/e/p/d run operations, space plays the trace,");
    eprintln!("arrow keys step, +/- change speed, q quits.");
}
