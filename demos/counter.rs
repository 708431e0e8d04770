//! Drive the counter widget from the command line.
//!
//! ```text
//! cargo run --example counter -- increment increment decrement reset
//! cargo run --example counter -- --json '{"type":"INCREMENT"}'
//! RUST_LOG=tally=trace cargo run --example counter -- --start 10 decrement
//! ```

use clap::Parser;
use tally::{counter_reducer, ActionError, CounterAction, CounterState, CounterWidget, Store};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "counter", about = "Dispatch actions to a counter store")]
struct Args {
    /// Initial count
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    start: i64,

    /// Treat each action as a JSON object such as {"type":"INCREMENT"}
    #[arg(long)]
    json: bool,

    /// Actions to dispatch, in order (increment, decrement, or any other tag)
    actions: Vec<String>,
}

fn parse_action(input: &str, json: bool) -> Result<CounterAction, ActionError> {
    if json {
        return CounterAction::from_json(input);
    }
    match input.to_ascii_uppercase().parse() {
        Ok(action) => Ok(action),
        Err(never) => match never {},
    }
}

fn main() -> Result<(), ActionError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let store = Store::new(counter_reducer, CounterState { count: args.start });
    let _log = store.subscribe(|state| match serde_json::to_string(state) {
        Ok(json) => tracing::info!(state = %json, "state changed"),
        Err(err) => tracing::warn!(%err, "state could not be encoded"),
    });
    let widget = CounterWidget::mount(&store);

    let controls: Vec<_> = widget.controls().iter().map(|c| format!("[{c}]")).collect();
    println!("{}  {}", widget.count(), controls.join(" "));

    for input in &args.actions {
        let action = parse_action(input, args.json)?;
        store.dispatch(action);
        println!("{:<10} -> {}", action, widget.count());
    }

    println!("renders: {}", widget.renders());
    widget.unmount();
    Ok(())
}
