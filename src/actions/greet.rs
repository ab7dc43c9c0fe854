//! `greet`: styled greetings

use std::io::Write;

use chrono::Local;
use tracing::{debug, instrument};

use crate::cli::args::{GreetArgs, GreetingStyle};
use crate::cli::error::{CliResult, IoResultExt};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build the greeting line for `name` in the given style.
pub fn base_greeting(style: GreetingStyle, name: &str) -> String {
    match style {
        GreetingStyle::Formal => format!("Good day, {name}."),
        GreetingStyle::Casual => format!("Hey {name}!"),
        GreetingStyle::Friendly => format!("Hello {name}, nice to meet you!"),
        GreetingStyle::Excited => format!("WOW! Hi there {name}! 🎉"),
    }
}

/// Full greeting, optionally stamped and uppercased.
pub fn compose(args: &GreetArgs, timestamp: Option<&str>) -> String {
    let mut greeting = base_greeting(args.style, &args.name);
    if let Some(ts) = timestamp {
        greeting.push_str(&format!(" (at {ts})"));
    }
    if args.uppercase {
        greeting.to_uppercase()
    } else {
        greeting
    }
}

#[instrument(level = "debug", skip(out))]
pub fn greet(args: &GreetArgs, out: &mut dyn Write) -> CliResult<()> {
    let timestamp = args
        .time
        .then(|| Local::now().format(TIMESTAMP_FORMAT).to_string());
    let greeting = compose(args, timestamp.as_deref());
    debug!("greeting: {:?}, count: {}", greeting, args.count);

    for _ in 0..args.count.max(0) {
        writeln!(out, "{greeting}").with_context("write greeting")?;
    }
    Ok(())
}
