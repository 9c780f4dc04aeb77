use clap::Parser;

/// Marco, a terminal client for the travel-documentation assist service.
#[derive(Parser, Debug)]
#[command(name = "marco", version, about)]
pub struct Args {
    /// Ask a single question and exit instead of starting the REPL.
    #[arg(short = 'q', long = "ask")]
    pub ask: Option<String>,

    /// Assist service base URL override.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. marco=debug).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
