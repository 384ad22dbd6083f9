// ABOUTME: Main entry point for the big-deck program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an extracted deck into an HTML page
    GenerateHtml(GenerateHtmlArgs),

    /// Print the rendered slide fragments without the page shell
    Fragments(RenderArgs),

    /// Regenerate the HTML page whenever the deck changes
    Watch(WatchArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Path to the deck JSON produced by the extractor
    #[arg(short, long)]
    input: PathBuf,

    /// What to do with slides that fail to render: 'skip' or 'marker'
    #[arg(long)]
    on_error: Option<big_deck::FailurePolicy>,

    /// Render slides on multiple threads
    #[arg(long)]
    parallel: bool,
}

#[derive(Args)]
struct GenerateHtmlArgs {
    #[command(flatten)]
    render: RenderArgs,

    /// Path to output HTML file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args)]
struct WatchArgs {
    #[command(flatten)]
    render: RenderArgs,

    /// Path to output HTML file
    #[arg(short, long)]
    output: PathBuf,

    /// Page title
    #[arg(long)]
    title: Option<String>,

    /// Debounce time in milliseconds
    #[arg(long, default_value_t = 500)]
    debounce_ms: u64,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::GenerateHtml(args)) => {
            let config = big_deck::Config::from_env().with_overrides(
                args.title,
                args.render.on_error,
                args.render.parallel,
            );

            let html_content = big_deck::generate_html(&args.render.input, &config)
                .with_context(|| format!("Failed to render {:?}", args.render.input))?;

            match args.output {
                Some(output) => {
                    big_deck::write_html_to_file(&html_content, &output)
                        .with_context(|| format!("Failed to write output file {:?}", output))?;
                    eprintln!("HTML generated successfully: {:?}", output);
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    writeln!(stdout, "{}", html_content)?;
                }
            }
            Ok(())
        }
        Some(Commands::Fragments(args)) => {
            let config =
                big_deck::Config::from_env().with_overrides(None, args.on_error, args.parallel);

            let fragments = big_deck::generate_fragments(&args.input, &config)
                .with_context(|| format!("Failed to render {:?}", args.input))?;

            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", fragments.join(&config.separator))?;
            Ok(())
        }
        Some(Commands::Watch(args)) => {
            let config = big_deck::Config::from_env().with_overrides(
                args.title,
                args.render.on_error,
                args.render.parallel,
            );
            let watch_config = big_deck::WatchConfig {
                deck_path: args.render.input,
                html_output: args.output,
                debounce_ms: args.debounce_ms,
            };

            big_deck::watch_deck(watch_config, &config)?;
            Ok(())
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
