// ABOUTME: Main entry point for the slidedeckml compiler.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slidedeckml", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a SlideDeckML document tree (JSON) to a reveal.js HTML presentation
    Compile(CompileArgs),
}

#[derive(Args)]
struct CompileArgs {
    /// Path to the parsed document tree
    input: PathBuf,

    /// Path to output HTML file
    #[arg(short, long, default_value = "presentation.html")]
    output: PathBuf,

    /// reveal.js theme name
    #[arg(long)]
    theme: Option<String>,

    /// Slide transition style
    #[arg(long)]
    transition: Option<String>,
}

fn compile(args: &CompileArgs) -> anyhow::Result<()> {
    println!("Compiling {}...", args.input.display());

    let config = slidedeckml::Config::from_env();
    let shell = config.get_shell_config(args.theme.clone(), args.transition.clone());
    shell.validate()?;

    let html = slidedeckml::generate_html_from_file(&args.input, &shell)
        .with_context(|| format!("Failed to compile {}", args.input.display()))?;

    slidedeckml::write_html_to_file(&html, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Generated: {}", args.output.display());
    println!("  Open it in your browser to view the presentation!");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Compile(args)) => compile(args),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
