use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use tracing::info;

use property_wrappers::pages::{self, Example};
use property_wrappers::{logging, PlaygroundConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Page {
    Intro,
    Wrapped,
    Projected,
    All,
}

#[derive(Debug, Parser)]
#[command(name = "playground", about = "Custom property wrappers, one example at a time")]
struct Cli {
    /// Which tutorial page to print
    #[arg(long, value_enum, default_value_t = Page::All)]
    page: Page,

    /// TOML or JSON file overriding bounds, date pattern, and rating symbols
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print each example's struct as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => match PlaygroundConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{} {}", "error:".red().bold(), err);
                return ExitCode::FAILURE;
            }
        },
        None => PlaygroundConfig::default(),
    };

    if matches!(cli.page, Page::Intro | Page::All) {
        for (i, line) in pages::introduction().into_iter().enumerate() {
            if i == 0 {
                println!("{}\n", line.bold().underline());
            } else {
                println!("{line}");
            }
        }
    }

    if matches!(cli.page, Page::Wrapped | Page::All) {
        print_page("wrappedValue", &pages::wrapped_value_page(&config), cli.json);
    }

    if matches!(cli.page, Page::Projected | Page::All) {
        let today = Local::now().date_naive();
        info!(%today, "projecting birth dates");
        print_page(
            "projectedValue",
            &pages::projected_value_page(&config, today),
            cli.json,
        );
    }

    ExitCode::SUCCESS
}

fn print_page(name: &str, examples: &[Example], json: bool) {
    println!("\n{}", format!("## {name}").cyan().bold());

    for example in examples {
        println!("\n{} {}", "▶".green(), example.title.yellow().bold());
        println!("{}", example.summary.italic().dimmed());

        if json {
            match serde_json::to_string_pretty(&example.data) {
                Ok(text) => println!("{text}"),
                Err(err) => eprintln!("{} {}", "error:".red().bold(), err),
            }
        } else {
            for line in &example.lines {
                println!("{line}");
            }
        }
    }
}
