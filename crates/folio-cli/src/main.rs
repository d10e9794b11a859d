//! folio: terminal portfolio viewer.
//!
//! With no subcommand the interactive TUI starts. Subcommands print the
//! same content to stdout for scripting, optionally as JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use folio_core::{Category, EntryKind, Gallery, Portfolio, Settings};

#[derive(Parser)]
#[command(name = "folio", version, about = "Terminal portfolio viewer")]
struct Cli {
    /// Path to a JSON portfolio replacing the built-in content
    #[arg(long, global = true, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Theme for this session: mocha, latte, or high-contrast
    #[arg(long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the profile card
    About {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the journey timeline
    Timeline {
        /// Only entries of this kind: education, experience, or award
        #[arg(long)]
        kind: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the project gallery
    Projects {
        /// Filter by category display name, e.g. "AI/ML"
        #[arg(long)]
        category: Option<String>,
        /// Include projects beyond the first page
        #[arg(long)]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the technology groups
    Tech {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a portfolio content file
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(command) = cli.command else {
        return run_tui(cli);
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let portfolio = load_portfolio(cli.content.as_deref())?;
    match command {
        Commands::About { json } => cmd_about(&portfolio, json),
        Commands::Timeline { kind, json } => cmd_timeline(&portfolio, kind.as_deref(), json),
        Commands::Projects {
            category,
            all,
            json,
        } => cmd_projects(&portfolio, category.as_deref(), all, json),
        Commands::Tech { json } => cmd_tech(&portfolio, json),
        Commands::Check => cmd_check(&portfolio, cli.content.as_deref()),
    }
}

fn run_tui(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings_path = settings_path();
    let mut settings = match &settings_path {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if let Some(content) = cli.content {
        settings.content_path = Some(content);
    }

    let portfolio = load_portfolio(settings.content_path.as_deref())?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(folio_tui::run_tui(portfolio, settings, settings_path))?;
    Ok(())
}

/// Settings live under the XDG config directory.
fn settings_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("folio").join("settings.json"));
    }
    std::env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("folio")
            .join("settings.json")
    })
}

fn load_portfolio(path: Option<&Path>) -> Result<Portfolio, folio_core::ContentError> {
    match path {
        Some(path) => Portfolio::load(path),
        None => Ok(Portfolio::builtin()),
    }
}

fn cmd_about(portfolio: &Portfolio, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let profile = &portfolio.profile;
    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    println!("{}", profile.name);
    println!("{}", profile.role);
    println!();
    println!("{}", profile.bio);
    println!();
    let education = &profile.education;
    println!(
        "Education: {}, {} — {} ({})",
        education.degree, education.field, education.institution, education.years
    );
    for cert in &profile.certifications {
        println!("Certification: {} — {}", cert.title, cert.issuer);
    }
    Ok(())
}

fn cmd_timeline(
    portfolio: &Portfolio,
    kind: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind = kind.map(parse_kind).transpose()?;
    let entries: Vec<_> = portfolio
        .timeline
        .iter()
        .filter(|e| kind.map_or(true, |k| e.kind == k))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        let mut line = format!("{}  {}", entry.year, entry.title);
        if let Some(org) = &entry.organization {
            line.push_str(&format!(" — {org}"));
        }
        if let Some(location) = &entry.location {
            line.push_str(&format!(" ({location})"));
        }
        println!("{line}");
        for highlight in &entry.highlights {
            println!("  - {highlight}");
        }
        println!();
    }
    Ok(())
}

fn cmd_projects(
    portfolio: &Portfolio,
    category: Option<&str>,
    all: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut gallery = Gallery::new(portfolio.projects.clone());
    if let Some(name) = category {
        gallery.select_named(name)?;
    }
    if all {
        gallery.toggle_show_all();
    }

    let visible = gallery.visible();
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!(
        "{} · {} project(s)",
        gallery.selected().label(),
        visible.len()
    );
    println!();
    for project in &visible {
        println!("{}", project.title);
        println!("  {}", project.description);
        if !project.tags.is_empty() {
            println!("  tags: {}", project.tags.join(", "));
        }
        if let Some(repo) = &project.repo {
            println!("  repo: {repo}");
        }
        if let Some(live) = &project.live {
            println!("  live: {live}");
        }
        println!();
    }
    if gallery.hidden_count() > 0 {
        println!(
            "{} more project(s) hidden; pass --all to include them",
            gallery.hidden_count()
        );
    }
    Ok(())
}

fn cmd_tech(portfolio: &Portfolio, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&portfolio.tech_groups)?);
        return Ok(());
    }

    for group in &portfolio.tech_groups {
        println!("{}:", group.label);
        for item in &group.items {
            println!("  {} — {}", item.name, item.docs);
        }
        println!();
    }
    Ok(())
}

fn cmd_check(
    portfolio: &Portfolio,
    path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Loading already validated; report what was found.
    let source = match path {
        Some(path) => path.display().to_string(),
        None => "built-in content".to_string(),
    };
    println!("{source}: OK");
    println!(
        "  {} timeline entries, {} projects, {} tech groups",
        portfolio.timeline.len(),
        portfolio.projects.len(),
        portfolio.tech_groups.len()
    );
    let categories: Vec<String> = Category::ALL
        .iter()
        .skip(1)
        .map(|c| c.label().to_string())
        .collect();
    println!("  categories: {}", categories.join(", "));
    Ok(())
}

fn parse_kind(name: &str) -> Result<EntryKind, String> {
    match name.to_ascii_lowercase().as_str() {
        "education" => Ok(EntryKind::Education),
        "experience" => Ok(EntryKind::Experience),
        "award" => Ok(EntryKind::Award),
        other => Err(format!(
            "unknown kind {other:?}; expected education, experience, or award"
        )),
    }
}
