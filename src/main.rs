use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use sitelog::core::seed;
use sitelog::core::store::{
    FileBackend, NewNote, NoteKind, Project, ProjectRepository, ProjectStore,
};
use sitelog::{ApiClient, Config, GeocodeClient, Verbosity, init_logging, report};

#[derive(Parser)]
#[command(name = "sitelog")]
#[command(about = "Local-first field inspection logging", version)]
struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all projects
    List,
    /// Show one project with its notes
    Show {
        /// Project ID
        id: String,
    },
    /// Create a new inspection project
    New {
        /// Project name
        name: String,
        /// Site address; shortened to its first three segments
        #[arg(long)]
        location: String,
        /// Inspection date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Inspector name
        #[arg(long)]
        inspector: String,
    },
    /// Append a note to a project
    AddNote {
        /// Project ID
        id: String,
        /// Note kind
        #[arg(long, value_enum, default_value = "text")]
        kind: KindArg,
        /// Short label for the note
        #[arg(long)]
        content: String,
        /// Media file to upload before attaching the note
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Delete a project (immediate, unrecoverable)
    Delete {
        /// Project ID
        id: String,
    },
    /// Export a project to a paginated text report
    Export {
        /// Project ID
        id: String,
        /// Output directory (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Generate an AI summary of a project's notes
    Summarize {
        /// Project ID
        id: String,
    },
    /// Ask the AI backend a question over all projects
    Chat {
        /// The question
        message: String,
    },
    /// Look up address suggestions for a partial query
    LookupAddress {
        /// Partial address (min 3 characters)
        query: String,
    },
    /// Populate an empty store with sample inspections
    Seed,
    /// Check remote backend availability
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Photo,
    Video,
    Text,
}

impl From<KindArg> for NoteKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Photo => NoteKind::Photo,
            KindArg::Video => NoteKind::Video,
            KindArg::Text => NoteKind::Text,
        }
    }
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbosity());

    let config = Config::load(args.config.as_deref())?;
    let store = ProjectStore::new(FileBackend::new(config.store_path()));
    let api = ApiClient::new(config.api_base_url.clone());

    match args.command {
        Command::List => {
            let projects = store.load_all().await?;
            if projects.is_empty() {
                println!("No projects yet. Create one with `sitelog new`.");
            }
            for project in &projects {
                println!(
                    "{}  {}  ({}, {} notes)",
                    project.id,
                    project.name,
                    project.location,
                    project.notes.len()
                );
            }
        }
        Command::Show { id } => {
            let projects = store.load_all().await?;
            let project = find_project(&projects, &id)?;
            print_project(project);
        }
        Command::New {
            name,
            location,
            date,
            inspector,
        } => {
            let date = parse_date(&date)?;
            let project = Project::new(name, &location, date, inspector);
            let mut projects = store.load_all().await?;
            println!("Created project {} at {}", project.id, project.location);
            projects.push(project);
            store.save_all(&projects).await?;
        }
        Command::AddNote {
            id,
            kind,
            content,
            file,
        } => {
            let kind = NoteKind::from(kind);
            let mut note = NewNote {
                kind,
                content,
                transcription: None,
                timestamp: OffsetDateTime::now_utc(),
                file_url: None,
                file_name: None,
                file_size: None,
            };
            if let Some(file) = file {
                let uploaded = api
                    .upload(&file, &id, kind)
                    .await
                    .context("media upload failed, note not added")?;
                note.transcription = uploaded.transcription.clone();
                note.file_url = Some(uploaded.file_url);
                note.file_name = Some(uploaded.original_name);
                note.file_size = Some(uploaded.size);
            }
            let added = store.add_note(&id, note).await?;
            println!("Added note {} to project {}", added.note.id, id);
            if let Some(transcription) = &added.note.transcription {
                println!("Transcription: {transcription}");
            }
        }
        Command::Delete { id } => {
            let deleted = store.delete_project(&id).await?;
            if deleted.removed {
                println!("Deleted project {id}");
            } else {
                println!("No project with id {id}, nothing deleted");
            }
        }
        Command::Export { id, out_dir } => {
            let projects = store.load_all().await?;
            let project = find_project(&projects, &id)?;
            let dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
            let path = report::export_project(project, &dir).await?;
            println!("Wrote {}", path.display());
        }
        Command::Summarize { id } => {
            let mut projects = store.load_all().await?;
            let project = find_project(&projects, &id)?.clone();
            let notes: Vec<String> = project
                .notes
                .iter()
                .map(|note| {
                    note.transcription
                        .as_deref()
                        .filter(|t| !t.is_empty())
                        .unwrap_or(&note.content)
                        .to_string()
                })
                .collect();
            if notes.is_empty() {
                anyhow::bail!("project {id} has no notes to summarize");
            }
            let summary = api
                .summarize(&notes, &project.name, &project.location)
                .await?;
            println!("{summary}");
            if let Some(stored) = projects.iter_mut().find(|p| p.id == id) {
                stored.ai_summary = Some(summary);
            }
            store.save_all(&projects).await?;
        }
        Command::Chat { message } => {
            let projects = store.load_all().await?;
            let reply = api.chat(&message, &projects, None).await?;
            println!("{}", reply.response);
        }
        Command::LookupAddress { query } => {
            let geocoder = GeocodeClient::new(config.geocode_country_codes.clone());
            let suggestions = geocoder.suggest(&query).await?;
            if suggestions.is_empty() {
                println!("No suggestions.");
            }
            for suggestion in &suggestions {
                println!(
                    "{}  ({}, {})",
                    sitelog::core::store::shorten_address(&suggestion.display_name),
                    suggestion.lat,
                    suggestion.lon
                );
            }
        }
        Command::Seed => {
            let projects = seed::populate_if_empty(&store).await?;
            println!("Store holds {} projects.", projects.len());
        }
        Command::Health => {
            let health = api.health().await;
            println!("Backend status: {}", health.status);
            println!(
                "AI features: {}",
                if health.ai_enabled() {
                    "enabled"
                } else {
                    "disabled"
                }
            );
        }
    }

    Ok(())
}

fn parse_date(raw: &str) -> anyhow::Result<OffsetDateTime> {
    let format = format_description!("[year]-[month]-[day]");
    let date = Date::parse(raw, format)
        .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))?;
    Ok(date.midnight().assume_utc())
}

fn find_project<'a>(projects: &'a [Project], id: &str) -> anyhow::Result<&'a Project> {
    projects
        .iter()
        .find(|p| p.id == id)
        .with_context(|| format!("no project with id '{id}'"))
}

fn print_project(project: &Project) {
    println!("{}  {}", project.id, project.name);
    println!("  Plats: {}", project.location);
    println!("  Inspektör: {}", project.inspector);
    println!("  Datum: {}", project.date.date());
    if let Some(summary) = &project.ai_summary {
        println!("  AI-sammanfattning:");
        for line in summary.lines() {
            println!("    {line}");
        }
    }
    println!("  Anteckningar ({}):", project.notes.len());
    for (index, note) in project.notes.iter().enumerate() {
        let body = note
            .transcription
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&note.content);
        println!("    {}. [{}] {}", index + 1, note.kind.as_str(), body);
    }
}
