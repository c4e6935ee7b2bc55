//! Command-line interface for recvault.
//!
//! Provides commands for browsing the record catalog (dashboard, list,
//! search, show) and for maintaining it (add, remove, seed).

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::config;
use crate::domain::{Category, Details, Record, RecordId};
use crate::library::{
    filter_by_category_tab, filter_by_search_term, fixtures, sort_records, Catalog, SortKey,
};

/// recvault - Personal record catalog
#[derive(Parser, Debug)]
#[command(name = "recvault")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show per-category counts and the most recent records
    Dashboard,

    /// List records of a category
    List {
        /// Record category
        #[arg(value_enum)]
        category: CategoryArg,

        /// Sort order
        #[arg(short, long, value_enum, default_value = "latest")]
        sort: SortArg,

        /// Document tab filter (documents only; "all" disables it)
        #[arg(short, long, default_value = "all")]
        tab: String,

        /// Maximum number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Search records by title or description
    Search {
        /// Search query
        query: String,

        /// Restrict the search to one category
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Show details of a record
    Show {
        /// Record ID (e.g. "sem-1")
        record_id: String,
    },

    /// Add a record from a JSON draft
    Add {
        /// Draft file (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Remove a record from the catalog
    Remove {
        /// Record ID to remove
        record_id: String,
    },

    /// Write the sample record set to the catalog
    Seed {
        /// Overwrite an existing catalog
        #[arg(long)]
        force: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Record category for CLI (maps to Category)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    /// Academic semester records
    Semesters,

    /// Personal documents
    Documents,

    /// Achievements and awards
    Achievements,
}

impl From<CategoryArg> for Category {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::Semesters => Category::Semester,
            CategoryArg::Documents => Category::Document,
            CategoryArg::Achievements => Category::Achievement,
        }
    }
}

/// Sort order for CLI (maps to SortKey)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Most recent first
    Latest,

    /// Oldest first
    Oldest,

    /// By title
    Name,
}

impl From<SortArg> for SortKey {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Latest => SortKey::Latest,
            SortArg::Oldest => SortKey::Oldest,
            SortArg::Name => SortKey::Name,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Dashboard => show_dashboard().await,
            Commands::List {
                category,
                sort,
                tab,
                limit,
            } => list_records(category.into(), sort.into(), &tab, limit).await,
            Commands::Search { query, category } => {
                search_records(&query, category.map(Into::into)).await
            }
            Commands::Show { record_id } => show_record(&record_id).await,
            Commands::Add { input } => add_record(input).await,
            Commands::Remove { record_id } => remove_record(&record_id).await,
            Commands::Seed { force } => seed_catalog(force).await,
            Commands::Config => show_config(),
        }
    }
}

/// Draft record as accepted by `recvault add`
#[derive(Debug, Deserialize)]
struct DraftRecord {
    title: String,
    #[serde(default)]
    description: Option<String>,
    date: NaiveDate,
    details: Details,
}

/// Truncate a title for table display, counting characters, not bytes
fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() > max_chars {
        let truncated: String = title.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        title.to_string()
    }
}

/// Print a listing table of records
fn print_record_table(records: &[&Record]) {
    println!("{:<14} {:<12} {:<12} {:<50}", "ID", "CATEGORY", "DATE", "TITLE");
    println!("{}", "-".repeat(90));

    for record in records {
        println!(
            "{:<14} {:<12} {:<12} {:<50}",
            record.id.as_str(),
            record.category().to_string(),
            record.date.to_string(),
            truncate_title(&record.title, 47)
        );
    }
}

/// Show per-category counts and recent records
async fn show_dashboard() -> Result<()> {
    let catalog = Catalog::load().await?;

    if catalog.is_empty() {
        println!("Catalog is empty. Use 'recvault seed' or 'recvault add' to get started.");
        return Ok(());
    }

    println!("Record counts:");
    for category in Category::ALL {
        println!("  {:<14} {}", category.plural(), catalog.count(category));
    }

    println!("\nRecent records:");
    print_record_table(&catalog.recent(3));

    Ok(())
}

/// List records of a category, tab filter and sort applied in that order
async fn list_records(category: Category, sort: SortKey, tab: &str, limit: usize) -> Result<()> {
    let catalog = Catalog::load().await?;

    let records = catalog.list(category);
    let records = filter_by_category_tab(records, tab);
    let mut records = sort_records(records, sort);
    records.truncate(limit);

    if records.is_empty() {
        println!("No {} found", category.plural());
        return Ok(());
    }

    print_record_table(&records);
    println!("\nTotal: {} of {}", records.len(), catalog.count(category));

    Ok(())
}

/// Search records by title or description
async fn search_records(query: &str, category: Option<Category>) -> Result<()> {
    let catalog = Catalog::load().await?;

    let records = match category {
        Some(category) => catalog.list(category),
        None => catalog.all(),
    };
    let results = filter_by_search_term(records, query);

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!("Found {} result(s) for \"{}\":\n", results.len(), query);
    print_record_table(&results);

    Ok(())
}

/// Show details of a record, rendering the category-specific field set
async fn show_record(record_id: &str) -> Result<()> {
    let catalog = Catalog::load().await?;

    let Some(record) = catalog.get(&RecordId::new(record_id)) else {
        // "Not found" is a normal outcome, rendered as an empty state
        eprintln!("Record not found: {}", record_id);
        eprintln!("Use 'recvault list <category>' to browse records.");
        std::process::exit(1);
    };

    println!("ID: {}", record.id);
    println!("Title: {}", record.title);
    println!("Category: {}", record.category());
    println!("Date: {}", record.date);
    if let Some(ref description) = record.description {
        println!("Description: {}", description);
    }
    println!();

    match &record.details {
        Details::Semester { gpa, courses, notes } => {
            println!("GPA: {}", gpa);
            if !courses.is_empty() {
                println!("\n{:<10} {:<40} {:>6}", "CODE", "COURSE", "GRADE");
                println!("{}", "-".repeat(58));
                for course in courses {
                    println!("{:<10} {:<40} {:>6}", course.code, course.name, course.grade);
                }
            }
            if !notes.is_empty() {
                println!("\nNotes: {}", notes);
            }
        }
        Details::Document {
            kind,
            document_number,
            expiry_date,
            issuing_authority,
            location,
        } => {
            println!("Kind: {}", kind);
            println!("Document number: {}", document_number);
            if let Some(expiry) = expiry_date {
                println!("Expiry date: {}", expiry);
            }
            println!("Issuing authority: {}", issuing_authority);
            println!("Location: {}", location);
        }
        Details::Achievement {
            organization,
            position,
            team_members,
            project_name,
            certificate,
        } => {
            println!("Organization: {}", organization);
            println!("Position: {}", position);
            println!("Project: {}", project_name);
            if !team_members.is_empty() {
                println!("Team members: {}", team_members.join(", "));
            }
            if *certificate {
                println!("Certified achievement");
            }
        }
    }

    Ok(())
}

/// Add a record from a JSON draft (file or stdin)
async fn add_record(input_file: Option<PathBuf>) -> Result<()> {
    let input = if let Some(path) = input_file {
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read draft file: {}", path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    if input.trim().is_empty() {
        anyhow::bail!("No input provided. Use --input <file> or pipe to stdin");
    }

    let draft: DraftRecord = serde_json::from_str(&input).context("Failed to parse record draft")?;

    let id = RecordId::generate(draft.details.category());
    let mut record = Record::new(id.clone(), draft.title, draft.date, draft.details)?;
    record.description = draft.description;

    let mut catalog = Catalog::load().await?;
    catalog.add(record)?;
    catalog.save().await?;

    println!("Added record: {}", id);

    Ok(())
}

/// Remove a record from the persisted catalog
async fn remove_record(record_id: &str) -> Result<()> {
    let mut catalog = Catalog::load().await?;

    match catalog.remove(&RecordId::new(record_id)) {
        Some(record) => {
            catalog.save().await?;
            println!("Removed record: {} ({})", record.id, record.title);
            Ok(())
        }
        None => {
            eprintln!("Record not found: {}", record_id);
            std::process::exit(1);
        }
    }
}

/// Write the sample record set to the configured catalog path
async fn seed_catalog(force: bool) -> Result<()> {
    let path = config::catalog_path()?;

    if path.exists() && !force {
        anyhow::bail!(
            "Catalog already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    let catalog = fixtures::sample_catalog()?;
    catalog.save_to(&path).await?;

    println!("Seeded {} records into {}", catalog.len(), path.display());
    for category in Category::ALL {
        println!("  {:<14} {}", category.plural(), catalog.count(category));
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("recvault configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Home:        {}", cfg.home.display());
    println!("Catalog:     {}", cfg.home.join("catalog.json").display());

    Ok(())
}
