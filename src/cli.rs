//! Command-line surface for `kt`.
//!
//! Every command loads the catalog export, runs one core view over it and
//! returns the rendered output; printing is left to `main`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use knowledgetrace_core::{
    browse, facets, other_works_by, rank_related, status_summary, FilterCriteria, SortKey,
    Visibility,
};
use serde_json::json;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::render;

#[derive(Parser, Debug)]
#[command(name = "kt")]
#[command(about = "Browse, filter and rank KnowledgeTrace thesis projects")]
pub struct Cli {
    /// JSON export of the project collection
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects matching the given filters
    Browse(BrowseArgs),
    /// Show projects related to a project
    Related {
        /// Id of the reference project
        id: String,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show other works by the author of a project
    ByAuthor {
        /// Id of the reference project
        id: String,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show the available filter values and status counts
    Facets,
}

#[derive(Args, Debug, Default)]
pub struct BrowseArgs {
    /// Search title, abstract, description and author
    #[arg(short, long)]
    pub keywords: Option<String>,
    /// Keep projects using any of these technologies
    #[arg(long = "tech")]
    pub tech_stack: Vec<String>,
    /// Keep projects carrying any of these tags
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub supervisor: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    /// date-desc, date-asc, title-asc or title-desc
    #[arg(short, long)]
    pub sort: Option<SortKey>,
    /// Include projects that are not approved
    #[arg(long)]
    pub all: bool,
}

impl BrowseArgs {
    pub fn criteria(&self, default_sort: SortKey) -> FilterCriteria {
        FilterCriteria::default()
            .with_keywords(self.keywords.clone().unwrap_or_default())
            .with_tech(self.tech_stack.clone())
            .with_tags(self.tags.clone())
            .with_author(self.author.clone().unwrap_or_default())
            .with_supervisor(self.supervisor.clone().unwrap_or_default())
            .with_year(self.year.clone().unwrap_or_default())
            .with_sort(self.sort.unwrap_or(default_sort))
    }

    pub fn visibility(&self) -> Visibility {
        if self.all {
            Visibility::Review
        } else {
            Visibility::Public
        }
    }
}

/// Execute `command` against an already loaded catalog.
pub fn execute(command: &Commands, catalog: &Catalog, config: &Config, format: Format) -> Result<String> {
    let projects = catalog.projects();

    let output = match command {
        Commands::Browse(args) => {
            let criteria = args.criteria(config.default_sort);
            let listing = browse(projects, &criteria, args.visibility());
            match format {
                Format::Text => render::render_listing(&listing),
                Format::Json => serde_json::to_string_pretty(&listing)?,
            }
        }
        Commands::Related { id, limit } => {
            let reference = catalog.get(id)?;
            let ranked = rank_related(reference, projects, limit.unwrap_or(config.related_limit));
            match format {
                Format::Text => render::render_related(&ranked),
                Format::Json => serde_json::to_string_pretty(&ranked)?,
            }
        }
        Commands::ByAuthor { id, limit } => {
            let reference = catalog.get(id)?;
            let works = other_works_by(reference, projects, limit.unwrap_or(config.author_limit));
            match format {
                Format::Text => render::render_listing(&works),
                Format::Json => serde_json::to_string_pretty(&works)?,
            }
        }
        Commands::Facets => {
            let public = browse(projects, &FilterCriteria::default(), Visibility::Public);
            let available = facets(public.iter().copied());
            let summary = status_summary(projects);
            match format {
                Format::Text => render::render_facets(&available, &summary),
                Format::Json => serde_json::to_string_pretty(&json!({
                    "facets": available,
                    "status": summary,
                }))?,
            }
        }
    };

    Ok(output)
}

/// Resolve the data file, load it, and execute the parsed command.
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    let path = config.resolve_data_path(
        cli.data.clone(),
        std::env::var(crate::config::DATA_ENV).ok(),
    )?;
    let catalog = Catalog::load(&path)?;
    execute(&cli.command, &catalog, config, cli.format)
}
