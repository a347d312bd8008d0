use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Browse tests by term, discipline and category.
    Terms(CatalogArgs),
    /// Browse tests by instructor and category.
    Teachers(CatalogArgs),
    /// Show the reference lists of the new-test form.
    Options(OptionsArgs),
    /// List test categories.
    Categories,
    /// Submit a new test.
    Add(AddArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CatalogArgs {
    /// Expand this many levels; deeper groups are collapsed to their count
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub depth: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct OptionsArgs {
    /// Only list the teachers eligible for this discipline
    #[arg(long)]
    pub discipline: Option<u32>,
}

/// Every field is optional on the command line so the form's own validation
/// reports what is missing.
#[derive(Clone, Debug, Default, Args)]
pub struct AddArgs {
    /// Test name, e.g. "2021.1"
    #[arg(long)]
    pub name: Option<String>,
    /// Link to the PDF
    #[arg(long)]
    pub pdf_url: Option<String>,
    /// Discipline id
    #[arg(long)]
    pub discipline: Option<u32>,
    /// Instructor id; must teach the chosen discipline
    #[arg(long)]
    pub teacher: Option<u32>,
    /// Category id
    #[arg(long)]
    pub category: Option<u32>,
}
