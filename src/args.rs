use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Browse and manage a catalog of product features", long_about = None)]
pub struct Args {
    /// Case-insensitive search over title, description and id
    #[arg(long)]
    pub search: Option<String>,

    /// Only show features of this type ("all" disables the filter)
    #[arg(long = "type")]
    pub type_filter: Option<String>,

    /// List the feature types present in the catalog
    #[arg(long)]
    pub list_types: bool,

    /// Show the details of one feature instead of the list (with --export, print it as an envelope)
    #[arg(long)]
    pub show: Option<String>,

    /// Import a JSON envelope file (repeatable)
    #[arg(long, value_name = "PATH")]
    pub import: Vec<PathBuf>,

    /// Import a JSON envelope given inline
    #[arg(long, value_name = "JSON")]
    pub import_text: Option<String>,

    /// Add a feature from a JSON file; a blank id gets a new one
    #[arg(long, value_name = "PATH")]
    pub add: Option<PathBuf>,

    /// Replace an existing feature with the one in a JSON file
    #[arg(long, value_name = "PATH")]
    pub update: Option<PathBuf>,

    /// Delete a feature by id (repeatable)
    #[arg(long, value_name = "ID")]
    pub delete: Vec<String>,

    /// Fetch features from this URL instead of the built-in sample
    #[arg(long, value_name = "URL")]
    pub source: Option<String>,

    /// Fetch again after seeding and merge the result
    #[arg(long)]
    pub refresh: bool,

    /// Skip the simulated fetch latency
    #[arg(long)]
    pub no_delay: bool,

    /// Print the filtered features as an import envelope
    #[arg(long)]
    pub export: bool,

    /// Print an example import envelope and exit
    #[arg(long)]
    pub example: bool,

    /// Print a blank feature with the form's options and exit
    #[arg(long)]
    pub template: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeatable_flags() {
        let args = Args::parse_from([
            "feature_catalog",
            "--import",
            "a.json",
            "--import",
            "b.json",
            "--delete",
            "f1",
            "--delete",
            "f2",
            "--type",
            "Security",
        ]);

        assert_eq!(args.import, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert_eq!(args.delete, vec!["f1", "f2"]);
        assert_eq!(args.type_filter.as_deref(), Some("Security"));
        assert!(!args.refresh);
    }

    #[test]
    fn test_show_combines_with_list_types_and_export() {
        use clap::CommandFactory;

        let args = Args::parse_from([
            "feature_catalog",
            "--show",
            "feature-001",
            "--list-types",
            "--export",
        ]);
        assert_eq!(args.show.as_deref(), Some("feature-001"));
        assert!(args.list_types && args.export);

        let command = Args::command();
        let show = command
            .get_arguments()
            .find(|arg| arg.get_id() == "show")
            .unwrap();
        assert!(show.get_help().unwrap().to_string().contains("--export"));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
