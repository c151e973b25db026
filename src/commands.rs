use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rewrites obligation text in canonical indentation
    Normalize {
        #[arg(help = "Obligation text file (reads stdin when omitted)")]
        path: Option<PathBuf>,
    },
    /// Shows the decoded obligation tree
    Show {
        #[arg(help = "Obligation text file (reads stdin when omitted)")]
        path: Option<PathBuf>,

        #[arg(long, help = "Print the tree as JSON")]
        json: bool,

        #[arg(long, help = "Include node ids in the outline")]
        ids: bool,
    },
    /// Validates an obligation record and prints its preview
    Check {
        #[arg(help = "Obligation record as JSON")]
        path: PathBuf,

        #[arg(long, help = "Treat the record as a copy that needs a new title")]
        duplicate: bool,
    },
    /// Lists the predefined obligation elements
    Elements,
}
