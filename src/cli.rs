//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "timecorp", about = "temporal corpus analysis tools.")]
/// Holds every command that is callable by the `timecorp` command.
pub enum Timecorp {
    #[structopt(about = "Per-label half-link reports with sentence context")]
    Report(Report),
    #[structopt(about = "Check annotator files and generate the pairwise agreement script")]
    Agreement(Agreement),
    #[structopt(about = "Flatten the corpus into per-document token files")]
    Flatten(Flatten),
    #[structopt(about = "Convert a feature-example file to spreadsheet/Weka formats")]
    Spreadsheet(Spreadsheet),
}

#[derive(Debug, StructOpt)]
/// Report command and parameters.
///
/// For each of the six relation labels, writes `LABEL_N.txt` in the
/// destination directory with the context block of every entity having more
/// than N half-links of that label.
pub struct Report {
    #[structopt(parse(from_os_str), help = "corpus XML file")]
    pub corpus: PathBuf,
    #[structopt(parse(from_os_str), help = "report destination directory")]
    pub dst: PathBuf,
    #[structopt(help = "minimum half-link count (exclusive)", default_value = "0")]
    pub threshold: u64,
}

#[derive(Debug, StructOpt)]
/// Agreement command and parameters.
pub struct Agreement {
    #[structopt(parse(from_os_str), help = "directory of document.annotator files")]
    pub anno_dir: PathBuf,
    #[structopt(parse(from_os_str), help = "directory of original document.tml files")]
    pub original_dir: PathBuf,
    #[structopt(parse(from_os_str), help = "directory for agreement tool output")]
    pub agreement_out_dir: PathBuf,
    #[structopt(parse(from_os_str), help = "path to the agreement scoring tool")]
    pub tool_path: PathBuf,
    #[structopt(parse(from_os_str), help = "path of the generated shell script")]
    pub script_path: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Flatten command and parameters.
pub struct Flatten {
    #[structopt(parse(from_os_str), help = "corpus XML file")]
    pub corpus: PathBuf,
    #[structopt(parse(from_os_str), help = "destination directory for token files")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Spreadsheet command and parameters. Every output is optional.
pub struct Spreadsheet {
    #[structopt(parse(from_os_str), help = "input feature-example file")]
    pub examples: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "all-cases",
        help = "write a tab-separated dump of all examples here"
    )]
    pub all_cases: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "profiles",
        help = "profile definition file (name|space-separated-feature-list per line)"
    )]
    pub profiles: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "profiles-out",
        help = "directory for per-profile label distributions"
    )]
    pub profiles_out: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "weka",
        help = "write a Weka ARFF file here"
    )]
    pub weka: Option<PathBuf>,
}
