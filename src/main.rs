//! # Timecorp
//!
//! Analysis tools for temporal-relation annotated corpora: half-link
//! reports with sentence context, inter-annotator consistency checking,
//! corpus flattening for external taggers, and feature-file conversion to
//! spreadsheet/Weka formats.
//!
//! ```sh
//! timecorp 0.1.0
//! temporal corpus analysis tools.
//!
//! USAGE:
//!     timecorp <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     agreement      Check annotator files and generate the pairwise agreement script
//!     flatten        Flatten the corpus into per-document token files
//!     help           Prints this message or the help of the given subcommand(s)
//!     report         Per-label half-link reports with sentence context
//!     spreadsheet    Convert a feature-example file to spreadsheet/Weka formats
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use timecorp::error;
use timecorp::spreadsheet::Outputs;
use timecorp::{agreement, flatten, halflink, spreadsheet};

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Timecorp::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Timecorp::Report(r) => {
            halflink::report::run(&r.corpus, &r.dst, r.threshold)?;
        }
        cli::Timecorp::Agreement(a) => {
            agreement::run(
                &a.anno_dir,
                &a.original_dir,
                &a.agreement_out_dir,
                &a.tool_path,
                &a.script_path,
            )?;
        }
        cli::Timecorp::Flatten(f) => {
            flatten::run(&f.corpus, &f.dst)?;
        }
        cli::Timecorp::Spreadsheet(s) => {
            let outputs = Outputs {
                all_cases: s.all_cases,
                profiles: s.profiles,
                profiles_out: s.profiles_out,
                weka: s.weka,
            };
            spreadsheet::run(&s.examples, &outputs)?;
        }
    };
    Ok(())
}
