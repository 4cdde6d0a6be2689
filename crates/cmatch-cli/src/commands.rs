use anyhow::{Context, Result};
use tracing::warn;

use cmatch_geo::Gazetteer;
use cmatch_model::SynonymTable;

use crate::cli::GenerateArgs;
use crate::pipeline::{GenerateRequest, run_generate};
use crate::prompt::ZipInference;
use crate::report::write_report;
use crate::summary::{print_fields, print_summary};

/// Run the `generate` subcommand. Returns the process exit code.
pub fn run_generate_command(args: &GenerateArgs) -> Result<i32> {
    if args.upload {
        warn!("upload is not implemented; the generated file stays local");
    }

    let lookup = match &args.zip_data {
        Some(path) => Gazetteer::from_path(path)
            .with_context(|| format!("load gazetteer {}", path.display()))?,
        None => Gazetteer::builtin(),
    };

    let inference = if args.infer_zip {
        ZipInference::Always
    } else if args.no_infer_zip {
        ZipInference::Never
    } else {
        ZipInference::Ask
    };

    let request = GenerateRequest {
        input: args.filepath.clone(),
        output: args.output.clone(),
        hash: args.hash,
    };
    let confirm = move |question: &str| inference.confirm(question);

    match run_generate(&request, &lookup, &confirm)? {
        Some(summary) => {
            if let Some(path) = &args.report {
                write_report(&summary, path)?;
            }
            print_summary(&summary);
            Ok(0)
        }
        // Declined zip inference: a graceful stop, not a failure.
        None => Ok(0),
    }
}

/// Run the `fields` subcommand.
pub fn run_fields() -> Result<()> {
    print_fields(&SynonymTable::builtin());
    Ok(())
}
