use std::path::PathBuf;

use argh::FromArgs;

mod compare;
mod viz;

use compare::{compare, CompareConfig};
use imdiff_imgproc::metrics::truncate_decimal;

#[derive(FromArgs)]
/// Compare a computed image against a reference image, visualize the
/// per-pixel error and report rMSE and relMSE.
struct Args {
    /// display title for the candidate image
    #[argh(positional)]
    candidate_title: String,

    /// path to the candidate image
    #[argh(positional)]
    candidate_path: PathBuf,

    /// display title for the reference image
    #[argh(positional)]
    reference_title: String,

    /// path to the reference image
    #[argh(positional)]
    reference_path: PathBuf,
}

impl From<Args> for CompareConfig {
    fn from(args: Args) -> Self {
        CompareConfig {
            candidate_title: args.candidate_title,
            candidate_path: args.candidate_path,
            reference_title: args.reference_title,
            reference_path: args.reference_path,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    let config = CompareConfig::from(args);

    let output = compare(&config)?;

    log::info!("rMSE={}", truncate_decimal(output.rmse, 4));
    log::info!("relMSE={}", truncate_decimal(output.relative_rmse, 4));

    viz::show(&config, &output)?;

    Ok(())
}
