use colored::Colorize;
use tracing::{debug, info};

use alpha_id3::prelude::*;
use alpha_id3::{logging, ConfigError};

use std::io::{self, BufRead, Write};
use std::process::ExitCode;


const USAGE: &str = "[USAGE] ./alpha-id3 [config file (json)]";


fn main() -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("{err}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bold().red());
            ExitCode::FAILURE
        },
    }
}


fn run() -> alpha_id3::Result<()> {
    let args = std::env::args().collect::<Vec<_>>();
    debug!("Command line args are {args:?}");

    let path = args.get(1)
        .ok_or_else(|| ConfigError::Invalid { message: USAGE.to_string() })?;
    let config = Config::from_file(path)?;

    let train = DatasetReader::new()
        .file(&config.data_file)
        .project(&config.data_project_columns)
        .target_feature(&config.target_attribute)
        .read()?;
    let test = DatasetReader::new()
        .file(&config.test_file)
        .project(&config.data_project_columns)
        .target_feature(&config.target_attribute)
        .read()?;

    let alpha = prompt_alpha()?;

    let id3 = Id3Builder::new(&train)
        .target(&config.target_attribute)
        .alpha(alpha)
        .build()?;
    info!("\n{id3}");
    let tree = id3.fit(&train)?;

    for rule in tree.rules() {
        println!("{rule}");
    }

    let target = &config.target_attribute;
    let report = Report::new(
        evaluate(&tree, &train, target)?,
        evaluate(&tree, &test, target)?,
    );
    println!("{report}");

    if let Some(dot_file) = &config.dot_file {
        tree.to_dot_file(dot_file)?;
        info!("Wrote the tree to {}", dot_file.display());
    }
    Ok(())
}


/// Ask for the exponent of the generalized entropy on stdin.
fn prompt_alpha() -> alpha_id3::Result<f64> {
    print!("Alpha value: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let input = line.trim();
    input.parse::<f64>()
        .map_err(|_| Error::InvalidAlphaInput { input: input.to_string() })
}
