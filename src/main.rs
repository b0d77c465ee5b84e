//! localizer-gen's main application entry point.
//! Handles command-line argument parsing and drives one generation run.

use localizer_gen::{
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Error, Result},
    format::MessageFormat,
    generator::Generator,
    logger::init_logger,
    renderer::MiniJinjaRenderer,
    scanner::scan,
};
use log::{debug, info};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration and applies command-line overrides
/// 2. Scans the base directory for candidate resource files
/// 3. Generates a unit per locale-neutral, out-of-date resource file
/// 4. Writes all generated units to the output directory
///
/// Without `keep_going` the first failing file aborts the run before anything
/// is written. With it, failures are logged, the remaining units are written
/// and the run fails afterwards.
fn run(args: Args) -> Result<()> {
    let config = load_config(&args.base_dir, args.config.as_deref())?.merge_args(&args);
    debug!("Using {:?}", config);

    let candidates = scan(&args.base_dir, &config.includes[..], &config.excludes[..])?;
    debug!("Found {} candidate file(s)", candidates.len());

    let formatter = MessageFormat::new();
    let renderer = MiniJinjaRenderer::new(config.runtime_crate.as_str());
    let mut generator = Generator::new(&formatter, &renderer, &args.output_dir)
        .with_file_mask(config.file_mask.clone())
        .with_keep_going(config.keep_going);
    generator.generate(&args.base_dir, &candidates)?;

    let written = generator.build()?;
    for path in &written {
        println!("Generated: '{}'", path.display());
    }
    info!(
        "{} unit(s) written to {}.",
        written.len(),
        generator.output_dir().display()
    );

    if !generator.failures().is_empty() {
        return Err(Error::GenerationFailed(generator.failures().len()));
    }
    Ok(())
}
