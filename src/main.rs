use clap::{CommandFactory, Parser};
use tf_arm::{
    cli::Cli, config::Config, error::TfArmError, logging::init_logging, output::OutputWriter,
    report::AnalysisReport, terraform::TerraformState,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    if cli.state_file.is_none() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = Config::from_cli(cli)?;

    log::debug!("Configuration: {:?}", config);

    let state = TerraformState::from_file(&config.state_file).map_err(TfArmError::from)?;
    let report = AnalysisReport::from_state(config.display_path.as_str(), &state);

    let writer = OutputWriter::new(config.output_format, config.no_color);
    writer.write(&report).map_err(TfArmError::from)?;

    if config.exit_code != 0 && report.has_migrateable() {
        log::debug!(
            "{} resources can migrate to ARM64, exiting with code {}",
            report.summary.migrateable,
            config.exit_code
        );
        std::process::exit(config.exit_code);
    }

    Ok(())
}
