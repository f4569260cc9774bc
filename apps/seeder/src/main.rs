//! UTI demo seeder - command line entry point
//!
//! `uti-demo-seed` (or `uti-demo-seed seed`) creates the demo patients and
//! writes the run manifest. `payloads` previews the request bodies offline and
//! `show` prints the manifest from the last run.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use uti_demo_fhir_client::FhirClient;
use uti_demo_seeder::{logging, preview_payloads, RunManifest, Seeder, SeederConfig, SeederSettings};

#[derive(Parser, Debug)]
#[command(name = "uti-demo-seed", version, about = "Seed UTI demo patients into a FHIR server")]
struct Cli {
    /// Configuration file (defaults to ./seeder.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the FHIR server base URL
    #[arg(long, global = true)]
    fhir_base: Option<String>,

    /// Override the manifest output path
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Create one Patient per demo case and write the manifest (default)
    Seed,
    /// Print the Patient payloads without contacting the server
    Payloads,
    /// Print the manifest written by the last run
    Show,
}

impl Cli {
    fn command(&self) -> Command {
        self.command.unwrap_or(Command::Seed)
    }
}

/// Defaults, then the config file, then `SEEDER__*` variables, then flags.
fn resolve_config(cli: &Cli) -> anyhow::Result<SeederConfig> {
    let mut config =
        SeederConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(fhir_base) = &cli.fhir_base {
        config.fhir_base = fhir_base.clone();
    }
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let _logging_guard =
        logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command() {
        Command::Seed => {
            let cases = config
                .demo_cases()
                .context("Failed to load demo case catalogue")?;
            let client = FhirClient::new(&config.fhir_base, config.timeout())
                .context("Failed to create FHIR client")?;

            let seeder = Seeder::new(client, SeederSettings::from(&config), cases);
            seeder.run(&mut out).await?;
        }
        Command::Payloads => {
            let cases = config
                .demo_cases()
                .context("Failed to load demo case catalogue")?;
            preview_payloads(&cases, &config.extension_url, &mut out)?;
        }
        Command::Show => match RunManifest::load(&config.output_path)? {
            Some(manifest) => writeln!(out, "{}", manifest.to_pretty_json()?)?,
            None => writeln!(
                out,
                "No manifest at {}; run `uti-demo-seed seed` first.",
                config.output_path.display()
            )?,
        },
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn bare_invocation_seeds() {
        let cli = Cli::try_parse_from(["uti-demo-seed"]).unwrap();
        assert_eq!(cli.command(), Command::Seed);
        assert!(cli.config.is_none());
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from(["uti-demo-seed", "payloads"]).unwrap();
        assert_eq!(cli.command(), Command::Payloads);

        let cli = Cli::try_parse_from(["uti-demo-seed", "show", "--output", "m.json"]).unwrap();
        assert_eq!(cli.command(), Command::Show);
        assert_eq!(cli.output, Some(PathBuf::from("m.json")));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["uti-demo-seed", "delete"]).is_err());
    }

    #[test]
    fn flags_win_over_file_and_environment() {
        // Only this test touches SEEDER__OUTPUT_PATH.
        let file = write_toml(
            "fhir_base = \"http://from-file/fhir\"\noutput_path = \"file.json\"\ntimeout_seconds = 7\n",
        );
        let path = file.path().to_string_lossy().into_owned();

        std::env::set_var("SEEDER__OUTPUT_PATH", "env.json");
        let from_env = Cli::try_parse_from(["uti-demo-seed", "--config", path.as_str()])
            .map_err(anyhow::Error::from)
            .and_then(|cli| resolve_config(&cli));
        let from_flags = Cli::try_parse_from([
            "uti-demo-seed",
            "--config",
            path.as_str(),
            "--fhir-base",
            "http://from-flag/fhir",
            "--output",
            "flag.json",
        ])
        .map_err(anyhow::Error::from)
        .and_then(|cli| resolve_config(&cli));
        std::env::remove_var("SEEDER__OUTPUT_PATH");

        let from_env = from_env.unwrap();
        assert_eq!(from_env.fhir_base, "http://from-file/fhir");
        assert_eq!(from_env.output_path, PathBuf::from("env.json"));
        assert_eq!(from_env.timeout_seconds, 7);

        let from_flags = from_flags.unwrap();
        assert_eq!(from_flags.fhir_base, "http://from-flag/fhir");
        assert_eq!(from_flags.output_path, PathBuf::from("flag.json"));
        assert_eq!(from_flags.timeout_seconds, 7);
    }

    #[test]
    fn empty_base_flag_fails_validation() {
        let file = write_toml("");
        let path = file.path().to_string_lossy().into_owned();
        let cli =
            Cli::try_parse_from(["uti-demo-seed", "--config", path.as_str(), "--fhir-base", " "])
                .unwrap();

        let err = resolve_config(&cli).unwrap_err();
        assert!(err.to_string().contains("fhir_base"));
    }
}
