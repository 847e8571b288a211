use crate::demo::{run_assess, run_demo, run_factors, run_records, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fair_chance::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fair Chance Assessment",
    about = "Score Article 23-A individualized assessments from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an assessment submission stored as JSON
    Assess(AssessArgs),
    /// Review criminal and restorative records stored as JSON
    Records(AssessArgs),
    /// List the eight Article 23-A factors with citations and guidance
    Factors,
    /// Walk a scripted questionnaire through to a finished report
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Records(args) => run_records(args),
        Command::Factors => {
            run_factors();
            Ok(())
        }
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["fair-chance-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn assess_requires_an_input_path() {
        assert!(Cli::try_parse_from(["fair-chance-api", "assess"]).is_err());

        let cli = Cli::try_parse_from([
            "fair-chance-api",
            "assess",
            "--input",
            "submission.json",
            "--json",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.input.to_string_lossy(), "submission.json");
                assert!(args.json);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["fair-chance-api", "serve", "--port", "8088"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(8088)),
            other => panic!("expected serve command, got {other:?}"),
        }
    }

    #[test]
    fn records_reads_an_input_file() {
        let cli = Cli::try_parse_from(["fair-chance-api", "records", "--input", "records.json"])
            .expect("parses");
        match cli.command {
            Some(Command::Records(args)) => {
                assert_eq!(args.input.to_string_lossy(), "records.json");
                assert!(!args.json);
            }
            other => panic!("expected records command, got {other:?}"),
        }
    }
}
