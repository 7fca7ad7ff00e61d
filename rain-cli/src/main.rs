//! Rain CLI - inspect daily rainfall records and export heatmap draw plans.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rain-cli",
    version,
    about = "Daily rainfall calendar heatmap toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: rain_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Running {:?}", cli.command);
    rain_cmd::run(cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rain_cmd::Command;

    #[test]
    fn parses_project_arguments() {
        let cli = Cli::try_parse_from([
            "rain-cli", "project", "-i", "rain.json", "-y", "2018", "--start", "2018-03-01",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Project {
                input: "rain.json".to_string(),
                year: 2018,
                config: None,
                output: None,
                start: Some("2018-03-01".to_string()),
                end: None,
                pretty: true,
            }
        );
    }

    #[test]
    fn year_is_required_for_project() {
        assert!(Cli::try_parse_from(["rain-cli", "project", "-i", "rain.json"]).is_err());
    }
}
