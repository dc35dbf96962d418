use clap::Parser;
use file_match::audit::{ConsoleSink, LogFileSink, MultiSink};
use file_match::{cli, config, error, reconciler};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use reconciler::MatchJob;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run { spreadsheet, source, destination, threshold, log_file, report } => {
            let threshold = config::validate_threshold(threshold.unwrap_or(config.score_threshold))?;
            let log_file = log_file.unwrap_or_else(|| config.log_file.clone());

            if cli.verbose {
                eprintln!("閾値: {}", threshold);
                eprintln!("ログ: {}", log_file.display());
            }

            let job = MatchJob {
                spreadsheet,
                source_dir: source,
                destination,
                threshold,
            };

            let mut sink = MultiSink::new()
                .with(LogFileSink::open(&log_file)?)
                .with(ConsoleSink::stdout());

            let result = reconciler::run(&job, &mut sink)?;

            if cli.verbose {
                eprintln!("✔ {}件中{}件一致", result.total_count(), result.matched_count);
            }

            if let Some(report_path) = report {
                let json = serde_json::to_string_pretty(&result)?;
                std::fs::write(&report_path, json)?;
                if cli.verbose {
                    eprintln!("✔ 結果を保存: {}", report_path.display());
                }
            }
        }

        Commands::Config { set_threshold, show } => {
            let mut config = config;

            if let Some(threshold) = set_threshold {
                config.set_score_threshold(threshold)?;
                println!("✔ 閾値を設定しました: {}", threshold);
            }

            if show || set_threshold.is_none() {
                println!("設定:");
                println!("  閾値: {}", config.score_threshold);
                println!("  ログファイル: {}", config.log_file.display());
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
