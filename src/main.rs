use clap::Parser;
use heartbeat_greeter::domain::ports::ConfigProvider;
use heartbeat_greeter::utils::duration::format_duration;
use heartbeat_greeter::utils::{logger, validation::Validate};
use heartbeat_greeter::{
    CliConfig, GreeterTickJob, NamedGreeter, Scheduler, SystemClock, TomlConfig, TracingLogSink,
};
use std::time::Duration;

struct Settings {
    period: Duration,
    max_ticks: Option<u64>,
    job_name: String,
    timer_target: String,
    bean_target: String,
}

fn resolve_settings(cli: &CliConfig) -> heartbeat_greeter::Result<Settings> {
    match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Ok(Settings {
                period: config.period(),
                max_ticks: config.max_ticks(),
                job_name: config.job_name().to_string(),
                timer_target: config.timer_target().to_string(),
                bean_target: config.bean_target().to_string(),
            })
        }
        None => {
            cli.validate()?;
            Ok(Settings {
                period: cli.period(),
                max_ticks: cli.max_ticks(),
                job_name: cli.job_name().to_string(),
                timer_target: "healthcheck".to_string(),
                bean_target: "beanlog".to_string(),
            })
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting heartbeat-greeter");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let job = GreeterTickJob::new(
        SystemClock,
        NamedGreeter::new(),
        TracingLogSink::new(settings.timer_target),
        TracingLogSink::new(settings.bean_target),
    );
    let scheduler = Scheduler::new(job, settings.period).with_max_ticks(settings.max_ticks);

    tracing::info!(
        "⏱️ Job '{}' scheduled every {}",
        settings.job_name,
        format_duration(&settings.period)
    );

    match scheduler.run_until_shutdown().await {
        Ok(()) => {
            tracing::info!("✅ Timer stopped cleanly");
        }
        Err(e) => {
            tracing::error!("❌ Tick failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
