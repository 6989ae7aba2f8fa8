#![deny(unsafe_code)]

use std::process::ExitCode;
use std::sync::Arc;

use command_line_logger::{CONSOLE_CHANNEL, CommandEvent, CommandFinished, CommandStarting, Provider};
use logging::{LogManager, Verbosity, init_tracing, payload};
use logging_sink::StreamOutput;
use serde_json::json;

const COMMAND: &str = "demo";

fn main() -> ExitCode {
    let verbosity = Verbosity::from_env().unwrap_or_default();

    let provider = Provider::default();
    let mut manager = LogManager::default();
    provider.register(&mut manager);
    let subscriber = provider.boot();

    let logger = match manager.channel(CONSOLE_CHANNEL) {
        Ok(logger) => logger,
        Err(error) => {
            eprintln!("console-logger-demo: {error}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(logger.clone());

    subscriber.on_event(&CommandEvent::Starting(CommandStarting::new(
        COMMAND,
        Arc::new(StreamOutput::stdout(verbosity)),
    )));

    logger.debug("resolved configuration", payload(json!({"verbosity": verbosity.as_str()})));
    logger.info("starting import", payload(json!(null)));
    tracing::info!(target: "demo::import", rows = 128_u64, "batch imported");
    logger.notice("cache warmed", payload(json!({"entries": 12})));
    tracing::warn!(target: "demo::import", "skipped malformed row");
    logger.error(
        "upload failed",
        payload(json!({"file": "report.csv", "retries": [1, 2, 3]})),
    );
    logger.critical("disk almost full", payload(json!(null)));

    subscriber.on_event(&CommandEvent::Finished(CommandFinished::new(COMMAND, 0)));
    logger.emergency("after the command", payload(json!(null)));

    ExitCode::SUCCESS
}
