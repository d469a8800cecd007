use anyhow::{Result, anyhow};
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static LOG_SENDER: std::sync::OnceLock<Sender<String>> = std::sync::OnceLock::new();

/// Events logged from the binary's own `main`.
const BINARY_TARGET: &str = "incident_filters";

const CAPTURED_TARGETS: [&str; 4] = [
    "incident_filters::application",
    "incident_filters::domain::services",
    "incident_filters::infrastructure",
    "incident_filters::presentation",
];

/// Install the global subscriber. Captured lines arrive on the returned channel.
pub fn init_log_capture() -> Result<Receiver<String>> {
    let (tx, rx) = channel();
    LOG_SENDER
        .set(tx.clone())
        .map_err(|_| anyhow!("log capture already initialized"))?;

    let filter = if cfg!(feature = "verbose-logging") {
        LevelFilter::TRACE
    } else {
        LevelFilter::DEBUG
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(CaptureLayer { sender: tx })
        .try_init()?;

    Ok(rx)
}

struct CaptureLayer {
    sender: Sender<String>,
}

fn is_captured(target: &str) -> bool {
    target == BINARY_TARGET
        || CAPTURED_TARGETS
            .iter()
            .any(|prefix| target.starts_with(prefix))
}

impl<S> Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();
        if !is_captured(metadata.target()) {
            return;
        }

        let mut visitor = LogVisitor {
            message: String::new(),
        };
        event.record(&mut visitor);

        if !visitor.message.is_empty() {
            let _ = self
                .sender
                .send(format!("[{}] {}", metadata.level(), visitor.message));
        }
    }
}

struct LogVisitor {
    message: String,
}

impl tracing::field::Visit for LogVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}
