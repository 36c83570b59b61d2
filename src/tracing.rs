use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Subscriber setup for binaries. The library itself never installs one.
pub struct Tracing;

impl Tracing {
    pub fn setup(name: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::Layer::new()
                    .with_writer(std::io::stderr.with_max_level(Level::INFO))
                    .with_filter(LevelFilter::INFO),
            )
            .try_init()?;

        ::tracing::info!("{name} started");
        Ok(())
    }
}
