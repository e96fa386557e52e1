use anyhow::Result;
use quatcursor_config::{AppConfig, ScriptKind};
use quatcursor_source::script::{MotionScript, RandomTumble, ScriptedMotion};
use quatcursor_source::SourceClient;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quatcursor=info".into()),
        )
        .init();

    info!("quatcursor orientation-to-pointer demo starting");

    // Load config.
    let config = quatcursor_config::load_config().unwrap_or_else(|e| {
        warn!(?e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Construction validates all parameters; bad config fails here.
    let mut pipeline = config.build_pipeline()?;
    let tilt_mapper = config.build_bounded_mapper()?;

    let script: Box<dyn MotionScript + Send> = match config.source.script {
        ScriptKind::Sinusoidal => Box::new(ScriptedMotion::default()),
        ScriptKind::RandomTumble => Box::new(RandomTumble::new(config.source.seed)),
    };
    let source = SourceClient::start(script, config.source.sample_rate_hz);

    info!(
        rate_hz = config.source.sample_rate_hz,
        script = ?config.source.script,
        "Source running"
    );

    let period = Duration::from_secs_f32(1.0 / config.source.sample_rate_hz.max(1.0));
    let mut interval = tokio::time::interval(period);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut frame_count: u64 = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let sample = source.orientation().quaternion;

                match pipeline.process(sample) {
                    Ok(cursor) => {
                        frame_count += 1;
                        if frame_count % 60 == 0 {
                            // Same sample already passed normalization in
                            // process(), so the mapper cannot fail on it.
                            let tilt = tilt_mapper.map(sample).unwrap_or_default();
                            info!(
                                cursor_x = cursor.x,
                                cursor_y = cursor.y,
                                tilt_x = tilt.x,
                                tilt_y = tilt.y,
                                "Pointer heartbeat"
                            );
                        }
                    }
                    Err(e) => {
                        tracing::trace!(?e, "Skipping degenerate sample");
                    }
                }
            }
            _ = &mut ctrl_c => {
                info!("Shutting down");
                break;
            }
        }
    }

    quatcursor_config::save_config(&config)?;
    Ok(())
}
