pub mod script;

use glam::Quat;
use script::MotionScript;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// One orientation sample from a source.
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    pub quaternion: Quat,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            quaternion: Quat::IDENTITY,
        }
    }
}

/// Commands sent to the sampling task.
enum SourceCommand {
    Restart,
}

/// Runs a motion script on a background task and publishes the latest
/// orientation through a watch channel.
///
/// The consumer polls `orientation()` at its own cadence; no samples
/// queue up. One client per tracked stream.
pub struct SourceClient {
    orientation_rx: watch::Receiver<Orientation>,
    command_tx: mpsc::UnboundedSender<SourceCommand>,
    _task: tokio::task::JoinHandle<()>,
}

impl SourceClient {
    /// Spawn the sampling task at the given rate.
    pub fn start<S>(script: S, sample_rate_hz: f32) -> Self
    where
        S: MotionScript + Send + 'static,
    {
        let (orientation_tx, orientation_rx) = watch::channel(Orientation::default());
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(sample_loop(
            script,
            orientation_tx,
            command_rx,
            sample_rate_hz,
        ));

        Self {
            orientation_rx,
            command_tx,
            _task: task,
        }
    }

    /// Latest published orientation (non-blocking).
    pub fn orientation(&self) -> Orientation {
        *self.orientation_rx.borrow()
    }

    /// Rewind the script to its initial state.
    pub fn restart(&self) {
        let _ = self.command_tx.send(SourceCommand::Restart);
    }
}

async fn sample_loop<S: MotionScript>(
    mut script: S,
    orientation_tx: watch::Sender<Orientation>,
    mut command_rx: mpsc::UnboundedReceiver<SourceCommand>,
    sample_rate_hz: f32,
) {
    let period = Duration::from_secs_f32(1.0 / sample_rate_hz.max(1.0));
    let mut interval = tokio::time::interval(period);
    let mut t = 0.0f32;
    let mut sample_count: u64 = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let quaternion = script.sample(t);
                t += period.as_secs_f32();

                if orientation_tx.send(Orientation { quaternion }).is_err() {
                    // All receivers dropped; nothing left to feed.
                    break;
                }

                sample_count += 1;
                if sample_count % 1000 == 0 {
                    tracing::debug!(sample_count, "Orientation samples published");
                }
            }
            Some(cmd) = command_rx.recv() => {
                match cmd {
                    SourceCommand::Restart => {
                        t = 0.0;
                        script.restart();
                        tracing::info!("Motion script restarted");
                    }
                }
            }
        }
    }
}
