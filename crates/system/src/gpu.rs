use perfmon_core::{state::GpuReading, SampleError};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

/// A vendor command-line query that prints GPU utilization as a bare integer.
#[derive(Debug, Clone)]
pub struct GpuQuery {
    program: String,
    args:    Vec<String>,
    timeout: Duration,
}

impl GpuQuery {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the query once.  The child is killed if it outlives the timeout.
    pub async fn run(&self) -> Result<u32, SampleError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let output = match time::timeout(self.timeout, cmd.output()).await {
            Err(_) => return Err(SampleError::Timeout(self.timeout)),
            Ok(Err(e)) => {
                return Err(SampleError::Launch {
                    program: self.program.clone(),
                    reason:  e.to_string(),
                })
            }
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            debug!("'{}' exited with {}", self.program, output.status);
        }

        parse_gpu_output(&String::from_utf8_lossy(&output.stdout))
    }
}

impl Default for GpuQuery {
    /// `nvidia-smi --query-gpu=utilization.gpu --format=csv,noheader,nounits`
    fn default() -> Self {
        Self::new(
            "nvidia-smi",
            vec![
                "--query-gpu=utilization.gpu".to_string(),
                "--format=csv,noheader,nounits".to_string(),
            ],
            Duration::from_secs(2),
        )
    }
}

/// Parse the tool's stdout.  Only a single plain integer is accepted; empty
/// output, `N/A`, units, or one line per GPU are all failures.
pub fn parse_gpu_output(raw: &str) -> Result<u32, SampleError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| SampleError::Parse(trimmed.to_string()))
}

/// Spawn a Tokio task that runs `query` every `period` and publishes the
/// latest result on a single-slot channel.
///
/// The receiver starts at [`GpuReading::Pending`].  Readers never wait on the
/// subprocess; they see whatever was published last.  The task stops once
/// every receiver has been dropped.
pub fn spawn_gpu_worker(query: GpuQuery, period: Duration) -> watch::Receiver<GpuReading> {
    let (tx, rx) = watch::channel(GpuReading::Pending);

    tokio::spawn(async move {
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut healthy = true;

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = tx.closed() => break,
            }

            let reading = match query.run().await {
                Ok(pct) => {
                    if !healthy {
                        info!("GPU query '{}' recovered", query.program());
                        healthy = true;
                    }
                    GpuReading::Ready(pct)
                }
                Err(e) => {
                    if healthy {
                        warn!("GPU query '{}' failed: {e}", query.program());
                        healthy = false;
                    }
                    GpuReading::Unavailable(e.to_string())
                }
            };

            if tx.send(reading).is_err() {
                break; // all receivers dropped
            }
        }

        debug!("GPU worker stopped");
    });

    rx
}
