//! Background rendering of many bodies on a worker pool.
//!
//! Jobs go through a bounded queue to named worker threads; finished images
//! come back through a bounded result channel. Cancelling a job skips it if
//! it has not started and drops its result otherwise; a running render is
//! never interrupted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, bounded};
use dashmap::DashMap;

use crate::context::{GenerationContext, StageEvent};
use crate::descriptor::BodyDescriptor;
use crate::error::GenerationError;
use crate::generator::PlanetGenerator;
use cosmos_raster::RasterImage;

/// Caller-chosen job identifier.
pub type JobId = u64;

/// A queued render.
#[derive(Clone, Debug)]
pub struct RenderJob {
    pub id: JobId,
    pub descriptor: BodyDescriptor,
}

/// A finished job. `result` carries the image or the render error.
#[derive(Debug)]
pub struct RenderOutcome {
    pub id: JobId,
    pub descriptor: BodyDescriptor,
    pub result: Result<RasterImage, GenerationError>,
    pub stages: Vec<StageEvent>,
}

impl RenderOutcome {
    pub fn total_duration(&self) -> Duration {
        self.stages.iter().map(|e| e.duration).sum()
    }
}

struct QueuedJob {
    job: RenderJob,
    cancelled: Arc<AtomicBool>,
}

/// Errors from setting up the pool.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to spawn render worker: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Renders descriptors on a pool of worker threads.
///
/// Each worker owns its generator and context, so results are identical
/// to rendering the same descriptors one by one.
pub struct BatchRenderer {
    job_sender: Sender<QueuedJob>,
    result_receiver: Receiver<RenderOutcome>,
    pending: Arc<DashMap<JobId, Arc<AtomicBool>>>,
    in_flight: Arc<AtomicU64>,
}

impl BatchRenderer {
    /// Start `thread_count` workers with a job queue of `queue_capacity`
    /// and a result channel of `result_capacity`.
    pub fn new(
        thread_count: usize,
        queue_capacity: usize,
        result_capacity: usize,
    ) -> Result<Self, BatchError> {
        let (job_sender, job_receiver) = bounded::<QueuedJob>(queue_capacity.max(1));
        let (result_sender, result_receiver) = bounded::<RenderOutcome>(result_capacity.max(1));
        let in_flight = Arc::new(AtomicU64::new(0));
        let pending: Arc<DashMap<JobId, Arc<AtomicBool>>> = Arc::new(DashMap::new());

        for index in 0..thread_count.max(1) {
            let receiver = job_receiver.clone();
            let sender = result_sender.clone();
            let in_flight = Arc::clone(&in_flight);
            let pending = Arc::clone(&pending);

            std::thread::Builder::new()
                .name(format!("render-worker-{index}"))
                .spawn(move || {
                    let generator = PlanetGenerator::new();
                    let mut ctx = GenerationContext::new();
                    while let Ok(queued) = receiver.recv() {
                        if queued.cancelled.load(Ordering::Relaxed) {
                            in_flight.fetch_sub(1, Ordering::Relaxed);
                            continue;
                        }

                        let id = queued.job.id;
                        let (result, stages) =
                            match generator.render(&queued.job.descriptor, &mut ctx) {
                                Ok(rendered) => (Ok(rendered.image), rendered.stages),
                                Err(err) => (Err(err), ctx.events().to_vec()),
                            };
                        pending.remove(&id);

                        if !queued.cancelled.load(Ordering::Relaxed) {
                            let _ = sender.send(RenderOutcome {
                                id,
                                descriptor: queued.job.descriptor,
                                result,
                                stages,
                            });
                        }
                        in_flight.fetch_sub(1, Ordering::Relaxed);
                    }
                })?;
        }

        Ok(Self {
            job_sender,
            result_receiver,
            pending,
            in_flight,
        })
    }

    /// One worker per CPU core.
    pub fn with_defaults() -> Result<Self, BatchError> {
        let threads = num_cpus::get().max(1);
        Self::new(threads, threads * 4, threads * 4)
    }

    /// Queue `job`. Returns `Err(job)` if the queue is full.
    #[allow(clippy::result_large_err)]
    pub fn submit(&self, job: RenderJob) -> Result<(), RenderJob> {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.pending.insert(job.id, Arc::clone(&cancelled));
        self.in_flight.fetch_add(1, Ordering::Relaxed);

        self.job_sender
            .try_send(QueuedJob { job, cancelled })
            .map_err(|e| {
                self.in_flight.fetch_sub(1, Ordering::Relaxed);
                let job = e.into_inner().job;
                self.pending.remove(&job.id);
                job
            })
    }

    /// Cancel a queued or running job. A running render still completes,
    /// but its result is dropped.
    pub fn cancel(&self, id: JobId) {
        if let Some((_, cancelled)) = self.pending.remove(&id) {
            cancelled.store(true, Ordering::Relaxed);
        }
    }

    /// Collect every finished job without blocking.
    pub fn drain_results(&self) -> Vec<RenderOutcome> {
        self.result_receiver.try_iter().collect()
    }

    /// Wait up to `timeout` for the next finished job.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<RenderOutcome> {
        self.result_receiver.recv_timeout(timeout).ok()
    }

    /// Jobs queued or rendering.
    pub fn in_flight_count(&self) -> u64 {
        self.in_flight.load(Ordering::Relaxed)
    }

    /// `true` while job `id` is queued or rendering.
    pub fn is_pending(&self, id: JobId) -> bool {
        self.pending.contains_key(&id)
    }
}
