//! Per-render telemetry: stage timings reported to an optional observer.

use std::fmt;
use std::time::{Duration, Instant};

use cosmos_raster::RasterImage;

/// Pipeline stages, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Texture,
    Lighting,
    Clouds,
    Rings,
    Atmosphere,
    Compose,
    Resize,
}

impl Stage {
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Texture => "texture",
            Stage::Lighting => "lighting",
            Stage::Clouds => "clouds",
            Stage::Rings => "rings",
            Stage::Atmosphere => "atmosphere",
            Stage::Compose => "compose",
            Stage::Resize => "resize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One completed stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageEvent {
    pub stage: Stage,
    pub duration: Duration,
}

/// Receives stage events as they complete.
pub trait StageObserver: Send {
    fn on_stage(&mut self, event: &StageEvent);
}

impl<F> StageObserver for F
where
    F: FnMut(&StageEvent) + Send,
{
    fn on_stage(&mut self, event: &StageEvent) {
        self(event)
    }
}

/// Carries the observer and the events of the render in progress.
///
/// A context can be reused across renders; each render starts with an
/// empty event list.
#[derive(Default)]
pub struct GenerationContext {
    observer: Option<Box<dyn StageObserver>>,
    events: Vec<StageEvent>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: impl StageObserver + 'static) -> Self {
        Self {
            observer: Some(Box::new(observer)),
            events: Vec::new(),
        }
    }

    /// Events recorded so far in the current render.
    pub fn events(&self) -> &[StageEvent] {
        &self.events
    }

    pub(crate) fn begin(&mut self) {
        self.events.clear();
    }

    pub(crate) fn take_events(&mut self) -> Vec<StageEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run `f` as `stage`, recording its duration whether or not it fails.
    pub(crate) fn time<T, E>(
        &mut self,
        stage: Stage,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let start = Instant::now();
        let result = f();
        self.record(StageEvent {
            stage,
            duration: start.elapsed(),
        });
        result
    }

    fn record(&mut self, event: StageEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_stage(&event);
        }
        self.events.push(event);
    }
}

impl fmt::Debug for GenerationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationContext")
            .field("observer", &self.observer.is_some())
            .field("events", &self.events)
            .finish()
    }
}

/// A finished render.
#[derive(Clone, Debug)]
pub struct Rendered {
    pub image: RasterImage,
    /// Stages in execution order.
    pub stages: Vec<StageEvent>,
}

impl Rendered {
    pub fn total_duration(&self) -> Duration {
        self.stages.iter().map(|e| e.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_time_records_and_notifies() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut ctx = GenerationContext::with_observer(move |event: &StageEvent| {
            sink.lock().unwrap().push(event.stage);
        });

        let value: Result<u32, ()> = ctx.time(Stage::Texture, || Ok(7));
        assert_eq!(value, Ok(7));
        let failed: Result<u32, &str> = ctx.time(Stage::Lighting, || Err("boom"));
        assert!(failed.is_err());

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Stage::Texture, Stage::Lighting],
            "failed stages are still reported"
        );
        assert_eq!(ctx.events().len(), 2);
    }

    #[test]
    fn test_begin_clears_previous_events() {
        let mut ctx = GenerationContext::new();
        let _: Result<(), ()> = ctx.time(Stage::Resize, || Ok(()));
        ctx.begin();
        assert!(ctx.events().is_empty());
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Atmosphere.to_string(), "atmosphere");
        assert_eq!(Stage::Compose.name(), "compose");
    }
}
