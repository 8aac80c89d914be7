//! Tests for the simulation event handler trait.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use aerorisk_core::events::*;

#[derive(Default)]
struct CountingHandler {
    started: AtomicUsize,
    resampled_rows: AtomicUsize,
    completed_rows: AtomicUsize,
    last_seed: AtomicU64,
}

impl SimulationEventHandler for CountingHandler {
    fn on_simulation_started(&self, event: &SimulationStartedEvent) {
        self.started.fetch_add(1, Ordering::Relaxed);
        self.last_seed.store(event.seed, Ordering::Relaxed);
    }

    fn on_rows_resampled(&self, event: &RowsResampledEvent) {
        self.resampled_rows
            .fetch_add(event.rows_resampled, Ordering::Relaxed);
    }

    fn on_simulation_complete(&self, event: &SimulationCompleteEvent) {
        self.completed_rows.fetch_add(event.rows, Ordering::Relaxed);
    }
}

#[test]
fn test_noop_defaults_compile_and_do_nothing() {
    let handler = NoOpHandler;
    handler.on_simulation_started(&SimulationStartedEvent { rows: 10, seed: 1 });
    handler.on_rows_resampled(&RowsResampledEvent {
        rows_resampled: 1,
        total_redraws: 2,
    });
    handler.on_simulation_complete(&SimulationCompleteEvent {
        rows: 10,
        seed: 1,
        duration_ms: 0,
    });
}

#[test]
fn test_handler_is_usable_as_shared_trait_object() {
    let counting = Arc::new(CountingHandler::default());
    let handler: Arc<dyn SimulationEventHandler> = counting.clone();

    handler.on_simulation_started(&SimulationStartedEvent { rows: 5, seed: 77 });
    handler.on_rows_resampled(&RowsResampledEvent {
        rows_resampled: 2,
        total_redraws: 3,
    });
    handler.on_simulation_complete(&SimulationCompleteEvent {
        rows: 5,
        seed: 77,
        duration_ms: 4,
    });

    assert_eq!(counting.started.load(Ordering::Relaxed), 1);
    assert_eq!(counting.last_seed.load(Ordering::Relaxed), 77);
    assert_eq!(counting.resampled_rows.load(Ordering::Relaxed), 2);
    assert_eq!(counting.completed_rows.load(Ordering::Relaxed), 5);
}
