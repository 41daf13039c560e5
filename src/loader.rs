//! Start-up fetch scheduling.
//!
//! Attaching a [`FetchScheduler`] issues exactly one fetch per category on a
//! dedicated worker thread running a current-thread tokio runtime. The three
//! fetches run concurrently and each result is handed to the delivery
//! callback as soon as it resolves. Detaching clears a liveness flag so that
//! results arriving afterwards are dropped instead of delivered.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::model::{Category, ProductRecord};
use crate::provider::{FetchError, ProductProvider};

/// Result of one category fetch, tagged with the round that issued it.
#[derive(Debug)]
pub struct LoadEvent {
    pub generation: u64,
    pub category: Category,
    pub result: Result<Vec<ProductRecord>, FetchError>,
}

/// One round of the three start-up fetches.
pub struct FetchScheduler {
    generation: u64,
    alive: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl FetchScheduler {
    /// Schedules one fetch per category.
    ///
    /// `deliver` is called from the worker thread once per resolved fetch
    /// while the scheduler is attached. Returning `false` (receiver gone)
    /// detaches the scheduler.
    pub fn attach<F>(
        provider: Arc<dyn ProductProvider>,
        generation: u64,
        deliver: F,
    ) -> io::Result<Self>
    where
        F: Fn(LoadEvent) -> bool + Send + Sync + 'static,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let alive = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&alive);

        info!(generation, source = %provider.describe(), "scheduling product fetches");

        let worker = thread::Builder::new()
            .name(format!("stockview-fetch-{}", generation))
            .spawn(move || {
                runtime.block_on(async move {
                    let provider = &provider;
                    let flag = &flag;
                    let deliver = &deliver;
                    let fetches = Category::ALL.into_iter().map(|category| async move {
                        let t0 = Instant::now();
                        let result = provider.fetch(category).await;
                        let elapsed_ms = t0.elapsed().as_millis() as u64;
                        match &result {
                            Ok(items) => debug!(
                                generation,
                                %category,
                                items = items.len(),
                                elapsed_ms,
                                "fetch resolved"
                            ),
                            Err(e) => warn!(generation, %category, elapsed_ms, error = %e, "fetch failed"),
                        }

                        if !flag.load(Ordering::Acquire) {
                            debug!(generation, %category, "scheduler detached, discarding result");
                            return;
                        }
                        let event = LoadEvent {
                            generation,
                            category,
                            result,
                        };
                        if !deliver(event) {
                            flag.store(false, Ordering::Release);
                        }
                    });
                    join_all(fetches).await;
                });
            })?;

        Ok(Self {
            generation,
            alive,
            worker: Some(worker),
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_attached(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Stops delivery of any result that has not been delivered yet.
    pub fn detach(&mut self) {
        if self.alive.swap(false, Ordering::AcqRel) {
            debug!(generation = self.generation, "fetch scheduler detached");
        }
    }

    /// Waits for all three fetches to finish. Intended for callers that
    /// need the worker drained (tests, batch use).
    pub fn wait(mut self) -> thread::Result<()> {
        match self.worker.take() {
            Some(worker) => worker.join(),
            None => Ok(()),
        }
    }
}

impl Drop for FetchScheduler {
    fn drop(&mut self) {
        self.detach();
    }
}
