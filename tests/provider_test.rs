//! Mutual-exclusion tests with an instrumented store.
//!
//! Wraps the in-memory store in a recorder that logs wall-clock enter/exit
//! intervals per operation, then asserts the provider's lock discipline: no
//! two writes overlap, and no write overlaps any read.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tourney_core::dispatcher::TournamentService;
use tourney_core::error::Result;
use tourney_core::model::{NewTournament, Tournament, TournamentId};
use tourney_core::pool::WorkerPool;
use tourney_core::provider::StoreProvider;
use tourney_core::store::{InMemoryStore, TournamentStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Read,
    Write,
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    start: Instant,
    end: Instant,
    access: Access,
}

impl Interval {
    fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Store wrapper that records how long each operation held the lock. The
/// sleeps widen the critical sections so genuine overlap cannot hide
/// between clock ticks.
struct RecordingStore {
    inner: InMemoryStore,
    intervals: Arc<Mutex<Vec<Interval>>>,
}

impl RecordingStore {
    fn record<T>(&self, access: Access, op: impl FnOnce(&RecordingStore) -> T) -> T {
        let start = Instant::now();
        std::thread::sleep(Duration::from_millis(5));
        let result = op(self);
        self.intervals.lock().unwrap().push(Interval {
            start,
            end: Instant::now(),
            access,
        });
        result
    }
}

impl TournamentStore for RecordingStore {
    fn create(&mut self, input: NewTournament) -> Result<Tournament> {
        let start = Instant::now();
        std::thread::sleep(Duration::from_millis(5));
        let result = self.inner.create(input);
        self.intervals.lock().unwrap().push(Interval {
            start,
            end: Instant::now(),
            access: Access::Write,
        });
        result
    }

    fn find(&self, id: TournamentId) -> Result<Tournament> {
        self.record(Access::Read, |s| s.inner.find(id))
    }

    fn list(&self) -> Result<Vec<Tournament>> {
        self.record(Access::Read, |s| s.inner.list())
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn writes_are_exclusive_and_never_overlap_reads() {
    const WRITES: usize = 10;
    const READS: usize = 10;

    let intervals = Arc::new(Mutex::new(Vec::new()));
    let store = RecordingStore {
        inner: InMemoryStore::new(),
        intervals: Arc::clone(&intervals),
    };

    let pool = Arc::new(WorkerPool::new(4, WRITES + READS));
    pool.start().await;
    let provider = Arc::new(StoreProvider::new(store));
    let service = TournamentService::new(Arc::clone(&pool), provider);

    let mut handles = tokio::task::JoinSet::new();
    for i in 0..WRITES {
        let service = service.clone();
        handles.spawn(async move {
            let cancel = CancellationToken::new();
            service
                .create(&cancel, NewTournament::new(format!("t{i}")))
                .await
                .map(|_| ())
        });
    }
    for _ in 0..READS {
        let service = service.clone();
        handles.spawn(async move {
            let cancel = CancellationToken::new();
            service.list(&cancel).await.map(|_| ())
        });
    }

    while let Some(joined) = handles.join_next().await {
        joined.unwrap().unwrap();
    }
    pool.stop().await;

    let intervals = intervals.lock().unwrap();
    assert_eq!(intervals.len(), WRITES + READS);

    for (i, a) in intervals.iter().enumerate() {
        for b in intervals.iter().skip(i + 1) {
            if a.access == Access::Write || b.access == Access::Write {
                assert!(
                    !a.overlaps(b),
                    "lock violation: {a:?} overlaps {b:?}"
                );
            }
        }
    }
}
