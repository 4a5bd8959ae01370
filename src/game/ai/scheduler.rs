//! Background execution of AI searches
//!
//! The session hands an [`AiJob`] to an [`AiRunner`] and keeps going. The job
//! searches a private copy of the board and sends an [`AiReply`] tagged with
//! the session generation it was scheduled under; the session checks that
//! tag when the reply is delivered.
//!
//! Two runners are provided:
//!
//! - [`ThreadRunner`] - one short-lived thread per search, after a think delay
//! - [`DeferredRunner`] - jobs wait in a queue until the host runs them

use chess_engine::{analyse, Board, Difficulty, SearchReport};
use crossbeam_channel::Sender;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// A unit of AI work, ready to run on any thread
pub type AiJob = Box<dyn FnOnce() + Send + 'static>;

/// Result of one AI search
#[derive(Debug, Clone)]
pub struct AiReply {
    /// Session generation captured when the search was scheduled
    pub generation: u64,
    /// `None` only if the position had no legal moves
    pub report: Option<SearchReport>,
}

/// Runs AI jobs outside the caller's stack frame
pub trait AiRunner: Send {
    /// Queue or start `job`; an error means the job will never run
    fn spawn(&self, job: AiJob) -> io::Result<()>;
}

/// Build the job that searches `board` and reports back on `replies`
pub fn search_job(
    mut board: Board,
    difficulty: Difficulty,
    seed: u64,
    generation: u64,
    replies: Sender<AiReply>,
) -> AiJob {
    Box::new(move || {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(seed);
        let report = analyse(&mut board, difficulty, &mut rng);

        debug!(
            "[AI] Search for generation {} finished in {:?}",
            generation,
            start.elapsed()
        );

        if replies.send(AiReply { generation, report }).is_err() {
            debug!("[AI] Session dropped before reply for generation {}", generation);
        }
    })
}

/// Runs each job on its own thread after a fixed think delay
///
/// The delay keeps the opponent from answering instantly, which young
/// players find confusing.
#[derive(Debug, Clone)]
pub struct ThreadRunner {
    delay: Duration,
}

impl ThreadRunner {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl AiRunner for ThreadRunner {
    fn spawn(&self, job: AiJob) -> io::Result<()> {
        let delay = self.delay;
        thread::Builder::new()
            .name("chess-ai".to_string())
            .spawn(move || {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                job();
            })
            .map(|_| ())
            .inspect_err(|e| warn!("[AI] Failed to start search thread: {}", e))
    }
}

/// Holds jobs until [`DeferredRunner::run_next`] or
/// [`DeferredRunner::run_all`] is called
///
/// Clones share one queue, so a host can keep a handle after giving the
/// runner to a session. Jobs run on the calling thread.
#[derive(Clone, Default)]
pub struct DeferredRunner {
    queue: Arc<Mutex<VecDeque<AiJob>>>,
}

impl DeferredRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of jobs waiting to run
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Run the oldest queued job; `false` when the queue was empty
    pub fn run_next(&self) -> bool {
        // Release the lock before running so a job may queue another.
        let job = self.queue.lock().pop_front();
        match job {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }

    /// Run queued jobs until none are left, returning how many ran
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }
}

impl std::fmt::Debug for DeferredRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredRunner")
            .field("pending", &self.pending())
            .finish()
    }
}

impl AiRunner for DeferredRunner {
    fn spawn(&self, job: AiJob) -> io::Result<()> {
        self.queue.lock().push_back(job);
        Ok(())
    }
}
