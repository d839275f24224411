//! Playing a game on a background thread.
use crate::error::GameError;
use crate::game::{Game, Hooks};
use crate::summary::RoundSummary;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Handle to a `Game` played on its own thread, see `Game::play_async`.
///
/// The game runs until at most one player is left, a hand fails or a stop is requested. A
/// requested stop is honoured between hands only, the current hand is always completed.
pub struct Runner {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<Result<Game, GameError>>>,
    outcome: Option<Result<Game, GameError>>,
}

impl Runner {
    /// Ask the game to stop after the hand currently played.
    ///
    /// If `blocking` is set this waits for the game thread to finish.
    pub fn request_stop(&mut self, blocking: bool) {
        self.stop.store(true, Ordering::SeqCst);
        if blocking {
            self.wait();
        }
    }

    /// Whether the game thread has finished.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some() || self.thread_done()
    }

    /// Wait for the game to finish and take back the table.
    ///
    /// Returns the error of the hand which aborted the game, if any. A panic on the game thread
    /// (f.e. raised by a decider) is propagated.
    pub fn join(mut self) -> Result<Game, GameError> {
        self.wait();
        self.outcome.take().unwrap_or(Err(GameError::Poisoned))
    }

    fn thread_done(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    fn wait(&mut self) {
        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok(outcome) => self.outcome = Some(outcome),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    }
}

impl Game {
    /// Play this game on a new thread, handing every summary to `on_summary`.
    ///
    /// The game is handed back by `Runner::join` once finished. Use `play_async_with_finish` to be
    /// notified when that happens.
    pub fn play_async(
        self,
        hooks: Hooks,
        on_summary: impl FnMut(RoundSummary) + Send + 'static,
    ) -> Runner {
        self.play_async_with_finish(hooks, on_summary, |_| {})
    }

    /// Like `play_async`, but `on_finish` is called on the game thread once no further hand is
    /// played, with the finished game or the error which aborted it.
    pub fn play_async_with_finish(
        self,
        hooks: Hooks,
        mut on_summary: impl FnMut(RoundSummary) + Send + 'static,
        on_finish: impl FnOnce(Result<&Game, &GameError>) + Send + 'static,
    ) -> Runner {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_requested = stop.clone();

        let handle = thread::spawn(move || {
            let outcome = run(self, hooks, &mut on_summary, &stop_requested);
            on_finish(outcome.as_ref());
            outcome
        });

        Runner {
            stop,
            handle: Some(handle),
            outcome: None,
        }
    }
}

fn run(
    mut game: Game,
    hooks: Hooks,
    on_summary: &mut impl FnMut(RoundSummary),
    stop: &AtomicBool,
) -> Result<Game, GameError> {
    for summary in game.play(hooks) {
        match summary {
            Ok(summary) => on_summary(summary),
            Err(e) => {
                log::error!("game stopped: {}", e);
                return Err(e);
            }
        }
        if stop.load(Ordering::SeqCst) {
            log::info!("stop requested, leaving the table");
            break;
        }
    }
    Ok(game)
}
