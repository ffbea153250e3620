//! The "CPU is choosing..." preview shown before the computer's move is
//! revealed.
//!
//! Purely cosmetic: the computer's move is already chosen when the
//! animation starts, and the preview symbols come from their own RNG stream.
//! Each frame redraws one terminal line and then waits. Waits shrink toward
//! the end, so the preview speeds up as it settles:
//!
//! frame `i` of `spins` waits `60ms + (spins - i) * 10ms`.

use crate::formatters::Symbols;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use roshambo_engine::moves::Move;
use std::io::{self, Write};
use std::time::Duration;

/// Preview frames per reveal unless configured otherwise.
pub const DEFAULT_SPINS: u8 = 9;
/// Upper bound accepted from configuration and flags.
pub const MAX_SPINS: u8 = 50;

const BASE_DELAY_MS: u64 = 60;
const STEP_DELAY_MS: u64 = 10;

/// Wait after `frame` (0-based) in a preview of `spins` frames.
pub fn frame_delay(spins: u8, frame: u8) -> Duration {
    let remaining = u64::from(spins.saturating_sub(frame));
    Duration::from_millis(BASE_DELAY_MS + remaining * STEP_DELAY_MS)
}

/// How the animation waits between frames.
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the current thread for each frame.
#[derive(Debug, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Never waits. Used with `--no-animation` and in tests.
#[derive(Debug, Default)]
pub struct NoPause;

impl Pause for NoPause {
    fn pause(&mut self, _duration: Duration) {}
}

pub struct ThinkingAnimation {
    spins: u8,
    rng: ChaCha20Rng,
    pause: Box<dyn Pause>,
}

impl ThinkingAnimation {
    pub fn new(spins: u8, seed: u64, pause: Box<dyn Pause>) -> Self {
        Self {
            spins: spins.min(MAX_SPINS),
            rng: ChaCha20Rng::seed_from_u64(seed),
            pause,
        }
    }

    /// An animation that draws nothing and never waits.
    pub fn disabled() -> Self {
        Self::new(0, 0, Box::new(NoPause))
    }

    pub fn spins(&self) -> u8 {
        self.spins
    }

    /// Draw the preview frames on one line, ending with the cursor at the
    /// start of that line so the reveal overwrites it.
    pub fn play(&mut self, symbols: Symbols, out: &mut dyn Write) -> io::Result<()> {
        if self.spins == 0 {
            return Ok(());
        }
        for frame in 0..self.spins {
            let preview = Move::ALL[self.rng.random_range(0..Move::ALL.len())];
            write!(out, "\rCPU: {} ?", symbols.glyph(preview))?;
            out.flush()?;
            self.pause.pause(frame_delay(self.spins, frame));
        }
        write!(out, "\r")?;
        out.flush()
    }
}
