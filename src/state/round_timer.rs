// Round countdown, driven by a 1 second interval owned by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTimer {
    remaining: i64,
    finished: bool,
}

impl RoundTimer {
    pub fn new(duration: u32) -> Self {
        Self {
            remaining: i64::from(duration),
            finished: false,
        }
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one second. Returns `true` only on the tick that ends the round;
    /// ticks delivered after that are ignored.
    pub fn tick(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.remaining -= 1;
        if self.remaining <= 0 {
            self.finished = true;
            return true;
        }
        false
    }
}
