/// Fixed-interval tick driven by polling.
///
/// A stopped timer never fires, and restarting re-anchors the schedule,
/// so a pause gap produces no backlog of ticks. When the poll arrives
/// late, the overdue intervals coalesce into a single fire; the caller
/// then acts on its latest clock reading rather than replaying stale
/// ones.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval_ms: f64,
    next_due_ms: Option<f64>,
}

impl TickTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_due_ms: None,
        }
    }

    pub fn start(&mut self, now_ms: f64) {
        self.next_due_ms = Some(now_ms + self.interval_ms);
    }

    pub fn stop(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Returns true if at least one interval elapsed since the last
    /// fire, and schedules the next one.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.next_due_ms {
            Some(due_ms) if now_ms >= due_ms => {
                let missed = ((now_ms - due_ms) / self.interval_ms).floor() + 1.0;
                self.next_due_ms = Some(due_ms + missed * self.interval_ms);
                true
            }
            _ => false,
        }
    }
}

/// One-shot delay with at most one completion per arming.
///
/// `cancel` (or a fresh `arm`) invalidates any previously scheduled
/// completion, so a countdown that was interrupted can never fire
/// later.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    delay_ms: f64,
    due_ms: Option<f64>,
}

impl CountdownTimer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            due_ms: None,
        }
    }

    pub fn arm(&mut self, now_ms: f64) {
        self.due_ms = Some(now_ms + self.delay_ms);
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    /// Milliseconds until completion, for the host's countdown label.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.due_ms.map(|due_ms| (due_ms - now_ms).max(0.0))
    }

    /// Returns true exactly once per arming, when the delay elapses.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.due_ms {
            Some(due_ms) if now_ms >= due_ms => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}
