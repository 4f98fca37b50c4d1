mod clock;
mod judge;
mod score;
mod session;
mod timer;

pub use clock::Clock;
pub use judge::{JudgeEngine, JudgmentEvent, JudgmentKind};
pub use score::ScoreTracker;
pub use session::{Session, SessionState};
pub use timer::{CountdownTimer, TickTimer};
