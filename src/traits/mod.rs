pub mod audio;
pub mod input;
pub mod time;

pub use audio::{AudioTransport, MockAudio};
pub use input::{KeyEdge, KeyEvent};
pub use time::{MockTimeProvider, SystemTimeProvider, TimeProvider};
