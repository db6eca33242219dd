mod focus;
mod pause;
mod pointer;
mod session;

pub use focus::park_position;
pub use pause::{Pause, ThreadPause};
pub use pointer::PointerGuard;
pub use session::{CaptureSession, CaptureSummary, create_session_dir};
