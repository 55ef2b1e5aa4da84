//! Testing utilities and harness for the swipe drawer

pub mod recorder;
pub mod robot;

pub use recorder::{CallbackRecorder, DrawerCall};
pub use robot::{DrawerRobot, FRAME_INTERVAL_NANOS};

pub mod prelude {
    pub use crate::recorder::{CallbackRecorder, DrawerCall};
    pub use crate::robot::{DrawerRobot, FRAME_INTERVAL_NANOS};
}
