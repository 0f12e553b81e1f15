mod device;
mod error;
mod sink;
mod source;
mod types;
mod virtual_pad;

pub use crate::device::{find_device, spawn_reader, EventReceiver};
pub use crate::error::{Error, Result};
pub use crate::sink::OutputSink;
pub use crate::source::{ChannelSource, EventSource, IterSource, SourceEvent};
pub use crate::types::{Axis, Button, EventKind, KeyValue, RawEvent};
pub use crate::virtual_pad::{VirtualGamepad, DEFAULT_DEVICE_NAME, STICK_MAX, STICK_MIN};
