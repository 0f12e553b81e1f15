use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{unbounded, Receiver};
use evdev::{Device, EventType, InputEvent};

use crate::error::{Error, Result};
use crate::types::{EventKind, RawEvent};

/// Receiving end of the device reader thread.
pub type EventReceiver = Receiver<std::io::Result<RawEvent>>;

impl From<InputEvent> for RawEvent {
    fn from(event: InputEvent) -> Self {
        let event_type = event.event_type();
        let kind = if event_type == EventType::KEY {
            EventKind::Key
        } else {
            EventKind::Other(event_type.0)
        };
        Self {
            kind,
            code: event.code(),
            value: event.value(),
        }
    }
}

/// Finds the first input device whose name equals `name`.
pub fn find_device(name: &str) -> Result<(PathBuf, Device)> {
    evdev::enumerate()
        .find(|(_, device)| device.name() == Some(name))
        .ok_or_else(|| Error::DeviceNotFound(name.to_string()))
}

/// Moves the device to a reader thread that forwards every event in
/// arrival order.
///
/// The thread stops after the first read error (which is forwarded) or
/// once the receiver is dropped.
pub fn spawn_reader(mut device: Device) -> Result<EventReceiver> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name("key2joy-reader".into())
        .spawn(move || loop {
            match device.fetch_events() {
                Ok(events) => {
                    for event in events {
                        if tx.send(Ok(RawEvent::from(event))).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    let _ = tx.send(Err(err));
                    return;
                }
            }
        })
        .map_err(Error::Reader)?;
    Ok(rx)
}
