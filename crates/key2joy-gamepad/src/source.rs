use crossbeam_channel::{select, Receiver, TryRecvError};

use crate::device::EventReceiver;
use crate::types::RawEvent;

/// Result of waiting for the next input event.
#[derive(Debug)]
pub enum SourceEvent {
    Event(RawEvent),
    /// The source has no more events.
    End,
    /// The wait was interrupted from outside.
    Cancelled,
    /// Reading from the device failed.
    Failed(std::io::Error),
}

/// Blocking stream of raw input events.
pub trait EventSource {
    fn next_event(&mut self) -> SourceEvent;
}

/// Event source over any in-memory iterator of events.
pub struct IterSource<I> {
    events: I,
}

impl<I: Iterator<Item = RawEvent>> IterSource<I> {
    pub fn new<T: IntoIterator<IntoIter = I>>(events: T) -> Self {
        Self {
            events: events.into_iter(),
        }
    }
}

impl<I: Iterator<Item = RawEvent>> EventSource for IterSource<I> {
    fn next_event(&mut self) -> SourceEvent {
        match self.events.next() {
            Some(event) => SourceEvent::Event(event),
            None => SourceEvent::End,
        }
    }
}

/// Event source fed by a reader thread, interruptible through a stop channel.
///
/// A closed stop channel counts as a stop request.
pub struct ChannelSource {
    events: EventReceiver,
    stop: Receiver<()>,
}

impl ChannelSource {
    pub fn new(events: EventReceiver, stop: Receiver<()>) -> Self {
        Self { events, stop }
    }

    fn stop_requested(&self) -> bool {
        !matches!(self.stop.try_recv(), Err(TryRecvError::Empty))
    }
}

impl EventSource for ChannelSource {
    fn next_event(&mut self) -> SourceEvent {
        if self.stop_requested() {
            return SourceEvent::Cancelled;
        }
        select! {
            recv(self.stop) -> _ => SourceEvent::Cancelled,
            recv(self.events) -> msg => match msg {
                Ok(Ok(event)) => SourceEvent::Event(event),
                Ok(Err(err)) => SourceEvent::Failed(err),
                Err(_) => SourceEvent::End,
            },
        }
    }
}
