use common::types::DerivedSample;

use crate::errors::SensorReadFailure;

/// Notification published after every tick.
#[derive(Clone, Debug, PartialEq)]
pub enum SamplerEvent {
    NewSample(DerivedSample),
    ReadFailure(SensorReadFailure),
}

impl SamplerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            SamplerEvent::NewSample(_) => EventKind::NewSample,
            SamplerEvent::ReadFailure(_) => EventKind::ReadFailure,
        }
    }
}

/// Key under which listeners are registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    NewSample,
    ReadFailure,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::NewSample, EventKind::ReadFailure];
}

impl From<EventKind> for usize {
    fn from(value: EventKind) -> Self {
        match value {
            EventKind::NewSample => 0,
            EventKind::ReadFailure => 1,
        }
    }
}
