use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::audio::event::ControlEvent;
use crate::error::{Error, Result};
use crate::system::traits::{JackSense, OutputSwitch};

/// Mock output switch for testing - records every state it is set to
#[derive(Clone)]
pub struct MockOutputSwitch {
    name: String,
    pub states: Arc<Mutex<Vec<bool>>>,
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockOutputSwitch {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            states: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Every state this switch was set to, in call order
    pub fn history(&self) -> Vec<bool> {
        self.states.lock().unwrap().clone()
    }

    /// The most recently applied state, if any call was made
    pub fn last_state(&self) -> Option<bool> {
        self.states.lock().unwrap().last().copied()
    }

    pub fn call_count(&self) -> usize {
        self.states.lock().unwrap().len()
    }

    /// Configure the mock to fail on the next set_enabled call
    pub fn set_failure(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }
}

impl OutputSwitch for MockOutputSwitch {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_enabled(&self, enabled: bool) -> Result<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(Error::io(
                "mock set_enabled",
                alsa::Error::unsupported("mock"),
            ));
        }
        self.states.lock().unwrap().push(enabled);
        Ok(())
    }
}

/// One scripted step of a mock control session
#[derive(Debug, Clone)]
pub enum MockStep {
    /// wait() times out with nothing to read
    Timeout,
    /// wait() reports readable, next_event() delivers this notification
    Event(ControlEvent),
    /// wait() reports readable but next_event() comes back empty
    EmptyRead,
    /// wait() reports readable, next_event() fails
    ReadFailure,
}

/// Mock jack-sense session for testing - plays back a scripted notification
/// stream and a queue of sense values.
///
/// When the script runs out, wait() returns an error so that loop tests
/// terminate instead of polling forever.
pub struct MockJackSense {
    pub script: Arc<Mutex<VecDeque<MockStep>>>,
    pub sense_values: Arc<Mutex<VecDeque<bool>>>,
    pub sense_reads: Arc<Mutex<usize>>,
}

impl MockJackSense {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            sense_values: Arc::new(Mutex::new(VecDeque::new())),
            sense_reads: Arc::new(Mutex::new(0)),
        }
    }

    /// Append a step to the scripted notification stream
    pub fn push_step(&self, step: MockStep) {
        self.script.lock().unwrap().push_back(step);
    }

    /// Queue a value for the next headphones_present() read
    pub fn push_sense_value(&self, present: bool) {
        self.sense_values.lock().unwrap().push_back(present);
    }

    /// How many times the sense control was read
    pub fn sense_read_count(&self) -> usize {
        *self.sense_reads.lock().unwrap()
    }
}

impl Default for MockJackSense {
    fn default() -> Self {
        Self::new()
    }
}

impl JackSense for MockJackSense {
    fn wait(&self, _timeout: Duration) -> Result<bool> {
        let mut script = self.script.lock().unwrap();
        match script.front() {
            Some(MockStep::Timeout) => {
                script.pop_front();
                Ok(false)
            }
            Some(_) => Ok(true),
            None => Err(Error::Protocol("mock script exhausted".to_string())),
        }
    }

    fn next_event(&self) -> Result<Option<ControlEvent>> {
        let step = self.script.lock().unwrap().pop_front();
        match step {
            Some(MockStep::Event(event)) => Ok(Some(event)),
            Some(MockStep::EmptyRead) => Ok(None),
            Some(MockStep::ReadFailure) => Err(Error::io(
                "mock next_event",
                alsa::Error::unsupported("mock"),
            )),
            Some(MockStep::Timeout) | None => Ok(None),
        }
    }

    fn headphones_present(&self) -> Result<bool> {
        *self.sense_reads.lock().unwrap() += 1;
        self.sense_values
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Config("no sense value scripted".to_string()))
    }
}
