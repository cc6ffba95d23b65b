//! Simulated hardware for unit tests.

use core::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use common::arch::host::HostIrq;

use crate::hal::gpio::{PinMode, Port, PullMode};
use crate::hal::timer::{BlockingWait, RateUnit, TickTimer, Ticks};
use crate::tick::TickCounter;

/// What a [`SimTimer`] was asked to do.
#[derive(Debug, Default)]
pub struct TimerLog {
    pub starts: Vec<RateUnit>,
    pub stops: u32,
    pub ticks_at_stop: Vec<Ticks>,
    pub running: bool,
}

/// Tick timer whose "interrupt" fires once every `polls_per_tick` reads of
/// the counter while running, standing in for a periodic event source.
pub struct SimTimer {
    counter: TickCounter<HostIrq>,
    polls_per_tick: u32,
    polls: Cell<u32>,
    log: Rc<RefCell<TimerLog>>,
}

impl SimTimer {
    pub fn new(polls_per_tick: u32) -> Self {
        Self {
            counter: TickCounter::new(),
            polls_per_tick,
            polls: Cell::new(0),
            log: Rc::default(),
        }
    }

    pub fn log(&self) -> Rc<RefCell<TimerLog>> {
        Rc::clone(&self.log)
    }
}

impl TickTimer for SimTimer {
    fn start(&mut self, unit: RateUnit) {
        self.counter.reset();
        self.polls.set(0);

        let mut log = self.log.borrow_mut();
        log.starts.push(unit);
        log.running = true;
    }

    fn stop(&mut self) {
        let mut log = self.log.borrow_mut();
        log.running = false;
        log.stops += 1;
        log.ticks_at_stop.push(self.counter.get());
    }

    fn ticks(&self) -> Ticks {
        if self.log.borrow().running {
            let polls = self.polls.get() + 1;
            self.polls.set(polls);
            if polls % self.polls_per_tick == 0 {
                self.counter.increment();
            }
        }
        self.counter.get()
    }
}

/// Register state of a [`MockPort`].
#[derive(Debug)]
pub struct PortState {
    /// Levels returned by `read`.
    pub input: u8,
    pub latch: u8,
    /// Direction bits, 1 = output.
    pub outputs: u8,
    pub pullups: u8,
}

/// Port backed by shared state, so a test can keep a handle after moving a
/// clone into a driver.
#[derive(Debug, Clone)]
pub struct MockPort(Rc<RefCell<PortState>>);

impl MockPort {
    /// All inputs high (released), latch clear.
    pub fn new() -> Self {
        MockPort(Rc::new(RefCell::new(PortState {
            input: 0xFF,
            latch: 0x00,
            outputs: 0x00,
            pullups: 0x00,
        })))
    }

    pub fn set_input(&self, levels: u8) {
        self.0.borrow_mut().input = levels;
    }

    pub fn set_latch(&self, value: u8) {
        self.0.borrow_mut().latch = value;
    }

    pub fn state(&self) -> Ref<'_, PortState> {
        self.0.borrow()
    }
}

impl Port for MockPort {
    fn set_mode(&mut self, mask: u8, mode: PinMode) {
        let mut state = self.0.borrow_mut();
        match mode {
            PinMode::Input => state.outputs &= !mask,
            PinMode::Output => state.outputs |= mask,
        }
    }

    fn set_pull(&mut self, mask: u8, pull: PullMode) {
        let mut state = self.0.borrow_mut();
        match pull {
            PullMode::Up => state.pullups |= mask,
            PullMode::None => state.pullups &= !mask,
        }
    }

    fn read(&self) -> u8 {
        self.0.borrow().input
    }

    fn latch(&self) -> u8 {
        self.0.borrow().latch
    }

    fn write(&mut self, value: u8) {
        self.0.borrow_mut().latch = value;
    }
}

/// Wait that returns immediately, recording each duration together with
/// the port latch at the time of the call.
#[derive(Debug, Clone)]
pub struct RecordingWait {
    port: MockPort,
    calls: Rc<RefCell<Vec<(Ticks, u8)>>>,
}

impl RecordingWait {
    pub fn new(port: MockPort) -> Self {
        Self {
            port,
            calls: Rc::default(),
        }
    }

    pub fn durations(&self) -> Vec<Ticks> {
        self.calls.borrow().iter().map(|&(ticks, _)| ticks).collect()
    }

    pub fn latches(&self) -> Vec<u8> {
        self.calls.borrow().iter().map(|&(_, latch)| latch).collect()
    }
}

impl BlockingWait for RecordingWait {
    fn wait(&mut self, ticks: Ticks) {
        let latch = self.port.latch();
        self.calls.borrow_mut().push((ticks, latch));
    }
}
