//! ATmega128 Timer2 Driver
//!
//! Timer2 runs in clear-timer-on-compare mode: it counts up to OCR2, raises
//! the compare-match interrupt and restarts from zero. The interrupt handler
//! bumps the tick counter.

use bitflags::bitflags;
use common::arch::CurrentIrq;
use common::sync::irq::IrqControl;

use crate::hal::timer::{Prescaler, RateUnit, TickTimer, Ticks, TimerConfig};
use crate::tick::TickCounter;

/// Timer/Counter2 control register (I/O 0x25).
const TCCR2: *mut u8 = 0x45 as *mut u8;
/// Timer/Counter2 counter (I/O 0x24).
const TCNT2: *mut u8 = 0x44 as *mut u8;
/// Timer/Counter2 output compare register (I/O 0x23).
const OCR2: *mut u8 = 0x43 as *mut u8;
/// Timer interrupt mask register (I/O 0x37).
const TIMSK: *mut u8 = 0x57 as *mut u8;

bitflags! {
    /// TCCR2 bits.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Tccr2: u8 {
        const FOC2 = 1 << 7;
        const WGM20 = 1 << 6;
        const COM21 = 1 << 5;
        const COM20 = 1 << 4;
        const WGM21 = 1 << 3;
        const CS22 = 1 << 2;
        const CS21 = 1 << 1;
        const CS20 = 1 << 0;
    }
}

bitflags! {
    /// TIMSK bits owned by Timer2.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Timsk: u8 {
        const OCIE2 = 1 << 7;
    }
}

/// Ticks since the last [`Timer2::start`].
static TICKS: TickCounter<CurrentIrq> = TickCounter::new();

/// Compare-match handler, registered for [`crate::irq::Vector::Timer2Compare`].
pub fn on_compare_match() {
    TICKS.increment();
}

/// Clock-select bits for a prescaler.
fn clock_select(prescaler: Prescaler) -> Tccr2 {
    match prescaler {
        Prescaler::Div1 => Tccr2::CS20,
        Prescaler::Div8 => Tccr2::CS21,
        Prescaler::Div64 => Tccr2::CS21 | Tccr2::CS20,
        Prescaler::Div256 => Tccr2::CS22,
        Prescaler::Div1024 => Tccr2::CS22 | Tccr2::CS20,
    }
}

/// TCCR2 value for a configuration: CTC mode, OC2 pin disconnected.
pub fn control_bits(config: TimerConfig) -> Tccr2 {
    Tccr2::WGM21 | clock_select(config.prescaler)
}

// ============================================================================
// Raw Hardware Functions
// ============================================================================

/// Program Timer2 and enable its compare-match interrupt.
pub fn start_timer(config: TimerConfig) {
    // SAFETY: fixed ATmega128 I/O registers, only touched by this driver.
    unsafe {
        OCR2.write_volatile(config.compare);
        TCNT2.write_volatile(0);
        TCCR2.write_volatile(control_bits(config).bits());
        let timsk = TIMSK.read_volatile();
        TIMSK.write_volatile(timsk | Timsk::OCIE2.bits());
    }
}

/// Disable the compare-match interrupt and stop the timer clock.
pub fn stop_timer() {
    // SAFETY: fixed ATmega128 I/O registers, only touched by this driver.
    unsafe {
        let timsk = TIMSK.read_volatile();
        TIMSK.write_volatile(timsk & !Timsk::OCIE2.bits());
        TCCR2.write_volatile(Tccr2::empty().bits());
    }
}

// ============================================================================
// HAL Implementation
// ============================================================================

/// Timer2 tick timer.
#[derive(Debug)]
pub struct Timer2 {
    _private: (),
}

impl Timer2 {
    /// Create the timer handle.
    ///
    /// # Safety
    ///
    /// Only one handle may exist; Timer2 and its tick counter are shared
    /// hardware state.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl TickTimer for Timer2 {
    fn start(&mut self, unit: RateUnit) {
        let config = TimerConfig::for_unit(unit);
        log::trace!("timer2: start {unit:?} {config:?}");

        TICKS.reset();
        start_timer(config);
        CurrentIrq::enable();
    }

    fn stop(&mut self) {
        stop_timer();
        log::trace!("timer2: stop at {} ticks", TICKS.get());
    }

    fn ticks(&self) -> Ticks {
        TICKS.get()
    }
}
