//! Six-button push panel, active low.

use crate::config::{BUTTON_COUNT, BUTTON_MASK};
use crate::hal::gpio::{PinLevel, PinMode, Port, PullMode};

/// Push-button panel on the low six bits of a port.
#[derive(Debug)]
pub struct ButtonPanel<P: Port> {
    port: P,
}

impl<P: Port> ButtonPanel<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Configure the button pins as inputs with pull-ups.
    pub fn init(&mut self) {
        self.port.set_mode(BUTTON_MASK, PinMode::Input);
        self.port.set_pull(BUTTON_MASK, PullMode::Up);
    }

    /// Position of the pressed button, 1 being the rightmost, or 0 if none.
    ///
    /// Pins are scanned from the highest bit down and the first one found
    /// low wins, so of several simultaneous presses the highest position is
    /// reported.
    pub fn read(&self) -> u8 {
        (0..BUTTON_COUNT)
            .rev()
            .find(|&shift| self.port.level(shift) == PinLevel::Low)
            .map_or(0, |shift| shift + 1)
    }

    pub fn free(self) -> P {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPort;

    fn panel(pressed: &[u8]) -> ButtonPanel<MockPort> {
        let port = MockPort::new();
        // Encoder switches released, pressed buttons pulled to ground.
        let levels = pressed.iter().fold(0xFF, |levels, shift| levels & !(1u8 << *shift));
        port.set_input(levels);
        ButtonPanel::new(port)
    }

    #[test]
    fn nothing_pressed_reads_zero() {
        assert_eq!(panel(&[]).read(), 0);
    }

    #[test]
    fn single_press_reports_one_based_position() {
        assert_eq!(panel(&[3]).read(), 4);
        assert_eq!(panel(&[0]).read(), 1);
        assert_eq!(panel(&[5]).read(), 6);
    }

    #[test]
    fn highest_pressed_button_wins() {
        assert_eq!(panel(&[5, 0]).read(), 6);
        assert_eq!(panel(&[1, 2, 4]).read(), 5);
    }

    #[test]
    fn encoder_bits_are_ignored() {
        let port = MockPort::new();
        port.set_input(0x3F);
        assert_eq!(ButtonPanel::new(port).read(), 0);
    }

    #[test]
    fn init_enables_pullups_on_button_pins_only() {
        let port = MockPort::new();
        let mut buttons = ButtonPanel::new(port.clone());
        buttons.init();

        let state = port.state();
        assert_eq!(state.outputs & BUTTON_MASK, 0);
        assert_eq!(state.pullups, BUTTON_MASK);
    }
}
