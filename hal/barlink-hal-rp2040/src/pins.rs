//! Board pin map
//!
//! The firmware takes peripherals by name (`p.PIN_0`), so the map here is
//! the documented wiring plus a check that each pin can actually carry its
//! function on the RP2040.

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

/// I2C peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cId {
    I2c0,
    I2c1,
}

/// Problems found in a pin map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin assigned to two functions
    Conflict(u8),
    /// Pin cannot carry the requested peripheral function
    WrongFunction(u8),
}

/// Which UART can drive TX on a given GPIO
pub fn uart_tx(gpio: u8) -> Option<UartId> {
    match gpio {
        0 | 12 | 16 | 28 => Some(UartId::Uart0),
        4 | 8 | 20 | 24 => Some(UartId::Uart1),
        _ => None,
    }
}

/// Which UART can receive on a given GPIO
pub fn uart_rx(gpio: u8) -> Option<UartId> {
    match gpio {
        1 | 13 | 17 | 29 => Some(UartId::Uart0),
        5 | 9 | 21 | 25 => Some(UartId::Uart1),
        _ => None,
    }
}

/// Which I2C block can use a GPIO as SDA
pub fn i2c_sda(gpio: u8) -> Option<I2cId> {
    if gpio >= GPIO_COUNT {
        return None;
    }
    match gpio % 4 {
        0 => Some(I2cId::I2c0),
        2 => Some(I2cId::I2c1),
        _ => None,
    }
}

/// Which I2C block can use a GPIO as SCL
pub fn i2c_scl(gpio: u8) -> Option<I2cId> {
    if gpio >= GPIO_COUNT {
        return None;
    }
    match gpio % 4 {
        1 => Some(I2cId::I2c0),
        3 => Some(I2cId::I2c1),
        _ => None,
    }
}

/// Wiring of the bridge board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardPins {
    /// UART TX to the CH9121 RXD
    pub uart_tx: u8,
    /// UART RX from the CH9121 TXD (claimed, unused)
    pub uart_rx: u8,
    /// CH9121 CFG (low = configuration mode)
    pub bridge_cfg: u8,
    /// CH9121 RST (low = reset)
    pub bridge_rst: u8,
    /// LCD backpack SDA
    pub i2c_sda: u8,
    /// LCD backpack SCL
    pub i2c_scl: u8,
    /// Activity LED (active high)
    pub status_led: u8,
}

/// Raspberry Pi Pico with the Pico-ETH-CH9121 hat and an LCD1602 backpack
pub const PICO: BoardPins = BoardPins {
    uart_tx: 0,
    uart_rx: 1,
    bridge_cfg: 14,
    bridge_rst: 17,
    i2c_sda: 4,
    i2c_scl: 5,
    status_led: 25,
};

impl BoardPins {
    fn all(&self) -> [u8; 7] {
        [
            self.uart_tx,
            self.uart_rx,
            self.bridge_cfg,
            self.bridge_rst,
            self.i2c_sda,
            self.i2c_scl,
            self.status_led,
        ]
    }

    /// Check ranges, conflicts and peripheral functions
    ///
    /// The UART pair must belong to one UART and the I2C pair to one I2C
    /// block.
    pub fn check(&self) -> Result<(UartId, I2cId), PinError> {
        let pins = self.all();
        for (i, &pin) in pins.iter().enumerate() {
            if pin >= GPIO_COUNT {
                return Err(PinError::InvalidPin(pin));
            }
            if pins[..i].contains(&pin) {
                return Err(PinError::Conflict(pin));
            }
        }

        let uart = uart_tx(self.uart_tx).ok_or(PinError::WrongFunction(self.uart_tx))?;
        if uart_rx(self.uart_rx) != Some(uart) {
            return Err(PinError::WrongFunction(self.uart_rx));
        }

        let i2c = i2c_sda(self.i2c_sda).ok_or(PinError::WrongFunction(self.i2c_sda))?;
        if i2c_scl(self.i2c_scl) != Some(i2c) {
            return Err(PinError::WrongFunction(self.i2c_scl));
        }

        Ok((uart, i2c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pico_map_is_valid() {
        assert_eq!(PICO.check(), Ok((UartId::Uart0, I2cId::I2c0)));
    }

    #[test]
    fn test_function_tables() {
        assert_eq!(uart_tx(0), Some(UartId::Uart0));
        assert_eq!(uart_tx(4), Some(UartId::Uart1));
        assert_eq!(uart_tx(1), None);
        assert_eq!(uart_rx(17), Some(UartId::Uart0));
        assert_eq!(i2c_sda(4), Some(I2cId::I2c0));
        assert_eq!(i2c_scl(7), Some(I2cId::I2c1));
        assert_eq!(i2c_sda(30), None);
    }

    #[test]
    fn test_conflict_detected() {
        let board = BoardPins {
            status_led: 14,
            ..PICO
        };
        assert_eq!(board.check(), Err(PinError::Conflict(14)));
    }

    #[test]
    fn test_mismatched_uart_pair() {
        let board = BoardPins {
            uart_rx: 9,
            ..PICO
        };
        assert_eq!(board.check(), Err(PinError::WrongFunction(9)));
    }

    #[test]
    fn test_invalid_pin() {
        let board = BoardPins {
            bridge_rst: 40,
            ..PICO
        };
        assert_eq!(board.check(), Err(PinError::InvalidPin(40)));
    }
}
