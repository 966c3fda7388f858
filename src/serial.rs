/*
   __
  / /  __ ____ _  ___ ___
 / /__/ // /  ' \/ -_) _ \
/____/\_,_/_/_/_/\__/_//_/
  Part of the Lumen OS Kernel

Copyright 2026 Lumen OS Contributors

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and
associated documentation files (the "Software"), to deal in the Software without restriction,
including without limitation the rights to use, copy, modify, merge, publish, distribute,
sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial
portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT
NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT
OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

*/

use core::fmt;
use lazy_static::lazy_static;
use spin::Mutex;
use x86_64::instructions::port::Port;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
#[allow(dead_code)]
pub enum SerialCOM {
    Com1 = 0x3F8,
    Com2 = 0x2F8,
    Com3 = 0x3E8,
    Com4 = 0x2E8,
}

#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum BaudRate {
    Baud115200 = 1,
    Baud57600 = 2,
    Baud38400 = 3,
    Baud19200 = 6,
    Baud14400 = 8,
    Baud9600 = 12,
    Baud4800 = 24,
    Baud2400 = 48,
    Baud1200 = 96,
    Baud600 = 192,
    Baud300 = 384,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialDevice {
    port: SerialCOM,
    baud: BaudRate,
}

impl SerialDevice {
    // Constructs a new SerialDevice.
    // Returns `None` when the loopback self-test reads back garbage, which
    // is what an absent or broken UART looks like.
    pub fn new(port: SerialCOM, baud: BaudRate) -> Option<SerialDevice> {
        let base = port as u16;

        unsafe {
            /*
                | IO |  D  |    Register mapped to this port
                |----|-----|----------------------------------------------------
                | +0 |  0  |    Data register. Read: receive buffer. Write: transmit buffer.
                | +1 |  0  |    Interrupt Enable Register.
                | +0 |  1  |    With DLAB set to 1, least significant byte of the baud divisor.
                | +1 |  1  |    With DLAB set to 1, most significant byte of the divisor.
                | +2 |  -  |    Interrupt Identification and FIFO control registers
                | +3 |  -  |    Line Control Register. The most significant bit is the DLAB.
                | +4 |  -  |    Modem Control Register.
                | +5 |  -  |    Line Status Register.

                (https://wiki.osdev.org/Serial_Ports)
            */

            // INIT
            Port::<u8>::new(base + 1).write(0x00); // Disable the Serial Port interrupts
            Port::<u8>::new(base + 3).write(0x80); // Enable DLAB which sets the baud rate divisor

            let baud_low = baud as u8;
            let baud_high = ((baud as u16) >> 8) as u8;

            Port::<u8>::new(base).write(baud_low); // Set the baud rate (lo byte)
            Port::<u8>::new(base + 1).write(baud_high); //               (hi byte)

            Port::<u8>::new(base + 3).write(0x03); // Use 8 bits, no parity bits, and one stop bit
            Port::<u8>::new(base + 2).write(0xC7); // Enable FIFO

            // TEST the port first
            let test_byte: u8 = b'A';

            Port::<u8>::new(base + 4).write(0x1E); // Set Serial to loopback mode
            Port::<u8>::new(base).write(test_byte); // Send test byte

            let serial_response = Port::<u8>::new(base).read();

            if serial_response != test_byte {
                return None;
            }

            // Success
            Port::<u8>::new(base + 4).write(0x0F); // Set Serial to normal mode
        }

        Some(SerialDevice { port, baud })
    }

    unsafe fn is_transmit_empty(&self) -> bool {
        Port::<u8>::new(self.port as u16 + 5).read() & 0x20 != 0x00
    }

    pub fn get_baud_div(&self) -> BaudRate {
        self.baud
    }

    pub fn get_baud(&self) -> u32 {
        115200 / (self.get_baud_div() as u32)
    }

    pub fn write_byte(&self, byte: u8) {
        let port = self.port as u16;

        unsafe {
            loop {
                if self.is_transmit_empty() {
                    break;
                }
            }

            Port::<u8>::new(port).write(byte);
        }
    }

    pub fn write_string(&self, string: &str) {
        for byte in string.bytes() {
            self.write_byte(byte);
        }
    }
}

impl fmt::Write for SerialDevice {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s);
        Ok(())
    }
}

lazy_static! {
    pub static ref SERIAL1: Mutex<Option<SerialDevice>> =
        Mutex::new(SerialDevice::new(SerialCOM::Com1, BaudRate::Baud115200));
}

/// Adapter with the plain-string signature the debug output stream expects.
pub fn raw_stream_out(string: &str) {
    if let Some(device) = SERIAL1.lock().as_ref() {
        device.write_string(string);
    }
}

#[doc(hidden)]
pub fn _print(args: ::core::fmt::Arguments) {
    use core::fmt::Write;

    if let Some(device) = SERIAL1.lock().as_mut() {
        device.write_fmt(args).unwrap();
    }
}

/// Prints to the host through the serial interface.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::serial::_print(format_args!($($arg)*));
    };
}

/// Prints to the host through the serial interface, appending a newline.
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($fmt:expr) => ($crate::serial_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::serial_print!(
        concat!($fmt, "\n"), $($arg)*));
}
