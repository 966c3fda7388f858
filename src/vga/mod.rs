/*
   __
  / /  __ ____ _  ___ ___
 / /__/ // /  ' \/ -_) _ \
/____/\_,_/_/_/_/\__/_//_/
  Part of the Lumen OS Kernel

 VGA TEXT MODE DRIVER
 =======================

 Sequential character output into the memory-mapped text buffer. The
 low-level cursor and cell handling lives in `text_mode`; this module owns
 the global writer and the print macros in front of it.

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

pub mod text_mode;

use text_mode::{TextWriter, TEXT_BUFFER_ADDRESS};

lazy_static! {
    pub static ref WRITER: Mutex<TextWriter> =
        Mutex::new(unsafe { TextWriter::from_address(TEXT_BUFFER_ADDRESS) });
}

/// Reset the cursor and color and blank the screen.
pub fn init_terminal() {
    WRITER.lock().initialize();
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;
    WRITER.lock().write_fmt(args).unwrap();
}

#[macro_export]
macro_rules! vga_print {
    ($($arg:tt)*) => ($crate::vga::_print(format_args!($($arg)*)));
}

#[macro_export]
macro_rules! vga_println {
    () => ($crate::vga_print!("\n"));
    ($($arg:tt)*) => ($crate::vga_print!("{}\n", format_args!($($arg)*)));
}
