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

#![no_std]
#![no_main]
#![feature(custom_test_frameworks)]
#![test_runner(lumen_os::test_handler::test_runner)]
#![reexport_test_harness_main = "test_main"]

use bootloader::{entry_point, BootInfo};
use core::panic::PanicInfo;
use lumen_os::vga::text_mode::{BUFFER_HEIGHT, BUFFER_WIDTH};
use lumen_os::vga::{self, WRITER};
use lumen_os::{serial_println, vga_print, vga_println};

entry_point!(main);

fn main(_boot_info: &'static BootInfo) -> ! {
    lumen_os::init();

    serial_println!("Exercising the terminal through its public surface");
    test_main();

    lumen_os::hlt_loop();
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    lumen_os::test_handler::test_panic_handler(info)
}

#[test_case]
fn println_lands_in_the_buffer() {
    vga::init_terminal();
    vga_println!("status check");

    let writer = WRITER.lock();
    for (column, byte) in b"status check".iter().enumerate() {
        let entry = writer.entry_at(0, column).unwrap();
        assert_eq!(entry.ascii_character, *byte);
    }
}

#[test_case]
fn println_moves_to_the_next_row() {
    vga::init_terminal();
    vga_println!("first");
    vga_println!("second");

    let writer = WRITER.lock();
    assert_eq!(writer.entry_at(1, 0).unwrap().ascii_character, b's');
    assert_eq!(writer.cursor(), (2, 0));
}

#[test_case]
fn sustained_output_keeps_the_cursor_in_range() {
    vga::init_terminal();

    for number in 0..(BUFFER_HEIGHT * 8) {
        vga_println!("line {}", number);
    }

    let (row, column) = WRITER.lock().cursor();
    assert!(row < BUFFER_HEIGHT);
    assert!(column < BUFFER_WIDTH);
}

#[test_case]
fn long_line_wraps_onto_the_next_row() {
    vga::init_terminal();

    for _ in 0..BUFFER_WIDTH + 3 {
        vga_print!("-");
    }

    let writer = WRITER.lock();
    assert_eq!(writer.entry_at(1, 0).unwrap().ascii_character, b'-');
    assert_eq!(writer.cursor(), (1, 3));
}
