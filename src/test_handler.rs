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

use core::panic::PanicInfo;
use owo_colors::OwoColorize;

use crate::qemu::{exit_qemu, QemuExitStatus};
use crate::{debug_print, debug_println};

pub trait Testable {
    fn run(&self) -> ();
}

impl<T> Testable for T
where
    T: Fn(),
{
    fn run(&self) {
        debug_print!("{:100} ", core::any::type_name::<T>().blue().bold());
        self();
        debug_println!("{}", "OK".bright_green().bold());
    }
}

pub fn test_runner(tests: &[&dyn Testable]) {
    debug_println!("Running {} tests...", tests.len());

    for (number, test) in tests.iter().enumerate() {
        debug_print!("{:4}: ", number + 1);
        test.run();
    }

    debug_println!("\n{}\n", "All tests passed! Exiting...".bright_green().bold());

    exit_qemu(QemuExitStatus::Success);
}

pub fn test_panic_handler(info: &PanicInfo) -> ! {
    debug_println!("{}", "Failed".bright_red().bold());
    debug_println!("{}\n", info.red());

    exit_qemu(QemuExitStatus::Failed);
}

#[cfg(test)]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    test_panic_handler(info)
}
