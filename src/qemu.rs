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

use x86_64::instructions::port::Port;

/// The configured debug emulator port.
///
/// The `isa-debug-exit`'s `iobase` register.
pub const QEMU_ISA_DEBUG_EXIT_IO_BASE: u16 = 0xF4;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QemuExitStatus {
    Success = 0x10,
    Failed = 0x11,
}

/// Close the emulator with the given status.
///
/// # Note
/// `Success` does not close qemu with exit status '0'. The exit device
/// shifts the written value, so the runner is configured to treat '33'
/// as a passing run.
pub fn exit_qemu(exit_status: QemuExitStatus) -> ! {
    let status = exit_status as u32;

    unsafe {
        Port::<u32>::new(QEMU_ISA_DEBUG_EXIT_IO_BASE).write(status);
    }

    // Busy loop if we couldn't exit
    loop {
        x86_64::instructions::hlt();
    }
}
