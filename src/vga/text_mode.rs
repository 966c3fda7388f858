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
use volatile::Volatile;

use crate::error_utils::LumenError;

/// Physical address the VGA hardware maps the text buffer at.
pub const TEXT_BUFFER_ADDRESS: usize = 0xB8000;

pub const BUFFER_HEIGHT: usize = 25;
pub const BUFFER_WIDTH: usize = 80;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// The attribute byte of a character cell: low nibble foreground, high nibble background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

/// One character cell. With the `#[repr(C)]` layout this is the hardware's
/// little-endian `character | attribute << 8` 16-bit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub ascii_character: u8,
    pub color_code: ColorCode,
}

#[repr(transparent)]
struct Buffer {
    chars: [[Volatile<ScreenChar>; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

const DEFAULT_COLOR: ColorCode = ColorCode::new(Color::White, Color::Black);

/// Cursor state plus the mapped buffer. All sequential output funnels
/// through [`TextWriter::write_byte`], which keeps the cursor in range.
pub struct TextWriter {
    row_position: usize,
    column_position: usize,
    color_code: ColorCode,
    buffer: &'static mut Buffer,
}

impl TextWriter {
    /// # Safety
    ///
    /// `address` must point at a live VGA text-mode buffer of at least
    /// `BUFFER_HEIGHT * BUFFER_WIDTH` cells, and nothing else may alias it.
    pub unsafe fn from_address(address: usize) -> TextWriter {
        TextWriter {
            row_position: 0,
            column_position: 0,
            color_code: DEFAULT_COLOR,
            buffer: &mut *(address as *mut Buffer),
        }
    }

    /// Reset the cursor and color, then blank the screen.
    pub fn initialize(&mut self) {
        self.row_position = 0;
        self.column_position = 0;
        self.color_code = DEFAULT_COLOR;

        self.clear_screen();
    }

    /// Overwrite every cell with whitespace through the ordinary write
    /// path. Starting from the top-left corner, the wraparound rule walks
    /// the cursor across all 2000 cells and back to where it began.
    pub fn clear_screen(&mut self) {
        for _ in 0..BUFFER_HEIGHT * BUFFER_WIDTH {
            self.write_byte(b' ');
        }
    }

    /// Store one character at the cursor, then advance it. The cursor wraps
    /// from the end of a row to the start of the next, and from the last
    /// row back to row zero. The screen contents never move.
    pub fn write_byte(&mut self, byte: u8) {
        match byte {
            b'\n' => self.new_line(),
            byte => {
                let row = self.row_position;
                let col = self.column_position;

                let color_code = self.color_code;
                self.buffer.chars[row][col].write(ScreenChar {
                    ascii_character: byte,
                    color_code,
                });

                self.column_position += 1;
                if self.column_position == BUFFER_WIDTH {
                    self.column_position = 0;
                    self.row_position += 1;

                    if self.row_position == BUFFER_HEIGHT {
                        self.row_position = 0;
                    }
                }
            }
        }
    }

    fn new_line(&mut self) {
        self.column_position = 0;
        self.row_position += 1;

        if self.row_position == BUFFER_HEIGHT {
            self.row_position = 0;
        }
    }

    pub fn write_string(&mut self, s: &str) {
        for byte in s.bytes() {
            match byte {
                // printable ASCII byte or newline
                0x20..=0x7e | b'\n' => self.write_byte(byte),
                // not part of printable ASCII range
                _ => self.write_byte(0xfe),
            }
        }
    }

    pub fn set_cursor(&mut self, row: usize, column: usize) -> Result<(), LumenError> {
        if row >= BUFFER_HEIGHT || column >= BUFFER_WIDTH {
            return Err(LumenError::OutOfRange);
        }

        self.row_position = row;
        self.column_position = column;

        Ok(())
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row_position, self.column_position)
    }

    pub fn entry_at(&self, row: usize, column: usize) -> Result<ScreenChar, LumenError> {
        if row >= BUFFER_HEIGHT || column >= BUFFER_WIDTH {
            return Err(LumenError::OutOfRange);
        }

        Ok(self.buffer.chars[row][column].read())
    }
}

impl fmt::Write for TextWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s);
        Ok(())
    }
}

#[cfg(test)]
pub mod test_case {
    use super::*;
    use crate::vga::WRITER;

    #[test_case]
    pub fn test_case_color_code_encoding() {
        assert_eq!(ColorCode::new(Color::White, Color::Black).as_u8(), 0x0F);
        assert_eq!(ColorCode::new(Color::Black, Color::White).as_u8(), 0xF0);
        assert_eq!(ColorCode::new(Color::LightGray, Color::Black).as_u8(), 0x07);
        assert_eq!(ColorCode::new(Color::Yellow, Color::Blue).as_u8(), 0x1E);
    }

    #[test_case]
    pub fn test_case_screen_char_entry_layout() {
        assert_eq!(core::mem::size_of::<ScreenChar>(), 2);

        let entry = ScreenChar {
            ascii_character: b'A',
            color_code: ColorCode::new(Color::White, Color::Black),
        };
        let raw: u16 = unsafe { core::mem::transmute(entry) };

        assert_eq!(raw, 0x0F41);
    }

    #[test_case]
    pub fn test_case_column_wraps_to_next_row() {
        let mut writer = WRITER.lock();
        writer.set_cursor(0, 0).unwrap();

        for _ in 0..BUFFER_WIDTH {
            writer.write_byte(b'x');
        }

        assert_eq!(writer.cursor(), (1, 0));
    }

    #[test_case]
    pub fn test_case_last_row_wraps_to_top() {
        let mut writer = WRITER.lock();
        writer.set_cursor(BUFFER_HEIGHT - 1, BUFFER_WIDTH - 1).unwrap();

        writer.write_byte(b'x');

        assert_eq!(writer.cursor(), (0, 0));
    }

    #[test_case]
    pub fn test_case_full_screen_is_cursor_identity() {
        let mut writer = WRITER.lock();
        writer.set_cursor(0, 0).unwrap();

        for _ in 0..BUFFER_HEIGHT * BUFFER_WIDTH {
            writer.write_byte(b'.');
        }

        assert_eq!(writer.cursor(), (0, 0));
    }

    #[test_case]
    pub fn test_case_newline_wraps_without_scrolling() {
        let mut writer = WRITER.lock();
        writer.set_cursor(BUFFER_HEIGHT - 1, 5).unwrap();

        writer.write_byte(b'\n');

        assert_eq!(writer.cursor(), (0, 0));
    }

    #[test_case]
    pub fn test_case_initialize_clears_and_homes() {
        let mut writer = WRITER.lock();
        writer.set_cursor(12, 40).unwrap();
        writer.write_string("leftover");

        writer.initialize();

        assert_eq!(writer.cursor(), (0, 0));

        let top_left = writer.entry_at(0, 0).unwrap();
        let middle = writer.entry_at(12, 40).unwrap();
        let bottom_right = writer.entry_at(BUFFER_HEIGHT - 1, BUFFER_WIDTH - 1).unwrap();

        for entry in [top_left, middle, bottom_right] {
            assert_eq!(entry.ascii_character, b' ');
            assert_eq!(entry.color_code, ColorCode::new(Color::White, Color::Black));
        }
    }

    #[test_case]
    pub fn test_case_write_string_lands_at_cursor() {
        let mut writer = WRITER.lock();
        writer.set_cursor(2, 0).unwrap();

        writer.write_string("ok");

        assert_eq!(writer.entry_at(2, 0).unwrap().ascii_character, b'o');
        assert_eq!(writer.entry_at(2, 1).unwrap().ascii_character, b'k');
        assert_eq!(writer.cursor(), (2, 2));
    }

    #[test_case]
    pub fn test_case_unprintable_bytes_are_substituted() {
        let mut writer = WRITER.lock();
        writer.set_cursor(3, 0).unwrap();

        writer.write_string("\té");

        // one tab plus the two bytes of the multi-byte char
        for column in 0..3 {
            assert_eq!(writer.entry_at(3, column).unwrap().ascii_character, 0xfe);
        }
    }

    #[test_case]
    pub fn test_case_set_cursor_rejects_out_of_range() {
        let mut writer = WRITER.lock();

        assert_eq!(writer.set_cursor(BUFFER_HEIGHT, 0), Err(LumenError::OutOfRange));
        assert_eq!(writer.set_cursor(0, BUFFER_WIDTH), Err(LumenError::OutOfRange));
        assert_eq!(writer.set_cursor(BUFFER_HEIGHT - 1, BUFFER_WIDTH - 1), Ok(()));
    }
}
