use std::{
    io::{self, Write},
    mem::MaybeUninit,
    os::fd::{AsRawFd, RawFd},
};

use core_2048::{Grid, SIZE};

const SQUARE_HEIGHT: usize = 3;
const TOP_ROW: &[u8] = "┏━━━━━━━┳━━━━━━━┳━━━━━━━┳━━━━━━━┓\n".as_bytes();
const SEPARATOR_ROW: &[u8] = "┣━━━━━━━╋━━━━━━━╋━━━━━━━╋━━━━━━━┫\n".as_bytes();
const BOTTOM_ROW: &[u8] = "┗━━━━━━━┻━━━━━━━┻━━━━━━━┻━━━━━━━┛\n".as_bytes();
const EMPTY_ROW: &[u8] = "┃       ┃       ┃       ┃       ┃\n".as_bytes();
const EMPTY_CELL: &[u8] = "┃       ".as_bytes();
// Foreground SGR codes, cycled by tile exponent starting at 2.
const COLOUR_TABLE: [u8; 7] = [90, 33, 31, 32, 33, 36, 35];

fn tile_colour(value: u32) -> Option<u8> {
    (value != 0).then(|| {
        let exponent = value.trailing_zeros() as usize;

        COLOUR_TABLE[(exponent - 1) % COLOUR_TABLE.len()]
    })
}

fn draw_padding_line(out: &mut impl Write, row: &[u32; SIZE]) -> io::Result<()> {
    for &value in row {
        if let Some(colour) = tile_colour(value) {
            write!(out, "┃\x1b[{}m       \x1b[m", colour + 10)?;
        } else {
            out.write_all(EMPTY_CELL)?;
        }
    }

    Ok(())
}

fn draw_grid_row(out: &mut impl Write, row: &[u32; SIZE]) -> io::Result<()> {
    for _ in 0..(SQUARE_HEIGHT - 1) / 2 {
        draw_padding_line(out, row)?;
    }

    out.write_all(b"\x1b[E")?;

    for &value in row {
        if let Some(colour) = tile_colour(value) {
            write!(out, "┃\x1b[7m\x1b[{colour}m{value:^7}\x1b[m")?;
        } else {
            out.write_all(EMPTY_CELL)?;
        }
    }

    out.write_all(b"\x1b[E")?;

    for _ in 0..(SQUARE_HEIGHT - 1).div_ceil(2) {
        draw_padding_line(out, row)?;
    }

    Ok(())
}

/// Draws an empty frame below the cursor, then fills in `grid`.
pub fn draw_board(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    out.write_all(b"\n")?;
    out.write_all(TOP_ROW)?;

    for i in 0..SIZE {
        if i != 0 {
            out.write_all(SEPARATOR_ROW)?;
        }

        for _ in 0..SQUARE_HEIGHT {
            out.write_all(EMPTY_ROW)?;
        }
    }

    out.write_all(BOTTOM_ROW)?;

    redraw_board(out, &Grid::EMPTY, grid)
}

/// Repaints the rows that differ between `old_grid` and `new_grid`. The
/// cursor is expected to sit on the line below the frame and is left there.
pub fn redraw_board(out: &mut impl Write, old_grid: &Grid, new_grid: &Grid) -> io::Result<()> {
    let mut current_line = 0;

    let changed_rows = (0..SIZE).filter(|&i| old_grid.rows()[i] != new_grid.rows()[i]);

    for row in changed_rows {
        let final_row_to_end = (SQUARE_HEIGHT - 1).div_ceil(2) + 2;
        let between_rows = SQUARE_HEIGHT + 1;
        let target_line = final_row_to_end + between_rows * (SIZE - 1 - row) + 1;

        if target_line > current_line {
            write!(out, "\x1b[{}F", target_line - current_line)?;
        } else {
            write!(out, "\x1b[{}E", current_line - target_line)?;
        }

        draw_grid_row(out, &new_grid.rows()[row])?;
        current_line = target_line - 2;
    }

    if current_line != 0 {
        write!(out, "\x1b[{current_line}E")?;
    }

    out.flush()
}

/// Puts the terminal into non-canonical, no-echo mode until dropped.
pub struct TerminalGuard {
    fd: RawFd,
    original: libc::termios,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        unsafe {
            libc::tcsetattr(self.fd, libc::TCSADRAIN, &self.original);
        }
    }
}

pub fn setup_terminal(fd: &impl AsRawFd) -> io::Result<TerminalGuard> {
    let fd = fd.as_raw_fd();
    let mut termios = MaybeUninit::uninit();

    let original = unsafe {
        if libc::tcgetattr(fd, termios.as_mut_ptr()) != 0 {
            Err(io::Error::new(
                io::ErrorKind::Other,
                "Error calling tcgetattr",
            ))?;
        }

        termios.assume_init()
    };

    let mut termios = original;
    termios.c_lflag &= !(libc::ECHO | libc::ICANON);

    unsafe {
        if libc::tcsetattr(fd, libc::TCSADRAIN, &termios) != 0 {
            Err(io::Error::new(
                io::ErrorKind::Other,
                "Error calling tcsetattr",
            ))?;
        }
    }

    Ok(TerminalGuard { fd, original })
}
