/*++

Licensed under the Apache-2.0 license.

File Name:

    print.rs

Abstract:

    File contains support routines and macros to print to the UART

--*/
use core::convert::Infallible;
use ufmt::{uDisplay, uWrite};

#[derive(Default)]
pub struct RomPrinter;

impl uWrite for RomPrinter {
    type Error = Infallible;

    /// Writes a string slice into this writer, returning whether the write succeeded.
    #[cfg(not(feature = "std"))]
    #[inline(never)]
    fn write_str(&mut self, _str: &str) -> Result<(), Self::Error> {
        #[cfg(feature = "uart")]
        lumen_drivers::Uart::new(unsafe { lumen_registers::RealMmio::new() }).write(_str);
        Ok(())
    }

    /// Writes a string slice into this writer, returning whether the write succeeded.
    #[cfg(feature = "std")]
    fn write_str(&mut self, str: &str) -> Result<(), Self::Error> {
        print!("{str}");
        Ok(())
    }
}

#[macro_export]
macro_rules! cprint {
    ($($tt:tt)*) => {{
        let _ = ufmt::uwrite!(&mut $crate::print::RomPrinter::default(), $($tt)*);
    }}
}

#[macro_export]
macro_rules! cprintln {
    ($($tt:tt)*) => {{
        let _ = ufmt::uwriteln!(&mut $crate::print::RomPrinter::default(), $($tt)*);
    }}
}

/// `u32` printed as a fixed-width hex literal.
pub struct HexU32(pub u32);

impl uDisplay for HexU32 {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str("0x")?;
        for i in (0..8).rev() {
            let nibble = ((self.0 >> (i * 4)) & 0xf) as u8;
            let c = if nibble < 10 {
                nibble + b'0'
            } else {
                nibble - 10 + b'A'
            };
            f.write_char(c as char)?;
        }
        Ok(())
    }
}
