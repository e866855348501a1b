use crate::error::Error;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use std::io::{Read, Write};

/// Extends [`Read`] with methods for reading the fixed-width little-endian
/// scalars that make up every Cast payload. Cast has exactly one
/// endianness, unlike formats that toggle between big- and little-endian
/// per platform, so these never take an endianness parameter.
pub(crate) trait ReadPrimitiveExt: Read {
    #[inline]
    fn read_u16_le(&mut self) -> std::io::Result<u16> {
        self.read_u16::<LittleEndian>()
    }

    #[inline]
    fn read_u32_le(&mut self) -> std::io::Result<u32> {
        self.read_u32::<LittleEndian>()
    }

    #[inline]
    fn read_u64_le(&mut self) -> std::io::Result<u64> {
        self.read_u64::<LittleEndian>()
    }

    #[inline]
    fn read_i32_le(&mut self) -> std::io::Result<i32> {
        self.read_i32::<LittleEndian>()
    }

    #[inline]
    fn read_f32_le(&mut self) -> std::io::Result<f32> {
        self.read_f32::<LittleEndian>()
    }

    #[inline]
    fn read_f64_le(&mut self) -> std::io::Result<f64> {
        self.read_f64::<LittleEndian>()
    }
}

impl<R> ReadPrimitiveExt for R where R: Read {}

/// Extends [`Write`] with the little-endian counterparts of
/// [`ReadPrimitiveExt`].
pub(crate) trait WritePrimitiveExt: Write {
    #[inline]
    fn write_u16_le(&mut self, n: u16) -> std::io::Result<()> {
        self.write_u16::<LittleEndian>(n)
    }

    #[inline]
    fn write_u32_le(&mut self, n: u32) -> std::io::Result<()> {
        self.write_u32::<LittleEndian>(n)
    }

    #[inline]
    fn write_u64_le(&mut self, n: u64) -> std::io::Result<()> {
        self.write_u64::<LittleEndian>(n)
    }

    #[inline]
    fn write_i32_le(&mut self, n: i32) -> std::io::Result<()> {
        self.write_i32::<LittleEndian>(n)
    }

    #[inline]
    fn write_f32_le(&mut self, n: f32) -> std::io::Result<()> {
        self.write_f32::<LittleEndian>(n)
    }

    #[inline]
    fn write_f64_le(&mut self, n: f64) -> std::io::Result<()> {
        self.write_f64::<LittleEndian>(n)
    }
}

impl<W> WritePrimitiveExt for W where W: Write {}

/// Reads the null-terminated UTF-8 strings used by [`crate::Property::String`].
pub(crate) trait ReadString: Read {
    #[inline]
    fn read_cstring(&mut self) -> Result<String, Error> {
        let mut buf = Vec::new();
        loop {
            let byte = self.read_u8().map_err(Error::from_read)?;
            if byte == 0u8 {
                break;
            }
            buf.push(byte);
        }

        Ok(String::from_utf8(buf)?)
    }
}

impl<R> ReadString for R where R: Read {}

/// Writes the null-terminated UTF-8 strings used by [`crate::Property::String`].
pub(crate) trait WriteString: Write {
    #[inline]
    fn write_cstring(&mut self, value: &str) -> std::io::Result<()> {
        self.write_all(value.as_bytes())?;
        self.write_u8(0u8)
    }
}

impl<W> WriteString for W where W: Write {}
