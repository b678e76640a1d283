/*!
roms.rs - Fixed-size ROM image storage for the three system ROMs.

Images are plain contiguous blobs with no header or checksum (see
`crate::rom` for the loader that reads them off disk). This module only
owns the bytes and the size constraints.
*/

use crate::error::EmuError;

pub const CHAR_ROM_SIZE: usize = 0x1000;
pub const BASIC_ROM_SIZE: usize = 0x2000;
pub const KERNAL_ROM_SIZE: usize = 0x2000;

#[derive(Debug)]
pub struct RomSet {
    pub char_rom: Box<[u8; CHAR_ROM_SIZE]>,
    pub basic_rom: Box<[u8; BASIC_ROM_SIZE]>,
    pub kernal_rom: Box<[u8; KERNAL_ROM_SIZE]>,
}

impl RomSet {
    /// A zero-filled set, useful for tests that never touch ROM-shadowed
    /// windows.
    pub fn blank() -> Self {
        Self {
            char_rom: Box::new([0u8; CHAR_ROM_SIZE]),
            basic_rom: Box::new([0u8; BASIC_ROM_SIZE]),
            kernal_rom: Box::new([0u8; KERNAL_ROM_SIZE]),
        }
    }

    pub fn from_images(
        char_rom: &[u8],
        basic_rom: &[u8],
        kernal_rom: &[u8],
    ) -> Result<Self, EmuError> {
        Ok(Self {
            char_rom: fit::<CHAR_ROM_SIZE>("character", char_rom)?,
            basic_rom: fit::<BASIC_ROM_SIZE>("BASIC", basic_rom)?,
            kernal_rom: fit::<KERNAL_ROM_SIZE>("KERNAL", kernal_rom)?,
        })
    }
}

fn fit<const N: usize>(which: &'static str, bytes: &[u8]) -> Result<Box<[u8; N]>, EmuError> {
    if bytes.len() != N {
        return Err(EmuError::RomSize {
            which,
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut arr = Box::new([0u8; N]);
    arr.copy_from_slice(bytes);
    Ok(arr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_set_is_zeroed() {
        let roms = RomSet::blank();
        assert!(roms.char_rom.iter().all(|&b| b == 0));
        assert!(roms.kernal_rom.iter().all(|&b| b == 0));
    }

    #[test]
    fn from_images_rejects_wrong_size() {
        let err = RomSet::from_images(&[0u8; 10], &[0u8; BASIC_ROM_SIZE], &[0u8; KERNAL_ROM_SIZE])
            .unwrap_err();
        match err {
            EmuError::RomSize { which, expected, actual } => {
                assert_eq!(which, "character");
                assert_eq!(expected, CHAR_ROM_SIZE);
                assert_eq!(actual, 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_images_accepts_exact_sizes() {
        let roms = RomSet::from_images(
            &[1u8; CHAR_ROM_SIZE],
            &[2u8; BASIC_ROM_SIZE],
            &[3u8; KERNAL_ROM_SIZE],
        )
        .expect("exact sizes should fit");
        assert_eq!(roms.char_rom[0], 1);
        assert_eq!(roms.basic_rom[0], 2);
        assert_eq!(roms.kernal_rom[0], 3);
    }
}
