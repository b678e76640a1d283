/*!
rom.rs - Loads the three system ROM images off disk into a `RomSet`.

The images are plain fixed-size binary dumps (no header), one file each
for the character generator, BASIC, and KERNAL ROMs. Size validation is
delegated to `RomSet::from_images`; this module only owns the disk I/O and
wraps failures in `EmuError::RomRead`.
*/

use std::fs;
use std::path::Path;

use log::info;

use crate::bus::roms::RomSet;
use crate::error::EmuError;

/// Load char/BASIC/KERNAL ROM images from the given paths and assemble a
/// `RomSet`, or report which file failed to read or had the wrong size.
pub fn load_roms(
    char_path: impl AsRef<Path>,
    basic_path: impl AsRef<Path>,
    kernal_path: impl AsRef<Path>,
) -> Result<RomSet, EmuError> {
    let char_rom = read_image("character", char_path.as_ref())?;
    let basic_rom = read_image("BASIC", basic_path.as_ref())?;
    let kernal_rom = read_image("KERNAL", kernal_path.as_ref())?;
    RomSet::from_images(&char_rom, &basic_rom, &kernal_rom)
}

fn read_image(which: &'static str, path: &Path) -> Result<Vec<u8>, EmuError> {
    let bytes = fs::read(path).map_err(|source| EmuError::RomRead {
        which,
        path: path.display().to_string(),
        source,
    })?;
    info!(
        "{which} ROM image loaded from {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(bytes)
}
