/*!
mmu.rs - Soft-switch decoding for BASIC/KERNAL/CHAR-ROM visibility.

Two independent sources feed the decision:
  - The processor port, a plain RAM byte at address 1 (bit 0 = LORAM/BASIC,
    bit 1 = HIRAM/KERNAL, bit 2 = CHAREN; CHAREN clear selects the
    character ROM image into the $D000-$DFFF window, set selects the I/O
    register table).
  - An optional MMU configuration register at $FF00 (present only when the
    `mmu` feature is enabled), which can force all three ROMs visible and
    can force the character ROM off regardless of the processor port.

`$FF00` reads/writes are special-cased ahead of this module in
`cpu_interface`; `Mmu` only holds the configuration byte and the decode
rules.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryMap {
    pub basic_visible: bool,
    pub kernal_visible: bool,
    pub char_visible: bool,
    pub ram_block: u8,
}

pub struct Mmu {
    pub config: u8,
    pub enabled: bool,
}

impl Mmu {
    pub fn new() -> Self {
        Self {
            config: 0,
            enabled: cfg!(feature = "mmu"),
        }
    }

    pub fn decode(&self, processor_port: u8) -> MemoryMap {
        let mut basic_visible = processor_port & 0x01 != 0;
        let mut kernal_visible = processor_port & 0x02 != 0;
        let mut char_visible = processor_port & 0x04 == 0;
        let mut ram_block = 0u8;

        if self.enabled {
            let force_all = (self.config & 0b0011_0000) == 0;
            if force_all {
                basic_visible = true;
                kernal_visible = true;
                char_visible = true;
            }
            if self.config & 0x01 == 0 {
                char_visible = false;
            }
            ram_block = (self.config >> 6) & 0b11;
            if ram_block > 1 {
                ram_block = 1;
            }
        }

        MemoryMap {
            basic_visible,
            kernal_visible,
            char_visible,
            ram_block,
        }
    }
}

impl Default for Mmu {
    fn default() -> Self {
        Self::new()
    }
}
