use std::fs::OpenOptions;
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::ptr;

/// Physical base of the lightweight HPS-to-FPGA bridge window.
pub const LW_BRIDGE_BASE: u64 = 0xFF20_0000;

/// Span of the lightweight bridge window.
pub const LW_BRIDGE_SPAN: usize = 0x0000_5000;

/// Offset of the red LED register inside the bridge window.
pub const LEDR_BASE: usize = 0x0000_0000;

static MEM_DEVICE: &str = "/dev/mem";

/// A process-visible window onto a physical address range, established with
/// `mmap` and released exactly once when the value is dropped.
pub struct PhysicalMapping
{
    base: *mut u8,
    span: usize,
}

impl PhysicalMapping {

    /// Maps `[base, base + span)` of physical memory through `/dev/mem`. The
    /// device is opened with `O_SYNC` so register writes bypass the cache.
    ///
    pub fn new(base: u64, span: usize) -> io::Result<Self> {
        Self::with_device(MEM_DEVICE, base, span)
    }

    fn with_device(device: impl AsRef<Path>, base: u64, span: usize) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open(device)?;

        // The fd only has to outlive the mmap call; the mapping survives the
        // close when `file` goes out of scope.
        let virt = unsafe {
            libc::mmap(
                ptr::null_mut(),
                span,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                file.as_raw_fd(),
                base as libc::off_t,
            )
        };
        if virt == libc::MAP_FAILED {
            return Err(io::Error::last_os_error());
        }

        Ok(PhysicalMapping {
            base: virt.cast(),
            span,
        })
    }

    /// Writes the 32-bit slot at `offset` bytes into the window.
    ///
    pub fn write_u32(&mut self, offset: usize, value: u32) {
        assert!(offset + 4 <= self.span);
        unsafe { self.base.add(offset).cast::<u32>().write_volatile(value) }
    }

    /// Reads the 32-bit slot at `offset` bytes into the window.
    ///
    pub fn read_u32(&self, offset: usize) -> u32 {
        assert!(offset + 4 <= self.span);
        unsafe { self.base.add(offset).cast::<u32>().read_volatile() }
    }
}

impl Drop for PhysicalMapping {
    fn drop(&mut self) {
        unsafe {
            libc::munmap(self.base.cast(), self.span);
        }
    }
}

/// The LED bank behind the lightweight bridge: a single writable 32-bit
/// register showing the running step count.
pub struct LedBank
{
    mapping: PhysicalMapping,
}

impl LedBank {
    pub fn open() -> io::Result<Self> {
        Ok(LedBank {
            mapping: PhysicalMapping::new(LW_BRIDGE_BASE, LW_BRIDGE_SPAN)?,
        })
    }

    pub fn set(&mut self, value: u32) {
        self.mapping.write_u32(LEDR_BASE, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", name, std::process::id()));
        let file = File::create(&path).unwrap();
        file.set_len(4096).unwrap();
        path
    }

    #[test]
    fn slot_write_read_round_trip() {
        let path = scratch_file("mmio-roundtrip");
        let mut mapping = PhysicalMapping::with_device(&path, 0, 4096).unwrap();

        mapping.write_u32(0, 0x0000_002A);
        mapping.write_u32(8, u32::MAX);
        assert_eq!(mapping.read_u32(0), 0x0000_002A);
        assert_eq!(mapping.read_u32(8), u32::MAX);

        drop(mapping);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn drop_releases_mapping_and_data_persists() {
        let path = scratch_file("mmio-persist");
        let mut mapping = PhysicalMapping::with_device(&path, 0, 4096).unwrap();
        mapping.write_u32(4, 7);
        drop(mapping);

        // A second mapping of the same range sees what the first one wrote.
        let mapping = PhysicalMapping::with_device(&path, 0, 4096).unwrap();
        assert_eq!(mapping.read_u32(4), 7);
        drop(mapping);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_device_is_reported() {
        assert!(PhysicalMapping::with_device("/nonexistent/mem", 0, 4096).is_err());
    }
}
