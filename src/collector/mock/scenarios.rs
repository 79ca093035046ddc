//! Pre-built `/proc/interrupts` captures for testing.

use super::filesystem::MockFs;

/// Four CPUs, most device interrupts landing on CPU0.
pub const TYPICAL_INTERRUPTS: &str = "\
            CPU0       CPU1       CPU2       CPU3
   0:         44          0          0          0  IR-IO-APIC    2-edge      timer
   1:          0          9          0          0  IR-IO-APIC    1-edge      i8042
   8:          0          0          1          0  IR-IO-APIC    8-edge      rtc0
   9:          0          4          0          0  IR-IO-APIC    9-fasteoi   acpi
  16:       1200          0          0          0  IR-IO-APIC   16-fasteoi   ehci_hcd:usb1
 120:      80000          0          0          0  DMAR-MSI    0-edge      dmar0
 122:     250000       1000          0          0  IR-PCI-MSI 327680-edge      xhci_hcd
 123:     600000          0      20000          0  IR-PCI-MSI 520192-edge      enp0s31f6
 124:      45000      45000          0          0  IR-PCI-MSI 32768-edge      i915
 125:     300000          0          0     100000  IR-PCI-MSI 1048576-edge      nvme0q0
 NMI:         12         11         10         10   Non-maskable interrupts
 LOC:    9123456    8123456    8001234    7999999   Local timer interrupts
 SPU:          0          0          0          0   Spurious interrupts
 RES:      12000      11000      10000       9000   Rescheduling interrupts
 ERR:          0
 MIS:          0
";

/// Single CPU machine.
pub const SINGLE_CPU_INTERRUPTS: &str = "\
           CPU0
  0:        120   IO-APIC   2-edge      timer
  1:         10   IO-APIC   1-edge      i8042
NMI:          0   Non-maskable interrupts
";

/// Two CPUs with a handful of rows the parser has to skip.
pub const MALFORMED_INTERRUPTS: &str = "\
           CPU0       CPU1
  0:         50          0   IO-APIC   2-edge      timer
this line is not an interrupt row
  4:         x1         x2   IO-APIC   4-edge      ttyS0
  6:         10          0   IO-APIC   6-edge      floppy
  7:          1          2          3   IO-APIC   7-edge   parport0
  8:          0         10   IO-APIC   8-edge      rtc0
LOC:        100        100   Local timer interrupts
";

impl MockFs {
    /// Four-CPU host with an uneven device interrupt load.
    pub fn typical_system() -> Self {
        Self::with_interrupts(TYPICAL_INTERRUPTS)
    }

    /// Single-CPU host; standard deviation is undefined for it.
    pub fn single_cpu() -> Self {
        Self::with_interrupts(SINGLE_CPU_INTERRUPTS)
    }

    /// Two-CPU host whose table contains malformed rows.
    pub fn malformed_lines() -> Self {
        Self::with_interrupts(MALFORMED_INTERRUPTS)
    }
}
