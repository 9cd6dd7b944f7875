// Interrupt source classification by label substring

use crate::models::Category;
use std::sync::LazyLock;

/// Substring patterns per category, grouped by category.
///
/// Matching does not use this order directly; see [`ORDERED_PATTERNS`].
const CATEGORY_TABLE: &[(&str, Category)] = &[
    ("eth", Category::Network),
    ("enp", Category::Network),
    ("ens", Category::Network),
    ("eno", Category::Network),
    ("wlan", Category::Network),
    ("wlx", Category::Network),
    ("mlx", Category::Network),
    ("mlx5", Category::Network),
    ("bnx", Category::Network),
    ("ath10k_pci", Category::Network),
    ("iwlwifi", Category::Network),
    ("e1000e", Category::Network),
    ("igb", Category::Network),
    ("r8169", Category::Network),
    ("virtio_net", Category::Network),
    ("veth", Category::Network),
    ("nvme", Category::Storage),
    ("sd", Category::Storage),
    ("sda", Category::Storage),
    ("sdhci", Category::Storage),
    ("mmc", Category::Storage),
    ("scsi", Category::Storage),
    ("sata", Category::Storage),
    ("ata", Category::Storage),
    ("ahci", Category::Storage),
    ("dm-", Category::Storage),
    ("md", Category::Storage),
    ("uas", Category::Storage),
    ("usb-storage", Category::Storage),
    ("usb", Category::Usb),
    ("xhci", Category::Usb),
    ("xhci_hcd", Category::Usb),
    ("ehci", Category::Usb),
    ("uhci", Category::Usb),
    ("ohci", Category::Usb),
    ("i8042", Category::Input),
    ("psmouse", Category::Input),
    ("usbhid", Category::Input),
    ("hid", Category::Input),
    ("serio", Category::Input),
    ("ELAN", Category::Input),
    ("SYNA", Category::Input),
    ("rmi4", Category::Input),
    ("amdgpu", Category::Gpu),
    ("i915", Category::Gpu),
    ("nvidia", Category::Gpu),
    ("nouveau", Category::Gpu),
    ("snd_hda_intel", Category::Audio),
    ("snd_", Category::Audio),
    ("sof-audio", Category::Audio),
    ("acp", Category::Audio),
    ("acpi", Category::Power),
    ("thermal", Category::Power),
    ("intel_thermal", Category::Power),
    ("rtc", Category::Timer),
    ("timer", Category::Timer),
    ("IPI", Category::InterCpu),
    ("RES", Category::InterCpu),
    ("CAL", Category::InterCpu),
    ("TLB", Category::InterCpu),
    ("NMI", Category::Kernel),
    ("LOC", Category::Kernel),
    ("SPU", Category::Kernel),
    ("PMI", Category::Kernel),
    ("IWI", Category::Kernel),
    ("RTR", Category::Kernel),
    ("MCE", Category::Kernel),
    ("MCP", Category::Kernel),
    ("ERR", Category::Kernel),
    ("MIS", Category::Kernel),
    ("THR", Category::Kernel),
    ("TRM", Category::Kernel),
    ("DFR", Category::Kernel),
    ("pciehp", Category::Pcie),
    ("pcieport", Category::Pcie),
    ("thunderbolt", Category::Pcie),
    ("virtio", Category::Virtualization),
    ("vmbus", Category::Virtualization),
    ("hv_", Category::Virtualization),
    ("gpio", Category::Gpio),
    ("i2c", Category::Gpio),
    ("spi", Category::Gpio),
];

/// Match order: longest pattern first, equal lengths keep table order.
///
/// A label containing several patterns takes the most specific one, so
/// `virtio_net0` is network rather than virtualization and `amdgpu` is gpu rather
/// than storage (`md`).
static ORDERED_PATTERNS: LazyLock<Vec<(&'static str, Category)>> = LazyLock::new(|| {
    let mut patterns = CATEGORY_TABLE.to_vec();
    // stable sort keeps table order among equal lengths
    patterns.sort_by_key(|(pattern, _)| std::cmp::Reverse(pattern.len()));
    patterns
});

/// Category of an interrupt source label; [`Category::Other`] when nothing matches.
/// Matching is case-sensitive substring containment.
pub fn classify(label: &str) -> Category {
    let category = ORDERED_PATTERNS
        .iter()
        .find(|(pattern, _)| label.contains(pattern))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other);
    tracing::trace!(label, %category, "classified interrupt source");
    category
}
