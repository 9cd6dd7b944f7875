// Parsers for /proc/stat, /proc/interrupts and /proc/meminfo text.
// Malformed numbers are recovered locally (zero or skipped), never surfaced.

use crate::classifier::classify;
use crate::models::{CpuTimes, InterruptSnapshot, MemInfo};

/// Trailing words of architecture counter rows (`NMI`, `LOC`, `TLB`, ...). Such rows are
/// classified by their leading label instead of their description.
const ARCH_COUNTER_MARKERS: &[&str] = &[
    "interrupts",
    "retries",
    "exceptions",
    "polls",
    "event",
    "shootdowns",
];

fn parse_or_zero(field: Option<&str>) -> u64 {
    field.and_then(|f| f.parse().ok()).unwrap_or(0)
}

/// Aggregate `cpu` line and `ctxt` counter from `/proc/stat`.
///
/// Per-CPU lines (`cpu0`, `cpu1`, ...) are ignored. Missing trailing fields (older kernels
/// without `steal`) and unparsable fields read as zero.
pub fn parse_stat(content: &str) -> (CpuTimes, u64) {
    let mut times = CpuTimes::default();
    let mut context_switches = 0;

    for line in content.lines() {
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("cpu") => {
                times = CpuTimes {
                    user: parse_or_zero(fields.next()),
                    nice: parse_or_zero(fields.next()),
                    system: parse_or_zero(fields.next()),
                    idle: parse_or_zero(fields.next()),
                    iowait: parse_or_zero(fields.next()),
                    irq: parse_or_zero(fields.next()),
                    softirq: parse_or_zero(fields.next()),
                    steal: parse_or_zero(fields.next()),
                };
            }
            Some("ctxt") => context_switches = parse_or_zero(fields.next()),
            _ => {}
        }
    }

    (times, context_switches)
}

/// Per-CPU and per-category interrupt totals from `/proc/interrupts`.
///
/// The header holds one `CPUn` token per column. Each row is `LABEL: n0 n1 ... [descriptor]`;
/// rows shorter than `columns + 1` fields are skipped, unparsable cells are skipped
/// individually. The classification key is the last token of the row, or the label
/// (colon stripped) when that token is an architecture counter marker.
pub fn parse_interrupts(content: &str) -> InterruptSnapshot {
    let mut snapshot = InterruptSnapshot::default();
    let mut lines = content.lines();
    let columns = match lines.next() {
        // the header has no label column: every token is a CPU, so no "minus one"
        Some(header) => header.split_whitespace().count(),
        None => return snapshot,
    };

    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < columns + 1 {
            continue;
        }

        let last = fields[fields.len() - 1];
        let key = if ARCH_COUNTER_MARKERS.iter().any(|m| last.contains(m)) {
            fields[0].trim_end_matches(':')
        } else {
            last
        };
        let category = classify(key);
        snapshot.per_category.entry(category).or_default();

        for (cpu, cell) in fields[1..=columns].iter().enumerate() {
            if let Ok(count) = cell.parse::<u64>() {
                snapshot.record(category, cpu, count);
            }
        }
    }

    snapshot
}

/// The five recognised `/proc/meminfo` keys; everything else is ignored.
pub fn parse_meminfo(content: &str) -> MemInfo {
    let mut info = MemInfo::default();

    for line in content.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let slot = match key.trim() {
            "MemTotal" => &mut info.mem_total_kb,
            "MemFree" => &mut info.mem_free_kb,
            "MemAvailable" => &mut info.mem_available_kb,
            "SwapTotal" => &mut info.swap_total_kb,
            "SwapFree" => &mut info.swap_free_kb,
            _ => continue,
        };
        *slot = parse_or_zero(rest.split_whitespace().next());
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    const STAT: &str = "\
cpu  47500 2396 21138 741776 6759 10 516 7 0 0
cpu0 1657 25 649 31631 152 0 40 0 0 0
cpu1 1895 140 624 31335 197 0 9 0 0 0
intr 5968724 39 0 0 0
ctxt 9220606
btime 1698004999
processes 10505
";

    const INTERRUPTS: &str = "\
           CPU0       CPU1
  0:         40          0   IO-APIC    2-edge      timer
  8:          0          1   IO-APIC    8-edge      rtc0
  9:        100        200   IO-APIC    9-fasteoi   acpi
 16:          5          x   IO-APIC   16-fasteoi   i801_smbus
124:        300        400   PCI-MSIX-0000:01:00.0    0-edge      nvme0q0
NMI:          1          2   Non-maskable interrupts
LOC:       1000       2000   Local timer interrupts
TLB:          7          8   TLB shootdowns
ERR:          0
";

    #[test]
    fn stat_reads_aggregate_line_and_ctxt() {
        let (times, ctxt) = parse_stat(STAT);
        assert_eq!(
            times,
            CpuTimes {
                user: 47500,
                nice: 2396,
                system: 21138,
                idle: 741776,
                iowait: 6759,
                irq: 10,
                softirq: 516,
                steal: 7,
            }
        );
        assert_eq!(ctxt, 9220606);
    }

    #[test]
    fn stat_missing_steal_defaults_to_zero() {
        let (times, _) = parse_stat("cpu 1 2 3 4 5 6 7\n");
        assert_eq!(times.softirq, 7);
        assert_eq!(times.steal, 0);
    }

    #[test]
    fn stat_malformed_fields_read_as_zero() {
        let (times, ctxt) = parse_stat("cpu 1 abc 3 4 5 6 7 8\nctxt nope\n");
        assert_eq!(times.user, 1);
        assert_eq!(times.nice, 0);
        assert_eq!(times.system, 3);
        assert_eq!(times.steal, 8);
        assert_eq!(ctxt, 0);
    }

    #[test]
    fn stat_without_cpu_line_is_all_zero() {
        let (times, ctxt) = parse_stat("ctxt 5\n");
        assert_eq!(times, CpuTimes::default());
        assert_eq!(ctxt, 5);
    }

    #[test]
    fn interrupts_sum_per_cpu() {
        let snap = parse_interrupts(INTERRUPTS);
        // 16: cell for CPU1 is unparsable and skipped, ERR: row is too short
        assert_eq!(snap.per_cpu["0"], 40 + 0 + 100 + 5 + 300 + 1 + 1000 + 7);
        assert_eq!(snap.per_cpu["1"], 0 + 1 + 200 + 400 + 2 + 2000 + 8);
    }

    #[test]
    fn interrupts_categories() {
        let snap = parse_interrupts(INTERRUPTS);
        assert_eq!(snap.per_category[&Category::Timer]["0"], 40);
        assert_eq!(snap.per_category[&Category::Timer]["1"], 1);
        assert_eq!(snap.per_category[&Category::Power]["1"], 200);
        assert_eq!(snap.per_category[&Category::Storage]["0"], 300);
        // i801_smbus has no pattern
        assert_eq!(snap.per_category[&Category::Other]["0"], 5);
        assert!(!snap.per_category[&Category::Other].contains_key("1"));
    }

    #[test]
    fn arch_counters_classified_by_label() {
        let snap = parse_interrupts(INTERRUPTS);
        // LOC is "Local timer interrupts": label wins over the word "timer"
        assert_eq!(snap.per_category[&Category::Kernel]["0"], 1 + 1000);
        assert_eq!(snap.per_category[&Category::Kernel]["1"], 2 + 2000);
        assert_eq!(snap.per_category[&Category::InterCpu]["1"], 8);
    }

    #[test]
    fn category_view_accounts_every_counted_interrupt() {
        let snap = parse_interrupts(INTERRUPTS);
        assert_eq!(snap.total(), snap.category_total());
    }

    #[test]
    fn short_row_skipped_without_aborting() {
        let content = "\
     CPU0  CPU1  CPU2
  1:    1
  2:    1     2     3   IO-APIC  eth0
";
        let snap = parse_interrupts(content);
        assert_eq!(snap.per_cpu.len(), 3);
        assert_eq!(snap.per_category[&Category::Network]["2"], 3);
    }

    #[test]
    fn empty_interrupts_table() {
        assert_eq!(parse_interrupts(""), InterruptSnapshot::default());
        let header_only = parse_interrupts("   CPU0   CPU1\n");
        assert!(header_only.per_cpu.is_empty());
    }

    #[test]
    fn meminfo_extracts_known_keys() {
        let content = "\
MemTotal:       16322392 kB
MemFree:         1050000 kB
MemAvailable:    8000000 kB
Buffers:          123456 kB
SwapCached:            0 kB
SwapTotal:       2097148 kB
SwapFree:        2097000 kB
HugePages_Total:       0
";
        assert_eq!(
            parse_meminfo(content),
            MemInfo {
                mem_total_kb: 16322392,
                mem_free_kb: 1050000,
                mem_available_kb: 8000000,
                swap_total_kb: 2097148,
                swap_free_kb: 2097000,
            }
        );
    }

    #[test]
    fn meminfo_malformed_value_reads_as_zero() {
        let info = parse_meminfo("MemTotal: lots kB\nMemFree: 10 kB\n");
        assert_eq!(info.mem_total_kb, 0);
        assert_eq!(info.mem_free_kb, 10);
    }
}
