// CPU usage fractions from two cumulative samples

use crate::models::{CpuTimes, CpuUsage};

/// Field-wise `current - previous`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuDelta {
    pub times: CpuTimes,
    /// At least one counter went backwards (kernel reset or out-of-order read);
    /// those fields were clamped to zero.
    pub reset: bool,
}

pub fn delta(previous: &CpuTimes, current: &CpuTimes) -> CpuDelta {
    let mut reset = false;
    let mut sub = |prev: u64, cur: u64| {
        cur.checked_sub(prev).unwrap_or_else(|| {
            reset = true;
            0
        })
    };
    let times = CpuTimes {
        user: sub(previous.user, current.user),
        nice: sub(previous.nice, current.nice),
        system: sub(previous.system, current.system),
        idle: sub(previous.idle, current.idle),
        iowait: sub(previous.iowait, current.iowait),
        irq: sub(previous.irq, current.irq),
        softirq: sub(previous.softirq, current.softirq),
        steal: sub(previous.steal, current.steal),
    };
    CpuDelta { times, reset }
}

/// Interrupt, busy and idle shares of `delta.total()`. All zero when nothing elapsed.
/// Steal time belongs to none of them, so the three sum to 1 only when steal is zero.
pub fn usage_fractions(delta: &CpuTimes) -> CpuUsage {
    let total = delta.total();
    if total == 0 {
        return CpuUsage::default();
    }
    let total = total as f64;
    CpuUsage {
        interrupts: CpuTimes::sum(&[delta.irq, delta.softirq]) as f64 / total,
        util: CpuTimes::sum(&[delta.user, delta.nice, delta.system]) as f64 / total,
        idle: CpuTimes::sum(&[delta.idle, delta.iowait]) as f64 / total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(v: [u64; 8]) -> CpuTimes {
        CpuTimes {
            user: v[0],
            nice: v[1],
            system: v[2],
            idle: v[3],
            iowait: v[4],
            irq: v[5],
            softirq: v[6],
            steal: v[7],
        }
    }

    #[test]
    fn delta_is_fieldwise() {
        let prev = times([10, 20, 30, 40, 50, 60, 70, 80]);
        let cur = times([11, 22, 33, 44, 55, 66, 77, 88]);
        let d = delta(&prev, &cur);
        assert!(!d.reset);
        assert_eq!(d.times, times([1, 2, 3, 4, 5, 6, 7, 8]));
        assert_eq!(d.times.total(), 36);
    }

    #[test]
    fn counter_going_backwards_clamps_and_flags() {
        let prev = times([100, 0, 0, 100, 0, 0, 0, 0]);
        let cur = times([50, 0, 0, 150, 0, 0, 0, 0]);
        let d = delta(&prev, &cur);
        assert!(d.reset);
        assert_eq!(d.times.user, 0);
        assert_eq!(d.times.idle, 50);
    }

    #[test]
    fn fractions_zero_when_total_zero() {
        assert_eq!(usage_fractions(&CpuTimes::default()), CpuUsage::default());
    }

    #[test]
    fn fractions_sum_to_one_without_steal() {
        let u = usage_fractions(&times([3, 1, 1, 2, 1, 1, 1, 0]));
        assert!((u.util - 0.5).abs() < 1e-12);
        assert!((u.idle - 0.3).abs() < 1e-12);
        assert!((u.interrupts - 0.2).abs() < 1e-12);
        assert!((u.util + u.idle + u.interrupts - 1.0).abs() < 1e-12);
    }

    #[test]
    fn counters_near_u64_max_do_not_overflow() {
        let half = u64::MAX / 2 + 1;
        let prev = CpuTimes::default();
        let cur = times([half, half, 0, half, half, 0, 0, 0]);
        let d = delta(&prev, &cur);
        assert_eq!(d.times.total(), 4 * u128::from(half));
        let u = usage_fractions(&d.times);
        assert!((u.util - 0.5).abs() < 1e-12);
        assert!((u.idle - 0.5).abs() < 1e-12);
        assert_eq!(u.interrupts, 0.0);
    }

    #[test]
    fn steal_excluded_from_all_fractions() {
        let u = usage_fractions(&times([1, 0, 0, 1, 0, 1, 0, 1]));
        assert!((u.util + u.idle + u.interrupts - 0.75).abs() < 1e-12);
        assert!(u.util + u.idle + u.interrupts <= 1.0);
    }
}
