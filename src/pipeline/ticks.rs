use crate::types::filter::Metric;
use crate::types::weekly::{AxisTick, WeeklyAggregate};

/// Upper bound on generated ticks; larger ranges widen the step instead.
pub const MAX_TICKS: usize = 200;

/// Y-axis ticks at the metric's fixed step, from zero up to the largest
/// weekly value rounded up to the next step.
///
/// An empty (or all-zero) aggregate set yields a single zero tick. When the
/// range would need more than [`MAX_TICKS`] steps, the step grows by a whole
/// multiple of the metric's step so labels stay on round values.
pub fn y_ticks(weeks: &[WeeklyAggregate], metric: Metric) -> Vec<AxisTick> {
    let base = metric.tick_step();
    let max = weeks
        .iter()
        .map(|week| week.value(metric))
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);

    let raw_steps = (max / base).ceil();
    let step = if raw_steps > MAX_TICKS as f64 {
        base * (raw_steps / MAX_TICKS as f64).ceil()
    } else {
        base
    };
    let steps = ((max / step).ceil() as usize).min(MAX_TICKS);

    (0..=steps)
        .map(|i| {
            let value = i as f64 * step;
            AxisTick {
                value,
                label: metric.format_tick(value),
            }
        })
        .collect()
}

/// Top of the y axis; never zero so the chart can always be scaled.
pub fn axis_max(ticks: &[AxisTick], metric: Metric) -> f64 {
    ticks
        .last()
        .map(|tick| tick.value)
        .filter(|value| *value > 0.0)
        .unwrap_or_else(|| metric.tick_step())
}
