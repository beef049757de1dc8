// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers ("nice" tick steps and tick label formatting).

/// Tick positions on one axis plus the step between them.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub step: f64,
}

impl Ticks {
    /// Tick labels with as many decimals as the step needs.
    pub fn labels(&self) -> Vec<String> {
        self.values.iter().map(|&v| format_tick(v, self.step)).collect()
    }
}

/// Round a raw step to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Ticks at multiples of a nice step inside `[min, max]`, at most `max_ticks` of them.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Ticks {
    let span = max - min;
    if !(span > 0.0) || !span.is_finite() || max_ticks < 2 {
        return Ticks { values: vec![min], step: 1.0 };
    }
    let mut step = nice_step(span / (max_ticks - 1) as f64);
    let mut values = ticks_with_step(min, max, step);
    // Rounding the step up can still leave one tick too many.
    while values.len() > max_ticks {
        step = nice_step(step * 1.01);
        values = ticks_with_step(min, max, step);
    }
    Ticks { values, step }
}

fn ticks_with_step(min: f64, max: f64, step: f64) -> Vec<f64> {
    let eps = step * 1e-9;
    let first = (min / step - 1e-9).ceil() * step;
    let mut out = Vec::new();
    let mut k = 0usize;
    loop {
        let v = first + step * k as f64;
        if v > max + eps { break; }
        // avoid "-0"
        out.push(if v.abs() < eps { 0.0 } else { v });
        k += 1;
    }
    out
}

/// Format a tick value with the decimals implied by `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || !(step > 0.0) {
        0
    } else {
        (-step.log10().floor()).clamp(0.0, 6.0) as usize + usize::from(nice_fraction(step))
    };
    format!("{:.*}", decimals, v)
}

// 2.5e-n steps need one extra decimal.
fn nice_fraction(step: f64) -> bool {
    let mag = 10f64.powf(step.log10().floor());
    ((step / mag) - 2.5).abs() < 1e-9
}
