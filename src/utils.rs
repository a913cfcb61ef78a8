use std::time::Instant;

/// Collects wall-clock timings of repeated runs over an input of `n_elements`.
pub struct Timings {
    timings: Vec<u128>,
    time: Instant,
    n_elements: usize,
}

impl Timings {
    pub fn new(n_runs: usize, n_elements: usize) -> Self {
        Self {
            timings: Vec::with_capacity(n_runs),
            time: Instant::now(),
            n_elements,
        }
    }

    #[inline(always)]
    pub fn start(&mut self) {
        self.time = Instant::now();
    }

    /// Records the time elapsed since the last [`start`](Timings::start)
    /// and returns it in nanosecs.
    #[inline(always)]
    pub fn stop(&mut self) -> u128 {
        let elapsed = self.time.elapsed().as_nanos();
        self.timings.push(elapsed);
        elapsed
    }

    pub fn n_runs(&self) -> usize {
        self.timings.len()
    }

    /// Returns minimum, maximum, average time per run in nanosecs,
    /// or `None` if nothing was recorded.
    pub fn get(&self) -> Option<(u128, u128, u128)> {
        let min = *self.timings.iter().min()?;
        let max = *self.timings.iter().max()?;
        let avg = self.timings.iter().sum::<u128>() / self.timings.len() as u128;
        Some((min, max, avg))
    }

    /// Returns the average time per element in nanosecs,
    /// or `None` if nothing was recorded or the input is empty.
    pub fn per_element(&self) -> Option<f64> {
        if self.timings.is_empty() || self.n_elements == 0 {
            return None;
        }
        let total = self.timings.iter().sum::<u128>() as f64;
        Some(total / (self.timings.len() * self.n_elements) as f64)
    }
}

/// Returns the type name of its argument.
pub fn type_of<T>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}
