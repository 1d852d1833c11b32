use math::Vector;

/// Smoothing factor of the baseline filter. Small enough that the baseline tracks
/// slow postural drift, not individual steps.
pub static FILTER_ALPHA: f32 = 0.01;

/// How far (in g) the magnitude must rise above the baseline to count as a step.
pub static THRESHOLD_G: f32 = 0.15;

/// Minimum time between two confirmed steps. One physical impact spans several
/// samples; anything closer than this is the same step still ringing.
pub static MIN_STEP_INTERVAL_MS: u64 = 250;

/// What one call to [`StepDetector::update`] saw and decided.
#[derive(Debug, Clone, Copy)]
pub struct Detection
{
    /// Magnitude of the acceleration vector, in g.
    pub magnitude: f32,

    /// Baseline after this sample's filter update, in g.
    pub baseline: f32,

    /// Magnitude minus the updated baseline; the detection signal. May be
    /// negative, negative values never trigger.
    pub dynamic: f32,

    /// Did this sample confirm a step?
    pub stepped: bool,
}

pub struct StepDetector
{
    /// Exponentially-weighted estimate of the resting magnitude, in g. Starts at
    /// 1.0 (standing gravity) so a transient on the very first sample cannot be
    /// counted before the filter has settled.
    baseline: f32,

    step_count: u32,

    /// Time of the most recently confirmed step, `None` until the first one.
    last_step_ms: Option<u64>,
}

impl StepDetector
{
    #[inline]
    pub fn new() -> Self {
        StepDetector {
            baseline: 1.0,
            step_count: 0,
            last_step_ms: None,
        }
    }

    /// Feed one acceleration sample (in g) taken at monotonic time `now_ms`.
    ///
    /// The baseline update happens *before* the deviation is computed, so each
    /// sample nudges the threshold it is judged against; reordering the two
    /// changes detection sensitivity.
    pub fn update(&mut self, accel: &Vector, now_ms: u64) -> Detection {
        let magnitude = accel.magnitude();

        self.baseline = (1.0 - FILTER_ALPHA) * self.baseline + FILTER_ALPHA * magnitude;
        let dynamic = magnitude - self.baseline;

        let debounced = match self.last_step_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > MIN_STEP_INTERVAL_MS,
        };

        let stepped = dynamic > THRESHOLD_G && debounced;
        if stepped {
            self.step_count += 1;
            self.last_step_ms = Some(now_ms);
            log::debug!("step {} at t={} ms (dyn={:.3})", self.step_count, now_ms, dynamic);
        }

        Detection {
            magnitude,
            baseline: self.baseline,
            dynamic,
            stepped,
        }
    }

    /// Total number of confirmed steps, never decreasing, never reset.
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Current baseline estimate in g.
    pub fn baseline(&self) -> f32 {
        self.baseline
    }
}

impl Default for StepDetector {
    fn default() -> Self {
        Self::new()
    }
}
