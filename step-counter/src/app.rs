use accel::Adxl345;
use embedded_hal::i2c::I2c;
use math::Vector;
use processing::{Detection, StepDetector};

use crate::clock::Clock;
use crate::mmio::LedBank;

/// Sampling cadence of the main loop.
pub static SAMPLE_PERIOD_MS: u64 = 20;

/// How long to wait before retrying after a failed read.
pub static RETRY_DELAY_MS: u64 = 20;

/// Minimum time between two status lines, independent of the sampling rate.
pub static STATUS_INTERVAL_MS: u64 = 200;

/// Anything that can display the running step count.
pub trait StepSink
{
    fn set(&mut self, count: u32);
}

impl StepSink for LedBank {
    fn set(&mut self, count: u32) {
        LedBank::set(self, count);
    }
}

pub struct StepCounter<I2C, S, C>
{
    pub sensor: Adxl345<I2C>,
    pub detector: StepDetector,
    pub leds: S,
    pub clock: C,

    last_status_ms: u64,
}

impl<I2C, S, C> StepCounter<I2C, S, C>
where
    I2C: I2c,
    S: StepSink,
    C: Clock,
{
    pub fn new(sensor: Adxl345<I2C>, leds: S, clock: C) -> Self {
        let last_status_ms = clock.now_ms();
        StepCounter {
            sensor,
            detector: StepDetector::new(),
            leds,
            clock,
            last_status_ms,
        }
    }

    /// Runs the sampling loop until the process is killed; the loop has no exit
    /// of its own.
    ///
    pub fn run(&mut self) -> ! {
        loop {
            if let Some(line) = self.tick() {
                println!("{}", line);
            }
        }
    }

    /// One loop iteration: acquire, detect, push a confirmed step to the LEDs,
    /// and hand back a status line when one is due. A failed read leaves the
    /// detector untouched and backs off briefly.
    ///
    pub fn tick(&mut self) -> Option<String> {
        let accel = match self.sensor.get_accel() {
            Ok(accel) => accel,
            Err(err) => {
                log::warn!("Failed to read acceleration: {:?}", err);
                self.clock.sleep_ms(RETRY_DELAY_MS);
                return None;
            }
        };

        let now = self.clock.now_ms();
        let detection = self.detector.update(&accel, now);

        if detection.stepped {
            self.leds.set(self.detector.step_count());
        }

        let status = if now.saturating_sub(self.last_status_ms) >= STATUS_INTERVAL_MS {
            self.last_status_ms = now;
            Some(format_status(now, self.detector.step_count(), &detection, &accel))
        } else {
            None
        };

        self.clock.sleep_ms(SAMPLE_PERIOD_MS);
        status
    }
}

/// Renders one status line. The format is fixed so runs are comparable.
pub fn format_status(now_ms: u64, steps: u32, detection: &Detection, accel: &Vector) -> String {
    format!(
        "t={} ms  steps={}  mag={:.3}  base={:.3}  dyn={:.3}  (x={:.3} y={:.3} z={:.3})",
        now_ms,
        steps,
        detection.magnitude,
        detection.baseline,
        detection.dynamic,
        accel.x,
        accel.y,
        accel.z,
    )
}
