//! One-shot entrance animation for the progress rings.
//!
//! All rings share a single start instant and duration, so they start
//! together and finish together. Progress is linear in time. Once started
//! the animation cannot be restarted or stopped.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RingAnimation {
    targets: Vec<f32>,
    duration: Duration,
    started_at: Option<Instant>,
    finish_logged: bool,
}

impl RingAnimation {
    pub fn new(targets: impl IntoIterator<Item = f32>, duration: Duration) -> Self {
        Self {
            targets: targets
                .into_iter()
                .map(|t| if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) })
                .collect(),
            duration,
            started_at: None,
            finish_logged: false,
        }
    }

    /// Start the timelines. Later calls are ignored.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            log::debug!(
                "Starting ring animation for {} rings over {:?}",
                self.targets.len(),
                self.duration
            );
            self.started_at = Some(now);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn ring_count(&self) -> usize {
        self.targets.len()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default()
    }

    /// Linear timeline position in `[0, 1]` after `elapsed`.
    pub fn progress_after(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Fill fraction of ring `index` after `elapsed`.
    pub fn fraction_after(&self, index: usize, elapsed: Duration) -> f32 {
        let Some(&target) = self.targets.get(index) else {
            return 0.0;
        };
        if elapsed >= self.duration {
            return target;
        }
        target * self.progress_after(elapsed)
    }

    /// Fill fraction of ring `index` at `now`; zero before the start.
    pub fn fraction_at(&self, index: usize, now: Instant) -> f32 {
        if !self.is_started() {
            return 0.0;
        }
        self.fraction_after(index, self.elapsed(now))
    }

    pub fn fractions_at(&self, now: Instant) -> Vec<f32> {
        (0..self.targets.len())
            .map(|index| self.fraction_at(index, now))
            .collect()
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.is_started() && self.elapsed(now) >= self.duration
    }

    /// Whether the host needs to keep repainting to advance the animation
    pub fn needs_repaint(&mut self, now: Instant) -> bool {
        if !self.is_started() {
            return true;
        }
        if self.is_finished(now) {
            if !self.finish_logged {
                log::debug!("Ring animation finished");
                self.finish_logged = true;
            }
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn dashboard_animation() -> RingAnimation {
        RingAnimation::new([0.25, 0.45, 0.75], Duration::from_millis(1500))
    }

    #[test]
    fn test_not_started_draws_nothing() {
        let animation = dashboard_animation();
        let now = Instant::now();
        assert_eq!(animation.fractions_at(now), vec![0.0, 0.0, 0.0]);
        assert!(!animation.is_finished(now));
    }

    #[test]
    fn test_halfway_is_linear() {
        let animation = dashboard_animation();
        let half = Duration::from_millis(750);
        assert!((animation.fraction_after(0, half) - 0.125).abs() < EPS);
        assert!((animation.fraction_after(2, half) - 0.375).abs() < EPS);
    }

    #[test]
    fn test_completion_reaches_exact_targets() {
        let animation = dashboard_animation();
        let done = Duration::from_millis(1500);
        assert_eq!(animation.fraction_after(0, done), 0.25);
        assert_eq!(animation.fraction_after(1, done), 0.45);
        assert_eq!(animation.fraction_after(2, done), 0.75);
        assert_eq!(animation.fraction_after(2, Duration::from_secs(10)), 0.75);
    }

    #[test]
    fn test_start_is_one_shot() {
        let mut animation = dashboard_animation();
        let t0 = Instant::now();
        animation.start(t0);
        let later = t0 + Duration::from_millis(1000);
        animation.start(later);

        assert_eq!(animation.elapsed(later), Duration::from_millis(1000));
        assert!(animation.is_finished(t0 + Duration::from_millis(1500)));
    }

    #[test]
    fn test_needs_repaint_until_finished() {
        let mut animation = dashboard_animation();
        let t0 = Instant::now();
        assert!(animation.needs_repaint(t0));
        animation.start(t0);
        assert!(animation.needs_repaint(t0 + Duration::from_millis(100)));
        assert!(!animation.needs_repaint(t0 + Duration::from_millis(1600)));
    }

    #[test]
    fn test_unknown_ring_index() {
        let animation = dashboard_animation();
        assert_eq!(animation.fraction_after(7, Duration::from_millis(1500)), 0.0);
    }
}
