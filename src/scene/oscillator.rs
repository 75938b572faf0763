/// Lower bound of a ring's vertical lane.
pub const LANE_MIN: f64 = 0.0;

/// Upper bound of a ring's vertical lane.
pub const LANE_MAX: f64 = 90.0;

/// Distance travelled per active tick.
pub const STEP: f64 = 0.3;

/// Positions this close to a bound count as having reached it, so that
/// accumulated rounding in `STEP` does not cost an extra tick.
const SNAP: f64 = 1e-9;

/// Direction of travel along the lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

/// Bouncing scalar position for one ring.
///
/// The oscillator does not own the active/idle flag: the caller decides
/// whether to call [`RingOscillator::advance`] on a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingOscillator {
    position: f64,
    direction: Direction,
    min: f64,
    max: f64,
    step: f64,
}

impl RingOscillator {
    /// Creates an oscillator at the bottom of the default lane, moving up.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lane(LANE_MIN, LANE_MAX, STEP)
    }

    /// Creates an oscillator on a custom lane, starting at `min` moving up.
    ///
    /// Callers are expected to pass `min < max` and `step > 0`;
    /// [`SceneConfig::validate`](super::SceneConfig::validate) enforces this
    /// for scene-built oscillators.
    #[must_use]
    pub fn with_lane(min: f64, max: f64, step: f64) -> Self {
        Self {
            position: min,
            direction: Direction::Up,
            min,
            max,
            step,
        }
    }

    /// Current position within the lane.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current direction of travel.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advances by one step, reversing at either bound.
    ///
    /// Returns `true` when this step hit a bound and flipped the direction.
    pub fn advance(&mut self) -> bool {
        match self.direction {
            Direction::Down => {
                self.position -= self.step;
                if self.position < self.min + SNAP {
                    self.position = self.min;
                    self.direction = Direction::Up;
                    return true;
                }
            }
            Direction::Up => {
                self.position += self.step;
                if self.position > self.max - SNAP {
                    self.position = self.max;
                    self.direction = Direction::Down;
                    return true;
                }
            }
        }
        false
    }

    /// Advances only when `active` is set; returns the resulting position.
    pub fn tick(&mut self, active: bool) -> f64 {
        if active {
            self.advance();
        }
        self.position
    }
}

impl Default for RingOscillator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_bottom_moving_up() {
        let osc = RingOscillator::new();
        assert!(osc.position().abs() < f64::EPSILON);
        assert_eq!(osc.direction(), Direction::Up);
    }

    #[test]
    fn three_hundred_ticks_reach_the_top() {
        let mut osc = RingOscillator::new();
        for i in 0..299 {
            assert!(!osc.advance(), "bounced early at tick {i}");
        }
        assert!(osc.advance());
        assert!((osc.position() - LANE_MAX).abs() < f64::EPSILON);
        assert_eq!(osc.direction(), Direction::Down);
    }

    #[test]
    fn full_cycle_returns_to_bottom() {
        let mut osc = RingOscillator::new();
        for _ in 0..600 {
            osc.advance();
        }
        assert!(osc.position().abs() < f64::EPSILON);
        assert_eq!(osc.direction(), Direction::Up);
    }

    #[test]
    fn idle_tick_does_not_move() {
        let mut osc = RingOscillator::new();
        osc.tick(true);
        let before = osc.position();
        assert!((osc.tick(false) - before).abs() < f64::EPSILON);
    }

    #[test]
    fn never_leaves_lane() {
        let mut osc = RingOscillator::new();
        // Irregular active pattern over several bounces.
        for i in 0..5_000u32 {
            let p = osc.tick(i % 7 != 3);
            assert!((LANE_MIN..=LANE_MAX).contains(&p));
        }
    }

    #[test]
    fn custom_lane_bounces_on_its_own_bounds() {
        let mut osc = RingOscillator::with_lane(10.0, 11.0, 0.4);
        osc.advance();
        osc.advance();
        assert!(osc.advance());
        assert!((osc.position() - 11.0).abs() < f64::EPSILON);
        assert_eq!(osc.direction(), Direction::Down);
    }
}
