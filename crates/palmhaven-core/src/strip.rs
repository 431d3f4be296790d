//! Wheel policy for the horizontally-scrolling facilities strip.
//!
//! Vertical wheel motion over the strip is converted into horizontal
//! scrolling unless the strip is already at the edge in the direction of
//! travel; at an edge the event falls through to normal page scrolling.

/// Horizontal scroll metrics of the strip element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripGeometry {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

/// Tolerance when deciding the strip has reached its right edge.
const END_SLACK: f64 = 1.0;

/// What to do with one wheel event over the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelAction {
    /// Consume the event and scroll the strip horizontally by the delta.
    Horizontal(f64),
    /// Let the page scroll vertically as usual.
    Vertical,
}

impl StripGeometry {
    pub fn at_start(&self) -> bool {
        self.scroll_left <= 0.0
    }

    pub fn at_end(&self) -> bool {
        self.scroll_left >= self.scroll_width - self.client_width - END_SLACK
    }

    /// Decide how a wheel event with vertical delta `delta_y` is handled.
    ///
    /// Downward motion scrolls right until the right edge, upward motion
    /// scrolls left until the left edge; at the edge in the direction of
    /// travel (or with a zero delta) the page scrolls instead.
    pub fn wheel_action(&self, delta_y: f64) -> WheelAction {
        let scrolling_down = delta_y > 0.0;
        let scrolling_up = delta_y < 0.0;

        let horizontal =
            (!self.at_end() && scrolling_down) || (!self.at_start() && scrolling_up);

        if horizontal {
            tracing::debug!(delta_y, "facilities strip: scrolling horizontally");
            WheelAction::Horizontal(delta_y)
        } else {
            tracing::debug!(delta_y, "facilities strip: scrolling vertically");
            WheelAction::Vertical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid_strip() -> StripGeometry {
        StripGeometry {
            scroll_left: 300.0,
            scroll_width: 2000.0,
            client_width: 600.0,
        }
    }

    #[test]
    fn wheel_down_mid_strip_goes_horizontal() {
        assert_eq!(mid_strip().wheel_action(120.0), WheelAction::Horizontal(120.0));
    }

    #[test]
    fn wheel_up_mid_strip_goes_horizontal() {
        assert_eq!(mid_strip().wheel_action(-120.0), WheelAction::Horizontal(-120.0));
    }

    #[test]
    fn wheel_down_at_right_edge_falls_through() {
        let geo = StripGeometry {
            scroll_left: 1400.0,
            scroll_width: 2000.0,
            client_width: 600.0,
        };
        assert!(geo.at_end());
        assert_eq!(geo.wheel_action(120.0), WheelAction::Vertical);
        // Upward motion still scrolls the strip back.
        assert_eq!(geo.wheel_action(-120.0), WheelAction::Horizontal(-120.0));
    }

    #[test]
    fn wheel_up_at_left_edge_falls_through() {
        let geo = StripGeometry {
            scroll_left: 0.0,
            scroll_width: 2000.0,
            client_width: 600.0,
        };
        assert!(geo.at_start());
        assert_eq!(geo.wheel_action(-120.0), WheelAction::Vertical);
        assert_eq!(geo.wheel_action(120.0), WheelAction::Horizontal(120.0));
    }

    #[test]
    fn zero_delta_falls_through() {
        assert_eq!(mid_strip().wheel_action(0.0), WheelAction::Vertical);
    }

    #[test]
    fn right_edge_tolerance_is_one_pixel() {
        let geo = StripGeometry {
            scroll_left: 1399.5,
            scroll_width: 2000.0,
            client_width: 600.0,
        };
        assert!(geo.at_end());
    }
}
