use swipeview_foundation::{SwipeDirections, SwipeEdges, ViewConfiguration};
use swipeview_ui_graphics::Color;

/// Tunables of a [`SwipeActionView`](crate::SwipeActionView).
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Fraction of the maximum distance a release must exceed to activate.
    pub min_activation_distance_ratio: f32,
    /// Release speed, in pixels per `velocity_units_millis`, that activates
    /// regardless of distance.
    pub min_activation_speed: f32,
    pub velocity_units_millis: u64,
    /// Factor applied to drag deltas that move the container away from rest.
    pub drag_resistance: f32,
    pub activation_duration_millis: u64,
    pub reset_duration_millis: u64,
    /// Pause between a finished activation and the automatic reset.
    pub reset_settle_delay_millis: u64,
    pub ripple_duration_millis: u64,
    pub left_ripple_color: Option<Color>,
    pub right_ripple_color: Option<Color>,
    /// Shrink ripple bounds by the container padding.
    pub ripple_takes_padding: bool,
    pub enabled_directions: SwipeDirections,
    /// Edges where touches are accepted inside the edge slop.
    pub enabled_edges: SwipeEdges,
    pub view_configuration: ViewConfiguration,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_activation_distance_ratio: 0.8,
            min_activation_speed: 200.0,
            velocity_units_millis: 100,
            drag_resistance: 1.0 / 3.0,
            activation_duration_millis: 250,
            reset_duration_millis: 350,
            reset_settle_delay_millis: 200,
            ripple_duration_millis: 400,
            left_ripple_color: None,
            right_ripple_color: None,
            ripple_takes_padding: false,
            enabled_directions: SwipeDirections::BOTH,
            enabled_edges: SwipeEdges::NONE,
            view_configuration: ViewConfiguration::default(),
        }
    }
}

impl SwipeConfig {
    /// Defaults with pixel values scaled for `density`.
    pub fn for_density(density: f32) -> Self {
        Self {
            view_configuration: ViewConfiguration::for_density(density),
            ..Self::default()
        }
    }

    pub fn with_min_activation_distance_ratio(mut self, ratio: f32) -> Self {
        self.min_activation_distance_ratio = ratio;
        self
    }

    pub fn with_min_activation_speed(mut self, speed: f32) -> Self {
        self.min_activation_speed = speed;
        self
    }

    pub fn with_drag_resistance(mut self, resistance: f32) -> Self {
        self.drag_resistance = resistance;
        self
    }

    pub fn with_activation_duration(mut self, millis: u64) -> Self {
        self.activation_duration_millis = millis;
        self
    }

    pub fn with_reset_duration(mut self, millis: u64) -> Self {
        self.reset_duration_millis = millis;
        self
    }

    pub fn with_reset_settle_delay(mut self, millis: u64) -> Self {
        self.reset_settle_delay_millis = millis;
        self
    }

    pub fn with_ripple_duration(mut self, millis: u64) -> Self {
        self.ripple_duration_millis = millis;
        self
    }

    pub fn with_ripple_colors(mut self, left: Option<Color>, right: Option<Color>) -> Self {
        self.left_ripple_color = left;
        self.right_ripple_color = right;
        self
    }

    pub fn with_ripple_takes_padding(mut self, takes_padding: bool) -> Self {
        self.ripple_takes_padding = takes_padding;
        self
    }

    pub fn with_enabled_directions(mut self, directions: SwipeDirections) -> Self {
        self.enabled_directions = directions;
        self
    }

    pub fn with_enabled_edges(mut self, edges: SwipeEdges) -> Self {
        self.enabled_edges = edges;
        self
    }

    pub fn with_view_configuration(mut self, configuration: ViewConfiguration) -> Self {
        self.view_configuration = configuration;
        self
    }
}
