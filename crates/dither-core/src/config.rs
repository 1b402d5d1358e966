use thiserror::Error;

/// Full parameter set for the background renderer.
///
/// The host page owns these values and pushes a fresh copy on every change
/// (a theme toggle swaps both colors at once); the renderer never mutates a
/// config it was handed. Any subset of fields may change between two pushes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Quantization endpoint for the wave crests, components in [0, 1].
    pub wave_color: [f32; 3],
    /// Quantization endpoint for the troughs, components in [0, 1].
    pub background_color: [f32; 3],
    /// Number of discrete palette levels, at least 2.
    pub color_num: u32,
    /// Edge length of one sample block in device pixels, at least 1.
    pub pixel_size: u32,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub wave_speed: f32,
    /// Pointer falloff radius in normalized viewport units.
    pub mouse_radius: f32,
    pub enable_mouse_interaction: bool,
    pub disable_animation: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        // The site's dark-theme mount values.
        Self {
            wave_color: [0.35, 0.35, 0.35],
            background_color: [0.0, 0.0, 0.0],
            color_num: 5,
            pixel_size: 1,
            wave_amplitude: 0.2,
            wave_frequency: 0.6,
            wave_speed: 0.02,
            mouse_radius: 0.3,
            enable_mouse_interaction: false,
            disable_animation: false,
        }
    }
}

/// Out-of-range config fields. These are never surfaced to the caller as
/// failures; `sanitized` recovers by clamping and the shell logs them.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("colorNum {0} is below the minimum of 2 levels")]
    ColorLevels(u32),
    #[error("pixelSize must be at least 1 device pixel")]
    PixelSize,
    #[error("{name} must be a non-negative finite number, got {value}")]
    BadReal { name: &'static str, value: f32 },
    #[error("{name} component {value} is outside [0, 1]")]
    ColorRange { name: &'static str, value: f32 },
}

impl RenderConfig {
    /// List every field that `sanitized` would have to repair.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut issues = Vec::new();
        if self.color_num < 2 {
            issues.push(ConfigError::ColorLevels(self.color_num));
        }
        if self.pixel_size < 1 {
            issues.push(ConfigError::PixelSize);
        }
        for (name, value) in [
            ("waveAmplitude", self.wave_amplitude),
            ("waveFrequency", self.wave_frequency),
            ("waveSpeed", self.wave_speed),
            ("mouseRadius", self.mouse_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                issues.push(ConfigError::BadReal { name, value });
            }
        }
        for (name, rgb) in [
            ("waveColor", self.wave_color),
            ("backgroundColor", self.background_color),
        ] {
            for value in rgb {
                if !(0.0..=1.0).contains(&value) {
                    issues.push(ConfigError::ColorRange { name, value });
                    break;
                }
            }
        }
        issues
    }

    /// Clamp every field to its valid range, logging what was repaired.
    pub fn sanitized(&self) -> Self {
        for issue in self.validate() {
            log::warn!("config clamped: {issue}");
        }
        Self {
            wave_color: self.wave_color.map(clamp_component),
            background_color: self.background_color.map(clamp_component),
            color_num: self.color_num.max(2),
            pixel_size: self.pixel_size.max(1),
            wave_amplitude: clamp_real(self.wave_amplitude),
            wave_frequency: clamp_real(self.wave_frequency),
            wave_speed: clamp_real(self.wave_speed),
            mouse_radius: clamp_real(self.mouse_radius),
            enable_mouse_interaction: self.enable_mouse_interaction,
            disable_animation: self.disable_animation,
        }
    }
}

#[inline]
fn clamp_component(c: f32) -> f32 {
    if c.is_finite() {
        c.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[inline]
fn clamp_real(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
