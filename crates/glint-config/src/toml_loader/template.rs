//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# glint configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Edits to [colors] are picked up live while glint is running.

[window]
# title = "glint"
# width = 1280
# height = 800
# max_pixel_ratio = 2.0     # 0.5-4.0

[colors]
base = "#789E71"
accent = "#000000"
second = "#E09442"

[camera]
# fov = 75.0                # degrees, 1-179
# near = 0.1
# far = 100.0
# position = [0.0, 0.0, 0.5]
# target = [0.0, 0.0, 0.0]
# enable_damping = true
# damping_factor = 0.05     # (0.0, 1.0]
# rotate_speed = 1.0
# zoom_speed = 1.0
# min_distance = 0.0
# max_distance = 50.0

[scene]
# big_sphere_radius = 1.5
# small_sphere_radius = 0.2
# segments = 128            # 3-512
# rotation_step = 0.008     # radians per frame
# small_sphere_position = [0.0, 0.0, 0.0]

[light]
# color = "#ffffff"
# intensity = 0.1           # 0.0-10.0
# position = [2.0, 3.0, 4.0]

[capture]
# resolution = 256          # power of two, 16-2048
# near = 0.1
# far = 10.0

[post]
# dot_screen_scale = 4.0    # (0.0, 64.0]
# dot_screen_angle = 1.57
# dot_screen_center = [0.5, 0.5]
# dot_screen_size = [256.0, 256.0]

[logging]
# level = "info"            # trace, debug, info, warn, error
"##
}
