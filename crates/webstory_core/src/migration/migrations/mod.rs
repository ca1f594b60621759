//! Story schema migration registry.
//!
//! # Responsibility
//! - Register version transforms in strictly increasing order.
//! - Expose the latest schema version known by this binary.
//!
//! # Invariants
//! - Versions are contiguous and start at 1; the runner fails loudly on a
//!   gap.
//! - Each transform is a pure function over an owned document tree and is
//!   independent of every other transform.

pub(crate) mod v0001_story_data_array_to_object;
pub(crate) mod v0002_data_pixel_to_1280;
pub(crate) mod v0003_fullbleed_to_fill;
pub(crate) mod v0004_square_to_shape;
pub(crate) mod v0005_set_opacity;
pub(crate) mod v0006_color_to_pattern;
pub(crate) mod v0007_set_flip;
pub(crate) mod v0008_padding_to_object;
pub(crate) mod v0009_default_background;
pub(crate) mod v0010_data_pixel_to_440;
pub(crate) mod v0011_media_element_to_resource;
pub(crate) mod v0012_background_flag;
pub(crate) mod v0013_bold_to_font_weight;
pub(crate) mod v0014_video_id_to_id;
pub(crate) mod v0015_font_objects;
pub(crate) mod v0016_one_tap_link_deprecate;
pub(crate) mod v0017_inline_text_properties;
pub(crate) mod v0018_default_background_element;
pub(crate) mod v0019_conic_to_linear;
pub(crate) mod v0020_is_fill_deprecate;
pub(crate) mod v0021_background_color_to_page;
pub(crate) mod v0022_data_pixel_to_308;
pub(crate) mod v0023_convert_overlay_pattern;
pub(crate) mod v0024_page_advancement;
pub(crate) mod v0025_animation_targets_array;
pub(crate) mod v0026_animation_duration_ms;
pub(crate) mod v0027_rotation_angle_default;
pub(crate) mod v0028_border_radius_object;
pub(crate) mod v0029_video_tracks_backfill;
pub(crate) mod v0030_mask_default;
pub(crate) mod v0031_normalize_resource_sizes;
pub(crate) mod v0032_page_outlink_theme;
pub(crate) mod v0033_remove_redundant_scaling_properties;
pub(crate) mod v0034_remove_track_name;
pub(crate) mod v0035_mark_video_as_external;
pub(crate) mod v0036_change_base_color_to_hex;
pub(crate) mod v0037_remove_transient_media_properties;
pub(crate) mod v0038_camel_case_resource_sizes;
pub(crate) mod v0039_background_audio_formatting;
pub(crate) mod v0040_andada_font_to_andada_pro;
pub(crate) mod v0041_remove_font_properties;
pub(crate) mod v0042_remove_track_id;
pub(crate) mod v0043_unify_media_type;
pub(crate) mod v0044_unused_properties;

use serde_json::Value;

pub(crate) struct Migration {
    pub version: u32,
    #[allow(dead_code)]
    pub name: &'static str,
    pub transform: fn(Value) -> Value,
}

macro_rules! migration {
    ($version:literal, $name:literal, $module:ident) => {
        Migration {
            version: $version,
            name: $name,
            transform: $module::migrate,
        }
    };
}

pub(crate) const MIGRATIONS: &[Migration] = &[
    migration!(1, "story_data_array_to_object", v0001_story_data_array_to_object),
    migration!(2, "data_pixel_to_1280", v0002_data_pixel_to_1280),
    migration!(3, "fullbleed_to_fill", v0003_fullbleed_to_fill),
    migration!(4, "square_to_shape", v0004_square_to_shape),
    migration!(5, "set_opacity", v0005_set_opacity),
    migration!(6, "color_to_pattern", v0006_color_to_pattern),
    migration!(7, "set_flip", v0007_set_flip),
    migration!(8, "padding_to_object", v0008_padding_to_object),
    migration!(9, "default_background", v0009_default_background),
    migration!(10, "data_pixel_to_440", v0010_data_pixel_to_440),
    migration!(11, "media_element_to_resource", v0011_media_element_to_resource),
    migration!(12, "background_flag", v0012_background_flag),
    migration!(13, "bold_to_font_weight", v0013_bold_to_font_weight),
    migration!(14, "video_id_to_id", v0014_video_id_to_id),
    migration!(15, "font_objects", v0015_font_objects),
    migration!(16, "one_tap_link_deprecate", v0016_one_tap_link_deprecate),
    migration!(17, "inline_text_properties", v0017_inline_text_properties),
    migration!(18, "default_background_element", v0018_default_background_element),
    migration!(19, "conic_to_linear", v0019_conic_to_linear),
    migration!(20, "is_fill_deprecate", v0020_is_fill_deprecate),
    migration!(21, "background_color_to_page", v0021_background_color_to_page),
    migration!(22, "data_pixel_to_308", v0022_data_pixel_to_308),
    migration!(23, "convert_overlay_pattern", v0023_convert_overlay_pattern),
    migration!(24, "page_advancement", v0024_page_advancement),
    migration!(25, "animation_targets_array", v0025_animation_targets_array),
    migration!(26, "animation_duration_ms", v0026_animation_duration_ms),
    migration!(27, "rotation_angle_default", v0027_rotation_angle_default),
    migration!(28, "border_radius_object", v0028_border_radius_object),
    migration!(29, "video_tracks_backfill", v0029_video_tracks_backfill),
    migration!(30, "mask_default", v0030_mask_default),
    migration!(31, "normalize_resource_sizes", v0031_normalize_resource_sizes),
    migration!(32, "page_outlink_theme", v0032_page_outlink_theme),
    migration!(33, "remove_redundant_scaling_properties", v0033_remove_redundant_scaling_properties),
    migration!(34, "remove_track_name", v0034_remove_track_name),
    migration!(35, "mark_video_as_external", v0035_mark_video_as_external),
    migration!(36, "change_base_color_to_hex", v0036_change_base_color_to_hex),
    migration!(37, "remove_transient_media_properties", v0037_remove_transient_media_properties),
    migration!(38, "camel_case_resource_sizes", v0038_camel_case_resource_sizes),
    migration!(39, "background_audio_formatting", v0039_background_audio_formatting),
    migration!(40, "andada_font_to_andada_pro", v0040_andada_font_to_andada_pro),
    migration!(41, "remove_font_properties", v0041_remove_font_properties),
    migration!(42, "remove_track_id", v0042_remove_track_id),
    migration!(43, "unify_media_type", v0043_unify_media_type),
    migration!(44, "unused_properties", v0044_unused_properties),
];

/// Returns the latest schema version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}
