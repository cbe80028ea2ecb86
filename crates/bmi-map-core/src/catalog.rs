//! The Basic Model Interface catalog
//!
//! The BMI function signatures as constant data. This is the default
//! input when no specification file is given.

use crate::mapper::{render_one, Language};
use crate::parameter::Parameter;
use crate::spec::Spec;
use crate::{Error, Result};

type RawParam = (&'static str, &'static str, &'static str);

/// `(function, [(name, intent, type), ...])`, ordered by function name
pub const BMI: &[(&str, &[RawParam])] = &[
    ("finalize", &[]),
    ("get_bmi_version", &[("version", "out", "string")]),
    ("get_component_name", &[("name", "out", "string")]),
    ("get_current_time", &[("time", "out", "double")]),
    ("get_end_time", &[("time", "out", "double")]),
    ("get_grid_edge_count", &[("grid", "in", "int"), ("count", "out", "int")]),
    ("get_grid_edge_nodes", &[("grid", "in", "int"), ("edge_nodes", "in", "array[int]")]),
    ("get_grid_face_count", &[("grid", "in", "int"), ("count", "out", "int")]),
    ("get_grid_face_edges", &[("grid", "in", "int"), ("face_edges", "in", "array[int]")]),
    ("get_grid_face_nodes", &[("grid", "in", "int"), ("face_nodes", "in", "array[int]")]),
    ("get_grid_node_count", &[("grid", "in", "int"), ("count", "out", "int")]),
    (
        "get_grid_nodes_per_face",
        &[("grid", "in", "int"), ("nodes_per_face", "in", "array[int]")],
    ),
    ("get_grid_origin", &[("grid", "in", "int"), ("origin", "in", "array[double]")]),
    ("get_grid_rank", &[("grid", "in", "int"), ("rank", "out", "int")]),
    ("get_grid_shape", &[("grid", "in", "int"), ("shape", "in", "array[int]")]),
    ("get_grid_size", &[("grid", "in", "int"), ("size", "out", "int")]),
    ("get_grid_spacing", &[("grid", "in", "int"), ("spacing", "in", "array[double]")]),
    ("get_grid_type", &[("grid", "in", "int"), ("type", "out", "string")]),
    ("get_grid_x", &[("grid", "in", "int"), ("x", "in", "array[double]")]),
    ("get_grid_y", &[("grid", "in", "int"), ("y", "in", "array[double]")]),
    ("get_grid_z", &[("grid", "in", "int"), ("z", "in", "array[double]")]),
    ("get_input_item_count", &[("count", "out", "int")]),
    ("get_input_var_names", &[("names", "out", "array[string]")]),
    ("get_output_item_count", &[("count", "out", "int")]),
    ("get_output_var_names", &[("names", "out", "array[string]")]),
    ("get_start_time", &[("time", "out", "double")]),
    ("get_time_step", &[("time_step", "out", "double")]),
    ("get_time_units", &[("units", "out", "string")]),
    ("get_value", &[("name", "in", "string"), ("dest", "in", "array[any]")]),
    (
        "get_value_at_indices",
        &[
            ("name", "in", "string"),
            ("dest", "in", "array[int]"),
            ("inds", "in", "array[int, count]"),
        ],
    ),
    ("get_value_ptr", &[("name", "in", "string"), ("dest_ptr", "out", "array[any]")]),
    ("get_var_grid", &[("name", "in", "string"), ("grid", "out", "int")]),
    ("get_var_itemsize", &[("name", "in", "string"), ("size", "out", "int")]),
    ("get_var_location", &[("name", "in", "string"), ("location", "out", "string")]),
    ("get_var_nbytes", &[("name", "in", "string"), ("nbytes", "out", "int")]),
    ("get_var_type", &[("name", "in", "string"), ("type", "out", "string")]),
    ("get_var_units", &[("name", "in", "string"), ("units", "out", "string")]),
    ("initialize", &[("config_file", "in", "string")]),
    ("set_value", &[("name", "in", "string"), ("src", "in", "array[any]")]),
    (
        "set_value_at_indices",
        &[
            ("name", "in", "string"),
            ("inds", "in", "array[int, count]"),
            ("src", "in", "array[any]"),
        ],
    ),
    ("update", &[]),
    ("update_until", &[("time", "in", "double")]),
];

fn params(raw: &[RawParam]) -> Result<Vec<Parameter>> {
    raw.iter()
        .map(|(name, intent, ty)| Parameter::new(name, intent, ty))
        .collect()
}

/// The full catalog as a validated [`Spec`].
pub fn bmi() -> Result<Spec> {
    let mut spec = Spec::new();
    for (name, raw) in BMI {
        spec.insert(name, params(raw)?)?;
    }
    Ok(spec)
}

/// Parameters of one catalog function.
pub fn bmi_function(name: &str) -> Result<Vec<Parameter>> {
    let (_, raw) = BMI
        .iter()
        .find(|(function, _)| *function == name)
        .ok_or_else(|| Error::UnknownFunction {
            name: name.to_string(),
        })?;
    params(raw)
}

/// Render one catalog function in `language`.
pub fn render_bmi_function(name: &str, language: Language) -> Result<String> {
    render_one(name, &bmi_function(name)?, language)
}
