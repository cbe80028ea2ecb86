//! End-to-end tests for rendering the BMI catalog and loaded specifications
//!
//! These pin the exact declarations produced for representative BMI
//! functions in every target language.

use bmi_map_core::catalog::{self, render_bmi_function};
use bmi_map_core::{loads, render_all, render_one, Error, Language, Parameter};
use pretty_assertions::assert_eq;

fn expect(name: &str, expected: [&str; 5]) {
    let languages = [
        Language::C,
        Language::Cxx,
        Language::Python,
        Language::Sidl,
        Language::Fortran,
    ];
    for (language, expected) in languages.into_iter().zip(expected) {
        assert_eq!(
            render_bmi_function(name, language).unwrap(),
            expected,
            "{name} in {language}"
        );
    }
}

#[test]
fn test_finalize() {
    expect(
        "finalize",
        [
            "int finalize(void* self);",
            "void Finalize();",
            "def finalize(self) -> None:",
            "int finalize();",
            "function finalize(this) result(bmi_status)",
        ],
    );
}

#[test]
fn test_get_component_name() {
    expect(
        "get_component_name",
        [
            "int get_component_name(void* self, const char* name);",
            "std::string GetComponentName();",
            "def get_component_name(self) -> str:",
            "int get_component_name(name out string);",
            "function get_component_name(this, name) result(bmi_status)",
        ],
    );
}

#[test]
fn test_get_grid_edge_count() {
    expect(
        "get_grid_edge_count",
        [
            "int get_grid_edge_count(void* self, const int grid, int* count);",
            "int GetGridEdgeCount(const int grid);",
            "def get_grid_edge_count(self, grid: int) -> int:",
            "int get_grid_edge_count(grid in int, count out int);",
            "function get_grid_edge_count(this, grid, count) result(bmi_status)",
        ],
    );
}

#[test]
fn test_get_input_var_names() {
    expect(
        "get_input_var_names",
        [
            "int get_input_var_names(void* self, char** names);",
            "std::vector<std::string>* GetInputVarNames();",
            "def get_input_var_names(self) -> tuple[str, ...]:",
            "int get_input_var_names(names out array<string,>);",
            "function get_input_var_names(this, names) result(bmi_status)",
        ],
    );
}

#[test]
fn test_get_value() {
    expect(
        "get_value",
        [
            "int get_value(void* self, const char* name, const void* dest);",
            "void GetValue(std::string name, const void* dest);",
            "def get_value(self, name: str, dest: NDArray[Any]) -> None:",
            "int get_value(name in string, dest in array<,>);",
            "function get_value(this, name, dest) result(bmi_status)",
        ],
    );
}

#[test]
fn test_get_value_at_indices() {
    expect(
        "get_value_at_indices",
        [
            "int get_value_at_indices(void* self, const char* name, const int* dest, const int* inds, const int count);",
            "void GetValueAtIndices(std::string name, const int* dest, const int* inds);",
            "def get_value_at_indices(self, name: str, dest: NDArray[int], inds: NDArray[int]) -> None:",
            "int get_value_at_indices(name in string, dest in array<int,>, inds in array<int, 1>);",
            "function get_value_at_indices(this, name, dest, inds) result(bmi_status)",
        ],
    );
}

#[test]
fn test_get_value_ptr() {
    expect(
        "get_value_ptr",
        [
            "int get_value_ptr(void* self, const char* name, void** dest_ptr);",
            "void* GetValuePtr(std::string name);",
            "def get_value_ptr(self, name: str) -> NDArray[Any]:",
            "int get_value_ptr(name in string, dest_ptr out array<,>);",
            "function get_value_ptr(this, name, dest_ptr) result(bmi_status)",
        ],
    );
}

#[test]
fn test_set_value_at_indices() {
    expect(
        "set_value_at_indices",
        [
            "int set_value_at_indices(void* self, const char* name, const int* inds, const int count, const void* src);",
            "void SetValueAtIndices(std::string name, const int* inds, const void* src);",
            "def set_value_at_indices(self, name: str, inds: NDArray[int], src: NDArray[Any]) -> None:",
            "int set_value_at_indices(name in string, inds in array<int, 1>, src in array<,>);",
            "function set_value_at_indices(this, name, inds, src) result(bmi_status)",
        ],
    );
}

#[test]
fn test_update_until() {
    expect(
        "update_until",
        [
            "int update_until(void* self, const double time);",
            "void UpdateUntil(const double time);",
            "def update_until(self, time: float) -> None:",
            "int update_until(time in double);",
            "function update_until(this, time) result(bmi_status)",
        ],
    );
}

#[test]
fn test_render_all_catalog_is_sorted_and_complete() {
    let spec = catalog::bmi().unwrap();
    let lines = render_all(&spec, Language::Fortran).unwrap();
    assert_eq!(lines.len(), 42);
    assert_eq!(lines[0], "function finalize(this) result(bmi_status)");
    assert_eq!(lines[41], "function update_until(this, time) result(bmi_status)");
}

#[test]
fn test_render_all_orders_by_name() {
    let spec = loads(
        r#"
[bmi.zeta]
[bmi.alpha]
params = [{ name = "a", intent = "in", type = "int" }]
[bmi.mu]
"#,
    )
    .unwrap();

    assert_eq!(
        render_all(&spec, Language::Python).unwrap(),
        vec![
            "def alpha(self, a: int) -> None:",
            "def mu(self) -> None:",
            "def zeta(self) -> None:",
        ]
    );
}

#[test]
fn test_render_all_stops_on_unsupported_signature() {
    let spec = loads(
        r#"
[bmi.ok]
[bmi.two_outs]
params = [
    { name = "a", intent = "out", type = "int" },
    { name = "b", intent = "out", type = "int" },
]
"#,
    )
    .unwrap();

    let err = render_all(&spec, Language::Cxx).unwrap_err();
    assert!(matches!(err, Error::UnsupportedSignature { function, .. } if function == "two_outs"));

    // Every other language passes all parameters through explicitly
    for language in [Language::C, Language::Python, Language::Sidl, Language::Fortran] {
        assert_eq!(render_all(&spec, language).unwrap().len(), 2);
    }
}

#[test]
fn test_render_one_with_loaded_spec() {
    let spec = loads(
        r#"
[bmi.foo]
params = [
    { name = "a", intent = "in", type = "array[int, m, n]" },
    { name = "b", intent = "in", type = "array[int]" },
]
"#,
    )
    .unwrap();

    assert_eq!(
        render_one("foo", spec.get("foo").unwrap(), Language::C).unwrap(),
        "int foo(void* self, const int* a, const int m, const int n, const int* b);"
    );
}

#[test]
fn test_mapper_lookup_by_selector() {
    let mapper = bmi_map_core::mapper_for("c++").unwrap();
    let params = [Parameter::new("a", "out", "int").unwrap()];
    assert_eq!(mapper.render("foo", &params).unwrap(), "int Foo();");

    assert!(matches!(
        bmi_map_core::mapper_for("java"),
        Err(Error::Configuration { .. })
    ));
}
