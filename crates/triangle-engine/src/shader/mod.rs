//! Embedded triangle shader.
//!
//! The WGSL source is part of the binary. Vertex positions live inside the
//! vertex stage and are selected by `@builtin(vertex_index)`, so drawing needs
//! no vertex buffers.

/// WGSL source with a `vs` vertex entry point and an `fs` fragment entry point.
pub const TRIANGLE_WGSL: &str = include_str!("triangle.wgsl");

pub const VERTEX_ENTRY: &str = "vs";
pub const FRAGMENT_ENTRY: &str = "fs";

/// Number of vertices the vertex stage knows about.
pub const VERTEX_COUNT: u32 = 3;

/// Clip-space corners emitted by `vs`, indexed by vertex index.
pub const TRIANGLE_POSITIONS: [[f32; 2]; VERTEX_COUNT as usize] =
    [[0.0, 0.5], [-0.5, -0.5], [0.5, -0.5]];

/// Color written by `fs` (opaque red).
pub const TRIANGLE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// CPU mirror of the vertex stage.
///
/// Returns `None` for indices the shader's position table does not cover.
pub fn clip_position(vertex_index: u32) -> Option<[f32; 4]> {
    let [x, y] = *TRIANGLE_POSITIONS.get(vertex_index as usize)?;
    Some([x, y, 0.0, 1.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse() -> naga::Module {
        naga::front::wgsl::parse_str(TRIANGLE_WGSL).expect("embedded WGSL parses")
    }

    fn entry<'m>(module: &'m naga::Module, name: &str) -> &'m naga::EntryPoint {
        module
            .entry_points
            .iter()
            .find(|ep| ep.name == name)
            .unwrap_or_else(|| panic!("missing entry point {name}"))
    }

    /// Flattens a constant float expression (literals, negations, composes)
    /// into its scalar components, in order.
    fn scalars(function: &naga::Function, expr: naga::Handle<naga::Expression>) -> Vec<f32> {
        match &function.expressions[expr] {
            naga::Expression::Literal(naga::Literal::F32(v)) => vec![*v],
            naga::Expression::Literal(naga::Literal::AbstractFloat(v)) => vec![*v as f32],
            naga::Expression::Unary {
                op: naga::UnaryOperator::Negate,
                expr,
            } => scalars(function, *expr).into_iter().map(|v| -v).collect(),
            naga::Expression::Compose { components, .. } => components
                .iter()
                .flat_map(|c| scalars(function, *c))
                .collect(),
            other => panic!("not a constant float expression: {other:?}"),
        }
    }

    /// Value stored into the local named `name`: its initializer, or the
    /// first top-level store to it.
    fn local_value(function: &naga::Function, name: &str) -> naga::Handle<naga::Expression> {
        let (local, var) = function
            .local_variables
            .iter()
            .find(|(_, var)| var.name.as_deref() == Some(name))
            .unwrap_or_else(|| panic!("missing local {name}"));
        if let Some(init) = var.init {
            return init;
        }
        function
            .body
            .iter()
            .find_map(|stmt| match stmt {
                naga::Statement::Store { pointer, value } => {
                    match function.expressions[*pointer] {
                        naga::Expression::LocalVariable(l) if l == local => Some(*value),
                        _ => None,
                    }
                }
                _ => None,
            })
            .unwrap_or_else(|| panic!("local {name} is never stored"))
    }

    fn returned(function: &naga::Function) -> naga::Handle<naga::Expression> {
        function
            .body
            .iter()
            .find_map(|stmt| match stmt {
                naga::Statement::Return { value } => *value,
                _ => None,
            })
            .expect("function returns a value")
    }

    // ── source ────────────────────────────────────────────────────────────

    #[test]
    fn wgsl_validates() {
        let module = parse();
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        );
        validator.validate(&module).expect("embedded WGSL validates");
    }

    #[test]
    fn exactly_two_entry_points() {
        assert_eq!(parse().entry_points.len(), 2);
    }

    #[test]
    fn vertex_entry_reads_vertex_index_and_writes_position() {
        let module = parse();
        let vs = entry(&module, VERTEX_ENTRY);
        assert_eq!(vs.stage, naga::ShaderStage::Vertex);

        let args = &vs.function.arguments;
        assert_eq!(args.len(), 1);
        assert_eq!(
            args[0].binding,
            Some(naga::Binding::BuiltIn(naga::BuiltIn::VertexIndex))
        );

        let result = vs.function.result.as_ref().expect("vs returns a value");
        assert!(matches!(
            result.binding,
            Some(naga::Binding::BuiltIn(naga::BuiltIn::Position { .. }))
        ));
    }

    #[test]
    fn fragment_entry_takes_no_input_and_writes_location_zero() {
        let module = parse();
        let fs = entry(&module, FRAGMENT_ENTRY);
        assert_eq!(fs.stage, naga::ShaderStage::Fragment);
        assert!(fs.function.arguments.is_empty());

        let result = fs.function.result.as_ref().expect("fs returns a value");
        assert!(matches!(
            result.binding,
            Some(naga::Binding::Location { location: 0, .. })
        ));
    }

    // ── shader values ─────────────────────────────────────────────────────

    #[test]
    fn vertex_positions_match_triangle_positions() {
        let module = parse();
        let vs = &entry(&module, VERTEX_ENTRY).function;

        let positions = scalars(vs, local_value(vs, "positions"));
        assert_eq!(positions, TRIANGLE_POSITIONS.as_flattened());
    }

    #[test]
    fn vertex_output_has_z_zero_w_one() {
        let module = parse();
        let vs = &entry(&module, VERTEX_ENTRY).function;

        let naga::Expression::Compose { components, .. } = &vs.expressions[returned(vs)] else {
            panic!("vs does not return a constructed vec4");
        };
        assert_eq!(components.len(), 3);
        assert_eq!(scalars(vs, components[1]), [0.0]);
        assert_eq!(scalars(vs, components[2]), [1.0]);
    }

    #[test]
    fn fragment_output_matches_triangle_color() {
        let module = parse();
        let fs = &entry(&module, FRAGMENT_ENTRY).function;

        assert_eq!(scalars(fs, returned(fs)), TRIANGLE_COLOR);
    }

    // ── clip_position ─────────────────────────────────────────────────────

    #[test]
    fn clip_position_top() {
        assert_eq!(clip_position(0), Some([0.0, 0.5, 0.0, 1.0]));
    }

    #[test]
    fn clip_position_bottom_left() {
        assert_eq!(clip_position(1), Some([-0.5, -0.5, 0.0, 1.0]));
    }

    #[test]
    fn clip_position_bottom_right() {
        assert_eq!(clip_position(2), Some([0.5, -0.5, 0.0, 1.0]));
    }

    #[test]
    fn clip_position_out_of_range() {
        assert_eq!(clip_position(VERTEX_COUNT), None);
    }

    #[test]
    fn triangle_color_is_opaque_red() {
        assert_eq!(TRIANGLE_COLOR, [1.0, 0.0, 0.0, 1.0]);
    }
}
