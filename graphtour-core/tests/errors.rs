use graphtour_core::{GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::VertexOutOfRange { vertex: 5, vertex_count: 3 },
    GraphErrorCode::VertexOutOfRange,
    "GRAPH_VERTEX_OUT_OF_RANGE",
)]
#[case(GraphError::SelfLoop { vertex: 1 }, GraphErrorCode::SelfLoop, "GRAPH_SELF_LOOP")]
#[case(
    GraphError::AsymmetricEdge { from: 0, to: 2 },
    GraphErrorCode::AsymmetricEdge,
    "GRAPH_ASYMMETRIC_EDGE",
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(expected.to_string(), code);
}

#[rstest]
#[case(
    GeneratorError::VertexCountTooSmall { got: 10, minimum: 11 },
    GeneratorErrorCode::VertexCountTooSmall,
    "GENERATOR_VERTEX_COUNT_TOO_SMALL",
)]
#[case(
    GeneratorError::SaturationOutOfRange { got: 120 },
    GeneratorErrorCode::SaturationOutOfRange,
    "GENERATOR_SATURATION_OUT_OF_RANGE",
)]
#[case(
    GeneratorError::InvalidParameters { reason: "bad".into() },
    GeneratorErrorCode::InvalidParameters,
    "GENERATOR_INVALID_PARAMETERS",
)]
fn returns_expected_generator_code(
    #[case] error: GeneratorError,
    #[case] expected: GeneratorErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
}

#[test]
fn generator_messages_name_the_limits() {
    let err = GeneratorError::VertexCountTooSmall { got: 4, minimum: 11 };
    assert_eq!(err.to_string(), "vertex count must be at least 11 (got 4)");
}
