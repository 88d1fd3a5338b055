//! Error macros for shortpath

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::PathError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a vertex id outside the graph
#[macro_export]
macro_rules! ensure_vertex {
    ($vertex:expr, $num_vertices:expr) => {
        if $vertex >= $num_vertices {
            return Err($crate::error::PathError::invalid_vertex(
                $vertex,
                $num_vertices,
            ));
        }
    };
}
