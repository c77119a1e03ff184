//! Tests for error messages, sources and conversions

#[cfg(test)]
mod tests {
    use roomcarve::GenerationError;
    use roomcarve::io::error::{file_system_error, invalid_parameter, out_of_range};
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    // Tests invalid parameter messages carry name, value and reason
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_message() {
        let err = invalid_parameter("room_min_size", &5, &"must be less than room_max_size (3)");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'room_min_size' = '5': must be less than room_max_size (3)"
        );
        assert!(err.source().is_none());
    }

    // Tests out-of-range errors keep the requested cell and grid size
    // Verified by swapping width and height in the constructor
    #[test]
    fn test_out_of_range_fields() {
        let err = out_of_range(9, -2, 8, 6);
        assert!(matches!(
            err,
            GenerationError::OutOfRange {
                x: 9,
                y: -2,
                width: 8,
                height: 6
            }
        ));
        assert!(err.to_string().contains("(9, -2)"));
        assert!(err.to_string().contains("8x6"));
    }

    // Tests stage order messages name the attempted operation and both stages
    // Verified by printing expected in place of actual
    #[test]
    fn test_stage_order_message() {
        let err = GenerationError::StageOrder {
            operation: "prune_walls",
            expected: "CorridorsCarved",
            actual: "Configured",
        };
        assert_eq!(
            err.to_string(),
            "Cannot run prune_walls in stage Configured (requires CorridorsCarved)"
        );
    }

    // Tests file system errors expose the underlying I/O error
    // Verified by returning None from source
    #[test]
    fn test_file_system_error_source() {
        let err = file_system_error(
            "maps/out.png",
            "create directory",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert!(err.source().is_some());
        let message = err.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("maps/out.png"));
        assert!(matches!(
            err,
            GenerationError::FileSystem { ref path, .. } if *path == PathBuf::from("maps/out.png")
        ));
    }

    // Tests conversion from a bare I/O error
    // Verified by mapping I/O errors to InvalidParameter
    #[test]
    fn test_from_io_error() {
        let err: GenerationError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(
            err,
            GenerationError::FileSystem {
                operation: "unknown",
                ..
            }
        ));
    }
}
