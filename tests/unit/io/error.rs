//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use blueprintart::ArtError;
    use blueprintart::io::configuration::SUPPORTED_CELL_HEIGHTS;
    use blueprintart::io::error::{invalid_blueprint, unsupported_cell_width};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ArtError::FileSystem {
            path: "/tmp/smelter.txt".into(),
            operation: "open",
            source: io_error,
        };
        assert!(error.source().is_some());

        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(ArtError::from(json_error).source().is_some());

        assert!(ArtError::UnsupportedCellHeight { height: 7 }.source().is_none());
    }

    // Tests cell size errors name the offending values
    // Verified by omitting the height from the width message
    #[test]
    fn test_cell_size_messages() {
        let height = ArtError::UnsupportedCellHeight { height: 7 }.to_string();
        assert!(height.contains("height 7"));
        assert!(height.contains("1, 2, 3"));
        for supported in SUPPORTED_CELL_HEIGHTS {
            assert!(height.contains(&supported.to_string()));
        }

        let width = unsupported_cell_width(2, 3, &"too narrow").to_string();
        assert!(width.contains("width 2"));
        assert!(width.contains("height 3"));
        assert!(width.contains("too narrow"));
    }

    // Tests rendering consistency errors carry their positions and content
    // Verified by omitting the screen row from the message
    #[test]
    fn test_rendering_messages() {
        let emission = ArtError::EmptyEmission {
            screen_x: 4,
            screen_y: 9,
        }
        .to_string();
        assert!(emission.contains("4,9"));

        let padding = ArtError::PaddingLength {
            content: "abc".to_owned(),
            width: 5,
        }
        .to_string();
        assert!(padding.contains("\"abc\""));
        assert!(padding.contains("width 5"));

        let indicator = ArtError::UnsupportedIndicator { indicator: '>' }.to_string();
        assert!(indicator.contains("'>'"));
    }

    // Tests decoding errors describe the input problem
    // Verified by dropping the reason from the message
    #[test]
    fn test_decoding_messages() {
        let blueprint = invalid_blueprint(&"input is empty").to_string();
        assert_eq!(blueprint, "Invalid blueprint: input is empty");

        let version = ArtError::UnsupportedVersion { found: '1' }.to_string();
        assert!(version.contains("'1'"));
        assert!(version.contains("'{'"));
    }

    // Tests file system errors include the path and operation
    // Verified by omitting the path from the message
    #[test]
    fn test_file_system_message() {
        let error = ArtError::FileSystem {
            path: "/tmp/smelter.txt".into(),
            operation: "open",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let message = error.to_string();
        assert!(message.contains("/tmp/smelter.txt"));
        assert!(message.contains("open"));
        assert!(message.contains("file not found"));
    }

    // Tests conversion to io::Error keeps I/O sources and wraps everything else
    // Verified by wrapping file system errors a second time
    #[test]
    fn test_into_io_error() {
        let error = ArtError::FileSystem {
            path: "<stream>".into(),
            operation: "stream",
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
        };
        let io_error = std::io::Error::from(error);
        assert_eq!(io_error.kind(), std::io::ErrorKind::BrokenPipe);

        let wrapped = std::io::Error::from(ArtError::UnsupportedCellHeight { height: 0 });
        assert_eq!(wrapped.kind(), std::io::ErrorKind::Other);
        assert!(matches!(
            wrapped.downcast::<ArtError>(),
            Ok(ArtError::UnsupportedCellHeight { height: 0 })
        ));
    }

    // Tests conversion from io::Error marks the error as a stream failure
    // Verified by dropping the source during conversion
    #[test]
    fn test_from_io_error() {
        let error = ArtError::from(std::io::Error::other("reset"));
        match error {
            ArtError::FileSystem {
                operation, source, ..
            } => {
                assert_eq!(operation, "stream");
                assert_eq!(source.to_string(), "reset");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
