#[cfg(test)]
mod tests {
    use crate::camera::FacingMode;
    use crate::error::*;

    #[test]
    fn test_camera_unavailable_rear() {
        let err = ViewerError::camera(FacingMode::Environment, "NotFoundError");
        assert_eq!(
            err.to_string(),
            "Camera unavailable (environment): NotFoundError"
        );
    }

    #[test]
    fn test_camera_unavailable_front() {
        let err = ViewerError::camera(FacingMode::User, "NotAllowedError");
        assert_eq!(err.to_string(), "Camera unavailable (user): NotAllowedError");
    }

    #[test]
    fn test_missing_element() {
        let err = ViewerError::MissingElement("#viewer".to_string());
        assert_eq!(err.to_string(), "Missing element: #viewer");
    }

    #[test]
    fn test_dom_error() {
        let err = ViewerError::Dom("appendChild failed".to_string());
        assert_eq!(err.to_string(), "DOM error: appendChild failed");
    }

    #[test]
    fn test_config_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ViewerError = json_err.into();
        assert!(err.to_string().starts_with("Config error:"));
    }
}
