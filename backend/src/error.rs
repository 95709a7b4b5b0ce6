use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Error while building OpenGL window: {0}")]
    Window(String),

    #[error("OpenGL context error: {0}")]
    GlContext(String),

    #[error("shader error: {0}")]
    Shader(String),

    #[error("loading image {path} error: {reason}")]
    Image { path: String, reason: String },
}

// sdl2 reports most failures as plain strings
impl From<String> for BackendError {
    fn from(msg: String) -> Self {
        BackendError::Sdl(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdl_strings_convert_into_sdl_variant() {
        let err: BackendError = String::from("video subsystem unavailable").into();
        assert!(matches!(err, BackendError::Sdl(_)));
        assert_eq!(err.to_string(), "SDL error: video subsystem unavailable");
    }

    #[test]
    fn image_error_names_the_file() {
        let err = BackendError::Image {
            path: "mia.png".to_string(),
            reason: "can't fopen".to_string(),
        };
        assert_eq!(err.to_string(), "loading image mia.png error: can't fopen");
    }
}
