use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("skill level {0} is outside 0..=100")]
    SkillLevelOutOfRange(u8),
}

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("couldn't load leptos configuration: {0}")]
    Config(#[from] leptos::config::errors::LeptosConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::config::errors::LeptosConfigError;

    #[test]
    fn test_config_error_converts() {
        let err = ServeError::from(LeptosConfigError::ConfigSectionNotFound);
        assert!(matches!(err, ServeError::Config(_)));
        assert!(err.to_string().starts_with("couldn't load leptos configuration"));
    }
}
