use std::path::PathBuf;

/// Member export produced by the old management system
pub const DEFAULT_INPUT_PATH: &str = "회원정보_20260110.csv";

/// Where the app's loader picks migrated members up
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/migrated_members.json";

/// Paths for one migration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl MigrationConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        MigrationConfig {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        MigrationConfig::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = MigrationConfig::default();
        assert_eq!(config.input_path, PathBuf::from("회원정보_20260110.csv"));
        assert_eq!(
            config.output_path,
            PathBuf::from("src/data/migrated_members.json")
        );
    }
}
