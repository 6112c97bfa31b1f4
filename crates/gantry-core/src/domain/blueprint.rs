//! The fixed layout of every generated project.
//!
//! The skeleton does not depend on the models: the same directories and the
//! same ten project-level files are produced every time, plus three files
//! per model named after its `snake_name`.

/// Directories created up front, including ones that may stay empty.
pub const SKELETON_DIRS: [&str; 10] = [
    "cmd",
    "pkg/api",
    "pkg/config",
    "pkg/database",
    "pkg/models",
    "pkg/handlers",
    "pkg/middlewares",
    "api",
    "migrations",
    "docs",
];

/// A file rendered once per project against every model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectArtifact {
    EntryPoint,
    ConfigLoader,
    Database,
    Server,
    LoggerMiddleware,
    EnvFile,
    Manifest,
    Readme,
    Dockerfile,
    GitIgnore,
}

impl ProjectArtifact {
    pub const ALL: [Self; 10] = [
        Self::EntryPoint,
        Self::ConfigLoader,
        Self::Database,
        Self::Server,
        Self::LoggerMiddleware,
        Self::EnvFile,
        Self::Manifest,
        Self::Readme,
        Self::Dockerfile,
        Self::GitIgnore,
    ];

    pub const fn template_id(self) -> &'static str {
        match self {
            Self::EntryPoint => "main",
            Self::ConfigLoader => "config",
            Self::Database => "database",
            Self::Server => "server",
            Self::LoggerMiddleware => "logger",
            Self::EnvFile => "env",
            Self::Manifest => "gomod",
            Self::Readme => "readme",
            Self::Dockerfile => "dockerfile",
            Self::GitIgnore => "gitignore",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::EntryPoint => "cmd/main.go",
            Self::ConfigLoader => "pkg/config/config.go",
            Self::Database => "pkg/database/database.go",
            Self::Server => "pkg/api/server.go",
            Self::LoggerMiddleware => "pkg/middlewares/logger.go",
            Self::EnvFile => ".env",
            Self::Manifest => "go.mod",
            Self::Readme => "README.md",
            Self::Dockerfile => "Dockerfile",
            Self::GitIgnore => ".gitignore",
        }
    }
}

/// A file rendered once per model against that model alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelArtifact {
    Model,
    Handler,
    ApiSpec,
}

impl ModelArtifact {
    pub const ALL: [Self; 3] = [Self::Model, Self::Handler, Self::ApiSpec];

    pub const fn template_id(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Handler => "handler",
            Self::ApiSpec => "apispec",
        }
    }

    /// Output path with `{}` standing in for the model's snake name.
    pub const fn path_pattern(self) -> &'static str {
        match self {
            Self::Model => "pkg/models/{}.go",
            Self::Handler => "pkg/handlers/{}.go",
            Self::ApiSpec => "api/{}.yaml",
        }
    }

    pub fn path(self, snake_name: &str) -> String {
        self.path_pattern().replace("{}", snake_name)
    }
}

/// Number of files a project with `model_count` models contains.
pub const fn expected_file_count(model_count: usize) -> usize {
    ProjectArtifact::ALL.len() + ModelArtifact::ALL.len() * model_count
}
