use flt_toml::FltConfig;

/// Values shared by every generated file.
#[derive(Clone, Debug)]
pub struct ProjectContext {
    /// Version of flt-tool that generated the files.
    pub version: &'static str,
    pub project_name: String,
    pub project_dir: String,
    pub vivado_version: String,
    pub part: String,
    /// Resolved source files, forward-slash separated.
    pub src_files: Vec<String>,
}

impl ProjectContext {
    pub fn new(project_name: &str, config: &FltConfig, src_files: Vec<String>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            project_name: project_name.to_string(),
            project_dir: config.project_dir.clone(),
            vivado_version: config.vivado_version.clone(),
            part: config.part.clone(),
            src_files,
        }
    }
}
