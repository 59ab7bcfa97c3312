//! Shader sources and build diagnostics.
//!
//! The vertex and fragment stages are kept as separate WGSL sources, a
//! mapping from stage kind to source text, so tests can substitute either
//! one. Each stage is checked on its own, then both are combined into the
//! single module handed to the GPU. Build problems never abort the
//! program; they are captured in a [`BuildReport`] and logged.

use naga::front::wgsl;
use naga::valid::{Capabilities, ValidationFlags, Validator};

pub const VERTEX_SOURCE: &str = include_str!("quad_vs.wgsl");
pub const FRAGMENT_SOURCE: &str = include_str!("quad_fs.wgsl");

/// Shader stage kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
        }
    }
}

/// WGSL source text for both stages.
#[derive(Debug, Clone)]
pub struct ShaderSet {
    vertex: String,
    fragment: String,
}

impl Default for ShaderSet {
    fn default() -> Self {
        Self {
            vertex: VERTEX_SOURCE.into(),
            fragment: FRAGMENT_SOURCE.into(),
        }
    }
}

impl ShaderSet {
    /// Source text for one stage.
    pub fn source(&self, stage: Stage) -> &str {
        match stage {
            Stage::Vertex => &self.vertex,
            Stage::Fragment => &self.fragment,
        }
    }

    /// Replaces the source for one stage.
    pub fn with_source(mut self, stage: Stage, source: impl Into<String>) -> Self {
        match stage {
            Stage::Vertex => self.vertex = source.into(),
            Stage::Fragment => self.fragment = source.into(),
        }
        self
    }

    /// Combined module containing both entry points.
    pub fn module_source(&self) -> String {
        format!("{}\n{}", self.vertex, self.fragment)
    }

    /// Checks each stage independently, then the combined module.
    pub fn build(&self) -> BuildReport {
        let stages = [
            StageReport::check(Stage::Vertex, &self.vertex),
            StageReport::check(Stage::Fragment, &self.fragment),
        ];
        let (link_ok, link_log) = match check_source(&self.module_source()) {
            Ok(()) => (true, String::new()),
            Err(log) => (false, log),
        };
        BuildReport {
            stages,
            link_ok,
            link_log,
        }
    }
}

/// Outcome of checking one shader stage.
#[derive(Debug, Clone)]
pub struct StageReport {
    pub stage: Stage,
    pub ok: bool,
    /// Parser or validator output; empty when the stage is clean.
    pub log: String,
}

impl StageReport {
    fn check(stage: Stage, source: &str) -> Self {
        match check_source(source) {
            Ok(()) => Self {
                stage,
                ok: true,
                log: String::new(),
            },
            Err(log) => Self { stage, ok: false, log },
        }
    }
}

/// Outcome of checking both stages and the combined module.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub stages: [StageReport; 2],
    pub link_ok: bool,
    pub link_log: String,
}

impl BuildReport {
    pub fn all_ok(&self) -> bool {
        self.link_ok && self.stages.iter().all(|s| s.ok)
    }

    /// Writes one log line per build step. The diagnostic text is only
    /// shown for failed steps.
    pub fn emit(&self) {
        for stage in &self.stages {
            if stage.ok {
                log::info!("{} shader compiled", stage.stage.name());
            } else {
                log::error!("{} shader failed:\n{}", stage.stage.name(), stage.log);
            }
        }
        if self.link_ok {
            log::info!("shader module linked");
        } else {
            log::error!("shader module link failed:\n{}", self.link_log);
        }
    }
}

fn check_source(source: &str) -> Result<(), String> {
    let module = match wgsl::parse_str(source) {
        Ok(module) => module,
        Err(err) => return Err(err.emit_to_string(source)),
    };

    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::all());
    match validator.validate(&module) {
        Ok(_) => Ok(()),
        Err(err) => Err(format!("{}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sources_are_clean() {
        let report = ShaderSet::default().build();
        assert!(report.all_ok());
        assert!(report.stages.iter().all(|s| s.log.is_empty()));
        assert!(report.link_log.is_empty());
    }

    #[test]
    fn broken_fragment_is_reported_not_fatal() {
        let set = ShaderSet::default().with_source(Stage::Fragment, "this is not wgsl");
        let report = set.build();

        assert!(!report.all_ok());
        let frag = &report.stages[1];
        assert_eq!(frag.stage, Stage::Fragment);
        assert!(!frag.ok);
        assert!(!frag.log.is_empty());

        // The vertex stage is unaffected, the link step sees the damage.
        assert!(report.stages[0].ok);
        assert!(!report.link_ok);
    }

    #[test]
    fn substituted_source_is_used() {
        let custom = "@vertex\nfn vs_main() -> @builtin(position) vec4<f32> {\n    return vec4<f32>(0.0, 0.0, 0.0, 1.0);\n}\n";
        let set = ShaderSet::default().with_source(Stage::Vertex, custom);

        assert_eq!(set.source(Stage::Vertex), custom);
        assert!(set.module_source().contains(custom));
        assert!(set.build().all_ok());
    }

    #[test]
    fn stages_validate_standalone() {
        assert!(check_source(VERTEX_SOURCE).is_ok());
        assert!(check_source(FRAGMENT_SOURCE).is_ok());
    }
}
